#![forbid(unsafe_code)]

//! The alert's complete style value.

use modalert_style::{ButtonStyle, Font, FontBook, TextColorTheme, TextStyle, ViewStyle};

/// Family used for the countdown label.
pub const TIMER_FONT_FAMILY: &str = "HelveticaNeue";

/// Which text element a font setter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontTarget {
    Title,
    Text,
    Button,
    Timer,
}

impl FontTarget {
    /// Point size used when a setter is called without one.
    #[must_use]
    pub const fn default_size(self) -> f32 {
        match self {
            Self::Title => 24.0,
            Self::Text => 16.0,
            Self::Button => 24.0,
            Self::Timer => 27.0,
        }
    }
}

/// Styles for every element of the alert.
///
/// Mutations return a new value; the alert swaps the whole value in and
/// re-runs layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertStyle {
    pub title: TextStyle,
    pub message: TextStyle,
    pub timer: TextStyle,
    pub buttons: ButtonStyle,
    pub view: ViewStyle,
}

impl AlertStyle {
    /// Default style, resolving the timer family through `fonts`.
    #[must_use]
    pub fn new(fonts: &FontBook) -> Self {
        let timer_font = fonts.resolve_or_system(TIMER_FONT_FAMILY, FontTarget::Timer.default_size());
        Self {
            title: TextStyle::title(),
            message: TextStyle::message(),
            timer: TextStyle::new(timer_font, TextColorTheme::Dark.text_color()),
            buttons: ButtonStyle::default(),
            view: ViewStyle::default(),
        }
    }

    #[must_use]
    pub fn with_buttons(mut self, buttons: ButtonStyle) -> Self {
        self.buttons = buttons;
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: ViewStyle) -> Self {
        self.view = view;
        self
    }

    /// Replace the font of `target`. Buttons get it on both labels.
    #[must_use]
    pub fn with_font(mut self, target: FontTarget, font: Font) -> Self {
        match target {
            FontTarget::Title => self.title = self.title.with_font(font),
            FontTarget::Text => self.message = self.message.with_font(font),
            FontTarget::Timer => self.timer = self.timer.with_font(font),
            FontTarget::Button => {
                self.buttons = self.buttons.with_cancel_font(font.clone()).with_font(font);
            }
        }
        self
    }

    /// Recolor all text with the theme color.
    ///
    /// Button labels are recolored even when the row is hidden; a hidden row
    /// emits no label nodes, so the color only shows once buttons are drawn.
    #[must_use]
    pub fn with_theme(mut self, theme: TextColorTheme) -> Self {
        let color = theme.text_color();
        self.title = self.title.with_color(color);
        self.message = self.message.with_color(color);
        self.timer = self.timer.with_color(color);
        self.buttons = self.buttons.with_text_color(color);
        self
    }
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self::new(&FontBook::default())
    }
}
