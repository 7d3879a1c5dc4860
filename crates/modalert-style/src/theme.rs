#![forbid(unsafe_code)]

//! Immutable style values for the alert's text, buttons, and panel.
//!
//! Every mutation produces a new value (`with_*`); the widget re-applies the
//! whole value and re-runs layout, so no stale partial style can survive a
//! layout pass.

use crate::color::Rgba;
use crate::font::{Font, FontWeight};

/// Text color theme applied to all alert text at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextColorTheme {
    #[default]
    Dark,
    Light,
}

impl TextColorTheme {
    /// Black at 0.75 alpha.
    pub const DARK_TEXT: Rgba = Rgba::rgba(0, 0, 0, 191);
    /// White at 0.9 alpha.
    pub const LIGHT_TEXT: Rgba = Rgba::rgba(255, 255, 255, 230);

    #[must_use]
    pub const fn text_color(self) -> Rgba {
        match self {
            Self::Dark => Self::DARK_TEXT,
            Self::Light => Self::LIGHT_TEXT,
        }
    }
}

/// Font + color for a text element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font: Font,
    pub color: Rgba,
}

impl TextStyle {
    /// Default body text color (`#4B3C32`).
    pub const BODY_COLOR: Rgba = Rgba::rgb(0x4B, 0x3C, 0x32);

    #[must_use]
    pub fn new(font: Font, color: Rgba) -> Self {
        Self { font, color }
    }

    /// Default title: 16pt semibold system font.
    #[must_use]
    pub fn title() -> Self {
        Self::new(Font::system(16.0, FontWeight::Semibold), Self::BODY_COLOR)
    }

    /// Default message: 16pt regular system font.
    #[must_use]
    pub fn message() -> Self {
        Self::new(Font::system(16.0, FontWeight::Regular), Self::BODY_COLOR)
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

/// Styles for the button row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonStyle {
    /// Dismiss (primary) label font.
    pub font: Font,
    /// Cancel label font.
    pub cancel_font: Font,
    /// Label color for both buttons.
    pub text_color: Rgba,
    /// Button fill in the normal state.
    pub fill: Rgba,
    /// Hairline/divider fill behind the row.
    pub divider: Rgba,
}

impl ButtonStyle {
    /// Default label color (`#F18732`).
    pub const LABEL_COLOR: Rgba = Rgba::rgb(0xF1, 0x87, 0x32);
    /// Default divider (`#E7E2DE` at 0.7 alpha).
    pub const DIVIDER: Rgba = Rgba::rgba(0xE7, 0xE2, 0xDE, 179);

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_cancel_font(mut self, font: Font) -> Self {
        self.cancel_font = font;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = color;
        self
    }

    /// Fill of a pressed button over a panel of `background`.
    #[must_use]
    pub fn highlight_fill(&self, background: Rgba) -> Rgba {
        background.adjust_brightness(0.9)
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            font: Font::system(17.0, FontWeight::Regular),
            cancel_font: Font::system(17.0, FontWeight::Semibold),
            text_color: Self::LABEL_COLOR,
            fill: Rgba::WHITE,
            divider: Self::DIVIDER,
        }
    }
}

/// Panel background and corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewStyle {
    pub background: Rgba,
    pub corner_radius: f32,
}

impl ViewStyle {
    /// Default panel color (`#F2F4F4`).
    pub const BACKGROUND: Rgba = Rgba::rgb(0xF2, 0xF4, 0xF4);
    pub const CORNER_RADIUS: f32 = 4.0;

    #[must_use]
    pub const fn new(background: Rgba, corner_radius: f32) -> Self {
        Self {
            background,
            corner_radius,
        }
    }
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self::new(Self::BACKGROUND, Self::CORNER_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_colors() {
        assert_eq!(TextColorTheme::Dark.text_color(), Rgba::from_hex(0x000000, 0.75));
        assert_eq!(TextColorTheme::Light.text_color().r(), 255);
        assert_eq!(TextColorTheme::default(), TextColorTheme::Dark);
    }

    #[test]
    fn default_text_styles() {
        let title = TextStyle::title();
        assert_eq!(title.font.weight(), FontWeight::Semibold);
        assert_eq!(title.font.size(), 16.0);
        assert_eq!(title.color, TextStyle::BODY_COLOR);
        assert_eq!(TextStyle::message().font.weight(), FontWeight::Regular);
    }

    #[test]
    fn with_color_returns_new_value() {
        let base = TextStyle::message();
        let recolored = base.clone().with_color(Rgba::WHITE);
        assert_eq!(base.color, TextStyle::BODY_COLOR);
        assert_eq!(recolored.color, Rgba::WHITE);
        assert_eq!(recolored.font, base.font);
    }

    #[test]
    fn button_defaults() {
        let style = ButtonStyle::default();
        assert_eq!(style.text_color, Rgba::from_hex(0xF18732, 1.0));
        assert_eq!(style.cancel_font.weight(), FontWeight::Semibold);
        let pressed = style.highlight_fill(ViewStyle::BACKGROUND);
        assert!(pressed.luma() < ViewStyle::BACKGROUND.luma());
    }
}
