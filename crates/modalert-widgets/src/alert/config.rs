#![forbid(unsafe_code)]

//! Show-time configuration and layout metrics.

use modalert_core::{Rect, Size};
use modalert_style::{ButtonStyle, Rgba, ViewStyle};
use web_time::Duration;

use crate::scene::TextAlignment;

/// Label used for the dismiss button when none is given.
pub const DEFAULT_BUTTON_TEXT: &str = "OK";

/// An opaque image reference with its intrinsic size.
///
/// The widget only positions images; decoding and drawing belong to the host.
/// `size` sets the aspect ratio the image keeps inside its layout slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    pub id: String,
    pub size: Size,
}

impl Image {
    #[must_use]
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }

    /// Largest frame with this image's aspect ratio that fits `slot`, centered.
    ///
    /// An image without an intrinsic size fills the slot.
    #[must_use]
    pub fn fit_in(&self, slot: Rect) -> Rect {
        if self.size.is_empty() {
            return slot;
        }
        let scale = (slot.width / self.size.width).min(slot.height / self.size.height);
        slot.centered(Size::new(self.size.width * scale, self.size.height * scale))
    }
}

/// Everything the caller decides when showing an alert.
///
/// `title` is the only required field.
///
/// # Example
///
/// ```ignore
/// let config = AlertConfig::new("Saved")
///     .message("Your changes are stored.")
///     .cancel_button_text("Undo")
///     .countdown(5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertConfig {
    pub title: String,
    pub message: Option<String>,
    /// Hide the button row; the alert is then dismissed by tapping outside it.
    pub no_buttons: bool,
    pub button_text: Option<String>,
    /// Adds a cancel button to the left of the dismiss button.
    pub cancel_button_text: Option<String>,
    /// Replaces the default button style.
    pub button_style: Option<ButtonStyle>,
    pub view_style: ViewStyle,
    pub icon: Option<Image>,
    pub title_icon: Option<Image>,
    /// Close automatically this long after the alert is fully presented.
    pub auto_dismiss: Option<Duration>,
    /// Seconds shown in the countdown label before the alert closes itself.
    pub countdown: Option<u32>,
    pub text_alignment: TextAlignment,
}

impl AlertConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            no_buttons: false,
            button_text: None,
            cancel_button_text: None,
            button_style: None,
            view_style: ViewStyle::default(),
            icon: None,
            title_icon: None,
            auto_dismiss: None,
            countdown: None,
            text_alignment: TextAlignment::Center,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn no_buttons(mut self, no_buttons: bool) -> Self {
        self.no_buttons = no_buttons;
        self
    }

    #[must_use]
    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_button_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_button_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = Some(style);
        self
    }

    #[must_use]
    pub fn view_style(mut self, style: ViewStyle) -> Self {
        self.view_style = style;
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Rgba) -> Self {
        self.view_style.background = color;
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.view_style.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn icon(mut self, image: Image) -> Self {
        self.icon = Some(image);
        self
    }

    #[must_use]
    pub fn title_icon(mut self, image: Image) -> Self {
        self.title_icon = Some(image);
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss = Some(delay);
        self
    }

    #[must_use]
    pub fn countdown(mut self, seconds: u32) -> Self {
        self.countdown = Some(seconds);
        self
    }

    #[must_use]
    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Whether the button row is shown.
    #[must_use]
    pub fn has_buttons(&self) -> bool {
        !self.no_buttons
    }

    /// Whether a cancel button is shown next to the dismiss button.
    #[must_use]
    pub fn has_cancel_button(&self) -> bool {
        self.has_buttons() && self.cancel_button_text.is_some()
    }

    /// Dismiss button label.
    #[must_use]
    pub fn dismiss_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT)
    }
}

/// Fixed dimensions of the alert layout, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertMetrics {
    pub width: f32,
    pub padding: f32,
    /// Gap between the title and the message.
    pub title_gap: f32,
    pub top_inset: f32,
    pub icon_size: f32,
    /// Gap below the icon.
    pub icon_gap: f32,
    pub title_icon_size: f32,
    /// Offset of the title icon from the padding corner.
    pub title_icon_inset: f32,
    /// Gap between the title icon and the title text.
    pub title_icon_gap: f32,
    pub title_max_height: f32,
    pub timer_max_height: f32,
    pub message_max_height: f32,
    /// Vertical inset of the message text view, top and bottom each.
    pub message_inset: f32,
    /// Line fragment padding of the message text view, left and right each.
    pub message_line_padding: f32,
    pub button_height: f32,
}

impl Default for AlertMetrics {
    fn default() -> Self {
        Self {
            width: 294.0,
            padding: 20.0,
            title_gap: 0.0,
            top_inset: 24.0,
            icon_size: 64.0,
            icon_gap: 16.0,
            title_icon_size: 27.0,
            title_icon_inset: 4.0,
            title_icon_gap: 16.0,
            title_max_height: 90.0,
            timer_max_height: 20.0,
            message_max_height: 274.0,
            message_inset: 8.0,
            message_line_padding: 5.0,
            button_height: 44.0,
        }
    }
}

impl AlertMetrics {
    /// Width available to text inside the padding.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        (self.width - self.padding * 2.0).max(0.0)
    }

    /// Horizontal shift of the title when a title icon is present.
    #[must_use]
    pub fn title_icon_shift(&self) -> f32 {
        self.title_icon_gap + self.title_icon_size
    }
}
