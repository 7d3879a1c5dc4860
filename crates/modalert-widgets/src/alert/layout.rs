#![forbid(unsafe_code)]

//! Manual frame layout of the alert.
//!
//! Layout is a single top-to-bottom pass: a vertical cursor starts at the
//! top inset and every present element adds its measured height plus its
//! fixed gap. The final cursor is the container height.
//!
//! # Invariants
//!
//! 1. `container.height == background.height` and equals the sum of the
//!    present elements' heights and gaps, plus the top inset, one padding
//!    below the content, and the button row when buttons are shown.
//! 2. The message frame never exceeds `message_max_height`; taller content
//!    makes it scrollable instead of growing the container.
//! 3. Element frames are container-local; button label frames are local to
//!    their button. Only `container` is in host coordinates.

use bitflags::bitflags;
use modalert_core::{Rect, Size};
use modalert_style::Font;
use modalert_text::{MeasureOptions, measure};

use crate::alert::config::AlertMetrics;
use crate::alert::style::AlertStyle;

bitflags! {
    /// Optional elements present in an alert. The title is always present.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AlertElements: u8 {
        const ICON = 1 << 0;
        const TITLE_ICON = 1 << 1;
        const MESSAGE = 1 << 2;
        const TIMER = 1 << 3;
        const DISMISS_BUTTON = 1 << 4;
        const CANCEL_BUTTON = 1 << 5;
    }
}

impl AlertElements {
    /// Whether a button row is shown.
    #[must_use]
    pub fn has_buttons(self) -> bool {
        self.contains(Self::DISMISS_BUTTON)
    }
}

/// Everything the layout pass reads.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub metrics: &'a AlertMetrics,
    pub style: &'a AlertStyle,
    /// Host bounds the container is centered in.
    pub viewport: Rect,
    /// Only `ICON`, `TITLE_ICON` and the button flags are read; message and
    /// timer presence follow from their text.
    pub elements: AlertElements,
    pub title: &'a str,
    pub message: Option<&'a str>,
    pub timer: Option<&'a str>,
    /// Paragraph minimum line height applied to the message.
    pub min_line_height: Option<f32>,
}

/// Message text view frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageFrame {
    pub frame: Rect,
    /// Height of the full text, insets included.
    pub content_height: f32,
    /// Content is taller than the frame.
    pub scrollable: bool,
}

impl MessageFrame {
    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.frame.height).max(0.0)
    }
}

/// Frames of the button row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRow {
    /// Divider background drawn one point above the buttons.
    pub divider: Rect,
    pub dismiss: Rect,
    /// Local to `dismiss`.
    pub dismiss_label: Rect,
    pub cancel: Option<Rect>,
    /// Local to `cancel`.
    pub cancel_label: Option<Rect>,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertLayout {
    /// Container frame in host coordinates.
    pub container: Rect,
    pub background: Rect,
    pub icon: Option<Rect>,
    pub title_icon: Option<Rect>,
    pub title: Rect,
    pub message: Option<MessageFrame>,
    pub timer: Option<Rect>,
    pub buttons: Option<ButtonRow>,
}

impl AlertLayout {
    /// Height of the container.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.container.height
    }

    /// Elements that received a frame.
    #[must_use]
    pub fn elements(&self) -> AlertElements {
        let mut elements = AlertElements::empty();
        elements.set(AlertElements::ICON, self.icon.is_some());
        elements.set(AlertElements::TITLE_ICON, self.title_icon.is_some());
        elements.set(AlertElements::MESSAGE, self.message.is_some());
        elements.set(AlertElements::TIMER, self.timer.is_some());
        if let Some(row) = &self.buttons {
            elements.insert(AlertElements::DISMISS_BUTTON);
            elements.set(AlertElements::CANCEL_BUTTON, row.cancel.is_some());
        }
        elements
    }
}

fn label_height(text: &str, font: &Font, width: f32, limit: f32, min_lines: usize) -> f32 {
    let options = MeasureOptions::new().max_height(limit).min_lines(min_lines);
    measure(text, font, width, &options).height.ceil()
}

/// Full height of the message text view for `width`, insets included.
#[must_use]
pub fn message_content_height(
    text: &str,
    font: &Font,
    width: f32,
    metrics: &AlertMetrics,
    min_line_height: Option<f32>,
) -> f32 {
    let text_width = (width - metrics.message_line_padding * 2.0).max(0.0);
    let options = MeasureOptions::new()
        .min_line_height(min_line_height)
        .min_lines(1);
    let text = measure(text, font, text_width, &options);
    (text.height + metrics.message_inset * 2.0).ceil()
}

/// Run the layout pass.
#[must_use]
pub fn compute(input: &LayoutInput<'_>) -> AlertLayout {
    let m = input.metrics;
    let style = input.style;
    let content_width = m.content_width();
    let mut y = m.top_inset;

    let icon = input.elements.contains(AlertElements::ICON).then(|| {
        let frame = Rect::new((m.width - m.icon_size) / 2.0, y, m.icon_size, m.icon_size);
        y += m.icon_size + m.icon_gap;
        frame
    });

    let mut title_x = m.padding;
    let mut title_width = content_width;
    let title_icon = input.elements.contains(AlertElements::TITLE_ICON).then(|| {
        title_x += m.title_icon_shift();
        title_width = (title_width - m.title_icon_shift()).max(0.0);
        Rect::new(
            m.padding + m.title_icon_inset,
            y + m.title_icon_inset,
            m.title_icon_size,
            m.title_icon_size,
        )
    });
    let title_height = label_height(input.title, &style.title.font, title_width, m.title_max_height, 0);
    let title = Rect::new(title_x, y, title_width, title_height);
    y += title_height + m.title_gap;

    let message = input.message.map(|text| {
        let content_height =
            message_content_height(text, &style.message.font, content_width, m, input.min_line_height);
        let scrollable = content_height > m.message_max_height;
        let height = content_height.min(m.message_max_height);
        let frame = Rect::new(m.padding, y, content_width, height);
        y += height;
        MessageFrame {
            frame,
            content_height,
            scrollable,
        }
    });

    let timer = input.timer.map(|text| {
        let height = label_height(text, &style.timer.font, content_width, m.timer_max_height, 1);
        let frame = Rect::new(m.padding, y, content_width, height);
        y += height;
        frame
    });

    y += m.padding;
    let buttons = input.elements.has_buttons().then(|| {
        let row = button_row(m, y, input.elements.contains(AlertElements::CANCEL_BUTTON));
        y += m.button_height;
        row
    });

    let size = Size::new(m.width, y);
    AlertLayout {
        container: input.viewport.centered(size),
        background: Rect::from_size(size),
        icon,
        title_icon,
        title,
        message,
        timer,
        buttons,
    }
}

fn button_row(m: &AlertMetrics, y: f32, with_cancel: bool) -> ButtonRow {
    let label = |button_width: f32| {
        Rect::new(
            m.padding,
            m.button_height / 2.0 - 15.0,
            (button_width - m.padding * 2.0).max(0.0),
            30.0,
        )
    };
    let divider = Rect::new(0.0, y - 1.0, m.width, m.button_height + 1.0);

    if with_cancel {
        let half = m.width / 2.0;
        ButtonRow {
            divider,
            dismiss: Rect::new(half, y, half, m.button_height),
            dismiss_label: label(half),
            cancel: Some(Rect::new(0.0, y, half - 0.5, m.button_height)),
            cancel_label: Some(label(half)),
        }
    } else {
        ButtonRow {
            divider,
            dismiss: Rect::new(0.0, y, m.width, m.button_height),
            dismiss_label: label(m.width),
            cancel: None,
            cancel_label: None,
        }
    }
}
