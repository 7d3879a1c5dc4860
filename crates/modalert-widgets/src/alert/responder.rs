#![forbid(unsafe_code)]

//! Post-show handle to a presented alert.

use std::cell::RefCell;
use std::rc::Weak;

use modalert_style::TextColorTheme;

use crate::alert::{Alert, AlertLayout, AlertState, FontTarget};

/// Handle returned by [`AlertView::show`](crate::AlertView::show).
///
/// The host owns the alert; the responder only holds a weak reference, so
/// every call after the alert is detached is a no-op.
#[derive(Debug, Clone)]
pub struct AlertResponder {
    alert: Weak<RefCell<Alert>>,
}

impl AlertResponder {
    pub(crate) fn new(alert: Weak<RefCell<Alert>>) -> Self {
        Self { alert }
    }

    /// Run `f` on the alert if it is still attached and not borrowed.
    fn with_alert<R>(&self, f: impl FnOnce(&mut Alert) -> R) -> Option<R> {
        let alert = self.alert.upgrade()?;
        let mut alert = alert.try_borrow_mut().ok()?;
        Some(f(&mut alert))
    }

    /// Whether the alert is still attached to its host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.alert.strong_count() > 0
    }

    /// Current state; `Closed` once detached.
    #[must_use]
    pub fn state(&self) -> AlertState {
        self.with_alert(|alert| alert.state())
            .unwrap_or(AlertState::Closed)
    }

    /// Snapshot of the current layout.
    #[must_use]
    pub fn layout(&self) -> Option<AlertLayout> {
        self.with_alert(|alert| alert.layout().clone())
    }

    /// Action run when the alert is dismissed with the close source.
    pub fn add_action(&self, action: impl FnOnce() + 'static) {
        self.with_alert(|alert| alert.add_action(action));
    }

    /// Action run when the alert is dismissed with the cancel source.
    pub fn add_cancel_action(&self, action: impl FnOnce() + 'static) {
        self.with_alert(|alert| alert.add_cancel_action(action));
    }

    pub fn set_title_font(&self, family: &str, size: Option<f32>) {
        self.with_alert(|alert| alert.set_font(FontTarget::Title, family, size));
    }

    pub fn set_text_font(&self, family: &str, size: Option<f32>) {
        self.with_alert(|alert| alert.set_font(FontTarget::Text, family, size));
    }

    pub fn set_button_font(&self, family: &str, size: Option<f32>) {
        self.with_alert(|alert| alert.set_font(FontTarget::Button, family, size));
    }

    pub fn set_timer_font(&self, family: &str, size: Option<f32>) {
        self.with_alert(|alert| alert.set_font(FontTarget::Timer, family, size));
    }

    pub fn set_text_theme(&self, theme: TextColorTheme) {
        self.with_alert(|alert| alert.set_text_theme(theme));
    }

    pub fn set_padding_and_size(&self, padding: f32, title_gap: f32, width: f32) {
        self.with_alert(|alert| alert.set_padding_and_size(padding, title_gap, width));
    }

    pub fn set_text_padding(&self, min_line_height: f32) {
        self.with_alert(|alert| alert.set_text_padding(min_line_height));
    }

    /// Scroll the message; returns the new offset, or `None` when detached.
    pub fn scroll_message_by(&self, dy: f32) -> Option<f32> {
        self.with_alert(|alert| alert.scroll_message_by(dy))
    }

    /// Dismiss without running any action.
    ///
    /// Returns `false` when the alert is detached or already closing.
    pub fn close(&self) -> bool {
        self.with_alert(Alert::close).unwrap_or(false)
    }
}
