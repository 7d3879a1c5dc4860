#![forbid(unsafe_code)]

//! The alert widget.
//!
//! An [`AlertView`] collects pre-show options and is consumed by
//! [`AlertView::show`], which attaches a live [`Alert`] to a
//! [`HostView`](crate::HostView) and returns an [`AlertResponder`].
//!
//! # State machine
//!
//! ```text
//! Closed ──show──▶ Presenting ──fade-in done──▶ Open
//!                      │                          │
//!                      └──────── dismiss ─────────┤
//!                                                 ▼
//!                  Closed ◀──settle + fade done── Closing
//! ```
//!
//! Dismissal requests while `Closing` or `Closed` are ignored, so every
//! alert reports exactly one [`Dismissal`].

mod config;
mod layout;
mod responder;
mod style;
mod timer;

pub use config::{AlertConfig, AlertMetrics, DEFAULT_BUTTON_TEXT, Image};
pub use layout::{
    AlertElements, AlertLayout, ButtonRow, LayoutInput, MessageFrame, compute, message_content_height,
};
pub use responder::AlertResponder;
pub use style::{AlertStyle, FontTarget, TIMER_FONT_FAMILY};
pub use timer::{Countdown, CountdownStep, Deadline};

use modalert_core::{Point, PointerEvent, Rect};
use modalert_style::{FontBook, Rgba, TextColorTheme, TextStyle};
use web_time::Instant;

use crate::Widget;
use crate::host::HostView;
use crate::modal::{Backdrop, BackdropConfig, ModalAnimationConfig, ModalRegion, TapTracker, classify};
use crate::scene::{NodeRole, Scene, SceneNode, TextAlignment, TextRun};

/// Presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertState {
    #[default]
    Closed,
    Presenting,
    Open,
    Closing,
}

impl AlertState {
    /// Whether the alert still reacts to input and timers.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Presenting | Self::Open)
    }
}

/// Which callback a dismissal is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissSource {
    Close,
    Cancel,
}

/// What triggered a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissCause {
    DismissButton,
    CancelButton,
    /// Tap outside the content of an alert without buttons.
    Backdrop,
    Countdown,
    /// The auto-dismiss delay expired.
    Delay,
    /// `close()` on the responder.
    Programmatic,
}

impl DismissCause {
    #[must_use]
    pub const fn source(self) -> DismissSource {
        match self {
            Self::CancelButton | Self::Backdrop => DismissSource::Cancel,
            Self::DismissButton | Self::Countdown | Self::Delay | Self::Programmatic => {
                DismissSource::Close
            }
        }
    }
}

/// Result reported to the host once the alert is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertOutcome {
    /// The close action runs.
    Confirmed,
    /// The cancel action runs.
    Cancelled,
    /// Closed through the responder; no action runs.
    Closed,
}

/// A completed dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dismissal {
    pub cause: DismissCause,
}

impl Dismissal {
    #[must_use]
    pub const fn source(&self) -> DismissSource {
        self.cause.source()
    }

    #[must_use]
    pub const fn outcome(&self) -> AlertOutcome {
        match (self.cause, self.cause.source()) {
            (DismissCause::Programmatic, _) => AlertOutcome::Closed,
            (_, DismissSource::Close) => AlertOutcome::Confirmed,
            (_, DismissSource::Cancel) => AlertOutcome::Cancelled,
        }
    }

    /// Whether a registered action runs for this dismissal.
    #[must_use]
    pub const fn fires_callback(&self) -> bool {
        !matches!(self.outcome(), AlertOutcome::Closed)
    }
}

/// Hit regions of a presented alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertHit {
    Backdrop,
    Content,
    DismissButton,
    CancelButton,
}

type Action = Box<dyn FnOnce()>;

/// Pre-show options; consumed by [`show`](Self::show).
#[derive(Debug, Clone)]
pub struct AlertView {
    metrics: AlertMetrics,
    min_line_height: Option<f32>,
    animation: ModalAnimationConfig,
    backdrop: BackdropConfig,
    fonts: FontBook,
}

impl Default for AlertView {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metrics: AlertMetrics::default(),
            min_line_height: None,
            animation: ModalAnimationConfig::default(),
            backdrop: BackdropConfig::default(),
            fonts: FontBook::default(),
        }
    }

    /// Override padding, the title/message gap and the alert width.
    pub fn set_padding_and_size(&mut self, padding: f32, title_gap: f32, width: f32) -> &mut Self {
        self.metrics.padding = padding;
        self.metrics.title_gap = title_gap;
        self.metrics.width = width;
        self
    }

    /// Minimum line height of the message text.
    pub fn set_text_padding(&mut self, min_line_height: f32) -> &mut Self {
        self.min_line_height = Some(min_line_height);
        self
    }

    pub fn set_animation(&mut self, animation: ModalAnimationConfig) -> &mut Self {
        self.animation = animation;
        self
    }

    pub fn set_backdrop(&mut self, backdrop: BackdropConfig) -> &mut Self {
        self.backdrop = backdrop;
        self
    }

    /// Font registry used by the font setters.
    pub fn set_font_book(&mut self, fonts: FontBook) -> &mut Self {
        self.fonts = fonts;
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &AlertMetrics {
        &self.metrics
    }

    /// Present the alert over `host`.
    ///
    /// An alert already shown on `host` is replaced without running its
    /// actions.
    pub fn show(self, host: &mut HostView, config: AlertConfig, now: Instant) -> AlertResponder {
        let alert = Alert::new(self, config, host.bounds(), now);
        AlertResponder::new(host.attach(alert))
    }
}

/// A presented alert, owned by its [`HostView`].
pub struct Alert {
    config: AlertConfig,
    metrics: AlertMetrics,
    min_line_height: Option<f32>,
    animation: ModalAnimationConfig,
    backdrop: BackdropConfig,
    fonts: FontBook,
    style: AlertStyle,
    viewport: Rect,
    layout: AlertLayout,
    state: AlertState,
    /// Start of the current animation phase.
    phase_started: Instant,
    /// Latest timestamp seen from the host.
    clock: Instant,
    opacity: f32,
    /// Opacity when the dismissal began; the fade-out scales from it.
    closing_from: f32,
    countdown: Option<Countdown>,
    auto_dismiss: Option<Deadline>,
    closing: Option<DismissCause>,
    on_close: Option<Action>,
    on_cancel: Option<Action>,
    taps: TapTracker<AlertHit>,
    message_scroll: f32,
}

impl std::fmt::Debug for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("title", &self.config.title)
            .field("state", &self.state)
            .field("opacity", &self.opacity)
            .field("closing", &self.closing)
            .field("has_close_action", &self.on_close.is_some())
            .field("has_cancel_action", &self.on_cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl Alert {
    fn new(view: AlertView, config: AlertConfig, viewport: Rect, now: Instant) -> Self {
        let mut style = AlertStyle::new(&view.fonts).with_view(config.view_style);
        if let Some(buttons) = &config.button_style {
            style = style.with_buttons(buttons.clone());
        }
        let countdown = config.countdown.map(|seconds| Countdown::start(seconds, now));
        let mut alert = Self {
            metrics: view.metrics,
            min_line_height: view.min_line_height,
            animation: view.animation,
            backdrop: view.backdrop,
            fonts: view.fonts,
            style,
            viewport,
            layout: AlertLayout {
                container: Rect::ZERO,
                background: Rect::ZERO,
                icon: None,
                title_icon: None,
                title: Rect::ZERO,
                message: None,
                timer: None,
                buttons: None,
            },
            state: AlertState::Presenting,
            phase_started: now,
            clock: now,
            opacity: 0.0,
            closing_from: 1.0,
            countdown,
            auto_dismiss: None,
            closing: None,
            on_close: None,
            on_cancel: None,
            taps: TapTracker::new(),
            message_scroll: 0.0,
            config,
        };
        alert.relayout();
        tracing::debug!(
            title = %alert.config.title,
            elements = ?alert.layout.elements(),
            height = alert.layout.height(),
            "alert shown"
        );
        alert
    }

    #[must_use]
    pub fn state(&self) -> AlertState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &AlertStyle {
        &self.style
    }

    #[must_use]
    pub fn layout(&self) -> &AlertLayout {
        &self.layout
    }

    #[must_use]
    pub fn elements(&self) -> AlertElements {
        self.layout.elements()
    }

    /// Overlay opacity including the presentation fade.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Seconds left on the countdown, if one was configured.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    /// Text of the countdown label.
    #[must_use]
    pub fn timer_text(&self) -> Option<String> {
        self.countdown.as_ref().map(Countdown::label)
    }

    #[must_use]
    pub fn message_scroll(&self) -> f32 {
        self.message_scroll
    }

    /// Button currently held down.
    #[must_use]
    pub fn pressed(&self) -> Option<AlertHit> {
        self.taps
            .pressed()
            .filter(|hit| matches!(hit, AlertHit::DismissButton | AlertHit::CancelButton))
    }

    pub fn add_action(&mut self, action: impl FnOnce() + 'static) {
        self.on_close = Some(Box::new(action));
    }

    pub fn add_cancel_action(&mut self, action: impl FnOnce() + 'static) {
        self.on_cancel = Some(Box::new(action));
    }

    /// Advance animations and timers to `now`.
    ///
    /// Returns the dismissal once the closing animation has finished; the
    /// alert is then `Closed` and must be detached.
    pub fn tick(&mut self, now: Instant) -> Option<Dismissal> {
        self.clock = self.clock.max(now);
        match self.state {
            AlertState::Closed => None,
            AlertState::Closing => self.tick_closing(now),
            AlertState::Presenting | AlertState::Open => {
                if self.state == AlertState::Presenting {
                    self.tick_presenting(now);
                }
                self.tick_timers(now);
                None
            }
        }
    }

    fn tick_presenting(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.phase_started);
        self.opacity = self.animation.present_opacity(elapsed);
        if elapsed < self.animation.present {
            return;
        }
        let opened_at = self.phase_started + self.animation.present;
        self.opacity = 1.0;
        self.transition(AlertState::Open, opened_at);
        if let Some(delay) = self.config.auto_dismiss {
            self.auto_dismiss = Some(Deadline::at(opened_at + delay));
        }
    }

    fn tick_timers(&mut self, now: Instant) {
        if let Some(step) = self.countdown.as_mut().map(|countdown| countdown.advance(now)) {
            if step.ticks > 0 {
                tracing::trace!(remaining = ?self.remaining_seconds(), "countdown tick");
                self.relayout();
            }
            if step.expired {
                self.begin_dismiss(DismissCause::Countdown, now);
                return;
            }
        }
        let delay_expired = self
            .auto_dismiss
            .as_mut()
            .is_some_and(|deadline| deadline.poll(now));
        if delay_expired {
            self.begin_dismiss(DismissCause::Delay, now);
        }
    }

    fn tick_closing(&mut self, now: Instant) -> Option<Dismissal> {
        let elapsed = now.saturating_duration_since(self.phase_started);
        self.opacity = self.closing_from * self.animation.dismiss_opacity(elapsed);
        if elapsed < self.animation.dismiss_duration() {
            return None;
        }
        let cause = self.closing?;
        self.opacity = 0.0;
        let finished_at = self.phase_started + self.animation.dismiss_duration();
        self.transition(AlertState::Closed, finished_at);
        tracing::debug!(?cause, "alert dismissed");
        Some(Dismissal { cause })
    }

    fn transition(&mut self, to: AlertState, at: Instant) {
        tracing::trace!(from = ?self.state, ?to, "alert state");
        self.state = to;
        self.phase_started = at;
    }

    /// Start dismissing. Returns `false` if a dismissal is already underway.
    fn begin_dismiss(&mut self, cause: DismissCause, now: Instant) -> bool {
        if !self.state.is_active() {
            tracing::trace!(?cause, state = ?self.state, "dismiss ignored");
            return false;
        }
        if self.state == AlertState::Presenting {
            let elapsed = now.saturating_duration_since(self.phase_started);
            self.opacity = self.animation.present_opacity(elapsed);
        }
        self.closing_from = self.opacity;
        // Timers only advance while active; the pending delay is dropped.
        self.closing = Some(cause);
        self.auto_dismiss = None;
        self.taps.cancel();
        self.transition(AlertState::Closing, now);
        true
    }

    /// Close without running any action. Idempotent.
    pub fn close(&mut self) -> bool {
        self.begin_dismiss(DismissCause::Programmatic, self.clock)
    }

    /// Take the action matching `dismissal`, if it fires one.
    pub fn take_action(&mut self, dismissal: Dismissal) -> Option<Box<dyn FnOnce()>> {
        match dismissal.outcome() {
            AlertOutcome::Confirmed => self.on_close.take(),
            AlertOutcome::Cancelled => self.on_cancel.take(),
            AlertOutcome::Closed => None,
        }
    }

    /// Classify a point in host coordinates.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<AlertHit> {
        let container = self.layout.container;
        match classify(self.viewport, container, point)? {
            ModalRegion::Backdrop => Some(AlertHit::Backdrop),
            ModalRegion::Content => {
                let local = container.to_local(point);
                let Some(row) = &self.layout.buttons else {
                    return Some(AlertHit::Content);
                };
                if row.dismiss.contains(local) {
                    Some(AlertHit::DismissButton)
                } else if row.cancel.is_some_and(|cancel| cancel.contains(local)) {
                    Some(AlertHit::CancelButton)
                } else {
                    Some(AlertHit::Content)
                }
            }
        }
    }

    /// Feed a pointer event in host coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        self.clock = self.clock.max(now);
        if !self.state.is_active() {
            return;
        }
        match event {
            PointerEvent::Down(point) => {
                let hit = self.hit_test(point);
                self.taps.down(hit);
            }
            PointerEvent::Up(point) => {
                let hit = self.hit_test(point);
                let cause = match self.taps.up(hit) {
                    Some(AlertHit::DismissButton) => Some(DismissCause::DismissButton),
                    Some(AlertHit::CancelButton) => Some(DismissCause::CancelButton),
                    Some(AlertHit::Backdrop) if !self.config.has_buttons() => {
                        Some(DismissCause::Backdrop)
                    }
                    _ => None,
                };
                if let Some(cause) = cause {
                    self.begin_dismiss(cause, now);
                }
            }
            PointerEvent::Cancel => self.taps.cancel(),
        }
    }

    /// Scroll a scrollable message by `dy`, clamped to its content.
    ///
    /// Returns the new offset.
    pub fn scroll_message_by(&mut self, dy: f32) -> f32 {
        if let Some(message) = self.layout.message.filter(|m| m.scrollable) {
            self.message_scroll = (self.message_scroll + dy).clamp(0.0, message.max_scroll());
        }
        self.message_scroll
    }

    /// Set the font of `target`, resolving `family` through the font book.
    ///
    /// Unknown families fall back to the system font at the same size.
    pub fn set_font(&mut self, target: FontTarget, family: &str, size: Option<f32>) {
        let font = self
            .fonts
            .resolve_or_system(family, size.unwrap_or(target.default_size()));
        self.style = self.style.clone().with_font(target, font);
        self.relayout();
    }

    pub fn set_text_theme(&mut self, theme: TextColorTheme) {
        self.style = self.style.clone().with_theme(theme);
        self.relayout();
    }

    pub fn set_padding_and_size(&mut self, padding: f32, title_gap: f32, width: f32) {
        self.metrics.padding = padding;
        self.metrics.title_gap = title_gap;
        self.metrics.width = width;
        self.relayout();
    }

    pub fn set_text_padding(&mut self, min_line_height: f32) {
        self.min_line_height = Some(min_line_height);
        self.relayout();
    }

    /// Re-center in new host bounds.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.relayout();
    }

    fn input_elements(&self) -> AlertElements {
        let mut elements = AlertElements::empty();
        elements.set(AlertElements::ICON, self.config.icon.is_some());
        elements.set(AlertElements::TITLE_ICON, self.config.title_icon.is_some());
        elements.set(AlertElements::MESSAGE, self.config.message.is_some());
        elements.set(AlertElements::TIMER, self.countdown.is_some());
        elements.set(AlertElements::DISMISS_BUTTON, self.config.has_buttons());
        elements.set(AlertElements::CANCEL_BUTTON, self.config.has_cancel_button());
        elements
    }

    fn relayout(&mut self) {
        let _span = tracing::debug_span!(
            "alert_layout",
            w = self.viewport.width,
            h = self.viewport.height
        )
        .entered();

        let timer = self.timer_text();
        let input = LayoutInput {
            metrics: &self.metrics,
            style: &self.style,
            viewport: self.viewport,
            elements: self.input_elements(),
            title: &self.config.title,
            message: self.config.message.as_deref(),
            timer: timer.as_deref(),
            min_line_height: self.min_line_height,
        };
        self.layout = compute(&input);
        let max_scroll = self.layout.message.map_or(0.0, |m| m.max_scroll());
        self.message_scroll = self.message_scroll.clamp(0.0, max_scroll);
    }

    fn text_run(&self, text: &str, style: &TextStyle, alignment: TextAlignment) -> TextRun {
        TextRun {
            text: text.to_string(),
            font: style.font.clone(),
            color: style.color,
            alignment,
            min_line_height: None,
        }
    }

    fn button_fill(&self, hit: AlertHit) -> Rgba {
        if self.pressed() == Some(hit) {
            self.style.buttons.highlight_fill(self.style.view.background)
        } else {
            self.style.buttons.fill
        }
    }
}

impl Widget for Alert {
    fn render(&self, area: Rect, scene: &mut Scene) {
        if area.is_empty() || self.state == AlertState::Closed {
            return;
        }
        Backdrop::new(self.backdrop)
            .fade(self.opacity)
            .render(area, scene);

        let layout = &self.layout;
        let container = area.centered(layout.container.size());
        let origin = container.origin();
        let node = |role: NodeRole, frame: Rect| {
            SceneNode::new(role, frame.offset(origin)).opacity(self.opacity)
        };
        let alignment = self.config.text_alignment;

        scene.push(
            node(NodeRole::Background, layout.background)
                .fill(self.style.view.background)
                .corner_radius(self.style.view.corner_radius),
        );
        if let (Some(frame), Some(image)) = (layout.icon, &self.config.icon) {
            scene.push(node(NodeRole::Icon, image.fit_in(frame)).image(image.clone()));
        }
        if let (Some(frame), Some(image)) = (layout.title_icon, &self.config.title_icon) {
            scene.push(node(NodeRole::TitleIcon, image.fit_in(frame)).image(image.clone()));
        }
        scene.push(node(NodeRole::Title, layout.title).text(self.text_run(
            &self.config.title,
            &self.style.title,
            alignment,
        )));
        if let (Some(message), Some(text)) = (layout.message, &self.config.message) {
            let mut run = self.text_run(text, &self.style.message, alignment);
            run.min_line_height = self.min_line_height;
            let mut message_node = node(NodeRole::Message, message.frame).text(run);
            message_node.content_offset = self.message_scroll;
            message_node.interactive = message.scrollable;
            scene.push(message_node);
        }
        if let (Some(frame), Some(text)) = (layout.timer, self.timer_text()) {
            scene.push(node(NodeRole::Timer, frame).text(self.text_run(
                &text,
                &self.style.timer,
                TextAlignment::Center,
            )));
        }
        if let Some(row) = &layout.buttons {
            let buttons = &self.style.buttons;
            scene.push(node(NodeRole::ButtonDivider, row.divider).fill(buttons.divider));
            if let (Some(cancel), Some(label_frame), Some(label)) =
                (row.cancel, row.cancel_label, &self.config.cancel_button_text)
            {
                scene.push(
                    node(NodeRole::CancelButton, cancel).fill(self.button_fill(AlertHit::CancelButton)),
                );
                let style = TextStyle::new(buttons.cancel_font.clone(), buttons.text_color);
                scene.push(
                    node(NodeRole::CancelLabel, label_frame.offset(cancel.origin())).text(self.text_run(
                        label,
                        &style,
                        TextAlignment::Center,
                    )),
                );
            }
            scene.push(
                node(NodeRole::DismissButton, row.dismiss).fill(self.button_fill(AlertHit::DismissButton)),
            );
            let style = TextStyle::new(buttons.font.clone(), buttons.text_color);
            scene.push(
                node(NodeRole::DismissLabel, row.dismiss_label.offset(row.dismiss.origin())).text(
                    self.text_run(self.config.dismiss_label(), &style, TextAlignment::Center),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modalert_core::Size;
    use tracing_test::traced_test;
    use web_time::Duration;

    fn shown(config: AlertConfig) -> (HostView, AlertResponder, Instant) {
        let mut host = HostView::new(Size::new(320.0, 568.0));
        let now = Instant::now();
        let responder = AlertView::new().show(&mut host, config, now);
        (host, responder, now)
    }

    #[test]
    fn dismissal_routing() {
        let cases = [
            (DismissCause::DismissButton, DismissSource::Close, AlertOutcome::Confirmed),
            (DismissCause::Countdown, DismissSource::Close, AlertOutcome::Confirmed),
            (DismissCause::Delay, DismissSource::Close, AlertOutcome::Confirmed),
            (DismissCause::Programmatic, DismissSource::Close, AlertOutcome::Closed),
            (DismissCause::CancelButton, DismissSource::Cancel, AlertOutcome::Cancelled),
            (DismissCause::Backdrop, DismissSource::Cancel, AlertOutcome::Cancelled),
        ];
        for (cause, source, outcome) in cases {
            let dismissal = Dismissal { cause };
            assert_eq!(dismissal.source(), source, "{cause:?}");
            assert_eq!(dismissal.outcome(), outcome, "{cause:?}");
            assert_eq!(dismissal.fires_callback(), outcome != AlertOutcome::Closed);
        }
    }

    #[test]
    fn presenting_fades_in_then_opens() {
        let (mut host, responder, t0) = shown(AlertConfig::new("Hi"));
        assert_eq!(responder.state(), AlertState::Presenting);
        host.tick(t0 + Duration::from_millis(150));
        assert_eq!(responder.state(), AlertState::Presenting);
        host.tick(t0 + Duration::from_millis(300));
        assert_eq!(responder.state(), AlertState::Open);
    }

    #[test]
    fn hit_test_regions() {
        let (host, responder, _) = shown(AlertConfig::new("Hi").cancel_button_text("No"));
        let layout = responder.layout().unwrap();
        let row = layout.buttons.unwrap();
        let origin = layout.container.origin();
        let alert = &host;

        let dismiss = row.dismiss.offset(origin).center();
        let cancel = row.cancel.unwrap().offset(origin).center();
        assert_eq!(alert.hit_test(dismiss), Some(AlertHit::DismissButton));
        assert_eq!(alert.hit_test(cancel), Some(AlertHit::CancelButton));
        assert_eq!(alert.hit_test(layout.container.center()), Some(AlertHit::Content));
        assert_eq!(alert.hit_test(Point::new(1.0, 1.0)), Some(AlertHit::Backdrop));
        assert_eq!(alert.hit_test(Point::new(-1.0, 1.0)), None);
    }

    #[test]
    fn pressed_button_is_highlighted() {
        let (mut host, responder, t0) = shown(AlertConfig::new("Hi"));
        let layout = responder.layout().unwrap();
        let dismiss = layout.buttons.unwrap().dismiss.offset(layout.container.origin());
        host.handle_pointer(PointerEvent::Down(dismiss.center()), t0);

        let scene = host.render();
        let button = scene.node(NodeRole::DismissButton).unwrap();
        let style = AlertStyle::default();
        let expected = style.buttons.highlight_fill(style.view.background);
        assert_eq!(button.fill, Some(expected));

        host.handle_pointer(PointerEvent::Cancel, t0);
        let scene = host.render();
        assert_eq!(scene.node(NodeRole::DismissButton).unwrap().fill, Some(Rgba::WHITE));
        assert_eq!(responder.state(), AlertState::Presenting);
    }

    #[test]
    fn unknown_font_falls_back_to_system() {
        let (host, responder, _) = shown(AlertConfig::new("Hi"));
        responder.set_title_font("NoSuchFont", None);
        let scene = host.render();
        let font = &scene.node(NodeRole::Title).unwrap().text.as_ref().unwrap().font;
        assert!(font.is_system());
        assert_eq!(font.size(), 24.0);
    }

    #[test]
    #[traced_test]
    fn show_and_dismiss_are_logged() {
        let (mut host, responder, t0) = shown(AlertConfig::new("Logged"));
        assert!(logs_contain("alert shown"));
        responder.close();
        host.tick(t0 + Duration::from_secs(1));
        assert!(logs_contain("alert dismissed"));
    }
}
