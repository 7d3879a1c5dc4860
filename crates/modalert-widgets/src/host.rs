#![forbid(unsafe_code)]

//! The view an alert is presented over.
//!
//! The host owns the overlay and drives it from its UI loop: it forwards
//! ticks and pointer events, detaches the alert once dismissal finishes,
//! and only then runs the matching action, with no borrow of the alert
//! outstanding.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use modalert_core::{Point, PointerEvent, Rect, Size};
use web_time::Instant;

use crate::Widget;
use crate::alert::{Alert, AlertHit, AlertState, Dismissal};
use crate::scene::Scene;

#[derive(Debug)]
pub struct HostView {
    bounds: Rect,
    overlay: Option<Rc<RefCell<Alert>>>,
}

impl HostView {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect::from_size(size),
            overlay: None,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// State of the presented alert, if any.
    #[must_use]
    pub fn overlay_state(&self) -> Option<AlertState> {
        let overlay = self.overlay.as_ref()?;
        overlay.try_borrow().ok().map(|alert| alert.state())
    }

    pub(crate) fn attach(&mut self, alert: Alert) -> Weak<RefCell<Alert>> {
        if self.overlay.is_some() {
            tracing::debug!("replacing presented alert");
        }
        let alert = Rc::new(RefCell::new(alert));
        let weak = Rc::downgrade(&alert);
        self.overlay = Some(alert);
        weak
    }

    /// Resize the host; a presented alert re-centers.
    pub fn resize(&mut self, size: Size) {
        self.bounds = Rect::from_size(size);
        tracing::debug!(width = size.width, height = size.height, "host resized");
        if let Some(alert) = &self.overlay
            && let Ok(mut alert) = alert.try_borrow_mut()
        {
            alert.resize(self.bounds);
        }
    }

    /// Advance the presented alert.
    ///
    /// When its dismissal completes the alert is detached and the matching
    /// action runs before this returns.
    pub fn tick(&mut self, now: Instant) -> Option<Dismissal> {
        let (dismissal, action) = {
            let overlay = self.overlay.as_ref()?;
            let mut alert = overlay.try_borrow_mut().ok()?;
            let dismissal = alert.tick(now)?;
            (dismissal, alert.take_action(dismissal))
        };
        self.overlay = None;
        if let Some(action) = action {
            action();
        }
        Some(dismissal)
    }

    /// Which part of the presented alert `point` falls on.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<AlertHit> {
        let overlay = self.overlay.as_ref()?;
        overlay.try_borrow().ok()?.hit_test(point)
    }

    /// Forward a pointer event in host coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        if let Some(alert) = &self.overlay
            && let Ok(mut alert) = alert.try_borrow_mut()
        {
            alert.handle_pointer(event, now);
        }
    }

    /// A complete tap: press and release at `point`.
    pub fn handle_tap(&mut self, point: Point, now: Instant) {
        self.handle_pointer(PointerEvent::Down(point), now);
        self.handle_pointer(PointerEvent::Up(point), now);
    }

    /// Draw list of the presented alert; empty without one.
    #[must_use]
    pub fn render(&self) -> Scene {
        let mut scene = Scene::new();
        if let Some(alert) = &self.overlay
            && let Ok(alert) = alert.try_borrow()
        {
            alert.render(self.bounds, &mut scene);
        }
        scene
    }
}
