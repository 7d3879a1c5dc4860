#![forbid(unsafe_code)]

//! Backdrop rendering and hit classification for a centered modal.
//!
//! The backdrop covers the whole host area; the content rectangle sits on
//! top. Pointer input is classified as backdrop or content so callers can
//! implement close-on-backdrop behavior.

use modalert_core::{Point, Rect};
use modalert_style::Rgba;

use crate::Widget;
use crate::scene::{NodeRole, Scene, SceneNode};

/// Backdrop configuration (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropConfig {
    /// Backdrop color (alpha will be scaled by `opacity`).
    pub color: Rgba,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl BackdropConfig {
    /// Create a new backdrop config.
    #[must_use]
    pub fn new(color: Rgba, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Set backdrop color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set backdrop opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Effective fill color.
    #[must_use]
    pub fn fill(&self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            opacity: 0.7,
        }
    }
}

/// The dimming layer behind a modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    config: BackdropConfig,
    /// Presentation opacity of the whole overlay.
    fade: f32,
}

impl Backdrop {
    #[must_use]
    pub fn new(config: BackdropConfig) -> Self {
        Self { config, fade: 1.0 }
    }

    /// Overlay opacity applied on top of the configured backdrop alpha.
    #[must_use]
    pub fn fade(mut self, fade: f32) -> Self {
        self.fade = fade;
        self
    }
}

impl Widget for Backdrop {
    fn render(&self, area: Rect, scene: &mut Scene) {
        if area.is_empty() {
            return;
        }
        scene.push(
            SceneNode::new(NodeRole::Backdrop, area)
                .fill(self.config.fill())
                .opacity(self.fade),
        );
    }
}

/// Which layer of a modal a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRegion {
    Backdrop,
    Content,
}

/// Classify `point` against the host `area` and the modal `content` rect.
///
/// Returns `None` for points outside the host area.
#[must_use]
pub fn classify(area: Rect, content: Rect, point: Point) -> Option<ModalRegion> {
    if content.contains(point) {
        Some(ModalRegion::Content)
    } else if area.contains(point) {
        Some(ModalRegion::Backdrop)
    } else {
        None
    }
}

/// Touch-up-inside tracking: a target activates only when the pointer is
/// released over the same target it was pressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapTracker<T> {
    pressed: Option<T>,
}

impl<T> Default for TapTracker<T> {
    fn default() -> Self {
        Self { pressed: None }
    }
}

impl<T: Copy + PartialEq> TapTracker<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed over `target` (or over nothing trackable).
    pub fn down(&mut self, target: Option<T>) {
        self.pressed = target;
    }

    /// Pointer released over `target`; returns the activated target.
    pub fn up(&mut self, target: Option<T>) -> Option<T> {
        let pressed = self.pressed.take()?;
        (target == Some(pressed)).then_some(pressed)
    }

    /// Gesture cancelled.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// Currently pressed target.
    #[must_use]
    pub fn pressed(&self) -> Option<T> {
        self.pressed
    }
}
