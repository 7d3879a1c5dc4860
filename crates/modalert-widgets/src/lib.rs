#![forbid(unsafe_code)]

//! Widgets for modalert: the modal backdrop/container primitives and the
//! alert built on top of them.

pub mod alert;
pub mod host;
pub mod modal;
pub mod scene;

pub use alert::{
    Alert, AlertConfig, AlertElements, AlertHit, AlertLayout, AlertMetrics, AlertOutcome,
    AlertResponder, AlertState, AlertStyle, AlertView, ButtonRow, DismissCause, DismissSource,
    Dismissal, FontTarget, Image, MessageFrame,
};
pub use host::HostView;
pub use modal::{BackdropConfig, ModalAnimationConfig, ModalEasing};
pub use scene::{NodeRole, Scene, SceneNode, TextAlignment, TextRun};

use modalert_core::Rect;

/// A `Widget` is a renderable component.
///
/// Widgets append their view nodes to a [`Scene`] for the given area.
pub trait Widget {
    /// Render the widget into the scene at the given area.
    fn render(&self, area: Rect, scene: &mut Scene);
}
