#![forbid(unsafe_code)]

//! Core primitives for modalert: geometry, pointer events, and time.

pub mod event;
pub mod geometry;

pub use event::PointerEvent;
pub use geometry::{Point, Rect, Size};

/// Monotonic time used for animation and timer deadlines.
///
/// Re-exported from `web-time` so the same code runs on native and wasm hosts.
pub mod time {
    pub use web_time::{Duration, Instant};
}
