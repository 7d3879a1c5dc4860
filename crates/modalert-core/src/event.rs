#![forbid(unsafe_code)]

//! Pointer input delivered by the host event loop.

use crate::geometry::Point;

/// A single-pointer event in host coordinates.
///
/// Hosts translate their native touch or mouse events into this form. A tap
/// is a `Down` followed by an `Up` at (roughly) the same location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down(Point),
    /// Pointer released.
    Up(Point),
    /// The gesture was interrupted by the system; no activation happens.
    Cancel,
}

impl PointerEvent {
    /// Location of the event, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down(p) | Self::Up(p) => Some(p),
            Self::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_has_no_position() {
        assert_eq!(PointerEvent::Cancel.position(), None);
        assert_eq!(
            PointerEvent::Up(Point::new(1.0, 2.0)).position(),
            Some(Point::new(1.0, 2.0))
        );
    }
}
