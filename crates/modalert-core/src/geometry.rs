#![forbid(unsafe_code)]

//! Point-based geometry.
//!
//! All coordinates are logical points (`f32`). Frames of child views are
//! expressed relative to their parent; [`Rect::offset`] and
//! [`Rect::to_local`] convert between the two spaces.

/// A location in point space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[must_use]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Half-open containment test: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Translate by the origin of `parent`, turning a parent-local frame into
    /// the parent's coordinate space.
    #[must_use]
    pub fn offset(self, parent: Point) -> Self {
        Self::new(self.x + parent.x, self.y + parent.y, self.width, self.height)
    }

    /// Convert a point in this rectangle's parent space into local space.
    #[must_use]
    pub fn to_local(self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }

    /// Center a rectangle of `size` inside `self`.
    ///
    /// The result may extend past `self` when `size` is larger; the host
    /// viewport never clips the alert container.
    #[must_use]
    pub fn centered(self, size: Size) -> Self {
        Self::new(
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 14.9)));
        assert!(!r.contains(Point::new(30.0, 12.0)));
        assert!(!r.contains(Point::new(12.0, 15.0)));
    }

    #[test]
    fn centered_in_viewport() {
        let host = Rect::new(0.0, 0.0, 375.0, 667.0);
        let rect = host.centered(Size::new(294.0, 200.0));
        assert_eq!(rect, Rect::new(40.5, 233.5, 294.0, 200.0));
    }

    #[test]
    fn centered_larger_than_viewport_overhangs() {
        let host = Rect::new(0.0, 0.0, 100.0, 100.0);
        let rect = host.centered(Size::new(200.0, 50.0));
        assert_eq!(rect.x, -50.0);
        assert_eq!(rect.y, 25.0);
    }

    #[test]
    fn offset_and_to_local_are_inverse() {
        let parent = Rect::new(40.0, 100.0, 294.0, 300.0);
        let child = Rect::new(20.0, 24.0, 254.0, 20.0);
        let global = child.offset(parent.origin());
        assert_eq!(global, Rect::new(60.0, 124.0, 254.0, 20.0));
        assert_eq!(parent.to_local(global.origin()), child.origin());
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
