//! Screen-space bounds with depth.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest width or height an element can be resized to.
pub const MIN_EXTENT: f64 = 1.0;

/// An axis-aligned rectangle in screen space plus a depth value.
///
/// Smaller `z` is nearer to the viewer. Depth decides both paint order
/// (far first) and which of two overlapping elements the mouse hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Depth (smaller = nearer).
    #[serde(default)]
    pub z: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, MIN_EXTENT, MIN_EXTENT, 0.0)
    }
}

impl Bounds {
    /// Create new bounds from position, size and depth.
    pub fn new(x: f64, y: f64, width: f64, height: f64, z: f64) -> Self {
        Self {
            position: Point::new(x, y),
            width,
            height,
            z,
        }
    }

    /// A 1x1 rectangle at the given point.
    pub fn unit_at(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, MIN_EXTENT, MIN_EXTENT, z)
    }

    /// Left edge.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    /// Get the bounds as a kurbo Rect (depth dropped).
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.right(), self.bottom())
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Vector from this center to the other center.
    pub fn center_delta(&self, other: &Bounds) -> Vec2 {
        other.center() - self.center()
    }

    /// Point-in-rect test, inclusive on every edge.
    ///
    /// kurbo's `Rect::contains` excludes the far edges, which would make
    /// a pointer sitting on a widget's right border miss it.
    pub fn contains(&self, point: Point) -> bool {
        self.x() <= point.x && self.right() >= point.x && self.y() <= point.y && self.bottom() >= point.y
    }

    /// Strict overlap of the horizontal spans.
    pub fn overlaps_horizontally(&self, other: &Bounds) -> bool {
        other.right() > self.x() && self.right() > other.x()
    }

    /// Strict overlap of the vertical spans.
    pub fn overlaps_vertically(&self, other: &Bounds) -> bool {
        other.bottom() > self.y() && self.bottom() > other.y()
    }

    /// Shift the rectangle; depth is unchanged.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Grow or shrink the rectangle, never below `MIN_EXTENT`.
    pub fn resize(&mut self, dw: f64, dh: f64) {
        self.width += dw;
        if self.width <= 0.0 {
            self.width = MIN_EXTENT;
        }
        self.height += dh;
        if self.height <= 0.0 {
            self.height = MIN_EXTENT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0, 1.5);
        assert!((bounds.right() - 110.0).abs() < f64::EPSILON);
        assert!((bounds.bottom() - 70.0).abs() < f64::EPSILON);
        assert!((bounds.z - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center() {
        let bounds = Bounds::new(75.0, 75.0, 50.0, 50.0, 0.0);
        assert_eq!(bounds.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0, 0.0);
        assert!(bounds.contains(Point::new(50.0, 50.0)));
        assert!(bounds.contains(Point::new(100.0, 100.0)));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(!bounds.contains(Point::new(100.5, 50.0)));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Bounds::new(0.0, 0.0, 100.0, 50.0, 0.0);
        let touching = Bounds::new(100.0, 200.0, 50.0, 50.0, 0.0);
        let overlapping = Bounds::new(90.0, 200.0, 50.0, 50.0, 0.0);
        assert!(!a.overlaps_horizontally(&touching));
        assert!(a.overlaps_horizontally(&overlapping));
        assert!(!a.overlaps_vertically(&overlapping));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut bounds = Bounds::new(0.0, 0.0, 10.0, 10.0, 0.0);
        bounds.resize(-15.0, 5.0);
        assert!((bounds.width - MIN_EXTENT).abs() < f64::EPSILON);
        assert!((bounds.height - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_keeps_depth() {
        let mut bounds = Bounds::new(0.0, 0.0, 10.0, 10.0, 3.0);
        bounds.translate(5.0, -5.0);
        assert_eq!(bounds.position, Point::new(5.0, -5.0));
        assert!((bounds.z - 3.0).abs() < f64::EPSILON);
    }
}
