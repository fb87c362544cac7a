//! Named sub-regions of composite widgets.

use crate::geometry::Bounds;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The kind of hotspot - determines what a click on it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotspotKind {
    /// Steps a value backwards.
    ArrowLeft,
    /// Steps a value forwards.
    ArrowRight,
}

/// A clickable region that may lie outside its owner's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub kind: HotspotKind,
    pub bounds: Bounds,
}

impl Hotspot {
    /// Create a new hotspot.
    pub fn new(kind: HotspotKind, bounds: Bounds) -> Self {
        Self { kind, bounds }
    }

    /// Check if a point hits this hotspot.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// Find which hotspot (if any) is hit at the given point.
pub fn hit_test_hotspots(hotspots: &[Hotspot], point: Point) -> Option<HotspotKind> {
    hotspots
        .iter()
        .find(|hotspot| hotspot.hit_test(point))
        .map(|hotspot| hotspot.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_hotspots() {
        let hotspots = [
            Hotspot::new(HotspotKind::ArrowLeft, Bounds::new(0.0, 0.0, 10.0, 10.0, 0.0)),
            Hotspot::new(HotspotKind::ArrowRight, Bounds::new(90.0, 0.0, 10.0, 10.0, 0.0)),
        ];
        assert_eq!(
            hit_test_hotspots(&hotspots, Point::new(5.0, 5.0)),
            Some(HotspotKind::ArrowLeft)
        );
        assert_eq!(
            hit_test_hotspots(&hotspots, Point::new(95.0, 5.0)),
            Some(HotspotKind::ArrowRight)
        );
        assert_eq!(hit_test_hotspots(&hotspots, Point::new(50.0, 5.0)), None);
    }
}
