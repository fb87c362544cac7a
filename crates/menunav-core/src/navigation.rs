//! Directional focus search.
//!
//! Three stages are tried in order and the first one yielding any
//! candidate wins, whatever the distances in later stages:
//!
//! 1. `Direct`: the candidate lies in the requested direction (center to
//!    center) and its span on the perpendicular axis overlaps the source.
//! 2. `HalfPlane`: only the direction test.
//! 3. `WrapAround`: the direction test again, measured from a 1x1 rect
//!    pinned to the opposite screen edge.
//!
//! Within a stage the nearest center wins; on equal distance the earlier
//! candidate is kept.

use crate::geometry::Bounds;
use crate::input::Key;
use serde::{Deserialize, Serialize};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, clockwise from Up.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Whether `target` lies in this direction from `source`, center to center.
    fn points_at(self, source: &Bounds, target: &Bounds) -> bool {
        let delta = source.center_delta(target);
        match self {
            Direction::Up => delta.y < 0.0,
            Direction::Down => delta.y > 0.0,
            Direction::Left => delta.x < 0.0,
            Direction::Right => delta.x > 0.0,
        }
    }

    /// Whether `target` overlaps `source` on the axis perpendicular to this direction.
    fn in_band(self, source: &Bounds, target: &Bounds) -> bool {
        match self {
            Direction::Up | Direction::Down => source.overlaps_horizontally(target),
            Direction::Left | Direction::Right => source.overlaps_vertically(target),
        }
    }

    /// Synthetic origin for the wrap-around stage: a unit rect on the
    /// screen edge opposite to the direction of travel.
    fn wrap_origin(self, source: &Bounds, render_width: f64, render_height: f64) -> Bounds {
        match self {
            Direction::Up => Bounds::unit_at(source.x(), render_height, source.z),
            Direction::Down => Bounds::unit_at(source.x(), 0.0, source.z),
            Direction::Left => Bounds::unit_at(render_width, source.y(), source.z),
            Direction::Right => Bounds::unit_at(0.0, source.y(), source.z),
        }
    }
}

/// Search stage that produced a candidate. Lower stages always win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NavStage {
    Direct = 1,
    HalfPlane = 2,
    WrapAround = 3,
}

/// Best candidate found for one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavCandidate {
    /// Position in the interaction index.
    pub position: usize,
    /// Center-to-center distance from the (possibly synthetic) origin.
    pub distance: f64,
    pub stage: NavStage,
}

/// Screen extents used for wrap-around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderArea {
    pub width: f64,
    pub height: f64,
}

impl RenderArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

fn nearest<'a, I>(
    candidates: I,
    origin: &Bounds,
    stage: NavStage,
    accept: impl Fn(&Bounds) -> bool,
) -> Option<NavCandidate>
where
    I: IntoIterator<Item = &'a (usize, Bounds)>,
{
    let mut best: Option<NavCandidate> = None;
    for (position, bounds) in candidates {
        if !accept(bounds) {
            continue;
        }
        let distance = origin.center_delta(bounds).hypot();
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(NavCandidate {
                position: *position,
                distance,
                stage,
            });
        }
    }
    best
}

/// Find the best candidate in `direction` from `source`.
///
/// `candidates` are `(index position, bounds)` pairs already filtered for
/// eligibility, excluding the source element itself.
pub fn find_next(
    direction: Direction,
    source: &Bounds,
    candidates: &[(usize, Bounds)],
    area: RenderArea,
) -> Option<NavCandidate> {
    nearest(candidates, source, NavStage::Direct, |target| {
        direction.points_at(source, target) && direction.in_band(source, target)
    })
    .or_else(|| {
        nearest(candidates, source, NavStage::HalfPlane, |target| {
            direction.points_at(source, target)
        })
    })
    .or_else(|| {
        let origin = direction.wrap_origin(source, area.width, area.height);
        nearest(candidates, &origin, NavStage::WrapAround, |target| {
            direction.points_at(&origin, target)
        })
    })
}

/// Search results for all four directions from one source.
///
/// Composite widgets can use the plan to decide whether a key should move
/// inside them or leave them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionalPlan {
    results: [Option<NavCandidate>; 4],
}

impl DirectionalPlan {
    /// Evaluate every direction.
    pub fn compute(source: &Bounds, candidates: &[(usize, Bounds)], area: RenderArea) -> Self {
        let mut results = [None; 4];
        for direction in Direction::ALL {
            results[direction.slot()] = find_next(direction, source, candidates, area);
        }
        Self { results }
    }

    pub fn get(&self, direction: Direction) -> Option<NavCandidate> {
        self.results[direction.slot()]
    }

    /// The candidate for `direction`, ignoring results that point back at
    /// `current`.
    pub fn target(&self, direction: Direction, current: Option<usize>) -> Option<NavCandidate> {
        self.get(direction)
            .filter(|candidate| Some(candidate.position) != current)
    }
}
