//! Routing trait and the default axis-aligned rail router.
//!
//! # Pluggability
//!
//! Vehicle controllers call routing through the [`Router`] trait, so a host
//! with a real rail graph can swap in its own implementation without
//! touching the state machine.  [`ManhattanRouter`] models an unbounded
//! rectangular rail grid: every trip is at most one X leg and one Z leg.

use oht_core::Point3;

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of rail-plane waypoints.  The last waypoint is the
/// destination; the start point is implicit (the vehicle's position).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub waypoints: Vec<Point3>,
}

impl Route {
    pub fn new(waypoints: Vec<Point3>) -> Self {
        Self { waypoints }
    }

    /// `true` if there is nowhere to go.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Rail length of the route when driven from `start`.
    pub fn length_from(&self, start: Point3) -> f32 {
        let mut prev = start;
        let mut total = 0.0;
        for &wp in &self.waypoints {
            total += prev.planar_distance(wp);
            prev = wp;
        }
        total
    }

    /// Final waypoint, if any.
    pub fn destination(&self) -> Option<Point3> {
        self.waypoints.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable rail routing.
pub trait Router {
    /// Waypoints from `from` to `to`, ending exactly at `to`.
    fn route(&self, from: Point3, to: Point3) -> Route;
}

// ── ManhattanRouter ───────────────────────────────────────────────────────────

/// Axis-aligned router: X first, then Z.
///
/// Points that already share an X or Z coordinate (within `axis_tolerance`)
/// are joined by one straight segment.  Otherwise the route turns once at
/// `(to.x, rail_height, from.z)`.  No diagonal segment is ever produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManhattanRouter {
    pub rail_height:    f32,
    pub axis_tolerance: f32,
}

impl ManhattanRouter {
    pub fn new(rail_height: f32, axis_tolerance: f32) -> Self {
        Self { rail_height, axis_tolerance }
    }

    /// Build from the rail settings of an [`OhtConfig`][oht_core::OhtConfig].
    pub fn from_config(config: &oht_core::OhtConfig) -> Self {
        Self::new(config.rail_height, config.axis_tolerance)
    }
}

impl Router for ManhattanRouter {
    fn route(&self, from: Point3, to: Point3) -> Route {
        if from.axis_aligned_with(to, self.axis_tolerance) {
            return Route::new(vec![to]);
        }
        let corner = Point3::on_rail(to.x, from.z, self.rail_height);
        Route::new(vec![corner, to])
    }
}
