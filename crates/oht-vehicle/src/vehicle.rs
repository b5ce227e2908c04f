//! Per-vehicle simulation state.

use oht_core::{Point3, StationId, VehicleId};

use crate::Phase;

/// The full state of one vehicle.
///
/// Only [`VehicleController::tick`][crate::VehicleController::tick] mutates
/// it; renderers read it between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Position on the rail plane.
    pub position: Point3,
    /// Body yaw, radians.  Follows the direction of travel.
    pub heading: f32,
    pub phase: Phase,
    /// Seconds spent in the current timed phase (Lower / Docked / Raise).
    pub phase_elapsed: f32,
    /// Remaining start-up stagger while in [`Phase::Wait`].
    pub wait_remaining: f32,
    /// Waypoints of the current trip.
    pub route: Vec<Point3>,
    /// Next waypoint to reach; `route.len()` once the trip is done.
    pub route_index: usize,
    /// Station this vehicle is driving to or docked at.
    pub target_station: StationId,
    /// Set by the first payload exchange and never cleared.
    pub carrying_payload: bool,
    /// Set at the exchange instant of each visit; cleared on departure.
    pub transfer_completed: bool,
    /// Payload Y offset relative to the rail plane.
    pub payload_offset: f32,
    /// Payload yaw relative to the vehicle body.
    pub payload_yaw: f32,
}

impl Vehicle {
    /// A vehicle parked over `station_position`, waiting `stagger_secs`
    /// before heading for `target_station`.
    pub fn parked(
        id:                    VehicleId,
        station_position:      Point3,
        target_station:        StationId,
        stagger_secs:          f32,
        payload_travel_offset: f32,
    ) -> Self {
        Self {
            id,
            position:           station_position,
            heading:            0.0,
            phase:              Phase::Wait,
            phase_elapsed:      0.0,
            wait_remaining:     stagger_secs,
            route:              Vec::new(),
            route_index:        0,
            target_station,
            carrying_payload:   false,
            transfer_completed: false,
            payload_offset:     payload_travel_offset,
            payload_yaw:        0.0,
        }
    }

    /// Current waypoint, or `None` when the route is exhausted.
    #[inline]
    pub fn next_waypoint(&self) -> Option<Point3> {
        self.route.get(self.route_index).copied()
    }

    /// Replace the route and restart it.
    pub fn set_route(&mut self, waypoints: Vec<Point3>) {
        self.route = waypoints;
        self.route_index = 0;
    }

    /// World-space payload position (for the FOUP mesh).
    #[inline]
    pub fn payload_position(&self) -> Point3 {
        Point3::new(self.position.x, self.position.y + self.payload_offset, self.position.z)
    }

    /// World-space payload yaw.
    #[inline]
    pub fn payload_world_yaw(&self) -> f32 {
        self.heading + self.payload_yaw
    }
}
