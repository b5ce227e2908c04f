//! Simulation configuration.
//!
//! Every tunable constant of the rail system lives in [`OhtConfig`]: rail
//! geometry, vehicle kinematics, transfer timing, the station-selection
//! heuristic, and fleet sizing.  Applications typically keep the defaults and
//! override a handful of fields, or load the whole struct from a config file
//! with the `serde` feature.

use crate::{OhtError, OhtResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OhtConfig {
    // ── Rail geometry ─────────────────────────────────────────────────────
    /// Y of the horizontal rail plane.  Every station and waypoint sits here.
    pub rail_height: f32,
    /// Two points closer than this on X or Z are joined by one straight
    /// segment instead of an L-shaped route.
    pub axis_tolerance: f32,

    // ── Vehicle kinematics ────────────────────────────────────────────────
    /// Constant travel speed along the rails, units per second.
    pub vehicle_speed: f32,
    /// Payload Y offset (relative to the rail plane) while travelling.
    pub payload_travel_offset: f32,
    /// Payload Y offset when fully lowered onto a load port.
    pub payload_lowered_offset: f32,

    // ── Transfer timing (seconds) ─────────────────────────────────────────
    pub lower_secs: f32,
    pub dwell_secs: f32,
    pub raise_secs: f32,
    /// Fraction of `dwell_secs` at which the payload exchange happens.
    pub transfer_fraction: f32,

    // ── Station selection ─────────────────────────────────────────────────
    /// Random picks closer than this to the vehicle are rejected.
    pub min_station_distance: f32,
    /// Random picks attempted per random pass.
    pub random_attempts: u32,

    // ── Fleet sizing ──────────────────────────────────────────────────────
    /// Clamp applied to an explicitly requested vehicle count.
    pub min_vehicles: usize,
    pub max_vehicles: usize,
    /// Clamp applied to the automatic `ceil(stations / stations_per_vehicle)`.
    pub auto_min_vehicles: usize,
    pub auto_max_vehicles: usize,
    pub stations_per_vehicle: usize,
    /// Start delay between consecutive vehicles.
    pub stagger_secs: f32,

    // ── Stepping ──────────────────────────────────────────────────────────
    /// Upper bound applied by `OhtSystem::advance` to one step's elapsed time.
    pub max_tick_secs: f32,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for OhtConfig {
    fn default() -> Self {
        Self {
            rail_height:            4.5,
            axis_tolerance:         0.05,
            vehicle_speed:          5.0,
            payload_travel_offset:  -0.35,
            payload_lowered_offset: -3.22,
            lower_secs:             2.2,
            dwell_secs:             3.0,
            raise_secs:             2.2,
            transfer_fraction:      0.45,
            min_station_distance:   4.0,
            random_attempts:        20,
            min_vehicles:           1,
            max_vehicles:           20,
            auto_min_vehicles:      2,
            auto_max_vehicles:      6,
            stations_per_vehicle:   3,
            stagger_secs:           1.8,
            max_tick_secs:          0.1,
            seed:                   42,
        }
    }
}

impl OhtConfig {
    /// Reject configurations that would stall or divide by zero.
    pub fn validate(&self) -> OhtResult<()> {
        let positive = [
            ("vehicle_speed", self.vehicle_speed),
            ("lower_secs", self.lower_secs),
            ("dwell_secs", self.dwell_secs),
            ("raise_secs", self.raise_secs),
            ("max_tick_secs", self.max_tick_secs),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(OhtError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("axis_tolerance", self.axis_tolerance),
            ("min_station_distance", self.min_station_distance),
            ("stagger_secs", self.stagger_secs),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(OhtError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.transfer_fraction) {
            return Err(OhtError::Config(format!(
                "transfer_fraction must be within [0, 1], got {}",
                self.transfer_fraction
            )));
        }
        if self.min_vehicles == 0 || self.min_vehicles > self.max_vehicles {
            return Err(OhtError::Config(format!(
                "vehicle bounds [{}, {}] are empty or start at zero",
                self.min_vehicles, self.max_vehicles
            )));
        }
        if self.auto_min_vehicles == 0 || self.auto_min_vehicles > self.auto_max_vehicles {
            return Err(OhtError::Config(format!(
                "automatic vehicle bounds [{}, {}] are empty or start at zero",
                self.auto_min_vehicles, self.auto_max_vehicles
            )));
        }
        if self.stations_per_vehicle == 0 {
            return Err(OhtError::Config("stations_per_vehicle must be at least 1".into()));
        }
        Ok(())
    }

    /// Fleet size for `station_count` stations.
    ///
    /// An explicit request is clamped to `[min_vehicles, max_vehicles]`;
    /// otherwise `ceil(station_count / stations_per_vehicle)` is clamped to
    /// `[auto_min_vehicles, auto_max_vehicles]`.
    pub fn vehicle_count(&self, station_count: usize, requested: Option<usize>) -> usize {
        match requested {
            Some(n) => n.clamp(self.min_vehicles, self.max_vehicles),
            None => station_count
                .div_ceil(self.stations_per_vehicle)
                .clamp(self.auto_min_vehicles, self.auto_max_vehicles),
        }
    }

    /// Seconds into the docked dwell at which the payload is exchanged.
    #[inline]
    pub fn transfer_at_secs(&self) -> f32 {
        self.dwell_secs * self.transfer_fraction
    }
}
