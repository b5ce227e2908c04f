//! Departure target heuristic.
//!
//! Four passes, each weaker than the last:
//!
//! 1. random picks that are unclaimed and at least `min_station_distance`
//!    away (spreads traffic across the floor);
//! 2. linear scan after `exclude` for any unclaimed station;
//! 3. random far picks ignoring claims (every station is taken; keep moving
//!    and let the arrival check reroute);
//! 4. `exclude + 1`.
//!
//! The result is never `exclude` when two or more stations exist, so a
//! vehicle always leaves the port it just served.

use oht_core::{OhtConfig, Point3, StationId, VehicleRng};
use oht_layout::DockStation;

use crate::PortAllocator;

/// Choose the next station for a vehicle at `position` leaving `exclude`.
///
/// With fewer than two stations there is nothing to choose: returns station
/// 0 for a single station and [`StationId::INVALID`] for none.
pub fn select_next_station(
    position:  Point3,
    exclude:   StationId,
    stations:  &[DockStation],
    allocator: &PortAllocator,
    rng:       &mut VehicleRng,
    config:    &OhtConfig,
) -> StationId {
    let n = stations.len();
    match n {
        0 => return StationId::INVALID,
        1 => return StationId(0),
        _ => {}
    }

    if let Some(hit) = random_far(position, exclude, stations, Some(allocator), rng, config) {
        return hit;
    }

    for k in 1..n {
        let idx = StationId(((exclude.index() + k) % n) as u32);
        if idx != exclude && !allocator.is_claimed(idx) {
            return idx;
        }
    }

    log::warn!(
        "all {n} stations claimed ({} held); picking a target regardless",
        allocator.claimed_count()
    );
    if let Some(hit) = random_far(position, exclude, stations, None, rng, config) {
        return hit;
    }

    StationId(((exclude.index() + 1) % n) as u32)
}

/// Up to `config.random_attempts` random picks.  With `allocator = None` the
/// claim check is skipped.
fn random_far(
    position:  Point3,
    exclude:   StationId,
    stations:  &[DockStation],
    allocator: Option<&PortAllocator>,
    rng:       &mut VehicleRng,
    config:    &OhtConfig,
) -> Option<StationId> {
    for _ in 0..config.random_attempts {
        let idx = StationId(rng.gen_range(0..stations.len()) as u32);
        if idx == exclude {
            continue;
        }
        if allocator.is_some_and(|a| a.is_claimed(idx)) {
            continue;
        }
        if position.planar_distance(stations[idx.index()].position) >= config.min_station_distance {
            return Some(idx);
        }
    }
    None
}
