//! Placement list → dock stations.

use std::f32::consts::PI;

use oht_core::{EquipmentId, Placement, Point3};

use crate::DockOffsetTable;

/// A fixed rail-plane point where a vehicle transfers payloads with one
/// piece of equipment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockStation {
    pub equipment_id: EquipmentId,
    /// World position on the rail plane.
    pub position:     Point3,
    /// World yaw the payload must take so its door faces the equipment.
    pub facing_angle: f32,
}

/// Resolve every dock station for `placements`.
///
/// Stations are emitted in placement order, then in per-kind offset order.
/// Vehicle seeding indexes into this list, so the order is part of the
/// contract.
///
/// The payload's door is on its local +X face.  Ports on the equipment's +X
/// side (`dx >= 0`) need the door turned back toward −X in equipment space,
/// giving a world facing of `-yaw`; ports on the −X side need `π - yaw`.
pub fn resolve_stations(
    placements:  &[Placement],
    table:       &DockOffsetTable,
    rail_height: f32,
) -> Vec<DockStation> {
    let mut stations = Vec::with_capacity(expected_station_count(placements, table));

    for placement in placements {
        let (sin, cos) = placement.yaw.sin_cos();
        for offset in table.offsets(placement.kind) {
            let x = placement.x + offset.dx * cos - offset.dz * sin;
            let z = placement.z + offset.dx * sin + offset.dz * cos;
            let facing_angle = if offset.dx >= 0.0 {
                -placement.yaw
            } else {
                PI - placement.yaw
            };
            stations.push(DockStation {
                equipment_id: placement.equipment_id,
                position:     Point3::on_rail(x, z, rail_height),
                facing_angle,
            });
        }
    }

    log::trace!(
        "resolved {} dock stations from {} placements",
        stations.len(),
        placements.len()
    );
    stations
}

/// Total port count over `placements`, i.e. the length `resolve_stations` returns.
pub fn expected_station_count(placements: &[Placement], table: &DockOffsetTable) -> usize {
    placements.iter().map(|p| table.port_count(p.kind)).sum()
}
