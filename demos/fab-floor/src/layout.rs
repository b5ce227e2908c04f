//! Demo bay layout.
//!
//! Six tools along a 40 x 20 bay: two EUV scanners on the west wall, a CVD
//! and an etcher in the middle row, a CMP polisher on the east wall, and a
//! SEM that has no load ports and so never gets a vehicle.

use oht_core::{EquipmentId, EquipmentKind, Placement};

/// Build the six-tool bay.
///
/// Returns `(placements, [euv_a, euv_b, cvd, etch, cmp, sem])`.
pub fn build_bay() -> (Vec<Placement>, [EquipmentId; 6]) {
    let ids = [1, 2, 3, 4, 5, 6].map(EquipmentId);
    let [euv_a, euv_b, cvd, etch, cmp, sem] = ids;

    let placements = vec![
        Placement::new(euv_a, EquipmentKind::Euv,   0.0,  0.0, 0.0),
        Placement::new(euv_b, EquipmentKind::Euv,   0.0, 12.0, 0.0),
        Placement::new(cvd,   EquipmentKind::Cvd,  18.0,  0.0, std::f32::consts::FRAC_PI_2),
        Placement::new(etch,  EquipmentKind::Etch, 18.0, 12.0, std::f32::consts::FRAC_PI_2),
        Placement::new(cmp,   EquipmentKind::Cmp,  36.0,  6.0, std::f32::consts::PI),
        Placement::new(sem,   EquipmentKind::Sem,  28.0, 18.0, 0.0),
    ];
    (placements, ids)
}

/// The same bay with the etcher moved one bay east, as an operator dragging
/// it in the editor would produce.
pub fn with_etch_moved(mut placements: Vec<Placement>, etch: EquipmentId) -> Vec<Placement> {
    for p in placements.iter_mut().filter(|p| p.equipment_id == etch) {
        p.x += 8.0;
    }
    placements
}
