//! Equipment kinds and the placement record consumed from the layout editor.
//!
//! The core never decides where equipment stands; it receives a list of
//! [`Placement`]s whenever the floor layout changes and derives dock stations
//! from them.

use std::str::FromStr;

use crate::{EquipmentId, OhtError};

/// The process-tool families that can be placed on the fab floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentKind {
    /// Extreme-ultraviolet lithography scanner.
    Euv,
    /// Chemical vapour deposition.
    Cvd,
    /// Chemical-mechanical planarization.
    Cmp,
    /// Plasma etch.
    Etch,
    /// Scanning electron microscope (metrology, no load ports).
    Sem,
}

impl EquipmentKind {
    /// Every kind, in declaration order.
    pub const ALL: [EquipmentKind; 5] = [
        EquipmentKind::Euv,
        EquipmentKind::Cvd,
        EquipmentKind::Cmp,
        EquipmentKind::Etch,
        EquipmentKind::Sem,
    ];

    /// Upper-case label used in CSV tables and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentKind::Euv  => "EUV",
            EquipmentKind::Cvd  => "CVD",
            EquipmentKind::Cmp  => "CMP",
            EquipmentKind::Etch => "ETCH",
            EquipmentKind::Sem  => "SEM",
        }
    }
}

impl std::fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = OhtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EquipmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OhtError::Parse(format!("unknown equipment kind {trimmed:?}")))
    }
}

/// One placed piece of equipment: kind, floor position, and yaw.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub equipment_id: EquipmentId,
    pub kind:         EquipmentKind,
    /// Floor X of the equipment origin.
    pub x:            f32,
    /// Floor Z of the equipment origin.
    pub z:            f32,
    /// Rotation about +Y, radians.
    pub yaw:          f32,
}

impl Placement {
    #[inline]
    pub fn new(equipment_id: EquipmentId, kind: EquipmentKind, x: f32, z: f32, yaw: f32) -> Self {
        Self { equipment_id, kind, x, z, yaw }
    }
}
