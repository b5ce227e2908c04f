//! Transition events emitted by vehicle controllers.

use oht_core::{StationId, VehicleId};

/// Something observable happened to a vehicle during a tick.
///
/// Controllers push these into a caller-supplied buffer in the order they
/// occur; the system forwards them to its observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleEvent {
    /// Left `from` toward `to`.  `from` is `StationId::INVALID` when the
    /// vehicle leaves its start-up stagger.
    Departed { vehicle: VehicleId, from: StationId, to: StationId },
    /// Arrived at `blocked` to find it taken; now heading to `to`.
    Rerouted { vehicle: VehicleId, blocked: StationId, to: StationId },
    /// Claimed `station` and started lowering.
    Docking { vehicle: VehicleId, station: StationId },
    /// Payload resting on the port.
    Docked { vehicle: VehicleId, station: StationId },
    /// Payload exchanged with the equipment.
    Transferred { vehicle: VehicleId, station: StationId },
    /// Started hoisting back up.
    Raising { vehicle: VehicleId, station: StationId },
}

impl VehicleEvent {
    pub fn vehicle(&self) -> VehicleId {
        match *self {
            VehicleEvent::Departed { vehicle, .. }
            | VehicleEvent::Rerouted { vehicle, .. }
            | VehicleEvent::Docking { vehicle, .. }
            | VehicleEvent::Docked { vehicle, .. }
            | VehicleEvent::Transferred { vehicle, .. }
            | VehicleEvent::Raising { vehicle, .. } => vehicle,
        }
    }
}
