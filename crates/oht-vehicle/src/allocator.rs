//! Exclusive dock-station claims.

use rustc_hash::FxHashMap;

use oht_core::{StationId, VehicleId};

/// The claimed stations of one rebuild generation.
///
/// A vehicle claims its target when it arrives and releases it when it
/// leaves.  Each station has at most one owner; a claim by a second vehicle
/// is refused rather than overwritten.
#[derive(Debug, Default, Clone)]
pub struct PortAllocator {
    generation: u64,
    owners:     FxHashMap<StationId, VehicleId>,
}

impl PortAllocator {
    /// An empty allocator tagged with its rebuild generation.
    pub fn new(generation: u64) -> Self {
        Self { generation, owners: FxHashMap::default() }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Claim `station` for `vehicle`.
    ///
    /// Returns `true` if `vehicle` now holds the claim (including when it
    /// already did).  Returns `false`, leaving the owner untouched, if another
    /// vehicle holds it.
    pub fn claim(&mut self, station: StationId, vehicle: VehicleId) -> bool {
        match self.owners.get(&station) {
            Some(&owner) => owner == vehicle,
            None => {
                self.owners.insert(station, vehicle);
                true
            }
        }
    }

    /// Drop the claim on `station`, returning the previous owner.
    pub fn release(&mut self, station: StationId) -> Option<VehicleId> {
        self.owners.remove(&station)
    }

    #[inline]
    pub fn is_claimed(&self, station: StationId) -> bool {
        self.owners.contains_key(&station)
    }

    /// `true` if some vehicle other than `vehicle` holds `station`.
    #[inline]
    pub fn is_claimed_by_other(&self, station: StationId, vehicle: VehicleId) -> bool {
        self.owners.get(&station).is_some_and(|&owner| owner != vehicle)
    }

    #[inline]
    pub fn owner(&self, station: StationId) -> Option<VehicleId> {
        self.owners.get(&station).copied()
    }

    #[inline]
    pub fn claimed_count(&self) -> usize {
        self.owners.len()
    }

    /// Claimed stations in ascending order.
    pub fn claimed(&self) -> Vec<StationId> {
        let mut v: Vec<StationId> = self.owners.keys().copied().collect();
        v.sort_unstable();
        v
    }
}
