//! Deterministic per-vehicle and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = generation_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! The generation seed is drawn from the system-level [`SimRng`] on every
//! rebuild, so:
//!
//! - Vehicles never share RNG state; the order in which they draw does not
//!   matter.
//! - A run is fully reproducible from the master seed and the sequence of
//!   rebuild/tick calls.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG, used by the station-selection heuristic.
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from a generation seed and a vehicle ID.
    pub fn new(generation_seed: u64, vehicle: VehicleId) -> Self {
        let seed = generation_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly; handy in tests that exercise one controller in isolation.
    pub fn from_seed(seed: u64) -> Self {
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Owned by the system and used only to derive the
/// seed of each rebuild generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw the seed for a new rebuild generation, mixed with its number so
    /// two generations never collide even if the draws repeat.
    pub fn generation_seed(&mut self, generation: u64) -> u64 {
        self.0.r#gen::<u64>() ^ generation.wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
