//! Simulation time model.
//!
//! # Design
//!
//! The host drives the simulation with variable-length steps (one per
//! rendered frame, typically).  `SimClock` records how many steps have run and
//! how much simulated time they covered.  Elapsed time is accumulated in
//! `f64` so that hours of 16 ms frames do not drift; per-step deltas stay
//! `f32` to match the geometry.
//!
//! A stalled host (debugger pause, background tab) would otherwise hand the
//! simulation one enormous step; [`clamp_step`] bounds it.

use std::fmt;

/// Clamp a raw host step to `[0, max_secs]`.  Non-finite input becomes `0`.
#[inline]
pub fn clamp_step(raw_secs: f32, max_secs: f32) -> f32 {
    if !raw_secs.is_finite() {
        return 0.0;
    }
    raw_secs.clamp(0.0, max_secs)
}

/// Step counter and accumulated simulated time.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Number of completed steps.
    pub steps: u64,
    /// Simulated seconds covered by those steps.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one step of `dt_secs`.
    #[inline]
    pub fn advance(&mut self, dt_secs: f32) {
        self.steps += 1;
        self.elapsed_secs += dt_secs as f64;
    }

    /// Break elapsed time into (hours, minutes, seconds) for log lines.
    pub fn elapsed_hms(&self) -> (u64, u32, f32) {
        let total = self.elapsed_secs.max(0.0);
        let hours = (total / 3_600.0) as u64;
        let minutes = ((total % 3_600.0) / 60.0) as u32;
        let seconds = (total % 60.0) as f32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "step {} ({:02}:{:02}:{:05.2})", self.steps, h, m, s)
    }
}
