//! System observer trait for progress reporting and data collection.

use oht_core::SimClock;
use oht_layout::DockStation;
use oht_vehicle::{VehicleController, VehicleEvent};

/// Callbacks invoked by [`OhtSystem`][crate::OhtSystem] on rebuilds and steps.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - transfer counter
///
/// ```rust,ignore
/// struct Transfers(usize);
///
/// impl SystemObserver for Transfers {
///     fn on_vehicle_event(&mut self, event: &VehicleEvent, _stations: &[DockStation]) {
///         if matches!(event, VehicleEvent::Transferred { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SystemObserver {
    /// Called after a rebuild installs a new generation.  `stations` is empty
    /// for a degenerate layout.
    fn on_rebuild(&mut self, _generation: u64, _stations: &[DockStation], _vehicles: usize) {}

    /// Called once per vehicle event, in fleet order, after all vehicles have
    /// been advanced for the step.
    fn on_vehicle_event(&mut self, _event: &VehicleEvent, _stations: &[DockStation]) {}

    /// Called at the end of every step with read access to the whole fleet.
    fn on_tick_end(&mut self, _clock: &SimClock, _fleet: &[VehicleController]) {}
}

/// A [`SystemObserver`] that does nothing.
pub struct NoopObserver;

impl SystemObserver for NoopObserver {}
