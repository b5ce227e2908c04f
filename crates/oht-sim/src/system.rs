//! The `OhtSystem` struct: rebuild, step, and busy-equipment reporting.

use std::collections::BTreeSet;

use oht_core::{
    EquipmentId, OhtConfig, Placement, SimClock, SimRng, StationId, VehicleId, VehicleRng,
    clamp_step,
};
use oht_layout::{DockOffsetTable, DockStation, ManhattanRouter, Router, resolve_stations};
use oht_vehicle::{PortAllocator, TickContext, Vehicle, VehicleController, VehicleEvent};

use crate::{NoopObserver, SystemObserver};

/// The rail network simulation.
///
/// Owns the current rebuild generation: the resolved stations, the port
/// allocator, and the vehicle fleet.  [`rebuild`][Self::rebuild] replaces
/// all three at once; [`tick`][Self::tick] advances every vehicle once.
///
/// Create via [`OhtSystemBuilder`][crate::OhtSystemBuilder].
pub struct OhtSystem<R: Router = ManhattanRouter> {
    pub(crate) config:     OhtConfig,
    pub(crate) offsets:    DockOffsetTable,
    pub(crate) router:     R,
    pub(crate) rng:        SimRng,
    pub(crate) stations:   Vec<DockStation>,
    pub(crate) allocator:  PortAllocator,
    pub(crate) fleet:      Vec<VehicleController>,
    pub(crate) generation: u64,
    pub(crate) clock:      SimClock,
    /// Reused per-step event buffer.
    pub(crate) events:     Vec<VehicleEvent>,
}

impl<R: Router> OhtSystem<R> {
    pub(crate) fn new(config: OhtConfig, offsets: DockOffsetTable, router: R) -> Self {
        Self {
            rng: SimRng::new(config.seed),
            config,
            offsets,
            router,
            stations:   Vec::new(),
            allocator:  PortAllocator::new(0),
            fleet:      Vec::new(),
            generation: 0,
            clock:      SimClock::new(),
            events:     Vec::new(),
        }
    }

    // ── Rebuild ───────────────────────────────────────────────────────────

    /// Replace the current generation with one derived from `placements`.
    ///
    /// `desired_vehicles` is clamped to the configured bounds; `None` sizes
    /// the fleet from the station count.  Fewer than two stations leaves the
    /// system empty.
    pub fn rebuild(&mut self, placements: &[Placement], desired_vehicles: Option<usize>) {
        self.rebuild_observed(placements, desired_vehicles, &mut NoopObserver);
    }

    /// [`rebuild`][Self::rebuild] with an observer notified of the result.
    pub fn rebuild_observed<O: SystemObserver>(
        &mut self,
        placements:       &[Placement],
        desired_vehicles: Option<usize>,
        observer:         &mut O,
    ) {
        self.generation += 1;
        self.allocator = PortAllocator::new(self.generation);
        self.fleet.clear();
        self.stations = resolve_stations(placements, &self.offsets, self.config.rail_height);

        let n = self.stations.len();
        if n < 2 {
            log::info!(
                "generation {}: {} placements gave {} stations, fleet cleared",
                self.generation,
                placements.len(),
                n
            );
            self.stations.clear();
            observer.on_rebuild(self.generation, &self.stations, 0);
            return;
        }

        let count = self.config.vehicle_count(n, desired_vehicles);
        let generation_seed = self.rng.generation_seed(self.generation);

        self.fleet = (0..count)
            .map(|i| {
                let id = VehicleId(i as u32);
                let seed_station = StationId((i * n / count) as u32);
                let vehicle = Vehicle::parked(
                    id,
                    self.stations[seed_station.index()].position,
                    seed_station,
                    i as f32 * self.config.stagger_secs,
                    self.config.payload_travel_offset,
                );
                VehicleController::new(vehicle, VehicleRng::new(generation_seed, id), self.generation)
            })
            .collect();

        log::info!(
            "generation {}: {} placements, {} stations, {} vehicles",
            self.generation,
            placements.len(),
            n,
            count
        );
        observer.on_rebuild(self.generation, &self.stations, count);
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every vehicle by `dt` seconds, in fleet order.
    ///
    /// `dt` is used as given; hosts feeding raw frame times should call
    /// [`advance`][Self::advance] instead.
    pub fn tick(&mut self, dt: f32) {
        self.tick_observed(dt, &mut NoopObserver);
    }

    /// [`tick`][Self::tick] with an observer receiving this step's events.
    pub fn tick_observed<O: SystemObserver>(&mut self, dt: f32, observer: &mut O) {
        let mut events = std::mem::take(&mut self.events);
        events.clear();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let mut ctx = TickContext {
            stations:  &self.stations,
            allocator: &mut self.allocator,
            router:    &self.router,
            config:    &self.config,
        };
        for controller in &mut self.fleet {
            controller.tick(dt, &mut ctx, &mut events);
        }

        for event in &events {
            observer.on_vehicle_event(event, &self.stations);
        }
        self.events = events;

        self.clock.advance(dt);
        log::trace!("{}: {} events", self.clock, self.events.len());
        observer.on_tick_end(&self.clock, &self.fleet);
    }

    /// Clamp a raw host step to `[0, max_tick_secs]` and tick once.
    pub fn advance(&mut self, raw_dt: f32) {
        self.advance_observed(raw_dt, &mut NoopObserver);
    }

    pub fn advance_observed<O: SystemObserver>(&mut self, raw_dt: f32, observer: &mut O) {
        let dt = clamp_step(raw_dt, self.config.max_tick_secs);
        self.tick_observed(dt, observer);
    }

    /// Run `steps` ticks of `dt` seconds each.
    pub fn run_steps<O: SystemObserver>(&mut self, steps: u64, dt: f32, observer: &mut O) {
        for _ in 0..steps {
            self.tick_observed(dt, observer);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Equipment that currently has a vehicle lowering, docked, or raising at
    /// one of its stations.
    ///
    /// Derived from vehicle phases on every call, never from the allocator's
    /// claim set.
    pub fn busy_equipment_ids(&self) -> BTreeSet<EquipmentId> {
        self.fleet
            .iter()
            .map(VehicleController::vehicle)
            .filter(|v| v.phase.is_at_port())
            .filter_map(|v| self.stations.get(v.target_station.index()))
            .map(|s| s.equipment_id)
            .collect()
    }

    /// Stations of the current generation (empty for a degenerate layout).
    #[inline]
    pub fn stations(&self) -> &[DockStation] {
        &self.stations
    }

    #[inline]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Live vehicle state, in fleet order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.fleet.iter().map(VehicleController::vehicle)
    }

    #[inline]
    pub fn controllers(&self) -> &[VehicleController] {
        &self.fleet
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.fleet.len()
    }

    #[inline]
    pub fn allocator(&self) -> &PortAllocator {
        &self.allocator
    }

    /// Number of rebuilds so far.  Allocator and controllers carry it too.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &OhtConfig {
        &self.config
    }

    #[inline]
    pub fn offsets(&self) -> &DockOffsetTable {
        &self.offsets
    }

    #[inline]
    pub fn router(&self) -> &R {
        &self.router
    }
}
