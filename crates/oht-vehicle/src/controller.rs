//! The per-vehicle phase state machine.

use oht_core::{OhtConfig, StationId, VehicleRng};
use oht_layout::{DockStation, Router};

use crate::motion::{ease_in_out, lerp, phase_done, step_toward};
use crate::{Phase, PortAllocator, Vehicle, VehicleEvent, select_next_station};

// ── TickContext ───────────────────────────────────────────────────────────────

/// Fleet-wide state lent to one controller for one step.
///
/// Built by the system for each vehicle in turn.  The allocator is borrowed
/// mutably, so only the vehicle being advanced can claim or release.
pub struct TickContext<'a, R: Router + ?Sized> {
    /// Stations of the current generation, indexed by `StationId`.
    pub stations:  &'a [DockStation],
    pub allocator: &'a mut PortAllocator,
    pub router:    &'a R,
    pub config:    &'a OhtConfig,
}

// ── VehicleController ─────────────────────────────────────────────────────────

/// Owns one vehicle and its RNG and advances it through the transfer cycle.
pub struct VehicleController {
    pub(crate) vehicle:    Vehicle,
    pub(crate) rng:        VehicleRng,
    pub(crate) generation: u64,
}

impl VehicleController {
    /// Wrap `vehicle`, binding it to allocator generation `generation`.
    pub fn new(vehicle: Vehicle, rng: VehicleRng, generation: u64) -> Self {
        Self { vehicle, rng, generation }
    }

    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the state machine by `dt` seconds.
    ///
    /// At most one phase transition happens per call (two events are possible
    /// when the docked dwell both exchanges and ends in one step).  Leftover
    /// time after a transition is dropped.
    pub fn tick<R: Router + ?Sized>(
        &mut self,
        dt:     f32,
        ctx:    &mut TickContext<'_, R>,
        events: &mut Vec<VehicleEvent>,
    ) {
        debug_assert_eq!(
            self.generation,
            ctx.allocator.generation(),
            "controller ticked against another generation's allocator"
        );
        match self.vehicle.phase {
            Phase::Wait   => self.tick_wait(dt, ctx, events),
            Phase::Travel => self.tick_travel(dt, ctx, events),
            Phase::Lower  => self.tick_lower(dt, ctx.config, events),
            Phase::Docked => self.tick_docked(dt, ctx.config, events),
            Phase::Raise  => self.tick_raise(dt, ctx, events),
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn tick_wait<R: Router + ?Sized>(
        &mut self,
        dt:     f32,
        ctx:    &mut TickContext<'_, R>,
        events: &mut Vec<VehicleEvent>,
    ) {
        let v = &mut self.vehicle;
        v.wait_remaining -= dt;
        if v.wait_remaining > 0.0 {
            return;
        }
        v.wait_remaining = 0.0;

        let target = v.target_station;
        let route = ctx.router.route(v.position, ctx.stations[target.index()].position);
        v.set_route(route.waypoints);
        v.phase = Phase::Travel;
        log::debug!("{} released from stagger toward {}", v.id, target);
        events.push(VehicleEvent::Departed {
            vehicle: v.id,
            from:    StationId::INVALID,
            to:      target,
        });
    }

    fn tick_travel<R: Router + ?Sized>(
        &mut self,
        dt:     f32,
        ctx:    &mut TickContext<'_, R>,
        events: &mut Vec<VehicleEvent>,
    ) {
        let v = &mut self.vehicle;
        if let Some(waypoint) = v.next_waypoint() {
            let step = step_toward(v.position, waypoint, ctx.config.vehicle_speed * dt);
            if let Some(heading) = v.position.heading_to(step.position) {
                v.heading = heading;
            }
            v.position = step.position;
            if step.reached {
                v.route_index += 1;
            }
        }
        if self.vehicle.next_waypoint().is_none() {
            self.arrive(ctx, events);
        }
    }

    /// End of route: dock if the target is free, otherwise re-enter Travel
    /// toward an alternative.
    fn arrive<R: Router + ?Sized>(
        &mut self,
        ctx:    &mut TickContext<'_, R>,
        events: &mut Vec<VehicleEvent>,
    ) {
        let v = &mut self.vehicle;
        let station = v.target_station;

        if !ctx.allocator.claim(station, v.id) {
            let next = select_next_station(
                v.position,
                station,
                ctx.stations,
                ctx.allocator,
                &mut self.rng,
                ctx.config,
            );
            let route = ctx.router.route(v.position, ctx.stations[next.index()].position);
            v.target_station = next;
            v.set_route(route.waypoints);
            log::debug!("{} found {} taken, rerouting to {}", v.id, station, next);
            events.push(VehicleEvent::Rerouted { vehicle: v.id, blocked: station, to: next });
            return;
        }

        v.phase = Phase::Lower;
        v.phase_elapsed = 0.0;
        v.payload_yaw = ctx.stations[station.index()].facing_angle - v.heading;
        log::debug!("{} docking at {}", v.id, station);
        events.push(VehicleEvent::Docking { vehicle: v.id, station });
    }

    fn tick_lower(&mut self, dt: f32, config: &OhtConfig, events: &mut Vec<VehicleEvent>) {
        let v = &mut self.vehicle;
        v.phase_elapsed += dt;
        if phase_done(v.phase_elapsed, config.lower_secs) {
            v.payload_offset = config.payload_lowered_offset;
            v.phase = Phase::Docked;
            v.phase_elapsed = 0.0;
            events.push(VehicleEvent::Docked { vehicle: v.id, station: v.target_station });
            return;
        }
        let t = ease_in_out(v.phase_elapsed / config.lower_secs);
        v.payload_offset = lerp(config.payload_travel_offset, config.payload_lowered_offset, t);
    }

    fn tick_docked(&mut self, dt: f32, config: &OhtConfig, events: &mut Vec<VehicleEvent>) {
        let v = &mut self.vehicle;
        v.phase_elapsed += dt;

        if !v.transfer_completed && phase_done(v.phase_elapsed, config.transfer_at_secs()) {
            v.transfer_completed = true;
            v.carrying_payload = true;
            log::trace!("{} exchanged payload at {}", v.id, v.target_station);
            events.push(VehicleEvent::Transferred { vehicle: v.id, station: v.target_station });
        }

        if phase_done(v.phase_elapsed, config.dwell_secs) {
            v.phase = Phase::Raise;
            v.phase_elapsed = 0.0;
            events.push(VehicleEvent::Raising { vehicle: v.id, station: v.target_station });
        }
    }

    fn tick_raise<R: Router + ?Sized>(
        &mut self,
        dt:     f32,
        ctx:    &mut TickContext<'_, R>,
        events: &mut Vec<VehicleEvent>,
    ) {
        let config = ctx.config;
        let v = &mut self.vehicle;
        v.phase_elapsed += dt;
        if !phase_done(v.phase_elapsed, config.raise_secs) {
            let t = ease_in_out(v.phase_elapsed / config.raise_secs);
            v.payload_offset = lerp(config.payload_lowered_offset, config.payload_travel_offset, t);
            return;
        }

        let from = v.target_station;
        v.payload_offset = config.payload_travel_offset;
        ctx.allocator.release(from);

        let next = select_next_station(
            v.position,
            from,
            ctx.stations,
            ctx.allocator,
            &mut self.rng,
            config,
        );
        let route = ctx.router.route(v.position, ctx.stations[next.index()].position);
        v.target_station = next;
        v.set_route(route.waypoints);
        v.transfer_completed = false;
        v.phase = Phase::Travel;
        v.phase_elapsed = 0.0;
        log::debug!("{} departed {} for {}", v.id, from, next);
        events.push(VehicleEvent::Departed { vehicle: v.id, from, to: next });
    }
}
