//! Unit tests for oht-vehicle.

use std::f32::consts::FRAC_PI_2;

use oht_core::{EquipmentId, OhtConfig, Point3, StationId, VehicleId, VehicleRng};
use oht_layout::{DockStation, ManhattanRouter, Router};

use crate::motion::{ease_in_out, phase_done, step_toward};
use crate::{
    Phase, PortAllocator, TickContext, Vehicle, VehicleController, VehicleEvent,
    select_next_station,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Fixture {
    stations:  Vec<DockStation>,
    allocator: PortAllocator,
    router:    ManhattanRouter,
    config:    OhtConfig,
}

impl Fixture {
    fn new(positions: &[(f32, f32)]) -> Self {
        let config = OhtConfig::default();
        let stations = positions
            .iter()
            .enumerate()
            .map(|(i, &(x, z))| DockStation {
                equipment_id: EquipmentId(100 + i as u32),
                position:     Point3::on_rail(x, z, config.rail_height),
                facing_angle: 0.25,
            })
            .collect();
        Self {
            stations,
            allocator: PortAllocator::new(0),
            router:    ManhattanRouter::from_config(&config),
            config,
        }
    }

    /// Four stations spaced 10 apart along X.
    fn line() -> Self {
        Self::new(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)])
    }

    fn controller(&self, id: u32, at: u32, target: u32, phase: Phase) -> VehicleController {
        let mut v = Vehicle::parked(
            VehicleId(id),
            self.stations[at as usize].position,
            StationId(target),
            0.0,
            self.config.payload_travel_offset,
        );
        v.phase = phase;
        if phase == Phase::Travel && at != target {
            let route = self.router.route(v.position, self.stations[target as usize].position);
            v.set_route(route.waypoints);
        }
        VehicleController::new(v, VehicleRng::from_seed(7 + id as u64), 0)
    }
}

fn step(ctrl: &mut VehicleController, dt: f32, fx: &mut Fixture) -> Vec<VehicleEvent> {
    let mut events = Vec::new();
    let mut ctx = TickContext {
        stations:  &fx.stations,
        allocator: &mut fx.allocator,
        router:    &fx.router,
        config:    &fx.config,
    };
    ctrl.tick(dt, &mut ctx, &mut events);
    events
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── Motion helpers ────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn step_stops_short_of_target() {
        let s = step_toward(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0), 4.0);
        assert!(!s.reached);
        assert!(approx(s.position.x, 4.0));
    }

    #[test]
    fn step_snaps_instead_of_overshooting() {
        let target = Point3::new(3.0, 0.0, 0.0);
        let s = step_toward(Point3::default(), target, 100.0);
        assert!(s.reached);
        assert_eq!(s.position, target);
    }

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!(approx(ease_in_out(0.5), 0.5));
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(2.0) == 1.0);
    }

    #[test]
    fn phase_done_tolerates_accumulation() {
        let mut t = 0.0f32;
        for _ in 0..10 {
            t += 0.22;
        }
        assert!(phase_done(t, 2.2));
        assert!(!phase_done(1.98, 2.2));
    }
}

// ── PortAllocator ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocator {
    use super::*;

    #[test]
    fn claim_is_exclusive() {
        let mut a = PortAllocator::new(3);
        assert!(a.claim(StationId(1), VehicleId(0)));
        assert!(!a.claim(StationId(1), VehicleId(1)));
        assert_eq!(a.owner(StationId(1)), Some(VehicleId(0)));
        assert!(a.is_claimed_by_other(StationId(1), VehicleId(1)));
        assert!(!a.is_claimed_by_other(StationId(1), VehicleId(0)));
        assert_eq!(a.generation(), 3);
    }

    #[test]
    fn claim_is_idempotent_for_owner() {
        let mut a = PortAllocator::new(0);
        assert!(a.claim(StationId(2), VehicleId(4)));
        assert!(a.claim(StationId(2), VehicleId(4)));
        assert_eq!(a.claimed_count(), 1);
    }

    #[test]
    fn release_frees_station() {
        let mut a = PortAllocator::new(0);
        a.claim(StationId(5), VehicleId(1));
        a.claim(StationId(0), VehicleId(2));
        assert_eq!(a.claimed(), vec![StationId(0), StationId(5)]);
        assert_eq!(a.release(StationId(5)), Some(VehicleId(1)));
        assert!(!a.is_claimed(StationId(5)));
        assert_eq!(a.release(StationId(5)), None);
        assert!(a.claim(StationId(5), VehicleId(3)));
    }
}

// ── Station selection ─────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn never_returns_excluded_station() {
        let fx = Fixture::line();
        let mut rng = VehicleRng::from_seed(1);
        for _ in 0..200 {
            let pick = select_next_station(
                fx.stations[1].position, StationId(1), &fx.stations, &fx.allocator, &mut rng, &fx.config,
            );
            assert_ne!(pick, StationId(1));
            assert!(pick.index() < fx.stations.len());
        }
    }

    #[test]
    fn random_pass_respects_claims_and_distance() {
        let mut fx = Fixture::line();
        fx.allocator.claim(StationId(2), VehicleId(9));
        let mut rng = VehicleRng::from_seed(2);
        for _ in 0..200 {
            let pick = select_next_station(
                fx.stations[0].position, StationId(0), &fx.stations, &fx.allocator, &mut rng, &fx.config,
            );
            assert!(pick == StationId(1) || pick == StationId(3), "picked {pick}");
        }
    }

    #[test]
    fn linear_scan_when_everything_is_close() {
        // All stations within min_station_distance: random pass always fails.
        let mut fx = Fixture::new(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        fx.allocator.claim(StationId(2), VehicleId(9));
        let mut rng = VehicleRng::from_seed(3);
        let pick = select_next_station(
            fx.stations[1].position, StationId(1), &fx.stations, &fx.allocator, &mut rng, &fx.config,
        );
        assert_eq!(pick, StationId(3));
    }

    #[test]
    fn full_contention_still_picks_a_target() {
        let mut fx = Fixture::line();
        for i in 0..4 {
            fx.allocator.claim(StationId(i), VehicleId(i));
        }
        let mut rng = VehicleRng::from_seed(4);
        let pick = select_next_station(
            fx.stations[0].position, StationId(0), &fx.stations, &fx.allocator, &mut rng, &fx.config,
        );
        assert_ne!(pick, StationId(0));
    }

    #[test]
    fn full_contention_close_stations_falls_back_to_next_index() {
        let mut fx = Fixture::new(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        for i in 0..3 {
            fx.allocator.claim(StationId(i), VehicleId(i));
        }
        let mut rng = VehicleRng::from_seed(5);
        let pick = select_next_station(
            fx.stations[2].position, StationId(2), &fx.stations, &fx.allocator, &mut rng, &fx.config,
        );
        assert_eq!(pick, StationId(0));
    }

    #[test]
    fn degenerate_station_lists() {
        let fx = Fixture::new(&[(0.0, 0.0)]);
        let mut rng = VehicleRng::from_seed(6);
        let one = select_next_station(
            Point3::default(), StationId(0), &fx.stations, &fx.allocator, &mut rng, &fx.config,
        );
        assert_eq!(one, StationId(0));
        let none = select_next_station(
            Point3::default(), StationId(0), &[], &fx.allocator, &mut rng, &fx.config,
        );
        assert_eq!(none, StationId::INVALID);
    }
}

// ── VehicleController ─────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use super::*;

    #[test]
    fn wait_counts_down_then_departs() {
        let mut fx = Fixture::line();
        let v = Vehicle::parked(
            VehicleId(0), fx.stations[0].position, StationId(0), 1.0, fx.config.payload_travel_offset,
        );
        let mut ctrl = VehicleController::new(v, VehicleRng::from_seed(1), 0);

        assert!(step(&mut ctrl, 0.5, &mut fx).is_empty());
        assert_eq!(ctrl.vehicle().phase, Phase::Wait);

        let events = step(&mut ctrl, 0.6, &mut fx);
        assert_eq!(ctrl.vehicle().phase, Phase::Travel);
        assert_eq!(ctrl.vehicle().wait_remaining, 0.0);
        assert_eq!(
            events,
            vec![VehicleEvent::Departed { vehicle: VehicleId(0), from: StationId::INVALID, to: StationId(0) }]
        );
    }

    #[test]
    fn first_leg_docks_at_seed_station() {
        let mut fx = Fixture::line();
        let v = Vehicle::parked(
            VehicleId(0), fx.stations[2].position, StationId(2), 0.0, fx.config.payload_travel_offset,
        );
        let mut ctrl = VehicleController::new(v, VehicleRng::from_seed(1), 0);
        step(&mut ctrl, 0.016, &mut fx);
        let events = step(&mut ctrl, 0.016, &mut fx);
        assert_eq!(ctrl.vehicle().phase, Phase::Lower);
        assert_eq!(events, vec![VehicleEvent::Docking { vehicle: VehicleId(0), station: StationId(2) }]);
        assert_eq!(fx.allocator.owner(StationId(2)), Some(VehicleId(0)));
    }

    #[test]
    fn travel_moves_at_constant_speed_and_sets_heading() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 0, 1, Phase::Travel);
        step(&mut ctrl, 0.5, &mut fx);
        let v = ctrl.vehicle();
        assert!(approx(v.position.x, 2.5));
        assert!(approx(v.heading, FRAC_PI_2));
        assert_eq!(v.phase, Phase::Travel);
    }

    #[test]
    fn large_step_stops_at_route_corner() {
        let mut fx = Fixture::new(&[(0.0, 0.0), (10.0, 10.0)]);
        let mut ctrl = fx.controller(0, 0, 1, Phase::Travel);
        assert_eq!(ctrl.vehicle().route.len(), 2);

        step(&mut ctrl, 10.0, &mut fx);
        let v = ctrl.vehicle();
        assert!(approx(v.position.x, 10.0) && approx(v.position.z, 0.0));
        assert_eq!(v.route_index, 1);
        assert_eq!(v.phase, Phase::Travel);

        let events = step(&mut ctrl, 10.0, &mut fx);
        assert!(approx(ctrl.vehicle().position.z, 10.0));
        assert_eq!(ctrl.vehicle().phase, Phase::Lower);
        assert!(matches!(events[0], VehicleEvent::Docking { station: StationId(1), .. }));
    }

    #[test]
    fn arrival_sets_payload_yaw_from_station_facing() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 0, 1, Phase::Travel);
        step(&mut ctrl, 5.0, &mut fx);
        let v = ctrl.vehicle();
        assert_eq!(v.phase, Phase::Lower);
        assert!(approx(v.payload_yaw, 0.25 - FRAC_PI_2));
        assert!(approx(v.payload_world_yaw(), 0.25));
    }

    #[test]
    fn arrival_at_claimed_station_reroutes() {
        let mut fx = Fixture::line();
        fx.allocator.claim(StationId(1), VehicleId(5));
        let mut ctrl = fx.controller(0, 0, 1, Phase::Travel);

        let events = step(&mut ctrl, 5.0, &mut fx);
        let v = ctrl.vehicle();
        assert_eq!(v.phase, Phase::Travel);
        assert_ne!(v.target_station, StationId(1));
        assert!(!v.route.is_empty());
        assert_eq!(v.route_index, 0);
        assert!(matches!(
            events[..],
            [VehicleEvent::Rerouted { blocked: StationId(1), .. }]
        ));
        assert_eq!(fx.allocator.owner(StationId(1)), Some(VehicleId(5)));
    }

    #[test]
    fn lower_completes_exactly_once_under_sub_steps() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 1, 1, Phase::Lower);
        fx.allocator.claim(StationId(1), VehicleId(0));

        let mut docked_events = 0;
        for i in 0..10 {
            let events = step(&mut ctrl, 0.22, &mut fx);
            docked_events += events.iter().filter(|e| matches!(e, VehicleEvent::Docked { .. })).count();
            if i < 9 {
                assert_eq!(ctrl.vehicle().phase, Phase::Lower, "early transition at tick {i}");
            }
        }
        assert_eq!(ctrl.vehicle().phase, Phase::Docked);
        assert_eq!(ctrl.vehicle().payload_offset, fx.config.payload_lowered_offset);

        let events = step(&mut ctrl, 0.22, &mut fx);
        docked_events += events.iter().filter(|e| matches!(e, VehicleEvent::Docked { .. })).count();
        assert_eq!(docked_events, 1);
    }

    #[test]
    fn lowering_payload_moves_monotonically() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 1, 1, Phase::Lower);
        let mut last = ctrl.vehicle().payload_offset;
        for _ in 0..5 {
            step(&mut ctrl, 0.4, &mut fx);
            let now = ctrl.vehicle().payload_offset;
            assert!(now < last);
            last = now;
        }
    }

    #[test]
    fn docked_exchanges_at_fraction_then_raises() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 1, 1, Phase::Docked);

        step(&mut ctrl, 1.3, &mut fx);
        assert!(!ctrl.vehicle().transfer_completed);

        let events = step(&mut ctrl, 0.1, &mut fx);
        assert!(ctrl.vehicle().transfer_completed);
        assert!(ctrl.vehicle().carrying_payload);
        assert_eq!(events, vec![VehicleEvent::Transferred { vehicle: VehicleId(0), station: StationId(1) }]);

        step(&mut ctrl, 1.5, &mut fx);
        assert_eq!(ctrl.vehicle().phase, Phase::Docked);
        let events = step(&mut ctrl, 0.1, &mut fx);
        assert_eq!(ctrl.vehicle().phase, Phase::Raise);
        assert_eq!(events, vec![VehicleEvent::Raising { vehicle: VehicleId(0), station: StationId(1) }]);
    }

    #[test]
    fn one_long_dwell_step_exchanges_before_raising() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 1, 1, Phase::Docked);
        let events = step(&mut ctrl, 5.0, &mut fx);
        assert!(matches!(
            events[..],
            [VehicleEvent::Transferred { .. }, VehicleEvent::Raising { .. }]
        ));
    }

    #[test]
    fn raise_releases_and_departs_elsewhere() {
        let mut fx = Fixture::line();
        let mut ctrl = fx.controller(0, 1, 1, Phase::Raise);
        fx.allocator.claim(StationId(1), VehicleId(0));

        step(&mut ctrl, 1.0, &mut fx);
        assert_eq!(ctrl.vehicle().phase, Phase::Raise);
        assert!(fx.allocator.is_claimed(StationId(1)));

        let events = step(&mut ctrl, 1.2, &mut fx);
        let v = ctrl.vehicle();
        assert_eq!(v.phase, Phase::Travel);
        assert_eq!(v.payload_offset, fx.config.payload_travel_offset);
        assert!(!v.transfer_completed);
        assert!(!fx.allocator.is_claimed(StationId(1)));
        assert_ne!(v.target_station, StationId(1));
        assert_eq!(v.route.last().copied(), Some(fx.stations[v.target_station.index()].position));
        assert!(matches!(events[..], [VehicleEvent::Departed { from: StationId(1), .. }]));
    }

    #[test]
    fn event_reports_vehicle() {
        let e = VehicleEvent::Docked { vehicle: VehicleId(3), station: StationId(1) };
        assert_eq!(e.vehicle(), VehicleId(3));
    }
}
