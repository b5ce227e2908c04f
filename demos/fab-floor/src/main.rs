//! fab-floor: a two-minute run of the OHT rail system over a six-tool bay.
//!
//! Drives the system the way a renderer would: one `advance` per frame at
//! 60 Hz, with an occasional long frame to show step clamping.  Halfway
//! through, the etcher is moved and the system rebuilds around it.

mod layout;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use oht_core::{EquipmentId, OhtConfig, SimClock};
use oht_layout::{DockStation, load_offsets_reader};
use oht_sim::{OhtSystemBuilder, SystemObserver};
use oht_vehicle::{VehicleController, VehicleEvent};

use layout::{build_bay, with_etch_moved};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const VEHICLES:      usize = 4;
const FRAME_SECS:    f32   = 1.0 / 60.0;
const SIM_SECS:      f32   = 120.0;
const HITCH_EVERY:   u64   = 900; // every 15 s the "renderer" stalls
const HITCH_SECS:    f32   = 0.75;
const MOVE_AT_FRAME: u64   = 3_600;

// ── Dock offsets CSV ──────────────────────────────────────────────────────────

// Port offsets in equipment-local coordinates.  SEM is absent: no ports.
const DOCK_OFFSETS_CSV: &str = "\
kind,dx,dz\n\
EUV,8.335,-1.0\n\
EUV,8.335,0.0\n\
EUV,8.335,1.0\n\
CVD,3.735,-1.0\n\
CVD,3.735,1.0\n\
CMP,-3.385,-0.45\n\
CMP,-3.385,0.45\n\
ETCH,2.585,-1.0\n\
ETCH,2.585,1.0\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FloorStats {
    rebuilds:   usize,
    transfers:  BTreeMap<EquipmentId, usize>,
    reroutes:   usize,
    departures: usize,
    peak_busy:  usize,
    steps:      u64,
}

impl SystemObserver for FloorStats {
    fn on_rebuild(&mut self, generation: u64, stations: &[DockStation], vehicles: usize) {
        self.rebuilds += 1;
        println!(
            "  generation {generation}: {} stations, {vehicles} vehicles",
            stations.len()
        );
    }

    fn on_vehicle_event(&mut self, event: &VehicleEvent, stations: &[DockStation]) {
        match *event {
            VehicleEvent::Transferred { station, .. } => {
                if let Some(s) = stations.get(station.index()) {
                    *self.transfers.entry(s.equipment_id).or_default() += 1;
                }
            }
            VehicleEvent::Rerouted { .. } => self.reroutes += 1,
            VehicleEvent::Departed { .. } => self.departures += 1,
            _ => {}
        }
    }

    fn on_tick_end(&mut self, _clock: &SimClock, fleet: &[VehicleController]) {
        self.steps += 1;
        let busy = fleet.iter().filter(|c| c.vehicle().phase.is_at_port()).count();
        self.peak_busy = self.peak_busy.max(busy);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== fab-floor - overhead hoist transport ===");
    println!("Vehicles: {VEHICLES}  |  Sim: {SIM_SECS} s at 60 Hz  |  Seed: {SEED}");
    println!();

    // 1. Bay layout and dock offsets.
    let (placements, [_euv_a, _euv_b, _cvd, etch, _cmp, _sem]) = build_bay();
    let offsets = load_offsets_reader(Cursor::new(DOCK_OFFSETS_CSV))?;
    println!("Bay: {} tools", placements.len());

    // 2. Build the system.
    let mut stats = FloorStats::default();
    let mut system = OhtSystemBuilder::manhattan(OhtConfig::default())
        .offsets(offsets)
        .seed(SEED)
        .build()?;
    system.rebuild_observed(&placements, Some(VEHICLES), &mut stats);

    // 3. Run.
    let frames = (SIM_SECS / FRAME_SECS) as u64;
    let t0 = Instant::now();
    for frame in 1..=frames {
        if frame == MOVE_AT_FRAME {
            println!("  {}: etcher moved, rebuilding", system.clock());
            let moved = with_etch_moved(placements.clone(), etch);
            system.rebuild_observed(&moved, Some(VEHICLES), &mut stats);
        }
        let raw = if frame % HITCH_EVERY == 0 { HITCH_SECS } else { FRAME_SECS };
        system.advance_observed(raw, &mut stats);
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), system.clock());
    println!("  steps       : {}", stats.steps);
    println!("  rebuilds    : {}", stats.rebuilds);
    println!("  departures  : {}", stats.departures);
    println!("  reroutes    : {}", stats.reroutes);
    println!("  peak busy   : {} vehicles at ports", stats.peak_busy);
    println!();

    println!("{:<10} {:<10}", "Equipment", "Transfers");
    println!("{}", "-".repeat(20));
    for (id, n) in &stats.transfers {
        println!("{:<10} {:<10}", id.0, n);
    }
    println!();

    // 5. Final vehicle table.
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<16}",
        "Vehicle", "Phase", "Target", "Payload", "Position"
    );
    println!("{}", "-".repeat(52));
    for v in system.vehicles() {
        println!(
            "{:<8} {:<8} {:<8} {:<8} ({:>6.2}, {:>6.2})",
            v.id.0,
            v.phase.as_str(),
            v.target_station.0,
            if v.carrying_payload { "yes" } else { "no" },
            v.position.x,
            v.position.z,
        );
    }

    let busy = system.busy_equipment_ids();
    println!();
    println!("Busy equipment now: {busy:?}");

    Ok(())
}
