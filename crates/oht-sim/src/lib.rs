//! `oht-sim`: the OHT system orchestrator.
//!
//! # Step loop
//!
//! ```text
//! on placement change:
//!   rebuild(placements, vehicles?)
//!     ① resolve dock stations from placements + offset table
//!     ② < 2 stations → empty system, stop
//!     ③ new generation: fresh PortAllocator, fleet seeded evenly over
//!        the station list with a 1.8 s start stagger per vehicle
//!
//! every host frame:
//!   advance(raw_dt)          (clamps to max_tick_secs, then tick)
//!     for vehicle in fleet order:
//!       controller.tick(dt)  - may route, claim, release
//!     forward VehicleEvents to the observer
//!
//! for the status lamps:
//!   busy_equipment_ids()     - equipment with a vehicle in Lower/Docked/Raise
//! ```
//!
//! Fleet order is fixed, so two vehicles reaching a free station in the same
//! step resolve by index: the lower index claims it, the other reroutes.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oht_core::{EquipmentId, EquipmentKind, OhtConfig, Placement};
//! use oht_sim::OhtSystemBuilder;
//!
//! let mut system = OhtSystemBuilder::manhattan(OhtConfig::default()).build()?;
//! system.rebuild(&[
//!     Placement::new(EquipmentId(1), EquipmentKind::Euv, 0.0, 0.0, 0.0),
//!     Placement::new(EquipmentId(2), EquipmentKind::Etch, 0.0, 12.0, 0.0),
//! ], None);
//! loop {
//!     system.advance(frame_secs);
//!     lamps.update(&system.busy_equipment_ids());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod system;


pub use builder::OhtSystemBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SystemObserver};
pub use system::OhtSystem;
