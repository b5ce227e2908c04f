//! `oht-core`: foundational types for the OHT rail simulation.
//!
//! This crate is a dependency of every other `oht-*` crate.  It has no
//! `oht-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EquipmentId`, `VehicleId`, `StationId`               |
//! | [`geo`]         | `Point3`, rail-plane distance helpers                 |
//! | [`equipment`]   | `EquipmentKind`, `Placement`                          |
//! | [`config`]      | `OhtConfig` and its validation                        |
//! | [`time`]        | `SimClock`, `clamp_step`                              |
//! | [`rng`]         | `VehicleRng` (per-vehicle), `SimRng` (global)         |
//! | [`error`]       | `OhtError`, `OhtResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod equipment;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::OhtConfig;
pub use equipment::{EquipmentKind, Placement};
pub use error::{OhtError, OhtResult};
pub use geo::Point3;
pub use ids::{EquipmentId, StationId, VehicleId};
pub use rng::{SimRng, VehicleRng};
pub use time::{SimClock, clamp_step};
