//! `oht-vehicle`: per-vehicle transfer state machine and station allocation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`phase`]      | `Phase` - Wait / Travel / Lower / Docked / Raise               |
//! | [`vehicle`]    | `Vehicle` - position, route, timers, payload render state      |
//! | [`allocator`]  | `PortAllocator` - exclusive station claims for one generation  |
//! | [`selection`]  | `select_next_station` - departure target heuristic             |
//! | [`motion`]     | constant-speed waypoint stepping, ease-in-out                  |
//! | [`event`]      | `VehicleEvent` - transitions reported to observers             |
//! | [`controller`] | `VehicleController`, `TickContext`                             |
//!
//! # Transfer cycle
//!
//! ```text
//! Wait ─► Travel ─► Lower ─► Docked ─► Raise ─┐
//!           ▲  │                               │
//!           │  └─ target taken: reroute ◄──┐   │
//!           └──────────────────────────────┴───┘
//! ```
//!
//! A controller owns its vehicle and RNG.  Everything shared by the fleet
//! (stations, allocator, router, config) arrives through a [`TickContext`]
//! borrowed for the duration of one step, so claims are only ever touched by
//! the vehicle currently being advanced.

pub mod allocator;
pub mod controller;
pub mod event;
pub mod motion;
pub mod phase;
pub mod selection;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use allocator::PortAllocator;
pub use controller::{TickContext, VehicleController};
pub use event::VehicleEvent;
pub use phase::Phase;
pub use selection::select_next_station;
pub use vehicle::Vehicle;
