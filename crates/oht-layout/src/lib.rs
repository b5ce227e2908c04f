//! `oht-layout`: dock stations, offset tables, and rail routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`offsets`]  | `DockOffset`, `DockOffsetTable` (kind → local offsets)      |
//! | [`resolver`] | `DockStation`, `resolve_stations`                           |
//! | [`router`]   | `Router` trait, `Route`, `ManhattanRouter`                  |
//! | [`loader`]   | `load_offsets_csv`, `load_offsets_reader`                   |
//! | [`error`]    | `LayoutError`, `LayoutResult<T>`                            |
//!
//! # Geometry in one paragraph
//!
//! Each equipment kind has a fixed list of load-port offsets in its own
//! local frame.  The resolver rotates those offsets by the equipment's yaw,
//! translates them to its floor position, and lifts them to the rail plane.
//! The router then joins any two rail-plane points with at most two
//! axis-aligned segments.

pub mod error;
pub mod loader;
pub mod offsets;
pub mod resolver;
pub mod router;


pub use error::{LayoutError, LayoutResult};
pub use loader::{load_offsets_csv, load_offsets_reader};
pub use offsets::{DockOffset, DockOffsetTable};
pub use resolver::{DockStation, expected_station_count, resolve_stations};
pub use router::{ManhattanRouter, Route, Router};
