//! Fluent builder for constructing an [`OhtSystem`].

use std::path::PathBuf;

use oht_core::{OhtConfig, Placement};
use oht_layout::{DockOffsetTable, ManhattanRouter, Router, load_offsets_csv};

use crate::{OhtSystem, SimResult};

/// Fluent builder for [`OhtSystem<R>`].
///
/// # Required inputs
///
/// - [`OhtConfig`] - rail geometry, timings, fleet sizing, seed
/// - `R: Router` - rail routing (e.g. [`ManhattanRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.offsets(t)`           | `DockOffsetTable::standard()`    |
/// | `.offsets_csv(path)`    | -  (loaded at `build`)           |
/// | `.seed(s)`              | `config.seed`                    |
/// | `.placements(v, n)`     | no initial layout (empty system) |
///
/// # Example
///
/// ```rust,ignore
/// let mut system = OhtSystemBuilder::manhattan(OhtConfig::default())
///     .offsets_csv("config/dock_offsets.csv")
///     .placements(layout, Some(4))
///     .build()?;
/// ```
pub struct OhtSystemBuilder<R: Router> {
    config:      OhtConfig,
    router:      R,
    offsets:     Option<DockOffsetTable>,
    offsets_csv: Option<PathBuf>,
    placements:  Option<(Vec<Placement>, Option<usize>)>,
}

impl OhtSystemBuilder<ManhattanRouter> {
    /// Builder with the axis-aligned router configured from `config`.
    pub fn manhattan(config: OhtConfig) -> Self {
        let router = ManhattanRouter::from_config(&config);
        Self::new(config, router)
    }
}

impl<R: Router> OhtSystemBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: OhtConfig, router: R) -> Self {
        Self {
            config,
            router,
            offsets:     None,
            offsets_csv: None,
            placements:  None,
        }
    }

    /// Use `table` for dock offsets.
    pub fn offsets(mut self, table: DockOffsetTable) -> Self {
        self.offsets = Some(table);
        self
    }

    /// Load dock offsets from a CSV file at build time.  Takes precedence
    /// over [`offsets`][Self::offsets].
    pub fn offsets_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.offsets_csv = Some(path.into());
        self
    }

    /// Override the master RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Rebuild from `placements` as the last step of `build`.
    pub fn placements(mut self, placements: Vec<Placement>, desired_vehicles: Option<usize>) -> Self {
        self.placements = Some((placements, desired_vehicles));
        self
    }

    /// Validate inputs, load the offset table, and return a ready system.
    pub fn build(self) -> SimResult<OhtSystem<R>> {
        self.config.validate()?;

        let offsets = match self.offsets_csv {
            Some(path) => load_offsets_csv(&path)?,
            None => self.offsets.unwrap_or_else(DockOffsetTable::standard),
        };

        let mut system = OhtSystem::new(self.config, offsets, self.router);
        if let Some((placements, desired)) = self.placements {
            system.rebuild(&placements, desired);
        }
        Ok(system)
    }
}
