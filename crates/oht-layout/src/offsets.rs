//! Per-kind dock offset table.
//!
//! Offsets are the load-port FOUP centres of each equipment model, in the
//! model's local frame (X along the tool's long axis, Z across its face).
//! The table is plain data handed to the resolver; nothing here is global.

use rustc_hash::FxHashMap;

use oht_core::EquipmentKind;

/// A load-port position in the equipment's local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockOffset {
    pub dx: f32,
    pub dz: f32,
}

impl DockOffset {
    #[inline]
    pub const fn new(dx: f32, dz: f32) -> Self {
        Self { dx, dz }
    }
}

/// Mapping from equipment kind to its ordered list of dock offsets.
///
/// Kinds without an entry have no load ports.  Offset order is significant:
/// it fixes station order and therefore vehicle seeding.
#[derive(Clone, Debug, Default)]
pub struct DockOffsetTable {
    offsets: FxHashMap<EquipmentKind, Vec<DockOffset>>,
}

impl DockOffsetTable {
    /// An empty table (every kind has zero load ports).
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets of the standard tool set.
    ///
    /// | Kind | Load ports                         |
    /// |------|------------------------------------|
    /// | EUV  | 3 on the +X face, z = −1, 0, 1     |
    /// | CVD  | 2 on the +X face, z = ±1           |
    /// | CMP  | 2 on the −X face, z = ±0.45        |
    /// | ETCH | 2 on the +X face, z = ±1           |
    /// | SEM  | none                               |
    pub fn standard() -> Self {
        Self::new()
            .with(EquipmentKind::Euv, vec![
                DockOffset::new(8.335, -1.0),
                DockOffset::new(8.335, 0.0),
                DockOffset::new(8.335, 1.0),
            ])
            .with(EquipmentKind::Cvd, vec![
                DockOffset::new(3.735, -1.0),
                DockOffset::new(3.735, 1.0),
            ])
            .with(EquipmentKind::Cmp, vec![
                DockOffset::new(-3.385, -0.45),
                DockOffset::new(-3.385, 0.45),
            ])
            .with(EquipmentKind::Etch, vec![
                DockOffset::new(2.585, -1.0),
                DockOffset::new(2.585, 1.0),
            ])
    }

    /// Builder-style insert; replaces any previous entry for `kind`.
    pub fn with(mut self, kind: EquipmentKind, offsets: Vec<DockOffset>) -> Self {
        self.insert(kind, offsets);
        self
    }

    pub fn insert(&mut self, kind: EquipmentKind, offsets: Vec<DockOffset>) {
        self.offsets.insert(kind, offsets);
    }

    /// Append one offset to `kind`'s list.
    pub fn push(&mut self, kind: EquipmentKind, offset: DockOffset) {
        self.offsets.entry(kind).or_default().push(offset);
    }

    /// Offsets for `kind`; empty if the kind has none.
    pub fn offsets(&self, kind: EquipmentKind) -> &[DockOffset] {
        self.offsets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of load ports for `kind`.
    #[inline]
    pub fn port_count(&self, kind: EquipmentKind) -> usize {
        self.offsets(kind).len()
    }
}
