//! CSV dock-offset loader.
//!
//! # CSV format
//!
//! One row per load port.  Rows for the same kind keep their file order,
//! which becomes station order.
//!
//! ```csv
//! kind,dx,dz
//! EUV,8.335,-1.0
//! EUV,8.335,0.0
//! EUV,8.335,1.0
//! CMP,-3.385,-0.45
//! ```
//!
//! `kind` is one of `EUV`, `CVD`, `CMP`, `ETCH`, `SEM` (case-insensitive).
//! Kinds absent from the file get no load ports.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use oht_core::EquipmentKind;

use crate::offsets::{DockOffset, DockOffsetTable};
use crate::LayoutError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OffsetRecord {
    kind: String,
    dx:   f32,
    dz:   f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DockOffsetTable`] from a CSV file.
pub fn load_offsets_csv(path: &Path) -> Result<DockOffsetTable, LayoutError> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_offsets_reader(file)
}

/// Like [`load_offsets_csv`] but accepts any `Read` source.
pub fn load_offsets_reader<R: Read>(reader: R) -> Result<DockOffsetTable, LayoutError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = DockOffsetTable::new();
    let mut rows = 0usize;

    for (line, result) in csv_reader.deserialize::<OffsetRecord>().enumerate() {
        let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        let kind: EquipmentKind = row
            .kind
            .parse()
            .map_err(|e| LayoutError::Parse(format!("row {}: {e}", line + 1)))?;
        if !(row.dx.is_finite() && row.dz.is_finite()) {
            return Err(LayoutError::Parse(format!(
                "row {}: offset ({}, {}) is not finite",
                line + 1,
                row.dx,
                row.dz
            )));
        }
        table.push(kind, DockOffset::new(row.dx, row.dz));
        rows += 1;
    }

    log::debug!("loaded {rows} dock offsets");
    Ok(table)
}
