//! infinite-table - virtualized table core
//!
//! Renders very large tables inside a fixed-height scroll viewport by
//! materializing only the rows near the visible area:
//! - Fixed or per-row heights, with exact spacer heights
//! - Bottom-up ("chat") display that stays pinned to the newest row
//! - Infinite loading at either edge, driven by the host's loading flag
//! - Live column resize and reorder with style patches for the renderer
//!
//! Nothing here draws. Hosts feed scroll and pointer events into a [`Table`]
//! and read back the aperture, spacer heights and column style patches.
//!
//! # Usage
//!
//! ```
//! use infinite_table::{ColumnSpec, Table, TableConfig};
//!
//! let rows: Vec<u32> = (0..10_000).collect();
//! let columns = vec![ColumnSpec::with_width(90.0); 5];
//! let mut table = Table::new(TableConfig::new(400.0, 30.0, rows, columns)).unwrap();
//! let outcome = table.handle_scroll(12_000.0);
//! assert!(outcome.aperture_changed);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use config::{TableConfig, TableOptions};
pub use error::{Result, TableError};
pub use layout::{
    reorder_columns, ApertureResolver, ApertureState, ColumnLayout, ColumnSpec, ColumnStylePatch,
    RowHeight, SpacerHeights, ViewportComputer,
};
pub use viewer::drag::{DragEffect, DragSession};
pub use viewer::{RenderPlan, ScrollOutcome, Table, TableUpdate, UpdateOutcome};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
