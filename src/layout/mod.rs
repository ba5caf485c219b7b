//! Layout engine for row virtualization and column positioning.
//!
//! This module handles:
//! - Row geometry (fixed or per-row heights) with cached prefix sums
//! - Aperture resolution: mapping a scroll offset to the rows to materialize
//! - Spacer heights standing in for the rows outside the aperture
//! - Column left offsets, sticky offsets and style patches

mod aperture;
mod columns;
mod row_height;
mod viewport;

pub use aperture::{ApertureResolver, ApertureState, SpacerHeights, DEFAULT_OVERSCAN_SIZE};
pub use columns::{
    reorder_columns, ColumnLayout, ColumnPosition, ColumnSpec, ColumnStylePatch, ReorderPreview,
    MIN_COLUMN_WIDTH,
};
pub use row_height::{RowHeight, DEFAULT_ROW_HEIGHT};
pub use viewport::ViewportComputer;
