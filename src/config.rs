//! Table configuration and validation.
//!
//! `TableOptions` is the plain-data part (deserializable from JSON for the CLI
//! and the wasm facade). `TableConfig` adds the row set, the columns, the row
//! height model and the host callbacks.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::layout::{
    ColumnSpec, RowHeight, DEFAULT_OVERSCAN_SIZE, DEFAULT_ROW_HEIGHT, MIN_COLUMN_WIDTH,
};
use crate::viewer::drag::{REORDER_THRESHOLD, RESIZE_HANDLE_WIDTH};

/// Called when the table wants more rows.
pub type LoadCallback = Box<dyn FnMut()>;
/// Called with `(column_index, new_width)` when a resize is released.
pub type WidthChangeCallback = Box<dyn FnMut(usize, f64)>;
/// Called with `(from_index, to_index)` when a reorder is released.
pub type OrderChangeCallback = Box<dyn FnMut(usize, usize)>;

fn default_row_height() -> Option<f64> {
    Some(DEFAULT_ROW_HEIGHT)
}

fn default_overscan_size() -> f64 {
    DEFAULT_OVERSCAN_SIZE
}

fn default_resize_handle_width() -> f64 {
    RESIZE_HANDLE_WIDTH
}

fn default_min_column_width() -> f64 {
    MIN_COLUMN_WIDTH
}

fn default_reorder_threshold() -> f64 {
    REORDER_THRESHOLD
}

/// Scalar table options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Height of the scroll viewport (required)
    pub viewport_height: f64,
    /// Fixed row height; `None` while a per-row height model is in use.
    /// Kept in step with [`TableConfig::row_height`].
    #[serde(default = "default_row_height")]
    pub row_height: Option<f64>,
    #[serde(default = "default_overscan_size")]
    pub overscan_size: f64,
    #[serde(default)]
    pub header_count: usize,
    #[serde(default)]
    pub footer_count: usize,
    #[serde(default)]
    pub fixed_columns_left_count: Option<usize>,
    /// Enables infinite loading when set
    #[serde(default)]
    pub infinite_load_begin_edge_offset: Option<f64>,
    #[serde(default)]
    pub is_infinite_loading: bool,
    #[serde(default)]
    pub display_bottom_upwards: bool,
    #[serde(default = "default_resize_handle_width")]
    pub resize_handle_width: f64,
    #[serde(default = "default_min_column_width")]
    pub min_column_width: f64,
    #[serde(default = "default_reorder_threshold")]
    pub reorder_threshold: f64,
}

impl TableOptions {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            row_height: Some(DEFAULT_ROW_HEIGHT),
            overscan_size: DEFAULT_OVERSCAN_SIZE,
            header_count: 0,
            footer_count: 0,
            fixed_columns_left_count: None,
            infinite_load_begin_edge_offset: None,
            is_infinite_loading: false,
            display_bottom_upwards: false,
            resize_handle_width: RESIZE_HANDLE_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            reorder_threshold: REORDER_THRESHOLD,
        }
    }

    /// Parse options from JSON.
    ///
    /// # Errors
    /// Returns [`TableError::Json`] on malformed input or a missing
    /// `viewportHeight`, and [`TableError::Configuration`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check scalar options.
    ///
    /// # Errors
    /// Returns [`TableError::Configuration`] on the first invalid value.
    pub fn validate(&self) -> Result<()> {
        non_negative("viewportHeight", self.viewport_height)?;
        if let Some(h) = self.row_height {
            non_negative("rowHeight", h)?;
        }
        non_negative("overscanSize", self.overscan_size)?;
        non_negative("resizeHandleWidth", self.resize_handle_width)?;
        non_negative("minColumnWidth", self.min_column_width)?;
        non_negative("reorderThreshold", self.reorder_threshold)?;
        if let Some(edge) = self.infinite_load_begin_edge_offset {
            non_negative("infiniteLoadBeginEdgeOffset", edge)?;
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TableError::config(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}

/// Check a column set against the row set it will display.
///
/// # Errors
/// Returns [`TableError::Configuration`] if rows exist without columns or a
/// column width is not a positive number.
pub fn validate_columns<D>(columns: &[ColumnSpec<D>], row_count: usize) -> Result<()> {
    if columns.is_empty() && row_count > 0 {
        return Err(TableError::config("columns must not be empty when rows are present"));
    }
    for (index, column) in columns.iter().enumerate() {
        if !(column.width.is_finite() && column.width > 0.0) {
            return Err(TableError::config(format!(
                "column {index} width must be a positive number, got {}",
                column.width
            )));
        }
    }
    Ok(())
}

/// Full construction-time configuration of a table.
pub struct TableConfig<R, D = ()> {
    pub options: TableOptions,
    pub row_height: RowHeight,
    pub rows: Vec<R>,
    pub columns: Vec<ColumnSpec<D>>,
    pub on_infinite_load: Option<LoadCallback>,
    pub on_column_width_change: Option<WidthChangeCallback>,
    pub on_column_order_change: Option<OrderChangeCallback>,
}

impl<R, D> TableConfig<R, D> {
    pub fn new(
        viewport_height: f64,
        row_height: impl Into<RowHeight>,
        rows: Vec<R>,
        columns: Vec<ColumnSpec<D>>,
    ) -> Self {
        let row_height = row_height.into();
        let mut options = TableOptions::new(viewport_height);
        options.row_height = row_height.fixed_height();
        Self {
            options,
            row_height,
            rows,
            columns,
            on_infinite_load: None,
            on_column_width_change: None,
            on_column_order_change: None,
        }
    }

    /// Build a config with a fixed row height taken from `options`
    /// (the default height when `rowHeight` is null).
    pub fn from_options(
        mut options: TableOptions,
        rows: Vec<R>,
        columns: Vec<ColumnSpec<D>>,
    ) -> Self {
        let height = options.row_height.unwrap_or(DEFAULT_ROW_HEIGHT);
        options.row_height = Some(height);
        Self {
            row_height: RowHeight::Fixed(height),
            options,
            rows,
            columns,
            on_infinite_load: None,
            on_column_width_change: None,
            on_column_order_change: None,
        }
    }

    pub fn overscan_size(mut self, overscan_size: f64) -> Self {
        self.options.overscan_size = overscan_size;
        self
    }

    pub fn header_count(mut self, count: usize) -> Self {
        self.options.header_count = count;
        self
    }

    pub fn footer_count(mut self, count: usize) -> Self {
        self.options.footer_count = count;
        self
    }

    pub fn fixed_columns_left_count(mut self, count: usize) -> Self {
        self.options.fixed_columns_left_count = Some(count);
        self
    }

    pub fn infinite_load_begin_edge_offset(mut self, offset: f64) -> Self {
        self.options.infinite_load_begin_edge_offset = Some(offset);
        self
    }

    pub fn is_infinite_loading(mut self, loading: bool) -> Self {
        self.options.is_infinite_loading = loading;
        self
    }

    pub fn display_bottom_upwards(mut self, bottom_up: bool) -> Self {
        self.options.display_bottom_upwards = bottom_up;
        self
    }

    pub fn on_infinite_load(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_infinite_load = Some(Box::new(f));
        self
    }

    /// Setting this enables column resizing.
    pub fn on_column_width_change(mut self, f: impl FnMut(usize, f64) + 'static) -> Self {
        self.on_column_width_change = Some(Box::new(f));
        self
    }

    /// Setting this enables column reordering.
    pub fn on_column_order_change(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_column_order_change = Some(Box::new(f));
        self
    }

    /// Fixed-left column count, clamped to the number of columns.
    pub fn resolved_fixed_left_count(&self) -> usize {
        let requested = self.options.fixed_columns_left_count.unwrap_or(0);
        if requested > self.columns.len() {
            warn!(
                "fixedColumnsLeftCount {requested} exceeds {} columns; clamping",
                self.columns.len()
            );
        }
        requested.min(self.columns.len())
    }

    /// Validate everything except per-row heights (checked when the
    /// `ViewportComputer` is built).
    ///
    /// # Errors
    /// Returns [`TableError::Configuration`] on the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;
        if let RowHeight::Fixed(h) = self.row_height {
            non_negative("rowHeight", h)?;
        }
        validate_columns(&self.columns, self.rows.len())
    }
}
