//! Structured error types for infinite-table.
//!
//! Drag-controller misuse is not an error (see `viewer::drag`); everything
//! here is a caller bug or a bad configuration. Failures inside host
//! callbacks are opaque to the table: they are logged and otherwise ignored.

use std::fmt;

use log::warn;

/// All errors that can occur while configuring or querying a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Invalid or incomplete table configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Row index outside `[0, item_count)`.
    #[error("Row index {index} out of range for {item_count} rows")]
    InvalidArgument {
        /// Requested row index.
        index: usize,
        /// Number of rows the computer was built for.
        item_count: usize,
    },

    /// Column index outside `[0, column_count)`.
    #[error("Column index {index} out of range for {column_count} columns")]
    ColumnIndex {
        /// Requested column index.
        index: usize,
        /// Number of columns.
        column_count: usize,
    },

    /// JSON decoding error for options or scenarios.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

impl TableError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Log a failed host callback. Returns `true` if `result` was an error.
pub fn report_callback_error<T, E: fmt::Debug>(
    callback: &str,
    result: std::result::Result<T, E>,
) -> bool {
    match result {
        Ok(_) => false,
        Err(e) => {
            warn!("{callback} callback failed: {e:?}");
            true
        }
    }
}
