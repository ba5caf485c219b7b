//! WASM-exported `JsTable` wrapper.
//!
//! Rows are opaque to the core, so the JavaScript side passes only a row
//! count; row data stays in JS. Callbacks are plain JS functions.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::config::{
    LoadCallback, OrderChangeCallback, TableConfig, TableOptions, WidthChangeCallback,
};
use crate::error::report_callback_error;
use crate::layout::{ColumnSpec, RowHeight};
use crate::viewer::{Table, TableUpdate};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn js_row_height(f: Function) -> RowHeight {
    RowHeight::variable(move |index| {
        let result = f.call1(&JsValue::NULL, &JsValue::from_f64(index as f64));
        let height = result.as_ref().ok().and_then(JsValue::as_f64);
        report_callback_error("rowHeight", result);
        // NaN fails row-height validation with the offending index.
        height.unwrap_or(f64::NAN)
    })
}

/// Virtualized table driven from JavaScript.
#[wasm_bindgen]
pub struct JsTable {
    inner: Table<()>,
}

#[wasm_bindgen]
impl JsTable {
    /// Create a table from an options object, a row count and column widths.
    /// `row_height_fn`, when given, overrides `options.rowHeight` per row.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options: JsValue,
        row_count: usize,
        column_widths: Vec<f64>,
        row_height_fn: Option<Function>,
    ) -> Result<JsTable, JsValue> {
        console_error_panic_hook::set_once();
        let options: TableOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?;
        let columns = column_widths.into_iter().map(ColumnSpec::with_width).collect();
        let mut config = TableConfig::from_options(options, vec![(); row_count], columns);
        if let Some(f) = row_height_fn {
            config.row_height = js_row_height(f);
            config.options.row_height = None;
        }
        Ok(JsTable {
            inner: Table::new(config)?,
        })
    }

    /// Returns `{ scrollCorrection, aperture, loadRequested }`.
    pub fn mount(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.mount())
    }

    pub fn set_on_infinite_load(&mut self, f: Option<Function>) {
        self.inner.set_on_infinite_load(f.map(|f| -> LoadCallback {
            Box::new(move || {
                report_callback_error("onInfiniteLoad", f.call0(&JsValue::NULL));
            })
        }));
    }

    /// Passing a function enables column resizing.
    pub fn set_on_column_width_change(&mut self, f: Option<Function>) {
        self.inner
            .set_on_column_width_change(f.map(|f| -> WidthChangeCallback {
                Box::new(move |index, width| {
                    let result = f.call2(
                        &JsValue::NULL,
                        &JsValue::from_f64(index as f64),
                        &JsValue::from_f64(width),
                    );
                    report_callback_error("onColumnWidthChange", result);
                })
            }));
    }

    /// Passing a function enables column reordering.
    pub fn set_on_column_order_change(&mut self, f: Option<Function>) {
        self.inner
            .set_on_column_order_change(f.map(|f| -> OrderChangeCallback {
                Box::new(move |from, to| {
                    let result = f.call2(
                        &JsValue::NULL,
                        &JsValue::from_f64(from as f64),
                        &JsValue::from_f64(to as f64),
                    );
                    report_callback_error("onColumnOrderChange", result);
                })
            }));
    }

    /// Returns `{ aperture, apertureChanged, loadRequested }`.
    pub fn on_scroll(&mut self, scroll_top: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.handle_scroll(scroll_top))
    }

    pub fn get_scroll_top(&self) -> f64 {
        self.inner.scroll_top()
    }

    pub fn set_scroll_top(&mut self, value: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.set_scroll_top(value))
    }

    pub fn set_row_count(&mut self, row_count: usize) -> Result<JsValue, JsValue> {
        let outcome = self
            .inner
            .update(TableUpdate::new().rows(vec![(); row_count]))?;
        to_js(&outcome)
    }

    pub fn set_loading(&mut self, is_loading: bool, spinner_height: f64) -> Result<JsValue, JsValue> {
        let outcome = self.inner.update(
            TableUpdate::new()
                .loading(is_loading)
                .spinner_height(spinner_height),
        )?;
        to_js(&outcome)
    }

    pub fn set_column_widths(&mut self, widths: Vec<f64>) -> Result<JsValue, JsValue> {
        let columns = widths.into_iter().map(ColumnSpec::with_width).collect();
        let outcome = self.inner.update(TableUpdate::new().columns(columns))?;
        to_js(&outcome)
    }

    pub fn render_plan(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.render_plan())
    }

    pub fn column_styles(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.column_styles())
    }

    pub fn header_cell_flags(&self, column_index: usize) -> Result<JsValue, JsValue> {
        to_js(&self.inner.header_cell_flags(column_index))
    }

    pub fn on_header_pointer_down(&mut self, x: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.column_pointer_down_at(x))
    }

    pub fn on_header_pointer_move(&mut self, x: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.column_pointer_move(x))
    }

    pub fn on_header_pointer_up(&mut self, x: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.column_pointer_up(x))
    }
}
