//! Common test utilities for building tables and recording callbacks.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use infinite_table::{ColumnSpec, RowHeight, Table, TableConfig};

/// Everything the table reported through its callbacks.
#[derive(Default, Debug)]
pub struct Calls {
    pub loads: usize,
    pub widths: Vec<(usize, f64)>,
    pub orders: Vec<(usize, usize)>,
}

pub type Recorder = Rc<RefCell<Calls>>;

/// `rows` rows with their index as row data, `cols` columns of `col_width`.
pub fn config(
    rows: usize,
    row_height: impl Into<RowHeight>,
    viewport_height: f64,
    cols: usize,
    col_width: f64,
) -> TableConfig<usize> {
    TableConfig::new(
        viewport_height,
        row_height,
        (0..rows).collect(),
        vec![ColumnSpec::with_width(col_width); cols],
    )
}

/// Attach recording callbacks for loads, width and order changes.
pub fn recording(config: TableConfig<usize>) -> (TableConfig<usize>, Recorder) {
    let calls: Recorder = Rc::default();
    let (a, b, c) = (Rc::clone(&calls), Rc::clone(&calls), Rc::clone(&calls));
    let config = config
        .on_infinite_load(move || a.borrow_mut().loads += 1)
        .on_column_width_change(move |i, w| b.borrow_mut().widths.push((i, w)))
        .on_column_order_change(move |f, t| c.borrow_mut().orders.push((f, t)));
    (config, calls)
}

/// Table with uniform rows, 5 columns of 100px and no callbacks.
pub fn fixed_table(rows: usize, row_height: f64, viewport_height: f64) -> Table<usize> {
    Table::new(config(rows, row_height, viewport_height, 5, 100.0)).expect("valid config")
}

/// 100 rows, 5 columns of 100px, recording callbacks.
pub fn column_table() -> (Table<usize>, Recorder) {
    let (config, calls) = recording(config(100, 30.0, 300.0, 5, 100.0));
    (Table::new(config).expect("valid config"), calls)
}

/// Rows indexed `0..n`.
pub fn rows(n: usize) -> Vec<usize> {
    (0..n).collect()
}
