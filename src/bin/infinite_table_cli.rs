//! CLI demo harness for infinite-table - replays a JSON scenario of scroll,
//! loading and header-drag events and prints what the table did.
//!
//! Usage:
//!   infinite_table_cli <scenario.json>              # Output JSON to stdout
//!   infinite_table_cli <scenario.json> -o out.json  # Output JSON to file
//!
//! Scenario format:
//! ```json
//! {
//!   "options": { "viewportHeight": 300, "rowHeight": 30 },
//!   "rowCount": 1000,
//!   "columnWidths": [90, 90, 90],
//!   "events": [
//!     { "type": "scroll", "scrollTop": 1200 },
//!     { "type": "pointerDown", "x": 120 },
//!     { "type": "pointerMove", "x": 260 },
//!     { "type": "pointerUp", "x": 260 }
//!   ]
//! }
//! ```

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

use infinite_table::{ColumnSpec, Table, TableConfig, TableOptions, TableUpdate};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    options: TableOptions,
    row_count: usize,
    column_widths: Vec<f64>,
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Event {
    #[serde(rename_all = "camelCase")]
    Scroll { scroll_top: f64 },
    #[serde(rename_all = "camelCase")]
    Rows { row_count: usize },
    #[serde(rename_all = "camelCase")]
    Loading {
        is_loading: bool,
        #[serde(default)]
        spinner_height: f64,
    },
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp { x: f64 },
}

/// Commits reported through the table callbacks.
#[derive(Default)]
struct Log {
    loads: usize,
    widths: Vec<(usize, f64)>,
    orders: Vec<(usize, usize)>,
}

fn run(scenario: Scenario) -> infinite_table::Result<Value> {
    let log = Rc::new(RefCell::new(Log::default()));
    let columns = scenario
        .column_widths
        .iter()
        .copied()
        .map(ColumnSpec::with_width)
        .collect();
    let (l1, l2, l3) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
    let config = TableConfig::from_options(scenario.options, vec![(); scenario.row_count], columns)
        .on_infinite_load(move || l1.borrow_mut().loads += 1)
        .on_column_width_change(move |i, w| l2.borrow_mut().widths.push((i, w)))
        .on_column_order_change(move |f, t| l3.borrow_mut().orders.push((f, t)));

    let mut table = Table::new(config)?;
    let mut steps = vec![json!({ "event": "mount", "outcome": table.mount() })];

    for event in scenario.events {
        let step = match event {
            Event::Scroll { scroll_top } => {
                json!({ "event": "scroll", "outcome": table.handle_scroll(scroll_top) })
            }
            Event::Rows { row_count } => {
                let outcome = table.update(TableUpdate::new().rows(vec![(); row_count]))?;
                json!({ "event": "rows", "outcome": outcome })
            }
            Event::Loading {
                is_loading,
                spinner_height,
            } => {
                let outcome = table.update(
                    TableUpdate::new()
                        .loading(is_loading)
                        .spinner_height(spinner_height),
                )?;
                json!({ "event": "loading", "outcome": outcome })
            }
            Event::PointerDown { x } => {
                json!({ "event": "pointerDown", "effect": table.column_pointer_down_at(x) })
            }
            Event::PointerMove { x } => {
                json!({
                    "event": "pointerMove",
                    "effect": table.column_pointer_move(x),
                    "columns": table.column_styles(),
                })
            }
            Event::PointerUp { x } => {
                json!({ "event": "pointerUp", "effect": table.column_pointer_up(x) })
            }
        };
        steps.push(step);
    }

    let log = log.borrow();
    Ok(json!({
        "steps": steps,
        "renderPlan": table.render_plan(),
        "scrollTop": table.scroll_top(),
        "loadRequests": log.loads,
        "widthChanges": log.widths,
        "orderChanges": log.orders,
    }))
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: infinite_table_cli <scenario.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read scenario
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let scenario: Scenario = match serde_json::from_str(&data) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing scenario: {}", e);
            std::process::exit(1);
        }
    };

    let result = match run(scenario) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error running scenario: {}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&result) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
