//! Column resize and reorder tests
//!
//! Drives header pointer gestures through `Table` and checks the effects,
//! the callbacks the host receives, and the style patches in between.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use infinite_table::{reorder_columns, ColumnSpec, DragEffect, DragSession, Table, TableUpdate};
use test_case::test_case;

// =============================================================================
// RESIZE
// =============================================================================

#[test]
fn test_resize_floors_at_min_width() {
    let (mut table, calls) = common::column_table();

    // Column 1 spans 100..200; 98px into the cell is on the resize handle.
    let down = table.column_pointer_down(1, 98.0, 198.0);
    assert_eq!(down, DragEffect::ResizeStarted { column_index: 1 });

    let moved = table.column_pointer_move(-2.0);
    assert_eq!(
        moved,
        DragEffect::Resizing {
            column_index: 1,
            width: 40.0
        }
    );

    let up = table.column_pointer_up(-2.0);
    assert_eq!(
        up,
        DragEffect::ResizeCommitted {
            column_index: 1,
            width: 40.0
        }
    );
    assert_eq!(calls.borrow().widths, vec![(1, 40.0)]);
    assert!(table.drag_session().is_none());
}

#[test]
fn test_live_width_override_during_resize() {
    let (mut table, calls) = common::column_table();
    table.column_pointer_down(0, 99.0, 99.0);
    table.column_pointer_move(149.0);

    assert_eq!(table.column_width(0).unwrap(), 150.0);
    assert_eq!(table.column_left(1).unwrap(), 150.0);
    let styles = table.column_styles();
    assert_eq!(styles[0].width, 150.0);
    assert_eq!(styles[4].left, 450.0);
    // Nothing committed until release.
    assert!(calls.borrow().widths.is_empty());
    assert_eq!(table.columns()[0].width, 100.0);
}

#[test]
fn test_resize_commit_then_host_applies_width() {
    let (mut table, calls) = common::column_table();
    table.column_pointer_down(2, 97.0, 297.0);
    table.column_pointer_up(327.0);
    let (index, width) = calls.borrow().widths[0];
    assert_eq!((index, width), (2, 130.0));

    let mut columns = vec![ColumnSpec::with_width(100.0); 5];
    columns[index].width = width;
    table.update(TableUpdate::new().columns(columns)).unwrap();
    assert_eq!(table.column_width(2).unwrap(), 130.0);
    assert_eq!(table.column_left(3).unwrap(), 330.0);
}

// =============================================================================
// REORDER
// =============================================================================

#[test_case(150.0, 3 ; "drag right past neighbour center")]
#[test_case(-150.0, 1 ; "drag left past neighbour center")]
#[test_case(40.0, 2 ; "small drag keeps position")]
#[test_case(1000.0, 4 ; "far right clamps to last")]
#[test_case(-1000.0, 0 ; "far left clamps to first")]
fn test_reorder_drop_target(dx: f64, expected_to: usize) {
    let (mut table, calls) = common::column_table();
    let start_x = 250.0;

    assert_eq!(
        table.column_pointer_down(2, 50.0, start_x),
        DragEffect::ReorderPending { column_index: 2 }
    );
    assert_eq!(
        table.column_pointer_move(start_x + dx),
        DragEffect::ReorderStarted { column_index: 2 }
    );
    assert_eq!(
        table.column_pointer_up(start_x + dx),
        DragEffect::ReorderCommitted {
            from_index: 2,
            to_index: expected_to
        }
    );
    assert_eq!(calls.borrow().orders, vec![(2, expected_to)]);
}

#[test]
fn test_reorder_jitter_is_a_click() {
    let (mut table, calls) = common::column_table();
    table.column_pointer_down(2, 50.0, 250.0);
    assert_eq!(table.column_pointer_move(252.0), DragEffect::Ignored);
    assert_eq!(
        table.column_pointer_up(252.0),
        DragEffect::ReorderCancelled {
            column_index: 2,
            started: false
        }
    );
    assert!(calls.borrow().orders.is_empty());
}

#[test]
fn test_reorder_style_patches() {
    let (mut table, _calls) = common::column_table();
    table.column_pointer_down(2, 50.0, 250.0);
    table.column_pointer_move(260.0);
    let effect = table.column_pointer_move(400.0);
    assert_eq!(
        effect,
        DragEffect::Reordering {
            from_index: 2,
            to_index: 3,
            delta_x: 150.0
        }
    );

    let styles = table.column_styles();
    assert_eq!(styles[2].translate_x, 150.0);
    assert!(styles[2].raised);
    assert_eq!(styles[3].translate_x, -100.0);
    assert_eq!(styles[0].translate_x, 0.0);
    assert_eq!(styles[4].translate_x, 0.0);
    assert!(styles.iter().all(|s| s.sticky_left.is_none()));
}

#[test]
fn test_reorder_displacement_clamped_to_table() {
    let (mut table, _calls) = common::column_table();
    table.column_pointer_down(4, 10.0, 410.0);
    table.column_pointer_move(420.0);
    // Column 4 already touches the right edge, so it cannot move right.
    let effect = table.column_pointer_move(600.0);
    assert_eq!(
        effect,
        DragEffect::Reordering {
            from_index: 4,
            to_index: 4,
            delta_x: 0.0
        }
    );
}

#[test]
fn test_reorder_to_same_index_is_noop() {
    let columns = vec!["a", "b", "c"];
    assert_eq!(reorder_columns(&columns, 1, 1).unwrap(), columns);
    assert_eq!(reorder_columns(&columns, 0, 2).unwrap(), vec!["b", "c", "a"]);
    assert_eq!(reorder_columns(&columns, 2, 0).unwrap(), vec!["c", "a", "b"]);
    assert!(reorder_columns(&columns, 3, 0).is_err());
}

#[test]
fn test_column_change_cancels_drag() {
    let (mut table, calls) = common::column_table();
    table.column_pointer_down(1, 50.0, 150.0);
    table.column_pointer_move(200.0);
    assert!(matches!(table.drag_session(), Some(DragSession::Reorder(_))));

    let outcome = table
        .update(TableUpdate::new().columns(vec![ColumnSpec::with_width(80.0); 4]))
        .unwrap();
    assert_eq!(
        outcome.drag_cancelled,
        Some(DragEffect::ReorderCancelled {
            column_index: 1,
            started: true
        })
    );
    assert!(table.drag_session().is_none());
    assert_eq!(table.column_pointer_up(200.0), DragEffect::Ignored);
    assert!(calls.borrow().orders.is_empty());
}

#[test]
fn test_column_change_cancels_resize() {
    let (mut table, calls) = common::column_table();
    table.column_pointer_down(0, 99.0, 99.0);
    table.column_pointer_move(149.0);

    let outcome = table
        .update(TableUpdate::new().fixed_columns_left_count(Some(1)))
        .unwrap();
    assert_eq!(
        outcome.drag_cancelled,
        Some(DragEffect::ResizeCancelled { column_index: 0 })
    );
    assert_eq!(table.column_width(0).unwrap(), 100.0);
    assert_eq!(table.column_pointer_up(149.0), DragEffect::Ignored);
    assert!(calls.borrow().widths.is_empty());
}

#[test]
fn test_unrelated_update_keeps_drag() {
    let (mut table, _calls) = common::column_table();
    table.column_pointer_down(1, 50.0, 150.0);
    table.column_pointer_move(200.0);

    let outcome = table.update(TableUpdate::new().loading(true)).unwrap();
    assert_eq!(outcome.drag_cancelled, None);
    assert!(matches!(table.drag_session(), Some(DragSession::Reorder(_))));
}

// =============================================================================
// GESTURE ROUTING
// =============================================================================

#[test]
fn test_second_gesture_ignored() {
    let (mut table, _calls) = common::column_table();
    table.column_pointer_down(0, 99.0, 99.0);
    assert_eq!(table.column_pointer_down(3, 20.0, 320.0), DragEffect::Ignored);
    assert!(matches!(table.drag_session(), Some(DragSession::Resize(_))));
}

#[test]
fn test_events_without_session_ignored() {
    let (mut table, _calls) = common::column_table();
    assert_eq!(table.column_pointer_move(100.0), DragEffect::Ignored);
    assert_eq!(table.column_pointer_up(100.0), DragEffect::Ignored);
}

#[test]
fn test_drag_disabled_without_callbacks() {
    let mut table = common::fixed_table(10, 30.0, 300.0);
    assert_eq!(table.column_pointer_down(0, 99.0, 99.0), DragEffect::Ignored);
    assert_eq!(table.column_pointer_down(0, 10.0, 10.0), DragEffect::Ignored);
}

#[test]
fn test_pointer_down_at_table_x() {
    let (mut table, _calls) = common::column_table();
    assert_eq!(
        table.column_pointer_down_at(398.0),
        DragEffect::ResizeStarted { column_index: 3 }
    );
    table.column_pointer_up(398.0);
    assert_eq!(
        table.column_pointer_down_at(120.0),
        DragEffect::ReorderPending { column_index: 1 }
    );
    table.column_pointer_up(120.0);
    assert_eq!(table.column_pointer_down_at(900.0), DragEffect::Ignored);
}

// =============================================================================
// HEADER FLAGS AND FIXED COLUMNS
// =============================================================================

#[test]
fn test_header_flags_track_session() {
    let (mut table, _calls) = common::column_table();
    let idle = table.header_cell_flags(2);
    assert!(idle.reorderable && idle.resizable);
    assert!(!idle.dragging);

    table.column_pointer_down(2, 50.0, 250.0);
    let pending = table.header_cell_flags(2);
    assert!(pending.dragging && pending.reordering);
    assert!(!pending.reordering_started);

    table.column_pointer_move(300.0);
    assert!(table.header_cell_flags(2).reordering_started);
    assert!(!table.header_cell_flags(1).dragging);
}

#[test]
fn test_fixed_left_columns_sticky_when_idle() {
    let config = common::config(10, 30.0, 300.0, 4, 100.0)
        .fixed_columns_left_count(2)
        .on_column_order_change(|_, _| {});
    let mut table: Table<usize> = Table::new(config).unwrap();

    let styles = table.column_styles();
    assert_eq!(styles[0].sticky_left, Some(0.0));
    assert_eq!(styles[1].sticky_left, Some(100.0));
    assert_eq!(styles[2].sticky_left, None);
    assert!(table.header_cell_flags(1).fixed_left);

    table.column_pointer_down(3, 50.0, 350.0);
    table.column_pointer_move(300.0);
    assert!(table.column_styles().iter().all(|s| s.sticky_left.is_none()));
}
