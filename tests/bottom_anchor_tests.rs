//! Bottom-up display tests
//!
//! Pinning to the newest row, detaching on user scroll, and keeping the
//! reader's place when older rows load above the viewport.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use infinite_table::viewer::SpinnerPlacement;
use infinite_table::{Table, TableUpdate};

/// 50 rows of 20px (1000px) in a 200px viewport, displayed bottom-up.
fn chat_table() -> (Table<usize>, common::Recorder) {
    let config = common::config(50, 20.0, 200.0, 3, 100.0)
        .display_bottom_upwards(true)
        .infinite_load_begin_edge_offset(100.0);
    let (config, calls) = common::recording(config);
    (Table::new(config).unwrap(), calls)
}

#[test]
fn test_mount_pins_to_bottom() {
    let (mut table, calls) = chat_table();
    assert!(table.is_attached());
    let outcome = table.mount();
    assert_eq!(outcome.scroll_correction, Some(800.0));
    assert_eq!(table.scroll_top(), 800.0);
    assert_eq!(table.aperture().unwrap().display_index_end, 49);
    assert_eq!(calls.borrow().loads, 0);
}

#[test]
fn test_attached_follows_new_rows() {
    let (mut table, _calls) = chat_table();
    table.mount();

    let outcome = table
        .update(TableUpdate::new().rows(common::rows(70)))
        .unwrap();
    assert_eq!(table.total_scrollable_height(), 1400.0);
    assert_eq!(outcome.scroll_correction, Some(1200.0));
    assert_eq!(table.scroll_top(), 1200.0);
    assert!(table.is_attached());
}

#[test]
fn test_attached_follows_shrinking_rows() {
    let (mut table, _calls) = chat_table();
    table.mount();

    let outcome = table
        .update(TableUpdate::new().rows(common::rows(30)))
        .unwrap();
    assert_eq!(table.total_scrollable_height(), 600.0);
    assert_eq!(outcome.scroll_correction, Some(400.0));
    assert_eq!(table.scroll_top(), 400.0);
    assert_eq!(table.aperture().unwrap().display_index_end, 29);
    assert!(table.is_attached());
}

#[test]
fn test_attached_follows_viewport_resize() {
    let (mut table, _calls) = chat_table();
    table.mount();

    let taller = table
        .update(TableUpdate::new().viewport_height(300.0))
        .unwrap();
    assert_eq!(taller.scroll_correction, Some(700.0));

    let shorter = table
        .update(TableUpdate::new().viewport_height(100.0))
        .unwrap();
    assert_eq!(shorter.scroll_correction, Some(900.0));

    // Taller than the content: the lowest offset floors at zero.
    let oversized = table
        .update(TableUpdate::new().viewport_height(1500.0))
        .unwrap();
    assert_eq!(oversized.scroll_correction, Some(0.0));
    assert_eq!(table.scroll_top(), 0.0);
    assert!(table.is_attached());
}

#[test]
fn test_scrolling_up_detaches() {
    let (mut table, _calls) = chat_table();
    table.mount();
    table.handle_scroll(500.0);
    assert!(!table.is_attached());

    let outcome = table
        .update(TableUpdate::new().rows(common::rows(70)))
        .unwrap();
    assert_eq!(outcome.scroll_correction, None);
    assert_eq!(table.scroll_top(), 500.0);

    // Back at the bottom re-attaches.
    table.handle_scroll(1200.0);
    assert!(table.is_attached());
}

#[test]
fn test_load_completion_keeps_reader_in_place() {
    let (mut table, calls) = chat_table();
    table.mount();

    let scrolled = table.handle_scroll(50.0);
    assert!(scrolled.load_requested);
    assert_eq!(calls.borrow().loads, 1);

    // Host starts loading; the 40px spinner appears above the rows.
    let started = table
        .update(TableUpdate::new().loading(true).spinner_height(40.0))
        .unwrap();
    assert_eq!(started.scroll_correction, None);
    assert_eq!(
        table.render_plan().spinner,
        Some(SpinnerPlacement::AboveRows)
    );

    // Still near the top while loading: no duplicate request.
    assert!(!table.handle_scroll(45.0).load_requested);
    table.handle_scroll(50.0);

    // 20 older rows (400px) land above; the spinner goes away.
    let finished = table
        .update(TableUpdate::new().rows(common::rows(70)).loading(false))
        .unwrap();
    assert_eq!(finished.scroll_correction, Some(410.0));
    assert_eq!(table.scroll_top(), 410.0);
    assert_eq!(calls.borrow().loads, 1);
}

#[test]
fn test_switching_to_bottom_up_attaches() {
    let mut table = common::fixed_table(50, 20.0, 200.0);
    assert!(!table.is_attached());
    let outcome = table
        .update(TableUpdate::new().display_bottom_upwards(true))
        .unwrap();
    assert!(table.is_attached());
    assert_eq!(outcome.scroll_correction, Some(800.0));

    table
        .update(TableUpdate::new().display_bottom_upwards(false))
        .unwrap();
    assert!(!table.is_attached());
}

#[test]
fn test_short_content_sits_at_bottom() {
    let config = common::config(5, 20.0, 200.0, 2, 100.0)
        .display_bottom_upwards(true)
        .infinite_load_begin_edge_offset(100.0)
        .is_infinite_loading(true);
    let mut table: Table<usize> = Table::new(config).unwrap();
    let outcome = table
        .update(TableUpdate::new().spinner_height(40.0))
        .unwrap();
    assert_eq!(outcome.scroll_correction, None);

    let plan = table.render_plan();
    // 200px viewport - 100px rows - 40px spinner
    assert_eq!(plan.top_spacer_height, 60.0);
    assert_eq!(plan.bottom_spacer_height, 0.0);
    assert_eq!(plan.spinner, Some(SpinnerPlacement::AboveRows));
}

#[test]
fn test_top_down_never_corrects() {
    let mut table = common::fixed_table(50, 20.0, 200.0);
    assert_eq!(table.mount().scroll_correction, None);
    table.handle_scroll(300.0);
    let outcome = table
        .update(TableUpdate::new().rows(common::rows(70)))
        .unwrap();
    assert_eq!(outcome.scroll_correction, None);
    assert_eq!(table.scroll_top(), 300.0);
}
