//! The table instance: the event dispatcher tying the layout engine to the
//! scroll and drag state machines.
//!
//! `Table` owns every piece of mutable state (scroll offset, aperture, bottom
//! anchor, drag session) and is driven by the host:
//! - `handle_scroll` on every scroll tick
//! - `update` whenever rows, columns, loading flag or other options change
//! - `column_pointer_*` for header drag gestures
//!
//! It never touches a rendering surface; hosts read `render_plan`,
//! `visible_rows` and `column_styles` and draw whatever they draw.

pub mod drag;
pub mod scroll;

use log::debug;
use serde::Serialize;

use crate::config::{
    validate_columns, LoadCallback, OrderChangeCallback, TableConfig, WidthChangeCallback,
};
use crate::error::{Result, TableError};
use crate::layout::{
    ApertureResolver, ApertureState, ColumnLayout, ColumnSpec, ColumnStylePatch, RowHeight,
    SpacerHeights, ViewportComputer,
};
use drag::{DragController, DragEffect, DragSession, DragSettings};
use scroll::{lowest_possible_scroll_top, AnchorUpdate, BottomAnchor, InfiniteLoadTrigger};

/// Result of one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOutcome {
    pub aperture: Option<ApertureState>,
    pub aperture_changed: bool,
    pub load_requested: bool,
}

/// Result of an update or of mounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    /// New scroll offset the host must apply, if the table corrected it
    pub scroll_correction: Option<f64>,
    pub aperture: Option<ApertureState>,
    pub load_requested: bool,
    /// Drag session the update aborted (columns changed mid-gesture). A
    /// `ReorderCancelled { started: true }` means the dragged cell's styling
    /// must be restored.
    pub drag_cancelled: Option<DragEffect>,
}

/// Where the loading spinner row goes relative to the rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpinnerPlacement {
    AboveRows,
    BelowRows,
}

/// Everything the renderer needs to lay out the table body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub top_spacer_height: f64,
    pub bottom_spacer_height: f64,
    pub rows: Option<ApertureState>,
    pub header_count: usize,
    pub footer_count: usize,
    pub spinner: Option<SpinnerPlacement>,
}

/// A row inside the aperture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a, R> {
    pub index: usize,
    pub data: &'a R,
    pub height: f64,
}

/// Per-header-cell state for the renderer's class names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCellFlags {
    pub fixed_left: bool,
    pub reorderable: bool,
    pub resizable: bool,
    pub dragging: bool,
    pub resizing: bool,
    pub reordering: bool,
    pub reordering_started: bool,
}

/// Changes applied by [`Table::update`]. Unset fields keep their value.
pub struct TableUpdate<R, D = ()> {
    pub rows: Option<Vec<R>>,
    pub row_height: Option<RowHeight>,
    pub columns: Option<Vec<ColumnSpec<D>>>,
    pub viewport_height: Option<f64>,
    pub overscan_size: Option<f64>,
    pub fixed_columns_left_count: Option<Option<usize>>,
    pub infinite_load_begin_edge_offset: Option<Option<f64>>,
    pub is_infinite_loading: Option<bool>,
    pub display_bottom_upwards: Option<bool>,
    /// Measured height of the loading spinner row
    pub spinner_height: Option<f64>,
}

impl<R, D> Default for TableUpdate<R, D> {
    fn default() -> Self {
        Self {
            rows: None,
            row_height: None,
            columns: None,
            viewport_height: None,
            overscan_size: None,
            fixed_columns_left_count: None,
            infinite_load_begin_edge_offset: None,
            is_infinite_loading: None,
            display_bottom_upwards: None,
            spinner_height: None,
        }
    }
}

impl<R, D> TableUpdate<R, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn row_height(mut self, row_height: impl Into<RowHeight>) -> Self {
        self.row_height = Some(row_height.into());
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnSpec<D>>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = Some(height);
        self
    }

    pub fn overscan_size(mut self, overscan_size: f64) -> Self {
        self.overscan_size = Some(overscan_size);
        self
    }

    pub fn fixed_columns_left_count(mut self, count: Option<usize>) -> Self {
        self.fixed_columns_left_count = Some(count);
        self
    }

    pub fn infinite_load_begin_edge_offset(mut self, offset: Option<f64>) -> Self {
        self.infinite_load_begin_edge_offset = Some(offset);
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_infinite_loading = Some(is_loading);
        self
    }

    pub fn display_bottom_upwards(mut self, bottom_up: bool) -> Self {
        self.display_bottom_upwards = Some(bottom_up);
        self
    }

    pub fn spinner_height(mut self, height: f64) -> Self {
        self.spinner_height = Some(height);
        self
    }
}

/// A virtualized table.
pub struct Table<R, D = ()> {
    config: TableConfig<R, D>,
    computer: ViewportComputer,
    aperture: Option<ApertureState>,
    scroll_top: f64,
    anchor: BottomAnchor,
    drag: DragController,
    /// Column positions from committed widths (no drag override)
    committed_layout: ColumnLayout,
    /// Last measured spinner height reported by the host
    spinner_height: f64,
}

impl<R, D> Table<R, D> {
    /// Validate `config` and build the table at scroll offset 0.
    ///
    /// # Errors
    /// Returns [`TableError::Configuration`] if the configuration is invalid.
    pub fn new(config: TableConfig<R, D>) -> Result<Self> {
        config.validate()?;
        let computer = ViewportComputer::new(config.rows.len(), config.row_height.clone())?;
        let committed_layout =
            ColumnLayout::from_columns(&config.columns, None, config.resolved_fixed_left_count());
        let anchor = BottomAnchor::new(config.options.display_bottom_upwards);

        let mut table = Self {
            config,
            computer,
            aperture: None,
            scroll_top: 0.0,
            anchor,
            drag: DragController::new(),
            committed_layout,
            spinner_height: 0.0,
        };
        table.aperture = table.resolve_aperture();
        Ok(table)
    }

    /// Run the post-mount checks: request rows if the content does not fill
    /// the viewport, and pin bottom-up tables to the bottom.
    pub fn mount(&mut self) -> UpdateOutcome {
        let mut load_requested = false;
        if self.is_missing_visible_rows() && !self.is_loading() {
            load_requested = self.request_load();
        }

        let mut scroll_correction = None;
        if self.config.options.display_bottom_upwards && self.anchor.is_attached() {
            let lowest = self.lowest_possible_scroll_top().max(0.0);
            if self.scroll_top < lowest {
                scroll_correction = Some(self.apply_scroll_correction(lowest));
            }
        }

        UpdateOutcome {
            scroll_correction,
            aperture: self.aperture,
            load_requested,
            drag_cancelled: None,
        }
    }

    /// Handle a scroll event at `scroll_top`.
    pub fn handle_scroll(&mut self, scroll_top: f64) -> ScrollOutcome {
        self.scroll_top = scroll_top.max(0.0);
        let bottom_up = self.config.options.display_bottom_upwards;
        let lowest = self.lowest_possible_scroll_top();
        self.anchor.on_scroll(self.scroll_top, lowest, bottom_up);

        let aperture = self.resolve_aperture();
        let aperture_changed = aperture != self.aperture;
        if aperture_changed {
            debug!("aperture {:?} -> {aperture:?}", self.aperture);
        }
        self.aperture = aperture;

        let load_requested = self.trigger().should_load(
            self.scroll_top,
            self.computer.total_scrollable_height(),
            self.config.options.viewport_height,
            self.anchor.is_attached(),
            self.is_loading(),
        ) && self.request_load();

        ScrollOutcome {
            aperture,
            aperture_changed,
            load_requested,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Programmatic scroll; behaves like a scroll event at `value`.
    pub fn set_scroll_top(&mut self, value: f64) -> ScrollOutcome {
        self.handle_scroll(value)
    }

    /// Apply a configuration change.
    ///
    /// Validation happens before anything is mutated, so a failed update
    /// leaves the table untouched.
    ///
    /// # Errors
    /// Returns [`TableError::Configuration`] if the resulting configuration is
    /// invalid.
    pub fn update(&mut self, update: TableUpdate<R, D>) -> Result<UpdateOutcome> {
        let mut options = self.config.options.clone();
        if let Some(h) = update.viewport_height {
            options.viewport_height = h;
        }
        if let Some(o) = update.overscan_size {
            options.overscan_size = o;
        }
        if let Some(count) = update.fixed_columns_left_count {
            options.fixed_columns_left_count = count;
        }
        if let Some(edge) = update.infinite_load_begin_edge_offset {
            options.infinite_load_begin_edge_offset = edge;
        }
        if let Some(loading) = update.is_infinite_loading {
            options.is_infinite_loading = loading;
        }
        if let Some(bottom_up) = update.display_bottom_upwards {
            options.display_bottom_upwards = bottom_up;
        }
        options.validate()?;

        let row_count = update.rows.as_ref().map_or(self.config.rows.len(), Vec::len);
        let columns = update.columns.as_deref().unwrap_or(&self.config.columns);
        validate_columns(columns, row_count)?;
        if let Some(h) = update.spinner_height {
            if !(h.is_finite() && h >= 0.0) {
                return Err(TableError::Configuration(format!(
                    "spinner height must be a non-negative number, got {h}"
                )));
            }
        }

        let geometry_changed = update.rows.is_some() || update.row_height.is_some();
        let computer = if geometry_changed {
            let model = update
                .row_height
                .clone()
                .unwrap_or_else(|| self.config.row_height.clone());
            Some(ViewportComputer::new(row_count, model)?)
        } else {
            None
        };

        // Validated; commit.
        let old_bottom_up = self.config.options.display_bottom_upwards;
        if old_bottom_up {
            self.anchor.capture(self.scroll_top);
        }
        let old_total = self.computer.total_scrollable_height();
        let was_loading = self.is_loading();
        let columns_changed = update.columns.is_some()
            || options.fixed_columns_left_count != self.config.options.fixed_columns_left_count;

        if options.display_bottom_upwards != old_bottom_up {
            self.anchor.reset(options.display_bottom_upwards);
        }
        self.config.options = options;
        let rows_changed = update.rows.is_some();
        if let Some(rows) = update.rows {
            self.config.rows = rows;
        }
        if let Some(model) = update.row_height {
            self.config.options.row_height = model.fixed_height();
            self.config.row_height = model;
        }
        if let Some(columns) = update.columns {
            self.config.columns = columns;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        if let Some(h) = update.spinner_height {
            self.spinner_height = h;
        }
        let mut drag_cancelled = None;
        if columns_changed {
            if let Some(session) = self.drag.session().copied() {
                let cancelled = self.drag.cancel();
                debug!("columns changed mid-drag; cancelled {session:?}");
                drag_cancelled = Some(cancelled);
            }
            self.committed_layout = ColumnLayout::from_columns(
                &self.config.columns,
                None,
                self.config.resolved_fixed_left_count(),
            );
        }

        let settle = AnchorUpdate {
            display_bottom_upwards: self.config.options.display_bottom_upwards,
            scroll_top: self.scroll_top,
            viewport_height: self.config.options.viewport_height,
            old_total_height: old_total,
            new_total_height: self.computer.total_scrollable_height(),
            was_loading,
            is_loading: self.is_loading(),
            spinner_height: self.visible_spinner_height(),
        };
        let scroll_correction = self
            .anchor
            .settle(&settle)
            .map(|target| self.apply_scroll_correction(target));

        self.aperture = self.resolve_aperture();

        let load_requested = rows_changed
            && self.is_missing_visible_rows()
            && !self.is_loading()
            && self.request_load();

        Ok(UpdateOutcome {
            scroll_correction,
            aperture: self.aperture,
            load_requested,
            drag_cancelled,
        })
    }

    /// Current aperture; `None` when there are no rows.
    pub fn aperture(&self) -> Option<ApertureState> {
        self.aperture
    }

    pub fn spacer_heights(&self) -> SpacerHeights {
        self.computer.spacer_heights(self.aperture.as_ref())
    }

    pub fn total_scrollable_height(&self) -> f64 {
        self.computer.total_scrollable_height()
    }

    pub fn lowest_possible_scroll_top(&self) -> f64 {
        lowest_possible_scroll_top(
            self.computer.total_scrollable_height(),
            self.config.options.viewport_height,
        )
    }

    pub fn viewport_computer(&self) -> &ViewportComputer {
        &self.computer
    }

    pub fn is_attached(&self) -> bool {
        self.anchor.is_attached()
    }

    pub fn bottom_anchor(&self) -> &BottomAnchor {
        &self.anchor
    }

    pub fn is_loading(&self) -> bool {
        self.config.options.is_infinite_loading
    }

    pub fn config(&self) -> &TableConfig<R, D> {
        &self.config
    }

    pub fn rows(&self) -> &[R] {
        &self.config.rows
    }

    pub fn columns(&self) -> &[ColumnSpec<D>] {
        &self.config.columns
    }

    /// Body layout for the renderer.
    pub fn render_plan(&self) -> RenderPlan {
        let options = &self.config.options;
        let spacers = self.spacer_heights();
        let mut top_spacer_height = spacers.top;

        // Bottom-up content shorter than the viewport sits at the bottom.
        if options.display_bottom_upwards {
            let height_difference = options.viewport_height - self.total_scrollable_height();
            if height_difference > 0.0 {
                top_spacer_height = (height_difference - self.visible_spinner_height()).max(0.0);
            }
        }

        let spinner = self.is_spinner_shown().then_some(if options.display_bottom_upwards {
            SpinnerPlacement::AboveRows
        } else {
            SpinnerPlacement::BelowRows
        });

        RenderPlan {
            top_spacer_height,
            bottom_spacer_height: spacers.bottom,
            rows: self.aperture,
            header_count: options.header_count,
            footer_count: options.footer_count,
            spinner,
        }
    }

    /// Rows inside the aperture, top to bottom.
    pub fn visible_rows(&self) -> impl Iterator<Item = VisibleRow<'_, R>> + '_ {
        self.aperture
            .into_iter()
            .flat_map(|aperture| aperture.indices())
            .filter_map(move |index| {
                Some(VisibleRow {
                    index,
                    data: self.config.rows.get(index)?,
                    height: self.computer.height_of(index).ok()?,
                })
            })
    }

    /// Column positions with any live resize override applied.
    pub fn column_layout(&self) -> ColumnLayout {
        match self.drag.width_override() {
            Some(over) => ColumnLayout::from_columns(
                &self.config.columns,
                Some(over),
                self.committed_layout.fixed_left_count,
            ),
            None => self.committed_layout.clone(),
        }
    }

    /// Resolved width of column `index` (live resize width if it is being resized).
    ///
    /// # Errors
    /// Returns [`TableError::ColumnIndex`] for an unknown column.
    pub fn column_width(&self, index: usize) -> Result<f64> {
        match self.drag.width_override() {
            Some((target, width)) if target == index && index < self.config.columns.len() => {
                Ok(width)
            }
            _ => self
                .committed_layout
                .position(index)
                .map(|p| p.width)
                .ok_or_else(|| self.column_error(index)),
        }
    }

    /// Resolved left offset of column `index`.
    ///
    /// # Errors
    /// Returns [`TableError::ColumnIndex`] for an unknown column.
    pub fn column_left(&self, index: usize) -> Result<f64> {
        self.column_layout()
            .position(index)
            .map(|p| p.left)
            .ok_or_else(|| self.column_error(index))
    }

    /// Style patches for every column, including drag feedback.
    pub fn column_styles(&self) -> Vec<ColumnStylePatch> {
        self.column_layout()
            .style_patches(self.drag.reorder_preview().as_ref())
    }

    /// Flags for header cell `index`.
    pub fn header_cell_flags(&self, index: usize) -> HeaderCellFlags {
        let settings = self.drag_settings();
        let mut flags = HeaderCellFlags {
            fixed_left: index < self.committed_layout.fixed_left_count,
            reorderable: settings.can_reorder,
            resizable: settings.can_resize,
            ..HeaderCellFlags::default()
        };
        match self.drag.session() {
            Some(DragSession::Resize(s)) if s.column_index == index => {
                flags.dragging = true;
                flags.resizing = true;
            }
            Some(DragSession::Reorder(s)) if s.from_index == index => {
                flags.dragging = true;
                flags.reordering = true;
                flags.reordering_started = s.started;
            }
            Some(_) | None => {}
        }
        flags
    }

    pub fn set_on_infinite_load(&mut self, callback: Option<LoadCallback>) {
        self.config.on_infinite_load = callback;
    }

    /// `Some` enables column resizing.
    pub fn set_on_column_width_change(&mut self, callback: Option<WidthChangeCallback>) {
        self.config.on_column_width_change = callback;
    }

    /// `Some` enables column reordering.
    pub fn set_on_column_order_change(&mut self, callback: Option<OrderChangeCallback>) {
        self.config.on_column_order_change = callback;
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Pointer pressed on header cell `column_index`, `offset_in_cell` pixels
    /// from its left edge, at absolute `pointer_x`.
    pub fn column_pointer_down(
        &mut self,
        column_index: usize,
        offset_in_cell: f64,
        pointer_x: f64,
    ) -> DragEffect {
        let settings = self.drag_settings();
        let layout = self.column_layout();
        self.drag
            .pointer_down(column_index, offset_in_cell, pointer_x, &layout, &settings)
    }

    /// Pointer pressed on the header at table-relative `x`.
    pub fn column_pointer_down_at(&mut self, x: f64) -> DragEffect {
        let layout = self.column_layout();
        let Some(index) = layout.col_at_x(x) else {
            return DragEffect::Ignored;
        };
        let Some(pos) = layout.position(index) else {
            return DragEffect::Ignored;
        };
        self.column_pointer_down(index, x - pos.left, x)
    }

    pub fn column_pointer_move(&mut self, pointer_x: f64) -> DragEffect {
        let settings = self.drag_settings();
        self.drag
            .pointer_move(pointer_x, &self.committed_layout, &settings)
    }

    /// Pointer released; commits go to the width/order callbacks.
    pub fn column_pointer_up(&mut self, pointer_x: f64) -> DragEffect {
        let settings = self.drag_settings();
        let effect = self
            .drag
            .pointer_up(pointer_x, &self.committed_layout, &settings);
        match effect {
            DragEffect::ResizeCommitted {
                column_index,
                width,
            } => {
                if let Some(cb) = self.config.on_column_width_change.as_mut() {
                    cb(column_index, width);
                }
            }
            DragEffect::ReorderCommitted {
                from_index,
                to_index,
            } => {
                if let Some(cb) = self.config.on_column_order_change.as_mut() {
                    cb(from_index, to_index);
                }
            }
            _ => {}
        }
        effect
    }

    fn drag_settings(&self) -> DragSettings {
        let options = &self.config.options;
        DragSettings {
            resize_handle_width: options.resize_handle_width,
            min_column_width: options.min_column_width,
            reorder_threshold: options.reorder_threshold,
            can_resize: self.config.on_column_width_change.is_some(),
            can_reorder: self.config.on_column_order_change.is_some(),
        }
    }

    fn column_error(&self, index: usize) -> TableError {
        TableError::ColumnIndex {
            index,
            column_count: self.config.columns.len(),
        }
    }

    fn resolve_aperture(&self) -> Option<ApertureState> {
        let options = &self.config.options;
        ApertureResolver::new(options.overscan_size, options.viewport_height)
            .resolve(&self.computer, self.scroll_top)
    }

    fn apply_scroll_correction(&mut self, target: f64) -> f64 {
        self.scroll_top = target;
        self.aperture = self.resolve_aperture();
        target
    }

    fn trigger(&self) -> InfiniteLoadTrigger {
        InfiniteLoadTrigger::new(
            self.config.options.infinite_load_begin_edge_offset,
            self.config.options.display_bottom_upwards,
        )
    }

    fn is_missing_visible_rows(&self) -> bool {
        self.trigger().is_missing_visible_rows(
            self.computer.total_scrollable_height(),
            self.config.options.viewport_height,
        )
    }

    fn is_spinner_shown(&self) -> bool {
        self.config.options.infinite_load_begin_edge_offset.is_some() && self.is_loading()
    }

    fn visible_spinner_height(&self) -> f64 {
        if self.is_spinner_shown() {
            self.spinner_height
        } else {
            0.0
        }
    }

    fn request_load(&mut self) -> bool {
        debug!(
            "requesting more rows (scroll_top={}, total={})",
            self.scroll_top,
            self.computer.total_scrollable_height()
        );
        if let Some(cb) = self.config.on_infinite_load.as_mut() {
            cb();
        }
        true
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    fn table(rows: usize) -> Table<usize> {
        let config = TableConfig::new(
            300.0,
            30.0,
            (0..rows).collect(),
            vec![ColumnSpec::with_width(90.0); 4],
        );
        Table::new(config).unwrap()
    }

    #[test]
    fn test_initial_aperture() {
        let t = table(1000);
        let aperture = t.aperture().unwrap();
        assert_eq!(aperture.display_index_start, 0);
        assert_eq!(aperture.display_index_end, 26);
        assert_eq!(t.visible_rows().count(), 27);
    }

    #[test]
    fn test_scroll_reports_change() {
        let mut t = table(1000);
        let outcome = t.handle_scroll(3000.0);
        assert!(outcome.aperture_changed);
        assert!(!outcome.load_requested);
        let again = t.handle_scroll(3000.0);
        assert!(!again.aperture_changed);
        assert_eq!(again.aperture, outcome.aperture);
    }

    #[test]
    fn test_empty_table() {
        let t = table(0);
        assert_eq!(t.aperture(), None);
        assert_eq!(t.visible_rows().count(), 0);
        let plan = t.render_plan();
        assert_eq!(plan.top_spacer_height, 0.0);
        assert_eq!(plan.bottom_spacer_height, 0.0);
        assert_eq!(plan.rows, None);
    }

    #[test]
    fn test_failed_update_leaves_table_untouched() {
        let mut t = table(10);
        let err = t
            .update(TableUpdate::new().rows((0..20).collect()).columns(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, TableError::Configuration(_)));
        assert_eq!(t.rows().len(), 10);
        assert_eq!(t.columns().len(), 4);
    }

    #[test]
    fn test_column_accessors() {
        let t = table(10);
        assert_eq!(t.column_width(2).unwrap(), 90.0);
        assert_eq!(t.column_left(2).unwrap(), 180.0);
        assert!(matches!(
            t.column_width(4),
            Err(TableError::ColumnIndex {
                index: 4,
                column_count: 4
            })
        ));
    }

    #[test]
    fn test_row_height_model_switch_keeps_options_in_step() {
        let mut t = table(10);
        assert_eq!(t.config().options.row_height, Some(30.0));

        let model = RowHeight::variable(|i| if i == 0 { 50.0 } else { 10.0 });
        t.update(TableUpdate::new().row_height(model)).unwrap();
        assert_eq!(t.config().options.row_height, None);
        assert_eq!(t.total_scrollable_height(), 140.0);
        // A later unrelated update validates without a stale fixed height.
        t.update(TableUpdate::new().overscan_size(100.0)).unwrap();

        t.update(TableUpdate::new().row_height(20.0)).unwrap();
        assert_eq!(t.config().options.row_height, Some(20.0));
        assert_eq!(t.total_scrollable_height(), 200.0);
    }

    #[test]
    fn test_header_flags_without_callbacks() {
        let t = table(10);
        let flags = t.header_cell_flags(0);
        assert!(!flags.reorderable);
        assert!(!flags.resizable);
        assert!(!flags.fixed_left);
    }
}
