//! Column drag gestures: resize and reorder.
//!
//! At most one `DragSession` is active. Pointer events that arrive without a
//! matching session (out-of-order delivery, a second gesture while one is in
//! flight) are ignored rather than treated as errors.

use log::{debug, trace};
use serde::Serialize;

use crate::layout::{ColumnLayout, ReorderPreview, MIN_COLUMN_WIDTH};

/// Width of the resize affordance at the right edge of a header cell.
pub const RESIZE_HANDLE_WIDTH: f64 = 4.0;

/// Horizontal travel below which a reorder gesture is treated as jitter.
pub const REORDER_THRESHOLD: f64 = 3.0;

/// An in-flight column resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub column_index: usize,
    pub initial_width: f64,
    pub initial_pointer_x: f64,
    /// Live (uncommitted) width
    pub width: f64,
}

impl ResizeSession {
    pub fn begin(column_index: usize, initial_width: f64, pointer_x: f64) -> Self {
        Self {
            column_index,
            initial_width,
            initial_pointer_x: pointer_x,
            width: initial_width,
        }
    }

    /// Width for a pointer at `pointer_x`, floored at `min_width`.
    pub fn width_at(&self, pointer_x: f64, min_width: f64) -> f64 {
        (self.initial_width + (pointer_x - self.initial_pointer_x)).max(min_width)
    }
}

/// An in-flight column reorder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderSession {
    pub from_index: usize,
    pub to_index: usize,
    /// Width of the dragged column
    pub width: f64,
    /// Clamped displacement of the dragged column
    pub delta_x: f64,
    /// Set once the pointer has travelled past the jitter threshold
    pub started: bool,
    pub initial_pointer_x: f64,
}

impl ReorderSession {
    pub fn begin(from_index: usize, width: f64, pointer_x: f64) -> Self {
        Self {
            from_index,
            to_index: from_index,
            width,
            delta_x: 0.0,
            started: false,
            initial_pointer_x: pointer_x,
        }
    }

    /// Feedback for the style patches; `None` until the drag has started.
    pub fn preview(&self) -> Option<ReorderPreview> {
        self.started.then_some(ReorderPreview {
            from_index: self.from_index,
            to_index: self.to_index,
            width: self.width,
            delta_x: self.delta_x,
        })
    }

    /// Recompute the drop target and the clamped displacement for a raw
    /// displacement `x`, against committed column positions.
    pub fn track(&mut self, x: f64, layout: &ColumnLayout) {
        let Some(from) = layout.position(self.from_index) else {
            return;
        };
        let projected_left = from.left + x;
        let projected_right = from.right() + x;

        let mut to_index = self.from_index;
        for (index, pos) in layout.positions().enumerate() {
            if index < self.from_index {
                if pos.center() > projected_left {
                    to_index = index;
                    break;
                }
            } else if index > self.from_index && pos.center() < projected_right {
                to_index = index;
            }
        }
        self.to_index = to_index;

        let last_right = layout.total_width();
        let mut x = x;
        if projected_left < 0.0 {
            x -= projected_left;
        } else if projected_right > last_right {
            x -= projected_right - last_right;
        }
        self.delta_x = x;
    }
}

/// The single active gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSession {
    Resize(ResizeSession),
    Reorder(ReorderSession),
}

/// What the host should do after a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DragEffect {
    /// Nothing changed.
    Ignored,
    /// A resize gesture began on the column's resize affordance.
    #[serde(rename_all = "camelCase")]
    ResizeStarted { column_index: usize },
    /// Live width changed; re-apply the style patches.
    #[serde(rename_all = "camelCase")]
    Resizing { column_index: usize, width: f64 },
    /// Resize released; the width was handed to the width-change callback.
    #[serde(rename_all = "camelCase")]
    ResizeCommitted { column_index: usize, width: f64 },
    /// Resize aborted; the live width is dropped without a commit.
    #[serde(rename_all = "camelCase")]
    ResizeCancelled { column_index: usize },
    /// A reorder gesture opened but has not passed the jitter threshold.
    #[serde(rename_all = "camelCase")]
    ReorderPending { column_index: usize },
    /// Threshold crossed: snapshot the dragged cell's styling and apply the
    /// drag treatment.
    #[serde(rename_all = "camelCase")]
    ReorderStarted { column_index: usize },
    /// Drop target or displacement changed; re-apply the style patches.
    #[serde(rename_all = "camelCase")]
    Reordering {
        from_index: usize,
        to_index: usize,
        delta_x: f64,
    },
    /// Reorder released: restore the dragged cell's snapshot. The move was
    /// handed to the order-change callback (`from_index == to_index` is a
    /// legal no-op).
    #[serde(rename_all = "camelCase")]
    ReorderCommitted { from_index: usize, to_index: usize },
    /// Reorder dropped before it started (a plain click) or aborted.
    #[serde(rename_all = "camelCase")]
    ReorderCancelled { column_index: usize, started: bool },
}

/// Knobs for the drag controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSettings {
    pub resize_handle_width: f64,
    pub min_column_width: f64,
    pub reorder_threshold: f64,
    pub can_resize: bool,
    pub can_reorder: bool,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            resize_handle_width: RESIZE_HANDLE_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            reorder_threshold: REORDER_THRESHOLD,
            can_resize: false,
            can_reorder: false,
        }
    }
}

/// Owns the optional active `DragSession` and routes pointer events to the
/// resize or reorder state machine.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Transient width for the column being resized.
    pub fn width_override(&self) -> Option<(usize, f64)> {
        match &self.session {
            Some(DragSession::Resize(s)) => Some((s.column_index, s.width)),
            Some(DragSession::Reorder(_)) | None => None,
        }
    }

    /// Reorder feedback once a reorder has started.
    pub fn reorder_preview(&self) -> Option<ReorderPreview> {
        match &self.session {
            Some(DragSession::Reorder(s)) => s.preview(),
            Some(DragSession::Resize(_)) | None => None,
        }
    }

    /// Pointer pressed on header cell `column_index`, `offset_in_cell` pixels
    /// from its left edge. `layout` holds the current resolved widths.
    pub fn pointer_down(
        &mut self,
        column_index: usize,
        offset_in_cell: f64,
        pointer_x: f64,
        layout: &ColumnLayout,
        settings: &DragSettings,
    ) -> DragEffect {
        if self.session.is_some() {
            debug!("pointer down on column {column_index} ignored: drag already active");
            return DragEffect::Ignored;
        }
        let Some(pos) = layout.position(column_index) else {
            debug!("pointer down on unknown column {column_index}");
            return DragEffect::Ignored;
        };

        let on_handle = offset_in_cell >= pos.width - settings.resize_handle_width;
        if settings.can_resize && on_handle {
            self.session = Some(DragSession::Resize(ResizeSession::begin(
                column_index,
                pos.width,
                pointer_x,
            )));
            return DragEffect::ResizeStarted { column_index };
        }
        if settings.can_reorder {
            self.session = Some(DragSession::Reorder(ReorderSession::begin(
                column_index,
                pos.width,
                pointer_x,
            )));
            return DragEffect::ReorderPending { column_index };
        }
        DragEffect::Ignored
    }

    /// Pointer moved. `committed` holds the committed widths (no overrides).
    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        committed: &ColumnLayout,
        settings: &DragSettings,
    ) -> DragEffect {
        match &mut self.session {
            None => {
                trace!("pointer move without an active drag");
                DragEffect::Ignored
            }
            Some(DragSession::Resize(s)) => {
                s.width = s.width_at(pointer_x, settings.min_column_width);
                DragEffect::Resizing {
                    column_index: s.column_index,
                    width: s.width,
                }
            }
            Some(DragSession::Reorder(s)) => {
                let x = pointer_x - s.initial_pointer_x;
                if !s.started {
                    if x.abs() < settings.reorder_threshold {
                        trace!("reorder jitter {x} below threshold");
                        return DragEffect::Ignored;
                    }
                    s.started = true;
                    s.track(x, committed);
                    debug!("reorder of column {} started", s.from_index);
                    return DragEffect::ReorderStarted {
                        column_index: s.from_index,
                    };
                }
                s.track(x, committed);
                DragEffect::Reordering {
                    from_index: s.from_index,
                    to_index: s.to_index,
                    delta_x: s.delta_x,
                }
            }
        }
    }

    /// Pointer released; ends the session.
    pub fn pointer_up(
        &mut self,
        pointer_x: f64,
        committed: &ColumnLayout,
        settings: &DragSettings,
    ) -> DragEffect {
        match self.session.take() {
            None => {
                trace!("pointer up without an active drag");
                DragEffect::Ignored
            }
            Some(DragSession::Resize(s)) => {
                let width = s.width_at(pointer_x, settings.min_column_width);
                debug!("column {} resized to {width}", s.column_index);
                DragEffect::ResizeCommitted {
                    column_index: s.column_index,
                    width,
                }
            }
            Some(DragSession::Reorder(mut s)) => {
                if !s.started {
                    return DragEffect::ReorderCancelled {
                        column_index: s.from_index,
                        started: false,
                    };
                }
                s.track(pointer_x - s.initial_pointer_x, committed);
                debug!("column {} moved to {}", s.from_index, s.to_index);
                DragEffect::ReorderCommitted {
                    from_index: s.from_index,
                    to_index: s.to_index,
                }
            }
        }
    }

    /// Abort any active session without committing.
    pub fn cancel(&mut self) -> DragEffect {
        match self.session.take() {
            Some(DragSession::Reorder(s)) => DragEffect::ReorderCancelled {
                column_index: s.from_index,
                started: s.started,
            },
            Some(DragSession::Resize(s)) => DragEffect::ResizeCancelled {
                column_index: s.column_index,
            },
            None => DragEffect::Ignored,
        }
    }
}
