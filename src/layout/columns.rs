//! Column layout: left offsets from widths, sticky offsets for fixed-left
//! columns, and the per-column style patches handed to the renderer.

use serde::Serialize;

use crate::error::{Result, TableError};

/// Narrowest width a column can be resized to.
pub const MIN_COLUMN_WIDTH: f64 = 40.0;

/// A column as configured by the host. `data` carries whatever the rendering
/// collaborator needs (renderers, titles) and is never inspected here.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec<D = ()> {
    /// Committed width in pixels (must be > 0)
    pub width: f64,
    pub data: D,
}

impl<D> ColumnSpec<D> {
    pub fn new(width: f64, data: D) -> Self {
        Self { width, data }
    }
}

impl ColumnSpec<()> {
    pub fn with_width(width: f64) -> Self {
        Self { width, data: () }
    }
}

/// Horizontal extent of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnPosition {
    pub left: f64,
    pub width: f64,
}

impl ColumnPosition {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// In-flight reorder feedback needed to build style patches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderPreview {
    pub from_index: usize,
    pub to_index: usize,
    /// Width of the dragged column
    pub width: f64,
    /// Clamped horizontal displacement of the dragged column
    pub delta_x: f64,
}

/// Presentation instructions for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStylePatch {
    pub column_index: usize,
    /// Resolved width (drag override or committed)
    pub width: f64,
    /// Left offset of the column within the table
    pub left: f64,
    /// Sticky left offset for fixed-left columns; `None` while a reorder is in flight
    pub sticky_left: Option<f64>,
    /// Visual horizontal shift
    pub translate_x: f64,
    /// Draw above neighbouring columns (the dragged column)
    pub raised: bool,
}

/// Pre-computed column positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Cumulative column positions (`col_positions[i]` = x of column i's left edge)
    pub col_positions: Vec<f64>,
    /// Resolved column widths
    pub col_widths: Vec<f64>,
    /// Number of columns pinned to the left edge
    pub fixed_left_count: usize,
}

impl ColumnLayout {
    /// Create a layout from resolved widths.
    pub fn new(widths: &[f64], fixed_left_count: usize) -> Self {
        let mut col_positions = Vec::with_capacity(widths.len() + 1);
        let mut x = 0.0;
        for w in widths {
            col_positions.push(x);
            x += w;
        }
        col_positions.push(x); // Final edge

        Self {
            col_positions,
            col_widths: widths.to_vec(),
            fixed_left_count: fixed_left_count.min(widths.len()),
        }
    }

    /// Create a layout from column specs, substituting `width_override` for the
    /// committed width of the column it targets.
    pub fn from_columns<D>(
        columns: &[ColumnSpec<D>],
        width_override: Option<(usize, f64)>,
        fixed_left_count: usize,
    ) -> Self {
        let widths: Vec<f64> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| match width_override {
                Some((target, width)) if target == i => width,
                _ => col.width,
            })
            .collect();
        Self::new(&widths, fixed_left_count)
    }

    pub fn len(&self) -> usize {
        self.col_widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.col_widths.is_empty()
    }

    /// Extent of column `index`.
    pub fn position(&self, index: usize) -> Option<ColumnPosition> {
        Some(ColumnPosition {
            left: *self.col_positions.get(index)?,
            width: *self.col_widths.get(index)?,
        })
    }

    /// Extents of all columns in order.
    pub fn positions(&self) -> impl Iterator<Item = ColumnPosition> + '_ {
        self.col_positions
            .iter()
            .zip(&self.col_widths)
            .map(|(&left, &width)| ColumnPosition { left, width })
    }

    /// Sticky offset for a fixed-left column.
    pub fn sticky_left(&self, index: usize) -> Option<f64> {
        if index < self.fixed_left_count {
            self.col_positions.get(index).copied()
        } else {
            None
        }
    }

    /// Right edge of the last column.
    pub fn total_width(&self) -> f64 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Find column at x position (binary search)
    pub fn col_at_x(&self, x: f64) -> Option<usize> {
        if self.is_empty() || x < 0.0 || x >= self.total_width() {
            return None;
        }
        let i = self.col_positions.partition_point(|&pos| pos <= x);
        Some(i.saturating_sub(1).min(self.len() - 1))
    }

    /// Style patches for every column, with reorder feedback applied when a
    /// reorder is in flight.
    pub fn style_patches(&self, reorder: Option<&ReorderPreview>) -> Vec<ColumnStylePatch> {
        self.positions()
            .enumerate()
            .map(|(index, pos)| {
                let mut patch = ColumnStylePatch {
                    column_index: index,
                    width: pos.width,
                    left: pos.left,
                    sticky_left: None,
                    translate_x: 0.0,
                    raised: false,
                };
                match reorder {
                    Some(r) if index == r.from_index => {
                        patch.translate_x = r.delta_x;
                        patch.raised = true;
                    }
                    Some(r) if index >= r.to_index && index < r.from_index => {
                        patch.translate_x = r.width;
                    }
                    Some(r) if index <= r.to_index && index > r.from_index => {
                        patch.translate_x = -r.width;
                    }
                    Some(_) => {}
                    None => patch.sticky_left = self.sticky_left(index),
                }
                patch
            })
            .collect()
    }
}

/// Return a new sequence with the element at `from_index` moved to
/// `to_index`, keeping the relative order of all other elements.
///
/// # Errors
/// Returns [`TableError::ColumnIndex`] if either index is out of range.
pub fn reorder_columns<T: Clone>(columns: &[T], from_index: usize, to_index: usize) -> Result<Vec<T>> {
    for index in [from_index, to_index] {
        if index >= columns.len() {
            return Err(TableError::ColumnIndex {
                index,
                column_count: columns.len(),
            });
        }
    }
    let mut reordered = columns.to_vec();
    let moved = reordered.remove(from_index);
    reordered.insert(to_index, moved);
    Ok(reordered)
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

    #[test]
    fn test_basic_layout() {
        let layout = ColumnLayout::new(&[100.0, 50.0, 80.0], 0);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.col_positions, vec![0.0, 100.0, 150.0, 230.0]);
        assert_eq!(layout.total_width(), 230.0);
        let pos = layout.position(1).unwrap();
        assert_eq!(pos.left, 100.0);
        assert_eq!(pos.center(), 125.0);
        assert_eq!(pos.right(), 150.0);
        assert!(layout.position(3).is_none());
    }

    #[test]
    fn test_width_override() {
        let columns = vec![ColumnSpec::with_width(100.0); 3];
        let layout = ColumnLayout::from_columns(&columns, Some((1, 40.0)), 0);
        assert_eq!(layout.col_positions, vec![0.0, 100.0, 140.0, 240.0]);
    }

    #[test]
    fn test_fixed_left_sticky() {
        let layout = ColumnLayout::new(&[90.0, 90.0, 90.0], 2);
        assert_eq!(layout.sticky_left(0), Some(0.0));
        assert_eq!(layout.sticky_left(1), Some(90.0));
        assert_eq!(layout.sticky_left(2), None);

        let clamped = ColumnLayout::new(&[90.0], 5);
        assert_eq!(clamped.fixed_left_count, 1);
    }

    #[test]
    fn test_col_at_x() {
        let layout = ColumnLayout::new(&[100.0, 100.0], 0);
        assert_eq!(layout.col_at_x(0.0), Some(0));
        assert_eq!(layout.col_at_x(99.9), Some(0));
        assert_eq!(layout.col_at_x(100.0), Some(1));
        assert_eq!(layout.col_at_x(200.0), None);
        assert_eq!(layout.col_at_x(-1.0), None);
    }

    #[test]
    fn test_style_patches_reorder_right() {
        let layout = ColumnLayout::new(&[100.0; 5], 2);
        let preview = ReorderPreview {
            from_index: 1,
            to_index: 3,
            width: 100.0,
            delta_x: 180.0,
        };
        let patches = layout.style_patches(Some(&preview));
        assert_eq!(patches[0].translate_x, 0.0);
        assert!(patches[1].raised);
        assert_eq!(patches[1].translate_x, 180.0);
        assert_eq!(patches[2].translate_x, -100.0);
        assert_eq!(patches[3].translate_x, -100.0);
        assert_eq!(patches[4].translate_x, 0.0);
        assert!(patches.iter().all(|p| p.sticky_left.is_none()));
    }

    #[test]
    fn test_style_patches_reorder_left() {
        let layout = ColumnLayout::new(&[100.0; 5], 0);
        let preview = ReorderPreview {
            from_index: 3,
            to_index: 1,
            width: 100.0,
            delta_x: -190.0,
        };
        let patches = layout.style_patches(Some(&preview));
        assert_eq!(patches[0].translate_x, 0.0);
        assert_eq!(patches[1].translate_x, 100.0);
        assert_eq!(patches[2].translate_x, 100.0);
        assert_eq!(patches[3].translate_x, -190.0);
        assert_eq!(patches[4].translate_x, 0.0);
    }

    #[test]
    fn test_style_patches_idle() {
        let layout = ColumnLayout::new(&[60.0, 70.0, 80.0], 1);
        let patches = layout.style_patches(None);
        assert_eq!(patches[0].sticky_left, Some(0.0));
        assert_eq!(patches[1].sticky_left, None);
        assert_eq!(patches[2].left, 130.0);
        assert!(patches.iter().all(|p| !p.raised && p.translate_x == 0.0));
    }

    #[test]
    fn test_reorder_columns() {
        let cols = vec!['a', 'b', 'c', 'd', 'e'];
        assert_eq!(reorder_columns(&cols, 1, 3).unwrap(), vec!['a', 'c', 'd', 'b', 'e']);
        assert_eq!(reorder_columns(&cols, 4, 0).unwrap(), vec!['e', 'a', 'b', 'c', 'd']);
        assert_eq!(reorder_columns(&cols, 2, 2).unwrap(), cols);
        assert!(reorder_columns(&cols, 5, 0).is_err());
        assert!(reorder_columns(&cols, 0, 5).is_err());
    }
}
