//! Row geometry for a fixed row set.
//!
//! A `ViewportComputer` is rebuilt whenever the row count or the height model
//! changes and is never patched in place.

use super::RowHeight;
use crate::error::{Result, TableError};

/// Pre-computed vertical geometry for `item_count` rows.
#[derive(Clone, Debug)]
pub struct ViewportComputer {
    item_count: usize,
    model: RowHeight,
    /// Cumulative row positions (`row_positions[i]` = y of row i's top edge).
    /// Only populated for variable heights; holds `item_count + 1` entries.
    row_positions: Vec<f64>,
}

impl ViewportComputer {
    /// Create a computer for `item_count` rows.
    ///
    /// # Errors
    /// Returns [`TableError::Configuration`] if any row height is negative or
    /// not finite.
    pub fn new(item_count: usize, model: RowHeight) -> Result<Self> {
        let row_positions = match &model {
            RowHeight::Fixed(h) => {
                check_height(*h, None)?;
                Vec::new()
            }
            RowHeight::Variable(f) => {
                let mut positions = Vec::with_capacity(item_count + 1);
                let mut y = 0.0;
                for index in 0..item_count {
                    positions.push(y);
                    let h = f(index);
                    check_height(h, Some(index))?;
                    y += h;
                }
                positions.push(y); // Final edge
                positions
            }
        };

        Ok(Self {
            item_count,
            model,
            row_positions,
        })
    }

    /// Number of rows.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// The height model this computer was built from.
    pub fn row_height(&self) -> &RowHeight {
        &self.model
    }

    /// Sum of all row heights.
    pub fn total_scrollable_height(&self) -> f64 {
        self.top_of(self.item_count)
    }

    /// Height of the row at `index`.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if `index >= item_count`.
    pub fn height_of(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.top_of(index + 1) - self.top_of(index))
    }

    /// Sum of the heights of rows `[0, index)`. Returns 0 for an empty row set.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if `index >= item_count` on a
    /// non-empty row set.
    pub fn height_before(&self, index: usize) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.check_index(index)?;
        Ok(self.top_of(index))
    }

    /// Sum of the heights of rows `(index, item_count)`. Returns 0 for an
    /// empty row set.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if `index >= item_count` on a
    /// non-empty row set.
    pub fn height_after(&self, index: usize) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.check_index(index)?;
        Ok(self.total_scrollable_height() - self.top_of(index + 1))
    }

    /// Smallest row whose bottom edge lies strictly below `offset`, clamped to
    /// the last row. `None` for an empty row set.
    pub fn first_row_ending_after(&self, offset: f64) -> Option<usize> {
        let last = self.item_count.checked_sub(1)?;
        let count = partition_point(self.item_count, |i| self.top_of(i + 1) <= offset);
        Some(count.min(last))
    }

    /// Largest row whose top edge lies strictly above `offset`, clamped to
    /// `[0, item_count - 1]`. `None` for an empty row set.
    pub fn last_row_starting_before(&self, offset: f64) -> Option<usize> {
        let last = self.item_count.checked_sub(1)?;
        let count = partition_point(self.item_count, |i| self.top_of(i) < offset);
        Some(count.saturating_sub(1).min(last))
    }

    /// Y of the top edge of row `index`; `index == item_count` is the bottom
    /// edge of the last row.
    #[allow(clippy::cast_precision_loss)]
    fn top_of(&self, index: usize) -> f64 {
        match &self.model {
            RowHeight::Fixed(h) => h * index as f64,
            RowHeight::Variable(_) => self
                .row_positions
                .get(index)
                .or_else(|| self.row_positions.last())
                .copied()
                .unwrap_or(0.0),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.item_count {
            return Err(TableError::InvalidArgument {
                index,
                item_count: self.item_count,
            });
        }
        Ok(())
    }
}

fn check_height(h: f64, index: Option<usize>) -> Result<()> {
    if h.is_finite() && h >= 0.0 {
        return Ok(());
    }
    Err(match index {
        Some(i) => TableError::config(format!(
            "row height at index {i} must be a non-negative number, got {h}"
        )),
        None => TableError::config(format!(
            "row height must be a non-negative number, got {h}"
        )),
    })
}

/// Number of leading indices in `0..len` for which `pred` holds.
/// `pred` must be monotone (true..., then false...).
fn partition_point(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let mut lo = 0;
    let mut hi = len;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
