//! Aperture resolution: which rows to materialize for a scroll offset.

use serde::Serialize;

use super::ViewportComputer;

/// Default overscan margin in pixels above and below the viewport.
pub const DEFAULT_OVERSCAN_SIZE: f64 = 500.0;

/// Inclusive range of row indices currently materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApertureState {
    pub display_index_start: usize,
    pub display_index_end: usize,
}

impl ApertureState {
    /// Number of rows in the aperture; zero for an inverted range.
    pub fn len(&self) -> usize {
        self.display_index_end
            .checked_sub(self.display_index_start)
            .map_or(0, |span| span + 1)
    }

    /// True only for a hand-built inverted range; resolved apertures always
    /// hold at least one row.
    pub fn is_empty(&self) -> bool {
        self.display_index_start > self.display_index_end
    }

    /// True if `index` lies inside the aperture.
    pub fn contains(&self, index: usize) -> bool {
        (self.display_index_start..=self.display_index_end).contains(&index)
    }

    /// Row indices in display order.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.display_index_start..=self.display_index_end
    }
}

/// Placeholder heights standing in for the rows outside the aperture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerHeights {
    pub top: f64,
    pub bottom: f64,
}

/// Scroll inputs for one aperture computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureResolver {
    /// Extra margin (pixels) rendered above and below the viewport
    pub overscan_size: f64,
    /// Height of the scroll viewport
    pub viewport_height: f64,
}

impl ApertureResolver {
    pub fn new(overscan_size: f64, viewport_height: f64) -> Self {
        Self {
            overscan_size: overscan_size.max(0.0),
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// Resolve the aperture for `scroll_top`. `None` when there are no rows.
    ///
    /// The start is the first row whose bottom edge passes
    /// `scroll_top - overscan`; the end is the last row whose top edge is
    /// above `scroll_top + viewport_height + overscan`. The end never falls
    /// before the start.
    pub fn resolve(&self, computer: &ViewportComputer, scroll_top: f64) -> Option<ApertureState> {
        let scroll_top = scroll_top.max(0.0);
        let low_bound = (scroll_top - self.overscan_size).max(0.0);
        let high_bound = scroll_top + self.viewport_height + self.overscan_size;

        let start = computer.first_row_ending_after(low_bound)?;
        let end = computer.last_row_starting_before(high_bound)?;

        Some(ApertureState {
            display_index_start: start,
            display_index_end: end.max(start),
        })
    }
}

impl ViewportComputer {
    /// Spacer heights that, together with the aperture rows, add up to the
    /// total scrollable height.
    pub fn spacer_heights(&self, aperture: Option<&ApertureState>) -> SpacerHeights {
        let Some(aperture) = aperture else {
            return SpacerHeights::default();
        };
        SpacerHeights {
            top: self
                .height_before(aperture.display_index_start)
                .unwrap_or(0.0),
            bottom: self.height_after(aperture.display_index_end).unwrap_or(0.0),
        }
    }
}
