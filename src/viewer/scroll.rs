//! Scroll-related logic for `Table`.
//!
//! Includes bottom anchoring for bottom-up lists and the infinite-load edge
//! trigger. Both are plain state + pure functions over heights and offsets;
//! the table's event dispatcher decides when to call them.

use log::{debug, trace};

/// Lowest scroll offset that still shows the last row at the bottom edge.
/// Negative when the content is shorter than the viewport.
pub fn lowest_possible_scroll_top(total_height: f64, viewport_height: f64) -> f64 {
    total_height - viewport_height
}

/// Attached/detached state for bottom-up display.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomAnchor {
    attached: bool,
    /// `scroll_top - last_spinner_height`, captured right before an update
    preserved_offset: f64,
    /// Spinner height measured after the previous update
    last_spinner_height: f64,
}

/// Everything `BottomAnchor::settle` needs to know about one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorUpdate {
    pub display_bottom_upwards: bool,
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub old_total_height: f64,
    pub new_total_height: f64,
    pub was_loading: bool,
    pub is_loading: bool,
    /// Spinner height measured after this update
    pub spinner_height: f64,
}

impl BottomAnchor {
    pub fn new(start_attached: bool) -> Self {
        Self {
            attached: start_attached,
            preserved_offset: 0.0,
            last_spinner_height: 0.0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn preserved_offset(&self) -> f64 {
        self.preserved_offset
    }

    pub fn last_spinner_height(&self) -> f64 {
        self.last_spinner_height
    }

    /// Force the attached flag, e.g. when the display mode changes.
    pub fn reset(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Track a user scroll.
    pub fn on_scroll(&mut self, scroll_top: f64, lowest_scroll_top: f64, bottom_up: bool) {
        let attached = bottom_up && scroll_top >= lowest_scroll_top;
        if attached != self.attached {
            debug!(
                "bottom anchor {} at scroll_top={scroll_top}",
                if attached { "attached" } else { "detached" }
            );
        }
        self.attached = attached;
    }

    /// Remember the visual offset before an update so it can be restored when
    /// older rows land above the viewport.
    pub fn capture(&mut self, scroll_top: f64) {
        self.preserved_offset = scroll_top - self.last_spinner_height;
    }

    /// Compute the scroll correction after an update, if any.
    pub fn settle(&mut self, update: &AnchorUpdate) -> Option<f64> {
        self.last_spinner_height = update.spinner_height;
        if !update.display_bottom_upwards {
            return None;
        }

        let lowest =
            lowest_possible_scroll_top(update.new_total_height, update.viewport_height).max(0.0);
        if self.attached {
            if (update.scroll_top - lowest).abs() > f64::EPSILON {
                debug!("pinning to bottom: {} -> {lowest}", update.scroll_top);
                return Some(lowest);
            }
            return None;
        }

        if update.was_loading && !update.is_loading {
            let target = (update.new_total_height - update.old_total_height
                + self.preserved_offset)
                .max(0.0);
            debug!(
                "load finished, preserving offset: {} -> {target}",
                update.scroll_top
            );
            return Some(target);
        }
        None
    }
}

/// Decides when to ask the host for more rows.
///
/// Holds no in-flight state: the host's `is_loading` flag is the only guard
/// against duplicate requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteLoadTrigger {
    /// Distance from the loading edge at which to fire; `None` disables loading
    pub edge_offset: Option<f64>,
    pub display_bottom_upwards: bool,
}

impl InfiniteLoadTrigger {
    pub fn new(edge_offset: Option<f64>, display_bottom_upwards: bool) -> Self {
        Self {
            edge_offset,
            display_bottom_upwards,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.edge_offset.is_some()
    }

    /// True once the scroll position is within `edge_offset` of the loading
    /// edge: the top for bottom-up lists that are not attached, the bottom
    /// otherwise.
    pub fn passed_edge(
        &self,
        scroll_top: f64,
        total_height: f64,
        viewport_height: f64,
        attached: bool,
    ) -> bool {
        let Some(edge) = self.edge_offset else {
            return false;
        };
        if self.display_bottom_upwards {
            !attached && scroll_top < edge
        } else {
            scroll_top > total_height - viewport_height - edge
        }
    }

    /// Edge condition plus the host's loading flag.
    pub fn should_load(
        &self,
        scroll_top: f64,
        total_height: f64,
        viewport_height: f64,
        attached: bool,
        is_loading: bool,
    ) -> bool {
        if is_loading {
            trace!("load suppressed: already loading");
            return false;
        }
        self.passed_edge(scroll_top, total_height, viewport_height, attached)
    }

    /// True when loading is enabled and the rows do not yet fill the viewport.
    pub fn is_missing_visible_rows(&self, total_height: f64, viewport_height: f64) -> bool {
        self.is_enabled() && total_height < viewport_height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn update(old_total: f64, new_total: f64, scroll_top: f64) -> AnchorUpdate {
        AnchorUpdate {
            display_bottom_upwards: true,
            scroll_top,
            viewport_height: 200.0,
            old_total_height: old_total,
            new_total_height: new_total,
            was_loading: false,
            is_loading: false,
            spinner_height: 0.0,
        }
    }

    #[test]
    fn test_attached_pins_to_bottom() {
        let mut anchor = BottomAnchor::new(true);
        anchor.capture(800.0);
        assert_eq!(anchor.settle(&update(1000.0, 1400.0, 800.0)), Some(1200.0));
    }

    #[test]
    fn test_attached_already_at_bottom() {
        let mut anchor = BottomAnchor::new(true);
        assert_eq!(anchor.settle(&update(1000.0, 1000.0, 800.0)), None);
    }

    #[test]
    fn test_detached_ignores_growth() {
        let mut anchor = BottomAnchor::new(false);
        anchor.capture(300.0);
        assert_eq!(anchor.settle(&update(1000.0, 1400.0, 300.0)), None);
    }

    #[test]
    fn test_load_completion_preserves_offset() {
        let mut anchor = BottomAnchor::new(false);
        // Previous update measured a 40px spinner
        anchor.settle(&AnchorUpdate {
            spinner_height: 40.0,
            is_loading: true,
            ..update(1000.0, 1000.0, 90.0)
        });
        anchor.capture(90.0);
        assert_eq!(anchor.preserved_offset(), 50.0);
        let target = anchor.settle(&AnchorUpdate {
            was_loading: true,
            is_loading: false,
            ..update(1000.0, 1600.0, 90.0)
        });
        assert_eq!(target, Some(650.0));
        assert_eq!(anchor.last_spinner_height(), 0.0);
    }

    #[test]
    fn test_top_down_never_corrects() {
        let mut anchor = BottomAnchor::new(true);
        let mut u = update(1000.0, 1400.0, 0.0);
        u.display_bottom_upwards = false;
        assert_eq!(anchor.settle(&u), None);
    }

    #[test]
    fn test_on_scroll_transitions() {
        let mut anchor = BottomAnchor::new(true);
        anchor.on_scroll(500.0, 800.0, true);
        assert!(!anchor.is_attached());
        anchor.on_scroll(800.0, 800.0, true);
        assert!(anchor.is_attached());
        anchor.on_scroll(900.0, 800.0, false);
        assert!(!anchor.is_attached());
    }

    #[test]
    fn test_trigger_disabled_without_edge() {
        let trigger = InfiniteLoadTrigger::new(None, false);
        assert!(!trigger.passed_edge(10_000.0, 1000.0, 200.0, false));
        assert!(!trigger.is_missing_visible_rows(0.0, 200.0));
    }

    #[test]
    fn test_trigger_bottom_edge() {
        let trigger = InfiniteLoadTrigger::new(Some(100.0), false);
        // 1000 - 200 - 100 = 700
        assert!(!trigger.passed_edge(700.0, 1000.0, 200.0, false));
        assert!(trigger.passed_edge(701.0, 1000.0, 200.0, false));
        assert!(!trigger.should_load(750.0, 1000.0, 200.0, false, true));
        assert!(trigger.should_load(750.0, 1000.0, 200.0, false, false));
    }

    #[test]
    fn test_trigger_top_edge_requires_detached() {
        let trigger = InfiniteLoadTrigger::new(Some(100.0), true);
        assert!(trigger.passed_edge(50.0, 1000.0, 200.0, false));
        assert!(!trigger.passed_edge(50.0, 1000.0, 200.0, true));
        assert!(!trigger.passed_edge(150.0, 1000.0, 200.0, false));
    }

    #[test]
    fn test_missing_visible_rows() {
        let trigger = InfiniteLoadTrigger::new(Some(0.0), false);
        assert!(trigger.is_missing_visible_rows(150.0, 200.0));
        assert!(!trigger.is_missing_visible_rows(200.0, 200.0));
    }
}
