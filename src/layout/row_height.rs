//! Row height model: a constant height or a per-index lookup.

use std::fmt;
use std::rc::Rc;

/// Default row height in pixels when none is configured.
pub const DEFAULT_ROW_HEIGHT: f64 = 30.0;

/// How tall each row is.
///
/// The variable form must be a pure function of the index; the
/// [`ViewportComputer`](super::ViewportComputer) caches its prefix sums.
#[derive(Clone)]
pub enum RowHeight {
    /// Every row has the same height.
    Fixed(f64),
    /// Height looked up per row index.
    Variable(Rc<dyn Fn(usize) -> f64>),
}

impl RowHeight {
    /// Build a variable model from a closure.
    pub fn variable(f: impl Fn(usize) -> f64 + 'static) -> Self {
        Self::Variable(Rc::new(f))
    }

    /// Height of the row at `index`.
    pub fn height_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(h) => *h,
            Self::Variable(f) => f(index),
        }
    }

    /// True for the constant-height model.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The constant height, if this is the fixed model.
    pub fn fixed_height(&self) -> Option<f64> {
        match self {
            Self::Fixed(h) => Some(*h),
            Self::Variable(_) => None,
        }
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ROW_HEIGHT)
    }
}

impl From<f64> for RowHeight {
    fn from(height: f64) -> Self {
        Self::Fixed(height)
    }
}

impl fmt::Debug for RowHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}
