//! `OpenInterval`: a closed 1D range `[lower, upper]` or the empty set.
//!
//! The name is historical; endpoints are included. Emptiness is an explicit
//! variant rather than a NaN bound: `OpenInterval::new` folds any NaN bound into
//! `Empty`, so "a NaN bound means empty" holds for every constructed value and
//! two empty intervals compare equal.

use std::fmt;

/// Closed interval on the real line, or empty.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenInterval {
    Empty,
    Bounded { lower: f64, upper: f64 },
}

impl OpenInterval {
    /// Interval from raw bounds. A NaN in either bound yields `Empty`.
    ///
    /// Bounds are stored as given; `lower > upper` is not reordered (see `spanning`).
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower.is_nan() || upper.is_nan() {
            OpenInterval::Empty
        } else {
            OpenInterval::Bounded { lower, upper }
        }
    }

    /// Degenerate interval `[v, v]`.
    #[inline]
    pub fn point(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Interval covering `a` and `b` in whichever order they come.
    #[inline]
    pub fn spanning(a: f64, b: f64) -> Self {
        if b < a {
            Self::new(b, a)
        } else {
            Self::new(a, b)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, OpenInterval::Empty)
    }

    #[inline]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            OpenInterval::Empty => None,
            OpenInterval::Bounded { lower, upper } => Some((lower, upper)),
        }
    }

    #[inline]
    pub fn lower(&self) -> Option<f64> {
        self.bounds().map(|(lo, _)| lo)
    }

    #[inline]
    pub fn upper(&self) -> Option<f64> {
        self.bounds().map(|(_, hi)| hi)
    }

    /// Bounds equal, with empty == empty.
    ///
    /// Any NaN bound collapses to `Empty` at construction, so `new(NaN, 1.0)` equals
    /// `new(NaN, 2.0)`; the other bound is not compared.
    #[inline]
    pub fn equals(&self, other: &OpenInterval) -> bool {
        self == other
    }

    /// Overlap of two intervals. Touching intervals share one point and are not empty.
    pub fn intersection(&self, other: &OpenInterval) -> OpenInterval {
        let (Some((a_lo, a_hi)), Some((b_lo, b_hi))) = (self.bounds(), other.bounds()) else {
            return OpenInterval::Empty;
        };
        if a_hi < b_lo || b_hi < a_lo {
            return OpenInterval::Empty;
        }
        OpenInterval::new(a_lo.max(b_lo), a_hi.min(b_hi))
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.bounds().is_some_and(|(lo, hi)| lo <= v && v <= hi)
    }

    /// `upper - lower`, or `None` when empty.
    #[inline]
    pub fn length(&self) -> Option<f64> {
        self.bounds().map(|(lo, hi)| hi - lo)
    }
}

impl fmt::Display for OpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenInterval::Empty => write!(f, "∅"),
            OpenInterval::Bounded { lower, upper } => write!(f, "[{lower}, {upper}]"),
        }
    }
}
