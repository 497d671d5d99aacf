//! Tolerance defaults for 2D geometry.
//!
//! Policy
//! - Defaults are fixed constants so that plain calls (`almost_equals`,
//!   `intersects`) behave identically everywhere.
//! - Callers that need a different precision pass a `GeomCfg` to the `*_eps` /
//!   `*_with` variants instead of mutating shared state.

/// Absolute tolerance for coordinate-wise near-equality of points.
pub const EQ_EPS: f64 = 1e-9;
/// Magnitudes of `y` below this are classified as lying on the x-axis.
pub const AXIS_EPS: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeomCfg {
    /// Used by `Point::almost_equals_eps` and friends.
    pub eps_eq: f64,
    /// Used by the sign classification in `LineSegment::x_intercept_with`.
    pub eps_axis: f64,
}

impl GeomCfg {
    /// Same tolerance for both checks.
    #[inline]
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_eq: eps,
            eps_axis: eps,
        }
    }
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_eq: EQ_EPS,
            eps_axis: AXIS_EPS,
        }
    }
}

/// Thresholded sign: `0` when `|v| < eps`, otherwise `±1`.
#[inline]
pub fn sign_close_to_zero(v: f64, eps: f64) -> i8 {
    if v.abs() < eps {
        0
    } else if v > 0.0 {
        1
    } else {
        -1
    }
}
