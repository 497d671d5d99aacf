//! `LineSegment` and the segment–segment intersection test.
//!
//! Intersection model
//! - Move `l1.p1` to the origin and rotate so that `l1` lies on the positive
//!   x-axis. Rigid motions preserve incidence, so the question becomes 1D.
//! - Project `l2` onto its footprint on `y = 0` (`x_intercept`) and overlap it
//!   with `[0, |l1|]`.
//! - Endpoints are included: touching segments intersect.
//!
//! Code cross-refs: `Point::x_intercept`, `OpenInterval::intersection`, `GeomCfg`

use std::fmt;
use std::ops::{Add, Sub};

use super::cfg::{sign_close_to_zero, GeomCfg, EQ_EPS};
use super::interval::OpenInterval;
use super::point::Point;

/// Closed segment from `p1` to `p2`. Zero-length segments are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

/// Intermediate values of `LineSegment::intersects_with`, kept for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalFrame {
    /// Angle that aligns the first segment with the positive x-axis.
    pub rotation: f64,
    pub l1_translated: LineSegment,
    pub l2_translated: LineSegment,
    pub l1_rotated: LineSegment,
    pub l2_rotated: LineSegment,
    pub l1_interval: OpenInterval,
    pub l2_interval: OpenInterval,
    pub overlap: OpenInterval,
}

impl CanonicalFrame {
    #[inline]
    pub fn intersects(&self) -> bool {
        !self.overlap.is_empty()
    }
}

impl LineSegment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn equals(&self, m: LineSegment) -> bool {
        self.p1.equals(m.p1) && self.p2.equals(m.p2)
    }

    #[inline]
    pub fn almost_equals(&self, m: LineSegment) -> bool {
        self.almost_equals_eps(m, EQ_EPS)
    }

    #[inline]
    pub fn almost_equals_eps(&self, m: LineSegment, eps: f64) -> bool {
        self.p1.almost_equals_eps(m.p1, eps) && self.p2.almost_equals_eps(m.p2, eps)
    }

    /// Translate both endpoints by `p`.
    #[inline]
    pub fn plus(&self, p: Point) -> LineSegment {
        LineSegment::new(self.p1.plus(p), self.p2.plus(p))
    }

    /// Translate both endpoints by `-p`.
    #[inline]
    pub fn minus(&self, p: Point) -> LineSegment {
        LineSegment::new(self.p1.minus(p), self.p2.minus(p))
    }

    /// Direction from `p1` to `p2`, in (-π, π]. Zero-length segments give 0.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.vector().angle()
    }

    /// Rotate both endpoints about the coordinate origin (not about the segment).
    #[inline]
    pub fn rotate_about_origin(&self, angle: f64) -> LineSegment {
        LineSegment::new(self.p1.rotate(angle), self.p2.rotate(angle))
    }

    /// `p2 - p1`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.p2.minus(self.p1)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().magnitude()
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p1.plus(self.p2).times(0.5)
    }

    #[inline]
    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.p2, self.p1)
    }

    /// Footprint of the segment on the x-axis, with the default tolerance.
    #[inline]
    pub fn x_intercept(&self) -> OpenInterval {
        self.x_intercept_with(GeomCfg::default())
    }

    /// Footprint of the segment on the x-axis.
    ///
    /// - Lying on the axis: the x-range it covers, as `[min, max]` whatever the endpoint order.
    /// - Strictly on one side: empty.
    /// - One endpoint on the axis: that endpoint's x.
    /// - Crossing the axis: the crossing's x.
    ///
    /// `|y| < cfg.eps_axis` counts as on the axis. A NaN x-coordinate gives empty.
    pub fn x_intercept_with(&self, cfg: GeomCfg) -> OpenInterval {
        let LineSegment { p1, p2 } = *self;
        if p1.x.is_nan() || p2.x.is_nan() {
            return OpenInterval::Empty;
        }
        let s1 = sign_close_to_zero(p1.y, cfg.eps_axis);
        let s2 = sign_close_to_zero(p2.y, cfg.eps_axis);
        match (s1, s2) {
            (0, 0) => OpenInterval::spanning(p1.x, p2.x),
            (0, _) => OpenInterval::point(p1.x),
            (_, 0) => OpenInterval::point(p2.x),
            (a, b) if a == b => OpenInterval::Empty,
            _ => {
                let x = p1.x_intercept(p2);
                if x.is_infinite() {
                    OpenInterval::Empty
                } else {
                    OpenInterval::point(x)
                }
            }
        }
    }

    /// True if the segments share at least one point (endpoints included).
    #[inline]
    pub fn intersects(&self, other: LineSegment) -> bool {
        self.intersects_with(other, GeomCfg::default())
    }

    pub fn intersects_with(&self, other: LineSegment, cfg: GeomCfg) -> bool {
        let frame = self.to_canonical_frame_with(other, cfg);
        tracing::trace!(
            l1 = %self,
            l2 = %other,
            rotation = frame.rotation,
            l1_rotated = %frame.l1_rotated,
            l2_rotated = %frame.l2_rotated,
            l1_interval = %frame.l1_interval,
            l2_interval = %frame.l2_interval,
            overlap = %frame.overlap,
            "segment intersection"
        );
        frame.intersects()
    }

    #[inline]
    pub fn to_canonical_frame(&self, other: LineSegment) -> CanonicalFrame {
        self.to_canonical_frame_with(other, GeomCfg::default())
    }

    /// Rigid transform placing `self` on the positive x-axis, applied to both segments.
    pub fn to_canonical_frame_with(&self, other: LineSegment, cfg: GeomCfg) -> CanonicalFrame {
        let l1_translated = self.minus(self.p1);
        let l2_translated = other.minus(self.p1);

        let rotation = -l1_translated.angle();
        let l1_rotated = l1_translated.rotate_about_origin(rotation);
        let l2_rotated = l2_translated.rotate_about_origin(rotation);

        // l1 lies on the axis by construction; no projection needed.
        let l1_interval = OpenInterval::new(l1_rotated.p1.x, l1_rotated.p2.x);
        let l2_interval = l2_rotated.x_intercept_with(cfg);
        let overlap = l1_interval.intersection(&l2_interval);

        CanonicalFrame {
            rotation,
            l1_translated,
            l2_translated,
            l1_rotated,
            l2_rotated,
            l1_interval,
            l2_interval,
            overlap,
        }
    }
}

impl Add<Point> for LineSegment {
    type Output = LineSegment;
    #[inline]
    fn add(self, rhs: Point) -> LineSegment {
        self.plus(rhs)
    }
}

impl Sub<Point> for LineSegment {
    type Output = LineSegment;
    #[inline]
    fn sub(self, rhs: Point) -> LineSegment {
        self.minus(rhs)
    }
}

impl From<(Point, Point)> for LineSegment {
    #[inline]
    fn from((p1, p2): (Point, Point)) -> Self {
        LineSegment::new(p1, p2)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}
