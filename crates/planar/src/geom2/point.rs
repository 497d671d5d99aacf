//! `Point`: a position in the plane, equally read as a vector from the origin.
//!
//! All operations are by value and return fresh points. NaN components are legal
//! and propagate through arithmetic; callers downstream (e.g. interval
//! construction) interpret them as "undefined".

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use super::cfg::EQ_EPS;

/// Point (or vector) in R².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Exact comparison of both coordinates. Prefer `almost_equals` for computed values.
    #[inline]
    pub fn equals(&self, q: Point) -> bool {
        self.x == q.x && self.y == q.y
    }

    /// Coordinate-wise `|Δ| < EQ_EPS`.
    #[inline]
    pub fn almost_equals(&self, q: Point) -> bool {
        self.almost_equals_eps(q, EQ_EPS)
    }

    #[inline]
    pub fn almost_equals_eps(&self, q: Point, eps: f64) -> bool {
        (self.x - q.x).abs() < eps && (self.y - q.y).abs() < eps
    }

    /// Angle from the positive x-axis in radians, in (-π, π]. The origin maps to 0.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn plus(&self, q: Point) -> Point {
        Point::new(self.x + q.x, self.y + q.y)
    }

    #[inline]
    pub fn minus(&self, q: Point) -> Point {
        Point::new(self.x - q.x, self.y - q.y)
    }

    #[inline]
    pub fn times(&self, f: f64) -> Point {
        Point::new(self.x * f, self.y * f)
    }

    /// Division by zero follows IEEE-754 (±∞ or NaN components).
    #[inline]
    pub fn divide(&self, f: f64) -> Point {
        Point::new(self.x / f, self.y / f)
    }

    /// Counterclockwise rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotate(&self, angle: f64) -> Point {
        let r = Rotation2::new(angle);
        Point::from(r * self.to_vector())
    }

    /// x-coordinate where the infinite line through `self` and `q` meets `y = 0`.
    ///
    /// A horizontal line has no finite intercept; every infinite result is
    /// reported as `f64::INFINITY`, whatever its sign.
    pub fn x_intercept(&self, q: Point) -> f64 {
        let x = self.x - self.y * (q.x - self.x) / (q.y - self.y);
        if x.is_infinite() {
            f64::INFINITY
        } else {
            x
        }
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Unit vector in the same direction; NaN components for the zero vector.
    #[inline]
    pub fn normalize(&self) -> Point {
        self.divide(self.magnitude())
    }

    #[inline]
    pub fn dot_product(&self, q: Point) -> f64 {
        self.x * q.x + self.y * q.y
    }

    /// z-component of the 3D cross product; positive when `q` lies counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, q: Point) -> f64 {
        self.x * q.y - self.y * q.x
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        self.plus(rhs)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        self.minus(rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        self.times(rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        self.divide(rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
