//! Planar primitives and segment intersection.
//!
//! Purpose
//! - Small value types (`Point`, `LineSegment`, `OpenInterval`, `Triangle`)
//!   with by-value arithmetic.
//! - A segment–segment intersection test that reduces the 2D question to a 1D
//!   interval overlap after a rigid transform.
//!
//! Numerics
//! - Floating point with explicit thresholds (`GeomCfg`), no exact predicates.
//! - Emptiness of projections is the `OpenInterval::Empty` variant, never a
//!   NaN bound.
//!
//! Code cross-refs: `segment::LineSegment::intersects_with`, `cfg::GeomCfg`

pub mod cfg;
mod interval;
mod parse;
mod point;
pub mod rand;
mod segment;
mod triangle;

pub use cfg::{sign_close_to_zero, GeomCfg, AXIS_EPS, EQ_EPS};
pub use interval::OpenInterval;
pub use parse::ParseError;
pub use point::Point;
pub use segment::{CanonicalFrame, LineSegment};
pub use triangle::Triangle;

#[cfg(test)]
mod tests_props;
