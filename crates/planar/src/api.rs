//! Curated API surface for downstream tools (the CLI, benches).
//!
//! Prefer these re-exports over reaching into `geom2` submodules directly.

pub use crate::geom2::cfg::{sign_close_to_zero, GeomCfg, AXIS_EPS, EQ_EPS};
pub use crate::geom2::rand::{
    draw_point, draw_segment, draw_segments, draw_triangle, Bounds2, ReplayToken,
};
pub use crate::geom2::{CanonicalFrame, LineSegment, OpenInterval, ParseError, Point, Triangle};

/// Do `l1` and `l2` share a point? Same as `l1.intersects_with(l2, cfg)`.
#[inline]
pub fn segments_intersect(l1: LineSegment, l2: LineSegment, cfg: GeomCfg) -> bool {
    l1.intersects_with(l2, cfg)
}

/// Pairs `(i, j)`, `i < j`, of intersecting segments. Quadratic; meant for small inputs.
pub fn intersecting_pairs(segments: &[LineSegment], cfg: GeomCfg) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            if a.intersects_with(*b, cfg) {
                out.push((i, j));
            }
        }
    }
    out
}
