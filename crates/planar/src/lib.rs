//! Planar geometry primitives: points, segments, intervals and triangles.
//!
//! The interesting part is `LineSegment::intersects`; everything else is the
//! supporting data model.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, LineSegment, OpenInterval, Point, Triangle};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_segment, Bounds2, ReplayToken};
    pub use crate::geom2::{
        CanonicalFrame, GeomCfg, LineSegment, OpenInterval, ParseError, Point, Triangle,
    };
}
