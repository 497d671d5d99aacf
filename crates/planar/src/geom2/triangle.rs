//! `Triangle`: three vertices, compared as an unordered set.

use super::point::Point;
use super::segment::LineSegment;

/// Triangle with vertices in no particular order.
///
/// Equality holds under any of the 6 vertex permutations, using exact point
/// comparison.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[inline]
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Edges `p1→p2`, `p2→p3`, `p3→p1`.
    #[inline]
    pub fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.p1, self.p2),
            LineSegment::new(self.p2, self.p3),
            LineSegment::new(self.p3, self.p1),
        ]
    }

    pub fn equals(&self, u: &Triangle) -> bool {
        let (a, b, c) = (u.p1, u.p2, u.p3);
        let same = |p: Point, q: Point, r: Point| {
            self.p1.equals(p) && self.p2.equals(q) && self.p3.equals(r)
        };
        same(a, b, c)
            || same(a, c, b)
            || same(b, a, c)
            || same(b, c, a)
            || same(c, a, b)
            || same(c, b, a)
    }

    /// Shoelace sum halved; positive for counterclockwise vertex order.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        let Triangle { p1, p2, p3 } = *self;
        0.5 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
