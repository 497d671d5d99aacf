//! Replayable random fixtures: points, segments and triangles in a box.
//!
//! Purpose
//! - Feed benchmarks and experiments with inputs that are reproducible from a
//!   `(seed, index)` pair, so a single interesting draw can be replayed alone.
//!
//! Model
//! - Coordinates are uniform in `[min, max)` per axis.
//! - Determinism uses a replay token mixed into a single `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point;
use super::segment::LineSegment;
use super::triangle::Triangle;

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    /// Square `[-half, half)²`.
    #[inline]
    pub fn centered(half: f64) -> Self {
        Self {
            min: Point::new(-half, -half),
            max: Point::new(half, half),
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::centered(1.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn sample_point<R: Rng>(rng: &mut R, b: Bounds2) -> Point {
    let lerp = |lo: f64, hi: f64, u: f64| lo + (hi - lo) * u;
    let x = lerp(b.min.x, b.max.x, rng.gen::<f64>());
    let y = lerp(b.min.y, b.max.y, rng.gen::<f64>());
    Point::new(x, y)
}

pub fn draw_point(b: Bounds2, tok: ReplayToken) -> Point {
    sample_point(&mut tok.to_std_rng(), b)
}

pub fn draw_segment(b: Bounds2, tok: ReplayToken) -> LineSegment {
    let mut rng = tok.to_std_rng();
    let p1 = sample_point(&mut rng, b);
    let p2 = sample_point(&mut rng, b);
    LineSegment::new(p1, p2)
}

pub fn draw_triangle(b: Bounds2, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let p1 = sample_point(&mut rng, b);
    let p2 = sample_point(&mut rng, b);
    let p3 = sample_point(&mut rng, b);
    Triangle::new(p1, p2, p3)
}

/// `n` segments from consecutive tokens starting at `tok`.
pub fn draw_segments(n: usize, b: Bounds2, tok: ReplayToken) -> Vec<LineSegment> {
    let mut out = Vec::with_capacity(n);
    let mut t = tok;
    for _ in 0..n {
        out.push(draw_segment(b, t));
        t = t.next();
    }
    out
}
