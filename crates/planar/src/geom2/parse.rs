//! Text forms for points, segments and triangles.
//!
//! - Point: `x,y` or `(x, y)`.
//! - LineSegment: `x1,y1:x2,y2`.
//! - Triangle: `x1,y1:x2,y2:x3,y3`.

use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use super::point::Point;
use super::segment::LineSegment;
use super::triangle::Triangle;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} {what}, found {found}")]
    WrongArity {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid coordinate {input:?}")]
    Coordinate {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

fn parse_coord(s: &str) -> Result<f64, ParseError> {
    let t = s.trim();
    t.parse::<f64>().map_err(|source| ParseError::Coordinate {
        input: t.to_string(),
        source,
    })
}

fn parse_points<const N: usize>(s: &str) -> Result<[Point; N], ParseError> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != N {
        return Err(ParseError::WrongArity {
            what: "points",
            expected: N,
            found: parts.len(),
        });
    }
    let mut out = [Point::origin(); N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse()?;
    }
    Ok(out)
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .unwrap_or(t);
        let coords: Vec<&str> = t.split(',').collect();
        match coords.as_slice() {
            [x, y] => Ok(Point::new(parse_coord(x)?, parse_coord(y)?)),
            _ => Err(ParseError::WrongArity {
                what: "coordinates",
                expected: 2,
                found: coords.len(),
            }),
        }
    }
}

impl FromStr for LineSegment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [p1, p2] = parse_points::<2>(s)?;
        Ok(LineSegment::new(p1, p2))
    }
}

impl FromStr for Triangle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [p1, p2, p3] = parse_points::<3>(s)?;
        Ok(Triangle::new(p1, p2, p3))
    }
}
