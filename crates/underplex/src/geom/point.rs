//! Tolerant 2D point.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::cfg::{PRECISION, PRECISION_INV};

/// Immutable point `(x, y)`.
///
/// Equality is an ε-box: `|Δx| <= ε && |Δy| <= ε` with ε = `PRECISION`.
/// The hash snaps each coordinate to the ε grid (`⌊x·10⁶⌋`, `⌊y·10⁶⌋`).
///
/// Known limitation: two points within ε of each other but on opposite sides
/// of a grid line compare equal yet hash differently, so a `HashSet` lookup
/// may miss them. Points closer than ε/2 to the same grid cell interior are
/// unaffected.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.v - other.v).norm()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        self.v
    }

    #[inline]
    fn snapped(&self) -> (i64, i64) {
        (
            (self.v.x * PRECISION_INV).floor() as i64,
            (self.v.y * PRECISION_INV).floor() as i64,
        )
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        !((self.v.x - other.v.x).abs() > PRECISION || (self.v.y - other.v.y).abs() > PRECISION)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.snapped().hash(state);
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { v }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.v
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v.x, self.v.y)
    }
}
