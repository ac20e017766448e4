//! Infinite lines and bounded segments.

use std::fmt;

use super::cfg::PRECISION;
use super::point::Point;

/// Errors from geometry constructors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeomError {
    /// A sloped line needs a finite slope and intercept.
    NonFinite { slope: f64, intercept: f64 },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::NonFinite { slope, intercept } => write!(
                f,
                "sloped line needs finite slope and intercept (got slope={slope}, intercept={intercept})"
            ),
        }
    }
}

impl std::error::Error for GeomError {}

/// Infinite line in the plane.
///
/// Invariants:
/// - `Sloped` holds finite `slope` and `intercept` (`y = slope·x + intercept`).
/// - `Vertical` holds the x-coordinate where the line crosses the x-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// `y = slope·x + intercept`; rejects non-finite parameters.
    pub fn sloped(slope: f64, intercept: f64) -> Result<Self, GeomError> {
        if slope.is_finite() && intercept.is_finite() {
            Ok(Line::Sloped { slope, intercept })
        } else {
            Err(GeomError::NonFinite { slope, intercept })
        }
    }

    /// Vertical line `x = x0`.
    #[inline]
    pub fn vertical(x0: f64) -> Self {
        Line::Vertical { x: x0 }
    }

    /// Line through two points; vertical iff their x-coordinates are identical.
    ///
    /// The slope is taken left-to-right; the intercept is anchored at `p1`.
    pub fn through(p1: Point, p2: Point) -> Self {
        if p1.x() == p2.x() {
            return Line::Vertical { x: p1.x() };
        }
        let (left, right) = if p1.x() > p2.x() { (p2, p1) } else { (p1, p2) };
        let slope = (right.y() - left.y()) / (right.x() - left.x());
        let intercept = p1.y() - p1.x() * slope;
        Line::Sloped { slope, intercept }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        match *self {
            Line::Sloped { intercept, .. } => Some(intercept),
            Line::Vertical { .. } => None,
        }
    }

    #[inline]
    pub fn vertical_x(&self) -> Option<f64> {
        match *self {
            Line::Vertical { x } => Some(x),
            Line::Sloped { .. } => None,
        }
    }

    /// `y` at `x`, undefined (`None`) for vertical lines.
    #[inline]
    pub fn y_given_x(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Whether the line passes within ε of `point` (vertical residual for sloped lines).
    pub fn intersects(&self, point: &Point) -> bool {
        match *self {
            Line::Vertical { x } => (point.x() - x).abs() < PRECISION,
            Line::Sloped { slope, intercept } => {
                (point.y() - (point.x() * slope + intercept)).abs() < PRECISION
            }
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Sloped { slope, intercept } => write!(f, "y = {slope}·x + {intercept}"),
            Line::Vertical { x } => write!(f, "x = {x}"),
        }
    }
}

/// Bounded piece of a line between two endpoints.
///
/// `left`/`right` order the endpoints by x and `below`/`above` by y; on ties
/// the second constructor argument wins the smaller slot. They coincide only
/// when both endpoints are the same point.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    line: Line,
    p1: Point,
    p2: Point,
    left: Point,
    right: Point,
    below: Point,
    above: Point,
    length: f64,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Self {
        let (left, right) = if p1.x() < p2.x() { (p1, p2) } else { (p2, p1) };
        let (below, above) = if p1.y() < p2.y() { (p1, p2) } else { (p2, p1) };
        Self {
            line: Line::through(p1, p2),
            p1,
            p2,
            left,
            right,
            below,
            above,
            length: p1.distance(&p2),
        }
    }

    /// Endpoints in construction order.
    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    #[inline]
    pub fn left(&self) -> Point {
        self.left
    }
    #[inline]
    pub fn right(&self) -> Point {
        self.right
    }
    #[inline]
    pub fn below(&self) -> Point {
        self.below
    }
    #[inline]
    pub fn above(&self) -> Point {
        self.above
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.line.is_vertical()
    }

    /// The infinite line this segment lies on.
    #[inline]
    pub fn as_line(&self) -> Line {
        self.line
    }

    /// On the underlying line and inside the endpoint bounding box (inclusive).
    pub fn intersects(&self, point: &Point) -> bool {
        self.line.intersects(point)
            && point.x() >= self.left.x()
            && point.x() <= self.right.x()
            && point.y() >= self.below.y()
            && point.y() <= self.above.y()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -- {}] on {}", self.p1, self.p2, self.line)
    }
}
