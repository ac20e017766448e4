//! Circles and axis-aligned rectangles.

use super::point::Point;

/// Circle with cached squared radius. Zero radius is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    radius_sq: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn radius_sq(&self) -> f64 {
        self.radius_sq
    }

    /// `distance(point, center) <= radius`, no tolerance.
    ///
    /// Points computed to lie exactly on the boundary may land a rounding
    /// error outside it.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.distance(&self.center) <= self.radius
    }
}

/// Axis-aligned rectangle built from two opposite corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    left: f64,
    right: f64,
    below: f64,
    above: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Any two opposite corners; bounds are canonicalized.
    pub fn new(p1: Point, p2: Point) -> Self {
        let (left, right) = if p1.x() < p2.x() {
            (p1.x(), p2.x())
        } else {
            (p2.x(), p1.x())
        };
        let (below, above) = if p1.y() < p2.y() {
            (p1.y(), p2.y())
        } else {
            (p2.y(), p1.y())
        };
        Self {
            left,
            right,
            below,
            above,
            width: right - left,
            height: above - below,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }
    #[inline]
    pub fn below(&self) -> f64 {
        self.below
    }
    #[inline]
    pub fn above(&self) -> f64 {
        self.above
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Closed bounding-box test.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        (self.left..=self.right).contains(&point.x()) && (self.below..=self.above).contains(&point.y())
    }
}
