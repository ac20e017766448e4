//! Line and segment intersections with circles.
//!
//! Model
//! - Sloped lines substitute `y = m·x + c` into `(x−p)² + (y−q)² = r²` and
//!   solve the quadratic `A·x² + B·x + C = 0` with
//!   `A = m²+1`, `B = 2(m·c − m·q − p)`, `C = q² − r² + p² − 2·c·q + c²`.
//! - Vertical lines solve for `y` directly.
//! - Segments take the line result and keep points that `Segment::intersects`.
//!
//! Numerics
//! - The tangent case needs the discriminant to be exactly zero, which
//!   rounding rarely produces. A tangent line is usually reported as missing
//!   (slightly negative discriminant) or, less often, as two nearly
//!   coincident points.
//! - Vertical lines always yield both constructed points. When the line
//!   misses the circle these carry NaN `y` coordinates; callers that care
//!   must check `Circle::contains` or `f64::is_nan` themselves.

use std::collections::HashSet;

use super::line::{Line, Segment};
use super::point::Point;
use super::shapes::Circle;

/// Anything that can report where it crosses a circle.
pub trait Intersect {
    fn intersections(&self, circle: &Circle) -> HashSet<Point>;
}

impl Intersect for Line {
    fn intersections(&self, circle: &Circle) -> HashSet<Point> {
        line_circle(self, circle)
    }
}

impl Intersect for Segment {
    fn intersections(&self, circle: &Circle) -> HashSet<Point> {
        segment_circle(self, circle)
    }
}

/// Points where `line` meets `circle` (0, 1, or 2 for sloped lines; 2 for vertical).
pub fn line_circle(line: &Line, circle: &Circle) -> HashSet<Point> {
    let mut out = HashSet::with_capacity(2);
    let p = circle.center().x();
    let q = circle.center().y();

    match *line {
        Line::Vertical { x } => {
            let disc = circle.radius_sq() - (x - p) * (x - p);
            if disc < 0.0 {
                tracing::debug!(x, disc, "vertical line misses circle; points are degenerate");
            }
            let base = disc.sqrt();
            out.insert(Point::new(x, q - base));
            out.insert(Point::new(x, q + base));
        }
        Line::Sloped {
            slope: m,
            intercept: c,
        } => {
            let r = circle.radius();
            let qa = m * m + 1.0;
            let qb = 2.0 * (m * c - m * q - p);
            let qc = q * q - r * r + p * p - 2.0 * c * q + c * c;
            let disc = qb * qb - 4.0 * qa * qc;

            if disc == 0.0 {
                let x0 = -qb / (2.0 * qa);
                out.insert(Point::new(x0, m * x0 + c));
            } else if disc > 0.0 {
                let root = disc.sqrt();
                for x0 in [(-qb + root) / (2.0 * qa), (-qb - root) / (2.0 * qa)] {
                    out.insert(Point::new(x0, m * x0 + c));
                }
            }
        }
    }
    out
}

/// Points where `segment` meets `circle`: the line hits that lie on the segment.
pub fn segment_circle(segment: &Segment, circle: &Circle) -> HashSet<Point> {
    line_circle(&segment.as_line(), circle)
        .into_iter()
        .filter(|p| segment.intersects(p))
        .collect()
}
