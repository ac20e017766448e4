//! Integer-grid distance helpers (board positions, pixel coordinates).

use std::fmt;

/// Point with integer coordinates and exact equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &GridPoint) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Point within `distance` of `anchor` that is closest to `from`.
///
/// If `from` is already within `distance`, it is returned unchanged. Otherwise
/// the result sits `distance` away from `anchor` on the ray towards `from`,
/// with coordinates truncated toward zero, so each coordinate can be off by
/// up to one unit from the exact position.
pub fn within(from: GridPoint, anchor: GridPoint, distance: f64) -> GridPoint {
    if from.distance(&anchor) <= distance {
        return from;
    }
    let ax = f64::from(anchor.x);
    let ay = f64::from(anchor.y);

    if from.x == anchor.x {
        let y_sign = if from.y > anchor.y { 1.0 } else { -1.0 };
        return GridPoint::new(anchor.x, (ay + y_sign * distance) as i32);
    }

    let x_sign = if from.x < anchor.x { -1.0 } else { 1.0 };
    let y_sign = if from.y < anchor.y { -1.0 } else { 1.0 };
    let dy = f64::from(from.y) - ay;
    let dx = f64::from(from.x) - ax;
    let angle = (dy / dx).atan();
    let find_x = x_sign * (distance * angle.cos()).abs();
    let find_y = y_sign * (distance * angle.sin()).abs();
    GridPoint::new((ax + find_x) as i32, (ay + find_y) as i32)
}
