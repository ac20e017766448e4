//! Immutable 2D Cartesian primitives with a fixed equality tolerance.
//!
//! Purpose
//! - Points, lines (sloped or vertical), segments, circles, and rectangles,
//!   plus analytic line/segment–circle intersection.
//! - All values are `Copy` and never change after construction.
//!
//! Conventions
//! - `PRECISION` (ε = 1e-6) is the only tolerance. Points are equal when both
//!   coordinates differ by at most ε; lines pass through a point when the
//!   residual is strictly below ε.
//! - Circle and rectangle containment use exact comparisons.
//!
//! Code cross-refs: `Point`, `Line`, `Segment`, `Circle`, `Rectangle`,
//! `intersect::{line_circle, segment_circle}`, `measure::within`.

mod cfg;
pub mod intersect;
mod line;
pub mod measure;
mod point;
mod shapes;

pub use cfg::PRECISION;
pub use intersect::{line_circle, segment_circle, Intersect};
pub use line::{GeomError, Line, Segment};
pub use measure::GridPoint;
pub use point::Point;
pub use shapes::{Circle, Rectangle};
