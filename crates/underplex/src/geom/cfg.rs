//! Tolerance constants for 2D geometry.
//!
//! Policy
//! - One fixed epsilon governs point equality, hash snapping, and the
//!   line/segment "passes through point" test. Changing it changes which
//!   points compare equal and which intersections are reported.

/// Point precision ε. Coordinates closer than this compare equal.
pub const PRECISION: f64 = 1e-6;
/// Grid scale used when snapping coordinates for hashing (1/ε).
pub(crate) const PRECISION_INV: f64 = 1.0 / PRECISION;
