//! Curated surface for simulator code (UNSTABLE).
//!
//! Important
//! - Convenience re-exports for the game simulators that build on this crate.
//!   Breaking changes are allowed; import from the defining module when you
//!   need a stable path.

// Seating order
pub use crate::ring::{Ring, RingError};
// 2D geometry
pub use crate::geom::{
    line_circle, segment_circle, Circle, GeomError, Intersect, Line, Point, Rectangle, Segment,
    PRECISION,
};
pub use crate::geom::measure::{within, GridPoint};
// Collections
pub use crate::combine::{choose_k, choose_one_from_each, format_sets};
pub use crate::find::{find, find_excluding, first_by, last_by};
pub use crate::insert_list::InsertList;
pub use crate::normalize::normalize;
pub use crate::pick::{select_only, select_random, select_random_with};
pub use crate::sort::{sort_by_order, tiers, Comparator};
pub use crate::strings::{date_string, string_list};
// Simulation setup
pub use crate::net::{Net, Specification};
