//! Small building blocks shared by the underplex game simulators.
//!
//! Contents
//! - `ring`: cyclic, duplicate-free ordering with a movable first element
//!   (seating order around a table).
//! - `geom`: immutable 2D primitives with a fixed tolerance and
//!   line/segment–circle intersection.
//! - Collection helpers: `combine`, `sort`, `find`, `pick`, `normalize`,
//!   `insert_list`, `strings`, and the `net` traits.
//!
//! API Policy
//! - Everything here is synchronous and in-memory; nothing does I/O.
//! - Absent results are `Option`, contract violations are `Result` with a
//!   module-local error enum, and "nothing changed" outcomes are `false`.

pub mod api;
pub mod combine;
pub mod find;
pub mod geom;
pub mod insert_list;
pub mod net;
pub mod normalize;
pub mod pick;
pub mod ring;
pub mod sort;
pub mod strings;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Circle, GeomError, Line, Point, Rectangle, Segment, PRECISION};
pub use ring::{Ring, RingError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::combine::{choose_k, choose_one_from_each};
    pub use crate::geom::{
        line_circle, segment_circle, Circle, GeomError, Intersect, Line, Point, Rectangle,
        Segment, PRECISION,
    };
    pub use crate::insert_list::InsertList;
    pub use crate::net::{Net, Specification};
    pub use crate::ring::{Ring, RingError};
}
