//! Immutable, unit-safe physical quantities.
//!
//! Each quantity stores one `f64` in its canonical unit (degrees, meters,
//! square meters, cubic meters) and derives every other unit from it by a
//! fixed ratio.

pub mod types;
pub mod quantity;
pub mod geometry;

pub use types::*;
pub use quantity::*;
pub use geometry::*;
