//! Precision-tagged geometry primitives.
//!
//! Provides a 2D point and an axis-aligned rectangle whose coordinates carry
//! per-coordinate bit precision, with weakest-link precision queries and a
//! bulk precision setter. These describe the region of the algebraic plane a
//! tile request samples.

mod types;

pub use types::{PrecisePoint, PreciseRect};
