//! Polynomial helpers.

mod cubic;

pub use cubic::{discriminant, Cubic, RootNature};
