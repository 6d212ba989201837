//! Small numerical methods library: a cubic discriminant test, fixed-step and
//! Simpson quadrature with a priori error bounds, and fixed-step Runge-Kutta
//! integrators for initial value problems.
//!
//! The [`exercises`] module wires these together into the classic textbook
//! problems that the `numlab` binary runs.

mod error;

pub mod core;
pub mod exercises;
pub mod methods;
pub mod plot;
pub mod poly;
pub mod prelude;
pub mod quadrature;
pub mod solve;

pub use error::{Error, Result};

/// Floating point type used throughout the crate.
pub type Float = f64;
