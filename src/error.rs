//! Errors for quadrature rules and integration methods

use thiserror::Error;

use crate::Float;

/// Argument validation errors returned by the quadrature and ODE entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("number of subintervals must be even (got {0})")]
    OddSubintervals(usize),
    #[error("number of subintervals must be positive")]
    ZeroSubintervals,
    #[error("step size h has invalid sign or value (got {0})")]
    InvalidStepSize(Float),
    #[error("integration bounds must be finite (got [{0}, {1}])")]
    InvalidInterval(Float, Float),
    #[error("tolerance must be positive and finite (got {0})")]
    InvalidTolerance(Float),
    #[error("non-finite sample {value} at x = {x}")]
    NonFiniteSample { x: Float, value: Float },
    #[error("derivative bound must be finite (got {0})")]
    NonFiniteBound(Float),
    #[error("error bound needs more than {0} subintervals")]
    BoundTooLarge(usize),
    #[error("fixed step integration needs more than nmax = {0} steps")]
    NMaxExceeded(usize),
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
