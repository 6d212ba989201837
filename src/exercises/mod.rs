//! The textbook exercises: fixed problems with their original constants as
//! configurable defaults. Each returns a serialisable report whose `Display`
//! is the console output of the `numlab` binary.

mod cubic;
mod log_integral;
mod ode;
mod simpson;

pub use cubic::{cubic_roots, CubicConfig, CubicReport};
pub use log_integral::{log_integral, LogIntegralConfig, LogIntegralReport};
pub use ode::{cosine_growth_exact, midpoint_ode, CosineGrowth, OdeConfig, OdeReport};
pub use simpson::{
    log1p_sq, log1p_sq_exact, log1p_sq_fourth_derivative, simpson_error, SimpsonConfig, SimpsonReport,
};
