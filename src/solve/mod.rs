//! High-level solve module: fixed-step methods behind a single entry point.

pub mod options;
pub mod solout;
pub mod solution;
pub mod solve_ivp;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use options::{Method, Options};
pub use solution::IVPSolution;
pub use solve_ivp::solve_ivp;
