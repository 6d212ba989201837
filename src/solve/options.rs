//! Options and method selection for solve_ivp

use bon::Builder;

use crate::Float;

/// Fixed-step method selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Method {
    /// Explicit midpoint rule, second order
    Midpoint,
    /// Classic fixed-step RK4
    RK4,
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp
pub struct Options {
    /// Method to use. Default: explicit midpoint.
    #[builder(default = Method::Midpoint)]
    pub method: Method,
    /// Fixed step size. Its sign must point from `x0` towards `xend`.
    pub h: Float,
    /// Maximum number of allowed steps (maps to `settings.nmax`).
    pub nmax: Option<usize>,
}
