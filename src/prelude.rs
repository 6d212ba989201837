//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use numlab::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `SolOut`, `ControlFlag`, `Solution`, `Status`.
//! - Fixed-step methods and their `Settings`: `midpoint`, `rk4`.
//! - High-level API: `solve_ivp`, `Options`, `IVPSolution`, and `Method`.
//! - Quadrature: `riemann_sum`, `simpson`, and the Simpson error bound helpers.
//! - `Cubic` and `RootNature`.

pub use crate::core::{
    ode::ODE,
    solout::{ControlFlag, DummySolOut, SolOut},
    solution::Solution,
    status::Status,
};
pub use crate::methods::{
    rk::{midpoint, rk4},
    settings::Settings,
};
pub use crate::poly::{Cubic, RootNature};
pub use crate::quadrature::{
    least_simpson_n, max_abs_on_grid, riemann_sum, simpson, simpson_bound, simpson_bound_truncated,
    simpson_error_study,
    SimpsonStudy,
};
pub use crate::solve::{solve_ivp, IVPSolution, Method, Options};
pub use crate::{Error, Float, Result};
