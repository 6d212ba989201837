//! Fixed-step quadrature rules and the Simpson error bound.

mod bound;
mod riemann;
mod simpson;

pub use bound::{
    least_simpson_n, max_abs_on_grid, simpson_bound, simpson_bound_truncated, simpson_error_study, SimpsonStudy,
    MAX_SUBINTERVALS,
};
pub use riemann::{log_integral, log_integral_exact, riemann_sum};
pub use simpson::simpson;

use crate::{Error, Float, Result};

fn check_interval(a: Float, b: Float) -> Result<()> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInterval(a, b))
    }
}
