use std::fmt;

use serde::Serialize;

use crate::{
    quadrature::{simpson_error_study, SimpsonStudy},
    Float, Result,
};

/// `ln(1 + x^2)`
pub fn log1p_sq(x: Float) -> Float {
    (x * x).ln_1p()
}

/// `d^4/dx^4 ln(1 + x^2) = -12 (x^4 - 6 x^2 + 1) / (1 + x^2)^4`
pub fn log1p_sq_fourth_derivative(x: Float) -> Float {
    let x2 = x * x;
    -12.0 * (x2 * x2 - 6.0 * x2 + 1.0) / (1.0 + x2).powi(4)
}

/// `int_0^1 ln(1 + x^2) dx = pi/2 - 2 + ln 2`
pub fn log1p_sq_exact() -> Float {
    std::f64::consts::FRAC_PI_2 - 2.0 + std::f64::consts::LN_2
}

#[derive(Debug, Clone)]
pub struct SimpsonConfig {
    /// Absolute error target.
    pub tol: Float,
    /// Grid points used to estimate `max |f''''|`.
    pub samples: usize,
}

impl Default for SimpsonConfig {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimpsonReport {
    pub tol: Float,
    pub exact: Float,
    #[serde(flatten)]
    pub study: SimpsonStudy,
}

/// Simpson error study for `int_0^1 ln(1 + x^2) dx`.
pub fn simpson_error(config: &SimpsonConfig) -> Result<SimpsonReport> {
    let exact = log1p_sq_exact();
    let study = simpson_error_study(
        log1p_sq,
        log1p_sq_fourth_derivative,
        0.0,
        1.0,
        exact,
        config.tol,
        config.samples,
    )?;
    Ok(SimpsonReport {
        tol: config.tol,
        exact,
        study,
    })
}

impl fmt::Display for SimpsonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "max |f''''| on [0, 1]: {}", self.study.k4)?;
        writeln!(f, "subintervals from the error bound: {}", self.study.bound)?;
        writeln!(
            f,
            "  (signed max f'''' = {}, truncated count {})",
            self.study.k4_signed, self.study.truncated_bound
        )?;
        writeln!(
            f,
            "estimation with {:e} is {} (error {:e})",
            self.tol, self.study.bound_meets_tol, self.study.error_at_bound
        )?;
        match self.study.least {
            Some(n) => write!(f, "least number of subintervals to satisfy error is {n}"),
            None => write!(f, "no even count up to {} satisfies the error", self.study.bound),
        }
    }
}
