use std::fmt;

use serde::Serialize;

use crate::{quadrature, Float, Result};

#[derive(Debug, Clone)]
pub struct LogIntegralConfig {
    /// Upper limit `c` of `int_1^c`.
    pub upper: Float,
    /// Number of subintervals.
    pub n: usize,
}

impl Default for LogIntegralConfig {
    fn default() -> Self {
        Self {
            upper: std::f64::consts::E,
            n: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogIntegralReport {
    pub upper: Float,
    pub n: usize,
    pub approx: Float,
    pub exact: Float,
    pub abs_error: Float,
}

pub fn log_integral(config: &LogIntegralConfig) -> Result<LogIntegralReport> {
    let approx = quadrature::log_integral(config.upper, config.n)?;
    let exact = quadrature::log_integral_exact(config.upper);
    Ok(LogIntegralReport {
        upper: config.upper,
        n: config.n,
        approx,
        exact,
        abs_error: (approx - exact).abs(),
    })
}

impl fmt::Display for LogIntegralReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fixed-step sum (N = {}): {}", self.n, self.approx)?;
        writeln!(f, "closed form:             {}", self.exact)?;
        write!(f, "absolute error:          {:e}", self.abs_error)
    }
}
