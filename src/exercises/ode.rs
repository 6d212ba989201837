use std::fmt;

use serde::Serialize;

use crate::{
    core::{ode::ODE, status::Status},
    plot::{Chart, Series},
    solve::{solve_ivp, Method, Options},
    Float, Result,
};

/// `y' = y cos t`
#[derive(Debug, Clone, Copy)]
pub struct CosineGrowth;

impl ODE for CosineGrowth {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        dydx[0] = y[0] * x.cos();
    }
}

/// Solution of [`CosineGrowth`] with `y(0) = 1`: `y = e^{sin t}`.
pub fn cosine_growth_exact(t: Float) -> Float {
    t.sin().exp()
}

#[derive(Debug, Clone)]
pub struct OdeConfig {
    pub method: Method,
    pub h: Float,
    pub xend: Float,
}

impl Default for OdeConfig {
    fn default() -> Self {
        Self {
            method: Method::Midpoint,
            h: 0.2,
            xend: 2.0 * std::f64::consts::PI,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OdeReport {
    pub method: Method,
    pub h: Float,
    pub t: Vec<Float>,
    pub approx: Vec<Float>,
    pub exact: Vec<Float>,
    pub max_abs_error: Float,
    pub nstep: usize,
    pub nfev: usize,
    pub status: Status,
}

/// Integrates [`CosineGrowth`] from `y(0) = 1` to `config.xend` and
/// evaluates the exact solution on the same grid.
pub fn midpoint_ode(config: &OdeConfig) -> Result<OdeReport> {
    let options = Options::builder().method(config.method).h(config.h).build();
    let sol = solve_ivp(&CosineGrowth, 0.0, config.xend, &[1.0], options)?;

    let (approx, exact): (Vec<Float>, Vec<Float>) = sol
        .iter()
        .map(|(t, y)| (y[0], cosine_growth_exact(t)))
        .unzip();
    let max_abs_error = approx
        .iter()
        .zip(&exact)
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, Float::max);

    Ok(OdeReport {
        method: config.method,
        h: config.h,
        t: sol.t,
        approx,
        exact,
        max_abs_error,
        nstep: sol.nstep,
        nfev: sol.nfev,
        status: sol.status,
    })
}

impl OdeReport {
    /// Approximate trajectory as markers over a densely sampled exact curve.
    pub fn chart(&self) -> Result<Chart> {
        let (t0, t1) = match (self.t.first(), self.t.last()) {
            (Some(&t0), Some(&t1)) => (t0, t1),
            _ => (0.0, 0.0),
        };
        Ok(Chart::new("y' = y cos t")
            .x_label(format!("t from {t0:.3} to {t1:.3}"))
            .with_series(Series::from_fn(
                "exact, y = e^{sin t}",
                cosine_growth_exact,
                t0,
                t1,
                400,
                '.',
            ))
            .with_series(Series::new("approx", &self.t, &self.approx, 'o')?))
    }
}

impl fmt::Display for OdeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} method, h = {}", self.method, self.h)?;
        writeln!(f, "{:>8} {:>14} {:>14}", "t", "approx", "exact")?;
        for ((t, a), e) in self.t.iter().zip(&self.approx).zip(&self.exact) {
            writeln!(f, "{t:>8.4} {a:>14.8} {e:>14.8}")?;
        }
        write!(
            f,
            "max |error| = {:e} after {} steps ({} evaluations, {:?})",
            self.max_abs_error, self.nstep, self.nfev, self.status
        )
    }
}
