//! solve_ivp entry point implementation

use crate::{
    core::ode::ODE,
    methods::{
        rk::{midpoint, rk4},
        settings::Settings,
    },
    Float, Result,
};

use super::{
    options::{Method, Options},
    solout::DefaultSolOut,
    solution::IVPSolution,
};

/// Solve an initial value problem with a fixed-step method, recording the
/// solution at `x0` and at every step endpoint.
pub fn solve_ivp<F>(f: &F, x0: Float, xend: Float, y0: &[Float], options: Options) -> Result<IVPSolution>
where
    F: ODE,
{
    let mut settings = Settings::default();
    if let Some(nmax) = options.nmax {
        settings.nmax = nmax;
    }

    let mut default_solout = DefaultSolOut::new();

    // Dispatch by method
    let sol = match options.method {
        Method::Midpoint => midpoint(f, x0, xend, y0, options.h, Some(&mut default_solout), settings)?,
        Method::RK4 => rk4(f, x0, xend, y0, options.h, Some(&mut default_solout), settings)?,
    };

    let (t, y) = default_solout.into_data();
    Ok(IVPSolution {
        t,
        y,
        nfev: sol.nfev,
        nstep: sol.nstep,
        status: sol.status,
    })
}
