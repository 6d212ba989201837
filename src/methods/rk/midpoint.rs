//! Explicit midpoint (RK2) fixed-step integrator.

use log::debug;

use crate::{
    core::{
        ode::ODE,
        solout::{ControlFlag, SolOut},
        solution::Solution,
        status::Status,
    },
    methods::settings::Settings,
    Float, Result,
};

use super::{check_fixed_step, is_last_step};

/// Explicit midpoint rule (second-order Runge-Kutta) with fixed step `h`.
///
/// Each step evaluates
///
/// ```text
/// k1 = f(x, y)
/// k2 = f(x + h/2, y + h/2 * k1)
/// y  = y + h * k2
/// ```
///
/// The final step is adjusted so the integration ends exactly on `xend`.
/// `solout` is called once at `x0` and after every step.
pub fn midpoint<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y: &[Float],
    h: Float,
    mut solout: Option<&mut S>,
    settings: Settings,
) -> Result<Solution>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---
    let expected_steps = check_fixed_step(x, xend, h, settings.nmax)?;
    debug!("midpoint: x0 = {x}, xend = {xend}, h = {h}, about {expected_steps} steps");

    // --- Declarations ---
    let n = y.len();
    let mut y = y.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut nfev = 0;
    let mut nstep = 0;
    let mut status = Status::Success;

    // --- Initial output ---
    if let Some(s) = solout.as_mut() {
        if s.solout(x, x, &y) == ControlFlag::Interrupt {
            return Ok(Solution::new(x, &y, h, nfev, nstep, Status::Interrupted));
        }
    }
    if expected_steps == 0 {
        return Ok(Solution::new(x, &y, h, nfev, nstep, status));
    }

    // --- Main integration loop ---
    loop {
        let last = is_last_step(x, xend, h);
        let hs = if last { xend - x } else { h };

        f.ode(x, &y, &mut k1);
        for i in 0..n {
            yt[i] = y[i] + 0.5 * hs * k1[i];
        }
        f.ode(x + 0.5 * hs, &yt, &mut k2);

        let xold = x;
        x = if last { xend } else { x + hs };
        for i in 0..n {
            y[i] += hs * k2[i];
        }

        nfev += 2;
        nstep += 1;

        if let Some(s) = solout.as_mut() {
            if s.solout(xold, x, &y) == ControlFlag::Interrupt {
                status = Status::Interrupted;
                break;
            }
        }

        if last {
            break;
        }
    }

    debug!("midpoint: finished at x = {x} after {nstep} steps ({nfev} evaluations)");
    Ok(Solution::new(x, &y, h, nfev, nstep, status))
}
