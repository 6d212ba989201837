//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

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

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// Same contract as [`midpoint`](super::midpoint): fixed step `h`, the last
/// step lands exactly on `xend`, and `solout` sees every step endpoint.
pub fn rk4<F, S>(
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
    debug!("rk4: x0 = {x}, xend = {xend}, h = {h}, about {expected_steps} steps");

    // --- Declarations ---
    let n = y.len();
    let mut y = y.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
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

        // Stage computations
        f.ode(x, &y, &mut k1);
        for i in 0..n {
            yt[i] = y[i] + hs * A21 * k1[i];
        }
        f.ode(x + C2 * hs, &yt, &mut k2);

        for i in 0..n {
            yt[i] = y[i] + hs * A32 * k2[i];
        }
        f.ode(x + C3 * hs, &yt, &mut k3);

        for i in 0..n {
            yt[i] = y[i] + hs * A43 * k3[i];
        }
        f.ode(x + C4 * hs, &yt, &mut k4);

        // Update state
        let xold = x;
        x = if last { xend } else { x + hs };
        for i in 0..n {
            y[i] += hs * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i] + B4 * k4[i]);
        }

        nfev += 4;
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

    debug!("rk4: finished at x = {x} after {nstep} steps ({nfev} evaluations)");
    Ok(Solution::new(x, &y, h, nfev, nstep, status))
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
