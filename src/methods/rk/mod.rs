//! Explicit fixed-step Runge-Kutta integrators (midpoint RK2, RK4)

mod midpoint;
mod rk4;

pub use midpoint::midpoint;
pub use rk4::rk4;

use crate::{Error, Float, Result};

/// Validates the arguments shared by the fixed-step methods and returns an
/// upper estimate of the number of steps needed to reach `xend`.
pub(crate) fn check_fixed_step(x: Float, xend: Float, h: Float, nmax: usize) -> Result<usize> {
    if !x.is_finite() || !xend.is_finite() {
        return Err(Error::InvalidInterval(x, xend));
    }
    if x == xend {
        return Ok(0);
    }

    let direction = (xend - x).signum();
    if h == 0.0 || !h.is_finite() || h.signum() != direction {
        return Err(Error::InvalidStepSize(h));
    }

    let steps = ((xend - x) / h).ceil();
    if steps > nmax as Float {
        return Err(Error::NMaxExceeded(nmax));
    }
    Ok(steps as usize)
}

/// True when the step starting at `x` is the last one; it is then shortened
/// (or stretched by at most 1%) to land exactly on `xend`.
pub(crate) fn is_last_step(x: Float, xend: Float, h: Float) -> bool {
    (x + 1.01 * h - xend) * h.signum() >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_step_pointing_away_from_xend() {
        assert_eq!(check_fixed_step(0.0, 1.0, -0.1, 100), Err(Error::InvalidStepSize(-0.1)));
        assert_eq!(check_fixed_step(1.0, 0.0, 0.1, 100), Err(Error::InvalidStepSize(0.1)));
        assert_eq!(check_fixed_step(0.0, 1.0, 0.0, 100), Err(Error::InvalidStepSize(0.0)));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            check_fixed_step(0.0, Float::INFINITY, 0.1, 100),
            Err(Error::InvalidInterval(..))
        ));
    }

    #[test]
    fn empty_span_needs_no_steps() {
        assert_eq!(check_fixed_step(2.0, 2.0, 0.1, 100), Ok(0));
    }

    #[test]
    fn step_estimate_respects_nmax() {
        assert_eq!(check_fixed_step(0.0, 1.0, 0.25, 100), Ok(4));
        assert_eq!(check_fixed_step(0.0, 1.0, 0.001, 100), Err(Error::NMaxExceeded(100)));
    }

    #[test]
    fn last_step_detection() {
        assert!(!is_last_step(6.0, 2.0 * std::f64::consts::PI, 0.2));
        assert!(is_last_step(6.2, 2.0 * std::f64::consts::PI, 0.2));
        assert!(is_last_step(0.75, 1.0, 0.25));
        assert!(is_last_step(0.25, 0.0, -0.25));
    }
}
