use log::debug;

use crate::{Error, Float, Result};

use super::check_interval;

/// Fixed-step sum `sum_{i=0}^{n} f(a + i dx) dx` with `dx = (b - a) / n`.
///
/// Every one of the `n + 1` grid points, endpoints included, carries the full
/// weight `dx`, so the result differs from the trapezoidal rule by
/// `dx (f(a) + f(b)) / 2`.
pub fn riemann_sum<F>(f: F, a: Float, b: Float, n: usize) -> Result<Float>
where
    F: Fn(Float) -> Float,
{
    check_interval(a, b)?;
    if n == 0 {
        return Err(Error::ZeroSubintervals);
    }

    let dx = (b - a) / n as Float;
    let sum: Float = (0..=n).map(|i| f(a + i as Float * dx) * dx).sum();
    debug!("riemann_sum: [{a}, {b}] with n = {n}, dx = {dx}: {sum}");
    Ok(sum)
}

/// `ln x / (1 + ln x)^2`, the derivative of `x / (1 + ln x)`.
fn log_integrand(x: Float) -> Float {
    let lnx = x.ln();
    lnx / ((1.0 + lnx) * (1.0 + lnx))
}

/// Approximates `int_1^c ln x / (1 + ln x)^2 dx` with [`riemann_sum`] on `n`
/// subintervals.
pub fn log_integral(c: Float, n: usize) -> Result<Float> {
    riemann_sum(log_integrand, 1.0, c, n)
}

/// Closed form of [`log_integral`]: `c / (1 + ln c) - 1`.
pub fn log_integral_exact(c: Float) -> Float {
    c / (1.0 + c.ln()) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::E;

    #[test]
    fn constant_sums_all_points() {
        // n + 1 points each weighted dx
        let s = riemann_sum(|_| 1.0, 0.0, 2.0, 4).unwrap();
        assert_abs_diff_eq!(s, 2.5, epsilon = 1e-14);
    }

    #[test]
    fn zero_subintervals_rejected() {
        assert_eq!(riemann_sum(|x| x, 0.0, 1.0, 0), Err(Error::ZeroSubintervals));
    }

    #[test]
    fn exact_value_at_e() {
        assert_abs_diff_eq!(log_integral_exact(E), E / 2.0 - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn log_integral_close_to_closed_form() {
        let approx = log_integral(E, 1000).unwrap();
        assert_abs_diff_eq!(approx, E / 2.0 - 1.0, epsilon = 1e-3);
    }

    #[test]
    fn log_integral_converges() {
        let exact = log_integral_exact(E);
        let coarse = (log_integral(E, 100).unwrap() - exact).abs();
        let fine = (log_integral(E, 1000).unwrap() - exact).abs();
        assert!(fine < coarse / 5.0);
    }
}
