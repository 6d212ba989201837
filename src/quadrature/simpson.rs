use crate::{Error, Float, Result};

use super::check_interval;

/// Composite Simpson's rule on `n` subintervals of `[a, b]`.
///
/// `n` must be even and positive; an odd count yields
/// [`Error::OddSubintervals`].
///
/// # Example
///
/// ```
/// use numlab::quadrature::simpson;
///
/// // Simpson is exact for cubics
/// let s = simpson(|x| x * x * x, 0.0, 2.0, 2).unwrap();
/// assert!((s - 4.0).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: Float, b: Float, n: usize) -> Result<Float>
where
    F: Fn(Float) -> Float,
{
    check_interval(a, b)?;
    if n == 0 {
        return Err(Error::ZeroSubintervals);
    }
    if n % 2 == 1 {
        return Err(Error::OddSubintervals(n));
    }

    let dx = (b - a) / n as Float;
    let y: Vec<Float> = (0..=n).map(|i| f(a + i as Float * dx)).collect();
    let sum: Float = y.windows(3).step_by(2).map(|w| w[0] + 4.0 * w[1] + w[2]).sum();
    Ok(dx / 3.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn odd_count_rejected() {
        assert_eq!(simpson(|x| x, 0.0, 1.0, 7), Err(Error::OddSubintervals(7)));
        assert_eq!(simpson(|x| x, 0.0, 1.0, 0), Err(Error::ZeroSubintervals));
    }

    #[test]
    fn exact_for_cubics() {
        let s = simpson(|x| 2.0 * x * x * x - x + 1.0, -1.0, 3.0, 4).unwrap();
        // [x^4 / 2 - x^2 / 2 + x] from -1 to 3
        assert_abs_diff_eq!(s, 40.5 - 4.5 + 3.0 - (0.5 - 0.5 - 1.0), epsilon = 1e-12);
    }

    #[test]
    fn sine_over_half_period() {
        let s = simpson(f64::sin, 0.0, std::f64::consts::PI, 100).unwrap();
        assert_abs_diff_eq!(s, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn reversed_interval_changes_sign() {
        let fwd = simpson(f64::exp, 0.0, 1.0, 10).unwrap();
        let bwd = simpson(f64::exp, 1.0, 0.0, 10).unwrap();
        assert_abs_diff_eq!(fwd, -bwd, epsilon = 1e-14);
    }
}
