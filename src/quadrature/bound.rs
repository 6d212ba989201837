//! A priori and empirical subinterval counts for Simpson's rule.
//!
//! The composite Simpson error on `[a, b]` with `n` subintervals satisfies
//!
//! ```text
//! |E| <= (b - a)^5 K4 / (180 n^4),    K4 = max |f''''(x)|
//! ```
//!
//! [`simpson_bound`] inverts this for `n`, and [`least_simpson_n`] searches
//! for the smallest even `n` that actually meets the tolerance.

use log::{debug, trace};
use serde::Serialize;

use crate::{Error, Float, Result};

use super::{check_interval, simpson};

/// Largest subinterval count [`simpson_bound`] will return.
pub const MAX_SUBINTERVALS: usize = 1 << 30;

/// Outcome of [`simpson_error_study`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpsonStudy {
    /// Estimate of `max |f''''|` on the interval.
    pub k4: Float,
    /// Estimate of the signed `max f''''`.
    pub k4_signed: Float,
    /// Subinterval count guaranteed by the error bound.
    pub bound: usize,
    /// Count from the signed maximum, truncated rather than rounded up.
    /// Not guaranteed to meet the tolerance.
    pub truncated_bound: usize,
    /// Simpson approximation with `bound` subintervals.
    pub approx_at_bound: Float,
    /// `|approx_at_bound - exact|`
    pub error_at_bound: Float,
    pub bound_meets_tol: bool,
    /// Smallest even count meeting the tolerance, searched up to `bound`.
    pub least: Option<usize>,
}

/// Values of `f` on `samples` evenly spaced points of `[a, b]`, endpoints
/// included. Fails on the first non-finite value.
fn sample_grid<F>(f: F, a: Float, b: Float, samples: usize) -> Result<Vec<Float>>
where
    F: Fn(Float) -> Float,
{
    check_interval(a, b)?;
    if samples == 0 {
        return Err(Error::ZeroSubintervals);
    }

    let dx = if samples > 1 { (b - a) / (samples - 1) as Float } else { 0.0 };
    (0..samples)
        .map(|i| {
            let x = a + i as Float * dx;
            let value = f(x);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(Error::NonFiniteSample { x, value })
            }
        })
        .collect()
}

/// Maximum of `|f|` over `samples` evenly spaced points of `[a, b]`,
/// endpoints included.
pub fn max_abs_on_grid<F>(f: F, a: Float, b: Float, samples: usize) -> Result<Float>
where
    F: Fn(Float) -> Float,
{
    Ok(sample_grid(f, a, b, samples)?
        .into_iter()
        .map(Float::abs)
        .fold(0.0, Float::max))
}

/// `((b - a)^5 k4 / (180 tol))^(1/4)`, the real-valued root of the bound.
fn bound_root(a: Float, b: Float, k4: Float, tol: Float) -> Result<Float> {
    check_interval(a, b)?;
    if !(tol > 0.0 && tol.is_finite()) {
        return Err(Error::InvalidTolerance(tol));
    }
    if !k4.is_finite() {
        return Err(Error::NonFiniteBound(k4));
    }
    Ok(((b - a).abs().powi(5) * k4.abs() / (180.0 * tol)).powf(0.25))
}

fn to_count(n: Float) -> Result<usize> {
    if n > MAX_SUBINTERVALS as Float {
        return Err(Error::BoundTooLarge(MAX_SUBINTERVALS));
    }
    Ok(n as usize)
}

/// Smallest even `n >= 2` for which the Simpson error bound
/// `(b - a)^5 k4 / (180 n^4)` does not exceed `tol`.
pub fn simpson_bound(a: Float, b: Float, k4: Float, tol: Float) -> Result<usize> {
    let n = to_count(bound_root(a, b, k4, tol)?.ceil())?.max(2);
    Ok(n.next_multiple_of(2))
}

/// The bound as it is often computed by hand: `k4` taken as the signed
/// maximum (negative values count as zero) and the root truncated. The
/// result may be odd and may fall short of the tolerance.
pub fn simpson_bound_truncated(a: Float, b: Float, k4: Float, tol: Float) -> Result<usize> {
    to_count(bound_root(a, b, k4.max(0.0), tol)?.floor())
}

/// Searches `n = 2, 4, ..., limit` for the first count whose Simpson
/// approximation is within `tol` of `exact`.
pub fn least_simpson_n<F>(f: F, a: Float, b: Float, exact: Float, tol: Float, limit: usize) -> Result<Option<usize>>
where
    F: Fn(Float) -> Float,
{
    for n in (2..=limit).step_by(2) {
        let err = (simpson(&f, a, b, n)? - exact).abs();
        trace!("simpson n = {n}: error {err:e}");
        if err < tol {
            return Ok(Some(n));
        }
    }
    Ok(None)
}

/// Estimates `K4` from `f4` on `samples` grid points, derives the a priori
/// subinterval count, checks it against `exact`, then searches for the least
/// even count below it that meets `tol`.
pub fn simpson_error_study<F, G>(
    f: F,
    f4: G,
    a: Float,
    b: Float,
    exact: Float,
    tol: Float,
    samples: usize,
) -> Result<SimpsonStudy>
where
    F: Fn(Float) -> Float,
    G: Fn(Float) -> Float,
{
    let values = sample_grid(f4, a, b, samples)?;
    let k4 = values.iter().map(|v| v.abs()).fold(0.0, Float::max);
    let k4_signed = values.iter().copied().fold(Float::NEG_INFINITY, Float::max);
    let bound = simpson_bound(a, b, k4, tol)?;
    let truncated_bound = simpson_bound_truncated(a, b, k4_signed, tol)?;
    debug!("simpson bound: K4 = {k4}, n = {bound} for tol = {tol:e} (signed K4 = {k4_signed}, n = {truncated_bound})");

    let approx_at_bound = simpson(&f, a, b, bound)?;
    let error_at_bound = (approx_at_bound - exact).abs();
    let least = least_simpson_n(&f, a, b, exact, tol, bound)?;
    debug!("simpson least n = {least:?}");

    Ok(SimpsonStudy {
        k4,
        k4_signed,
        bound,
        truncated_bound,
        approx_at_bound,
        error_at_bound,
        bound_meets_tol: error_at_bound < tol,
        least,
    })
}
