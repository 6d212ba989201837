//! User defined callback hook executed after each step.

use crate::Float;

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed once at the initial point and after every step.
///
/// On the initial call `xold == x`. Afterwards `xold` is the left end of the
/// step just taken and `x` the new abscissa, with `y` the solution at `x`.
///
/// # Example
///
/// ```
/// use numlab::prelude::*;
///
/// struct Printer;
/// impl SolOut for Printer {
///     fn solout(&mut self, _xold: f64, x: f64, y: &[f64]) -> ControlFlag {
///         println!("x = {:.4}, y = {:?}", x, y);
///         ControlFlag::Continue
///     }
/// }
/// ```
pub trait SolOut {
    fn solout(&mut self, xold: Float, x: Float, y: &[Float]) -> ControlFlag;
}

/// No-op [`SolOut`] for callers that pass `None` and need a concrete type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySolOut;

impl SolOut for DummySolOut {
    fn solout(&mut self, _xold: Float, _x: Float, _y: &[Float]) -> ControlFlag {
        ControlFlag::Continue
    }
}
