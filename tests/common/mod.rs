#![allow(dead_code)]

use numlab::prelude::*;

/// Simple harmonic oscillator: y0' = y1, y1' = -y0
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = y[1];
        dydx[1] = -y[0];
    }
}

/// Exponential decay: y' = -y
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = -y[0];
    }
}

pub fn opts(method: Method, h: f64) -> Options {
    Options::builder().method(method).h(h).build()
}
