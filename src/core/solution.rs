//! A struct representing the outputted result of a numerical integrator.

use crate::{core::status::Status, Float};

#[derive(Clone, Debug)]
pub struct Solution {
    pub x: Float,
    pub y: Vec<Float>,
    pub h: Float,
    pub nfev: usize,
    pub nstep: usize,
    pub status: Status,
}

impl Solution {
    pub fn new(x: Float, y: &[Float], h: Float, nfev: usize, nstep: usize, status: Status) -> Self {
        Self {
            x,
            y: y.to_vec(),
            h,
            nfev,
            nstep,
            status,
        }
    }
}
