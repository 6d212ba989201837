//! Solution type for solve_ivp: recorded trajectory and basic stats.

use serde::Serialize;

use crate::{core::status::Status, Float};

/// Solution of solve_ivp: the trajectory at every step endpoint plus stats
#[derive(Debug, Clone, Serialize)]
pub struct IVPSolution {
    pub t: Vec<Float>,
    pub y: Vec<Vec<Float>>,
    pub nfev: usize,
    pub nstep: usize,
    pub status: Status,
}

impl IVPSolution {
    /// Iterate over stored sample pairs (t_i, y_i).
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            y_iter: self.y.iter(),
        }
    }

    /// Values of state component `i` along the trajectory, or `None` if the
    /// state has fewer than `i + 1` components.
    pub fn component(&self, i: usize) -> Option<Vec<Float>> {
        self.y.iter().map(|yi| yi.get(i).copied()).collect()
    }
}

/// Iterator over (t, y) pairs of stored samples in an IVPSolution.
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = (Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.y_iter.next()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }
}
