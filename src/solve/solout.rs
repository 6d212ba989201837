//! Default SolOut that records step endpoints.

use crate::{
    core::solout::{ControlFlag, SolOut},
    Float,
};

/// Records the initial point and every step endpoint.
#[derive(Debug, Default)]
pub struct DefaultSolOut {
    t: Vec<Float>,
    y: Vec<Vec<Float>>,
}

impl DefaultSolOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_data(self) -> (Vec<Float>, Vec<Vec<Float>>) {
        (self.t, self.y)
    }
}

impl SolOut for DefaultSolOut {
    fn solout(&mut self, _xold: Float, x: Float, y: &[Float]) -> ControlFlag {
        self.t.push(x);
        self.y.push(y.to_vec());
        ControlFlag::Continue
    }
}
