use std::fmt;

use serde::Serialize;

use crate::{
    poly::{Cubic, RootNature},
    Float,
};

#[derive(Debug, Clone)]
pub struct CubicConfig {
    /// Ascending coefficients `[d, c, b, a]`.
    pub coeffs: [Float; 4],
}

impl Default for CubicConfig {
    fn default() -> Self {
        // x^3 - x + 1
        Self {
            coeffs: [1.0, -1.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CubicReport {
    pub coeffs: [Float; 4],
    pub discriminant: Float,
    pub three_real_roots: bool,
    pub nature: RootNature,
}

pub fn cubic_roots(config: &CubicConfig) -> CubicReport {
    let p = Cubic::from_ascending(config.coeffs);
    CubicReport {
        coeffs: *p.coeffs(),
        discriminant: p.discriminant(),
        three_real_roots: p.has_three_real_roots(),
        nature: p.nature(),
    }
}

impl fmt::Display for CubicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, c, b, a] = self.coeffs;
        writeln!(f, "p(x) = {a} x^3 + {b} x^2 + {c} x + {d}")?;
        writeln!(f, "discriminant = {}", self.discriminant)?;
        write!(f, "three distinct real roots: {}", self.three_real_roots)
    }
}
