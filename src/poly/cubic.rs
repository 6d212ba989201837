//! Cubic polynomials and their discriminant.

use serde::Serialize;

use crate::Float;

/// Nature of the roots of a real cubic, read off the sign of its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RootNature {
    /// Discriminant > 0
    ThreeDistinctReal,
    /// Discriminant == 0: a double or triple root, all roots real
    MultipleRoot,
    /// Discriminant < 0
    OneRealTwoComplex,
}

/// Real cubic `a x^3 + b x^2 + c x + d`.
///
/// Coefficients are stored in ascending powers, `[d, c, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cubic {
    coeffs: [Float; 4],
}

impl Cubic {
    pub fn new(a: Float, b: Float, c: Float, d: Float) -> Self {
        Self {
            coeffs: [d, c, b, a],
        }
    }

    /// From coefficients in ascending powers: `[d, c, b, a]`.
    pub fn from_ascending(coeffs: [Float; 4]) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[Float; 4] {
        &self.coeffs
    }

    /// Evaluate at `x` with Horner's rule.
    pub fn eval(&self, x: Float) -> Float {
        self.coeffs.iter().rev().fold(0.0, |acc, &k| acc * x + k)
    }

    /// `b^2 c^2 - 4 a c^3 - 4 b^3 d - 27 a^2 d^2 + 18 a b c d`
    pub fn discriminant(&self) -> Float {
        discriminant(&self.coeffs)
    }

    /// True when the cubic has three distinct real roots.
    pub fn has_three_real_roots(&self) -> bool {
        self.discriminant() > 0.0
    }

    pub fn nature(&self) -> RootNature {
        let disc = self.discriminant();
        if disc > 0.0 {
            RootNature::ThreeDistinctReal
        } else if disc < 0.0 {
            RootNature::OneRealTwoComplex
        } else {
            RootNature::MultipleRoot
        }
    }
}

/// Discriminant of the cubic with ascending coefficients `[d, c, b, a]`.
pub fn discriminant(p: &[Float; 4]) -> Float {
    let [d, c, b, a] = *p;
    c * c * (b * b - 4.0 * a * c) - d * (4.0 * b * b * b + 27.0 * a * a * d - 18.0 * a * b * c)
}
