// src/operators/scalar.rs

use std::ops::Mul;

/// A multiplicative coefficient attached to an operator.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scalar(pub f64);

impl Scalar {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar(1.0)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar(value)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

/// Operators that absorb a scalar factor into a new value of the same type.
///
/// `op.scale(a).apply(x)` must equal `a * op.apply(x)`.
pub trait Scale: Sized {
    fn scale(&self, factor: f64) -> Self;
}
