// src/operators/composite.rs

use nalgebra::{DMatrix, DVector};

use crate::error::Error;
use crate::operators::{LinearOperator, Scale};

/// An interior operator applied after a boundary extension: `L ∘ QB`.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<L, Q> {
    interior_op: L,
    extension: Q,
}

impl<L: LinearOperator, Q: LinearOperator> Composite<L, Q> {
    /// Composes `interior_op` with `extension`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the extension's output length
    /// differs from the interior operator's input length.
    pub fn new(interior_op: L, extension: Q) -> Result<Self, Error> {
        if interior_op.cols() != extension.rows() {
            return Err(Error::DimensionMismatch {
                expected: interior_op.cols(),
                found: extension.rows(),
            });
        }
        Ok(Composite {
            interior_op,
            extension,
        })
    }
}

impl<L, Q> Composite<L, Q> {
    pub fn interior_op(&self) -> &L {
        &self.interior_op
    }

    pub fn extension(&self) -> &Q {
        &self.extension
    }
}

impl<L: LinearOperator, Q: LinearOperator> LinearOperator for Composite<L, Q> {
    fn shape(&self) -> (usize, usize) {
        (self.interior_op.rows(), self.extension.cols())
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        let extended = self.extension.apply(x)?;
        self.interior_op.apply(&extended)
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        self.interior_op.to_matrix() * self.extension.to_matrix()
    }
}

/// Scaling distributes onto the interior operator; the extension is shared as is.
impl<L: Scale, Q: Clone> Scale for Composite<L, Q> {
    fn scale(&self, factor: f64) -> Self {
        Composite {
            interior_op: self.interior_op.scale(factor),
            extension: self.extension.clone(),
        }
    }
}
