// src/operators/mod.rs

pub mod composite;
pub mod diffusion;
pub mod robin;
pub mod scalar;
pub mod upwind;

pub use composite::Composite;
pub use diffusion::DiffusionStencil;
pub use robin::{RobinBc, RobinExtension};
pub use scalar::{Scalar, Scale};
pub use upwind::{Direction, UpwindStencil};

use nalgebra::{DMatrix, DVector};

use crate::error::Error;

/// A linear map between vectors that can be applied directly or materialized.
///
/// Implementors guarantee that `to_matrix() * x` equals `apply(x)` up to
/// rounding for every `x` of length `cols()`.
pub trait LinearOperator {
    /// Output and input dimensions as `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// Applies the operator to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x.len() != self.cols()`.
    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error>;

    /// Builds the dense `rows × cols` matrix of the operator.
    fn to_matrix(&self) -> DMatrix<f64>;

    fn rows(&self) -> usize {
        self.shape().0
    }

    fn cols(&self) -> usize {
        self.shape().1
    }

    /// Checks that `x` has the length this operator consumes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a length mismatch.
    fn check_input(&self, x: &DVector<f64>) -> Result<(), Error> {
        let expected = self.cols();
        if x.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: x.len(),
            });
        }
        Ok(())
    }
}

impl<T: LinearOperator + ?Sized> LinearOperator for Box<T> {
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        (**self).apply(x)
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        (**self).to_matrix()
    }
}
