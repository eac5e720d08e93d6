// src/operators/diffusion.rs

use nalgebra::{DMatrix, DVector};

use crate::error::Error;
use crate::grid::check_spacing;
use crate::operators::LinearOperator;
use crate::utils::{apply_stencil, build_stencil_matrix};

/// Centered second-difference weights.
const CENTRAL_SECOND: [f64; 3] = [1.0, -2.0, 1.0];

/// Second-order accurate second-derivative stencil on `M` interior points.
///
/// Maps a vector of `M + 2` values (ghost points included) to the `M`
/// interior second differences `(x[j] - 2 x[j+1] + x[j+2]) / dx²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionStencil {
    interior: usize,
    dx: f64,
}

impl DiffusionStencil {
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpacing`] if `dx` is not finite and positive.
    pub fn new(interior: usize, dx: f64) -> Result<Self, Error> {
        check_spacing(dx)?;
        Ok(DiffusionStencil { interior, dx })
    }

    pub fn interior(&self) -> usize {
        self.interior
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    fn inv_dx2(&self) -> f64 {
        1.0 / (self.dx * self.dx)
    }
}

impl LinearOperator for DiffusionStencil {
    fn shape(&self) -> (usize, usize) {
        (self.interior, self.interior + 2)
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.check_input(x)?;
        Ok(apply_stencil(x, self.interior, &CENTRAL_SECOND, 0, self.inv_dx2()))
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        let (rows, cols) = self.shape();
        build_stencil_matrix(rows, cols, &CENTRAL_SECOND, 0, self.inv_dx2())
    }
}
