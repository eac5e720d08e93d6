// src/operators/upwind.rs

use std::ops::Mul;

use nalgebra::{DMatrix, DVector};

use crate::error::Error;
use crate::grid::check_spacing;
use crate::operators::{LinearOperator, Scalar, Scale};
use crate::utils::{apply_stencil, build_stencil_matrix};

/// Two-point first-difference weights.
pub const FIRST_DIFFERENCE: [f64; 2] = [-1.0, 1.0];

/// Which neighbour a first-derivative stencil reaches towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Uses the point and its left neighbour.
    Backward,
    /// Uses the point and its right neighbour.
    Forward,
}

impl Direction {
    /// Picks the upwind direction for an advection coefficient.
    ///
    /// Positive coefficients look backward. Zero and negative coefficients
    /// look forward.
    pub fn from_coeff(coeff: f64) -> Self {
        if coeff > 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Column of the first stencil weight in output row 0.
    fn offset(self) -> usize {
        match self {
            Direction::Backward => 0,
            Direction::Forward => 1,
        }
    }
}

/// First-order upwind first-derivative stencil on `M` interior points.
///
/// The stencil direction follows the sign of `coeff` and is fixed when the
/// operator is built or scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct UpwindStencil {
    coefficients: Vec<f64>,
    interior: usize,
    dx: f64,
    coeff: Scalar,
    direction: Direction,
}

impl UpwindStencil {
    /// Creates an upwind stencil with unit coefficient (backward differences).
    ///
    /// # Errors
    ///
    /// Returns an error if `coefficients` is empty or `dx` is not finite and positive.
    pub fn new(coefficients: Vec<f64>, interior: usize, dx: f64) -> Result<Self, Error> {
        Self::with_coeff(coefficients, interior, dx, Scalar::default())
    }

    /// # Errors
    ///
    /// Same as [`UpwindStencil::new`].
    pub fn with_coeff(
        coefficients: Vec<f64>,
        interior: usize,
        dx: f64,
        coeff: Scalar,
    ) -> Result<Self, Error> {
        if coefficients.is_empty() {
            return Err(Error::EmptyStencil);
        }
        check_spacing(dx)?;
        Ok(UpwindStencil {
            coefficients,
            interior,
            dx,
            coeff,
            direction: Direction::from_coeff(coeff.value()),
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn interior(&self) -> usize {
        self.interior
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn coeff(&self) -> Scalar {
        self.coeff
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn weight_scale(&self) -> f64 {
        self.coeff.value() / self.dx
    }
}

impl LinearOperator for UpwindStencil {
    fn shape(&self) -> (usize, usize) {
        (self.interior, self.interior + self.coefficients.len())
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.check_input(x)?;
        Ok(apply_stencil(
            x,
            self.interior,
            &self.coefficients,
            self.direction.offset(),
            self.weight_scale(),
        ))
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        let (rows, cols) = self.shape();
        build_stencil_matrix(
            rows,
            cols,
            &self.coefficients,
            self.direction.offset(),
            self.weight_scale(),
        )
    }
}

impl Scale for UpwindStencil {
    fn scale(&self, factor: f64) -> Self {
        let coeff = Scalar(factor) * self.coeff;
        UpwindStencil {
            coefficients: self.coefficients.clone(),
            interior: self.interior,
            dx: self.dx,
            coeff,
            direction: Direction::from_coeff(coeff.value()),
        }
    }
}

impl Mul<&UpwindStencil> for Scalar {
    type Output = UpwindStencil;

    fn mul(self, rhs: &UpwindStencil) -> UpwindStencil {
        rhs.scale(self.value())
    }
}

impl Mul<UpwindStencil> for Scalar {
    type Output = UpwindStencil;

    fn mul(self, rhs: UpwindStencil) -> UpwindStencil {
        rhs.scale(self.value())
    }
}

impl Mul<UpwindStencil> for f64 {
    type Output = UpwindStencil;

    fn mul(self, rhs: UpwindStencil) -> UpwindStencil {
        rhs.scale(self)
    }
}
