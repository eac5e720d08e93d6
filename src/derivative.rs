// src/derivative.rs

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::Error;
use crate::grid::{Grid, UniformGrid};
use crate::operators::upwind::FIRST_DIFFERENCE;
use crate::operators::{
    Composite, DiffusionStencil, LinearOperator, RobinBc, RobinExtension, Scale, UpwindStencil,
};

/// A derivative operator as returned by [`build_operator`].
///
/// Bare stencils expect the two ghost values in their input (`M + 2 → M`).
/// Robin variants synthesize them from the interior values (`M → M`).
#[derive(Debug, Clone, PartialEq)]
pub enum DerivativeOperator {
    Diffusion(DiffusionStencil),
    Upwind(UpwindStencil),
    RobinDiffusion(Composite<DiffusionStencil, RobinExtension>),
    RobinUpwind(Composite<UpwindStencil, RobinExtension>),
}

impl DerivativeOperator {
    /// Short name of the variant, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            DerivativeOperator::Diffusion(_) => "diffusion",
            DerivativeOperator::Upwind(_) => "upwind",
            DerivativeOperator::RobinDiffusion(_) => "robin diffusion",
            DerivativeOperator::RobinUpwind(_) => "robin upwind",
        }
    }

    /// Returns a copy of the operator multiplied by `factor`.
    ///
    /// The factor is absorbed into the upwind coefficient, so a negative
    /// factor also switches the upwind direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnscalableOperator`] for diffusion operators, which
    /// carry no coefficient.
    pub fn scale(&self, factor: f64) -> Result<Self, Error> {
        match self {
            DerivativeOperator::Upwind(op) => Ok(DerivativeOperator::Upwind(op.scale(factor))),
            DerivativeOperator::RobinUpwind(op) => {
                Ok(DerivativeOperator::RobinUpwind(op.scale(factor)))
            }
            DerivativeOperator::Diffusion(_) | DerivativeOperator::RobinDiffusion(_) => {
                Err(Error::UnscalableOperator { kind: self.kind() })
            }
        }
    }

    fn as_operator(&self) -> &dyn LinearOperator {
        match self {
            DerivativeOperator::Diffusion(op) => op,
            DerivativeOperator::Upwind(op) => op,
            DerivativeOperator::RobinDiffusion(op) => op,
            DerivativeOperator::RobinUpwind(op) => op,
        }
    }
}

impl LinearOperator for DerivativeOperator {
    fn shape(&self) -> (usize, usize) {
        self.as_operator().shape()
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.as_operator().apply(x)
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        self.as_operator().to_matrix()
    }
}

/// Builds a derivative operator on a grid.
///
/// Supported `(derivative_order, accuracy_order)` pairs are `(2, 2)`
/// (centered diffusion) and `(1, 1)` (upwind). With a boundary condition the
/// stencil is wrapped with a Robin extension.
///
/// # Arguments
///
/// * `grid` - Grid of `M + 2` points.
/// * `derivative_order` - Order of the derivative to approximate.
/// * `accuracy_order` - Order of accuracy of the stencil.
/// * `bc` - Optional Robin boundary condition.
///
/// # Errors
///
/// Returns [`Error::IrregularGrid`] for any irregular grid, before looking at
/// the orders; [`Error::UnsupportedDiscretization`] for other order pairs;
/// and any error from building the Robin extension.
pub fn build_operator(
    grid: &Grid,
    derivative_order: usize,
    accuracy_order: usize,
    bc: Option<&RobinBc>,
) -> Result<DerivativeOperator, Error> {
    match grid {
        Grid::Uniform(uniform) => build_uniform(uniform, derivative_order, accuracy_order, bc),
        Grid::Irregular(points) => build_irregular(points, derivative_order, accuracy_order, bc),
    }
}

/// Builds a derivative operator from explicit grid coordinates.
///
/// Equally spaced points are handled as by [`build_operator`].
///
/// # Errors
///
/// Returns [`Error::IrregularGrid`] if the points are not equally spaced,
/// plus every error [`build_operator`] can return.
pub fn build_operator_on_points(
    points: &[f64],
    derivative_order: usize,
    accuracy_order: usize,
    bc: Option<&RobinBc>,
) -> Result<DerivativeOperator, Error> {
    let grid = Grid::from_points(points.to_vec())?;
    build_operator(&grid, derivative_order, accuracy_order, bc)
}

fn build_uniform(
    grid: &UniformGrid,
    derivative_order: usize,
    accuracy_order: usize,
    bc: Option<&RobinBc>,
) -> Result<DerivativeOperator, Error> {
    let m = grid.interior();
    let dx = grid.dx();

    let op = match ((derivative_order, accuracy_order), bc) {
        ((2, 2), None) => DerivativeOperator::Diffusion(DiffusionStencil::new(m, dx)?),
        ((1, 1), None) => {
            DerivativeOperator::Upwind(UpwindStencil::new(FIRST_DIFFERENCE.to_vec(), m, dx)?)
        }
        ((2, 2), Some(bc)) => DerivativeOperator::RobinDiffusion(Composite::new(
            DiffusionStencil::new(m, dx)?,
            RobinExtension::new(m, dx, *bc)?,
        )?),
        ((1, 1), Some(bc)) => DerivativeOperator::RobinUpwind(Composite::new(
            UpwindStencil::new(FIRST_DIFFERENCE.to_vec(), m, dx)?,
            RobinExtension::new(m, dx, *bc)?,
        )?),
        _ => {
            return Err(Error::UnsupportedDiscretization {
                derivative_order,
                accuracy_order,
            })
        }
    };

    debug!(
        "built {} operator: interior = {}, dx = {}, shape = {:?}",
        op.kind(),
        m,
        dx,
        op.shape()
    );
    Ok(op)
}

// TODO: non-uniform stencils need per-point weights (e.g. Fornberg's algorithm).
fn build_irregular(
    points: &[f64],
    _derivative_order: usize,
    _accuracy_order: usize,
    _bc: Option<&RobinBc>,
) -> Result<DerivativeOperator, Error> {
    Err(Error::IrregularGrid {
        points: points.len(),
    })
}
