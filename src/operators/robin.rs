// src/operators/robin.rs

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Side};
use crate::grid::check_spacing;
use crate::operators::LinearOperator;
use crate::utils::build_extension_matrix;

/// Robin boundary coefficients for both ends of the domain.
///
/// `al`/`ar` weight the derivative and `bl`/`br` the value on the left and
/// right boundary respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobinBc {
    pub al: f64,
    pub bl: f64,
    pub ar: f64,
    pub br: f64,
}

impl RobinBc {
    pub fn new(al: f64, bl: f64, ar: f64, br: f64) -> Self {
        RobinBc { al, bl, ar, br }
    }

    /// Checks that both value coefficients can be divided by.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBoundary`] if `bl` or `br` is zero or not finite.
    pub fn validate(&self) -> Result<(), Error> {
        for (side, coefficient) in [(Side::Left, self.bl), (Side::Right, self.br)] {
            if coefficient == 0.0 || !coefficient.is_finite() {
                return Err(Error::DegenerateBoundary { side, coefficient });
            }
        }
        Ok(())
    }
}

/// Pads an interior vector with one ghost value per side from a Robin condition.
///
/// Maps `M` interior values to `M + 2` values; ghost values are built from
/// the two samples nearest each boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobinExtension {
    interior: usize,
    dx: f64,
    bc: RobinBc,
}

impl RobinExtension {
    /// # Errors
    ///
    /// Returns an error if the boundary coefficients are degenerate, `dx` is
    /// not finite and positive, or there are fewer than two interior points.
    pub fn new(interior: usize, dx: f64, bc: RobinBc) -> Result<Self, Error> {
        bc.validate()?;
        check_spacing(dx)?;
        if interior < 2 {
            return Err(Error::GridTooSmall {
                points: interior + 2,
                minimum: 4,
            });
        }
        Ok(RobinExtension { interior, dx, bc })
    }

    pub fn interior(&self) -> usize {
        self.interior
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn bc(&self) -> RobinBc {
        self.bc
    }

    fn left_weight(&self) -> f64 {
        2.0 * self.bc.al * self.dx / self.bc.bl
    }

    fn right_weight(&self) -> f64 {
        -2.0 * self.bc.ar * self.dx / self.bc.br
    }
}

impl LinearOperator for RobinExtension {
    fn shape(&self) -> (usize, usize) {
        (self.interior + 2, self.interior)
    }

    fn apply(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.check_input(x)?;
        let n = self.interior;

        let left = x[1] + self.left_weight() * x[0];
        let right = x[n - 2] + self.right_weight() * x[n - 1];

        let mut extended = DVector::zeros(n + 2);
        extended[0] = left;
        extended.rows_mut(1, n).copy_from(x);
        extended[n + 1] = right;
        Ok(extended)
    }

    fn to_matrix(&self) -> DMatrix<f64> {
        build_extension_matrix(
            self.interior,
            [self.left_weight(), 1.0],
            [1.0, self.right_weight()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reflecting_extension() {
        let qb = RobinExtension::new(3, 1.0, RobinBc::new(0.0, 1.0, 0.0, 1.0)).unwrap();
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let y = qb.apply(&x).unwrap();

        assert_eq!(y, DVector::from_vec(vec![2.0, 1.0, 2.0, 3.0, 2.0]));
    }

    #[test]
    fn test_ghost_values() {
        let qb = RobinExtension::new(4, 0.5, RobinBc::new(1.0, 2.0, 3.0, -1.5)).unwrap();
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);

        let y = qb.apply(&x).unwrap();

        // left: x[1] + 2*1*0.5/2 * x[0] = 2 + 0.5
        assert_relative_eq!(y[0], 2.5);
        // right: x[2] - 2*3*0.5/(-1.5) * x[3] = 3 + 8
        assert_relative_eq!(y[5], 11.0);
        assert_eq!(y.rows(1, 4), x.rows(0, 4));
    }

    #[test]
    fn test_matrix_matches_apply() {
        let qb = RobinExtension::new(5, 0.2, RobinBc::new(0.7, 1.3, -0.4, 2.0)).unwrap();
        let x = DVector::from_fn(5, |i, _| 1.0 / (1.0 + i as f64));

        assert_eq!(qb.shape(), (7, 5));
        assert_relative_eq!(qb.apply(&x).unwrap(), qb.to_matrix() * &x, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_coefficients() {
        let left = RobinExtension::new(3, 1.0, RobinBc::new(1.0, 0.0, 0.0, 1.0));
        assert!(matches!(
            left,
            Err(Error::DegenerateBoundary { side: Side::Left, .. })
        ));

        let right = RobinExtension::new(3, 1.0, RobinBc::new(0.0, 1.0, 1.0, 0.0));
        assert!(matches!(
            right,
            Err(Error::DegenerateBoundary { side: Side::Right, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_spacing() {
        let qb = RobinExtension::new(3, 0.0, RobinBc::new(0.0, 1.0, 0.0, 1.0));
        assert!(matches!(qb, Err(Error::InvalidSpacing { .. })));
    }

    #[test]
    fn test_needs_two_interior_points() {
        let qb = RobinExtension::new(1, 1.0, RobinBc::new(0.0, 1.0, 0.0, 1.0));
        assert!(matches!(qb, Err(Error::GridTooSmall { points: 3, minimum: 4 })));
    }

    #[test]
    fn test_dimension_mismatch() {
        let qb = RobinExtension::new(3, 1.0, RobinBc::new(0.0, 1.0, 0.0, 1.0)).unwrap();
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!(matches!(
            qb.apply(&x),
            Err(Error::DimensionMismatch { expected: 3, found: 5 })
        ));
    }
}
