// src/grid.rs

use crate::error::Error;

/// Relative tolerance used when deciding whether a point list is equally spaced.
const UNIFORM_RTOL: f64 = 1e-10;

/// Checks that a grid spacing is finite and positive.
///
/// # Errors
///
/// Returns [`Error::InvalidSpacing`] otherwise.
pub(crate) fn check_spacing(dx: f64) -> Result<(), Error> {
    if !dx.is_finite() || dx <= 0.0 {
        return Err(Error::InvalidSpacing { dx });
    }
    Ok(())
}

/// An equally spaced 1D grid of `interior + 2` points.
///
/// Stencil arithmetic only needs the spacing and the interior count; the
/// origin is kept so the coordinates can be regenerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    start: f64,
    dx: f64,
    interior: usize,
}

impl UniformGrid {
    /// Creates a grid with spacing `dx` and `interior` interior points, starting at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` is not finite and positive or `interior` is zero.
    pub fn new(dx: f64, interior: usize) -> Result<Self, Error> {
        Self::with_origin(0.0, dx, interior)
    }

    /// Creates a grid covering `[start, stop]` with `points` points, boundaries included.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are requested or the
    /// resulting spacing is not finite and positive.
    pub fn from_range(start: f64, stop: f64, points: usize) -> Result<Self, Error> {
        if points < 3 {
            return Err(Error::GridTooSmall { points, minimum: 3 });
        }
        let dx = (stop - start) / (points - 1) as f64;
        Self::with_origin(start, dx, points - 2)
    }

    fn with_origin(start: f64, dx: f64, interior: usize) -> Result<Self, Error> {
        check_spacing(dx)?;
        if interior == 0 {
            return Err(Error::GridTooSmall {
                points: interior + 2,
                minimum: 3,
            });
        }
        Ok(UniformGrid { start, dx, interior })
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of interior points (`M`).
    pub fn interior(&self) -> usize {
        self.interior
    }

    /// Total number of points, boundaries included.
    pub fn len(&self) -> usize {
        self.interior + 2
    }

    /// Coordinates of every grid point, boundaries included.
    pub fn points(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| self.start + k as f64 * self.dx)
            .collect()
    }
}

/// A 1D grid as handed to the operator factory.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    Uniform(UniformGrid),
    /// Arbitrary point coordinates. No operator can be built on these yet.
    Irregular(Vec<f64>),
}

impl Grid {
    /// Classifies a list of coordinates as uniform or irregular.
    ///
    /// Points count as uniform when every consecutive spacing matches the
    /// mean spacing to a relative tolerance of `1e-10`, widened by the
    /// rounding error of the largest coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given, or if the
    /// points are uniform but not strictly increasing.
    pub fn from_points(points: Vec<f64>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::GridTooSmall {
                points: points.len(),
                minimum: 3,
            });
        }

        let n = points.len();
        let dx = (points[n - 1] - points[0]) / (n - 1) as f64;
        let magnitude = points.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
        let tol = UNIFORM_RTOL * dx.abs() + 4.0 * f64::EPSILON * magnitude;
        let uniform = points
            .windows(2)
            .all(|w| ((w[1] - w[0]) - dx).abs() <= tol);

        if uniform {
            let grid = UniformGrid::with_origin(points[0], dx, points.len() - 2)?;
            Ok(Grid::Uniform(grid))
        } else {
            Ok(Grid::Irregular(points))
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Grid::Uniform(grid) => grid.len(),
            Grid::Irregular(points) => points.len(),
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Grid::Uniform(_))
    }
}

impl From<UniformGrid> for Grid {
    fn from(grid: UniformGrid) -> Self {
        Grid::Uniform(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_range() {
        let grid = UniformGrid::from_range(0.0, 1.0, 11).unwrap();
        assert_eq!(grid.interior(), 9);
        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid.dx(), 0.1);

        let points = grid.points();
        assert_relative_eq!(points[0], 0.0);
        assert_relative_eq!(points[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            UniformGrid::from_range(0.0, 1.0, 2),
            Err(Error::GridTooSmall { points: 2, minimum: 3 })
        ));
        assert!(matches!(
            UniformGrid::new(1.0, 0),
            Err(Error::GridTooSmall { .. })
        ));
    }

    #[test]
    fn test_bad_spacing() {
        assert!(matches!(
            UniformGrid::new(0.0, 4),
            Err(Error::InvalidSpacing { .. })
        ));
        assert!(matches!(
            UniformGrid::from_range(1.0, 0.0, 5),
            Err(Error::InvalidSpacing { .. })
        ));
        assert!(matches!(
            UniformGrid::new(f64::NAN, 4),
            Err(Error::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn test_from_points_uniform() {
        let grid = Grid::from_points(vec![1.0, 1.5, 2.0, 2.5]).unwrap();
        match grid {
            Grid::Uniform(g) => {
                assert_eq!(g.interior(), 2);
                assert_relative_eq!(g.dx(), 0.5);
                assert_eq!(g.points(), vec![1.0, 1.5, 2.0, 2.5]);
            }
            Grid::Irregular(_) => panic!("expected a uniform grid"),
        }
    }

    #[test]
    fn test_from_points_irregular() {
        let grid = Grid::from_points(vec![0.0, 0.1, 0.3, 0.6]).unwrap();
        assert!(!grid.is_uniform());
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_from_points_far_from_origin() {
        let points = UniformGrid::from_range(1.0e6, 1.0e6 + 1.0, 11).unwrap().points();

        let grid = Grid::from_points(points).unwrap();

        match grid {
            Grid::Uniform(g) => {
                assert_eq!(g.interior(), 9);
                assert_relative_eq!(g.dx(), 0.1, epsilon = 1e-9);
            }
            Grid::Irregular(_) => panic!("expected a uniform grid"),
        }
    }

    #[test]
    fn test_from_points_near_tolerance() {
        let uniform = Grid::from_points(vec![0.0, 1.0, 2.0 + 1e-12, 3.0]).unwrap();
        assert!(uniform.is_uniform());

        let perturbed = Grid::from_points(vec![0.0, 1.0, 2.0 + 1e-8, 3.0]).unwrap();
        assert!(!perturbed.is_uniform());
    }
}
