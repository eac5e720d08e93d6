// src/error.rs

use thiserror::Error;

/// Which end of the domain a boundary coefficient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised while building or applying discretization operators.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "no stencil for derivative order {derivative_order} with accuracy order {accuracy_order}"
    )]
    UnsupportedDiscretization {
        derivative_order: usize,
        accuracy_order: usize,
    },

    #[error("irregular grids are not supported ({points} points)")]
    IrregularGrid { points: usize },

    #[error("dimension mismatch: expected input of length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("degenerate {side} Robin condition: value coefficient is {coefficient}")]
    DegenerateBoundary { side: Side, coefficient: f64 },

    #[error("grid has {points} points, at least {minimum} are required")]
    GridTooSmall { points: usize, minimum: usize },

    #[error("grid spacing must be finite and positive, got {dx}")]
    InvalidSpacing { dx: f64 },

    #[error("stencil needs at least one weight")]
    EmptyStencil,

    #[error("{kind} operator has no scalar coefficient to scale")]
    UnscalableOperator { kind: &'static str },

    #[error("failed to read operator deck")]
    Io(#[from] std::io::Error),

    #[error("failed to parse operator deck")]
    Deck(#[from] serde_yaml::Error),
}
