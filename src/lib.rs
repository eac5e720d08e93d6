// src/lib.rs

//! Matrix-free finite-difference operators for 1D problems on uniform grids.
//!
//! [`build_operator`] is the entry point: it picks a stencil from the
//! derivative and accuracy orders and, given a [`RobinBc`], composes it with
//! a boundary extension. Every operator can be applied to a vector or turned
//! into a dense matrix through [`LinearOperator`].

pub mod derivative;
pub mod error;
pub mod grid;
pub mod input;
pub mod operators;
pub mod utils;

pub use derivative::{build_operator, build_operator_on_points, DerivativeOperator};
pub use error::{Error, Side};
pub use grid::{Grid, UniformGrid};
pub use input::{parse_operator_deck, OperatorDeck};
pub use operators::{
    Composite, DiffusionStencil, Direction, LinearOperator, RobinBc, RobinExtension, Scalar,
    Scale, UpwindStencil,
};
