// src/input/input_deck.rs
use serde::Deserialize;

use crate::derivative::{build_operator, DerivativeOperator};
use crate::error::Error;
use crate::grid::{Grid, UniformGrid};
use crate::operators::RobinBc;

/// Grid description, either as a range or as explicit coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GridSettings {
    Range {
        start: f64,    // First boundary point
        stop: f64,     // Last boundary point
        points: usize, // Number of points, boundaries included
    },
    Points {
        coordinates: Vec<f64>,
    },
}

impl GridSettings {
    /// Builds the grid described by these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has too few points or a bad spacing.
    pub fn to_grid(&self) -> Result<Grid, Error> {
        match self {
            GridSettings::Range { start, stop, points } => {
                Ok(UniformGrid::from_range(*start, *stop, *points)?.into())
            }
            GridSettings::Points { coordinates } => Grid::from_points(coordinates.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperatorDeck {
    pub grid: GridSettings,
    pub derivative_order: usize,
    pub accuracy_order: usize,
    #[serde(default)]
    pub boundary: Option<RobinBc>,
}

impl OperatorDeck {
    /// Parses a deck from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deck`] if the text is not a valid deck.
    pub fn from_yaml_str(contents: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Builds the operator the deck describes.
    ///
    /// # Errors
    ///
    /// Returns any grid or factory error.
    pub fn build(&self) -> Result<DerivativeOperator, Error> {
        let grid = self.grid.to_grid()?;
        build_operator(
            &grid,
            self.derivative_order,
            self.accuracy_order,
            self.boundary.as_ref(),
        )
    }
}
