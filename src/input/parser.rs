// src/input/parser.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::input::OperatorDeck;

/// Parses an operator deck from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML input file.
///
/// # Returns
///
/// * `Ok(OperatorDeck)` if parsing is successful.
/// * `Err` if the file cannot be read or is not a valid deck.
pub fn parse_operator_deck<P: AsRef<Path>>(file_path: P) -> Result<OperatorDeck, Error> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    OperatorDeck::from_yaml_str(&contents)
}
