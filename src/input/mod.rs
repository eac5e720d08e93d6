// src/input/mod.rs

pub mod input_deck;
pub mod parser;

pub use input_deck::{GridSettings, OperatorDeck};
pub use parser::parse_operator_deck;
