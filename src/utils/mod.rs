// src/utils/mod.rs

pub mod linear_algebra;

// Re-export specific functions for easier access
pub use linear_algebra::{apply_stencil, build_extension_matrix, build_stencil_matrix};
