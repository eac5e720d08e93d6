// src/utils/linear_algebra.rs

use nalgebra::{DMatrix, DVector};

/// Applies a fixed-width stencil to a vector without building a matrix.
///
/// Output entry `j` is `scale * sum_k weights[k] * x[j + offset + k]`.
///
/// # Arguments
///
/// * `x` - Input vector; must hold at least `rows + offset + weights.len() - 1` entries.
/// * `rows` - Number of output entries.
/// * `weights` - Stencil weights, applied to consecutive inputs with stride 1.
/// * `offset` - Column of the first weight in output row 0.
/// * `scale` - Factor applied to every weighted sum (e.g. `1/dx²`).
///
/// # Returns
///
/// * A vector of length `rows`.
pub fn apply_stencil(
    x: &DVector<f64>,
    rows: usize,
    weights: &[f64],
    offset: usize,
    scale: f64,
) -> DVector<f64> {
    DVector::from_fn(rows, |j, _| {
        let window = x.rows(j + offset, weights.len());
        let sum: f64 = weights.iter().zip(window.iter()).map(|(w, v)| w * v).sum();
        sum * scale
    })
}

/// Builds the banded matrix of a fixed-width stencil.
///
/// Row `j` holds `scale * weights[k]` at column `j + offset + k`, so the
/// product with a vector matches [`apply_stencil`] with the same arguments.
///
/// # Arguments
///
/// * `rows` - Number of matrix rows.
/// * `cols` - Number of matrix columns.
/// * `weights` - Stencil weights.
/// * `offset` - Column of the first weight in row 0.
/// * `scale` - Factor applied to every weight.
///
/// # Returns
///
/// * A `rows × cols` matrix with one band per stencil weight.
pub fn build_stencil_matrix(
    rows: usize,
    cols: usize,
    weights: &[f64],
    offset: usize,
    scale: f64,
) -> DMatrix<f64> {
    assert!(
        rows + offset + weights.len() <= cols + 1,
        "stencil does not fit in a {rows}x{cols} matrix"
    );
    let mut matrix = DMatrix::zeros(rows, cols);

    for j in 0..rows {
        for (k, w) in weights.iter().enumerate() {
            matrix[(j, j + offset + k)] = w * scale;
        }
    }

    matrix
}

/// Builds the matrix that pads an interior vector with one ghost value per side.
///
/// The result is `(M + 2) × M`: the middle `M` rows are the identity, the
/// first row combines the first two interior samples and the last row the
/// last two.
///
/// # Arguments
///
/// * `interior` - Number of interior points (`M`), at least 2.
/// * `left` - Weights on `x[0]` and `x[1]` for the left ghost value.
/// * `right` - Weights on `x[M-2]` and `x[M-1]` for the right ghost value.
///
/// # Returns
///
/// * The `(M + 2) × M` extension matrix.
pub fn build_extension_matrix(interior: usize, left: [f64; 2], right: [f64; 2]) -> DMatrix<f64> {
    assert!(interior >= 2, "extension needs at least two interior points");
    let n = interior;
    let mut extension = DMatrix::zeros(n + 2, n);

    extension[(0, 0)] = left[0];
    extension[(0, 1)] = left[1];
    for i in 0..n {
        extension[(i + 1, i)] = 1.0;
    }
    extension[(n + 1, n - 2)] = right[0];
    extension[(n + 1, n - 1)] = right[1];

    extension
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stencil_matrix_central() {
        let matrix = build_stencil_matrix(3, 5, &[1.0, -2.0, 1.0], 0, 1.0);

        let expected = DMatrix::from_row_slice(3, 5, &[
            1.0, -2.0,  1.0,  0.0, 0.0,
            0.0,  1.0, -2.0,  1.0, 0.0,
            0.0,  0.0,  1.0, -2.0, 1.0,
        ]);

        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_build_stencil_matrix_offset() {
        let matrix = build_stencil_matrix(2, 4, &[-1.0, 1.0], 1, 0.5);

        let expected = DMatrix::from_row_slice(2, 4, &[
            0.0, -0.5, 0.5, 0.0,
            0.0,  0.0, -0.5, 0.5,
        ]);

        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_apply_stencil_matches_matrix() {
        let x = DVector::from_vec(vec![0.0, 1.0, 4.0, 9.0, 16.0]);
        let applied = apply_stencil(&x, 3, &[1.0, -2.0, 1.0], 0, 1.0);
        let matrix = build_stencil_matrix(3, 5, &[1.0, -2.0, 1.0], 0, 1.0);

        assert_eq!(applied, DVector::from_vec(vec![2.0, 2.0, 2.0]));
        assert_eq!(matrix * x, applied);
    }

    #[test]
    fn test_build_stencil_matrix_without_weights() {
        let matrix = build_stencil_matrix(2, 2, &[], 0, 1.0);

        assert_eq!(matrix, DMatrix::zeros(2, 2));
    }

    #[test]
    fn test_build_extension_matrix() {
        let extension = build_extension_matrix(3, [0.5, 1.0], [1.0, -0.5]);

        let expected = DMatrix::from_row_slice(5, 3, &[
            0.5, 1.0,  0.0,
            1.0, 0.0,  0.0,
            0.0, 1.0,  0.0,
            0.0, 0.0,  1.0,
            0.0, 1.0, -0.5,
        ]);

        assert_eq!(extension, expected);
    }
}
