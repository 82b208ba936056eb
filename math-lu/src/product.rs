//! Dense matrix-matrix product
//!
//! Output rows are independent: each one reads both operands and writes only
//! its own slice of the result, so rows are distributed across rayon workers
//! without locks or shared accumulators.

use crate::matrix::Matrix;
use crate::parallel::{current_num_threads, is_parallel_available, parallel_chunks_mut};
use crate::traits::RealField;
use crate::{MatrixError, Result};

/// Products with at least this many output rows run in parallel
pub const PARALLEL_ROW_THRESHOLD: usize = 64;

/// Matrix-matrix product: C = A * B
///
/// Uses parallel processing when the `rayon` feature is enabled and the
/// result has enough rows to benefit from parallelization.
///
/// # Errors
///
/// Returns [`MatrixError::Nonconformable`] if the column count of `a` differs
/// from the row count of `b`.
pub fn product<T: RealField>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();
    if a_cols != b_rows {
        return Err(MatrixError::Nonconformable {
            left_cols: a_cols,
            right_rows: b_rows,
        });
    }

    if a_rows == 0 || b_cols == 0 {
        return Ok(Matrix::<T>::zeros((a_rows, b_cols)));
    }

    if is_parallel_available() && a_rows >= PARALLEL_ROW_THRESHOLD {
        log::debug!(
            "Matrix product {}x{} * {}x{} across {} threads",
            a_rows,
            a_cols,
            b_rows,
            b_cols,
            current_num_threads()
        );
        return Ok(product_parallel(a, b));
    }

    Ok(product_sequential(a, b))
}

/// Sequential matrix-matrix product
fn product_sequential<T: RealField>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::<T>::zeros((a.nrows(), b.ncols()));

    for (i, mut row) in result.rows_mut().into_iter().enumerate() {
        for (j, out) in row.iter_mut().enumerate() {
            *out = row_dot_column(a, b, i, j);
        }
    }

    result
}

/// Row-parallel matrix-matrix product
fn product_parallel<T: RealField>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (a_rows, b_cols) = (a.nrows(), b.ncols());
    let mut data = vec![T::zero(); a_rows * b_cols];

    parallel_chunks_mut(&mut data, b_cols, |i, row| {
        for (j, out) in row.iter_mut().enumerate() {
            *out = row_dot_column(a, b, i, j);
        }
    });

    Matrix::<T>::from_shape_vec((a_rows, b_cols), data).expect("one chunk per output row")
}

#[inline]
fn row_dot_column<T: RealField>(a: &Matrix<T>, b: &Matrix<T>, i: usize, j: usize) -> T {
    let mut sum = T::zero();
    for k in 0..a.ncols() {
        sum += a[[i, k]] * b[[k, j]];
    }
    sum
}
