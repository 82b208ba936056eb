//! Dense matrix storage and construction helpers
//!
//! Matrices are plain `ndarray::Array2` values in standard (row-major) layout.
//! The helpers here create, compare and format them; they carry no state.

use crate::traits::RealField;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Dense row-major matrix
pub type Matrix<T = f64> = Array2<T>;

/// Create a `rows` x `cols` matrix filled with zeros
pub fn create<T: RealField>(rows: usize, cols: usize) -> Matrix<T> {
    Array2::zeros((rows, cols))
}

/// Create the `n` x `n` identity matrix
pub fn identity<T: RealField>(n: usize) -> Matrix<T> {
    Array2::eye(n)
}

/// Create a matrix with entries drawn uniformly from `[min_val, max_val)`
///
/// The same `seed` always produces the same matrix.
///
/// # Panics
///
/// Panics if `min_val >= max_val`.
pub fn random<T: RealField>(
    rows: usize,
    cols: usize,
    min_val: f64,
    max_val: f64,
    seed: u64,
) -> Matrix<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((rows, cols), || {
        T::from_real(rng.random_range(min_val..max_val))
    })
}

/// True if both matrices have the same shape and every pair of entries
/// differs by at most `epsilon`
pub fn approx_eq<T: RealField>(a: &Matrix<T>, b: &Matrix<T>, epsilon: T) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (*x - *y).norm() <= epsilon)
}

/// Fixed-width text rendering of a matrix, see [`display`]
pub struct MatrixDisplay<'a, T: RealField>(&'a Matrix<T>);

impl<T: RealField> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            for value in row.iter() {
                write!(f, "{:>8.3} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a matrix one row per line, each entry with three decimals
/// right-aligned in eight columns
pub fn display<T: RealField>(matrix: &Matrix<T>) -> MatrixDisplay<'_, T> {
    MatrixDisplay(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_create_is_zeroed() {
        let m: Matrix = create(2, 3);
        assert_eq!(m.dim(), (2, 3));
        assert!(m.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_identity() {
        let m: Matrix = identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[[i, j]], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_random_is_seeded_and_bounded() {
        let a: Matrix = random(4, 5, -2.0, 3.0, 7);
        let b: Matrix = random(4, 5, -2.0, 3.0, 7);
        let c: Matrix = random(4, 5, -2.0, 3.0, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|&v| (-2.0..3.0).contains(&v)));
    }

    #[test]
    fn test_approx_eq() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let b = array![[1.0_f64, 2.0 + 1e-12], [3.0, 4.0]];
        assert!(approx_eq(&a, &b, 1e-9));
        assert!(!approx_eq(&a, &b, 1e-13));

        let c = array![[1.0_f64, 2.0, 0.0], [3.0, 4.0, 0.0]];
        assert!(!approx_eq(&a, &c, 1.0));
    }

    #[test]
    fn test_display() {
        let m = array![[1.0_f64, -2.5], [1234.5678, 0.0]];
        let text = display(&m).to_string();
        assert_eq!(text, "   1.000   -2.500 \n1234.568    0.000 \n");
    }
}
