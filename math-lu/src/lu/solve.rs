//! Forward and backward substitution on a packed LU buffer

use super::decompose::{LuDecomposition, decompose};
use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::Result;
use ndarray::Array1;

/// Solve `(L U) x = b` for a packed LU buffer
///
/// No pivoting happens here: `b` must already be permuted into the row order
/// of `lu`. L has an implicit unit diagonal.
///
/// # Panics
///
/// Panics if `b.len()` differs from the dimension of `lu`.
pub fn substitute<T: RealField>(lu: &Matrix<T>, b: &Array1<T>) -> Array1<T> {
    let n = lu.nrows();
    assert_eq!(b.len(), n, "Right-hand side length must match the LU buffer");

    let mut x = b.clone();
    if n == 0 {
        return x;
    }

    // Forward substitution: L y = b
    for i in 1..n {
        let mut sum = x[i];
        for j in 0..i {
            sum -= lu[[i, j]] * x[j];
        }
        x[i] = sum;
    }

    // Backward substitution: U x = y
    x[n - 1] /= lu[[n - 1, n - 1]];
    for i in (0..n - 1).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum -= lu[[i, j]] * x[j];
        }
        x[i] = sum / lu[[i, i]];
    }

    x
}

impl<T: RealField> LuDecomposition<T> {
    /// Solve `A x = b` using the pre-computed factorization
    ///
    /// # Panics
    ///
    /// Panics if `b.len()` differs from the matrix dimension.
    pub fn solve(&self, b: &Array1<T>) -> Array1<T> {
        assert_eq!(b.len(), self.dim(), "Right-hand side length must match the matrix");
        let permuted = Array1::from_shape_fn(self.dim(), |i| b[self.perm[i]]);
        substitute(&self.lu, &permuted)
    }
}

/// Solve `A x = b` using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(a: &Matrix<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let factorization = decompose(a)?;
    Ok(factorization.solve(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn test_substitute_triangular() {
        // L = [[1, 0], [0.5, 1]], U = [[2, 1], [0, 3]]
        let lu = array![[2.0_f64, 1.0], [0.5, 3.0]];
        // L U = [[2, 1], [1, 3.5]]; with x = [1, 2] the product is [4, 8]
        let b = array![4.0_f64, 8.0];

        let x = substitute(&lu, &b);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_substitute_empty() {
        let lu = Matrix::<f64>::zeros((0, 0));
        let x = substitute(&lu, &Array1::zeros(0));
        assert!(x.is_empty());
    }

    #[test]
    fn test_lu_solve_real() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0],];

        let b = array![1.0_f64, 2.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        // Verify: Ax = b
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_identity() {
        let n = 5;
        let a = Array1::from_elem(n, 1.0_f64);
        let a = Array2::from_diag(&a);
        let b = Array1::from_iter((1..=n).map(|i| i as f64));

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        for i in 0..n {
            assert_relative_eq!(x[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0],]; // Singular matrix

        let b = array![1.0_f64, 2.0];

        let result = lu_solve(&a, &b);
        assert!(result.is_err());
    }

    #[test]
    fn test_factorize_once_solve_many() {
        let a = array![[0.0_f64, 1.0, 2.0], [1.0, 3.0, 1.0], [4.0, 1.0, 2.0],];

        let factorization = decompose(&a).expect("Factorization should succeed");
        assert_ne!(factorization.perm, vec![0, 1, 2]);

        for b in [array![1.0_f64, 2.0, 3.0], array![4.0_f64, 5.0, 6.0]] {
            let x = factorization.solve(&b);
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }
}
