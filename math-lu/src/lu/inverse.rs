//! Matrix inverse from an LU factorization

use super::decompose::{LuConfig, LuDecomposition, decompose_with};
use super::solve::substitute;
use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::Result;
use ndarray::Array1;

impl<T: RealField> LuDecomposition<T> {
    /// Inverse of the factored matrix
    ///
    /// Column `i` solves `L U x = P e_i`; columns are assembled in order.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.dim();
        let mut result = Matrix::<T>::zeros((n, n));

        for i in 0..n {
            let b = Array1::from_shape_fn(n, |j| {
                if self.perm[j] == i {
                    T::one()
                } else {
                    T::zero()
                }
            });
            let x = substitute(&self.lu, &b);
            result.column_mut(i).assign(&x);
        }

        result
    }
}

/// Compute the inverse of a square matrix
///
/// # Errors
///
/// Returns [`MatrixError::Singular`](crate::MatrixError::Singular) when the
/// decomposition finds a near-zero pivot.
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn inverse<T: RealField>(a: &Matrix<T>) -> Result<Matrix<T>> {
    inverse_with(a, &LuConfig::default())
}

/// Compute the inverse of a square matrix with an explicit factorization configuration
pub fn inverse_with<T: RealField>(a: &Matrix<T>, config: &LuConfig) -> Result<Matrix<T>> {
    let factorization = decompose_with(a, config)?;
    Ok(factorization.inverse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_inverse_2x2() {
        let a = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = inverse(&a).expect("inverse should exist");

        let expected = array![[0.6_f64, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_with_row_swaps() {
        let a = array![[0.0_f64, 2.0, 0.0], [0.0, 0.0, 3.0], [4.0, 0.0, 0.0]];
        let inv = inverse(&a).expect("inverse should exist");

        let expected = array![[0.0_f64, 0.0, 0.25], [0.5, 0.0, 0.0], [0.0, 1.0 / 3.0, 0.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let a = array![[1.0_f64, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]];
        assert!(matches!(inverse(&a), Err(MatrixError::Singular { .. })));
    }

    #[test]
    fn test_inverse_empty() {
        let a = Matrix::<f64>::zeros((0, 0));
        let inv = inverse(&a).expect("empty inverse should succeed");
        assert_eq!(inv.dim(), (0, 0));
    }
}
