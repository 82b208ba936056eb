//! Determinant from an LU factorization

use super::decompose::{LuConfig, LuDecomposition, decompose_with};
use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::Result;

impl<T: RealField> LuDecomposition<T> {
    /// Determinant of the factored matrix: the pivot sign times the U diagonal
    pub fn determinant(&self) -> T {
        let mut result = self.sign();
        for i in 0..self.dim() {
            result *= self.lu[[i, i]];
        }
        result
    }
}

/// Compute the determinant of a square matrix
///
/// A singular matrix is reported as an error, never as a zero determinant.
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn determinant<T: RealField>(a: &Matrix<T>) -> Result<T> {
    determinant_with(a, &LuConfig::default())
}

/// Compute the determinant with an explicit factorization configuration
pub fn determinant_with<T: RealField>(a: &Matrix<T>, config: &LuConfig) -> Result<T> {
    let factorization = decompose_with(a, config)?;
    Ok(factorization.determinant())
}
