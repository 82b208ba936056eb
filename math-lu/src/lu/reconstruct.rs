use super::decompose::LuDecomposition;
use crate::matrix::Matrix;
use crate::traits::RealField;

impl<T: RealField> LuDecomposition<T> {
    /// Unit lower triangular factor L
    pub fn lower(&self) -> Matrix<T> {
        let n = self.dim();
        Matrix::<T>::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[[i, j]],
            std::cmp::Ordering::Equal => T::one(),
            std::cmp::Ordering::Less => T::zero(),
        })
    }

    /// Upper triangular factor U
    pub fn upper(&self) -> Matrix<T> {
        let n = self.dim();
        Matrix::<T>::from_shape_fn((n, n), |(i, j)| {
            if i <= j { self.lu[[i, j]] } else { T::zero() }
        })
    }

    /// Row permutation P such that `P A = L U`
    pub fn permutation_matrix(&self) -> Matrix<T> {
        let n = self.dim();
        let mut p = Matrix::<T>::zeros((n, n));
        for (i, &row) in self.perm.iter().enumerate() {
            p[[i, row]] = T::one();
        }
        p
    }
}
