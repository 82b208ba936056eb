//! Dense square-matrix toolkit built on LU decomposition
//!
//! Inverse and determinant are both routed through a single Doolittle
//! factorization with partial pivoting; the matrix product is computed
//! directly and parallelized over output rows.
//!
//! # Features
//!
//! - **Decomposition**: packed L/U buffer, row permutation and pivot sign
//! - **Inverse / Determinant / Solve**: built on the factorization
//! - **Product**: row-parallel with rayon (`rayon` feature, on by default)
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_lu::{determinant, inverse, matrix, product};
//! use ndarray::array;
//!
//! let a = array![[1.0_f64, 2.0, 3.0], [0.0, 77.0, 3.0], [11.0, 0.0, 14.0]];
//! let inv = inverse(&a).unwrap();
//! let eye = product(&inv, &a).unwrap();
//! assert!(matrix::approx_eq(&eye, &matrix::identity(3), 1e-9));
//! // Cofactor expansion along the first row: 1078 + 66 - 2541
//! assert!((determinant(&a).unwrap() + 1397.0).abs() < 1e-9);
//! ```

pub mod lu;
pub mod matrix;
pub mod parallel;
pub mod product;
pub mod traits;

// Re-export main types
pub use matrix::{Matrix, create};
pub use traits::RealField;

// Re-export the decomposition-based operations
pub use lu::{
    LuConfig, LuDecomposition, PivotSearch, decompose, decompose_with, determinant, inverse,
    lu_solve, substitute,
};
pub use product::product;

/// Error types for matrix operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Non-conformable matrices in product: left has {left_cols} columns, right has {right_rows} rows")]
    Nonconformable { left_cols: usize, right_rows: usize },

    #[error("Matrix is singular: pivot in column {column} is below the singularity threshold")]
    Singular { column: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
