//! Doolittle factorization with partial pivoting
//!
//! Produces `P A = L U` with L (unit diagonal, strictly below the diagonal) and
//! U (on and above the diagonal) packed into a single buffer.

use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::{MatrixError, Result};

/// Pivots with a magnitude below this value mark the matrix as singular
pub const SINGULAR_THRESHOLD: f64 = 1e-20;

/// How the pivot row is chosen in each column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotSearch {
    /// Pick the row with the largest |a_ij| (first one wins on ties)
    #[default]
    Magnitude,
    /// Seed the running maximum with |a_jj|, then replace it only when a lower
    /// row's signed value is strictly greater.
    ///
    /// Large negative candidates are never selected, so a column such as
    /// `[0, -5]` reports a singular pivot. Kept for bit-compatible results with
    /// older outputs; prefer [`PivotSearch::Magnitude`].
    Signed,
}

/// LU factorization configuration
#[derive(Debug, Clone)]
pub struct LuConfig {
    /// Pivot row selection rule
    pub pivot_search: PivotSearch,
    /// Pivot magnitudes below this are treated as zero
    pub singular_threshold: f64,
}

impl Default for LuConfig {
    fn default() -> Self {
        Self {
            pivot_search: PivotSearch::Magnitude,
            singular_threshold: SINGULAR_THRESHOLD,
        }
    }
}

/// LU factorization result
///
/// `lu` is never modified after construction; all consumers borrow it.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Matrix<T>,
    /// `perm[i]` is the original row now at position `i`
    pub perm: Vec<usize>,
    /// +1 or -1 depending on the parity of row swaps
    pub toggle: i8,
}

impl<T: RealField> LuDecomposition<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Pivot sign as a scalar
    pub fn sign(&self) -> T {
        T::from_real(f64::from(self.toggle))
    }
}

/// Compute the LU factorization of a square matrix with the default configuration
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn decompose<T: RealField>(a: &Matrix<T>) -> Result<LuDecomposition<T>> {
    decompose_with(a, &LuConfig::default())
}

/// Compute the LU factorization of a square matrix
///
/// Fails with [`MatrixError::Singular`] as soon as a pivot falls below
/// `config.singular_threshold`, including the last diagonal entry of U.
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn decompose_with<T: RealField>(
    a: &Matrix<T>,
    config: &LuConfig,
) -> Result<LuDecomposition<T>> {
    let n = a.nrows();
    assert_eq!(
        n,
        a.ncols(),
        "LU decomposition requires a square matrix, got {}x{}",
        n,
        a.ncols()
    );

    let threshold = T::from_real(config.singular_threshold);
    let mut lu = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut toggle: i8 = 1;
    let mut swaps = 0usize;

    for j in 0..n.saturating_sub(1) {
        let pivot_row = select_pivot_row(&lu, j, config.pivot_search);

        if pivot_row != j {
            for k in 0..n {
                lu.swap([j, k], [pivot_row, k]);
            }
            perm.swap(j, pivot_row);
            toggle = -toggle;
            swaps += 1;
            log::trace!("LU column {}: swapped rows {} and {}", j, j, pivot_row);
        }

        let pivot = lu[[j, j]];
        if pivot.is_zero_approx(threshold) {
            log::debug!(
                "LU decomposition of {}x{} matrix: singular pivot in column {}",
                n,
                n,
                j
            );
            return Err(MatrixError::Singular { column: j });
        }

        // Compute multipliers and eliminate
        for i in (j + 1)..n {
            let mult = lu[[i, j]] / pivot;
            lu[[i, j]] = mult; // Store multiplier in L part

            for k in (j + 1)..n {
                let update = mult * lu[[j, k]];
                lu[[i, k]] -= update;
            }
        }
    }

    // The column loop never looks at the last pivot
    if n > 0 && lu[[n - 1, n - 1]].is_zero_approx(threshold) {
        log::debug!(
            "LU decomposition of {}x{} matrix: singular pivot in column {}",
            n,
            n,
            n - 1
        );
        return Err(MatrixError::Singular { column: n - 1 });
    }

    log::debug!("LU decomposition of {}x{} matrix: {} row swaps", n, n, swaps);

    Ok(LuDecomposition { lu, perm, toggle })
}

fn select_pivot_row<T: RealField>(lu: &Matrix<T>, j: usize, search: PivotSearch) -> usize {
    let n = lu.nrows();
    let mut col_max = lu[[j, j]].norm();
    let mut pivot_row = j;

    for i in (j + 1)..n {
        let candidate = match search {
            PivotSearch::Magnitude => lu[[i, j]].norm(),
            PivotSearch::Signed => lu[[i, j]],
        };
        if candidate > col_max {
            col_max = candidate;
            pivot_row = i;
        }
    }

    pivot_row
}
