//! LU (Doolittle) decomposition with partial pivoting
//!
//! Every decomposition-based operation goes through [`decompose`]:
//! - [`substitute`]: forward/backward substitution on a packed LU buffer
//! - [`inverse`]: column-by-column inverse from unit basis vectors
//! - [`determinant`]: product of the U diagonal times the pivot sign
//! - [`lu_solve`]: solve `A x = b` for a single right-hand side

mod decompose;
mod determinant;
mod inverse;
mod reconstruct;
mod solve;

pub use decompose::{
    LuConfig, LuDecomposition, PivotSearch, SINGULAR_THRESHOLD, decompose, decompose_with,
};
pub use determinant::{determinant, determinant_with};
pub use inverse::{inverse, inverse_with};
pub use solve::{lu_solve, substitute};
