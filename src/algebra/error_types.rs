use thiserror::Error;

/// Error type returned by dense factorization routines.  Pivot errors
/// report the 0-based index of the offending diagonal entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    /// Indicates inputs have incompatible dimension
    IncompatibleDimension,
    /// Cholesky factorization required the square root of a non-positive
    /// pivot, i.e. the matrix is not positive definite
    #[error("Non-positive pivot at diagonal position {0}")]
    NonPositivePivot(usize),
    /// Elimination or back substitution encountered a zero (or near zero)
    /// pivot.   The factorization performs no row interchange, so this is
    /// not recoverable
    #[error("Zero pivot at diagonal position {0}")]
    ZeroPivot(usize),
}
