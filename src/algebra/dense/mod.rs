#![allow(non_snake_case)]

mod core;
pub use self::core::*;
mod gemm;
mod gemv;
mod properties;
pub(crate) mod triangular;

mod cholesky;
pub use cholesky::*;
mod lu;
pub use lu::*;

use crate::algebra::{DenseFactorizationError, FloatT};
use enum_dispatch::*;

/// Interface to the dense direct factorization engines.
///
/// An engine is sized at construction, computes its factors from an
/// input matrix with `factor`, and then solves any number of right
/// hand sides with `solve`.
#[enum_dispatch]
pub trait DirectFactorization<T>
where
    T: FloatT,
{
    /// Compute the factorization of `A`.   The input matrix is read
    /// only; factors are stored within the engine.
    fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError>;

    /// Solve $Ax = b$ in place using previously computed factors,
    /// overwriting `b` with the solution.
    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError>;
}

/// The supported factorization engines, dispatching
/// [`DirectFactorization`] to whichever variant is held.
#[enum_dispatch(DirectFactorization<T>)]
pub enum DenseFactorizer<T>
where
    T: FloatT,
{
    Cholesky(CholeskyEngine<T>),
    Doolittle(DoolittleEngine<T>),
}
