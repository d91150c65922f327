#![allow(non_snake_case)]

use crate::algebra::*;
use crate::solver::{DenseSolution, DirectSolverSettings, SolveMethod};
use thiserror::Error;

/// Error type returned by [`DirectSolver`] operations.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Matrix is not square, or the right hand side length does not
    /// match the matrix dimension.   Raised before any factorization
    /// work is attempted
    #[error("Matrix must be square with dimension matching the right-hand side")]
    ShapeMismatch,
    /// A factorization failed
    #[error("Factorization failure")]
    Factorization(#[from] DenseFactorizationError),
    /// The computed solution contains NaN or Inf values
    #[error("Solution contains non-finite values")]
    NonFiniteSolution,
}

/// Direct solver for dense square systems $Ax = b$.
///
/// Each call to [`solve`](DirectSolver::solve) classifies the matrix
/// and routes it to one of the two factorization engines:
///
/// * symmetric positive definite matrices are factored as $A = LL^T$
///   by [`CholeskyEngine`](crate::algebra::CholeskyEngine);
/// * all other square matrices are factored as $A = LU$ by
///   [`DoolittleEngine`](crate::algebra::DoolittleEngine), without
///   row pivoting.
///
/// The solver holds no state other than its settings, so a single
/// instance may be reused across unrelated systems, and the same
/// inputs always produce the same routing decision and solution.
#[derive(Debug, Clone, Default)]
pub struct DirectSolver<T: FloatT = f64> {
    settings: DirectSolverSettings<T>,
}

impl<T> DirectSolver<T>
where
    T: FloatT,
{
    pub fn new(settings: DirectSolverSettings<T>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DirectSolverSettings<T> {
        &self.settings
    }

    /// Solve $Ax = b$, reporting the solution together with the
    /// factorization method used.
    ///
    /// The input matrix is never modified; both engines factor an
    /// internal copy.   Classification outcomes (symmetry, positive
    /// definiteness) are plain booleans and never surface as errors;
    /// factorization failures always do.
    pub fn solve(&self, A: &Matrix<T>, b: &[T]) -> Result<DenseSolution<T>, SolverError> {
        if !A.is_square() || A.nrows() != b.len() || A.nrows() == 0 {
            return Err(SolverError::ShapeMismatch);
        }
        let n = A.nrows();

        let symmetric =
            A.is_symmetric(self.settings.symmetry_tol_abs, self.settings.symmetry_tol_rel);

        // positive definiteness is only worth testing on the
        // symmetric branch
        let (mut factorizer, method) = if symmetric && A.is_positive_definite() {
            (
                DenseFactorizer::from(CholeskyEngine::<T>::new(n)),
                SolveMethod::Cholesky,
            )
        } else {
            (
                DenseFactorizer::from(DoolittleEngine::<T>::new_with_tolerance(
                    n,
                    self.settings.zero_pivot_tol,
                )),
                SolveMethod::Doolittle,
            )
        };

        factorizer.factor(A)?;

        let mut x = b.to_vec();
        factorizer.solve(&mut x)?;

        if self.settings.check_finite && !x.is_finite() {
            return Err(SolverError::NonFiniteSolution);
        }

        // residual r = Ax - b, for reporting only
        let mut r = b.to_vec();
        A.gemv(&x, &mut r, T::one(), -T::one());
        let r_norm = r.norm_inf();

        Ok(DenseSolution::new(x, method, r_norm))
    }
}
