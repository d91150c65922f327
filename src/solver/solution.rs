use crate::algebra::FloatT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying which factorization produced a solution.   Reported
/// for observability and testing; it plays no role in control flow.
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveMethod {
    /// Cholesky decomposition $A = LL^T$
    Cholesky,
    /// Doolittle LU factorization $A = LU$, no pivoting
    Doolittle,
}

impl std::fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SolveMethod::Cholesky => write!(f, "Cholesky decomposition"),
            SolveMethod::Doolittle => write!(f, "Doolittle LU factorization"),
        }
    }
}

/// Solution returned by [`DirectSolver`](crate::solver::DirectSolver).
#[derive(Debug, Clone)]
pub struct DenseSolution<T> {
    /// solution vector
    pub x: Vec<T>,
    /// the factorization that produced `x`
    pub method: SolveMethod,
    /// max absolute residual of $Ax - b$
    pub r_norm: T,
}

impl<T> DenseSolution<T>
where
    T: FloatT,
{
    pub(crate) fn new(x: Vec<T>, method: SolveMethod, r_norm: T) -> Self {
        Self { x, method, r_norm }
    }
}
