#![allow(non_snake_case)]

use crate::algebra::{
    CholeskyEngine, DirectFactorization, FloatT, Matrix, ScalarMath, ShapedMatrix,
};
use itertools::iproduct;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// True if the matrix equals its transpose to within the given
    /// absolute and relative tolerances, compared entrywise as in
    /// [`approx_eq`](crate::algebra::ScalarMath::approx_eq).
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn is_symmetric(&self, atol: T, rtol: T) -> bool {
        assert!(self.is_square());
        iproduct!(0..self.n, 0..self.n).all(|(i, j)| self[(i, j)].approx_eq(self[(j, i)], atol, rtol))
    }

    /// True if a Cholesky factorization of the matrix succeeds, i.e.
    /// all pivots are strictly positive.   A factorization failure is
    /// converted to `false` here and never escalated.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn is_positive_definite(&self) -> bool {
        assert!(self.is_square());
        CholeskyEngine::<T>::new(self.nrows()).factor(self).is_ok()
    }
}
