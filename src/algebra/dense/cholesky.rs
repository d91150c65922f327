#![allow(non_snake_case)]

use crate::algebra::{
    dense::triangular, DenseFactorizationError, DirectFactorization, FloatT, Matrix,
    MatrixTriangle, ShapedMatrix, VectorMath,
};

/// Cholesky factorization $A = LL^T$ of a symmetric positive definite
/// matrix.
///
/// Positive definiteness is established by the factorization itself: a
/// non-positive square root argument on the diagonal fails the factor
/// step, which is also how
/// [`is_positive_definite`](crate::algebra::Matrix::is_positive_definite)
/// classifies matrices.
pub struct CholeskyEngine<T = f64> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self { L }
    }
}

impl<T> DirectFactorization<T> for CholeskyEngine<T>
where
    T: FloatT,
{
    fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        self.L.data_mut().set(T::zero());

        // standard Cholesky recurrence, filling L row by row.  Entries
        // of A above the diagonal are never referenced.
        let n = self.L.nrows();
        for i in 0..n {
            for j in 0..=i {
                let mut s = A[(i, j)];
                for k in 0..j {
                    s -= self.L[(i, k)] * self.L[(j, k)];
                }
                if i == j {
                    if s <= T::zero() {
                        return Err(DenseFactorizationError::NonPositivePivot(i));
                    }
                    self.L[(i, i)] = T::sqrt(s);
                } else {
                    self.L[(i, j)] = s / self.L[(j, j)];
                }
            }
        }
        Ok(())
    }

    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        // Ly = b, then L'x = y.  The diagonal of L is strictly
        // positive after a successful factor step
        triangular::solve_in_place(&self.L, b, MatrixTriangle::Tril, false, T::zero())?;
        triangular::solve_in_place(&self.L.t(), b, MatrixTriangle::Triu, false, T::zero())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{DenseMatrix, MultiplyGEMM, MultiplyGEMV};

    #[test]
    fn test_cholesky_factor() {
        #[rustfmt::skip]
        let A = Matrix::from(
            &[[ 4., -2.,  2.],
              [-2., 10., -7.],
              [ 2., -7., 30.]]);

        let mut eng = CholeskyEngine::<f64>::new(3);
        assert!(eng.factor(&A).is_ok());

        // reconstruct and compare
        let mut M = Matrix::<f64>::zeros((3, 3));
        M.mul(&eng.L, &eng.L.t(), 1.0, 0.0);
        assert!(M.data().norm_inf_diff(A.data()) < 1e-9);

        // input was not corrupted by the factorization
        assert_eq!(A[(0, 0)], 4.0);
        assert_eq!(A[(2, 1)], -7.0);
    }

    #[test]
    fn test_cholesky_solve() {
        #[rustfmt::skip]
        let A = Matrix::from(
            &[[ 4., -2.,  2.],
              [-2., 10., -7.],
              [ 2., -7., 30.]]);

        let mut eng = CholeskyEngine::<f64>::new(3);
        eng.factor(&A).unwrap();

        let xtrue = [1., -1., 2.];
        let mut b = vec![0.0; 3];
        A.gemv(&xtrue, &mut b, 1.0, 0.0);

        eng.solve(&mut b).unwrap();
        assert!(b.norm_inf_diff(&xtrue) < 1e-10);
    }

    #[test]
    fn test_cholesky_gram_matrix() {
        // A = M'M + I is symmetric positive definite for any M
        #[rustfmt::skip]
        let M = Matrix::from(
            &[[ 1.,  2., -1.,  0.],
              [ 3., -1.,  2.,  1.],
              [ 0.,  1.,  4., -2.],
              [-1.,  2.,  0.,  3.]]);

        let mut A = Matrix::<f64>::identity(4);
        A.mul(&M.t(), &M, 1.0, 1.0);

        let mut eng = CholeskyEngine::<f64>::new(4);
        eng.factor(&A).unwrap();

        let mut R = Matrix::<f64>::zeros((4, 4));
        R.mul(&eng.L, &eng.L.t(), 1.0, 0.0);
        assert!(R.data().norm_inf_diff(A.data()) < 1e-9);
    }

    #[test]
    fn test_cholesky_rejects_indefinite() {
        #[rustfmt::skip]
        let A = Matrix::from(
            &[[1., 2.],
              [2., 1.]]);

        let mut eng = CholeskyEngine::<f64>::new(2);
        let err = eng.factor(&A).unwrap_err();
        assert_eq!(err, DenseFactorizationError::NonPositivePivot(1));
    }

    #[test]
    fn test_cholesky_dimension_mismatch() {
        let A = Matrix::<f64>::identity(3);
        let mut eng = CholeskyEngine::<f64>::new(2);
        assert_eq!(
            eng.factor(&A).unwrap_err(),
            DenseFactorizationError::IncompatibleDimension
        );
    }
}
