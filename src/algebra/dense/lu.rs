#![allow(non_snake_case)]

use crate::algebra::{
    dense::triangular, AsFloatT, DenseFactorizationError, DenseMatrix, DirectFactorization, FloatT,
    Matrix, MatrixTriangle, ShapedMatrix,
};

/// Doolittle factorization $A = LU$ of a general square matrix, with
/// unit lower triangular $L$ and upper triangular $U$.
///
/// Elimination is performed __without row interchange__.   This is a
/// known limitation: a zero (or near zero) leading pivot cannot be
/// repaired by reordering, so such systems fail with
/// [`ZeroPivot`](DenseFactorizationError::ZeroPivot) even when the
/// matrix itself is nonsingular.   Systems requiring partial pivoting
/// for stability are outside the scope of this engine.
pub struct DoolittleEngine<T = f64> {
    /// unit lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
    /// upper triangular factor (stored as square dense)
    pub U: Matrix<T>,
    /// pivots with magnitude at or below this value are treated as zero
    pub zero_pivot_tol: T,
}

impl<T> DoolittleEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self::new_with_tolerance(n, (1e-12).as_T())
    }

    pub fn new_with_tolerance(n: usize, zero_pivot_tol: T) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        let U = Matrix::<T>::zeros((n, n));
        Self {
            L,
            U,
            zero_pivot_tol,
        }
    }
}

impl<T> DirectFactorization<T> for DoolittleEngine<T>
where
    T: FloatT,
{
    fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        self.L.set_identity();
        self.U.copy_from_slice(A.data());

        // eliminate below each pivot row in turn, with no row
        // interchange.  Every pivot is checked, including the final
        // one, so a singular matrix fails here rather than in the
        // subsequent back substitution
        let n = self.U.nrows();
        for i in 0..n {
            let pivot = self.U[(i, i)];
            if T::abs(pivot) <= self.zero_pivot_tol {
                return Err(DenseFactorizationError::ZeroPivot(i));
            }
            for j in (i + 1)..n {
                let factor = self.U[(j, i)] / pivot;
                self.L[(j, i)] = factor;
                for k in i..n {
                    let uik = self.U[(i, k)];
                    self.U[(j, k)] -= factor * uik;
                }
                // exact zero below the pivot, not a small residual
                self.U[(j, i)] = T::zero();
            }
        }
        Ok(())
    }

    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        // Ly = b needs no divisions since L has a unit diagonal,
        // then Ux = y divides by the U pivots
        triangular::solve_in_place(&self.L, b, MatrixTriangle::Tril, true, self.zero_pivot_tol)?;
        triangular::solve_in_place(
            &self.U,
            b,
            MatrixTriangle::Triu,
            false,
            self.zero_pivot_tol,
        )?;
        Ok(())
    }
}
