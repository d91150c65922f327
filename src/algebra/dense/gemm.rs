#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, MultiplyGEMM, ShapedMatrix};

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = a*A*B + b*self
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, a: T, b: T) -> &mut Self
    where
        MATA: DenseMatrix<T = T>,
        MATB: DenseMatrix<T = T>,
    {
        let (m, n) = self.size();
        let k = A.ncols();
        assert!(A.nrows() == m && B.nrows() == k && B.ncols() == n);

        for j in 0..n {
            for i in 0..m {
                let mut s = T::zero();
                for p in 0..k {
                    s += A[(i, p)] * B[(p, j)];
                }
                self[(i, j)] = a * s + b * self[(i, j)];
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    let A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::from(&[
        [5., 6.], //
        [7., 8.], //
    ]);

    let mut C = Matrix::<f64>::zeros((2, 2));
    C.mul(&A, &B, 1.0, 0.0);
    let Ctest = Matrix::from(&[
        [19., 22.], //
        [43., 50.], //
    ]);
    assert_eq!(C, Ctest);

    //A'B with an adjoint view on the left
    let mut C = Matrix::<f64>::zeros((2, 2));
    C.mul(&A.t(), &B, 1.0, 0.0);
    let Ctest = Matrix::from(&[
        [26., 30.], //
        [38., 44.], //
    ]);
    assert_eq!(C, Ctest);
}
