#![allow(non_snake_case)]

use crate::algebra::{Adjoint, FloatT, Matrix, MultiplyGEMV, ShapedMatrix, VectorMath};

impl<T> MultiplyGEMV for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements y = a*A*x + b*y, accumulating columnwise so that
    // the data is walked in storage order
    fn gemv(&self, x: &[Self::T], y: &mut [Self::T], a: Self::T, b: Self::T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        y.scale(b);
        for (col, &xcol) in x.iter().enumerate() {
            y.axpby(a * xcol, self.col_slice(col), T::one());
        }
    }
}

impl<'a, T> MultiplyGEMV for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    // implements y = a*A'*x + b*y.  Each entry of y is a dot product
    // against a column of the source matrix
    fn gemv(&self, x: &[Self::T], y: &mut [Self::T], a: Self::T, b: Self::T) {
        let (m, n) = self.src.size(); //NB: size of A, not A'
        assert!(m == x.len() && n == y.len());

        for (col, ycol) in y.iter_mut().enumerate() {
            *ycol = a * self.src.col_slice(col).dot(x) + b * *ycol;
        }
    }
}

#[test]
fn test_gemv() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    let x = vec![1., -1., 2.];
    let mut y = vec![1., -3.];
    A.gemv(&x, &mut y, 2.0, 1.0);
    assert!(y == [11.0, 19.0]);

    let x = vec![2., 1.];
    let mut y = vec![1., 1., 1.];
    A.t().gemv(&x, &mut y, 1.0, -1.0);
    assert!(y == [5.0, 8.0, 11.0]);
}
