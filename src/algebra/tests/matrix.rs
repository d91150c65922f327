#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_3x3() -> Matrix<f64> {
    // stored column major:
    // [ 1.0  4.0  7.0 ]
    // [ 2.0  5.0  8.0 ]
    // [ 3.0  6.0  9.0 ]
    Matrix::from(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
}

#[test]
fn test_from_rows_is_column_major() {
    let A = test_matrix_3x3();
    assert_eq!(A.size(), (3, 3));
    assert_eq!(A.data, vec![1., 2., 3., 4., 5., 6., 7., 8., 9.]);
}

#[test]
fn test_matrix_indexing() {
    let A = test_matrix_3x3();

    assert_eq!(A[(0, 0)], 1.0);
    assert_eq!(A[(1, 0)], 2.0);
    assert_eq!(A[(0, 1)], 4.0);
    assert_eq!(A[(2, 2)], 9.0);

    assert_eq!(A.index_linear((2, 0)), 2);
    assert_eq!(A.index_linear((0, 1)), 3);
    assert_eq!(A.index_linear((2, 2)), 8);
}

#[test]
fn test_adjoint_indexing() {
    let A = test_matrix_3x3();
    let At = A.t();

    assert_eq!(At.size(), (3, 3));
    assert_eq!(At[(0, 1)], 2.0);
    assert_eq!(At[(1, 0)], 4.0);
    assert_eq!(At[(2, 0)], 7.0);
    assert_eq!(At.shape(), MatrixShape::T);
}

#[test]
fn test_identity_and_set_identity() {
    let mut A = test_matrix_3x3();
    A.set_identity();
    assert_eq!(A, Matrix::<f64>::identity(3));
    assert_eq!(A[(0, 0)], 1.0);
    assert_eq!(A[(0, 1)], 0.0);
}

#[test]
fn test_col_slice() {
    let A = test_matrix_3x3();
    assert_eq!(A.col_slice(1), &[4., 5., 6.]);

    let mut A = A;
    A.col_slice_mut(0).set(0.0);
    assert_eq!(A.col_slice(0), &[0., 0., 0.]);
}

#[test]
fn test_is_square() {
    let A = Matrix::<f64>::zeros((2, 3));
    assert!(!A.is_square());
    assert!(test_matrix_3x3().is_square());
}
