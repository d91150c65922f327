use super::{FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;

    fn approx_eq(&self, y: T, atol: T, rtol: T) -> bool {
        let diff = T::abs(*self - y);
        diff <= atol + rtol * T::max(T::abs(*self), T::abs(y))
    }
}

#[test]
fn test_approx_eq() {
    let atol = 1e-12;
    let rtol = 1e-8;

    assert!((1.0).approx_eq(1.0, atol, rtol));
    assert!((1.0).approx_eq(1.0 + 1e-12, atol, rtol));
    assert!(!(1.0).approx_eq(1.0 + 1e-6, atol, rtol));

    //relative part should admit larger absolute differences
    //as magnitudes grow
    assert!((1e9).approx_eq(1e9 + 1.0, atol, rtol));
    assert!(!(1e9).approx_eq(1e9 + 100.0, atol, rtol));

    //NaN is not approximately anything
    assert!(!(f64::NAN).approx_eq(f64::NAN, atol, rtol));
}
