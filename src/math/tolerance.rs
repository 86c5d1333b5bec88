use super::Scalar;

/// Returns `true` when `|a - b| < epsilon`.
#[must_use]
pub fn approx_equal<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon
}

/// [`approx_equal`] with [`Scalar::DEFAULT_EPSILON`] (`1e-6`).
#[must_use]
pub fn approx_equal_default<T: Scalar>(a: T, b: T) -> bool {
    approx_equal(a, b, T::DEFAULT_EPSILON)
}

/// Returns `true` when `|a| < DEFAULT_EPSILON`.
#[must_use]
pub fn approx_zero<T: Scalar>(a: T) -> bool {
    approx_equal(a, T::ZERO, T::DEFAULT_EPSILON)
}
