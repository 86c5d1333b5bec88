pub mod display;
pub mod matrix;
pub mod ops;
pub mod tolerance;
pub mod vector;

use std::fmt;

use nalgebra::RealField;

pub use matrix::Matrix3;
pub use ops::{cross, dot, midpoint};
pub use tolerance::{approx_equal, approx_equal_default, approx_zero};
pub use vector::{Coords, Point3, Vector3};

/// Floating-point scalar the vector and matrix types are generic over.
///
/// Implemented for `f32` and `f64` only. The two precisions never mix
/// within one computation.
pub trait Scalar: RealField + Copy + fmt::Display {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Tolerance used by the `approx_*` helpers and the degeneracy checks.
    const DEFAULT_EPSILON: Self;

    /// Digits after the decimal point when formatting values.
    const DISPLAY_PRECISION: usize;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const DEFAULT_EPSILON: Self = 1.0e-6;
    const DISPLAY_PRECISION: usize = 5;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const DEFAULT_EPSILON: Self = 1.0e-6;
    const DISPLAY_PRECISION: usize = 8;
}

/// Single-precision direction.
pub type Vector3f = Vector3<f32>;

/// Double-precision direction.
pub type Vector3d = Vector3<f64>;

/// Single-precision location.
pub type Point3f = Point3<f32>;

/// Double-precision location.
pub type Point3d = Point3<f64>;

/// Single-precision 4x4 homogeneous transform.
pub type Matrix3f = Matrix3<f32>;

/// Double-precision 4x4 homogeneous transform.
pub type Matrix3d = Matrix3<f64>;
