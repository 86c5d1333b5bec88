//! Diagnostic formatting.
//!
//! Vectors and points print as `[x, y, z, w]`, matrices as a four-row
//! bracketed block. Values are fixed-point with
//! [`Scalar::DISPLAY_PRECISION`] digits: 5 for `f32`, 8 for `f64`.

use std::fmt;

use super::matrix::Matrix3;
use super::vector::{Coords, Point3, Vector3};
use super::Scalar;

fn write_row<T: Scalar>(f: &mut fmt::Formatter<'_>, row: [T; 4]) -> fmt::Result {
    let p = T::DISPLAY_PRECISION;
    let [a, b, c, d] = row;
    write!(f, "[{a:.p$}, {b:.p$}, {c:.p$}, {d:.p$}]")
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.to_array())
    }
}

impl<T: Scalar> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.to_array())
    }
}

impl<T: Scalar> fmt::Display for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..4 {
            if i > 0 {
                f.write_str(",\n ")?;
            }
            write_row(f, self.row(i))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_single_precision() {
        let v = Vector3::new(1.0_f32, -0.5, 2.25);
        assert_eq!(v.to_string(), "[1.00000, -0.50000, 2.25000, 1.00000]");
    }

    #[test]
    fn point_double_precision() {
        let p = Point3::new(0.125_f64, 0.0, -3.0);
        assert_eq!(
            p.to_string(),
            "[0.12500000, 0.00000000, -3.00000000, 1.00000000]"
        );
    }

    #[test]
    fn matrix_block() {
        let m = Matrix3::translation(1.0_f32, 2.0, 3.0);
        let expected = "[[1.00000, 0.00000, 0.00000, 1.00000],\n \
                         [0.00000, 1.00000, 0.00000, 2.00000],\n \
                         [0.00000, 0.00000, 1.00000, 3.00000],\n \
                         [0.00000, 0.00000, 0.00000, 1.00000]]";
        assert_eq!(m.to_string(), expected);
    }
}
