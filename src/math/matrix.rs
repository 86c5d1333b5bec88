use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix4, RowVector4, Vector4};

use super::vector::{Coords, Point3, Vector3};
use super::Scalar;
use crate::error::{Result, VecmathError};

/// A 4x4 homogeneous transformation matrix.
///
/// Entries are addressed by `(row, column)`. Vectors multiply either as
/// columns on the right (`m * v`) or as rows on the left (`v * m`); the
/// two orders only agree for symmetric matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<T> {
    m: Matrix4<T>,
}

impl<T: Scalar> Default for Matrix3<T> {
    /// The identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Matrix3<T> {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: Matrix4::identity(),
        }
    }

    /// Builds a matrix from four rows.
    #[must_use]
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            m: Matrix4::from_rows(&[
                RowVector4::from(r0),
                RowVector4::from(r1),
                RowVector4::from(r2),
                RowVector4::from(r3),
            ]),
        }
    }

    /// Translation by `(dx, dy, dz)` in the last column.
    #[must_use]
    pub fn translation(dx: T, dy: T, dz: T) -> Self {
        let mut r = Self::identity();
        r.m[(0, 3)] = dx; //   | 1 0 0 x |
        r.m[(1, 3)] = dy; //   | 0 1 0 y |
        r.m[(2, 3)] = dz; //   | 0 0 1 z |
        r
    }

    /// Axis-aligned scale by `(sx, sy, sz)` on the diagonal.
    #[must_use]
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        let mut r = Self::identity();
        r.m[(0, 0)] = sx;
        r.m[(1, 1)] = sy;
        r.m[(2, 2)] = sz;
        r
    }

    /// Right-handed rotation by `theta` radians about X.
    #[must_use]
    pub fn rotate_x(theta: T) -> Self {
        let (st, ct) = theta.sin_cos();
        let mut r = Self::identity();
        r.m[(1, 1)] = ct;
        r.m[(2, 2)] = ct;
        r.m[(1, 2)] = -st;
        r.m[(2, 1)] = st;
        r
    }

    /// Right-handed rotation by `theta` radians about Y.
    #[must_use]
    pub fn rotate_y(theta: T) -> Self {
        let (st, ct) = theta.sin_cos();
        let mut r = Self::identity();
        r.m[(0, 0)] = ct;
        r.m[(2, 2)] = ct;
        r.m[(0, 2)] = st;
        r.m[(2, 0)] = -st;
        r
    }

    /// Right-handed rotation by `theta` radians about Z.
    #[must_use]
    pub fn rotate_z(theta: T) -> Self {
        let (st, ct) = theta.sin_cos();
        let mut r = Self::identity();
        r.m[(0, 0)] = ct;
        r.m[(1, 1)] = ct;
        r.m[(0, 1)] = -st;
        r.m[(1, 0)] = st;
        r
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`VecmathError::IndexOutOfRange`] if either index is outside `[0, 3]`.
    pub fn get(&self, row: isize, col: isize) -> Result<T> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < 4 && c < 4 => Ok(self.m[(r, c)]),
            _ => Err(VecmathError::IndexOutOfRange { row, col }),
        }
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            m: self.m.transpose(),
        }
    }

    /// Row `i` of the matrix; `i` must be in `[0, 3]`.
    pub(crate) fn row(&self, i: usize) -> [T; 4] {
        [
            self.m[(i, 0)],
            self.m[(i, 1)],
            self.m[(i, 2)],
            self.m[(i, 3)],
        ]
    }
}

impl<T: Scalar> From<Matrix4<T>> for Matrix3<T> {
    fn from(m: Matrix4<T>) -> Self {
        Self { m }
    }
}

impl<T: Scalar> From<Matrix3<T>> for Matrix4<T> {
    fn from(m: Matrix3<T>) -> Self {
        m.m
    }
}

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: Matrix3<T>) -> Matrix3<T> {
        Matrix3 { m: self.m * rhs.m }
    }
}

/// `m * v`: `v` as a column, `result[i] = sum_j m[i][j] * v[j]`.
fn mul_column<T: Scalar, P: Coords<T>>(m: &Matrix3<T>, v: &P) -> P {
    let r = m.m * Vector4::from(v.to_array());
    P::from_xyz(r[0], r[1], r[2])
}

/// `v * m`: `v` as a row, `result[j] = sum_i v[i] * m[i][j]`.
fn mul_row<T: Scalar, P: Coords<T>>(v: &P, m: &Matrix3<T>) -> P {
    let r = RowVector4::from(v.to_array()) * m.m;
    P::from_xyz(r[0], r[1], r[2])
}

macro_rules! impl_vector_products {
    ($ty:ident) => {
        impl<T: Scalar> Mul<$ty<T>> for Matrix3<T> {
            type Output = $ty<T>;

            fn mul(self, v: $ty<T>) -> $ty<T> {
                mul_column(&self, &v)
            }
        }

        impl<T: Scalar> Mul<Matrix3<T>> for $ty<T> {
            type Output = $ty<T>;

            fn mul(self, m: Matrix3<T>) -> $ty<T> {
                mul_row(&self, &m)
            }
        }
    };
}

impl_vector_products!(Vector3);
impl_vector_products!(Point3);

impl<T: Scalar> AbsDiffEq for Matrix3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m.abs_diff_eq(&other.m, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Matrix3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m.relative_eq(&other.m, epsilon, max_relative)
    }
}
