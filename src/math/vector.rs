//! Homogeneous 3D value types.
//!
//! [`Vector3`] (a direction or displacement) and [`Point3`] (a location)
//! share the same four-slot `[x, y, z, w]` layout but are distinct types,
//! so only meaningful combinations type-check:
//!
//! ```compile_fail
//! use vecmath::Point3f;
//!
//! let p = Point3f::new(1.0, 0.0, 0.0);
//! let _ = p + p; // point + point is not defined
//! ```
//!
//! ```compile_fail
//! use vecmath::{Point3f, Vector3f};
//!
//! let p = Point3f::new(1.0, 0.0, 0.0);
//! let _ = p - Vector3f::X; // point - vector is not defined
//! ```
//!
//! `w` is 1 for both kinds after every construction and every operation.

use approx::{AbsDiffEq, RelativeEq};

use super::tolerance::{approx_equal_default, approx_zero};
use super::Scalar;

/// Shared read access and construction for [`Vector3`] and [`Point3`].
///
/// Lets algorithms such as [`midpoint`](super::midpoint) and
/// [`circle3pts`](crate::circle3pts) accept either kind and hand back the
/// same kind they were given.
pub trait Coords<T: Scalar>: Copy {
    /// Builds a value from `x, y, z` with `w = 1`.
    fn from_xyz(x: T, y: T, z: T) -> Self;

    /// The raw `[x, y, z, w]` slots.
    fn to_array(&self) -> [T; 4];

    fn x(&self) -> T;

    fn y(&self) -> T;

    fn z(&self) -> T;

    fn w(&self) -> T;
}

/// A direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    v: [T; 4],
}

/// A location in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<T> {
    v: [T; 4],
}

macro_rules! homogeneous_common {
    ($ty:ident) => {
        impl<T: Scalar> $ty<T> {
            /// Creates a value from three components, `w = 1`.
            #[must_use]
            pub fn new(x: T, y: T, z: T) -> Self {
                Self {
                    v: [x, y, z, T::ONE],
                }
            }

            /// Creates a value in the X,Y plane (`z = 0`, `w = 1`).
            #[must_use]
            pub fn new_xy(x: T, y: T) -> Self {
                Self::new(x, y, T::ZERO)
            }

            #[must_use]
            pub fn x(&self) -> T {
                self.v[0]
            }

            #[must_use]
            pub fn y(&self) -> T {
                self.v[1]
            }

            #[must_use]
            pub fn z(&self) -> T {
                self.v[2]
            }

            /// Homogeneous coordinate, always 1.
            #[must_use]
            pub fn w(&self) -> T {
                self.v[3]
            }
        }

        impl<T: Scalar> Default for $ty<T> {
            /// `(0, 0, 0, 1)`.
            fn default() -> Self {
                Self::new(T::ZERO, T::ZERO, T::ZERO)
            }
        }

        impl<T: Scalar> From<[T; 3]> for $ty<T> {
            fn from([x, y, z]: [T; 3]) -> Self {
                Self::new(x, y, z)
            }
        }

        impl<T: Scalar> From<[T; 2]> for $ty<T> {
            fn from([x, y]: [T; 2]) -> Self {
                Self::new_xy(x, y)
            }
        }

        impl<T: Scalar> Coords<T> for $ty<T> {
            fn from_xyz(x: T, y: T, z: T) -> Self {
                Self::new(x, y, z)
            }

            fn to_array(&self) -> [T; 4] {
                self.v
            }

            fn x(&self) -> T {
                $ty::x(self)
            }

            fn y(&self) -> T {
                $ty::y(self)
            }

            fn z(&self) -> T {
                $ty::z(self)
            }

            fn w(&self) -> T {
                $ty::w(self)
            }
        }

        impl<T: Scalar> AbsDiffEq for $ty<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.v
                    .iter()
                    .zip(other.v.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: Scalar> RelativeEq for $ty<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.v
                    .iter()
                    .zip(other.v.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

homogeneous_common!(Vector3);
homogeneous_common!(Point3);

impl<T: Scalar> Vector3<T> {
    /// Unit direction along +X.
    pub const X: Self = Self {
        v: [T::ONE, T::ZERO, T::ZERO, T::ONE],
    };

    /// Unit direction along +Y.
    pub const Y: Self = Self {
        v: [T::ZERO, T::ONE, T::ZERO, T::ONE],
    };

    /// Unit direction along +Z.
    pub const Z: Self = Self {
        v: [T::ZERO, T::ZERO, T::ONE, T::ONE],
    };

    /// The zero direction `(0, 0, 0, 1)`.
    pub const ZERO: Self = Self {
        v: [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    };

    /// Euclidean length of `(x, y, z)`.
    ///
    /// Returns exactly 1 when the squared length is already within
    /// tolerance of 1, and exactly 0 when the length is at or below the
    /// tolerance.
    #[must_use]
    pub fn length(&self) -> T {
        let sq = self.x() * self.x() + self.y() * self.y() + self.z() * self.z();
        if approx_equal_default(sq, T::ONE) {
            return T::ONE;
        }
        let len = sq.sqrt();
        if len <= T::DEFAULT_EPSILON {
            T::ZERO
        } else {
            len
        }
    }

    /// Scales the vector to unit length in place and returns it for chaining.
    ///
    /// A zero-length vector becomes [`Vector3::ZERO`] instead of NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if approx_zero(len) {
            tracing::trace!("normalize: zero-length vector");
            *self = Self::ZERO;
        } else if !approx_equal_default(len, T::ONE) {
            self.v = [self.v[0] / len, self.v[1] / len, self.v[2] / len, T::ONE];
        }
        self
    }

    /// Returns a normalized copy.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl<T: Scalar> Point3<T> {
    /// The origin `(0, 0, 0, 1)`.
    pub const ORIGIN: Self = Self {
        v: [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    };
}
