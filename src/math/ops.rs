use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::vector::{Coords, Point3, Vector3};
use super::Scalar;

/// Dot product of two directions. Operands are not normalized.
#[must_use]
pub fn dot<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    a.x() * b.x() + a.y() * b.y() + a.z() * b.z()
}

/// Right-handed cross product of two directions. Operands are not normalized.
#[must_use]
pub fn cross<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    Vector3::new(
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    )
}

/// Component-wise average of `a` and `b`, of the same kind as the inputs.
#[must_use]
pub fn midpoint<T: Scalar, P: Coords<T>>(a: &P, b: &P) -> P {
    P::from_xyz(
        (a.x() + b.x()) / T::TWO,
        (a.y() + b.y()) / T::TWO,
        (a.z() + b.z()) / T::TWO,
    )
}

/// Displacement `to - from`, whatever kind the endpoints are.
pub(crate) fn displacement<T: Scalar, P: Coords<T>>(from: &P, to: &P) -> Vector3<T> {
    Vector3::new(to.x() - from.x(), to.y() - from.y(), to.z() - from.z())
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    fn add(self, dir: Vector3<T>) -> Point3<T> {
        Point3::new(self.x() + dir.x(), self.y() + dir.y(), self.z() + dir.z())
    }
}

impl<T: Scalar> Add<Point3<T>> for Vector3<T> {
    type Output = Point3<T>;

    fn add(self, pt: Point3<T>) -> Point3<T> {
        pt + self
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        displacement(&rhs, &self)
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Point3<T>) -> Vector3<T> {
        displacement(&rhs, &self)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Vector3<T> {
        Vector3::new(-self.x(), -self.y(), -self.z())
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    fn add_assign(&mut self, dir: Vector3<T>) {
        *self = *self + dir;
    }
}
