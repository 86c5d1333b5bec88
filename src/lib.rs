pub mod error;
pub mod geometry;
pub mod math;

pub use error::{Result, VecmathError};
pub use geometry::{circle3pts, Circle2};
pub use math::{
    approx_equal, approx_equal_default, cross, dot, midpoint, Coords, Matrix3, Matrix3d, Matrix3f,
    Point3, Point3d, Point3f, Scalar, Vector3, Vector3d, Vector3f,
};
