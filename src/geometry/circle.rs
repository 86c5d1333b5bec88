use crate::error::{Result, VecmathError};
use crate::math::ops::displacement;
use crate::math::{approx_zero, cross, midpoint, Coords, Point3, Scalar, Vector3};

/// Center of the circle through `a`, `b` and `c`.
///
/// The points are taken in the X,Y plane; their Z components only take
/// part in the colinearity test. The center is returned with `z = 0`, as
/// the same kind ([`Point3`] or [`Vector3`]) as the inputs.
///
/// The center is the intersection of the perpendicular bisectors of `ab`
/// and `bc`, each written as an implicit line `A*x + B*y + C = 0` and
/// solved with Cramer's rule.
///
/// # Errors
///
/// Returns [`VecmathError::Degenerate`] if the points are colinear or
/// coincident, or if the bisectors do not intersect in the X,Y plane.
#[allow(clippy::similar_names)]
pub fn circle3pts<T: Scalar, P: Coords<T>>(a: P, b: P, c: P) -> Result<P> {
    let dirab = displacement(&a, &b);
    let dirbc = displacement(&b, &c);

    let normal_len = cross(&dirab, &dirbc).length();
    if approx_zero(normal_len) {
        return Err(reject("points are colinear"));
    }

    let midab = midpoint(&a, &b);
    let midbc = midpoint(&b, &c);

    let perpab = perpendicular(&dirab);
    let perpbc = perpendicular(&dirbc);
    if approx_zero(perpab.length()) || approx_zero(perpbc.length()) {
        return Err(reject("points are coincident"));
    }

    let l1 = implicit_line(midab.x(), midab.y(), &perpab);
    let l2 = implicit_line(midbc.x(), midbc.y(), &perpbc);

    // Cramer's rule on the 2x2 system.
    let d = l1.a * l2.b - l2.a * l1.b;
    if approx_zero(d) {
        return Err(reject("perpendicular bisectors are parallel"));
    }
    let x = (l1.b * l2.c - l2.b * l1.c) / d;
    let y = (l2.a * l1.c - l1.a * l2.c) / d;

    Ok(P::from_xyz(x, y, T::ZERO))
}

fn reject(reason: &'static str) -> VecmathError {
    tracing::debug!(reason, "circle3pts: rejecting input");
    VecmathError::Degenerate(reason)
}

/// `d` turned a quarter turn clockwise in the X,Y plane, normalized.
fn perpendicular<T: Scalar>(d: &Vector3<T>) -> Vector3<T> {
    Vector3::new(d.y(), -d.x(), T::ZERO).normalized()
}

/// Coefficients of `a*x + b*y + c = 0`.
struct Line2<T> {
    a: T,
    b: T,
    c: T,
}

/// Line through `(x0, y0)` along `dir`: `-dy*x + dx*y + (x0*dy - y0*dx) = 0`.
fn implicit_line<T: Scalar>(x0: T, y0: T, dir: &Vector3<T>) -> Line2<T> {
    Line2 {
        a: -dir.y(),
        b: dir.x(),
        c: x0 * dir.y() - y0 * dir.x(),
    }
}

/// A circle in the X,Y plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<T> {
    center: Point3<T>,
    radius: T,
}

impl<T: Scalar> Circle2<T> {
    /// The circle through three points; see [`circle3pts`].
    ///
    /// # Errors
    ///
    /// Returns [`VecmathError::Degenerate`] under the same conditions as
    /// [`circle3pts`].
    pub fn through<P: Coords<T>>(a: P, b: P, c: P) -> Result<Self> {
        let center = circle3pts(a, b, c)?;
        let center = Point3::new(center.x(), center.y(), T::ZERO);
        Ok(Self {
            center,
            radius: planar_distance(&center, &a),
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Whether `p` lies on the circle, comparing X,Y distance to the radius
    /// within `epsilon`.
    #[must_use]
    pub fn passes_through<P: Coords<T>>(&self, p: &P, epsilon: T) -> bool {
        (planar_distance(&self.center, p) - self.radius).abs() < epsilon
    }
}

fn planar_distance<T: Scalar, P: Coords<T>>(center: &Point3<T>, p: &P) -> T {
    let dx = p.x() - center.x();
    let dy = p.y() - center.y();
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3d, Point3f, Vector3f};

    #[test]
    fn basic_single_precision() {
        let a = Vector3f::new(1.0, 1.0, 0.0);
        let b = Vector3f::new(2.0, 0.0, 0.0);
        let c = Vector3f::new(3.0, 1.0, 0.0);
        let center = circle3pts(a, b, c).unwrap();
        assert!((center.x() - 2.0).abs() < 1e-6, "{center}");
        assert!((center.y() - 1.0).abs() < 1e-6, "{center}");
        assert!(center.z().abs() < 1e-6, "{center}");
    }

    #[test]
    fn basic_double_precision() {
        let a = Point3d::new(1.0, 1.0, 0.0);
        let b = Point3d::new(2.0, 0.0, 0.0);
        let c = Point3d::new(3.0, 1.0, 0.0);
        let center = circle3pts(a, b, c).unwrap();
        assert!((center.x() - 2.0).abs() < 1e-6, "{center}");
        assert!((center.y() - 1.0).abs() < 1e-6, "{center}");
    }

    #[test]
    fn default_points_are_degenerate() {
        let v = Vector3f::default();
        assert!(circle3pts(v, v, v).unwrap_err().is_degenerate());

        let p = Point3d::default();
        assert!(circle3pts(p, p, p).unwrap_err().is_degenerate());
    }

    #[test]
    fn colinear_points_fail() {
        let err = circle3pts(
            Point3d::new(-1.0, -2.0, 0.0),
            Point3d::new(1.0, 2.0, 0.0),
            Point3d::new(4.0, 8.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(err, VecmathError::Degenerate("points are colinear"));
    }

    #[test]
    fn repeated_point_fails() {
        let a = Point3f::new(0.0, 0.0, 0.0);
        let b = Point3f::new(1.0, 1.0, 0.0);
        assert!(circle3pts(a, a, b).unwrap_err().is_degenerate());
        assert!(circle3pts(a, b, b).unwrap_err().is_degenerate());
        assert!(circle3pts(a, b, a).unwrap_err().is_degenerate());
    }

    #[test]
    fn colinear_only_in_plane_fails() {
        // Not colinear in 3D, but the X,Y projections are.
        let err = circle3pts(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 1.0),
            Point3d::new(2.0, 0.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            VecmathError::Degenerate("perpendicular bisectors are parallel")
        );
    }

    #[test]
    fn near_colinear_below_tolerance_fails() {
        let err = circle3pts(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 1e-7, 0.0),
        )
        .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn near_colinear_above_tolerance_solves() {
        // Center of (0,0), (1,0), (2,h) is (0.5, (2 + h^2) / 2h).
        for h in [1e-1_f64, 1e-3, 1e-5] {
            let center = circle3pts(
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(2.0, h, 0.0),
            )
            .unwrap();
            let expected_y = (2.0 + h * h) / (2.0 * h);
            assert!((center.x() - 0.5).abs() < 1e-6, "h={h} {center}");
            assert!(
                ((center.y() - expected_y) / expected_y).abs() < 1e-9,
                "h={h} {center}"
            );
        }
    }

    #[test]
    fn recovers_known_circle() {
        let (cx, cy, r) = (3.0_f64, -2.0, 5.0);
        let on = |t: f64| Point3d::new(cx + r * t.cos(), cy + r * t.sin(), 0.0);
        let circle = Circle2::through(on(0.3), on(1.7), on(4.0)).unwrap();
        let center = circle.center();
        assert!((center.x() - cx).abs() < 1e-9, "{center}");
        assert!((center.y() - cy).abs() < 1e-9, "{center}");
        assert!((circle.radius() - r).abs() < 1e-9, "r={}", circle.radius());
        assert!(circle.passes_through(&on(2.5), 1e-9));
        assert!(!circle.passes_through(&Point3d::new(cx, cy, 0.0), 1e-9));
    }

    #[test]
    fn ignores_z_of_inputs() {
        let center = circle3pts(
            Point3d::new(1.0, 1.0, 2.0),
            Point3d::new(2.0, 0.0, 2.0),
            Point3d::new(3.0, 1.0, 2.0),
        )
        .unwrap();
        assert!((center.x() - 2.0).abs() < 1e-6);
        assert!((center.y() - 1.0).abs() < 1e-6);
        assert!(center.z().abs() < f64::EPSILON);
    }

    #[test]
    fn order_does_not_matter() {
        let a = Point3d::new(-4.0, 0.5, 0.0);
        let b = Point3d::new(2.0, 3.0, 0.0);
        let c = Point3d::new(1.0, -6.0, 0.0);
        let first = circle3pts(a, b, c).unwrap();
        for (p, q, s) in [(b, c, a), (c, a, b), (a, c, b), (c, b, a)] {
            let other = circle3pts(p, q, s).unwrap();
            assert!((first - other).length() < 1e-9, "{first} vs {other}");
        }
    }
}
