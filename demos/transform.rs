//! Prints a few transforms and a circle fit.
//!
//! ```text
//! cargo run --example transform
//! RUST_LOG=vecmath=debug cargo run --example transform   # show solver rejections
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use vecmath::{circle3pts, Circle2, Matrix3d, Point3d, Result, Vector3d};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for vecmath.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vecmath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("vecmath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rz = Matrix3d::rotate_z(FRAC_PI_2);
    println!("rotate_z(pi/2) = {rz}");
    println!("  rz * x = {}", rz * Vector3d::X);
    println!("  x * rz = {}", Vector3d::X * rz);

    let composite = Matrix3d::rotate_x(FRAC_PI_2) * Matrix3d::rotate_z(FRAC_PI_4);
    println!("rx(pi/2) * rz(pi/4) * x = {}", composite * Vector3d::X);

    let moved = Matrix3d::translation(1.0, 2.0, 1.0) * Point3d::ORIGIN;
    println!("translate origin by (1, 2, 1) = {moved}");

    let a = Point3d::new(1.0, 1.0, 0.0);
    let b = Point3d::new(2.0, 0.0, 0.0);
    let c = Point3d::new(3.0, 1.0, 0.0);
    let circle = Circle2::through(a, b, c)?;
    println!(
        "circle through {a}, {b}, {c}: center {}, radius {:.8}",
        circle.center(),
        circle.radius()
    );

    match circle3pts(a, b, Point3d::new(3.0, -1.0, 0.0)) {
        Ok(center) => println!("unexpected center {center}"),
        Err(e) => println!("colinear input rejected: {e}"),
    }

    Ok(())
}
