//! Test support library
//! Provides various helper functions & utilities for tests.

use cogrs::float_types::Real;
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise [`approx_eq`] for points.
pub fn approx_point(p: Point3<Real>, expected: [Real; 3], eps: Real) -> bool {
    approx_eq(p.x, expected[0], eps)
        && approx_eq(p.y, expected[1], eps)
        && approx_eq(p.z, expected[2], eps)
}
