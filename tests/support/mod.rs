//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use msh2sdf::{boundary::Boundary, float_types::Real};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance to the closest vertex by exhaustive search.
pub fn nearest_vertex_distance(vertices: &[Point2<Real>], p: &Point2<Real>) -> Real {
    vertices
        .iter()
        .map(|v| (v - p).norm())
        .fold(Real::INFINITY, Real::min)
}

/// The demonstration circle: radius 2, 1000 points, counter-clockwise.
pub fn reference_circle() -> Boundary {
    Boundary::circle(2.0, 1000).expect("valid circle")
}

/// Square `[-half, half]²` traversed counter-clockwise with `per_side`
/// vertices on each side (corners counted once).
pub fn square(half: Real, per_side: usize) -> Boundary {
    let mut points = Vec::with_capacity(4 * per_side);
    let step = 2.0 * half / per_side as Real;
    for i in 0..per_side {
        points.push([-half + i as Real * step, -half]);
    }
    for i in 0..per_side {
        points.push([half, -half + i as Real * step]);
    }
    for i in 0..per_side {
        points.push([half - i as Real * step, half]);
    }
    for i in 0..per_side {
        points.push([-half, half - i as Real * step]);
    }
    Boundary::polygon(&points).expect("valid square")
}
