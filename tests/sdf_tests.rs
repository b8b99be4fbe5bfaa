mod support;

use msh2sdf::{
    boundary::Boundary,
    compute_sdf,
    errors::SdfError,
    float_types::{Real, tolerance},
    grid::{BackgroundGrid, GridLayout, GridSpec},
    sdf::{SerialSdfOps, SignedDistanceField, compute_field, evaluate_points},
};
use nalgebra::Point2;

#[cfg(feature = "f64")]
const REFERENCE_2_5_BY_5: [Real; 25] = [
    -0.79509158, 0.23227539, 0.75000412, 0.23223775, -0.79509603, -0.50004944, 0.75001648, 2.0,
    0.75, -0.5, -0.79509158, 0.23227539, 0.75000412, 0.23223775, -0.79509603, -1.53554671,
    -0.79511543, -0.50001236, -0.79508511, -1.53553533, -1.53554671, -0.79511543, -0.50001236,
    -0.79508511, -1.53553533,
];

#[cfg(feature = "f64")]
#[test]
fn circle_reference_field() {
    let (x, t) = msh2sdf::generate_circle(2.0, 1000).unwrap();
    let (actual, grid) = compute_sdf(&x, &t, 2.5, 5).unwrap();

    assert_eq!(actual.len(), 25);
    assert_eq!(grid.len(), 25);
    for (i, (a, e)) in actual.iter().zip(REFERENCE_2_5_BY_5).enumerate() {
        assert!(support::approx_eq(*a, e, 1e-6), "node {i}: {a} != {e}");
    }
}

#[test]
fn magnitude_is_nearest_vertex_distance() {
    // the squares put 50 and 100 vertices on each coordinate line
    let boundaries = [
        support::reference_circle(),
        support::square(1.0, 50),
        support::square(1.0, 100),
    ];
    for boundary in &boundaries {
        let field = compute_field(boundary, GridSpec::new(3.0, 31)).unwrap();
        for (value, p) in field.values().iter().zip(field.grid().points()) {
            let expected = support::nearest_vertex_distance(boundary.vertices(), p);
            assert!(support::approx_eq(value.abs(), expected, tolerance()), "at {p}");
        }
    }
}

#[test]
fn counter_clockwise_circle_is_positive_inside() {
    let circle = support::reference_circle();
    let field = compute_field(&circle, GridSpec::new(3.0, 41)).unwrap();

    for (value, p) in field.values().iter().zip(field.grid().points()) {
        let r = p.coords.norm();
        if r < 1.95 {
            assert!(*value > 0.0, "inside point {p} got {value}");
        } else if r > 2.05 {
            assert!(*value < 0.0, "outside point {p} got {value}");
        }
    }
}

#[test]
fn clockwise_circle_is_negative_inside() {
    let circle = support::reference_circle().reversed().unwrap();
    let field = compute_field(&circle, GridSpec::new(3.0, 41)).unwrap();

    for (value, p) in field.values().iter().zip(field.grid().points()) {
        let r = p.coords.norm();
        if r < 1.95 {
            assert!(*value < 0.0, "inside point {p} got {value}");
        } else if r > 2.05 {
            assert!(*value > 0.0, "outside point {p} got {value}");
        }
    }
}

#[test]
fn dense_square_is_positive_inside() {
    let square = support::square(1.0, 100);
    let field = compute_field(&square, GridSpec::new(2.0, 40)).unwrap();

    for (value, p) in field.values().iter().zip(field.grid().points()) {
        let r = p.x.abs().max(p.y.abs());
        if r < 0.95 {
            assert!(*value > 0.0, "inside point {p} got {value}");
        } else if r > 1.05 {
            assert!(*value < 0.0, "outside point {p} got {value}");
        }
    }
}

#[test]
fn reversing_orientation_negates_away_from_boundary() {
    let circle = support::reference_circle();
    let grid = BackgroundGrid::square(3.0, 21).unwrap();
    let forward = SignedDistanceField::compute(&circle, grid.clone()).unwrap();
    let backward = SignedDistanceField::compute(&circle.reversed().unwrap(), grid).unwrap();

    for ((f, b), p) in forward
        .values()
        .iter()
        .zip(backward.values())
        .zip(forward.grid().points())
    {
        if (p.coords.norm() - 2.0).abs() > 0.05 {
            assert!(support::approx_eq(*f, -*b, tolerance()), "at {p}");
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let (x, t) = msh2sdf::generate_circle(1.0, 200).unwrap();
    let first = compute_sdf(&x, &t, 2.0, 23).unwrap();
    let second = compute_sdf(&x, &t, 2.0, 23).unwrap();
    assert_eq!(first, second);
}

#[test]
fn well_formed_boundary_never_misses_an_edge() {
    let boundaries = [
        support::reference_circle(),
        support::square(1.0, 8),
        support::square(1.0, 100),
        support::square(3.0, 64),
        Boundary::circle(0.5, 3).unwrap(),
    ];
    for boundary in &boundaries {
        assert!(compute_field(boundary, GridSpec::new(4.0, 25)).is_ok());
    }
}

#[test]
fn square_interior_and_diagonals() {
    let square = support::square(1.0, 10);
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(0.3, -0.2),
        Point2::new(1.5, 1.5),
        Point2::new(-1.5, -1.5),
        Point2::new(-2.0, 2.0),
    ];
    let values = evaluate_points(&square, &points).unwrap();
    assert!(values[0] > 0.0);
    assert!(values[1] > 0.0);
    assert!(values[2] < 0.0);
    assert!(values[3] < 0.0);
    assert!(values[4] < 0.0);
    assert!(support::approx_eq(values[2], -(0.5 as Real).hypot(0.5), tolerance()));
}

#[test]
fn collinear_point_is_positive() {
    // (-1, 0) sits on the extension of edge 0 -> 1
    let boundary = Boundary::from_arrays(
        &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        &[[0, 1], [1, 2], [2, 0]],
    )
    .unwrap();
    let values = evaluate_points(&boundary, &[Point2::new(-1.0, 0.0)]).unwrap();
    assert_eq!(values, vec![1.0]);
}

#[test]
fn missing_outgoing_edge_fails_fast() {
    // vertex 3 is isolated: nearest for points around (5, 5)
    let err = compute_sdf(
        &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [5.0, 5.0]],
        &[[0, 1], [1, 2], [2, 0]],
        6.0,
        7,
    )
    .unwrap_err();
    assert_eq!(err, SdfError::MissingOutgoingEdge { vertex: 3 });
}

#[test]
fn empty_boundary_fails() {
    let err = compute_sdf(&[], &[], 1.0, 3).unwrap_err();
    assert_eq!(err, SdfError::EmptyBoundary);
}

#[test]
fn invalid_grid_fails_before_evaluation() {
    let (x, t) = msh2sdf::generate_circle(1.0, 16).unwrap();
    assert!(matches!(compute_sdf(&x, &t, 1.0, 0), Err(SdfError::InvalidGrid(_))));
    assert!(matches!(compute_sdf(&x, &t, -1.0, 4), Err(SdfError::InvalidGrid(_))));
}

#[test]
fn layouts_hold_the_same_field() {
    let circle = support::reference_circle();
    let shifted = compute_field(&circle, GridSpec::new(2.5, 9)).unwrap();
    let row_major = compute_field(
        &circle,
        GridSpec::new(2.5, 9).with_layout(GridLayout::RowMajor),
    )
    .unwrap();

    for row in 0..9 {
        for col in 0..9 {
            assert_eq!(shifted.value_at(row, col), row_major.value_at(row, col));
        }
    }
}

#[test]
fn sample_interpolates_between_nodes() {
    let circle = support::reference_circle();
    let field = compute_field(&circle, GridSpec::new(2.5, 11)).unwrap();
    let axis = field.grid().axis().to_vec();

    // exact at nodes
    let node = field.sample(&Point2::new(axis[3], axis[7])).unwrap();
    assert!(support::approx_eq(node, field.value_at(7, 3).unwrap(), tolerance()));

    // midpoint of a cell edge is the mean of its two nodes
    let mid = field
        .sample(&Point2::new(0.5 * (axis[3] + axis[4]), axis[7]))
        .unwrap();
    let mean = 0.5 * (field.value_at(7, 3).unwrap() + field.value_at(7, 4).unwrap());
    assert!(support::approx_eq(mid, mean, tolerance()));

    assert_eq!(field.sample(&Point2::new(2.6, 0.0)), None);
    assert!(field.sample(&Point2::new(2.5, 2.5)).is_some());
}

#[test]
fn field_extremes() {
    let circle = support::reference_circle();
    let field = compute_field(&circle, GridSpec::new(2.5, 5)).unwrap();
    assert!(support::approx_eq(field.max(), 2.0, tolerance()));
    assert!(support::approx_eq(field.min(), -1.5355, 1e-4));
}

#[test]
fn explicit_serial_strategy_matches_default() {
    let circle = support::reference_circle();
    let grid = BackgroundGrid::square(3.0, 33).unwrap();
    let default = SignedDistanceField::compute(&circle, grid.clone()).unwrap();
    let serial = SignedDistanceField::compute_with(&SerialSdfOps::new(), &circle, grid).unwrap();
    assert_eq!(default, serial);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_strategy_matches_serial() {
    use msh2sdf::sdf::ParallelSdfOps;

    let circle = support::reference_circle();
    let grid = BackgroundGrid::square(3.0, 64).unwrap();
    let serial = SignedDistanceField::compute_with(&SerialSdfOps::new(), &circle, grid.clone()).unwrap();
    let parallel =
        SignedDistanceField::compute_with(&ParallelSdfOps::with_min_chunk(7), &circle, grid).unwrap();
    assert_eq!(serial, parallel);
}
