//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths
//! and work together along the load → interpolate → dump flow.

use approx::assert_relative_eq;

/// Test that the geometric types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use curve_core::types::error::CurveError;
    use curve_core::types::line::Line;
    use curve_core::types::point::Point;
    use curve_core::types::{Degeneracy, ErrorKind};

    let line = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
    assert_relative_eq!(line.slope().unwrap(), 0.5);

    let err = CurveError::degenerate(0, Degeneracy::VerticalLine);
    assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
}

/// Test that the interpolators module is accessible via absolute path.
#[test]
fn test_interpolators_module_exports() {
    use curve_core::math::interpolators::{interleave, GapMatrix, Interpolator, Method};
    use curve_core::types::Point;

    let mut interp = Interpolator::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
    ]);
    let gaps: GapMatrix<f64> = interp.run(Method::Spline, 2).unwrap().to_vec();
    assert_eq!(interleave(interp.points(), &gaps).len(), 3 + 2 * 2);
}

/// Test the full file round trip used by the command-line driver.
#[test]
fn test_load_interpolate_dump_flow() {
    use curve_core::io::{dump, dump_with_interpolated, load};
    use curve_core::math::interpolators::{Interpolator, Method};
    use curve_core::types::Point;

    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("points.txt");
    std::fs::write(&source, "3,1\n0,0\n1.5 -2\n5;4\n").unwrap();

    let points: Vec<Point<f64>> = load(&source).unwrap();
    assert_eq!(points.len(), 4);

    let mut interp = Interpolator::new(points);
    interp.run(Method::Spline, 3).unwrap();
    assert_eq!(interp.generated().len(), 3);

    let out = dir.path().join("out");
    dump(interp.points(), out.join("input.dat")).unwrap();
    dump_with_interpolated(interp.points(), interp.generated(), out.join("interpolation.dat"))
        .unwrap();

    let inputs: Vec<Point<f64>> = load(out.join("input.dat")).unwrap();
    let curve: Vec<Point<f64>> = load(out.join("interpolation.dat")).unwrap();
    assert_eq!(inputs, interp.points());
    assert_eq!(curve, interp.interleaved());
    assert_eq!(curve.len(), 4 + 3 * 3);
}

/// Round trip through the file format with integer-valued coordinates is exact.
#[test]
fn test_integer_round_trip_is_exact() {
    use curve_core::io::{dump, load};
    use curve_core::types::Point;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ints.dat");
    let points: Vec<Point<f64>> = (0..10)
        .map(|i| Point::new(i as f64, (i * i) as f64 - 7.0))
        .collect();

    dump(&points, &path).unwrap();
    assert_eq!(load::<f64>(&path).unwrap(), points);
}
