//! Property-based tests for the interpolation invariants.

use curve_core::io::point_io::{read_points, write_points};
use curve_core::math::interpolators::Interpolator;
use curve_core::types::Point;
use proptest::prelude::*;
use std::path::Path;

/// Points with strictly increasing x.
fn increasing_points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
    prop::collection::vec((0.1f64..10.0, -50.0f64..50.0), min..max).prop_map(|steps| {
        let mut x = -20.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                Point::new(x, y)
            })
            .collect()
    })
}

/// Points on a small integer grid, so repeated x and coincident points are common.
fn grid_points() -> impl Strategy<Value = Vec<Point<f64>>> {
    prop::collection::vec((0i32..5, 0i32..5), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_linear_shape_and_placement(points in increasing_points(2, 10), n in 0usize..8) {
        let mut interp = Interpolator::new(points.clone());
        let gaps = interp.linear(n).unwrap();

        prop_assert_eq!(gaps.len(), points.len() - 1);
        for (pair, gap) in points.windows(2).zip(gaps) {
            prop_assert_eq!(gap.len(), n);
            let mut previous = pair[0].x();
            for p in gap {
                prop_assert!(p.x() > previous);
                prop_assert!(p.x() < pair[1].x());
                previous = p.x();
            }
        }
    }

    #[test]
    fn test_spline_shape(points in increasing_points(3, 10), n in 0usize..8) {
        let mut interp = Interpolator::new(points.clone());
        let gaps = interp.spline(n).unwrap();

        prop_assert_eq!(gaps.len(), points.len() - 1);
        for (pair, gap) in points.windows(2).zip(gaps) {
            prop_assert_eq!(gap.len(), n);
            for p in gap {
                prop_assert!(p.is_finite());
                prop_assert!(p.x() > pair[0].x() && p.x() < pair[1].x());
            }
        }
    }

    #[test]
    fn test_degenerate_input_never_yields_nan(points in grid_points(), n in 0usize..5) {
        let mut interp = Interpolator::new(points);

        match interp.spline(n) {
            Ok(gaps) => prop_assert!(gaps.iter().flatten().all(Point::is_finite)),
            Err(_) => prop_assert!(interp.generated().is_empty()),
        }
        match interp.linear(n) {
            Ok(gaps) => prop_assert!(gaps.iter().flatten().all(Point::is_finite)),
            Err(_) => prop_assert!(interp.generated().is_empty()),
        }
    }

    #[test]
    fn test_sort_and_dedup_idempotent(points in grid_points()) {
        let mut once = Interpolator::new(points.clone());
        once.sort();
        once.remove_duplicate_x();

        let mut twice = Interpolator::new(points);
        for _ in 0..2 {
            twice.sort();
            twice.remove_duplicate_x();
        }

        prop_assert_eq!(once.points(), twice.points());
        prop_assert!(once.points().windows(2).all(|w| w[0].x() < w[1].x()));
    }

    #[test]
    fn test_text_round_trip(points in prop::collection::vec(
        (prop::num::f64::NORMAL, prop::num::f64::NORMAL), 0..20
    )) {
        let points: Vec<Point<f64>> = points.into_iter().map(Point::from).collect();
        let mut buffer = Vec::new();
        write_points(&points, &mut buffer).unwrap();

        let read: Vec<Point<f64>> = read_points(buffer.as_slice(), Path::new("mem")).unwrap();
        prop_assert_eq!(read, points);
    }

    #[test]
    fn test_vertical_segment_stays_vertical(
        x in -100.0f64..100.0,
        y0 in -100.0f64..100.0,
        height in 0.5f64..100.0,
        n in 1usize..10,
    ) {
        let mut interp = Interpolator::new(vec![Point::new(x, y0), Point::new(x, y0 + height)]);
        let gaps = interp.linear(n).unwrap();

        prop_assert_eq!(gaps[0].len(), n);
        let mut previous = y0;
        for p in &gaps[0] {
            prop_assert_eq!(p.x(), x);
            prop_assert!(p.y() > previous);
            previous = p.y();
        }
        prop_assert!(previous < y0 + height);
    }
}
