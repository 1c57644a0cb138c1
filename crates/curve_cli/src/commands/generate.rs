//! Random input points.

use curve_core::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` points with integer coordinates in `[0, range)`.
///
/// The same `seed` always yields the same points; without one the generator
/// is seeded from the operating system. `range` must be non-zero.
pub fn random_points(count: usize, range: u32, seed: Option<u64>) -> Vec<Point<f64>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..range);
            let y = rng.gen_range(0..range);
            Point::new(f64::from(x), f64::from(y))
        })
        .collect()
}
