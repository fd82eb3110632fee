use ndarray_rand::rand_distr::StandardNormal;
use rand::Rng;

use crate::linalg::{FixedMatrix, Scalar};
use crate::util::random_range;

/// Range that [`reset_mutate`] draws replacement values from.
pub const RESET_RANGE: (f64, f64) = (-10., 10.);

/// Zero-mean Gaussian sample with the given deviation, drawn in `f64`.
pub(crate) fn gaussian<T: Scalar, R: Rng + ?Sized>(rng: &mut R, stddev: f64) -> T {
    let z: f64 = rng.sample(StandardNormal);
    T::from(z * stddev).unwrap_or_else(T::zero)
}

fn chosen<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> bool {
    rng.gen::<f64>() < rate
}

/// Each cell is replaced, with probability `rate`, by a uniform draw from
/// [`RESET_RANGE`]. Destructive: the old value is discarded.
pub fn reset_mutate<T: Scalar, R: Rng + ?Sized>(rng: &mut R, matrix: &mut FixedMatrix<T>, rate: f64) {
    let lo = T::from(RESET_RANGE.0).unwrap_or_else(T::zero);
    let hi = T::from(RESET_RANGE.1).unwrap_or_else(T::zero);

    for cell in matrix.iter_mut() {
        if chosen(rng, rate) {
            *cell = random_range(rng, lo, hi);
        }
    }
}

/// Adds independent `N(0, stddev²)` noise to every cell.
pub fn gaussian_mutate_all<T: Scalar, R: Rng + ?Sized>(
    rng: &mut R,
    matrix: &mut FixedMatrix<T>,
    stddev: f64,
) {
    for cell in matrix.iter_mut() {
        *cell += gaussian(rng, stddev);
    }
}

/// Adds `N(0, stddev²)` noise to each cell with independent probability `rate`.
pub fn gaussian_mutate_some<T: Scalar, R: Rng + ?Sized>(
    rng: &mut R,
    matrix: &mut FixedMatrix<T>,
    rate: f64,
    stddev: f64,
) {
    for cell in matrix.iter_mut() {
        if chosen(rng, rate) {
            *cell += gaussian(rng, stddev);
        }
    }
}
