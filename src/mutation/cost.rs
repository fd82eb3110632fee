use rand::Rng;

use super::operators::gaussian;
use super::Parameters;
use crate::linalg::{FixedMatrix, Scalar};

/// What a single cost-guided step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation<T, C> {
    pub slot: usize,
    pub row: usize,
    pub col: usize,
    pub delta: T,
    /// Cost before the cell was touched.
    pub before: C,
    /// Cost with the delta applied.
    pub after: C,
    /// `false` when the delta was reverted.
    pub kept: bool,
}

/// Single-cell greedy hill climb on one matrix.
///
/// Picks a cell uniformly (row and column independently), samples a
/// Gaussian delta, scores the matrix before and after adding it and puts the
/// cell back when the cost went strictly up. `cost` is called exactly twice
/// and must be deterministic in the matrix contents.
#[track_caller]
pub fn cost_guided_mutate<T, C, F, R>(
    rng: &mut R,
    matrix: &mut FixedMatrix<T>,
    cost: F,
    stddev: f64,
) -> Perturbation<T, C>
where
    T: Scalar,
    C: PartialOrd,
    F: FnMut(&FixedMatrix<T>) -> C,
    R: Rng + ?Sized,
{
    cost_guided_mutate_at(rng, matrix, 0, cost, stddev)
}

/// [`cost_guided_mutate`] on matrix `slot` of `params`, with `cost` observing
/// the whole parameter set. This lets the cost of one layer's change be
/// measured through the full network.
#[track_caller]
pub fn cost_guided_mutate_at<P, C, F, R>(
    rng: &mut R,
    params: &mut P,
    slot: usize,
    mut cost: F,
    stddev: f64,
) -> Perturbation<P::Elem, C>
where
    P: Parameters + ?Sized,
    C: PartialOrd,
    F: FnMut(&P) -> C,
    R: Rng + ?Sized,
{
    let (rows, cols) = params.matrix(slot).shape();
    assert!(
        rows > 0 && cols > 0,
        "cost-guided mutation on an empty {}x{} matrix",
        rows,
        cols
    );

    let row = rng.gen_range(0..rows);
    let col = rng.gen_range(0..cols);
    let delta: P::Elem = gaussian(rng, stddev);

    let before = cost(&*params);
    let original = params.matrix(slot).at(row, col);
    *params.matrix_mut(slot).at_mut(row, col) = original + delta;
    let after = cost(&*params);

    let kept = !(after > before);
    if !kept {
        *params.matrix_mut(slot).at_mut(row, col) = original;
    }

    Perturbation {
        slot,
        row,
        col,
        delta,
        before,
        after,
        kept,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::util::seeded;

    fn ramp() -> FixedMatrix<f64> {
        FixedMatrix::from_rows(&[vec![0.1, -0.2, 0.3], vec![1.5, 2.25, -7.]])
    }

    #[test]
    fn increasing_cost_always_reverts() {
        let mut rng = seeded(10);
        let mut m = ramp();
        let calls = Cell::new(0);

        for _ in 0..100 {
            let step = cost_guided_mutate(
                &mut rng,
                &mut m,
                |_| {
                    calls.set(calls.get() + 1);
                    calls.get()
                },
                0.5,
            );
            assert!(!step.kept);
        }

        let before = ramp().iter().map(|v| v.to_bits()).collect::<Vec<u64>>();
        let after = m.iter().map(|v| v.to_bits()).collect::<Vec<u64>>();
        assert_eq!(before, after);
        assert_eq!(calls.get(), 200);
    }

    #[test]
    fn decreasing_cost_keeps_exact_delta() {
        let mut rng = seeded(11);
        let mut m = ramp();
        let countdown = Cell::new(0i64);

        let step = cost_guided_mutate(
            &mut rng,
            &mut m,
            |_| {
                countdown.set(countdown.get() - 1);
                countdown.get()
            },
            0.5,
        );

        assert!(step.kept);
        assert_eq!(m.at(step.row, step.col), ramp().at(step.row, step.col) + step.delta);

        for r in 0..m.rows() {
            for c in 0..m.cols() {
                if (r, c) != (step.row, step.col) {
                    assert_eq!(m.at(r, c), ramp().at(r, c));
                }
            }
        }
    }

    #[test]
    fn equal_cost_is_kept() {
        let mut rng = seeded(12);
        let mut m = FixedMatrix::<f64>::zeros(2, 2);
        let step = cost_guided_mutate(&mut rng, &mut m, |_| 1.0, 1.);
        assert!(step.kept);
        assert_eq!(m.at(step.row, step.col), step.delta);
    }

    #[test]
    fn cost_sees_the_perturbed_matrix() {
        let mut rng = seeded(13);
        let mut m = FixedMatrix::<f64>::zeros(3, 3);
        // Cost is the distance of the cell sum from 1: moving toward 1 is kept.
        let step = cost_guided_mutate(&mut rng, &mut m, |m| (m.iter().sum::<f64>() - 1.).abs(), 0.3);

        assert_eq!(step.before, 1.);
        assert_eq!(step.kept, step.after <= 1.);
        if step.kept {
            assert_eq!(m.iter().sum::<f64>(), step.delta);
        } else {
            assert!(m.iter().all(|v| *v == 0.));
        }
    }

    #[test]
    fn repeated_steps_never_raise_cost() {
        let mut rng = seeded(14);
        let mut m = FixedMatrix::<f64>::zeros(2, 3);
        let target = ramp();
        let cost = |m: &FixedMatrix<f64>| {
            m.iter()
                .zip(target.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
        };

        let mut last = cost(&m);
        for _ in 0..500 {
            cost_guided_mutate(&mut rng, &mut m, cost, 0.5);
            let now = cost(&m);
            assert!(now <= last);
            last = now;
        }
        assert!(last < cost(&FixedMatrix::zeros(2, 3)));
    }
}
