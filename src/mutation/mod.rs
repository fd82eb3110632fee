//! Randomized perturbation of parameter matrices.
//!
//! Every operator mutates a [`FixedMatrix`] in place. Callers that may want
//! to reject a mutation clone the parameters first; the cost-guided operator
//! instead undoes its own single-cell change when the cost gets worse.

mod cost;
mod operators;

use serde::{Deserialize, Serialize};

use crate::error::{MutantError, Result};
use crate::linalg::{FixedMatrix, Scalar};

pub use cost::{cost_guided_mutate, cost_guided_mutate_at, Perturbation};
pub use operators::{gaussian_mutate_all, gaussian_mutate_some, reset_mutate, RESET_RANGE};

/// Anything made of weight matrices that the operators can reach.
pub trait Parameters {
    type Elem: Scalar;

    fn matrices(&self) -> usize;
    fn matrix(&self, index: usize) -> &FixedMatrix<Self::Elem>;
    fn matrix_mut(&mut self, index: usize) -> &mut FixedMatrix<Self::Elem>;
}

impl<T: Scalar> Parameters for FixedMatrix<T> {
    type Elem = T;

    fn matrices(&self) -> usize {
        1
    }

    fn matrix(&self, index: usize) -> &FixedMatrix<T> {
        assert_eq!(index, 0, "a bare matrix has a single slot");
        self
    }

    fn matrix_mut(&mut self, index: usize) -> &mut FixedMatrix<T> {
        assert_eq!(index, 0, "a bare matrix has a single slot");
        self
    }
}

/// Operator selection, as it appears in hyperparameter files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Mutations {
    /// Replace cells with fresh uniform values from [`RESET_RANGE`].
    Reset { rate: f64 },
    /// Gaussian noise on every cell.
    Gaussian { stddev: f64 },
    /// Gaussian noise on each cell with probability `rate`.
    GaussianSome { rate: f64, stddev: f64 },
    /// Single-cell hill climb against the fitness function.
    CostGuided { stddev: f64 },
}

impl Mutations {
    pub fn is_cost_guided(&self) -> bool {
        matches!(self, Mutations::CostGuided { .. })
    }

    /// Applies a clone-based operator to every matrix of `params`.
    ///
    /// `CostGuided` needs a cost function and is driven through
    /// [`cost_guided_mutate_at`]; here it is rejected without touching `params`.
    pub fn mutate<P, R>(&self, rng: &mut R, params: &mut P) -> Result<()>
    where
        P: Parameters + ?Sized,
        R: rand::Rng + ?Sized,
    {
        if self.is_cost_guided() {
            return Err(MutantError::InvalidHyper {
                name: "mutation",
                reason: "cost-guided mutation needs a cost function, use cost_guided_mutate_at"
                    .to_string(),
            });
        }

        for slot in 0..params.matrices() {
            let matrix = params.matrix_mut(slot);
            match *self {
                Mutations::Reset { rate } => reset_mutate(rng, matrix, rate),
                Mutations::Gaussian { stddev } => gaussian_mutate_all(rng, matrix, stddev),
                Mutations::GaussianSome { rate, stddev } => {
                    gaussian_mutate_some(rng, matrix, rate, stddev)
                }
                Mutations::CostGuided { .. } => (),
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Mutations::Reset { rate } => check_rate(rate),
            Mutations::Gaussian { stddev } | Mutations::CostGuided { stddev } => {
                check_stddev(stddev)
            }
            Mutations::GaussianSome { rate, stddev } => {
                check_rate(rate)?;
                check_stddev(stddev)
            }
        }
    }
}

fn check_rate(rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        return Ok(());
    }

    Err(MutantError::InvalidHyper {
        name: "rate",
        reason: format!("{} is not a probability", rate),
    })
}

fn check_stddev(stddev: f64) -> Result<()> {
    if stddev.is_finite() && stddev >= 0. {
        return Ok(());
    }

    Err(MutantError::InvalidHyper {
        name: "stddev",
        reason: format!("{} is not a finite non-negative deviation", stddev),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::seeded;

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Mutations::Reset { rate: 0.05 }.validate().is_ok());
        assert!(Mutations::Reset { rate: 1.5 }.validate().is_err());
        assert!(Mutations::Gaussian { stddev: -0.1 }.validate().is_err());
        assert!(Mutations::CostGuided { stddev: f64::NAN }.validate().is_err());
        assert!(Mutations::GaussianSome { rate: -0.1, stddev: 1. }
            .validate()
            .is_err());
    }

    #[test]
    fn mutate_reaches_every_slot() {
        let mut rng = seeded(21);
        let mut m = FixedMatrix::<f64>::zeros(3, 3);
        Mutations::Reset { rate: 1. }.mutate(&mut rng, &mut m).unwrap();
        assert!(m.iter().all(|v| *v != 0.));
    }

    #[test]
    fn cost_guided_through_mutate_is_rejected() {
        let mut rng = seeded(21);
        let mut m = FixedMatrix::from_rows(&[vec![0.5]]);
        let e = Mutations::CostGuided { stddev: 1. }
            .mutate(&mut rng, &mut m)
            .unwrap_err();

        assert!(matches!(e, MutantError::InvalidHyper { name: "mutation", .. }));
        assert_eq!(m.at(0, 0), 0.5);
    }

    #[test]
    fn round_trips_through_json() {
        let m: Mutations = serde_json::from_str(r#"{"GaussianSome":{"rate":0.1,"stddev":0.01}}"#)
            .unwrap();
        assert_eq!(
            m,
            Mutations::GaussianSome {
                rate: 0.1,
                stddev: 0.01
            }
        );
    }
}
