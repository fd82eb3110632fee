use serde::{Deserialize, Serialize};

use crate::f;
use crate::linalg::{FixedVector, Scalar};

/// Per-sample error reductions available to fitness functions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Losses {
    SquaredError,
    MeanSquaredError,
}

impl Losses {
    #[track_caller]
    pub fn a<T: Scalar>(&self, pred: &FixedVector<T>, target: &FixedVector<T>) -> T {
        match self {
            Losses::SquaredError => f::squared_error(pred, target),
            Losses::MeanSquaredError => f::mean_squared_error(pred, target),
        }
    }
}
