//! Gradient-free training of small feed-forward networks.
//!
//! Parameters live in fixed-shape matrices, forward passes are plain
//! vector-matrix contractions, and optimization is (1+1) hill climbing:
//! perturb, re-score, keep the change only when fitness does not get worse.

mod activation;
pub mod data;
pub mod error;
pub mod f;
pub mod layers;
pub mod linalg;
mod loss;
pub mod mutation;
pub mod network;
pub mod optimizers;
pub mod util;

pub use activation::Activations;
pub use error::{MutantError, Result};
pub use layers::Dense;
pub use linalg::{FixedMatrix, FixedVector, Scalar};
pub use loss::Losses;
pub use mutation::{Mutations, Parameters};
pub use network::Network;
pub use optimizers::{HillClimb, Hyper};
