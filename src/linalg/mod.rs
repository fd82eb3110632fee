mod matrix;
mod vector;

use ndarray::NdFloat;
use rand::distributions::uniform::SampleUniform;

pub use matrix::FixedMatrix;
pub use vector::FixedVector;

/// Floating point element type of every container in the engine.
pub trait Scalar: NdFloat + SampleUniform {}

impl<T> Scalar for T where T: NdFloat + SampleUniform {}
