use serde::{Deserialize, Serialize};

use crate::f;
use crate::linalg::{FixedVector, Scalar};

pub type ActivationFn<T> = fn(&FixedVector<T>) -> FixedVector<T>;

/// Elementwise transform applied after a dense layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activations {
    Tanh,
    Relu,
    FastSigmoid,
    Softmax,
    Identity,
}

impl Activations {
    pub fn wake<T: Scalar>(&self) -> ActivationFn<T> {
        match self {
            Activations::Tanh => f::tanh,
            Activations::Relu => f::relu,
            Activations::FastSigmoid => f::fast_sigmoid,
            Activations::Softmax => f::softmax,
            Activations::Identity => f::identity,
        }
    }

    pub fn apply<T: Scalar>(&self, x: &FixedVector<T>) -> FixedVector<T> {
        (self.wake())(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wake_dispatches() {
        let x = FixedVector::from(vec![-1., 2.]);
        assert_eq!(Activations::Relu.apply(&x).to_vec(), vec![0., 2.]);
        assert_eq!(Activations::Identity.apply(&x), x);
        assert_eq!(Activations::FastSigmoid.apply(&x).to_vec(), vec![-0.5, 2. / 3.]);
    }

    #[test]
    fn deserializes_by_name() {
        let a: Activations = serde_json::from_str("\"Softmax\"").unwrap();
        assert_eq!(a, Activations::Softmax);
    }
}
