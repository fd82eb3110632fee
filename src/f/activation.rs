use crate::linalg::{FixedVector, Scalar};

pub fn tanh<T: Scalar>(x: &FixedVector<T>) -> FixedVector<T> {
    x.map(|v| v.tanh())
}

pub fn relu<T: Scalar>(x: &FixedVector<T>) -> FixedVector<T> {
    x.map(|v| if v > T::zero() { v } else { T::zero() })
}

/// `x / (1 + |x|)`, a cheap sigmoid-shaped squash into `(-1, 1)`.
pub fn fast_sigmoid<T: Scalar>(x: &FixedVector<T>) -> FixedVector<T> {
    x.map(|v| v / (T::one() + v.abs()))
}

/// Naive softmax.
///
/// The maximum is not subtracted before exponentiating, so large inputs
/// overflow to `inf` and the result turns into `NaN`.
pub fn softmax<T: Scalar>(x: &FixedVector<T>) -> FixedVector<T> {
    let sum = x.iter().fold(T::zero(), |a, v| a + v.exp());
    x.map(|v| v.exp() / sum)
}

pub fn identity<T: Scalar>(x: &FixedVector<T>) -> FixedVector<T> {
    x.clone()
}
