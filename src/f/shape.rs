use crate::linalg::{FixedVector, Scalar};

/// One-hot vector of length `size` with a 1 at `i`; all zeros if `i` is out of range.
pub fn onehot<T: Scalar>(i: usize, size: usize) -> FixedVector<T> {
    let mut oh = FixedVector::zeros(size);
    if let Some(v) = oh.get_mut(i) {
        *v = T::one();
    }
    oh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onehot_sets_single_slot() {
        assert_eq!(onehot::<f64>(1, 3).to_vec(), vec![0., 1., 0.]);
        assert_eq!(onehot::<f64>(3, 3).to_vec(), vec![0., 0., 0.]);
    }
}
