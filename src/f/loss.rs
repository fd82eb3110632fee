use crate::linalg::{FixedVector, Scalar};

/// `|target - pred|²`, the per-sample error used by classification fitness.
#[track_caller]
pub fn squared_error<T: Scalar>(pred: &FixedVector<T>, target: &FixedVector<T>) -> T {
    (target - pred).magnitude_squared()
}

/// Squared error averaged over the vector's components.
#[track_caller]
pub fn mean_squared_error<T: Scalar>(pred: &FixedVector<T>, target: &FixedVector<T>) -> T {
    let len = pred.len();
    if len == 0 {
        return T::zero();
    }

    squared_error(pred, target) / T::from(len).unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_error_sums_components() {
        let pred = FixedVector::from(vec![0., 1., 0.5]);
        let target = FixedVector::from(vec![1., 1., 0.]);
        assert_eq!(squared_error(&pred, &target), 1.25);
    }

    #[test]
    fn mean_squared_error_divides_by_len() {
        let pred = FixedVector::from(vec![0., 0.]);
        let target = FixedVector::from(vec![1., 1.]);
        assert_eq!(mean_squared_error(&pred, &target), 1.);
    }
}
