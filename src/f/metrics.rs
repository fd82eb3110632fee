/// Percentage of positions where `prediction` matches `actual`.
pub fn accuracy<T: Copy + PartialEq>(prediction: &[T], actual: &[T]) -> f64 {
    let total = prediction.len().min(actual.len());
    if total == 0 {
        return 0.;
    }

    let correct = prediction
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    (correct as f64 / total as f64) * 100.
}
