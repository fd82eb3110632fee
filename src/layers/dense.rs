use rand::Rng;

use crate::linalg::{FixedMatrix, FixedVector, Scalar};
use crate::mutation::Parameters;

/// Fully connected layer with its bias fused into the weight matrix.
///
/// The weights have `d_in + 1` rows: row `d_in` holds the bias and meets a
/// constant `1` appended to every input. No activation is applied here.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<T> {
    w: FixedMatrix<T>,
}

impl<T: Scalar> Dense<T> {
    pub fn new(d_in: usize, d_out: usize) -> Dense<T> {
        Dense {
            w: FixedMatrix::zeros(d_in + 1, d_out),
        }
    }

    /// Weights and bias drawn uniformly from `[-spread, spread)`.
    pub fn random_using<R: Rng + ?Sized>(
        d_in: usize,
        d_out: usize,
        spread: T,
        rng: &mut R,
    ) -> Dense<T> {
        Dense {
            w: FixedMatrix::random_using(d_in + 1, d_out, -spread, spread, rng),
        }
    }

    /// Wraps an existing `(d_in + 1) x d_out` matrix.
    #[track_caller]
    pub fn from_weights(w: FixedMatrix<T>) -> Dense<T> {
        assert!(w.rows() > 0, "dense weights need at least the bias row");
        Dense { w }
    }

    pub fn d_in(&self) -> usize {
        self.w.rows() - 1
    }

    pub fn d_out(&self) -> usize {
        self.w.cols()
    }

    pub fn weights(&self) -> &FixedMatrix<T> {
        &self.w
    }

    pub fn weights_mut(&mut self) -> &mut FixedMatrix<T> {
        &mut self.w
    }

    #[track_caller]
    pub fn forward(&self, x: &FixedVector<T>) -> FixedVector<T> {
        assert_eq!(
            x.len(),
            self.d_in(),
            "dense forward: input length {} does not match layer width {}",
            x.len(),
            self.d_in()
        );

        x.augmented(T::one()).dot(&self.w)
    }
}

impl<T: Scalar> Parameters for Dense<T> {
    type Elem = T;

    fn matrices(&self) -> usize {
        1
    }

    fn matrix(&self, index: usize) -> &FixedMatrix<T> {
        assert_eq!(index, 0, "dense layer has a single weight matrix");
        &self.w
    }

    fn matrix_mut(&mut self, index: usize) -> &mut FixedMatrix<T> {
        assert_eq!(index, 0, "dense layer has a single weight matrix");
        &mut self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::seeded;

    #[test]
    fn new_layer_has_bias_row() {
        let layer = Dense::<f64>::new(3, 2);
        assert_eq!(layer.weights().shape(), (4, 2));
        assert_eq!(layer.d_in(), 3);
        assert_eq!(layer.d_out(), 2);
        assert!(layer.weights().iter().all(|w| *w == 0.));
    }

    #[test]
    fn forward_appends_constant_one() {
        let w = FixedMatrix::from_rows(&[
            vec![1., 2.],
            vec![3., 4.],
            vec![5., 6.],
            vec![7., 8.],
        ]);
        let layer = Dense::from_weights(w.clone());
        let x = FixedVector::from(vec![0.5, -1., 2.]);

        let expected = FixedVector::from(vec![0.5, -1., 2., 1.]).dot(&w);
        assert_eq!(layer.forward(&x), expected);

        // 0.5*1 - 3 + 10 + 7, 0.5*2 - 4 + 12 + 8
        assert_eq!(layer.forward(&x).to_vec(), vec![14.5, 17.]);
    }

    #[test]
    fn zero_layer_outputs_zero() {
        let layer = Dense::<f32>::new(2, 3);
        let out = layer.forward(&FixedVector::from(vec![4., 5.]));
        assert_eq!(out.to_vec(), vec![0., 0., 0.]);
    }

    #[test]
    fn random_layer_within_spread() {
        let mut rng = seeded(1);
        let layer = Dense::<f64>::random_using(4, 4, 0.5, &mut rng);
        assert!(layer.weights().iter().all(|w| w.abs() <= 0.5));
    }

    #[test]
    fn clone_does_not_alias() {
        let live = Dense::<f64>::new(1, 1);
        let mut trial = live.clone();
        *trial.weights_mut().at_mut(1, 0) = 3.;
        assert_eq!(live.weights().at(1, 0), 0.);
    }

    #[test]
    #[should_panic(expected = "does not match layer width")]
    fn wrong_input_width_panics() {
        Dense::<f64>::new(3, 2).forward(&FixedVector::zeros(2));
    }
}
