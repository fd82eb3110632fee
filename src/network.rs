use crate::activation::Activations;
use crate::data::Sample;
use crate::f;
use crate::layers::Dense;
use crate::linalg::{FixedMatrix, FixedVector, Scalar};
use crate::loss::Losses;
use crate::mutation::Parameters;

pub type Web<T> = Vec<Dense<T>>;

/// A stack of dense layers, each followed by its own activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<T> {
    d_in: usize,
    web: Web<T>,
    activations: Vec<Activations>,
}

impl<T: Scalar> Network<T> {
    pub fn new(d_in: usize) -> Network<T> {
        Network {
            d_in,
            web: Web::new(),
            activations: vec![],
        }
    }

    /// Appends a zero-initialized layer of width `d_out`.
    pub fn dense(&mut self, d_out: usize, activation: Activations) -> &mut Self {
        let layer = Dense::new(self.d_out(), d_out);
        self.push(layer, activation)
    }

    #[track_caller]
    pub fn push(&mut self, layer: Dense<T>, activation: Activations) -> &mut Self {
        assert_eq!(
            layer.d_in(),
            self.d_out(),
            "layer expects {} inputs but the network produces {}",
            layer.d_in(),
            self.d_out()
        );

        self.web.push(layer);
        self.activations.push(activation);
        self
    }

    pub fn d_in(&self) -> usize {
        self.d_in
    }

    pub fn d_out(&self) -> usize {
        self.web.last().map(|l| l.d_out()).unwrap_or(self.d_in)
    }

    pub fn depth(&self) -> usize {
        self.web.len()
    }

    pub fn layers(&self) -> &[Dense<T>] {
        &self.web
    }

    #[track_caller]
    pub fn forward(&self, x: &FixedVector<T>) -> FixedVector<T> {
        let mut x = x.clone();
        for (layer, activation) in self.web.iter().zip(self.activations.iter()) {
            x = activation.apply(&layer.forward(&x));
        }
        x
    }

    pub fn classify(&self, x: &FixedVector<T>) -> usize {
        self.forward(x).argmax()
    }

    /// Mean of `loss` over `samples`; 0 for an empty set.
    pub fn fitness(&self, samples: &[Sample<T>], loss: Losses) -> f64 {
        if samples.is_empty() {
            return 0.;
        }

        let total = samples.iter().fold(T::zero(), |a, s| {
            a + loss.a(&self.forward(&s.input), &s.target)
        });

        total.to_f64().unwrap_or(f64::NAN) / samples.len() as f64
    }

    /// Percentage of samples whose predicted class matches the target's argmax.
    pub fn accuracy(&self, samples: &[Sample<T>]) -> f64 {
        let predicted = samples
            .iter()
            .map(|s| self.classify(&s.input))
            .collect::<Vec<usize>>();
        let actual = samples
            .iter()
            .map(|s| s.target.argmax())
            .collect::<Vec<usize>>();

        f::accuracy(&predicted, &actual)
    }
}

impl<T: Scalar> Parameters for Network<T> {
    type Elem = T;

    fn matrices(&self) -> usize {
        self.web.len()
    }

    fn matrix(&self, index: usize) -> &FixedMatrix<T> {
        self.web[index].weights()
    }

    fn matrix_mut(&mut self, index: usize) -> &mut FixedMatrix<T> {
        self.web[index].weights_mut()
    }
}
