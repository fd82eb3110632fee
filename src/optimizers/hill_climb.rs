use std::path::Path;

use plotly::{Plot, Scatter};
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::Hyper;
use crate::error::Result;
use crate::mutation::{cost_guided_mutate_at, Mutations, Parameters};

/// (1+1) hill climbing over a parameter set.
///
/// Clone-based operators mutate a copy of every matrix and the copy replaces
/// the live parameters only when its fitness is no worse. The cost-guided
/// operator works on the live parameters directly, one cell per matrix per
/// generation, and reverts its own bad moves.
pub struct HillClimb<'a, P, F, R> {
    params: &'a mut P,
    fitness: F,
    rng: R,
    hyper: Hyper,
    early_terminate: Box<dyn Fn(&[f64]) -> bool + 'a>,
    verbose: bool,
    best: Option<f64>,
    accepted: usize,
    /// Best score after each generation of the last `train` call.
    pub scores: Vec<f64>,
}

impl<'a, P, F, R> HillClimb<'a, P, F, R>
where
    P: Parameters + Clone,
    F: FnMut(&P) -> f64,
    R: Rng + SeedableRng,
{
    pub fn new(params: &'a mut P, fitness: F, rng: R) -> HillClimb<'a, P, F, R> {
        HillClimb {
            params,
            fitness,
            rng,
            hyper: Hyper::new(),
            early_terminate: Box::new(|_| false),
            verbose: false,
            best: None,
            accepted: 0,
            scores: vec![],
        }
    }

    /// Replaces every setting. A `seed` in `hyper` also reseeds the generator.
    pub fn override_hyper(&mut self, hyper: Hyper) -> &mut Self {
        if let Some(seed) = hyper.seed {
            self.rng = R::seed_from_u64(seed);
        }
        self.hyper = hyper;
        self
    }

    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.rng = R::seed_from_u64(seed);
        self.hyper.seed = Some(seed);
        self
    }

    pub fn verbose(&mut self) -> &mut Self {
        self.verbose = true;
        self
    }

    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.hyper.iterations = iterations;
        self
    }

    pub fn set_threshold(&mut self, threshold: f64) -> &mut Self {
        self.hyper.threshold = Some(threshold);
        self
    }

    pub fn set_mutation(&mut self, mutation: Mutations) -> &mut Self {
        self.hyper.mutation = mutation;
        self
    }

    pub fn set_log_every(&mut self, log_every: usize) -> &mut Self {
        self.hyper.log_every = log_every;
        self
    }

    /// Stops training when `early_terminate` returns true for the score history.
    pub fn until_some(&mut self, early_terminate: impl Fn(&[f64]) -> bool + 'a) -> &mut Self {
        self.early_terminate = Box::new(early_terminate);
        self
    }

    /// Best fitness seen by the last `train` call.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Accepted trials, or kept cells for the cost-guided operator.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Runs one training session.
    ///
    /// The settings are validated first; an invalid rate or deviation fails
    /// before the parameters are scored. `scores` and `accepted` start over.
    pub fn train(&mut self) -> Result<&mut Self> {
        self.hyper.validate()?;

        self.scores.clear();
        self.accepted = 0;

        let mut best = (self.fitness)(&*self.params);
        let mut generations = 0;

        if self.verbose {
            info!(score = best, mutation = ?self.hyper.mutation, "hill climb start");
        }

        for generation in 0..self.hyper.iterations {
            if self.hyper.threshold.map_or(false, |t| best <= t) {
                debug!(generation, score = best, "threshold reached");
                break;
            }

            if (self.early_terminate)(&self.scores) {
                if self.verbose {
                    info!(generation, "early termination condition met");
                }
                break;
            }

            match self.hyper.mutation {
                Mutations::CostGuided { stddev } => {
                    for slot in 0..self.params.matrices() {
                        let step = cost_guided_mutate_at(
                            &mut self.rng,
                            &mut *self.params,
                            slot,
                            &mut self.fitness,
                            stddev,
                        );
                        if step.kept {
                            self.accepted += 1;
                        }
                    }

                    best = (self.fitness)(&*self.params);
                }
                mutation => {
                    let mut trial = self.params.clone();
                    mutation.mutate(&mut self.rng, &mut trial)?;

                    let score = (self.fitness)(&trial);
                    if score <= best {
                        *self.params = trial;
                        best = score;
                        self.accepted += 1;
                    }
                }
            }

            self.scores.push(best);
            generations += 1;

            let log_every = self.hyper.log_every;
            if self.verbose && log_every > 0 && generation % log_every == 0 {
                info!(generation, score = best, accepted = self.accepted, "hill climb");
            } else {
                trace!(generation, score = best);
            }
        }

        self.best = Some(best);
        debug!(generations, score = best, accepted = self.accepted, "hill climb done");

        Ok(self)
    }

    /// Writes a line chart of the score history to an HTML file.
    pub fn score_graph(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let mut plot = Plot::new();

        let x = (0..self.scores.len()).collect::<Vec<usize>>();
        let trace = Scatter::new(x, self.scores.clone());
        plot.add_trace(trace);
        plot.write_html(path.as_ref());

        self
    }
}
