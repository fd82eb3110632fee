use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MutantError, Result};
use crate::mutation::Mutations;
use crate::util::{entropy, seeded};

/// Training hyperparameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Hyper {
    /// Generation budget.
    pub iterations: usize,
    /// Stop once the best score is at or below this.
    pub threshold: Option<f64>,
    pub mutation: Mutations,
    /// Progress is logged every this many generations when verbose; 0 disables.
    pub log_every: usize,
    /// Seed for a reproducible run; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Hyper {
    pub fn new() -> Hyper {
        Hyper {
            iterations: 1000,
            threshold: None,
            mutation: Mutations::Reset { rate: 0.05 },
            log_every: 100,
            seed: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Hyper> {
        let hyper: Hyper = serde_json::from_str(json)?;
        hyper.validate()?;
        Ok(hyper)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Hyper> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MutantError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Hyper::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.threshold {
            if t.is_nan() {
                return Err(MutantError::InvalidHyper {
                    name: "threshold",
                    reason: "NaN never compares".to_string(),
                });
            }
        }

        self.mutation.validate()
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => seeded(seed),
            None => entropy(),
        }
    }
}

impl Default for Hyper {
    fn default() -> Self {
        Hyper::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let h = Hyper::from_json(r#"{"iterations": 50}"#).unwrap();
        assert_eq!(h.iterations, 50);
        assert_eq!(h.mutation, Hyper::new().mutation);
        assert_eq!(h.threshold, None);
    }

    #[test]
    fn full_config_parses() {
        let h = Hyper::from_json(
            r#"{
                "iterations": 10,
                "threshold": 0.15,
                "mutation": {"CostGuided": {"stddev": 0.001}},
                "log_every": 10,
                "seed": 7
            }"#,
        )
        .unwrap();

        assert_eq!(h.threshold, Some(0.15));
        assert!(h.mutation.is_cost_guided());
        assert_eq!(h.rng().next_u64(), seeded(7).next_u64());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let e = Hyper::from_json(r#"{"mutation": {"Reset": {"rate": 2.0}}}"#).unwrap_err();
        assert!(matches!(e, MutantError::InvalidHyper { name: "rate", .. }));

        let e = Hyper::from_json(r#"{"iterations": "many"}"#).unwrap_err();
        assert!(matches!(e, MutantError::Config(_)));
    }

    #[test]
    fn load_reads_a_json_file() {
        let path = std::env::temp_dir().join(format!("mutant-hyper-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"iterations": 25, "mutation": {"Gaussian": {"stddev": 0.2}}, "seed": 3}"#,
        )
        .unwrap();

        let h = Hyper::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(h.iterations, 25);
        assert_eq!(h.mutation, Mutations::Gaussian { stddev: 0.2 });
        assert_eq!(h.seed, Some(3));
        assert_eq!(h.log_every, Hyper::new().log_every);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("mutant-hyper-does-not-exist.json");
        let e = Hyper::load(&path).unwrap_err();
        assert!(matches!(&e, MutantError::Io { path: p, .. } if *p == path));
    }
}
