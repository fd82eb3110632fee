//! Loading labelled samples from comma-separated text.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MutantError, Result};
use crate::f::onehot;
use crate::linalg::{FixedVector, Scalar};

/// One input/target pair handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    pub input: FixedVector<T>,
    pub target: FixedVector<T>,
}

impl<T: Scalar> Sample<T> {
    pub fn new(input: impl Into<FixedVector<T>>, target: impl Into<FixedVector<T>>) -> Sample<T> {
        Sample {
            input: input.into(),
            target: target.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    First,
    Last,
}

/// Layout of a record: `features` numeric columns plus one class label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Schema {
    pub features: usize,
    pub label: Label,
    /// Label spellings; a label's position is its one-hot index.
    pub classes: Vec<String>,
    /// Every feature is divided by this.
    pub scale: f64,
}

impl Schema {
    pub fn new(features: usize, label: Label, classes: &[&str]) -> Schema {
        Schema {
            features,
            label,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            scale: 1.,
        }
    }

    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }
}

/// Parses one record. Blank lines yield `Ok(None)`.
///
/// Errors carry `line` 0; [`load`] fills in the real position.
pub fn parse_record<T: Scalar>(line: &str, schema: &Schema) -> Result<Option<Sample<T>>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields = line.split(',').map(str::trim).collect::<Vec<&str>>();
    if fields.len() != schema.features + 1 {
        return Err(MutantError::Record {
            line: 0,
            reason: format!(
                "expected {} fields, found {}",
                schema.features + 1,
                fields.len()
            ),
        });
    }

    let (label, features) = match schema.label {
        Label::First => (fields[0], &fields[1..]),
        Label::Last => (fields[fields.len() - 1], &fields[..fields.len() - 1]),
    };

    let class = schema
        .classes
        .iter()
        .position(|c| c == label)
        .ok_or_else(|| MutantError::UnknownLabel(label.to_string()))?;

    let mut input = FixedVector::zeros(schema.features);
    for (i, field) in features.iter().enumerate() {
        let value = field.parse::<f64>().map_err(|e| MutantError::Record {
            line: 0,
            reason: format!("feature {} ({:?}): {}", i, field, e),
        })?;
        input[i] = T::from(value / schema.scale).unwrap_or_else(T::nan);
    }

    Ok(Some(Sample {
        input,
        target: onehot(class, schema.classes.len()),
    }))
}

/// Reads every record of the file at `path`.
pub fn load<T: Scalar>(path: impl AsRef<Path>, schema: &Schema) -> Result<Vec<Sample<T>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MutantError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = parse_lines(&text, schema)?;
    debug!(path = %path.display(), samples = samples.len(), "loaded dataset");

    Ok(samples)
}

/// Parses newline separated records, reporting the 1-based line of a failure.
pub fn parse_lines<T: Scalar>(text: &str, schema: &Schema) -> Result<Vec<Sample<T>>> {
    let mut samples = vec![];

    for (i, line) in text.lines().enumerate() {
        match parse_record(line, schema) {
            Ok(Some(sample)) => samples.push(sample),
            Ok(None) => (),
            Err(MutantError::Record { reason, .. }) => {
                return Err(MutantError::Record { line: i + 1, reason })
            }
            Err(MutantError::UnknownLabel(label)) => {
                return Err(MutantError::Record {
                    line: i + 1,
                    reason: format!("unknown class label {:?}", label),
                })
            }
            Err(e) => return Err(e),
        }
    }

    Ok(samples)
}

/// Splits at `ratio` of the length: the head trains, the tail tests.
pub fn split<T>(mut samples: Vec<Sample<T>>, ratio: f64) -> (Vec<Sample<T>>, Vec<Sample<T>>) {
    let at = ((samples.len() as f64) * ratio.clamp(0., 1.)) as usize;
    let test = samples.split_off(at);
    (samples, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iris() -> Schema {
        Schema::new(
            4,
            Label::Last,
            &["Iris-setosa", "Iris-versicolor", "Iris-virginica"],
        )
    }

    #[test]
    fn parses_trailing_label() {
        let s: Sample<f64> = parse_record("5.1,3.5,1.4,0.2,Iris-versicolor", &iris())
            .unwrap()
            .unwrap();
        assert_eq!(s.input.to_vec(), vec![5.1, 3.5, 1.4, 0.2]);
        assert_eq!(s.target.to_vec(), vec![0., 1., 0.]);
    }

    #[test]
    fn parses_leading_label_with_scale() {
        let mut schema = Schema::new(4, Label::First, &["B", "L", "R"]);
        schema.set_scale(10.);

        let s: Sample<f64> = parse_record("R,1,2,3,5", &schema).unwrap().unwrap();
        assert_eq!(s.input.to_vec(), vec![0.1, 0.2, 0.3, 0.5]);
        assert_eq!(s.target.argmax(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_record::<f64>("   ", &iris()).unwrap().is_none());
    }

    #[test]
    fn unknown_label_is_an_error() {
        let e = parse_record::<f64>("1,2,3,4,Iris-nope", &iris()).unwrap_err();
        assert!(matches!(e, MutantError::UnknownLabel(l) if l == "Iris-nope"));
    }

    #[test]
    fn bad_feature_reports_line() {
        let text = "1,2,3,4,Iris-setosa\n\n1,x,3,4,Iris-setosa\n";
        let e = parse_lines::<f64>(text, &iris()).unwrap_err();
        assert!(matches!(e, MutantError::Record { line: 3, .. }), "{}", e);
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        let e = parse_record::<f64>("1,2,Iris-setosa", &iris()).unwrap_err();
        assert!(e.to_string().contains("expected 5 fields, found 3"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let e = load::<f64>("/nonexistent/mutant/iris.data", &iris()).unwrap_err();
        assert!(matches!(e, MutantError::Io { .. }));
    }

    #[test]
    fn split_by_ratio() {
        let samples = (0..10)
            .map(|i| Sample::new(vec![i as f64], vec![1.]))
            .collect::<Vec<Sample<f64>>>();
        let (train, test) = split(samples, 0.9);
        assert_eq!(train.len(), 9);
        assert_eq!(test.len(), 1);
        assert_eq!(test[0].input.at(0), 9.);
    }
}
