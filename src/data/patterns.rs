use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{MlpError, Result};
use crate::network::spec::NetworkSpec;

/// One training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Pattern {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Pattern { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Pattern {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Pattern { input, target }
    }
}

/// Fixed, ordered training set. Contents never change after loading; only
/// the order in which an epoch visits them does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Validates every pattern against `spec` before accepting any of them.
    pub fn load<I, P>(spec: &NetworkSpec, patterns: I) -> Result<PatternSet>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        let patterns: Vec<Pattern> = patterns.into_iter().map(Into::into).collect();

        for (idx, pattern) in patterns.iter().enumerate() {
            if pattern.input.len() != spec.input_units {
                return Err(MlpError::mismatch(
                    format!("input vector of pattern {idx}"),
                    spec.input_units,
                    pattern.input.len(),
                ));
            }
            if pattern.target.len() != spec.output_units {
                return Err(MlpError::mismatch(
                    format!("target vector of pattern {idx}"),
                    spec.output_units,
                    pattern.target.len(),
                ));
            }
            if !pattern.input.iter().chain(&pattern.target).all(|x| x.is_finite()) {
                return Err(MlpError::InvalidConfiguration(format!(
                    "pattern {idx} contains a non-finite value"
                )));
            }
        }

        Ok(PatternSet { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// A uniformly random permutation of `0..len()` (Fisher–Yates).
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.patterns.len()).collect();
        indices.shuffle(rng);
        indices
    }
}

impl std::ops::Index<usize> for PatternSet {
    type Output = Pattern;

    fn index(&self, index: usize) -> &Pattern {
        &self.patterns[index]
    }
}

/// The four-pattern XOR truth table.
pub fn xor_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(vec![0.0, 0.0], vec![0.0]),
        Pattern::new(vec![1.0, 0.0], vec![1.0]),
        Pattern::new(vec![0.0, 1.0], vec![1.0]),
        Pattern::new(vec![1.0, 1.0], vec![0.0]),
    ]
}
