use serde::{Serialize, Deserialize};

use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::sse::SseLoss;

/// Selects the error function the epoch accumulator sums.
///
/// - `Sse`         : `0.5 · Σ (t - o)²`; works with sigmoid or linear outputs.
/// - `CrossEntropy`: binary cross-entropy; requires a sigmoid output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Sse,
    CrossEntropy,
}

impl LossType {
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Sse          => SseLoss::loss(predicted, expected),
            LossType::CrossEntropy => CrossEntropyLoss::loss(predicted, expected),
        }
    }

    pub fn error_signal(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::Sse          => SseLoss::derivative(predicted, expected),
            LossType::CrossEntropy => CrossEntropyLoss::derivative(predicted, expected),
        }
    }
}
