/// Binary cross-entropy over independent sigmoid outputs.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Scalar loss for one pattern:
    ///   L = -Σ (t·ln(o + ε) + (1 - t)·ln(1 - o + ε))
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| -(t * (o + EPS).ln() + (1.0 - t) * (1.0 - o + EPS).ln()))
            .sum()
    }

    /// Error signal with respect to the output pre-activation sums.
    ///
    /// Composed with a sigmoid output the sigmoid derivative cancels and the
    /// delta is simply `target - output`, so the backward pass must not apply
    /// the output activation derivative on top of this.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| t - o)
            .collect()
    }
}
