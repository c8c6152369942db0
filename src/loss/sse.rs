/// Sum-of-squared-error: `0.5 · Σ (target - output)²`.
pub struct SseLoss;

impl SseLoss {
    /// Scalar SSE for one pattern.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| 0.5 * (t - o) * (t - o))
            .sum()
    }

    /// Per-output error signal `target - output`, the negative gradient of
    /// the loss with respect to each output.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| t - o)
            .collect()
    }
}
