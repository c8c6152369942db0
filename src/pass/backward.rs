use crate::loss::LossType;
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;
use crate::pass::forward::ForwardPass;

/// Error deltas for one pattern, taken with respect to each unit's
/// pre-activation sum and signed so that adding them descends the loss.
#[derive(Debug, Clone, PartialEq)]
pub struct BackwardPass {
    pub output_deltas: Vec<f64>,
    pub hidden_deltas: Vec<f64>,
}

impl BackwardPass {
    /// `weights_ho` must be the weights the forward pass was computed with.
    pub fn compute(
        spec: &NetworkSpec,
        weights_ho: &Matrix,
        forward: &ForwardPass,
        target: &[f64],
        loss: LossType,
    ) -> BackwardPass {
        let error = loss.error_signal(&forward.output, target);

        let output_deltas: Vec<f64> = match loss {
            LossType::Sse => error
                .iter()
                .zip(&forward.output)
                .map(|(e, &o)| e * spec.output_activation.derivative(o))
                .collect(),
            // Sigmoid + cross-entropy: the derivative term cancels.
            LossType::CrossEntropy => error,
        };

        let hidden_deltas = forward
            .hidden
            .iter()
            .enumerate()
            .map(|(h, &activation)| {
                let mut sum_dow = 0.0;
                for (o, delta) in output_deltas.iter().enumerate() {
                    sum_dow += weights_ho.data[h + 1][o] * delta;
                }
                sum_dow * spec.hidden_activation.derivative(activation)
            })
            .collect();

        BackwardPass {
            output_deltas,
            hidden_deltas,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.output_deltas
            .iter()
            .chain(&self.hidden_deltas)
            .all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::{ActivationFunction, OutputActivation};
    use approx::assert_abs_diff_eq;

    fn forward(output: f64, hidden: f64) -> ForwardPass {
        ForwardPass {
            hidden_sums: vec![0.0],
            hidden: vec![hidden],
            output_sums: vec![0.0],
            output: vec![output],
        }
    }

    #[test]
    fn sigmoid_output_delta_includes_derivative() {
        let spec = NetworkSpec::new(1, 1, 1);
        let w_ho = Matrix::from_data(vec![vec![0.0], vec![2.0]]);
        let pass = BackwardPass::compute(&spec, &w_ho, &forward(0.75, 0.5), &[1.0], LossType::Sse);
        let expected_o = 0.25 * 0.75 * 0.25;
        assert_abs_diff_eq!(pass.output_deltas[0], expected_o);
        assert_abs_diff_eq!(pass.hidden_deltas[0], 2.0 * expected_o * 0.25);
    }

    #[test]
    fn linear_output_delta_is_plain_error() {
        let spec = NetworkSpec::new(1, 1, 1)
            .with_hidden_activation(ActivationFunction::Tanh)
            .with_output_activation(OutputActivation::Linear);
        let w_ho = Matrix::from_data(vec![vec![0.0], vec![-1.5]]);
        let pass = BackwardPass::compute(&spec, &w_ho, &forward(3.0, 0.5), &[1.0], LossType::Sse);
        assert_eq!(pass.output_deltas[0], -2.0);
        // tanh derivative from the activation: 1 - 0.5²
        assert_abs_diff_eq!(pass.hidden_deltas[0], -1.5 * -2.0 * 0.75);
    }

    #[test]
    fn cross_entropy_delta_skips_sigmoid_term() {
        let spec = NetworkSpec::new(1, 1, 1);
        let w_ho = Matrix::from_data(vec![vec![0.0], vec![1.0]]);
        let pass = BackwardPass::compute(
            &spec,
            &w_ho,
            &forward(0.2, 0.5),
            &[1.0],
            LossType::CrossEntropy,
        );
        assert_abs_diff_eq!(pass.output_deltas[0], 0.8);
    }
}
