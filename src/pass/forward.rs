use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;

/// Everything one forward pass produces for a single input vector.
///
/// Row 0 of each weight matrix holds the bias weights; row `i + 1` holds the
/// weights leaving unit `i` of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    pub hidden_sums: Vec<f64>,
    pub hidden: Vec<f64>,
    pub output_sums: Vec<f64>,
    pub output: Vec<f64>,
}

impl ForwardPass {
    /// Pure function of the weights and the input; the summation order is
    /// fixed (bias first, then units in index order) so repeated calls are
    /// bit-identical.
    pub fn compute(
        spec: &NetworkSpec,
        weights_ih: &Matrix,
        weights_ho: &Matrix,
        input: &[f64],
    ) -> ForwardPass {
        debug_assert_eq!(input.len(), spec.input_units);

        let hidden_sums = weighted_sums(weights_ih, input, spec.hidden_units);
        let hidden: Vec<f64> = hidden_sums
            .iter()
            .map(|&sum| spec.hidden_activation.function(sum))
            .collect();

        let output_sums = weighted_sums(weights_ho, &hidden, spec.output_units);
        let output = output_sums
            .iter()
            .map(|&sum| spec.output_activation.function(sum))
            .collect();

        ForwardPass {
            hidden_sums,
            hidden,
            output_sums,
            output,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.hidden_sums
            .iter()
            .chain(&self.hidden)
            .chain(&self.output_sums)
            .chain(&self.output)
            .all(|x| x.is_finite())
    }
}

fn weighted_sums(weights: &Matrix, inputs: &[f64], units: usize) -> Vec<f64> {
    (0..units)
        .map(|j| {
            let mut sum = weights.data[0][j];
            for (i, x) in inputs.iter().enumerate() {
                sum += x * weights.data[i + 1][j];
            }
            sum
        })
        .collect()
}
