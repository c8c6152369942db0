use crate::network::weights::{UpdateRates, WeightStore};
use crate::pass::{BackwardPass, ForwardPass};

/// Online gradient descent with momentum and an optional clamp on the
/// hidden→output weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSgd {
    pub rates: UpdateRates,
    /// When set, every hidden→output weight is clamped into `[-limit, limit]`
    /// after each update.
    pub clamp_output: Option<f64>,
}

impl MomentumSgd {
    pub fn new(learning_rate_ih: f64, learning_rate_ho: f64, momentum: f64) -> MomentumSgd {
        MomentumSgd {
            rates: UpdateRates { learning_rate_ih, learning_rate_ho, momentum },
            clamp_output: None,
        }
    }

    pub fn with_output_clamp(mut self, limit: f64) -> MomentumSgd {
        self.clamp_output = Some(limit);
        self
    }

    /// Applies one update to `weights` for the pattern whose passes are given.
    /// Returns `false` (leaving `weights` unchanged) if the update would make
    /// any weight non-finite.
    #[must_use]
    pub fn step(
        &self,
        weights: &mut WeightStore,
        input: &[f64],
        forward: &ForwardPass,
        backward: &BackwardPass,
    ) -> bool {
        if !weights.apply_update(input, forward, backward, self.rates) {
            return false;
        }
        if let Some(limit) = self.clamp_output {
            weights.clamp_output_weights(limit);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::LossType;
    use crate::network::spec::NetworkSpec;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn clamp_holds_output_weights_in_range() {
        let mut store = WeightStore::new(NetworkSpec::new(2, 3, 1));
        store.initialize(0.5, &mut StdRng::seed_from_u64(9));
        let sgd = MomentumSgd::new(50.0, 50.0, 0.9).with_output_clamp(0.75);

        for _ in 0..50 {
            let input = [1.0, 0.0];
            let fwd = store.forward(&input);
            let bwd = store.backward(&fwd, &[1.0], LossType::Sse);
            assert!(sgd.step(&mut store, &input, &fwd, &bwd));
            assert!(store.weights_ho().max_abs() <= 0.75);
        }
    }
}
