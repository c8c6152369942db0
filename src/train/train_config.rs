use serde::{Serialize, Deserialize};

use crate::activation::OutputActivation;
use crate::error::{MlpError, Result};
use crate::loss::LossType;
use crate::network::spec::NetworkSpec;
use crate::optim::MomentumSgd;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate_ih`     : step size for input→hidden weights
/// - `learning_rate_ho`     : step size for hidden→output weights
/// - `momentum`             : fraction of the previous delta carried forward, in [0, 1)
/// - `weight_init_bound`    : weights start uniformly in (-bound, bound)
/// - `convergence_threshold`: training stops once an epoch's error is below this
/// - `max_epochs`           : epoch budget before giving up
/// - `report_interval`      : emit telemetry every this many epochs (and on termination)
/// - `clamp_output_weights` : clamp hidden→output weights after each update
/// - `clamp_range`          : the clamp limit, used only when clamping is on
/// - `loss_type`            : error function accumulated per epoch
/// - `seed`                 : fixed RNG seed; `None` seeds from the wall clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate_ih: f64,
    pub learning_rate_ho: f64,
    pub momentum: f64,
    pub weight_init_bound: f64,
    pub convergence_threshold: f64,
    pub max_epochs: usize,
    pub report_interval: usize,
    pub clamp_output_weights: bool,
    pub clamp_range: f64,
    pub loss_type: LossType,
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate_ih: 0.5,
            learning_rate_ho: 0.5,
            momentum: 0.9,
            weight_init_bound: 0.5,
            convergence_threshold: 1e-6,
            max_epochs: 1_000_000,
            report_interval: 1000,
            clamp_output_weights: false,
            clamp_range: 5.0,
            loss_type: LossType::Sse,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every hyperparameter, and the ones that depend on the topology.
    pub fn validate(&self, spec: &NetworkSpec) -> Result<()> {
        let invalid = |msg: String| Err(MlpError::InvalidConfiguration(msg));

        for (name, rate) in [
            ("learning_rate_ih", self.learning_rate_ih),
            ("learning_rate_ho", self.learning_rate_ho),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return invalid(format!("{name} must be finite and positive, got {rate}"));
            }
        }
        if !self.momentum.is_finite() || !(0.0..1.0).contains(&self.momentum) {
            return invalid(format!("momentum must lie in [0, 1), got {}", self.momentum));
        }
        if !self.weight_init_bound.is_finite() || self.weight_init_bound <= 0.0 {
            return invalid(format!(
                "weight_init_bound must be finite and positive, got {}",
                self.weight_init_bound
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return invalid(format!(
                "convergence_threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            ));
        }
        if self.max_epochs == 0 {
            return invalid("max_epochs must be positive".to_string());
        }
        if self.report_interval == 0 {
            return invalid("report_interval must be positive".to_string());
        }
        if self.clamp_output_weights && (!self.clamp_range.is_finite() || self.clamp_range <= 0.0) {
            return invalid(format!(
                "clamp_range must be finite and positive, got {}",
                self.clamp_range
            ));
        }
        if self.loss_type == LossType::CrossEntropy
            && spec.output_activation != OutputActivation::Sigmoid
        {
            return invalid("cross-entropy loss requires a sigmoid output layer".to_string());
        }
        Ok(())
    }

    pub fn optimizer(&self) -> MomentumSgd {
        let sgd = MomentumSgd::new(self.learning_rate_ih, self.learning_rate_ho, self.momentum);
        if self.clamp_output_weights {
            sgd.with_output_clamp(self.clamp_range)
        } else {
            sgd
        }
    }
}
