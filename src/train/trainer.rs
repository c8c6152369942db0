use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::config::MlpConfig;
use crate::data::patterns::{Pattern, PatternSet};
use crate::error::{MlpError, Result};
use crate::network::{NetworkSpec, WeightSnapshot, WeightStore};
use crate::optim::MomentumSgd;
use crate::train::epoch_stats::TrainingResult;
use crate::train::loop_fn::train_loop;
use crate::train::telemetry::TelemetrySink;
use crate::train::train_config::TrainConfig;

/// Network output for one loaded pattern, next to what it should have been.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    /// Position of the pattern in load order.
    pub index: usize,
    pub input: Vec<f64>,
    pub target: Vec<f64>,
    pub output: Vec<f64>,
}

/// A configured network together with its training set and random source.
///
/// ```no_run
/// use momentum_mlp::{xor_patterns, NetworkSpec, NoTelemetry, TrainConfig, Trainer};
///
/// let mut trainer = Trainer::configure(NetworkSpec::default(), TrainConfig::default())?;
/// trainer.load_patterns(xor_patterns())?;
/// let result = trainer.train(&mut NoTelemetry)?;
/// println!("{:?} after {} epochs", result.terminal_state, result.final_epoch);
/// println!("{:?}", trainer.predict(&[1.0, 0.0])?);
/// # Ok::<(), momentum_mlp::MlpError>(())
/// ```
#[derive(Debug)]
pub struct Trainer {
    config: TrainConfig,
    optimizer: MomentumSgd,
    weights: WeightStore,
    patterns: PatternSet,
    rng: StdRng,
}

impl Trainer {
    /// Validates the configuration, seeds the random source and draws the
    /// initial weights.
    pub fn configure(spec: NetworkSpec, config: TrainConfig) -> Result<Trainer> {
        spec.validate()?;
        config.validate(&spec)?;

        let seed = config.seed.unwrap_or_else(wall_clock_seed);
        tracing::debug!(seed, ?spec, "configuring network");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut weights = WeightStore::new(spec);
        weights.initialize(config.weight_init_bound, &mut rng);

        Ok(Trainer {
            optimizer: config.optimizer(),
            config,
            weights,
            patterns: PatternSet::default(),
            rng,
        })
    }

    pub fn from_config(config: MlpConfig) -> Result<Trainer> {
        Trainer::configure(config.network, config.training)
    }

    /// Replaces the training set. On error the previous set is kept.
    pub fn load_patterns<I, P>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        self.patterns = PatternSet::load(self.weights.spec(), patterns)?;
        tracing::debug!(count = self.patterns.len(), "patterns loaded");
        Ok(())
    }

    /// Runs `train_loop` from the current weights, streaming telemetry to `sink`.
    pub fn train<S: TelemetrySink + ?Sized>(&mut self, sink: &mut S) -> Result<TrainingResult> {
        train_loop(
            &mut self.weights,
            &self.patterns,
            &self.optimizer,
            &self.config,
            &mut self.rng,
            sink,
        )
    }

    /// Forward pass only; never touches the weights.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        let expected = self.weights.spec().input_units;
        if input.len() != expected {
            return Err(MlpError::mismatch("prediction input", expected, input.len()));
        }
        Ok(self.weights.forward(input).output)
    }

    /// Current outputs for every loaded pattern, in load order.
    pub fn evaluate(&self) -> Vec<PatternReport> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| PatternReport {
                index,
                input: pattern.input.clone(),
                target: pattern.target.clone(),
                output: self.weights.forward(&pattern.input).output,
            })
            .collect()
    }

    /// Draws a fresh set of initial weights from the trainer's random source.
    pub fn reinitialize(&mut self) {
        self.weights.initialize(self.config.weight_init_bound, &mut self.rng);
    }

    pub fn export_weights(&self) -> WeightSnapshot {
        self.weights.export()
    }

    /// Restores weights from a snapshot taken on a network of the same shape.
    /// Momentum restarts from zero.
    pub fn import_weights(&mut self, snapshot: WeightSnapshot) -> Result<()> {
        self.weights.import(snapshot)
    }

    pub fn spec(&self) -> &NetworkSpec {
        self.weights.spec()
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
