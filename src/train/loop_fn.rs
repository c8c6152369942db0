use std::time::Instant;

use rand::Rng;

use crate::data::patterns::PatternSet;
use crate::error::{MlpError, Result};
use crate::loss::LossType;
use crate::network::weights::WeightStore;
use crate::optim::MomentumSgd;
use crate::train::epoch_stats::{EpochStats, TrainingResult, TrainingState};
use crate::train::telemetry::TelemetrySink;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `weights` on `patterns` until an epoch's accumulated error drops
/// below `config.convergence_threshold` or `config.max_epochs` epochs have run.
///
/// Every epoch visits all patterns once in a fresh random order, updating the
/// weights after each pattern (online learning). Telemetry goes to `sink`
/// every `config.report_interval` epochs and for the final epoch.
///
/// # Errors
/// - `EmptyPatternSet` if there is nothing to train on.
/// - `NumericDivergence` as soon as an activation, error or updated weight
///   would be non-finite. `weights` keeps its last finite state.
pub fn train_loop<R, S>(
    weights: &mut WeightStore,
    patterns: &PatternSet,
    optimizer: &MomentumSgd,
    config: &TrainConfig,
    rng: &mut R,
    sink: &mut S,
) -> Result<TrainingResult>
where
    R: Rng + ?Sized,
    S: TelemetrySink + ?Sized,
{
    if patterns.is_empty() {
        return Err(MlpError::EmptyPatternSet);
    }

    let t_start = Instant::now();
    let mut epoch = 0;

    loop {
        let error = match run_one_epoch(weights, patterns, optimizer, config.loss_type, rng, epoch) {
            Ok(error) => error,
            Err(err) => {
                tracing::warn!(epoch, %err, "training diverged");
                return Err(err);
            }
        };

        let state = if error < config.convergence_threshold {
            TrainingState::Converged
        } else if epoch + 1 >= config.max_epochs {
            TrainingState::Exhausted
        } else {
            TrainingState::Running
        };

        // ── Emit progress ─────────────────────────────────────────────────
        if state.is_terminal() || epoch % config.report_interval == 0 {
            let stats = EpochStats {
                epoch,
                max_epochs: config.max_epochs,
                error,
                state,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            tracing::info!(epoch, error, state = ?state, "epoch finished");
            sink.record(&stats);
        }

        if state.is_terminal() {
            return Ok(TrainingResult {
                final_epoch: epoch,
                final_error: error,
                terminal_state: state,
            });
        }

        epoch += 1;
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One shuffled pass of forward, backward and update over every pattern.
/// Returns the accumulated error.
fn run_one_epoch<R: Rng + ?Sized>(
    weights: &mut WeightStore,
    patterns: &PatternSet,
    optimizer: &MomentumSgd,
    loss: LossType,
    rng: &mut R,
    epoch: usize,
) -> Result<f64> {
    let diverged = |pattern| MlpError::NumericDivergence { epoch, pattern };
    let mut total_error = 0.0;

    for idx in patterns.shuffled_order(rng) {
        let pattern = &patterns[idx];

        let forward = weights.forward(&pattern.input);
        let contribution = loss.loss(&forward.output, &pattern.target);
        if !forward.is_finite() || !contribution.is_finite() {
            return Err(diverged(idx));
        }

        let backward = weights.backward(&forward, &pattern.target, loss);
        if !backward.is_finite() || !optimizer.step(weights, &pattern.input, &forward, &backward) {
            return Err(diverged(idx));
        }

        total_error += contribution;
        if !total_error.is_finite() {
            return Err(diverged(idx));
        }
    }

    Ok(total_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::patterns::xor_patterns;
    use crate::network::spec::NetworkSpec;
    use crate::train::telemetry::NoTelemetry;
    use rand::{rngs::StdRng, SeedableRng};

    fn setup(config: &TrainConfig) -> (WeightStore, PatternSet, StdRng) {
        let spec = NetworkSpec::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut weights = WeightStore::new(spec.clone());
        weights.initialize(config.weight_init_bound, &mut rng);
        let patterns = PatternSet::load(&spec, xor_patterns()).unwrap();
        (weights, patterns, rng)
    }

    #[test]
    fn exhausts_budget_and_reports_last_epoch() {
        let config = TrainConfig { max_epochs: 3, report_interval: 100, ..TrainConfig::default() };
        let (mut weights, patterns, mut rng) = setup(&config);
        let mut events: Vec<EpochStats> = Vec::new();

        let result = train_loop(&mut weights, &patterns, &config.optimizer(), &config, &mut rng, &mut events)
            .unwrap();

        assert_eq!(result.terminal_state, TrainingState::Exhausted);
        assert_eq!(result.final_epoch, 2);
        // Epoch 0 by interval, epoch 2 on termination.
        assert_eq!(events.iter().map(|e| e.epoch).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(events[1].state, TrainingState::Exhausted);
        assert_eq!(events[1].error, result.final_error);
    }

    #[test]
    fn generous_threshold_converges_on_first_epoch() {
        let config = TrainConfig { convergence_threshold: 100.0, ..TrainConfig::default() };
        let (mut weights, patterns, mut rng) = setup(&config);

        let result = train_loop(&mut weights, &patterns, &config.optimizer(), &config, &mut rng, &mut NoTelemetry)
            .unwrap();

        assert!(result.converged());
        assert_eq!(result.final_epoch, 0);
    }

    #[test]
    fn empty_pattern_set_is_an_error() {
        let config = TrainConfig::default();
        let (mut weights, _, mut rng) = setup(&config);
        let err = train_loop(
            &mut weights,
            &PatternSet::default(),
            &config.optimizer(),
            &config,
            &mut rng,
            &mut NoTelemetry,
        )
        .unwrap_err();
        assert!(matches!(err, MlpError::EmptyPatternSet));
    }
}
