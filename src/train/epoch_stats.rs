use serde::{Serialize, Deserialize};

/// Where a training run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingState {
    Running,
    /// An epoch's error fell below the convergence threshold.
    Converged,
    /// The epoch budget ran out first.
    Exhausted,
}

impl TrainingState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrainingState::Running)
    }
}

/// Telemetry event emitted by `train_loop`.
///
/// One is sent every `report_interval` epochs and always for the final epoch,
/// whose `state` is then `Converged` or `Exhausted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Epoch budget for this run.
    pub max_epochs: usize,
    /// Error accumulated over every pattern of this epoch.
    pub error: f64,
    pub state: TrainingState,
    /// Wall-clock time since the run started, in milliseconds.
    pub elapsed_ms: u64,
}

/// Outcome of a run that neither diverged nor was misconfigured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// 0-based index of the last epoch run.
    pub final_epoch: usize,
    pub final_error: f64,
    /// `Converged` or `Exhausted`.
    pub terminal_state: TrainingState,
}

impl TrainingResult {
    pub fn converged(&self) -> bool {
        self.terminal_state == TrainingState::Converged
    }
}
