//! A single-hidden-layer perceptron trained by online back-propagation with
//! momentum.
//!
//! - [`activation`]: hidden and output nonlinearities
//! - [`network`]   : topology, weight store, weight snapshots
//! - [`data`]      : training patterns
//! - [`pass`]      : forward and backward pass for one pattern
//! - [`loss`]      : error functions
//! - [`optim`]     : momentum delta rule
//! - [`train`]     : epoch driver, telemetry, the `Trainer` facade

pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod pass;
pub mod loss;
pub mod optim;
pub mod train;
pub mod config;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::{ActivationFunction, OutputActivation};
pub use network::{NetworkSpec, WeightSnapshot, WeightStore};
pub use data::{xor_patterns, Pattern, PatternSet};
pub use loss::LossType;
pub use optim::MomentumSgd;
pub use train::{
    EpochStats, NoTelemetry, PatternReport, TelemetrySink, TrainConfig, Trainer,
    TrainingResult, TrainingState,
};
pub use config::MlpConfig;
pub use error::{MlpError, Result};
