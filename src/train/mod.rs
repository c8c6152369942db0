pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod telemetry;
pub mod loop_fn;

pub use trainer::{PatternReport, Trainer};
pub use epoch_stats::{EpochStats, TrainingResult, TrainingState};
pub use train_config::TrainConfig;
pub use telemetry::{NoTelemetry, TelemetrySink};
pub use loop_fn::train_loop;
