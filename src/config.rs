//! Single-file configuration: topology and hyperparameters together.

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Everything `Trainer::from_config` needs. Missing sections or fields fall
/// back to their defaults, so `{}` is the 2-4-1 XOR setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MlpConfig {
    pub network: NetworkSpec,
    pub training: TrainConfig,
}

impl MlpConfig {
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.training.validate(&self.network)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates an `MlpConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<MlpConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: MlpConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
