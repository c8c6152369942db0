use serde::{Serialize, Deserialize};
use crate::activation::{ActivationFunction, OutputActivation};
use crate::error::{MlpError, Result};

/// Fixed topology of a run: unit counts per layer and the layer activations.
///
/// Fields:
/// - `input_units`      : input vector length, not counting the bias unit
/// - `hidden_units`     : neurons in the single hidden layer
/// - `output_units`     : target / output vector length
/// - `hidden_activation`: nonlinearity of the hidden layer
/// - `output_activation`: sigmoid or linear output layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    pub input_units: usize,
    pub hidden_units: usize,
    pub output_units: usize,
    pub hidden_activation: ActivationFunction,
    pub output_activation: OutputActivation,
}

impl NetworkSpec {
    pub fn new(input_units: usize, hidden_units: usize, output_units: usize) -> Self {
        NetworkSpec {
            input_units,
            hidden_units,
            output_units,
            ..NetworkSpec::default()
        }
    }

    pub fn with_hidden_activation(mut self, activation: ActivationFunction) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: OutputActivation) -> Self {
        self.output_activation = activation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, count) in [
            ("input_units", self.input_units),
            ("hidden_units", self.hidden_units),
            ("output_units", self.output_units),
        ] {
            if count == 0 {
                return Err(MlpError::InvalidConfiguration(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}

/// The 2-4-1 sigmoid network of the classic XOR demonstration.
impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            input_units: 2,
            hidden_units: 4,
            output_units: 1,
            hidden_activation: ActivationFunction::Sigmoid,
            output_activation: OutputActivation::Sigmoid,
        }
    }
}
