use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Nonlinearity applied to every hidden unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// Logistic sigmoid, range (0, 1).
    Sigmoid,
    /// Hyperbolic tangent, range (-1, 1).
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation of a pre-activation sum.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Derivative expressed in terms of the *activated* value `y = f(x)`.
    ///
    /// Back-propagation only ever has the activations at hand, so both
    /// variants are written that way: `y(1 - y)` for the sigmoid and
    /// `1 - y²` for tanh.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
        }
    }
}

/// Output layer behaviour: squashed through a sigmoid or passed through linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputActivation {
    Sigmoid,
    Linear,
}

impl OutputActivation {
    pub fn is_linear(&self) -> bool {
        matches!(self, OutputActivation::Linear)
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            OutputActivation::Sigmoid => ActivationFunction::Sigmoid.function(x),
            OutputActivation::Linear => x,
        }
    }

    /// Derivative in terms of the activated output. Exactly `1.0` for linear
    /// outputs, so the output delta degenerates to `target - output`.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            OutputActivation::Sigmoid => ActivationFunction::Sigmoid.derivative(y),
            OutputActivation::Linear => 1.0,
        }
    }
}
