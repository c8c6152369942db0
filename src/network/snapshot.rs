use serde::{Serialize, Deserialize};
use crate::math::matrix::Matrix;

/// Opaque copy of a network's weights, handed to callers that want to keep
/// or restore a trained state. Momentum is not part of it.
///
/// The layout follows `WeightStore`: row 0 of each matrix is the bias unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub input_units: usize,
    pub hidden_units: usize,
    pub output_units: usize,
    pub weights_ih: Matrix,
    pub weights_ho: Matrix,
}

impl WeightSnapshot {
    /// Iterates over every weight in both matrices.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.weights_ih
            .data
            .iter()
            .chain(self.weights_ho.data.iter())
            .flat_map(|row| row.iter().copied())
    }
}
