use rand::Rng;

use crate::error::{MlpError, Result};
use crate::loss::LossType;
use crate::math::matrix::Matrix;
use crate::network::snapshot::WeightSnapshot;
use crate::network::spec::NetworkSpec;
use crate::pass::{BackwardPass, ForwardPass};

/// Learning rates and momentum for one weight update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRates {
    pub learning_rate_ih: f64,
    pub learning_rate_ho: f64,
    pub momentum: f64,
}

/// Both weight matrices of the network plus their momentum companions.
///
/// Shapes: `weights_ih` is `(input_units + 1) × hidden_units` and `weights_ho`
/// is `(hidden_units + 1) × output_units`; row 0 of each is the bias unit.
/// The momentum matrices hold the delta applied by the previous update and
/// are never exposed.
#[derive(Debug, Clone)]
pub struct WeightStore {
    spec: NetworkSpec,
    weights_ih: Matrix,
    weights_ho: Matrix,
    delta_ih: Matrix,
    delta_ho: Matrix,
}

impl WeightStore {
    /// All-zero weights sized for `spec`.
    pub fn new(spec: NetworkSpec) -> WeightStore {
        let (ih_rows, ih_cols) = (spec.input_units + 1, spec.hidden_units);
        let (ho_rows, ho_cols) = (spec.hidden_units + 1, spec.output_units);
        WeightStore {
            spec,
            weights_ih: Matrix::zeros(ih_rows, ih_cols),
            weights_ho: Matrix::zeros(ho_rows, ho_cols),
            delta_ih: Matrix::zeros(ih_rows, ih_cols),
            delta_ho: Matrix::zeros(ho_rows, ho_cols),
        }
    }

    /// Redraws every weight from (-bound, bound) and zeroes both momentum
    /// matrices. Input→hidden weights are drawn first, then hidden→output.
    pub fn initialize<R: Rng + ?Sized>(&mut self, bound: f64, rng: &mut R) {
        self.weights_ih = Matrix::uniform(self.weights_ih.rows, self.weights_ih.cols, bound, rng);
        self.weights_ho = Matrix::uniform(self.weights_ho.rows, self.weights_ho.cols, bound, rng);
        self.delta_ih = Matrix::zeros(self.delta_ih.rows, self.delta_ih.cols);
        self.delta_ho = Matrix::zeros(self.delta_ho.rows, self.delta_ho.cols);
        tracing::debug!(bound, "weights initialized");
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    pub fn forward(&self, input: &[f64]) -> ForwardPass {
        ForwardPass::compute(&self.spec, &self.weights_ih, &self.weights_ho, input)
    }

    pub fn backward(&self, forward: &ForwardPass, target: &[f64], loss: LossType) -> BackwardPass {
        BackwardPass::compute(&self.spec, &self.weights_ho, forward, target, loss)
    }

    /// Applies the momentum delta rule for one pattern:
    ///
    /// ```text
    /// Δw = rate · delta · activation + momentum · Δw_prev
    /// w += Δw
    /// ```
    ///
    /// with the bias unit contributing an activation of 1. All new deltas and
    /// weights are computed before anything is written; if any of them is
    /// non-finite the store is left untouched and `false` is returned.
    #[must_use]
    pub fn apply_update(
        &mut self,
        input: &[f64],
        forward: &ForwardPass,
        backward: &BackwardPass,
        rates: UpdateRates,
    ) -> bool {
        let delta_ho = momentum_deltas(
            &self.delta_ho,
            &forward.hidden,
            &backward.output_deltas,
            rates.learning_rate_ho,
            rates.momentum,
        );
        let delta_ih = momentum_deltas(
            &self.delta_ih,
            input,
            &backward.hidden_deltas,
            rates.learning_rate_ih,
            rates.momentum,
        );

        let weights_ho = add(&self.weights_ho, &delta_ho);
        let weights_ih = add(&self.weights_ih, &delta_ih);

        if !(delta_ho.is_finite() && delta_ih.is_finite() && weights_ho.is_finite() && weights_ih.is_finite()) {
            return false;
        }

        self.weights_ho = weights_ho;
        self.weights_ih = weights_ih;
        self.delta_ho = delta_ho;
        self.delta_ih = delta_ih;
        true
    }

    /// Clamps every hidden→output weight, bias row included, into `[-limit, limit]`.
    pub fn clamp_output_weights(&mut self, limit: f64) {
        self.weights_ho.clamp_symmetric(limit);
    }

    pub fn export(&self) -> WeightSnapshot {
        WeightSnapshot {
            input_units: self.spec.input_units,
            hidden_units: self.spec.hidden_units,
            output_units: self.spec.output_units,
            weights_ih: self.weights_ih.clone(),
            weights_ho: self.weights_ho.clone(),
        }
    }

    /// Replaces both weight matrices with a snapshot's and clears momentum.
    pub fn import(&mut self, snapshot: WeightSnapshot) -> Result<()> {
        let expected_ih = (self.spec.input_units + 1, self.spec.hidden_units);
        let expected_ho = (self.spec.hidden_units + 1, self.spec.output_units);

        for (context, expected, actual) in [
            ("snapshot input_units", self.spec.input_units, snapshot.input_units),
            ("snapshot hidden_units", self.spec.hidden_units, snapshot.hidden_units),
            ("snapshot output_units", self.spec.output_units, snapshot.output_units),
        ] {
            if expected != actual {
                return Err(MlpError::mismatch(context, expected, actual));
            }
        }
        check_shape("input→hidden weights", &snapshot.weights_ih, expected_ih)?;
        check_shape("hidden→output weights", &snapshot.weights_ho, expected_ho)?;
        if !(snapshot.weights_ih.is_finite() && snapshot.weights_ho.is_finite()) {
            return Err(MlpError::InvalidConfiguration(
                "snapshot contains non-finite weights".to_string(),
            ));
        }

        self.weights_ih = snapshot.weights_ih;
        self.weights_ho = snapshot.weights_ho;
        self.delta_ih = Matrix::zeros(expected_ih.0, expected_ih.1);
        self.delta_ho = Matrix::zeros(expected_ho.0, expected_ho.1);
        Ok(())
    }
}

/// New delta matrix for one layer. `activations` excludes the bias unit,
/// which is prepended with value 1.
fn momentum_deltas(
    previous: &Matrix,
    activations: &[f64],
    deltas: &[f64],
    learning_rate: f64,
    momentum: f64,
) -> Matrix {
    let mut res = Matrix::zeros(previous.rows, previous.cols);

    for (i, a) in std::iter::once(1.0).chain(activations.iter().copied()).enumerate() {
        for (j, d) in deltas.iter().enumerate() {
            res.data[i][j] = learning_rate * d * a + momentum * previous.data[i][j];
        }
    }

    res
}

fn check_shape(context: &str, m: &Matrix, (rows, cols): (usize, usize)) -> Result<()> {
    if m.data.len() != rows {
        return Err(MlpError::mismatch(format!("{context} rows"), rows, m.data.len()));
    }
    if let Some(row) = m.data.iter().find(|row| row.len() != cols) {
        return Err(MlpError::mismatch(format!("{context} columns"), cols, row.len()));
    }
    if !m.has_shape(rows, cols) {
        return Err(MlpError::InvalidConfiguration(format!(
            "{context} declare {}×{} but hold {rows}×{cols}",
            m.rows, m.cols
        )));
    }
    Ok(())
}

fn add(a: &Matrix, b: &Matrix) -> Matrix {
    let data = a.data.iter().zip(b.data.iter())
        .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x + y).collect())
        .collect();
    Matrix::from_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn rates(momentum: f64) -> UpdateRates {
        UpdateRates { learning_rate_ih: 0.5, learning_rate_ho: 0.5, momentum }
    }

    #[test]
    fn bias_row_updates_with_unit_activation() {
        let mut store = WeightStore::new(NetworkSpec::new(1, 1, 1));
        store.initialize(0.5, &mut StdRng::seed_from_u64(1));
        let before = store.export();

        let input = [1.0];
        let fwd = store.forward(&input);
        let bwd = store.backward(&fwd, &[1.0], LossType::Sse);
        assert!(store.apply_update(&input, &fwd, &bwd, rates(0.0)));

        let after = store.export();
        let d = bwd.output_deltas[0];
        assert_abs_diff_eq!(after.weights_ho.data[0][0] - before.weights_ho.data[0][0], 0.5 * d, epsilon = 1e-15);
        assert_abs_diff_eq!(
            after.weights_ho.data[1][0] - before.weights_ho.data[1][0],
            0.5 * d * fwd.hidden[0],
            epsilon = 1e-15
        );
    }

    #[test]
    fn momentum_carries_previous_delta() {
        let spec = NetworkSpec::new(1, 1, 1);
        let mut store = WeightStore::new(spec);
        store.initialize(0.5, &mut StdRng::seed_from_u64(2));

        let input = [0.0];
        let fwd = store.forward(&input);
        let bwd = store.backward(&fwd, &[1.0], LossType::Sse);
        assert!(store.apply_update(&input, &fwd, &bwd, rates(0.9)));
        let first = store.delta_ho.data[0][0];

        // A zero gradient step leaves only the momentum term.
        let zero = BackwardPass { output_deltas: vec![0.0], hidden_deltas: vec![0.0] };
        let w = store.weights_ho.data[0][0];
        assert!(store.apply_update(&input, &fwd, &zero, rates(0.9)));
        assert_abs_diff_eq!(store.delta_ho.data[0][0], 0.9 * first);
        assert_abs_diff_eq!(store.weights_ho.data[0][0], w + 0.9 * first);
    }

    #[test]
    fn non_finite_update_is_rejected_without_mutation() {
        let mut store = WeightStore::new(NetworkSpec::new(1, 1, 1));
        store.initialize(0.5, &mut StdRng::seed_from_u64(3));
        let before = store.export();

        let input = [1.0];
        let fwd = store.forward(&input);
        let poisoned = BackwardPass { output_deltas: vec![f64::INFINITY], hidden_deltas: vec![0.0] };
        assert!(!store.apply_update(&input, &fwd, &poisoned, rates(0.9)));
        assert_eq!(store.export(), before);
    }

    #[test]
    fn import_rejects_wrong_shape() {
        let mut store = WeightStore::new(NetworkSpec::new(2, 3, 1));
        let other = WeightStore::new(NetworkSpec::new(2, 4, 1)).export();
        assert!(matches!(store.import(other), Err(MlpError::DimensionMismatch { .. })));
    }
}
