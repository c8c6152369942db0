// Checks single online updates against hand-derived deltas.

use approx::assert_relative_eq;
use momentum_mlp::{
    ActivationFunction, NetworkSpec, NoTelemetry, OutputActivation, Pattern, TrainConfig, Trainer,
    TrainingState,
};

fn one_step(spec: NetworkSpec, pattern: Pattern) -> (Trainer, momentum_mlp::WeightSnapshot) {
    let config = TrainConfig {
        learning_rate_ih: 0.3,
        learning_rate_ho: 0.7,
        momentum: 0.9,
        convergence_threshold: 0.0,
        max_epochs: 1,
        ..TrainConfig::default().with_seed(21)
    };
    let mut trainer = Trainer::configure(spec, config).unwrap();
    trainer.load_patterns(vec![pattern]).unwrap();
    let before = trainer.export_weights();
    (trainer, before)
}

#[test]
fn linear_output_delta_is_target_minus_output() {
    let input = vec![1.0, 0.5];
    let target = 2.0;
    let spec = NetworkSpec::new(2, 3, 1).with_output_activation(OutputActivation::Linear);
    let (mut trainer, before) = one_step(spec, Pattern::new(input.clone(), vec![target]));

    let fwd = trainer.weights().forward(&input);
    let delta_o = target - fwd.output[0];

    let result = trainer.train(&mut NoTelemetry).unwrap();
    assert_eq!(result.terminal_state, TrainingState::Exhausted);
    assert_relative_eq!(result.final_error, 0.5 * delta_o * delta_o);

    let after = trainer.export_weights();

    // Hidden→output, bias row first.
    assert_relative_eq!(
        after.weights_ho.data[0][0] - before.weights_ho.data[0][0],
        0.7 * delta_o,
        epsilon = 1e-12
    );
    for h in 0..3 {
        assert_relative_eq!(
            after.weights_ho.data[h + 1][0] - before.weights_ho.data[h + 1][0],
            0.7 * delta_o * fwd.hidden[h],
            epsilon = 1e-12
        );
    }

    // Input→hidden, propagated through the pre-update output weights.
    for h in 0..3 {
        let y = fwd.hidden[h];
        let delta_h = before.weights_ho.data[h + 1][0] * delta_o * y * (1.0 - y);
        for (i, x) in std::iter::once(1.0).chain(input.iter().copied()).enumerate() {
            assert_relative_eq!(
                after.weights_ih.data[i][h] - before.weights_ih.data[i][h],
                0.3 * x * delta_h,
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn sigmoid_output_delta_carries_derivative_term() {
    let input = vec![0.0, 1.0];
    let spec = NetworkSpec::new(2, 2, 1).with_hidden_activation(ActivationFunction::Tanh);
    let (mut trainer, before) = one_step(spec, Pattern::new(input.clone(), vec![1.0]));

    let fwd = trainer.weights().forward(&input);
    let o = fwd.output[0];
    let delta_o = (1.0 - o) * o * (1.0 - o);

    trainer.train(&mut NoTelemetry).unwrap();
    let after = trainer.export_weights();

    assert_relative_eq!(
        after.weights_ho.data[0][0] - before.weights_ho.data[0][0],
        0.7 * delta_o,
        epsilon = 1e-12
    );

    // tanh hidden units: derivative 1 - y².
    for h in 0..2 {
        let y = fwd.hidden[h];
        let delta_h = before.weights_ho.data[h + 1][0] * delta_o * (1.0 - y * y);
        assert_relative_eq!(
            after.weights_ih.data[2][h] - before.weights_ih.data[2][h],
            0.3 * delta_h,
            epsilon = 1e-12
        );
        // Zero input leaves its weights untouched on the first step.
        assert_eq!(after.weights_ih.data[1][h], before.weights_ih.data[1][h]);
    }
}
