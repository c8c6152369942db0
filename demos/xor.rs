use momentum_mlp::{xor_patterns, EpochStats, NetworkSpec, TrainConfig, Trainer};

fn main() -> momentum_mlp::Result<()> {
    let config = TrainConfig {
        report_interval: 1000,
        ..TrainConfig::default()
    };
    let mut trainer = Trainer::configure(NetworkSpec::default(), config)?;
    trainer.load_patterns(xor_patterns())?;

    let mut print_progress = |stats: &EpochStats| {
        println!("Epoch {}: error = {:.6}", stats.epoch, stats.error);
    };
    let result = trainer.train(&mut print_progress)?;
    println!("{:?} after {} epochs", result.terminal_state, result.final_epoch + 1);

    for report in trainer.evaluate() {
        println!("Input: {:?} -> Output: {:.4}", report.input, report.output[0]);
    }
    Ok(())
}
