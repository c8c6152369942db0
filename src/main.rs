//! Trains the XOR network and prints how each pattern came out.
//!
//! Run with:
//!   cargo run --release                 # defaults: 2-4-1, sigmoid, eta 0.5, alpha 0.9
//!   cargo run --release -- config.json  # any MlpConfig file
//!
//! Set `RUST_LOG=debug` for initialisation details.

use momentum_mlp::{xor_patterns, MlpConfig, PatternReport, Trainer, TrainingResult};
use tracing_subscriber::EnvFilter;

fn main() -> momentum_mlp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MlpConfig::load_json(&path)?,
        None => MlpConfig::default(),
    };

    let mut trainer = Trainer::from_config(config)?;
    trainer.load_patterns(xor_patterns())?;

    let result = trainer.train(&mut |stats: &momentum_mlp::EpochStats| {
        if stats.state.is_terminal() {
            println!("Epoch {:<6} :   Error = {:.6} - {:?}", stats.epoch, stats.error, stats.state);
        }
    })?;

    print_report(&result, &trainer.evaluate());
    Ok(())
}

fn print_report(result: &TrainingResult, reports: &[PatternReport]) {
    println!("\nNETWORK DATA - EPOCH {}\n", result.final_epoch);

    let Some(first) = reports.first() else {
        return;
    };

    let mut header = String::from("Pat");
    for i in 1..=first.input.len() {
        header.push_str(&format!("\tInput{i:<4}"));
    }
    for k in 1..=first.target.len() {
        header.push_str(&format!("\tExpected{k:<4}\tReal{k:<4}"));
    }
    println!("{header}");

    for report in reports {
        let mut line = format!("{}", report.index + 1);
        for x in &report.input {
            line.push_str(&format!("\t{x:.6}"));
        }
        for (t, o) in report.target.iter().zip(&report.output) {
            line.push_str(&format!("\t{t:.6}\t{o:.6}"));
        }
        println!("{line}");
    }
}
