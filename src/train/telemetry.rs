use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Receives the telemetry events of a training run.
pub trait TelemetrySink {
    fn record(&mut self, stats: &EpochStats);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTelemetry;

impl TelemetrySink for NoTelemetry {
    fn record(&mut self, _stats: &EpochStats) {}
}

impl TelemetrySink for Vec<EpochStats> {
    fn record(&mut self, stats: &EpochStats) {
        self.push(stats.clone());
    }
}

/// A dropped receiver does not stop training; events are simply lost.
impl TelemetrySink for mpsc::Sender<EpochStats> {
    fn record(&mut self, stats: &EpochStats) {
        let _ = self.send(stats.clone());
    }
}

impl<F> TelemetrySink for F
where
    F: FnMut(&EpochStats),
{
    fn record(&mut self, stats: &EpochStats) {
        self(stats)
    }
}
