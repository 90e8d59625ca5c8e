use std::sync::mpsc;

use crate::math::scalar::Scalar;
use crate::train::epoch_stats::EpochStats;

pub const DEFAULT_REPORT_EVERY: usize = 100;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`       — number of full-batch updates
/// - `verbose`      — emit `EpochStats` (log line, history, channel) on
///                    reporting epochs
/// - `report_every` — reporting period in epochs
/// - `progress_tx`  — optional channel sender receiving each `EpochStats`.
///                    A dropped receiver is ignored; training always runs
///                    every requested epoch.
pub struct TrainConfig<T: Scalar> {
    pub epochs: usize,
    pub verbose: bool,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats<T>>>,
}

impl<T: Scalar> TrainConfig<T> {
    /// Creates a `TrainConfig` reporting every 100 epochs, with no channel.
    pub fn new(epochs: usize, verbose: bool) -> Self {
        TrainConfig {
            epochs,
            verbose,
            report_every: DEFAULT_REPORT_EVERY,
            progress_tx: None,
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats<T>>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub(crate) fn is_report_epoch(&self, epoch: usize) -> bool {
        self.verbose && self.report_every > 0 && epoch % self.report_every == 0
    }
}
