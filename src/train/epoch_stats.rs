use serde::{Deserialize, Serialize};

/// Progress observation emitted by `train_loop` on reporting epochs.
///
/// Only produced when `TrainConfig::verbose` is set, on every epoch that is a
/// multiple of `TrainConfig::report_every` (epoch 0 included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats<T> {
    /// 0-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Summed squared error of this epoch divided by the training sample
    /// count, measured before the epoch's update.
    pub train_loss: T,
    /// `Network::evaluate` on the validation set after the update; `None`
    /// when no validation samples were given.
    pub val_loss: Option<T>,
}
