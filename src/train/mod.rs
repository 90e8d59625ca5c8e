pub mod epoch_stats;
pub mod gradients;
pub mod loop_fn;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use loop_fn::train_loop;
pub use train_config::TrainConfig;

/// Outcome of one `train_loop` call.
#[derive(Debug, Clone)]
pub struct TrainReport<T> {
    /// Mean training loss of the last epoch; `None` when zero epochs ran.
    pub final_train_loss: Option<T>,
    /// Every progress observation, in epoch order.
    pub history: Vec<EpochStats<T>>,
}
