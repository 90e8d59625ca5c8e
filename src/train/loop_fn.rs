use log::{debug, info};

use crate::error::{MlpError, Result};
use crate::loss::mse::MseLoss;
use crate::math::{matrix::Matrix, scalar::Scalar};
use crate::network::network::{check_samples, Network};
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::gradients::{backward, Gradients};
use crate::train::train_config::TrainConfig;
use crate::train::TrainReport;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` full-batch epochs.
///
/// # Arguments
/// - `network`       — modified in place; a later call resumes from the
///                     current parameters
/// - `train_inputs`  — column matrices of height `input_size`
/// - `train_targets` — column matrices of height `output_size`, same count
/// - `val_inputs`    — validation samples, only read on reporting epochs
/// - `val_targets`   — validation targets, same count as `val_inputs`
/// - `config`        — epoch count and progress reporting
///
/// Samples are visited in the given order every epoch. All inputs and
/// targets are shape-checked before the first update, so a malformed sample
/// fails the call without touching the parameters.
///
/// # Errors
/// `EmptyDataset` for an empty training set, `SampleCount` for mismatched
/// sequence lengths, `Dimension` for a sample that does not fit the
/// architecture.
pub fn train_loop<T: Scalar>(
    network: &mut Network<T>,
    train_inputs: &[Matrix<T>],
    train_targets: &[Matrix<T>],
    val_inputs: &[Matrix<T>],
    val_targets: &[Matrix<T>],
    config: &TrainConfig<T>,
) -> Result<TrainReport<T>> {
    check_samples(train_inputs, train_targets)?;
    check_samples(val_inputs, val_targets)?;
    if train_inputs.is_empty() {
        return Err(MlpError::EmptyDataset("training needs at least one sample"));
    }
    for (input, target) in train_inputs.iter().zip(train_targets.iter()) {
        network.check_input(input)?;
        network.check_target(target)?;
    }
    for (input, target) in val_inputs.iter().zip(val_targets.iter()) {
        network.check_input(input)?;
        network.check_target(target)?;
    }

    debug!(
        "training {:?} for {} epochs on {} samples ({} validation)",
        network.layer_sizes(),
        config.epochs,
        train_inputs.len(),
        val_inputs.len()
    );

    let optimizer = Sgd::new(network.learning_rate());
    let mut report = TrainReport {
        final_train_loss: None,
        history: Vec::new(),
    };

    for epoch in 0..config.epochs {
        let total_loss = run_one_epoch(network, train_inputs, train_targets, &optimizer)?;
        let train_loss = MseLoss::mean(total_loss, train_inputs.len());
        report.final_train_loss = Some(train_loss);

        if config.is_report_epoch(epoch) {
            let val_loss = if val_inputs.is_empty() {
                None
            } else {
                Some(network.evaluate(val_inputs, val_targets)?)
            };

            match val_loss {
                Some(v) => info!(
                    "epoch {} - train loss {:.6}, val loss {:.6}",
                    epoch,
                    train_loss.real(),
                    v.real()
                ),
                None => info!("epoch {} - train loss {:.6}", epoch, train_loss.real()),
            }

            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                val_loss,
            };

            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver only means nobody is listening.
                let _ = tx.send(stats.clone());
            }
            report.history.push(stats);
        }
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One full pass over the training data followed by a single averaged
/// update. Returns the summed squared error of the pass.
fn run_one_epoch<T: Scalar>(
    network: &mut Network<T>,
    inputs: &[Matrix<T>],
    targets: &[Matrix<T>],
    optimizer: &Sgd<T>,
) -> Result<T> {
    let mut grads = Gradients::zeros_like(network);
    let mut total_loss = T::zero();

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let trace = network.forward_trace(input)?;
        let (deltas, loss) = backward(network, &trace, target)?;
        total_loss += loss;
        grads.accumulate(&deltas, &trace)?;
    }

    let n = inputs.len();
    let (weights, biases) = network.parameters_mut();
    for (w, g) in weights.iter_mut().zip(grads.weights.iter()) {
        optimizer.step(w, g, n)?;
    }
    for (b, g) in biases.iter_mut().zip(grads.biases.iter()) {
        optimizer.step(b, g, n)?;
    }

    Ok(total_loss)
}
