use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::experiment::config::HyperparameterConfig;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// Losses and accuracies of one trained configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub config: HyperparameterConfig,
    pub train_loss: f64,
    pub test_loss: f64,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    pub split_ratio: f64,
}

/// Trains a fresh network for `config` on `train` (validating on `test`)
/// and scores it on both sets.
pub fn run_experiment(
    train: &Dataset,
    test: &Dataset,
    config: &HyperparameterConfig,
    split_ratio: f64,
) -> Result<ExperimentResult> {
    run_experiment_with_rng(train, test, config, split_ratio, &mut rand::thread_rng())
}

/// Like `run_experiment`, initializing the network from `rng`.
pub fn run_experiment_with_rng<R: Rng + ?Sized>(
    train: &Dataset,
    test: &Dataset,
    config: &HyperparameterConfig,
    split_ratio: f64,
    rng: &mut R,
) -> Result<ExperimentResult> {
    debug!(
        "running '{}' ({}) on {} train / {} test samples",
        config.description,
        config.architecture_label(),
        train.len(),
        test.len()
    );

    let (train_inputs, train_targets) = train.to_matrices::<f64>();
    let (test_inputs, test_targets) = test.to_matrices::<f64>();

    let mut network = Network::with_rng(config.architecture.clone(), config.learning_rate, rng)?;
    network.train_with_validation(
        &train_inputs,
        &train_targets,
        &test_inputs,
        &test_targets,
        &TrainConfig::new(config.epochs, false),
    )?;

    Ok(ExperimentResult {
        config: config.clone(),
        train_loss: network.evaluate(&train_inputs, &train_targets)?,
        test_loss: network.evaluate(&test_inputs, &test_targets)?,
        train_accuracy: network.accuracy(&train_inputs, &train_targets)?,
        test_accuracy: network.accuracy(&test_inputs, &test_targets)?,
        split_ratio,
    })
}
