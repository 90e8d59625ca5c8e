use std::sync::mpsc;

use approx::assert_abs_diff_eq;
use ferrite_mlp::data::builtin;
use ferrite_mlp::{Matrix, MlpError, Network, TrainConfig};
use rand::prelude::*;

fn xor_data() -> (Vec<Matrix<f64>>, Vec<Matrix<f64>>) {
    builtin::xor().to_matrices::<f64>()
}

fn seeded(layer_sizes: Vec<usize>, lr: f64, seed: u64) -> Network<f64> {
    Network::with_rng(layer_sizes, lr, &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Copy of `network` with one weight shifted by `eps`.
fn nudged(network: &Network<f64>, layer: usize, row: usize, col: usize, eps: f64) -> Network<f64> {
    let mut weights = network.weights().to_vec();
    let value = weights[layer].get(row, col).unwrap();
    weights[layer].set(row, col, value + eps).unwrap();
    Network::from_parameters(weights, network.biases().to_vec(), network.learning_rate()).unwrap()
}

#[test]
fn xor_converges_with_full_batch_descent() {
    let (inputs, targets) = xor_data();
    let mut network = seeded(vec![2, 8, 1], 0.5, 42);

    network
        .train_with_validation(&inputs, &targets, &inputs, &targets, &TrainConfig::new(5000, false))
        .unwrap();

    assert!(network.evaluate(&inputs, &targets).unwrap() < 0.05);
    assert_eq!(network.accuracy(&inputs, &targets).unwrap(), 1.0);
}

#[test]
fn adder_training_reduces_loss() {
    let (inputs, targets) = builtin::binary_adder().to_matrices::<f64>();
    let mut network = seeded(vec![5, 16, 3], 0.3, 7);
    let before = network.evaluate(&inputs, &targets).unwrap();

    network
        .train_with_validation(&inputs, &targets, &inputs, &targets, &TrainConfig::new(300, false))
        .unwrap();

    assert!(network.evaluate(&inputs, &targets).unwrap() < before);
}

#[test]
fn one_epoch_update_follows_mean_squared_error_gradient() {
    let (inputs, targets) = xor_data();
    let lr = 0.5;
    let start = seeded(vec![2, 3, 2, 1], lr, 13);

    let mut trained = start.clone();
    trained
        .train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(1, false))
        .unwrap();

    let eps = 1e-6;
    for layer in 0..start.weights().len() {
        let (rows, cols) = start.weights()[layer].shape();
        for row in 0..rows {
            for col in 0..cols {
                let loss_at = |shift| {
                    nudged(&start, layer, row, col, shift).evaluate(&inputs, &targets).unwrap()
                };
                let (up, down) = (loss_at(eps), loss_at(-eps));
                let numeric = (up - down) / (2.0 * eps);

                let before = start.weights()[layer].get(row, col).unwrap();
                let after = trained.weights()[layer].get(row, col).unwrap();
                let applied = (before - after) / lr;

                assert_abs_diff_eq!(applied, numeric, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn training_resumes_from_current_parameters() {
    let (inputs, targets) = xor_data();
    let start = seeded(vec![2, 4, 1], 0.5, 21);

    let mut once = start.clone();
    once.train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(100, false))
        .unwrap();

    let mut twice = start;
    for _ in 0..2 {
        twice
            .train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(50, false))
            .unwrap();
    }

    assert_eq!(once.weights(), twice.weights());
    assert_eq!(once.biases(), twice.biases());
}

#[test]
fn verbose_training_reports_every_hundred_epochs() {
    let (inputs, targets) = xor_data();
    let mut network = seeded(vec![2, 4, 1], 0.5, 3);
    let (tx, rx) = mpsc::channel();

    let config = TrainConfig::new(250, true).with_progress(tx);
    let report = network
        .train_with_validation(&inputs, &targets, &inputs[..2], &targets[..2], &config)
        .unwrap();
    drop(config);

    let epochs: Vec<usize> = report.history.iter().map(|s| s.epoch).collect();
    assert_eq!(epochs, vec![0, 100, 200]);
    assert!(report.history.iter().all(|s| s.total_epochs == 250));
    assert!(report.history.iter().all(|s| s.val_loss.is_some()));
    assert!(report.final_train_loss.is_some());

    let received: Vec<_> = rx.iter().collect();
    assert_eq!(received, report.history);
}

#[test]
fn quiet_training_records_no_history() {
    let (inputs, targets) = xor_data();
    let mut network = seeded(vec![2, 4, 1], 0.5, 3);
    let report = network
        .train_with_validation(&inputs, &targets, &inputs, &targets, &TrainConfig::new(150, false))
        .unwrap();
    assert!(report.history.is_empty());
}

#[test]
fn empty_validation_set_reports_no_validation_loss() {
    let (inputs, targets) = xor_data();
    let mut network = seeded(vec![2, 4, 1], 0.5, 3);
    let config = TrainConfig::new(30, true).with_report_every(10);
    let report = network.train_with_validation(&inputs, &targets, &[], &[], &config).unwrap();
    assert_eq!(report.history.len(), 3);
    assert!(report.history.iter().all(|s| s.val_loss.is_none()));
}

#[test]
fn reported_train_loss_is_pre_update_mean() {
    let (inputs, targets) = xor_data();
    let start = seeded(vec![2, 4, 1], 0.5, 8);
    let expected = start.evaluate(&inputs, &targets).unwrap();

    let mut network = start;
    let report = network
        .train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(1, true))
        .unwrap();
    assert_abs_diff_eq!(report.history[0].train_loss, expected, epsilon = 1e-12);
}

#[test]
fn zero_epochs_leave_network_untouched() {
    let (inputs, targets) = xor_data();
    let start = seeded(vec![2, 4, 1], 0.5, 4);
    let mut network = start.clone();
    let report = network
        .train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(0, true))
        .unwrap();
    assert!(report.final_train_loss.is_none());
    assert_eq!(network.weights(), start.weights());
}

#[test]
fn malformed_samples_fail_before_any_update() {
    let (mut inputs, targets) = xor_data();
    let start = seeded(vec![2, 4, 1], 0.5, 4);
    let mut network = start.clone();

    inputs[3] = Matrix::column(vec![1.0, 1.0, 1.0]);
    let err = network
        .train_with_validation(&inputs, &targets, &[], &[], &TrainConfig::new(10, false))
        .unwrap_err();
    assert!(matches!(err, MlpError::Dimension { op: "input", .. }));
    assert_eq!(network.weights(), start.weights());
    assert_eq!(network.biases(), start.biases());
}

#[test]
fn empty_or_mismatched_training_sets_are_rejected() {
    let (inputs, targets) = xor_data();
    let mut network = seeded(vec![2, 4, 1], 0.5, 4);
    let config = TrainConfig::new(10, false);

    assert!(matches!(
        network.train_with_validation(&[], &[], &[], &[], &config),
        Err(MlpError::EmptyDataset(_))
    ));
    assert!(matches!(
        network.train_with_validation(&inputs, &targets[..3], &[], &[], &config),
        Err(MlpError::SampleCount { inputs: 4, targets: 3 })
    ));
    assert!(matches!(
        network.train_with_validation(&inputs, &targets, &inputs, &[], &config),
        Err(MlpError::SampleCount { .. })
    ));
}
