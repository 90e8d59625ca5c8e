use log::debug;
use rand::Rng;

use crate::activation::sigmoid::Sigmoid;
use crate::error::{MlpError, Result};
use crate::loss::mse::MseLoss;
use crate::math::{matrix::Matrix, scalar::Scalar};
use crate::train::{loop_fn::train_loop, train_config::TrainConfig, TrainReport};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Output and target may differ by at most this much after thresholding.
pub const ACCURACY_TOLERANCE: f64 = 0.1;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Per-layer values cached by a forward pass.
///
/// `activations[0]` is the input itself, `activations[i + 1]` is
/// `σ(linear[i])`.
#[derive(Debug, Clone)]
pub struct ForwardTrace<T: Scalar> {
    pub linear: Vec<Matrix<T>>,
    pub activations: Vec<Matrix<T>>,
}

impl<T: Scalar> ForwardTrace<T> {
    pub fn output(&self) -> &Matrix<T> {
        // A trace always holds at least the input.
        &self.activations[self.activations.len() - 1]
    }
}

/// Fully connected sigmoid network.
///
/// Layer `i` maps `layer_sizes[i]` units to `layer_sizes[i + 1]` units with
/// weight shape `layer_sizes[i + 1] x layer_sizes[i]` and a column bias.
#[derive(Debug, Clone)]
pub struct Network<T: Scalar> {
    weights: Vec<Matrix<T>>,
    biases: Vec<Matrix<T>>,
    layer_sizes: Vec<usize>,
    learning_rate: T,
}

impl<T: Scalar> Network<T> {
    /// Builds a network with weights and biases uniform in [-1, 1].
    pub fn new(layer_sizes: Vec<usize>, learning_rate: T) -> Result<Network<T>> {
        Network::with_rng(layer_sizes, learning_rate, &mut rand::thread_rng())
    }

    /// Like `new`, drawing the initial parameters from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_sizes: Vec<usize>,
        learning_rate: T,
        rng: &mut R,
    ) -> Result<Network<T>> {
        validate_architecture(&layer_sizes)?;

        let mut weights = Vec::with_capacity(layer_sizes.len() - 1);
        let mut biases = Vec::with_capacity(layer_sizes.len() - 1);
        for pair in layer_sizes.windows(2) {
            let mut w = Matrix::zeros(pair[1], pair[0]);
            let mut b = Matrix::zeros(pair[1], 1);
            w.randomize_with(-1.0, 1.0, rng);
            b.randomize_with(-1.0, 1.0, rng);
            weights.push(w);
            biases.push(b);
        }

        debug!("initialized network with layers {:?}", layer_sizes);

        Ok(Network {
            weights,
            biases,
            layer_sizes,
            learning_rate,
        })
    }

    /// Builds a network from explicit parameters, checking that consecutive
    /// layers chain.
    pub fn from_parameters(
        weights: Vec<Matrix<T>>,
        biases: Vec<Matrix<T>>,
        learning_rate: T,
    ) -> Result<Network<T>> {
        if weights.is_empty() {
            return Err(MlpError::Architecture("at least one weight matrix is required".into()));
        }
        if weights.len() != biases.len() {
            return Err(MlpError::Architecture(format!(
                "{} weight matrices but {} bias vectors",
                weights.len(),
                biases.len()
            )));
        }

        let mut layer_sizes = vec![weights[0].cols()];
        for (w, b) in weights.iter().zip(biases.iter()) {
            let fan_in = layer_sizes[layer_sizes.len() - 1];
            if w.cols() != fan_in {
                return Err(MlpError::dimension("weights", (w.rows(), fan_in), w.shape()));
            }
            if b.shape() != (w.rows(), 1) {
                return Err(MlpError::dimension("biases", (w.rows(), 1), b.shape()));
            }
            layer_sizes.push(w.rows());
        }
        validate_architecture(&layer_sizes)?;

        Ok(Network {
            weights,
            biases,
            layer_sizes,
            learning_rate,
        })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn weights(&self) -> &[Matrix<T>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix<T>] {
        &self.biases
    }

    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    pub(crate) fn parameters_mut(&mut self) -> (&mut [Matrix<T>], &mut [Matrix<T>]) {
        (&mut self.weights, &mut self.biases)
    }

    pub(crate) fn check_input(&self, input: &Matrix<T>) -> Result<()> {
        let expected = (self.input_size(), 1);
        if input.shape() != expected {
            return Err(MlpError::dimension("input", expected, input.shape()));
        }
        Ok(())
    }

    pub(crate) fn check_target(&self, target: &Matrix<T>) -> Result<()> {
        let expected = (self.output_size(), 1);
        if target.shape() != expected {
            return Err(MlpError::dimension("target", expected, target.shape()));
        }
        Ok(())
    }

    /// Inference: `a = σ(W·a + b)` through every layer.
    pub fn forward(&self, input: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_input(input)?;

        let mut activation = input.clone();
        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            let linear = w.matmul(&activation)?.try_add(b)?;
            activation = Sigmoid::apply(&linear);
        }
        Ok(activation)
    }

    /// Forward pass that keeps every pre- and post-activation.
    pub fn forward_trace(&self, input: &Matrix<T>) -> Result<ForwardTrace<T>> {
        self.check_input(input)?;

        let mut linear = Vec::with_capacity(self.weights.len());
        let mut activations = Vec::with_capacity(self.weights.len() + 1);
        activations.push(input.clone());

        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            let z = w.matmul(&activations[activations.len() - 1])?.try_add(b)?;
            activations.push(Sigmoid::apply(&z));
            linear.push(z);
        }

        Ok(ForwardTrace { linear, activations })
    }

    /// Full-batch gradient descent for `config.epochs` epochs. Calling it
    /// again continues from the current parameters.
    pub fn train_with_validation(
        &mut self,
        train_inputs: &[Matrix<T>],
        train_targets: &[Matrix<T>],
        val_inputs: &[Matrix<T>],
        val_targets: &[Matrix<T>],
        config: &TrainConfig<T>,
    ) -> Result<TrainReport<T>> {
        train_loop(self, train_inputs, train_targets, val_inputs, val_targets, config)
    }

    /// Mean over samples of the summed squared output error.
    pub fn evaluate(&self, inputs: &[Matrix<T>], targets: &[Matrix<T>]) -> Result<T> {
        check_samples(inputs, targets)?;
        if inputs.is_empty() {
            return Err(MlpError::EmptyDataset("evaluate needs at least one sample"));
        }

        let mut total = T::zero();
        for (input, target) in inputs.iter().zip(targets.iter()) {
            self.check_target(target)?;
            let output = self.forward(input)?;
            total += MseLoss::sum_squared(&output, target)?;
        }
        Ok(MseLoss::mean(total, inputs.len()))
    }

    /// Fraction of samples whose every output unit, thresholded to 0/1,
    /// lies within `ACCURACY_TOLERANCE` of its target.
    pub fn calculate_accuracy(
        &self,
        inputs: &[Matrix<T>],
        targets: &[Matrix<T>],
        threshold: f64,
    ) -> Result<f64> {
        check_samples(inputs, targets)?;
        if inputs.is_empty() {
            return Err(MlpError::EmptyDataset("accuracy needs at least one sample"));
        }

        let mut correct = 0usize;
        for (input, target) in inputs.iter().zip(targets.iter()) {
            self.check_target(target)?;
            let output = self.forward(input)?;

            let mut all_correct = true;
            for i in 0..output.rows() {
                let predicted = if output.get(i, 0)?.real() > threshold {
                    T::one()
                } else {
                    T::zero()
                };
                if (predicted - target.get(i, 0)?).magnitude() > ACCURACY_TOLERANCE {
                    all_correct = false;
                    break;
                }
            }

            if all_correct {
                correct += 1;
            }
        }

        Ok(correct as f64 / inputs.len() as f64)
    }

    /// `calculate_accuracy` at the default 0.5 threshold.
    pub fn accuracy(&self, inputs: &[Matrix<T>], targets: &[Matrix<T>]) -> Result<f64> {
        self.calculate_accuracy(inputs, targets, DEFAULT_THRESHOLD)
    }
}

fn validate_architecture(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(MlpError::Architecture(format!(
            "need at least 2 layers, got {}",
            layer_sizes.len()
        )));
    }
    if let Some(i) = layer_sizes.iter().position(|&n| n == 0) {
        return Err(MlpError::Architecture(format!("layer {} has zero units", i)));
    }
    Ok(())
}

pub(crate) fn check_samples<T: Scalar>(inputs: &[Matrix<T>], targets: &[Matrix<T>]) -> Result<()> {
    if inputs.len() != targets.len() {
        return Err(MlpError::SampleCount {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    Ok(())
}
