use crate::activation::sigmoid::Sigmoid;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::math::{matrix::Matrix, scalar::Scalar};
use crate::network::network::{ForwardTrace, Network};

/// Per-layer gradient sums over one epoch, shaped like the parameters.
#[derive(Debug, Clone)]
pub struct Gradients<T: Scalar> {
    pub weights: Vec<Matrix<T>>,
    pub biases: Vec<Matrix<T>>,
}

impl<T: Scalar> Gradients<T> {
    pub fn zeros_like(network: &Network<T>) -> Gradients<T> {
        Gradients {
            weights: network
                .weights()
                .iter()
                .map(|w| Matrix::zeros(w.rows(), w.cols()))
                .collect(),
            biases: network
                .biases()
                .iter()
                .map(|b| Matrix::zeros(b.rows(), b.cols()))
                .collect(),
        }
    }

    /// Adds one sample's contribution: `dW[i] += δ[i]·a[i]ᵀ`, `db[i] += δ[i]`.
    pub fn accumulate(&mut self, deltas: &[Matrix<T>], trace: &ForwardTrace<T>) -> Result<()> {
        for (i, delta) in deltas.iter().enumerate() {
            // Column times row is the outer product.
            let a_row = Matrix::row(trace.activations[i].to_vec());
            let w_grad = delta.matmul(&a_row)?;
            self.weights[i] = self.weights[i].try_add(&w_grad)?;
            self.biases[i] = self.biases[i].try_add(delta)?;
        }
        Ok(())
    }
}

/// Deltas (∂L/∂z per layer) for one sample, from the output layer back to
/// the first hidden layer. Returns them in layer order along with the
/// sample's summed squared error.
pub fn backward<T: Scalar>(
    network: &Network<T>,
    trace: &ForwardTrace<T>,
    target: &Matrix<T>,
) -> Result<(Vec<Matrix<T>>, T)> {
    let weights = network.weights();
    let n_layers = weights.len();

    let output = trace.output();
    let error = output.try_sub(target)?;
    let loss = error.sum_of_squares();

    let mut deltas: Vec<Matrix<T>> = vec![Matrix::empty(); n_layers];
    deltas[n_layers - 1] =
        MseLoss::derivative(&error).hadamard(&Sigmoid::derivative_of_output(output))?;

    for i in (0..n_layers - 1).rev() {
        deltas[i] = propagate(&weights[i + 1], &deltas[i + 1], &trace.activations[i + 1])?;
    }

    Ok((deltas, loss))
}

/// `δ[i][j] = (Σₖ W[i+1][k][j]·δ[i+1][k]) · σ'(a[i+1][j])`, i.e. the next
/// delta pushed back through the transpose of the next layer's weights.
/// Samples are single columns.
fn propagate<T: Scalar>(
    next_weights: &Matrix<T>,
    next_delta: &Matrix<T>,
    activation: &Matrix<T>,
) -> Result<Matrix<T>> {
    let mut delta = Matrix::zeros(next_weights.cols(), 1);
    for j in 0..delta.rows() {
        let mut sum = T::zero();
        for k in 0..next_weights.rows() {
            sum += next_weights.get(k, j)? * next_delta.get(k, 0)?;
        }
        delta.set(j, 0, sum * Sigmoid::derivative(activation.get(j, 0)?))?;
    }
    Ok(delta)
}
