pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod optim;
pub mod network;
pub mod train;
pub mod data;
pub mod experiment;

// Convenience re-exports
pub use error::{MlpError, Result};
pub use math::complex::Complex;
pub use math::matrix::Matrix;
pub use math::scalar::Scalar;
pub use activation::sigmoid::Sigmoid;
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{EpochStats, TrainConfig, TrainReport};
pub use data::{DataSample, Dataset};
pub use experiment::{HyperparameterConfig, ExperimentResult, run_experiment};
