pub mod config;
pub mod report;
pub mod runner;

pub use config::{HyperparameterConfig, SPLIT_RATIOS};
pub use runner::{run_experiment, ExperimentResult};
