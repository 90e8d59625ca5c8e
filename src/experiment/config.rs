use serde::{Deserialize, Serialize};

/// Train fractions offered for the train/test split.
pub const SPLIT_RATIOS: [f64; 3] = [0.5, 0.7, 0.8];

/// Architecture and training hyperparameters for one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperparameterConfig {
    pub architecture: Vec<usize>,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Short label shown in result tables (e.g. "Medium Hidden").
    pub description: String,
}

impl HyperparameterConfig {
    pub fn new(
        architecture: Vec<usize>,
        learning_rate: f64,
        epochs: usize,
        description: impl Into<String>,
    ) -> Self {
        HyperparameterConfig {
            architecture,
            learning_rate,
            epochs,
            description: description.into(),
        }
    }

    /// Layer sizes joined with dashes, e.g. `2-8-1`.
    pub fn architecture_label(&self) -> String {
        self.architecture
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub fn xor_configs() -> Vec<HyperparameterConfig> {
    vec![
        HyperparameterConfig::new(vec![2, 4, 1], 0.5, 1000, "Small Hidden"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.5, 1000, "Medium Hidden"),
        HyperparameterConfig::new(vec![2, 16, 1], 0.3, 1000, "Large Hidden"),
        HyperparameterConfig::new(vec![2, 4, 4, 1], 0.3, 1500, "Two Hidden Small"),
        HyperparameterConfig::new(vec![2, 8, 4, 1], 0.2, 1500, "Two Hidden Medium"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.1, 1000, "Low LR"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.3, 1000, "Medium LR"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.7, 1000, "High LR"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.5, 500, "Short Training"),
        HyperparameterConfig::new(vec![2, 8, 1], 0.5, 2000, "Long Training"),
    ]
}

pub fn adder_configs() -> Vec<HyperparameterConfig> {
    vec![
        HyperparameterConfig::new(vec![5, 8, 3], 0.3, 1000, "Small Hidden"),
        HyperparameterConfig::new(vec![5, 16, 3], 0.3, 1000, "Medium Hidden"),
        HyperparameterConfig::new(vec![5, 32, 3], 0.2, 1000, "Large Hidden"),
        HyperparameterConfig::new(vec![5, 10, 8, 3], 0.2, 1500, "Two Hidden Small"),
        HyperparameterConfig::new(vec![5, 16, 8, 3], 0.15, 1500, "Two Hidden Medium"),
        HyperparameterConfig::new(vec![5, 20, 10, 3], 0.1, 2000, "Two Hidden Large"),
        HyperparameterConfig::new(vec![5, 16, 3], 0.1, 1000, "Low LR"),
        HyperparameterConfig::new(vec![5, 16, 3], 0.5, 1000, "High LR"),
        HyperparameterConfig::new(vec![5, 16, 3], 0.3, 500, "Short Training"),
        HyperparameterConfig::new(vec![5, 16, 3], 0.3, 2000, "Long Training"),
    ]
}
