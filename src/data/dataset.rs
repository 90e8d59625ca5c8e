use serde::{Deserialize, Serialize};

use crate::math::{matrix::Matrix, scalar::Scalar};

/// One row of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSample {
    pub inputs: Vec<f64>,
    pub outputs: Vec<f64>,
}

/// A named set of samples with fixed input/output widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub samples: Vec<DataSample>,
    pub input_dim: usize,
    pub output_dim: usize,
}

impl Dataset {
    pub fn new(name: impl Into<String>, input_dim: usize, output_dim: usize) -> Dataset {
        Dataset {
            name: name.into(),
            samples: Vec::new(),
            input_dim,
            output_dim,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Converts every sample into a pair of column matrices.
    pub fn to_matrices<T: Scalar>(&self) -> (Vec<Matrix<T>>, Vec<Matrix<T>>) {
        let column = |values: &[f64]| -> Matrix<T> {
            Matrix::column(values.iter().map(|&v| T::from_f64(v)).collect())
        };
        self.samples
            .iter()
            .map(|s| (column(&s.inputs), column(&s.outputs)))
            .unzip()
    }
}
