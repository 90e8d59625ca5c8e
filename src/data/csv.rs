//! CSV loading for tabular datasets.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - The first line is a header and is always skipped
//! - Every data row holds `input_dim` feature columns followed by
//!   `output_dim` target columns
//! - Blank lines are ignored

use std::fs;
use std::path::Path;

use crate::data::dataset::{DataSample, Dataset};
use crate::error::{MlpError, Result};

/// Reads and parses a dataset file.
pub fn load_csv(
    path: impl AsRef<Path>,
    name: &str,
    input_dim: usize,
    output_dim: usize,
) -> Result<Dataset> {
    let text = fs::read_to_string(path)?;
    parse_csv(&text, name, input_dim, output_dim)
}

/// Parses CSV text into a `Dataset`.
pub fn parse_csv(text: &str, name: &str, input_dim: usize, output_dim: usize) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, input_dim, output_dim);
    let width = input_dim + output_dim;

    // Line numbers are 1-based and count the header.
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = parse_floats(line, line_no)?;
        if values.len() != width {
            return Err(MlpError::Csv {
                line: line_no,
                message: format!("expected {} columns, got {}", width, values.len()),
            });
        }

        let (inputs, outputs) = values.split_at(input_dim);
        dataset.samples.push(DataSample {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        });
    }

    Ok(dataset)
}

fn parse_floats(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|cell| {
            cell.trim().parse::<f64>().map_err(|_| MlpError::Csv {
                line: line_no,
                message: format!("'{}' is not a valid number", cell.trim()),
            })
        })
        .collect()
}
