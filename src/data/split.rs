use rand::prelude::*;

use crate::data::dataset::Dataset;

pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Shuffles sample indices with a seeded generator and cuts the first
/// `floor(len * train_ratio)` into the training set, the rest into the test
/// set. The same seed always yields the same split.
pub fn split_dataset(dataset: &Dataset, train_ratio: f64, seed: u64) -> (Dataset, Dataset) {
    let mut train = Dataset::new(
        format!("{} (Train)", dataset.name),
        dataset.input_dim,
        dataset.output_dim,
    );
    let mut test = Dataset::new(
        format!("{} (Test)", dataset.name),
        dataset.input_dim,
        dataset.output_dim,
    );

    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let ratio = train_ratio.clamp(0.0, 1.0);
    let train_size = (dataset.len() as f64 * ratio) as usize;

    for (position, &idx) in indices.iter().enumerate() {
        let sample = dataset.samples[idx].clone();
        if position < train_size {
            train.samples.push(sample);
        } else {
            test.samples.push(sample);
        }
    }

    (train, test)
}
