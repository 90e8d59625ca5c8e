pub mod builtin;
pub mod csv;
pub mod dataset;
pub mod split;

pub use dataset::{DataSample, Dataset};
pub use split::split_dataset;
