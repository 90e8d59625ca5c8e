pub mod network;

pub use network::{ForwardTrace, Network, DEFAULT_LEARNING_RATE};
