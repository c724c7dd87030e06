pub mod activation;
pub mod config;
pub mod error;
pub mod image;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::{ActivationMask, Forward};
pub use config::PerceptronConfig;
pub use error::{PerceptronError, Result};
pub use image::BinaryImage;
pub use loss::calc_error;
pub use network::{Neuron, Perceptron, Position};
pub use train::{train_loop, EpochStats, TrainConfig, TrainOutcome, TrainReport};
