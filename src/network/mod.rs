pub mod neuron;
pub mod perceptron;
pub mod positions;
pub mod snapshot;

pub use neuron::{Neuron, Position};
pub use perceptron::Perceptron;
pub use snapshot::NetworkSnapshot;
