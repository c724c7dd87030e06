pub mod activation;

pub use activation::{sign, ActivationMask, Forward};
