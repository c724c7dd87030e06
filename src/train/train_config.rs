use crate::config::PerceptronConfig;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_iterations` — upper bound on full passes over the training data;
///                      the loop stops earlier as soon as an epoch makes no
///                      mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub max_iterations: usize,
}

impl TrainConfig {
    pub fn new(max_iterations: usize) -> Self {
        TrainConfig { max_iterations }
    }
}

impl From<&PerceptronConfig> for TrainConfig {
    fn from(config: &PerceptronConfig) -> Self {
        TrainConfig::new(config.max_iterations)
    }
}
