use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Construction and training parameters for a perceptron.
///
/// Can be saved to / loaded from JSON independently of any trained weights.
/// Missing fields fall back to [`PerceptronConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    pub number_of_neurons: usize,
    pub image_width: usize,
    pub image_height: usize,
    /// Epoch cap used by `TrainConfig::from(&config)`.
    pub max_iterations: usize,
    /// Seed for neuron placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Weights file to load instead of sampling a new network.
    pub weights: Option<PathBuf>,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        PerceptronConfig {
            number_of_neurons: 64,
            image_width: 28,
            image_height: 28,
            max_iterations: 100,
            seed: None,
            weights: None,
        }
    }
}

impl PerceptronConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<PerceptronConfig> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PerceptronConfig =
            serde_json::from_str(r#"{ "number_of_neurons": 9, "seed": 11 }"#).unwrap();
        assert_eq!(config.number_of_neurons, 9);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.image_width, 28);
        assert_eq!(config.max_iterations, 100);
        assert!(config.weights.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perceptron.json");
        let config = PerceptronConfig {
            number_of_neurons: 12,
            image_width: 4,
            image_height: 5,
            max_iterations: 3,
            seed: Some(1),
            weights: Some(PathBuf::from("weights.json")),
        };
        config.save_json(&path).unwrap();
        assert_eq!(PerceptronConfig::load_json(&path).unwrap(), config);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            PerceptronConfig::load_json(&path),
            Err(crate::error::PerceptronError::ConfigParse(_))
        ));
    }
}
