use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, Result};
use crate::network::neuron::Neuron;

/// Value of the `format` field in every weights file.
pub const FORMAT_NAME: &str = "pixel-perceptron";
/// Current schema version.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk form of a trained perceptron.
///
/// ```json
/// {
///   "format": "pixel-perceptron",
///   "version": 1,
///   "image_width": 28,
///   "image_height": 28,
///   "neurons": [ { "x": 3, "y": 7, "value": 2.0 } ]
/// }
/// ```
///
/// Neuron order is preserved but carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub format: String,
    pub version: u32,
    pub image_width: usize,
    pub image_height: usize,
    pub neurons: Vec<Neuron>,
}

impl NetworkSnapshot {
    pub fn new(image_width: usize, image_height: usize, neurons: Vec<Neuron>) -> NetworkSnapshot {
        NetworkSnapshot {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            image_width,
            image_height,
            neurons,
        }
    }

    /// Checks the header, that there is at least one neuron and that every
    /// neuron lies inside the image.
    ///
    /// Duplicate positions are accepted; only freshly sampled networks
    /// guarantee distinct positions.
    pub fn validate(&self) -> Result<()> {
        if self.format != FORMAT_NAME || self.version != FORMAT_VERSION {
            return Err(PerceptronError::UnsupportedFormat {
                format: self.format.clone(),
                version: self.version,
            });
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err(PerceptronError::InvalidDimensions {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.neurons.is_empty() {
            return Err(PerceptronError::NoNeurons);
        }
        if let Some(n) = self
            .neurons
            .iter()
            .find(|n| n.x_pos >= self.image_width || n.y_pos >= self.image_height)
        {
            return Err(PerceptronError::NeuronOutOfBounds {
                x: n.x_pos,
                y: n.y_pos,
                width: self.image_width,
                height: self.image_height,
            });
        }
        Ok(())
    }
}
