use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, loading or saving a perceptron.
///
/// Caller mistakes inside the numeric routines (image of the wrong size,
/// label/image count mismatch) are not represented here; those panic.
#[derive(Error, Debug)]
pub enum PerceptronError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("a perceptron needs at least one neuron")]
    NoNeurons,

    #[error("too many neurons for image size: requested {requested}, only {available} positions")]
    TooManyNeurons { requested: usize, available: usize },

    #[error("image row {row} has {found} pixels, expected {expected}")]
    RaggedImage { row: usize, expected: usize, found: usize },

    #[error("image buffer has {found} pixels, expected {expected}")]
    BufferSize { expected: usize, found: usize },

    #[error("pixel ({x}, {y}) is {value}, expected 0 or 1")]
    NonBinaryPixel { x: usize, y: usize, value: u8 },

    #[error("neuron at ({x}, {y}) lies outside a {width}x{height} image")]
    NeuronOutOfBounds { x: usize, y: usize, width: usize, height: usize },

    #[error("load failed: {}: {source}", path.display())]
    LoadIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("load failed: malformed weights file {}: {source}", path.display())]
    LoadMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported weights file: format {format:?} version {version}")]
    UnsupportedFormat { format: String, version: u32 },

    #[error("save failed: {}: {source}", path.display())]
    SaveIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("save failed: could not encode {}: {source}", path.display())]
    SaveEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_neurons_message_names_both_counts() {
        let err = PerceptronError::TooManyNeurons { requested: 5, available: 4 };
        let msg = err.to_string();
        assert!(msg.contains("too many neurons"));
        assert!(msg.contains('5') && msg.contains('4'));
    }

    #[test]
    fn load_io_keeps_source() {
        use std::error::Error as _;
        let err = PerceptronError::LoadIo {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(err.to_string().starts_with("load failed: missing.json"));
        assert!(err.source().is_some());
    }
}
