use serde::{Deserialize, Serialize};

/// A pixel coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position { x, y }
    }
}

/// A neuron pinned to one pixel, carrying a trainable weight.
///
/// Neurons deliberately have no `PartialEq`: two neurons collide when their
/// `position()` matches, which is only checked while sampling a new network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    #[serde(rename = "x")]
    pub x_pos: usize,
    #[serde(rename = "y")]
    pub y_pos: usize,
    pub value: f64,
}

impl Neuron {
    /// A neuron at `position` with a zero weight.
    pub fn new(position: Position) -> Neuron {
        Neuron { x_pos: position.x, y_pos: position.y, value: 0.0 }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x_pos, self.y_pos)
    }
}
