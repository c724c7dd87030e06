use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PerceptronError, Result};
use crate::image::binary_image::grid_area;
use crate::network::neuron::Position;

/// Every position of a `width` x `height` image, x-major.
pub fn position_list(width: usize, height: usize) -> Vec<Position> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| Position::new(x, y)))
        .collect()
}

/// Draws `count` distinct positions by rejection sampling.
///
/// Each draw picks uniformly from the full grid; draws landing on an
/// already-taken position are discarded. The result keeps draw order.
///
/// # Errors
/// `InvalidDimensions` for an empty grid or one whose area overflows `usize`, `NoNeurons` for `count == 0` and
/// `TooManyNeurons` when the grid has fewer than `count` cells.
pub fn sample_positions<R: Rng + ?Sized>(
    count: usize,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let available = grid_area(width, height)?;
    if count == 0 {
        return Err(PerceptronError::NoNeurons);
    }
    if count > available {
        return Err(PerceptronError::TooManyNeurons { requested: count, available });
    }

    let candidates = position_list(width, height);
    let mut taken = HashSet::with_capacity(count);
    let mut chosen = Vec::with_capacity(count);

    while chosen.len() < count {
        // `candidates` is non-empty, checked above.
        if let Some(&position) = candidates.choose(rng) {
            if taken.insert(position) {
                chosen.push(position);
            }
        }
    }

    Ok(chosen)
}
