use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::{sign, ActivationMask, Forward};
use crate::config::PerceptronConfig;
use crate::error::{PerceptronError, Result};
use crate::image::BinaryImage;
use crate::loss::calc_error;
use crate::network::neuron::{Neuron, Position};
use crate::network::positions::sample_positions;
use crate::network::snapshot::NetworkSnapshot;
use crate::train::{train_loop, TrainConfig, TrainReport};

/// A single-layer perceptron whose neurons each watch one pixel.
#[derive(Debug, Clone)]
pub struct Perceptron {
    image_width: usize,
    image_height: usize,
    pub network: Vec<Neuron>,
}

impl Perceptron {
    /// Samples `number_of_neurons` distinct pixel positions with an
    /// entropy-seeded generator. Every weight starts at zero.
    pub fn new(number_of_neurons: usize, image_width: usize, image_height: usize) -> Result<Perceptron> {
        let mut rng = StdRng::from_entropy();
        Perceptron::with_rng(number_of_neurons, image_width, image_height, &mut rng)
    }

    /// Like [`Perceptron::new`] but draws positions from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        number_of_neurons: usize,
        image_width: usize,
        image_height: usize,
        rng: &mut R,
    ) -> Result<Perceptron> {
        let network = sample_positions(number_of_neurons, image_width, image_height, rng)?
            .into_iter()
            .map(Neuron::new)
            .collect();
        info!(
            "initialised perceptron: {number_of_neurons} neurons on a {image_width}x{image_height} grid"
        );
        Ok(Perceptron { image_width, image_height, network })
    }

    /// Loads the weights file named by `config.weights` if there is one,
    /// otherwise samples a fresh network (seeded when `config.seed` is set).
    ///
    /// A weights file that cannot be read is an error; it never falls back
    /// to an empty or random network.
    pub fn from_config(config: &PerceptronConfig) -> Result<Perceptron> {
        if let Some(path) = &config.weights {
            let perceptron = Perceptron::load_json(path)?;
            if perceptron.image_width != config.image_width
                || perceptron.image_height != config.image_height
                || perceptron.network.len() != config.number_of_neurons
            {
                warn!(
                    "{} holds {} neurons on {}x{}, config asked for {} on {}x{}; using the file",
                    path.display(),
                    perceptron.network.len(),
                    perceptron.image_width,
                    perceptron.image_height,
                    config.number_of_neurons,
                    config.image_width,
                    config.image_height,
                );
            }
            return Ok(perceptron);
        }

        match config.seed {
            Some(seed) => Perceptron::with_rng(
                config.number_of_neurons,
                config.image_width,
                config.image_height,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Perceptron::new(config.number_of_neurons, config.image_width, config.image_height),
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Weighted sum of the neurons sitting on "on" pixels, thresholded to
    /// -1, 0 or +1. The returned mask records which neurons were active.
    ///
    /// # Panics
    /// Panics if `image` is not `image_width` x `image_height`.
    pub fn forward_pass(&self, image: &BinaryImage) -> Forward {
        assert_eq!(
            (image.width(), image.height()),
            (self.image_width, self.image_height),
            "image size does not match the network"
        );

        let mut sum = 0.0;
        let activation = self
            .network
            .iter()
            .map(|neuron| {
                let pixel = image.pixel(neuron.x_pos, neuron.y_pos);
                sum += neuron.value * pixel as f64;
                pixel == 1
            })
            .collect::<ActivationMask>();

        Forward { result: sign(sum), activation }
    }

    /// On a misclassification, adds `expected_result` to the weight of every
    /// neuron active in `activation`. A correct result changes nothing.
    ///
    /// # Panics
    /// Panics if `activation` was not produced by this network.
    pub fn back_prop(&mut self, expected_result: i32, result: i32, activation: &ActivationMask) {
        assert_eq!(activation.len(), self.network.len(), "activation mask does not match the network");
        if expected_result == result {
            return;
        }
        for (neuron, active) in self.network.iter_mut().zip(activation.iter()) {
            if active {
                neuron.value += expected_result as f64;
            }
        }
    }

    /// Number of positions where `labels` and `results` disagree.
    pub fn calc_error(&self, labels: &[i32], results: &[i32]) -> usize {
        calc_error(labels, results)
    }

    /// Trains until an epoch makes no mistakes or `max_iterations` epochs
    /// have run.
    ///
    /// # Panics
    /// Panics if `images` and `labels` differ in length.
    pub fn train(&mut self, images: &[BinaryImage], labels: &[i32], max_iterations: usize) -> TrainReport {
        train_loop(self, images, labels, &TrainConfig::new(max_iterations))
    }

    /// Forward-pass results for each image, in input order.
    pub fn test(&self, images: &[BinaryImage]) -> Vec<i32> {
        images.iter().map(|image| self.forward_pass(image).result).collect()
    }

    /// True when both perceptrons cover the same image size and hold the
    /// same `(position, weight)` pairs, in any order.
    pub fn same_weights(&self, other: &Perceptron) -> bool {
        if (self.image_width, self.image_height) != (other.image_width, other.image_height)
            || self.network.len() != other.network.len()
        {
            return false;
        }
        sorted_weights(&self.network) == sorted_weights(&other.network)
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::new(self.image_width, self.image_height, self.network.clone())
    }

    /// Writes the network as a pretty-printed JSON weights file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PerceptronError::SaveIo {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.snapshot()).map_err(|source| {
            PerceptronError::SaveEncode { path: path.to_path_buf(), source }
        })?;
        info!("saved {} neurons to {}", self.network.len(), path.display());
        Ok(())
    }

    /// Replaces this network with the one stored at `path`. On error the
    /// current network is left as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        *self = Perceptron::load_json(path)?;
        Ok(())
    }

    /// Reads a perceptron from a weights file written by [`Perceptron::save`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Perceptron> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PerceptronError::LoadIo {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let snapshot: NetworkSnapshot = serde_json::from_reader(reader).map_err(|source| {
            PerceptronError::LoadMalformed { path: path.to_path_buf(), source }
        })?;
        snapshot.validate()?;

        info!("loaded {} neurons from {}", snapshot.neurons.len(), path.display());
        Ok(Perceptron {
            image_width: snapshot.image_width,
            image_height: snapshot.image_height,
            network: snapshot.neurons,
        })
    }
}

fn sorted_weights(network: &[Neuron]) -> Vec<(Position, f64)> {
    let mut pairs: Vec<_> = network.iter().map(|n| (n.position(), n.value)).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(n: usize, w: usize, h: usize) -> Perceptron {
        Perceptron::with_rng(n, w, h, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    fn image(rows: Vec<Vec<u8>>) -> BinaryImage {
        BinaryImage::from_rows(rows).unwrap()
    }

    fn set_weight(p: &mut Perceptron, x: usize, y: usize, value: f64) {
        let neuron = p
            .network
            .iter_mut()
            .find(|n| n.x_pos == x && n.y_pos == y)
            .unwrap();
        neuron.value = value;
    }

    #[test]
    fn fresh_network_is_distinct_bounded_and_zero() {
        let p = seeded(40, 8, 6);
        assert_eq!(p.network.len(), 40);
        let unique: HashSet<_> = p.network.iter().map(Neuron::position).collect();
        assert_eq!(unique.len(), 40);
        assert!(p.network.iter().all(|n| n.x_pos < 8 && n.y_pos < 6 && n.value == 0.0));
    }

    #[test]
    fn full_grid_places_every_position() {
        let p = seeded(4, 2, 2);
        let positions: HashSet<_> = p.network.iter().map(|n| (n.x_pos, n.y_pos)).collect();
        let expected: HashSet<_> = [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn too_many_neurons_is_an_error() {
        let err = Perceptron::with_rng(10, 3, 3, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, PerceptronError::TooManyNeurons { requested: 10, available: 9 }));
    }

    #[test]
    fn forward_pass_sums_weights_on_lit_pixels() {
        let mut p = seeded(4, 2, 2);
        set_weight(&mut p, 0, 0, 2.0);
        set_weight(&mut p, 1, 0, -3.0);
        set_weight(&mut p, 0, 1, 5.0);

        // Only (0,0) and (1,0) are lit: 2 - 3 < 0.
        let img = image(vec![vec![1, 1], vec![0, 0]]);
        let fwd = p.forward_pass(&img);
        assert_eq!(fwd.result, -1);
        assert_eq!(fwd.activation.count_active(), 2);

        let img = image(vec![vec![1, 0], vec![1, 0]]);
        assert_eq!(p.forward_pass(&img).result, 1);

        let img = image(vec![vec![0, 0], vec![0, 1]]);
        assert_eq!(p.forward_pass(&img).result, 0);
    }

    #[test]
    fn forward_pass_is_deterministic() {
        let mut p = seeded(6, 3, 3);
        for (i, n) in p.network.iter_mut().enumerate() {
            n.value = i as f64 - 2.5;
        }
        let img = image(vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 1, 0]]);
        assert_eq!(p.forward_pass(&img), p.forward_pass(&img));
    }

    #[test]
    #[should_panic(expected = "image size does not match")]
    fn forward_pass_rejects_wrong_image_size() {
        let p = seeded(2, 2, 2);
        p.forward_pass(&BinaryImage::blank(3, 2).unwrap());
    }

    #[test]
    fn back_prop_on_match_changes_nothing() {
        let mut p = seeded(4, 2, 2);
        set_weight(&mut p, 1, 1, 4.0);
        let before: Vec<f64> = p.network.iter().map(|n| n.value).collect();
        let fwd = p.forward_pass(&image(vec![vec![1, 1], vec![1, 1]]));
        p.back_prop(1, 1, &fwd.activation);
        let after: Vec<f64> = p.network.iter().map(|n| n.value).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn back_prop_on_miss_moves_only_active_neurons() {
        let mut p = seeded(4, 2, 2);
        set_weight(&mut p, 0, 0, 0.5);
        set_weight(&mut p, 1, 1, 0.5);
        let fwd = p.forward_pass(&image(vec![vec![1, 0], vec![0, 0]]));
        assert_eq!(fwd.result, 1);
        p.back_prop(-1, fwd.result, &fwd.activation);

        for n in &p.network {
            let expected = match (n.x_pos, n.y_pos) {
                (0, 0) => -0.5,
                (1, 1) => 0.5,
                _ => 0.0,
            };
            assert_eq!(n.value, expected, "neuron at ({}, {})", n.x_pos, n.y_pos);
        }
    }

    #[test]
    fn test_returns_results_in_order() {
        let mut p = seeded(4, 2, 2);
        set_weight(&mut p, 0, 0, 1.0);
        set_weight(&mut p, 1, 1, -1.0);
        let images = vec![
            image(vec![vec![1, 0], vec![0, 0]]),
            image(vec![vec![0, 0], vec![0, 1]]),
            image(vec![vec![0, 1], vec![1, 0]]),
        ];
        assert_eq!(p.test(&images), vec![1, -1, 0]);
    }

    #[test]
    fn same_weights_ignores_neuron_order() {
        let mut a = seeded(4, 2, 2);
        for (i, n) in a.network.iter_mut().enumerate() {
            n.value = i as f64;
        }
        let mut b = a.clone();
        b.network.reverse();
        assert!(a.same_weights(&b));

        b.network[0].value += 1.0;
        assert!(!a.same_weights(&b));

        let smaller = seeded(3, 2, 2);
        assert!(!a.same_weights(&smaller));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = PerceptronConfig {
            number_of_neurons: 10,
            image_width: 5,
            image_height: 5,
            seed: Some(3),
            ..PerceptronConfig::default()
        };
        let a = Perceptron::from_config(&config).unwrap();
        let b = Perceptron::from_config(&config).unwrap();
        let pa: Vec<_> = a.network.iter().map(Neuron::position).collect();
        let pb: Vec<_> = b.network.iter().map(Neuron::position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn missing_weights_file_is_reported() {
        let config = PerceptronConfig {
            weights: Some("/definitely/not/here.json".into()),
            ..PerceptronConfig::default()
        };
        assert!(matches!(
            Perceptron::from_config(&config),
            Err(PerceptronError::LoadIo { .. })
        ));
    }
}
