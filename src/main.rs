// Small end-to-end demo of the library: learn to tell short strokes drawn in
// the top of a 5x5 image from strokes drawn in the bottom.
//   RUST_LOG=debug cargo run
use pixel_perceptron::{BinaryImage, Perceptron, PerceptronConfig, Result, TrainConfig};

const SIZE: usize = 5;

fn stroke(x0: usize, y: usize) -> Result<BinaryImage> {
    let mut img = BinaryImage::blank(SIZE, SIZE)?;
    for x in x0..x0 + 3 {
        img.set(x, y, true);
    }
    Ok(img)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = PerceptronConfig {
        number_of_neurons: SIZE * SIZE,
        image_width: SIZE,
        image_height: SIZE,
        max_iterations: 20,
        seed: Some(7),
        weights: None,
    };
    let mut perceptron = Perceptron::from_config(&config)?;

    let mut images = Vec::new();
    let mut labels = Vec::new();
    for x0 in 0..=SIZE - 3 {
        for (y, label) in [(0, 1), (1, 1), (3, -1), (4, -1)] {
            images.push(stroke(x0, y)?);
            labels.push(label);
        }
    }

    let report = pixel_perceptron::train_loop(
        &mut perceptron,
        &images,
        &labels,
        &TrainConfig::from(&config),
    );
    println!("outcome: {:?} after {} epochs", report.outcome, report.epochs_run());

    let probes = vec![stroke(1, 0)?, stroke(2, 4)?, stroke(0, 2)?];
    println!("top / bottom / middle -> {:?}", perceptron.test(&probes));
    Ok(())
}
