use std::time::Instant;

use log::{debug, info};

use crate::image::BinaryImage;
use crate::loss::calc_error;
use crate::network::perceptron::Perceptron;
use crate::train::epoch_stats::{EpochStats, TrainOutcome, TrainReport};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` in place, one sample at a time.
///
/// Every epoch walks the samples in order: forward pass, record the result,
/// then back-propagate that result before moving to the next sample. After
/// the epoch the recorded results are compared with `labels`; zero errors
/// ends training with `TrainOutcome::Converged`. Running out of
/// `config.max_iterations` ends it with `TrainOutcome::Exhausted`.
///
/// # Panics
/// Panics if `images` and `labels` differ in length, or if an image does
/// not match the perceptron's dimensions.
pub fn train_loop(
    perceptron: &mut Perceptron,
    images: &[BinaryImage],
    labels: &[i32],
    config: &TrainConfig,
) -> TrainReport {
    assert_eq!(
        images.len(),
        labels.len(),
        "images and labels must have equal length"
    );

    let mut history = Vec::with_capacity(config.max_iterations.min(1024));

    for epoch in 1..=config.max_iterations {
        let t_start = Instant::now();

        let results = run_one_epoch(perceptron, images, labels);
        let errors = calc_error(labels, &results);

        let stats = EpochStats {
            epoch,
            total_epochs: config.max_iterations,
            errors,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!("epoch {}/{}: {} errors", stats.epoch, stats.total_epochs, stats.errors);
        history.push(stats);

        if errors == 0 {
            info!("training converged after {epoch} epochs");
            return TrainReport { outcome: TrainOutcome::Converged { epoch }, history };
        }
    }

    let epochs = history.len();
    info!(
        "training stopped after {epochs} epochs with {} errors",
        history.last().map_or(0, |s| s.errors)
    );
    TrainReport { outcome: TrainOutcome::Exhausted { epochs }, history }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the data; returns each sample's pre-update result.
fn run_one_epoch(perceptron: &mut Perceptron, images: &[BinaryImage], labels: &[i32]) -> Vec<i32> {
    images
        .iter()
        .zip(labels)
        .map(|(image, &label)| {
            let forward = perceptron.forward_pass(image);
            perceptron.back_prop(label, forward.result, &forward.activation);
            forward.result
        })
        .collect()
}
