use serde::{Deserialize, Serialize};

/// Statistics for one completed training epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch cap for this run.
    pub total_epochs: usize,
    /// Misclassified samples during this epoch, counted from the results
    /// produced before each sample's own weight update.
    pub errors: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Why training stopped. Both variants are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrainOutcome {
    /// Epoch `epoch` classified every sample correctly.
    Converged { epoch: usize },
    /// The epoch cap ran out after `epochs` epochs with errors remaining.
    Exhausted { epochs: usize },
}

/// What `train_loop` returns: the outcome plus one entry per epoch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainReport {
    pub outcome: TrainOutcome,
    pub history: Vec<EpochStats>,
}

impl TrainReport {
    pub fn converged(&self) -> bool {
        matches!(self.outcome, TrainOutcome::Converged { .. })
    }

    pub fn epochs_run(&self) -> usize {
        self.history.len()
    }

    /// Error count of the last epoch, `None` if no epoch ran.
    pub fn final_errors(&self) -> Option<usize> {
        self.history.last().map(|s| s.errors)
    }
}
