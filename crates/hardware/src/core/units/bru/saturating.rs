//! 2-bit saturating counter predictor.
//!
//! The counter occupies the range `[0, 2K)` with `K` taken stages in the
//! upper half. Each resolved outcome nudges the counter toward its direction,
//! so a single anomalous outcome cannot flip a well-established prediction.

use super::DirectionPredictor;

/// Number of taken stages; the full counter range is `[0, 2K)`.
pub const PREDICTOR_STAGES: u8 = 2;

/// A single saturating counter.
///
/// Starts at the weakest taken stage. Also used per history pattern by the
/// two-level predictor.
#[derive(Clone, Copy)]
pub struct SaturatingCounter {
    stage: u8,
}

impl SaturatingCounter {
    /// Creates a counter at the initial (weakly taken) stage.
    pub fn new() -> Self {
        Self {
            stage: PREDICTOR_STAGES,
        }
    }

    /// Returns true while the counter sits in a taken stage.
    pub fn predicts_taken(&self) -> bool {
        self.stage >= PREDICTOR_STAGES
    }

    /// Moves one stage toward the resolved outcome, saturating at the ends.
    pub fn train(&mut self, taken: bool) {
        if taken {
            self.stage = (self.stage + 1).min(2 * PREDICTOR_STAGES - 1);
        } else {
            self.stage = self.stage.saturating_sub(1);
        }
    }

    /// Returns the current stage, in `[0, 2K)`.
    pub fn stage(&self) -> u8 {
        self.stage
    }
}

impl Default for SaturatingCounter {
    /// Returns the default value.
    fn default() -> Self {
        Self::new()
    }
}

/// Branch predictor backed by one global saturating counter.
#[derive(Default)]
pub struct SaturatingPredictor {
    counter: SaturatingCounter,
}

impl SaturatingPredictor {
    /// Creates a new saturating-counter predictor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter stage, in `[0, 2K)`.
    pub fn stage(&self) -> u8 {
        self.counter.stage()
    }
}

impl DirectionPredictor for SaturatingPredictor {
    /// Predicts taken while the counter sits in a taken stage.
    fn predict(&self, _displacement: i32) -> bool {
        self.counter.predicts_taken()
    }

    /// Moves the counter one stage toward the resolved outcome.
    fn train(&mut self, taken: bool) {
        self.counter.train(taken);
    }
}
