//! Static backward-taken predictor.
//!
//! Predicts taken exactly when the branch displacement is negative, i.e. the
//! target lies below the branch. Loops branch backward, so this captures the
//! common loop-closing case without any state.

use super::DirectionPredictor;

/// Static backward-taken predictor.
///
/// Stateless; the prediction is a pure function of the branch displacement.
#[derive(Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new static predictor.
    pub fn new() -> Self {
        Self
    }
}

impl DirectionPredictor for StaticPredictor {
    /// Predicts taken for backward branches (negative displacement).
    fn predict(&self, displacement: i32) -> bool {
        displacement < 0
    }

    /// Ignores training; the policy keeps no state.
    fn train(&mut self, _taken: bool) {}
}
