//! Branch-direction predictor interface.
//!
//! This module defines the `DirectionPredictor` trait shared by the three
//! prediction policies the analytics layer trains side by side: a static
//! backward-taken predictor, a 2-bit saturating counter, and a two-level
//! adaptive predictor with a global history register. All three observe the
//! same resolved-outcome stream; their mispredictions are counted separately.

/// 2-bit saturating counter and the counter-based predictor.
pub mod saturating;
/// Static backward-taken predictor.
pub mod static_bp;
/// Two-level adaptive predictor.
pub mod two_level;

pub use saturating::SaturatingPredictor;
pub use static_bp::StaticPredictor;
pub use two_level::TwoLevelPredictor;

/// Trait for branch-direction prediction policies.
///
/// The monitor queries [`Self::predict`] before revealing the outcome, counts
/// a misprediction when the answer disagrees, then calls [`Self::train`].
pub trait DirectionPredictor {
    /// Predicts whether the branch will be taken.
    ///
    /// # Arguments
    ///
    /// * `displacement` - Sign-extended branch displacement in instruction
    ///   words; negative means a backward branch. Dynamic policies ignore it.
    ///
    /// # Returns
    ///
    /// `true` if the branch is predicted taken.
    fn predict(&self, displacement: i32) -> bool;

    /// Trains the predictor with the resolved branch outcome.
    ///
    /// # Arguments
    ///
    /// * `taken` - Whether the branch was actually taken.
    fn train(&mut self, taken: bool);
}
