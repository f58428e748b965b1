//! Simulation statistics collection and reporting.
//!
//! This module tracks the analytics the simulator exists to produce. It
//! provides:
//! 1. **Retirement counts:** Instructions, NOPs, and branches.
//! 2. **Hazards:** Data and control hazard counts per pipeline depth.
//! 3. **Branch prediction:** Mispredictions per policy, with derived
//!    accuracy percentages and per-depth stall-cycle totals.
//! 4. **Dual issue:** The number of two-wide issue pairs found.

use crate::common::constants::{MISPREDICT_PENALTIES, PIPELINE_DEPTHS};

/// Simulation statistics structure tracking all analytics counters.
///
/// Mutated only from the retirement path; printed once when the simulation
/// ends.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Number of retired instructions, NOPs included.
    pub instructions: u64,
    /// Number of retired NOPs.
    pub nops: u64,
    /// Number of retired conditional branches.
    pub branches: u64,

    /// Data hazards per pipeline depth, indexed like
    /// [`PIPELINE_DEPTHS`].
    pub data_hazards: [u64; 3],
    /// Control hazards per pipeline depth, indexed like
    /// [`PIPELINE_DEPTHS`].
    pub control_hazards: [u64; 3],

    /// Mispredictions of the static backward-taken predictor.
    pub static_wrong: u64,
    /// Mispredictions of the saturating-counter predictor.
    pub saturating_wrong: u64,
    /// Mispredictions of the two-level adaptive predictor.
    pub two_level_wrong: u64,

    /// Number of two-wide issue pairs found by the dual-issue checker.
    pub dual_issue_pairs: u64,
}

impl SimStats {
    /// Creates a zeroed statistics structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a misprediction count as a percentage of all branches.
    fn wrong_pct(&self, wrong: u64) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * wrong as f64 / self.branches as f64
        }
    }

    /// Prints one predictor's rows: misprediction count, accuracy, and the
    /// stall cycles its mispredictions cost at each pipeline depth.
    fn print_predictor(&self, name: &str, wrong: u64) {
        println!(
            "  {:<22} {} ({:.2}%)",
            format!("{}.wrong", name),
            wrong,
            self.wrong_pct(wrong)
        );
        let stalls: Vec<String> = PIPELINE_DEPTHS
            .iter()
            .zip(MISPREDICT_PENALTIES.iter())
            .map(|(depth, penalty)| format!("{}-stage={}", depth, wrong * penalty))
            .collect();
        println!(
            "  {:<22} {}",
            format!("{}.stalls", name),
            stalls.join(" ")
        );
    }

    /// Prints the full report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MIPS32 PIPELINE ANALYTICS");
        println!("==========================================================");
        println!("sim_insts                {}", self.instructions);
        println!("sim_nops                 {}", self.nops);
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        for (i, depth) in PIPELINE_DEPTHS.iter().enumerate() {
            println!(
                "  {:<22} {}",
                format!("data.depth{}", depth),
                self.data_hazards[i]
            );
        }
        for (i, depth) in PIPELINE_DEPTHS.iter().enumerate() {
            println!(
                "  {:<22} {}",
                format!("control.depth{}", depth),
                self.control_hazards[i]
            );
        }
        println!("----------------------------------------------------------");
        println!("BRANCH PREDICTION");
        println!("  {:<22} {}", "branches", self.branches);
        self.print_predictor("static", self.static_wrong);
        self.print_predictor("saturating", self.saturating_wrong);
        self.print_predictor("two_level", self.two_level_wrong);
        println!("----------------------------------------------------------");
        println!("DUAL ISSUE");
        println!("  {:<22} {}", "pairs", self.dual_issue_pairs);
        println!("==========================================================");
    }
}
