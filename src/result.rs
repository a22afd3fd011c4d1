//! Per-iteration result rows and the run result handed to writers.

use crate::timing::GreenSplit;

/// Snapshot of the best timing plan at the end of one iteration or generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRow {
    /// Cycle length of the best candidate, rounded to whole units.
    pub cycle_length: u32,
    pub g1: u32,
    pub g2: u32,
    /// Estimated travel time, rounded to two decimals.
    ///
    /// Only the swarm strategy reports it.
    pub delay_estimate: Option<f64>,
}

impl ResultRow {
    pub fn new(cycle_length: u32, split: GreenSplit, delay_estimate: Option<f64>) -> Self {
        Self {
            cycle_length,
            g1: split.g1,
            g2: split.g2,
            delay_estimate: delay_estimate.map(round_cents),
        }
    }

    /// Total green time of the row.
    pub fn total_green(&self) -> u32 {
        self.g1 + self.g2
    }
}

/// Rounds to two decimal places; non-finite values pass through.
fn round_cents(x: f64) -> f64 {
    if x.is_finite() {
        (x * 100.0).round() / 100.0
    } else {
        x
    }
}

/// Outcome of one driver run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Name of the strategy that produced the rows.
    pub strategy: &'static str,

    /// One row per iteration, in order.
    pub rows: Vec<ResultRow>,

    /// Best aggregate score reported at the end of each iteration.
    pub best_scores: Vec<f64>,

    /// Number of iterations that ended with a diversification pass.
    pub diversifications: usize,
}

impl RunResult {
    /// Number of iterations recorded.
    pub fn iterations(&self) -> usize {
        self.rows.len()
    }

    /// Last row of the run, if any iteration completed.
    pub fn final_row(&self) -> Option<&ResultRow> {
        self.rows.last()
    }

    /// Row with the largest total green time `g1 + g2`; earliest wins ties.
    ///
    /// This ranks by green time, not by any fitness score. It reproduces
    /// how historical "overall best" summaries were picked and should not
    /// be read as the optimum of the search.
    pub fn best_by_total_green(&self) -> Option<&ResultRow> {
        self.rows.iter().fold(None, |best: Option<&ResultRow>, row| match best {
            Some(b) if b.total_green() >= row.total_green() => Some(b),
            _ => Some(row),
        })
    }
}
