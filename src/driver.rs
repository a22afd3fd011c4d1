//! Optimization driver.
//!
//! A [`Strategy`] owns a population and knows how to improve it by one
//! iteration. The [`Driver`] runs a strategy for a fixed number of
//! iterations over the demand records and collects one [`ResultRow`] per
//! iteration. Strategies never interact; the driver is the only place where
//! one is chosen.

use crate::demand::DemandRecord;
use crate::error::OptimizeError;
use crate::ga::{GaConfig, GaRunner};
use crate::pso::{PsoConfig, PsoRunner};
use crate::result::{ResultRow, RunResult};
use rand::Rng;

/// What a strategy reports after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Row for the iteration's best candidate.
    pub row: ResultRow,

    /// Aggregate score of that candidate under the strategy's own scoring rule.
    pub best_score: f64,

    /// Whether the iteration ended with a diversification pass.
    pub diversified: bool,
}

/// A population-improvement step.
///
/// Implementations hold their population between calls. `step` is called
/// with `iteration` running from `0` to `total - 1`; schedules that depend
/// on run progress read both.
pub trait Strategy {
    /// Short name used in results and logs.
    fn name(&self) -> &'static str;

    /// Runs one iteration against all records.
    fn step<R: Rng>(
        &mut self,
        iteration: usize,
        total: usize,
        records: &[DemandRecord],
        rng: &mut R,
    ) -> StepReport;
}

/// Strategy selection for [`Driver::optimize`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyConfig {
    Pso(PsoConfig),
    Ga(GaConfig),
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Pso(PsoConfig::default())
    }
}

impl StrategyConfig {
    /// Iterations (or generations) the selected strategy will run.
    pub fn iterations(&self) -> usize {
        match self {
            StrategyConfig::Pso(c) => c.iterations,
            StrategyConfig::Ga(c) => c.generations,
        }
    }
}

/// Executes strategies.
pub struct Driver;

impl Driver {
    /// Runs `strategy` for exactly `iterations` steps.
    ///
    /// # Errors
    /// [`OptimizeError::EmptyDemand`] if `records` is empty.
    pub fn run<S: Strategy, R: Rng>(
        strategy: &mut S,
        records: &[DemandRecord],
        iterations: usize,
        rng: &mut R,
    ) -> Result<RunResult, OptimizeError> {
        if records.is_empty() {
            return Err(OptimizeError::EmptyDemand);
        }

        tracing::info!(
            strategy = strategy.name(),
            iterations,
            records = records.len(),
            "starting optimization"
        );

        let mut rows = Vec::with_capacity(iterations);
        let mut best_scores = Vec::with_capacity(iterations);
        let mut diversifications = 0usize;

        for iteration in 0..iterations {
            let report = strategy.step(iteration, iterations, records, rng);
            tracing::debug!(
                iteration = iteration + 1,
                best_score = report.best_score,
                cycle_length = report.row.cycle_length,
                g1 = report.row.g1,
                g2 = report.row.g2,
                "iteration complete"
            );

            if report.diversified {
                diversifications += 1;
            }
            rows.push(report.row);
            best_scores.push(report.best_score);
        }

        if let Some(last) = rows.last() {
            tracing::info!(
                strategy = strategy.name(),
                cycle_length = last.cycle_length,
                g1 = last.g1,
                g2 = last.g2,
                diversifications,
                "optimization finished"
            );
        }

        Ok(RunResult {
            strategy: strategy.name(),
            rows,
            best_scores,
            diversifications,
        })
    }

    /// Validates `config`, seeds a generator, and runs the selected strategy.
    pub fn optimize(
        config: &StrategyConfig,
        records: &[DemandRecord],
    ) -> Result<RunResult, OptimizeError> {
        match config {
            StrategyConfig::Pso(c) => PsoRunner::run(records, c),
            StrategyConfig::Ga(c) => GaRunner::run(records, c),
        }
    }
}
