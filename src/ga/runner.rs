//! GA generational loop execution.
//!
//! [`Population`] runs one generation per step:
//! select (per record) → crossover → mutation → full replacement.

use super::config::GaConfig;
use super::fitness;
use super::operators::{mutate, pick_two, select_parents, uniform_crossover};
use super::types::Chromosome;
use crate::demand::DemandRecord;
use crate::driver::{Driver, StepReport, Strategy};
use crate::error::OptimizeError;
use crate::random::create_rng;
use crate::result::{ResultRow, RunResult};
use rand::Rng;

/// A GA population over signal-timing chromosomes.
///
/// Each generation walks the demand records in order. For each record the
/// current population is ranked by that record's score and the top half
/// becomes the parent pool; children are bred from the most recent pool
/// until the offspring pool is full. The offspring replace the population
/// entirely (no elitism).
#[derive(Debug, Clone)]
pub struct Population {
    config: GaConfig,
    members: Vec<Chromosome>,
}

impl Population {
    /// Creates a random initial population.
    pub fn new<R: Rng>(config: GaConfig, rng: &mut R) -> Result<Self, OptimizeError> {
        config.validate().map_err(OptimizeError::InvalidConfig)?;
        let members = (0..config.population_size)
            .map(|_| Chromosome::random(&config, rng))
            .collect();
        Ok(Self { config, members })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    /// Breeds the next generation.
    ///
    /// Once the offspring pool is full, later records no longer contribute.
    fn breed<R: Rng>(&self, records: &[DemandRecord], rng: &mut R) -> Vec<Chromosome> {
        let size = self.config.population_size;
        let mut offspring = Vec::with_capacity(size);

        for record in records {
            if offspring.len() >= size {
                break;
            }
            let parents = select_parents(&self.config, &self.members, record);
            while offspring.len() < size {
                let (p1, p2) = pick_two(&parents, rng);
                let mut child = uniform_crossover(p1, p2, rng);
                mutate(&self.config, &mut child, rng);
                offspring.push(child);
            }
        }

        offspring
    }

    /// Member with the highest aggregate score; the earliest wins ties.
    fn best(&self, records: &[DemandRecord]) -> Option<(Chromosome, f64)> {
        let mut best: Option<(Chromosome, f64)> = None;
        for member in &self.members {
            let score = fitness::aggregate(&self.config, member, records);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((*member, score));
            }
        }
        best
    }
}

impl Strategy for Population {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn step<R: Rng>(
        &mut self,
        _iteration: usize,
        _total: usize,
        records: &[DemandRecord],
        rng: &mut R,
    ) -> StepReport {
        let offspring = self.breed(records, rng);
        if !offspring.is_empty() {
            self.members = offspring;
        }

        let (best, best_score) = self
            .best(records)
            .unwrap_or((self.members[0], f64::NEG_INFINITY));
        let split = fitness::green_times(&self.config, &best);

        StepReport {
            row: ResultRow::new(best.cycle_length, split, None),
            best_score,
            diversified: false,
        }
    }
}

/// Runs the GA strategy end to end.
///
/// # Usage
///
/// ```
/// use u_signal_timing::demand::DemandRecord;
/// use u_signal_timing::ga::{GaConfig, GaRunner};
///
/// let records = [DemandRecord::new(600.0, 400.0)];
/// let config = GaConfig::default().with_generations(10).with_seed(42);
/// let result = GaRunner::run(&records, &config).unwrap();
/// assert_eq!(result.rows.len(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs `config.generations` generations over `records`.
    ///
    /// # Errors
    /// [`OptimizeError::InvalidConfig`] if the config fails validation,
    /// [`OptimizeError::EmptyDemand`] if `records` is empty.
    pub fn run(records: &[DemandRecord], config: &GaConfig) -> Result<RunResult, OptimizeError> {
        let mut rng = create_rng(config.seed);
        let mut population = Population::new(config.clone(), &mut rng)?;
        Driver::run(&mut population, records, config.generations, &mut rng)
    }
}

// ============================================================================
// Tests
// ============================================================================
