//! Swarm execution: evaluate, update, local search, diversify.

use super::config::PsoConfig;
use super::fitness;
use super::types::{Attribute, BestSnapshot, Particle, StagnationTracker, SwarmPosition};
use crate::demand::DemandRecord;
use crate::driver::{Driver, StepReport, Strategy};
use crate::error::OptimizeError;
use crate::random::create_rng;
use crate::result::{ResultRow, RunResult};
use crate::timing::SignalConfig;
use rand::Rng;

/// A particle swarm searching cycle length and green ratio.
///
/// Each [`step`](Strategy::step) runs one iteration:
///
/// 1. **Evaluate** every particle against all records and update personal
///    bests. The pass best replaces the global best only if strictly better.
/// 2. **Update** velocities toward the frozen global best, move, clamp, and
///    occasionally try a local search move.
/// 3. **Diversify** when the global best has stalled for too long.
#[derive(Debug, Clone)]
pub struct Swarm {
    config: PsoConfig,
    particles: Vec<Particle>,
    global_best: BestSnapshot,
    stagnation: StagnationTracker,
}

impl Swarm {
    /// Builds a swarm of random particles.
    ///
    /// The global best starts as the first particle's position with a score
    /// of negative infinity, so the first evaluation always replaces it.
    pub fn new<R: Rng>(config: PsoConfig, rng: &mut R) -> Result<Self, OptimizeError> {
        config.validate().map_err(OptimizeError::InvalidConfig)?;

        let particles: Vec<Particle> = (0..config.swarm_size)
            .map(|_| Particle::random(&config, rng))
            .collect();
        let global_best = BestSnapshot::unscored(particles[0].position);
        let stagnation =
            StagnationTracker::new(config.stagnation_tolerance, config.stagnation_limit);

        Ok(Self {
            config,
            particles,
            global_best,
            stagnation,
        })
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_best(&self) -> &BestSnapshot {
        &self.global_best
    }

    /// Consecutive stagnant iterations seen so far.
    pub fn stagnation_counter(&self) -> usize {
        self.stagnation.counter()
    }

    /// Scores the swarm and updates personal bests.
    ///
    /// Returns the best `(position, score)` of this pass; ties go to the
    /// earliest particle.
    fn evaluate(&mut self, records: &[DemandRecord]) -> Option<BestSnapshot> {
        let scores = score_positions(
            &self.particles,
            &self.config.signal,
            records,
            self.config.parallel,
        );

        let mut pass_best: Option<BestSnapshot> = None;
        for (particle, &score) in self.particles.iter_mut().zip(&scores) {
            particle.observe(score);
            if pass_best.is_none_or(|best| score > best.score) {
                pass_best = Some(BestSnapshot {
                    position: particle.position,
                    score,
                });
            }
        }
        pass_best
    }

    /// Moves every particle. The global best is read-only here.
    fn update<R: Rng>(
        &mut self,
        iteration: usize,
        total: usize,
        records: &[DemandRecord],
        rng: &mut R,
    ) {
        let config = &self.config;
        let w = config.inertia.at(iteration, total);
        let c1 = config.cognitive.at(iteration, total);
        let c2 = config.social.at(iteration, total);
        let target = self.global_best.position;

        for particle in &mut self.particles {
            for attr in Attribute::ALL {
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();
                let x = particle.position.get(attr);
                let cognitive = c1 * r1 * (particle.personal_best.position.get(attr) - x);
                let social = c2 * r2 * (target.get(attr) - x);
                particle
                    .velocity
                    .set(attr, w * particle.velocity.get(attr) + cognitive + social);
            }
            for attr in Attribute::ALL {
                let moved = particle.position.get(attr) + particle.velocity.get(attr);
                particle.position.set(attr, moved);
            }
            particle.position.clamp(config);

            if rng.random::<f64>() < config.local_search_rate {
                local_search(config, particle, records, rng);
            }
        }
    }

    /// Re-seeds a random subset of positions. Velocities and personal bests
    /// are left as they are.
    fn diversify<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut reseeded = 0;
        for particle in &mut self.particles {
            if rng.random::<f64>() < self.config.diversification_rate {
                particle.position = SwarmPosition::random(&self.config, rng);
                reseeded += 1;
            }
        }
        reseeded
    }

    /// Row for the current global best, with its travel time under the
    /// first record only.
    fn report(&self, records: &[DemandRecord]) -> ResultRow {
        let signal = &self.config.signal;
        let best = &self.global_best.position;
        let split = fitness::green_times(signal, best);
        let ett = records
            .first()
            .map(|record| fitness::travel_time(signal, best, record));
        ResultRow::new(best.realized_cycle(), split, ett)
    }
}

impl Strategy for Swarm {
    fn name(&self) -> &'static str {
        "pso"
    }

    fn step<R: Rng>(
        &mut self,
        iteration: usize,
        total: usize,
        records: &[DemandRecord],
        rng: &mut R,
    ) -> StepReport {
        if let Some(pass_best) = self.evaluate(records) {
            if pass_best.score > self.global_best.score {
                self.global_best = pass_best;
            }
        }

        self.update(iteration, total, records, rng);

        let diversified = self.stagnation.observe(self.global_best.score);
        if diversified {
            let reseeded = self.diversify(rng);
            tracing::debug!(iteration, reseeded, "swarm stagnated, diversifying");
        }

        StepReport {
            row: self.report(records),
            best_score: self.global_best.score,
            diversified,
        }
    }
}

/// Tries one random single-attribute move and keeps it only if it beats the
/// particle's personal best.
fn local_search<R: Rng>(
    config: &PsoConfig,
    particle: &mut Particle,
    records: &[DemandRecord],
    rng: &mut R,
) {
    let mut candidate = particle.position;
    match Attribute::ALL[rng.random_range(0..Attribute::ALL.len())] {
        Attribute::CycleLength => {
            let step = config.local_cycle_step;
            candidate.cycle_length += rng.random_range(-step..=step) as f64;
        }
        Attribute::GreenRatio => {
            let step = config.local_ratio_step;
            if step > 0.0 {
                candidate.green_ratio += rng.random_range(-step..step);
            }
        }
    }
    candidate.clamp(config);

    let score = fitness::aggregate(&config.signal, &candidate, records);
    if score > particle.personal_best.score {
        particle.position = candidate;
        particle.personal_best = BestSnapshot {
            position: candidate,
            score,
        };
    }
}

#[cfg(feature = "parallel")]
fn score_positions(
    particles: &[Particle],
    signal: &SignalConfig,
    records: &[DemandRecord],
    parallel: bool,
) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        particles
            .par_iter()
            .map(|p| fitness::aggregate(signal, &p.position, records))
            .collect()
    } else {
        particles
            .iter()
            .map(|p| fitness::aggregate(signal, &p.position, records))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_positions(
    particles: &[Particle],
    signal: &SignalConfig,
    records: &[DemandRecord],
    _parallel: bool,
) -> Vec<f64> {
    particles
        .iter()
        .map(|p| fitness::aggregate(signal, &p.position, records))
        .collect()
}

/// Runs the swarm strategy end to end.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs `config.iterations` swarm iterations over `records`.
    ///
    /// # Errors
    /// [`OptimizeError::InvalidConfig`] if the config fails validation,
    /// [`OptimizeError::EmptyDemand`] if `records` is empty.
    pub fn run(records: &[DemandRecord], config: &PsoConfig) -> Result<RunResult, OptimizeError> {
        let mut rng = create_rng(config.seed);
        let mut swarm = Swarm::new(config.clone(), &mut rng)?;
        Driver::run(&mut swarm, records, config.iterations, &mut rng)
    }
}
