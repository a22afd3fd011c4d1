//! Particle state for the swarm optimizer.

use super::config::PsoConfig;
use rand::Rng;

/// A swarm candidate: cycle length plus the fraction of usable green given
/// to approach 1.
///
/// The cycle length moves continuously under velocity updates; the timing
/// model evaluates it at [`realized_cycle`](Self::realized_cycle).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmPosition {
    pub cycle_length: f64,
    pub green_ratio: f64,
}

impl SwarmPosition {
    /// Draws a position uniformly inside the configured bounds.
    ///
    /// The cycle length is drawn as a whole number.
    pub fn random<R: Rng>(config: &PsoConfig, rng: &mut R) -> Self {
        let (lo, hi) = config.ratio_bounds;
        Self {
            cycle_length: rng.random_range(config.signal.min_cycle..=config.signal.max_cycle)
                as f64,
            green_ratio: rng.random_range(lo..hi),
        }
    }

    /// Cycle length rounded to whole units.
    pub fn realized_cycle(&self) -> u32 {
        self.cycle_length.round().max(0.0) as u32
    }

    /// Pulls both attributes back into their bounds.
    pub fn clamp(&mut self, config: &PsoConfig) {
        let (lo, hi) = config.ratio_bounds;
        self.cycle_length = config.signal.clamp_cycle(self.cycle_length);
        self.green_ratio = self.green_ratio.clamp(lo, hi);
    }

    pub fn get(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::CycleLength => self.cycle_length,
            Attribute::GreenRatio => self.green_ratio,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: f64) {
        match attr {
            Attribute::CycleLength => self.cycle_length = value,
            Attribute::GreenRatio => self.green_ratio = value,
        }
    }
}

/// Per-attribute step applied to a position each iteration. Unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub cycle_length: f64,
    pub green_ratio: f64,
}

impl Velocity {
    pub fn random<R: Rng>(config: &PsoConfig, rng: &mut R) -> Self {
        let vc = config.initial_cycle_velocity;
        let vr = config.initial_ratio_velocity;
        Self {
            cycle_length: rng.random_range(-vc..vc),
            green_ratio: rng.random_range(-vr..vr),
        }
    }

    pub fn get(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::CycleLength => self.cycle_length,
            Attribute::GreenRatio => self.green_ratio,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: f64) {
        match attr {
            Attribute::CycleLength => self.cycle_length = value,
            Attribute::GreenRatio => self.green_ratio = value,
        }
    }
}

/// Position attribute selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    CycleLength,
    GreenRatio,
}

impl Attribute {
    pub const ALL: [Attribute; 2] = [Attribute::CycleLength, Attribute::GreenRatio];
}

/// A position paired with its aggregate score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSnapshot {
    pub position: SwarmPosition,
    pub score: f64,
}

impl BestSnapshot {
    /// A snapshot that any finite score beats.
    pub fn unscored(position: SwarmPosition) -> Self {
        Self {
            position,
            score: f64::NEG_INFINITY,
        }
    }
}

/// One swarm member.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: SwarmPosition,
    pub velocity: Velocity,
    pub personal_best: BestSnapshot,
}

impl Particle {
    /// Random position and velocity; personal best starts unscored.
    pub fn random<R: Rng>(config: &PsoConfig, rng: &mut R) -> Self {
        let position = SwarmPosition::random(config, rng);
        let velocity = Velocity::random(config, rng);
        Self {
            position,
            velocity,
            personal_best: BestSnapshot::unscored(position),
        }
    }

    /// Records `score` for the current position if it beats the personal best.
    pub fn observe(&mut self, score: f64) -> bool {
        if score > self.personal_best.score {
            self.personal_best = BestSnapshot {
                position: self.position,
                score,
            };
            true
        } else {
            false
        }
    }
}

/// Counts consecutive iterations without a meaningful global-best change.
#[derive(Debug, Clone, PartialEq)]
pub struct StagnationTracker {
    tolerance: f64,
    limit: usize,
    counter: usize,
    last_score: f64,
}

impl StagnationTracker {
    pub fn new(tolerance: f64, limit: usize) -> Self {
        Self {
            tolerance,
            limit,
            counter: 0,
            last_score: f64::NEG_INFINITY,
        }
    }

    /// Feeds the global-best score at the end of an iteration.
    ///
    /// Returns `true` when the run of stagnant iterations has exceeded the
    /// limit; the counter is reset in that case.
    pub fn observe(&mut self, score: f64) -> bool {
        if (score - self.last_score).abs() < self.tolerance {
            self.counter += 1;
        } else {
            self.counter = 0;
        }
        self.last_score = score;

        if self.counter > self.limit {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }
}
