//! Chromosome representation for the GA.

use super::config::GaConfig;
use rand::Rng;

/// A GA candidate: whole-unit cycle length plus two independent split
/// weights. Green time is shared in proportion `g1_weight : g2_weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    pub cycle_length: u32,
    pub g1_weight: f64,
    pub g2_weight: f64,
}

/// Gene selector used by crossover and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gene {
    CycleLength,
    G1Weight,
    G2Weight,
}

impl Gene {
    pub const ALL: [Gene; 3] = [Gene::CycleLength, Gene::G1Weight, Gene::G2Weight];
}

impl Chromosome {
    /// Draws every gene independently inside its bounds.
    pub fn random<R: Rng>(config: &GaConfig, rng: &mut R) -> Self {
        Self {
            cycle_length: random_cycle(config, rng),
            g1_weight: random_weight(config, rng),
            g2_weight: random_weight(config, rng),
        }
    }

    /// Fraction of usable green given to approach 1.
    pub fn green_ratio(&self) -> f64 {
        self.g1_weight / (self.g1_weight + self.g2_weight)
    }

    /// Copies `gene` from `other`.
    pub fn inherit(&mut self, other: &Chromosome, gene: Gene) {
        match gene {
            Gene::CycleLength => self.cycle_length = other.cycle_length,
            Gene::G1Weight => self.g1_weight = other.g1_weight,
            Gene::G2Weight => self.g2_weight = other.g2_weight,
        }
    }

    /// Replaces `gene` with a fresh random draw.
    pub fn redraw<R: Rng>(&mut self, gene: Gene, config: &GaConfig, rng: &mut R) {
        match gene {
            Gene::CycleLength => self.cycle_length = random_cycle(config, rng),
            Gene::G1Weight => self.g1_weight = random_weight(config, rng),
            Gene::G2Weight => self.g2_weight = random_weight(config, rng),
        }
    }

    /// Pulls every gene back into its bounds.
    pub fn clamp(&mut self, config: &GaConfig) {
        let (lo, hi) = config.weight_bounds;
        self.cycle_length = self
            .cycle_length
            .clamp(config.signal.min_cycle, config.signal.max_cycle);
        self.g1_weight = self.g1_weight.clamp(lo, hi);
        self.g2_weight = self.g2_weight.clamp(lo, hi);
    }
}

fn random_cycle<R: Rng>(config: &GaConfig, rng: &mut R) -> u32 {
    rng.random_range(config.signal.min_cycle..=config.signal.max_cycle)
}

fn random_weight<R: Rng>(config: &GaConfig, rng: &mut R) -> f64 {
    let (lo, hi) = config.weight_bounds;
    rng.random_range(lo..hi)
}
