//! Selection, crossover and mutation for signal-timing chromosomes.
//!
//! # Operators
//!
//! - [`select_parents`]: truncation selection, keeps the top half under one record
//! - [`pick_two`]: two distinct parents drawn uniformly
//! - [`uniform_crossover`]: each gene from either parent with equal probability
//! - [`mutate`]: with some probability, redraw one random gene
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm" (truncation selection)

use super::config::GaConfig;
use super::fitness;
use super::types::{Chromosome, Gene};
use crate::demand::DemandRecord;
use rand::Rng;

/// Ranks `population` by single-record score, best first, and keeps the
/// top `config.parent_count()`.
///
/// Equal scores keep their population order.
pub fn select_parents(
    config: &GaConfig,
    population: &[Chromosome],
    record: &DemandRecord,
) -> Vec<Chromosome> {
    let mut ranked: Vec<(f64, &Chromosome)> = population
        .iter()
        .map(|c| (fitness::score(config, c, record), c))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked
        .into_iter()
        .take(config.parent_count())
        .map(|(_, c)| *c)
        .collect()
}

/// Draws two parents at distinct indices.
///
/// # Panics
/// Panics if `parents` has fewer than two members.
pub fn pick_two<'a, R: Rng>(
    parents: &'a [Chromosome],
    rng: &mut R,
) -> (&'a Chromosome, &'a Chromosome) {
    let n = parents.len();
    assert!(n >= 2, "need at least two parents, got {n}");
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (&parents[i], &parents[j])
}

/// Uniform crossover: each gene comes from either parent with probability 1/2.
///
/// Identical parents always produce an identical child.
pub fn uniform_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let mut child = *parent1;
    for gene in Gene::ALL {
        if !rng.random_bool(0.5) {
            child.inherit(parent2, gene);
        }
    }
    child
}

/// With probability `config.mutation_rate`, redraws one random gene.
///
/// Returns whether a mutation happened.
pub fn mutate<R: Rng>(config: &GaConfig, chromosome: &mut Chromosome, rng: &mut R) -> bool {
    if rng.random::<f64>() < config.mutation_rate {
        let gene = Gene::ALL[rng.random_range(0..Gene::ALL.len())];
        chromosome.redraw(gene, config, rng);
        chromosome.clamp(config);
        true
    } else {
        false
    }
}
