//! Genetic Algorithm (GA) for signal timing.
//!
//! Chromosomes carry a cycle length and two independent split weights. Each
//! generation ranks the population per demand record, breeds children from
//! the top half by uniform crossover and single-gene mutation, and replaces
//! the population with them.
//!
//! The GA scores chromosomes by how closely the green split matches the
//! demand split (see [`fitness`]), not by the delay model the swarm uses.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, mutation rate)
//! - [`Population`]: The evolving population, one generation per step
//! - [`GaRunner`]: Runs a full GA over a set of demand records
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{GaRunner, Population};
pub use types::{Chromosome, Gene};
