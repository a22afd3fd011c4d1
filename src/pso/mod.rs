//! Particle Swarm Optimization (PSO) of signal timing.
//!
//! Each particle carries a cycle length and an approach-1 green ratio,
//! plus a velocity. Particles are pulled toward their own best position and
//! the swarm's best, with coefficients scheduled linearly over the run:
//!
//! | coefficient | start | end |
//! |-------------|-------|-----|
//! | inertia `w` | 0.9   | 0.4 |
//! | cognitive `c1` | 2.0 | 0.5 |
//! | social `c2` | 0.5   | 2.0 |
//!
//! On top of the canonical update the swarm applies a greedy local search
//! to random particles and re-seeds part of the swarm after the global best
//! has stalled.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
//! - Ratnaweera et al. (2004), "Self-Organizing Hierarchical Particle Swarm
//!   Optimizer With Time-Varying Acceleration Coefficients"

mod config;
pub mod fitness;
mod runner;
mod types;

pub use config::{LinearSchedule, PsoConfig};
pub use runner::{PsoRunner, Swarm};
pub use types::{Attribute, BestSnapshot, Particle, StagnationTracker, SwarmPosition, Velocity};
