//! Traffic-signal timing optimization.
//!
//! Searches for a cycle length and a split of green time between two
//! competing approaches that performs well across a set of demand
//! observations. Two interchangeable strategies are provided:
//!
//! - **Particle Swarm Optimization (PSO)**: continuous search over cycle
//!   length and green ratio with scheduled coefficients, greedy local
//!   search, and stagnation-triggered diversification. Scored by a
//!   delay model.
//! - **Genetic Algorithm (GA)**: generational search over cycle length and
//!   two split weights with truncation selection, uniform crossover, and
//!   single-gene mutation. Scored by how well the green split matches the
//!   demand split.
//!
//! # Architecture
//!
//! - [`timing`]: intersection constants, green split derivation, delay model
//! - [`pso`], [`ga`]: the strategies, each with its own scoring rule
//! - [`driver`]: runs a [`Strategy`](driver::Strategy) for a fixed number of
//!   iterations and collects one [`ResultRow`](result::ResultRow) per iteration
//!
//! Loading demand records and writing result rows are left to the caller.
//!
//! # Example
//!
//! ```
//! use u_signal_timing::demand::DemandRecord;
//! use u_signal_timing::driver::{Driver, StrategyConfig};
//! use u_signal_timing::pso::PsoConfig;
//!
//! let records = vec![
//!     DemandRecord::new(600.0, 400.0),
//!     DemandRecord::new(750.0, 500.0),
//! ];
//! let config = StrategyConfig::Pso(
//!     PsoConfig::default().with_swarm_size(20).with_iterations(10).with_seed(42),
//! );
//! let result = Driver::optimize(&config, &records).unwrap();
//! assert_eq!(result.rows.len(), 10);
//! ```

pub mod demand;
pub mod driver;
pub mod error;
pub mod ga;
pub mod pso;
pub mod random;
pub mod result;
pub mod timing;

pub use error::OptimizeError;
