//! Seeded random number generator construction.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`.
//! Runners build that generator here so a configured seed fully determines
//! a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for a run.
///
/// `Some(seed)` gives a reproducible stream; `None` seeds from the OS.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
