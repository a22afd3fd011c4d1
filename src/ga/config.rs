//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::timing::SignalConfig;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_signal_timing::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_signal_timing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(100)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    ///
    /// The top half of the population becomes the parent pool, so at
    /// least 4 are needed to draw two distinct parents.
    pub population_size: usize,

    /// Number of generations; one result row is produced per generation.
    pub generations: usize,

    /// Bounds of each approach's split weight.
    pub weight_bounds: (f64, f64),

    /// Probability that a child has one gene redrawn at random (0.0–1.0).
    pub mutation_rate: f64,

    /// Added to the ratio mismatch so a perfect match scores finitely.
    pub epsilon: f64,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Intersection constants.
    pub signal: SignalConfig,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 200,
            weight_bounds: (0.1, 0.9),
            mutation_rate: 0.1,
            epsilon: 1e-6,
            seed: None,
            signal: SignalConfig::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_weight_bounds(mut self, min: f64, max: f64) -> Self {
        self.weight_bounds = (min, max);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_signal(mut self, signal: SignalConfig) -> Self {
        self.signal = signal;
        self
    }

    /// Size of the parent pool kept from each ranking.
    pub fn parent_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.signal.validate()?;
        if self.population_size < 4 {
            return Err("population_size must be at least 4".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        let (lo, hi) = self.weight_bounds;
        if !(0.0 < lo && lo < hi && hi.is_finite()) {
            return Err(format!(
                "weight_bounds must satisfy 0 < min < max < inf, got ({lo}, {hi})"
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.epsilon <= 0.0 || !self.epsilon.is_finite() {
            return Err("epsilon must be positive and finite".into());
        }
        Ok(())
    }
}
