//! Swarm configuration and coefficient schedules.

use crate::timing::SignalConfig;

/// A coefficient that moves linearly from `start` to `end` over a run.
///
/// At iteration `k` of `n` the value is `start + (end - start) * k / n`,
/// so the final iteration stops one step short of `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSchedule {
    pub start: f64,
    pub end: f64,
}

impl LinearSchedule {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Value at `iteration` of a run lasting `total` iterations.
    pub fn at(&self, iteration: usize, total: usize) -> f64 {
        if total == 0 {
            return self.start;
        }
        let progress = iteration as f64 / total as f64;
        self.start + (self.end - self.start) * progress
    }
}

/// Configuration for the particle swarm optimizer.
///
/// # Defaults
///
/// ```
/// use u_signal_timing::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.swarm_size, 100);
/// assert_eq!(config.iterations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_signal_timing::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(30)
///     .with_iterations(50)
///     .with_local_search_rate(0.1)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Number of iterations; one result row is produced per iteration.
    pub iterations: usize,

    /// Bounds of the approach-1 green ratio.
    pub ratio_bounds: (f64, f64),

    /// Inertia weight schedule (exploration early, damping late).
    pub inertia: LinearSchedule,

    /// Pull toward each particle's personal best.
    pub cognitive: LinearSchedule,

    /// Pull toward the swarm's global best.
    pub social: LinearSchedule,

    /// Half-width of the initial cycle-length velocity draw.
    pub initial_cycle_velocity: f64,

    /// Half-width of the initial ratio velocity draw.
    pub initial_ratio_velocity: f64,

    /// Per-particle, per-iteration probability of a local search move.
    pub local_search_rate: f64,

    /// Largest whole-unit cycle perturbation tried by local search.
    pub local_cycle_step: i32,

    /// Largest ratio perturbation tried by local search.
    pub local_ratio_step: f64,

    /// Global-best changes smaller than this count as stagnation.
    pub stagnation_tolerance: f64,

    /// Diversification fires once the stagnation count exceeds this.
    pub stagnation_limit: usize,

    /// Probability that a particle is re-seeded during diversification.
    pub diversification_rate: f64,

    /// Whether to score particles in parallel (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Intersection constants.
    pub signal: SignalConfig,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 100,
            iterations: 200,
            ratio_bounds: (0.4, 0.6),
            inertia: LinearSchedule::new(0.9, 0.4),
            cognitive: LinearSchedule::new(2.0, 0.5),
            social: LinearSchedule::new(0.5, 2.0),
            initial_cycle_velocity: 5.0,
            initial_ratio_velocity: 0.05,
            local_search_rate: 0.2,
            local_cycle_step: 5,
            local_ratio_step: 0.03,
            stagnation_tolerance: 1e-5,
            stagnation_limit: 10,
            diversification_rate: 0.3,
            parallel: false,
            seed: None,
            signal: SignalConfig::default(),
        }
    }
}

impl PsoConfig {
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_ratio_bounds(mut self, min: f64, max: f64) -> Self {
        self.ratio_bounds = (min, max);
        self
    }

    pub fn with_inertia(mut self, schedule: LinearSchedule) -> Self {
        self.inertia = schedule;
        self
    }

    pub fn with_cognitive(mut self, schedule: LinearSchedule) -> Self {
        self.cognitive = schedule;
        self
    }

    pub fn with_social(mut self, schedule: LinearSchedule) -> Self {
        self.social = schedule;
        self
    }

    pub fn with_local_search_rate(mut self, rate: f64) -> Self {
        self.local_search_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_diversification_rate(mut self, rate: f64) -> Self {
        self.diversification_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_signal(mut self, signal: SignalConfig) -> Self {
        self.signal = signal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.signal.validate()?;
        if self.swarm_size == 0 {
            return Err("swarm_size must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        let (lo, hi) = self.ratio_bounds;
        if !(0.0 < lo && lo < hi && hi < 1.0) {
            return Err(format!(
                "ratio_bounds must satisfy 0 < min < max < 1, got ({lo}, {hi})"
            ));
        }
        for (name, p) in [
            ("local_search_rate", self.local_search_rate),
            ("diversification_rate", self.diversification_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} must be in [0, 1], got {p}"));
            }
        }
        for (name, span) in [
            ("initial_cycle_velocity", self.initial_cycle_velocity),
            ("initial_ratio_velocity", self.initial_ratio_velocity),
        ] {
            if span <= 0.0 || !span.is_finite() {
                return Err(format!("{name} must be positive and finite, got {span}"));
            }
        }
        if self.local_cycle_step < 0
            || self.local_ratio_step < 0.0
            || !self.local_ratio_step.is_finite()
        {
            return Err("local search steps must be non-negative and finite".into());
        }
        if self.stagnation_tolerance < 0.0 || !self.stagnation_tolerance.is_finite() {
            return Err("stagnation_tolerance must be non-negative and finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.swarm_size, 100);
        assert_eq!(config.iterations, 200);
        assert_eq!(config.stagnation_limit, 10);
        assert!((config.local_search_rate - 0.2).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_schedule_endpoints() {
        let w = LinearSchedule::new(0.9, 0.4);
        assert!((w.at(0, 200) - 0.9).abs() < 1e-12);
        assert!((w.at(100, 200) - 0.65).abs() < 1e-12);
        assert!((w.at(200, 200) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_schedule_rising() {
        let c2 = LinearSchedule::new(0.5, 2.0);
        assert!(c2.at(50, 100) > c2.at(10, 100));
    }

    #[test]
    fn test_validate_zero_swarm() {
        assert!(PsoConfig::default().with_swarm_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_ratio_bounds() {
        let config = PsoConfig::default().with_ratio_bounds(0.6, 0.4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_propagates_signal_error() {
        let signal = SignalConfig::default().with_cycle_bounds(0, 10);
        let config = PsoConfig::default().with_signal(signal);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_builders_clamp() {
        let config = PsoConfig::default()
            .with_local_search_rate(3.0)
            .with_diversification_rate(-1.0);
        assert_eq!(config.local_search_rate, 1.0);
        assert_eq!(config.diversification_rate, 0.0);
    }

    #[test]
    fn test_validate_non_finite_velocity() {
        let mut config = PsoConfig::default();
        config.initial_cycle_velocity = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = PsoConfig::default();
        config.initial_ratio_velocity = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_search_parameters() {
        let mut config = PsoConfig::default();
        config.local_ratio_step = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = PsoConfig::default();
        config.stagnation_tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = PsoConfig::default();
        config.local_ratio_step = 0.0;
        config.stagnation_tolerance = 0.0;
        assert!(config.validate().is_ok());
    }
}
