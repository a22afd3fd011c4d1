//! Signal timing model.
//!
//! Pure functions that turn a cycle length and a split into realizable green
//! times, and estimate the resulting travel time under a demand record. Both
//! optimizers are judged against this model.
//!
//! # Delay model
//!
//! Each approach is treated as a single-channel deterministic queue served at
//! the saturation flow `s`. With demand `q` and green time `g`:
//!
//! ```text
//! d = q * g / (s - q)          (q < s)
//! d = +inf                     (q >= s, oversaturated)
//! ett = C + 3600 * (d1 + d2) / 2,   floored at C
//! ```

/// Constants of the intersection being timed.
///
/// # Defaults
///
/// ```
/// use u_signal_timing::timing::SignalConfig;
///
/// let config = SignalConfig::default();
/// assert_eq!(config.min_cycle, 60);
/// assert_eq!(config.max_cycle, 120);
/// assert_eq!(config.lost_time, 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalConfig {
    /// Maximum sustainable throughput of an approach under continuous green (veh/h).
    pub saturation_flow: f64,

    /// Floor applied to each derived green time.
    pub min_green_time: u32,

    /// Per-cycle clearance overhead subtracted before green is allocated.
    pub lost_time: u32,

    /// Shortest admissible cycle length.
    pub min_cycle: u32,

    /// Longest admissible cycle length.
    pub max_cycle: u32,

    /// Cycle length rewarded most by the efficiency term.
    pub target_cycle: f64,

    /// Distance from `target_cycle` at which efficiency reaches zero.
    pub cycle_tolerance: f64,

    /// Demand rates below this are raised to it before evaluation.
    pub min_demand: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            saturation_flow: 1800.0,
            min_green_time: 10,
            lost_time: 12,
            min_cycle: 60,
            max_cycle: 120,
            target_cycle: 90.0,
            cycle_tolerance: 60.0,
            min_demand: 1.0,
        }
    }
}

/// Derived green times for the two approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenSplit {
    pub g1: u32,
    pub g2: u32,
}

impl GreenSplit {
    /// Total green time handed out over the cycle.
    pub fn total(&self) -> u32 {
        self.g1 + self.g2
    }
}

impl SignalConfig {
    pub fn with_saturation_flow(mut self, flow: f64) -> Self {
        self.saturation_flow = flow;
        self
    }

    pub fn with_min_green_time(mut self, t: u32) -> Self {
        self.min_green_time = t;
        self
    }

    pub fn with_lost_time(mut self, t: u32) -> Self {
        self.lost_time = t;
        self
    }

    /// Sets the admissible cycle length interval.
    pub fn with_cycle_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_cycle = min;
        self.max_cycle = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.saturation_flow <= 0.0 || !self.saturation_flow.is_finite() {
            return Err("saturation_flow must be positive and finite".into());
        }
        if self.min_cycle == 0 || self.min_cycle > self.max_cycle {
            return Err(format!(
                "cycle bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_cycle, self.max_cycle
            ));
        }
        let usable = self.min_cycle.saturating_sub(self.lost_time);
        if usable < 2 * self.min_green_time {
            return Err(format!(
                "min_cycle {} leaves {usable} usable green, need at least {}",
                self.min_cycle,
                2 * self.min_green_time
            ));
        }
        if !self.target_cycle.is_finite() {
            return Err("target_cycle must be finite".into());
        }
        if self.cycle_tolerance <= 0.0 || !self.cycle_tolerance.is_finite() {
            return Err("cycle_tolerance must be positive and finite".into());
        }
        if self.min_demand <= 0.0 || !self.min_demand.is_finite() {
            return Err("min_demand must be positive and finite".into());
        }
        if self.min_demand >= self.saturation_flow {
            return Err(format!(
                "min_demand {} must be below saturation_flow {}",
                self.min_demand, self.saturation_flow
            ));
        }
        Ok(())
    }

    /// Usable green time of a cycle: `cycle_length - lost_time`.
    pub fn usable_green(&self, cycle_length: u32) -> u32 {
        cycle_length.saturating_sub(self.lost_time)
    }

    /// Clamps a cycle length into `[min_cycle, max_cycle]`.
    pub fn clamp_cycle(&self, cycle_length: f64) -> f64 {
        cycle_length.clamp(self.min_cycle as f64, self.max_cycle as f64)
    }

    /// Splits usable green time giving `ratio` of it to approach 1.
    ///
    /// The approach-1 share is truncated to whole units, then held in
    /// `[min_green_time, usable - min_green_time]` so both shares respect
    /// the floor and `g1 + g2 == usable`. Cycle lengths shorter than
    /// `2 * min_green_time + lost_time` are rejected by [`validate`](Self::validate).
    pub fn split_green(&self, cycle_length: u32, ratio: f64) -> GreenSplit {
        let usable = self.usable_green(cycle_length);
        let lo = self.min_green_time;
        let hi = usable.saturating_sub(self.min_green_time).max(lo);
        let raw = (usable as f64 * ratio).floor();
        let g1 = if raw.is_finite() && raw > 0.0 {
            (raw as u32).clamp(lo, hi)
        } else {
            lo
        };
        let g2 = usable.saturating_sub(g1).max(self.min_green_time);
        GreenSplit { g1, g2 }
    }

    /// Estimated total travel time for one cycle under the given demands.
    ///
    /// Green times below `min_green_time` are raised to it. An approach whose
    /// demand meets or exceeds the saturation flow contributes infinite delay.
    /// The result is never below `cycle_length`.
    pub fn estimate_delay(
        &self,
        cycle_length: f64,
        g1: f64,
        g2: f64,
        demand1: f64,
        demand2: f64,
    ) -> f64 {
        let floor = self.min_green_time as f64;
        let d1 = self.approach_delay(demand1, g1.max(floor));
        let d2 = self.approach_delay(demand2, g2.max(floor));
        let avg_delay = (d1 + d2) / 2.0;
        let ett = cycle_length + avg_delay * 3600.0;
        ett.max(cycle_length)
    }

    /// Delay of a single approach modeled as a deterministic queue.
    fn approach_delay(&self, demand: f64, green: f64) -> f64 {
        let spare = self.saturation_flow - demand;
        if spare > 0.0 {
            demand * green / spare
        } else {
            f64::INFINITY
        }
    }

    /// Cycle efficiency: 1 at `target_cycle`, falling linearly with distance.
    pub fn cycle_efficiency(&self, cycle_length: f64) -> f64 {
        1.0 - (cycle_length - self.target_cycle).abs() / self.cycle_tolerance
    }
}
