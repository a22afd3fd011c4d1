//! Traffic demand observations.

/// One traffic condition sample: demand rates on the two competing approaches.
///
/// Rates are in vehicles per hour. Records come from an external loader and
/// are read-only to the optimizers. Non-positive rates are not rejected; the
/// timing model clamps them via [`DemandRecord::clamped`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandRecord {
    /// Demand arriving from the highway approach (approach 1).
    pub highway: f64,
    /// Demand arriving from the bridge approach (approach 2).
    pub bridge: f64,
}

impl DemandRecord {
    pub fn new(highway: f64, bridge: f64) -> Self {
        Self { highway, bridge }
    }

    /// Returns `(highway, bridge)` with each rate raised to at least `min_demand`.
    ///
    /// NaN rates also come back as `min_demand`.
    pub fn clamped(&self, min_demand: f64) -> (f64, f64) {
        (self.highway.max(min_demand), self.bridge.max(min_demand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_passes_positive_rates() {
        let r = DemandRecord::new(600.0, 400.0);
        assert_eq!(r.clamped(1.0), (600.0, 400.0));
    }

    #[test]
    fn test_clamped_raises_zero_and_negative() {
        let r = DemandRecord::new(0.0, -25.0);
        assert_eq!(r.clamped(1.0), (1.0, 1.0));
    }

    #[test]
    fn test_clamped_nan() {
        let r = DemandRecord::new(f64::NAN, 10.0);
        assert_eq!(r.clamped(1.0), (1.0, 10.0));
    }
}
