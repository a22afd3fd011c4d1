//! Delay-based scoring used by the swarm.
//!
//! A position scores `efficiency(C) / ett` per demand record, where `ett` is
//! the timing model's travel-time estimate. Scores are summed across records,
//! so heavy-demand records weigh more in the aggregate.

use super::types::SwarmPosition;
use crate::demand::DemandRecord;
use crate::timing::{GreenSplit, SignalConfig};

/// Green times realized by a swarm position.
pub fn green_times(signal: &SignalConfig, position: &SwarmPosition) -> GreenSplit {
    signal.split_green(position.realized_cycle(), position.green_ratio)
}

/// Travel-time estimate of a position under one record.
pub fn travel_time(signal: &SignalConfig, position: &SwarmPosition, record: &DemandRecord) -> f64 {
    let cycle = position.realized_cycle();
    let split = signal.split_green(cycle, position.green_ratio);
    let (q1, q2) = record.clamped(signal.min_demand);
    signal.estimate_delay(cycle as f64, split.g1 as f64, split.g2 as f64, q1, q2)
}

/// Score of a position under one record. Oversaturated plans score zero.
pub fn score(signal: &SignalConfig, position: &SwarmPosition, record: &DemandRecord) -> f64 {
    let cycle = position.realized_cycle() as f64;
    let ett = travel_time(signal, position, record);
    signal.cycle_efficiency(cycle) * (1.0 / ett)
}

/// Sum of per-record scores.
pub fn aggregate(signal: &SignalConfig, position: &SwarmPosition, records: &[DemandRecord]) -> f64 {
    records.iter().map(|r| score(signal, position, r)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(c: f64, r: f64) -> SwarmPosition {
        SwarmPosition {
            cycle_length: c,
            green_ratio: r,
        }
    }

    #[test]
    fn test_score_matches_formula() {
        let signal = SignalConfig::default();
        let p = pos(90.0, 0.5);
        let record = DemandRecord::new(600.0, 400.0);
        // usable 78 -> g1 = 39, g2 = 39
        let d1 = 600.0 * 39.0 / 1200.0;
        let d2 = 400.0 * 39.0 / 1400.0;
        let ett = 90.0 + (d1 + d2) / 2.0 * 3600.0;
        assert!((score(&signal, &p, &record) - 1.0 / ett).abs() < 1e-15);
    }

    #[test]
    fn test_zero_bridge_demand_is_finite() {
        let signal = SignalConfig::default();
        let record = DemandRecord::new(600.0, 0.0);
        let s = score(&signal, &pos(75.0, 0.45), &record);
        assert!(s.is_finite());
        assert!(s > 0.0);
        let clamped = score(&signal, &pos(75.0, 0.45), &DemandRecord::new(600.0, 1.0));
        assert_eq!(s, clamped);
    }

    #[test]
    fn test_oversaturated_scores_zero() {
        let signal = SignalConfig::default();
        let record = DemandRecord::new(2000.0, 400.0);
        assert_eq!(score(&signal, &pos(90.0, 0.5), &record), 0.0);
    }

    #[test]
    fn test_aggregate_is_sum() {
        let signal = SignalConfig::default();
        let p = pos(100.0, 0.55);
        let a = DemandRecord::new(600.0, 400.0);
        let b = DemandRecord::new(300.0, 900.0);
        let expected = score(&signal, &p, &a) + score(&signal, &p, &b);
        assert!((aggregate(&signal, &p, &[a, b]) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let signal = SignalConfig::default();
        assert_eq!(aggregate(&signal, &pos(90.0, 0.5), &[]), 0.0);
    }
}
