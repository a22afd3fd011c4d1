//! Ratio-matching score used by the GA.
//!
//! A chromosome scores well when its green split mirrors the demand split:
//!
//! ```text
//! score = 1 / (|g1/g2 - q1/q2| + epsilon)
//! ```
//!
//! This is deliberately a different objective from the swarm's delay-based
//! score; the two are not interchangeable.

use super::config::GaConfig;
use super::types::Chromosome;
use crate::demand::DemandRecord;
use crate::timing::GreenSplit;

/// Green times realized by a chromosome.
pub fn green_times(config: &GaConfig, chromosome: &Chromosome) -> GreenSplit {
    config
        .signal
        .split_green(chromosome.cycle_length, chromosome.green_ratio())
}

/// Score of a chromosome under one record.
pub fn score(config: &GaConfig, chromosome: &Chromosome, record: &DemandRecord) -> f64 {
    let split = green_times(config, chromosome);
    let (q1, q2) = record.clamped(config.signal.min_demand);
    let green_ratio = split.g1 as f64 / split.g2 as f64;
    let demand_ratio = q1 / q2;
    1.0 / ((green_ratio - demand_ratio).abs() + config.epsilon)
}

/// Sum of per-record scores.
pub fn aggregate(config: &GaConfig, chromosome: &Chromosome, records: &[DemandRecord]) -> f64 {
    records.iter().map(|r| score(config, chromosome, r)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrom(c: u32, w1: f64, w2: f64) -> Chromosome {
        Chromosome {
            cycle_length: c,
            g1_weight: w1,
            g2_weight: w2,
        }
    }

    #[test]
    fn test_green_times_use_normalized_weights() {
        let config = GaConfig::default();
        // usable 88, ratio 0.25 -> g1 = 22, g2 = 66
        let split = green_times(&config, &chrom(100, 0.25, 0.75));
        assert_eq!(split, GreenSplit { g1: 22, g2: 66 });
    }

    #[test]
    fn test_score_formula() {
        let config = GaConfig::default();
        let c = chrom(100, 0.25, 0.75);
        let record = DemandRecord::new(600.0, 400.0);
        let expected = 1.0 / ((22.0 / 66.0 - 1.5_f64).abs() + 1e-6);
        assert!((score(&config, &c, &record) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_exact_match_is_bounded() {
        let config = GaConfig::default();
        // usable 88, equal weights -> 44 / 44, demand ratio 1
        let c = chrom(100, 0.5, 0.5);
        let s = score(&config, &c, &DemandRecord::new(500.0, 500.0));
        assert!(s.is_finite());
        assert!((s - 1e6).abs() < 1e-3);
    }

    #[test]
    fn test_better_match_scores_higher() {
        let config = GaConfig::default();
        let record = DemandRecord::new(600.0, 400.0);
        let close = chrom(100, 0.6, 0.4);
        let far = chrom(100, 0.2, 0.8);
        assert!(score(&config, &close, &record) > score(&config, &far, &record));
    }

    #[test]
    fn test_zero_demand_clamped() {
        let config = GaConfig::default();
        let s = score(&config, &chrom(90, 0.5, 0.5), &DemandRecord::new(600.0, 0.0));
        assert!(s.is_finite() && s > 0.0);
    }
}
