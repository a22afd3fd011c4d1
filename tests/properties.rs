//! Property tests for the timing model and candidate bounds.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_signal_timing::ga::{operators, Chromosome, GaConfig};
use u_signal_timing::pso::{PsoConfig, SwarmPosition};
use u_signal_timing::timing::SignalConfig;

proptest! {
    #[test]
    fn split_respects_floor_and_usable_green(cycle in 60u32..=120, ratio in 0.0f64..1.0) {
        let signal = SignalConfig::default();
        let split = signal.split_green(cycle, ratio);
        prop_assert!(split.g1 >= signal.min_green_time);
        prop_assert!(split.g2 >= signal.min_green_time);
        prop_assert!(split.total() <= cycle - signal.lost_time);
    }

    #[test]
    fn delay_never_below_cycle(
        cycle in 60.0f64..=120.0,
        g1 in 0.0f64..110.0,
        g2 in 0.0f64..110.0,
        q1 in 1.0f64..3000.0,
        q2 in 1.0f64..3000.0,
    ) {
        let signal = SignalConfig::default();
        prop_assert!(signal.estimate_delay(cycle, g1, g2, q1, q2) >= cycle);
    }

    #[test]
    fn delay_non_decreasing_in_demand(
        g1 in 10.0f64..100.0,
        g2 in 10.0f64..100.0,
        q in 1.0f64..2500.0,
        extra in 0.0f64..500.0,
        other in 1.0f64..1700.0,
    ) {
        let signal = SignalConfig::default();
        let lo = signal.estimate_delay(90.0, g1, g2, q, other);
        let hi = signal.estimate_delay(90.0, g1, g2, q + extra, other);
        prop_assert!(hi >= lo);
        let lo = signal.estimate_delay(90.0, g1, g2, other, q);
        let hi = signal.estimate_delay(90.0, g1, g2, other, q + extra);
        prop_assert!(hi >= lo);
    }

    // Queue delay grows with the green time it is charged against.
    #[test]
    fn delay_non_decreasing_in_green(
        g in 10.0f64..100.0,
        extra in 0.0f64..50.0,
        q1 in 1.0f64..1700.0,
        q2 in 1.0f64..1700.0,
    ) {
        let signal = SignalConfig::default();
        let lo = signal.estimate_delay(90.0, g, 30.0, q1, q2);
        let hi = signal.estimate_delay(90.0, g + extra, 30.0, q1, q2);
        prop_assert!(hi >= lo);
    }

    #[test]
    fn swarm_clamp_restores_bounds(cycle in -1e4f64..1e4, ratio in -10.0f64..10.0) {
        let config = PsoConfig::default();
        let mut p = SwarmPosition { cycle_length: cycle, green_ratio: ratio };
        p.clamp(&config);
        prop_assert!((60.0..=120.0).contains(&p.cycle_length));
        prop_assert!((0.4..=0.6).contains(&p.green_ratio));
        prop_assert!((60..=120).contains(&p.realized_cycle()));
    }

    #[test]
    fn ga_children_stay_in_bounds(seed in any::<u64>()) {
        let config = GaConfig::default().with_mutation_rate(1.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let p1 = Chromosome::random(&config, &mut rng);
        let p2 = Chromosome::random(&config, &mut rng);
        let mut child = operators::uniform_crossover(&p1, &p2, &mut rng);
        operators::mutate(&config, &mut child, &mut rng);
        prop_assert!((60..=120).contains(&child.cycle_length));
        prop_assert!((0.1..=0.9).contains(&child.g1_weight));
        prop_assert!((0.1..=0.9).contains(&child.g2_weight));

        let split = u_signal_timing::ga::fitness::green_times(&config, &child);
        prop_assert!(split.g1 >= 10 && split.g2 >= 10);
        prop_assert!(split.total() <= child.cycle_length - 12);
    }
}
