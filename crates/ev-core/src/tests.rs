//! Unit tests for ev-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ExitId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::from_index(42), id);
    }

    #[test]
    fn ordering_follows_index() {
        assert!(ExitId(0) < ExitId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    #[should_panic(expected = "exceeds u32")]
    fn oversized_index_panics() {
        let _ = ExitId::from_index(u32::MAX as usize + 1);
    }

    #[test]
    fn display() {
        assert_eq!(ExitId(3).to_string(), "ExitId(3)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_and_euclidean() {
        let a = Cell::new(1, 2);
        let b = Cell::new(4, 6);
        assert_eq!(a.manhattan(b), 7);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn neighbours_in_probe_order() {
        let n: Vec<_> = Cell::new(5, 5).neighbours().collect();
        assert_eq!(n, [Cell::new(6, 5), Cell::new(4, 5), Cell::new(5, 6), Cell::new(5, 4)]);
    }

    #[test]
    fn derived_ordering_compares_x_first() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn periodic() {
        assert!(!Step(0).is_periodic(10));
        assert!(!Step(9).is_periodic(10));
        assert!(Step(10).is_periodic(10));
        assert!(Step(20).is_periodic(10));
        assert!(!Step(5).is_periodic(0));
        assert!(Step(21).is_periodic(7));
        assert!(!Step(30).is_periodic(7));
        assert!(Step(1).is_periodic(1));
    }

    #[test]
    fn fraction() {
        assert_eq!(Step(50).fraction_of(200), 0.25);
        assert_eq!(Step(3).fraction_of(0), 1.0);
        assert_eq!(Step::ZERO.next(), Step(1));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn reseed_restarts_stream() {
        let mut r = SimRng::new(7);
        let first: u64 = r.random();
        let _: u64 = r.random();
        r.reseed(7);
        assert_eq!(r.random::<u64>(), first);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }

    #[test]
    fn reseed_records_seed() {
        let mut r = SimRng::new(1);
        assert_eq!(r.seed(), 1);
        r.reseed(99);
        assert_eq!(r.seed(), 99);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            let v: i32 = rng.gen_range(0..17);
            assert!((0..17).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{EnvConfig, RewardConfig};

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.spread_probability, 0.25);
        assert_eq!(cfg.escape_radius, 5.0);
        assert_eq!(cfg.exit_separation, 20.0);
        assert_eq!(cfg.replan_interval, 10);
        assert_eq!(cfg.observation_resolution, 64);
        assert_eq!(cfg.rewards, RewardConfig { escape: 10.0, burn: -10.0, step_penalty: -0.01 });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn observation_len() {
        let cfg = EnvConfig { agent_count: 5, ..EnvConfig::default() };
        assert_eq!(cfg.observation_len(), 64 * 64 + 10 + 1);
    }

    #[test]
    fn rejects_bad_probability() {
        let cfg = EnvConfig { spread_probability: 1.5, ..EnvConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EnvConfig { spread_probability: f64::NAN, ..EnvConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_budget_and_interval() {
        assert!(EnvConfig { max_steps: 0, ..EnvConfig::default() }.validate().is_err());
        assert!(EnvConfig { replan_interval: 0, ..EnvConfig::default() }.validate().is_err());
        assert!(EnvConfig { observation_resolution: 0, ..EnvConfig::default() }.validate().is_err());
    }
}
