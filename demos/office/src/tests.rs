//! Unit tests for the office demo.

#[cfg(test)]
mod config {
    use ev_core::EnvConfig;
    use serde_json::json;

    use crate::{AGENT_COUNT, SEED, demo_defaults, load_config, merge_defaults};

    #[test]
    fn no_file_uses_demo_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, demo_defaults());
        assert_eq!(config.agent_count, AGENT_COUNT);
        assert_eq!(config.seed, SEED);
    }

    #[test]
    fn partial_file_keeps_demo_defaults() {
        let config = merge_defaults(demo_defaults(), json!({ "max_steps": 50 })).unwrap();
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.agent_count, AGENT_COUNT);
        assert_eq!(config.seed, SEED);
        assert_eq!(config.rewards, EnvConfig::default().rewards);
    }

    #[test]
    fn rewards_merge_key_wise() {
        let config = merge_defaults(demo_defaults(), json!({ "rewards": { "burn": -25.0 } })).unwrap();
        assert_eq!(config.rewards.burn, -25.0);
        assert_eq!(config.rewards.escape, 10.0);
        assert_eq!(config.agent_count, AGENT_COUNT);
    }

    #[test]
    fn non_object_rejected() {
        assert!(merge_defaults(demo_defaults(), json!([1, 2])).is_err());
    }
}
