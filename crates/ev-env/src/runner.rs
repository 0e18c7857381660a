//! Episode drivers: one episode against a policy, or many across seeds.

use std::sync::Arc;

use ev_core::EnvConfig;
use ev_grid::{Grid, Pathfinder};
use ev_policy::ExitPolicy;

use crate::{EnvBuilder, EnvResult, EpisodeObserver, EpisodeSummary, EvacuationEnv, NoopObserver};

/// Reset `env` and step it with `policy` until the episode ends.
///
/// `seed` is forwarded to [`EvacuationEnv::reset`].  The observer sees the
/// reset state, every step, and the final summary.  A policy that returns an
/// out-of-range exit aborts the episode with
/// [`EnvError::InvalidAction`][crate::EnvError::InvalidAction].
pub fn run_episode<P, Pol, O>(
    env:      &mut EvacuationEnv<P>,
    policy:   &mut Pol,
    observer: &mut O,
    seed:     Option<u64>,
) -> EnvResult<EpisodeSummary>
where
    P:   Pathfinder,
    Pol: ExitPolicy + ?Sized,
    O:   EpisodeObserver + ?Sized,
{
    let mut observation = env.reset(seed)?;
    policy.on_reset();
    observer.on_reset(&env.view());

    let mut total_reward = 0.0;
    loop {
        let action = policy.select_exit(observation.as_slice(), &env.policy_context());
        let outcome = env.step(action)?;
        total_reward += outcome.reward;
        observer.on_step(&env.view(), action, &outcome);

        if outcome.is_done() {
            let summary = EpisodeSummary {
                steps:      env.step_count(),
                total_reward,
                counts:     env.status_counts(),
                terminated: outcome.terminated,
                truncated:  outcome.truncated,
            };
            observer.on_episode_end(&summary);
            return Ok(summary);
        }
        observation = outcome.observation;
    }
}

/// Run one independent episode per seed on a shared floor plan.
///
/// Each episode builds its own environment from `config` with
/// `config.seed` replaced by the episode seed, and its own policy from
/// `make_policy(seed)`.  Results are returned in `seeds` order.
///
/// With the `parallel` Cargo feature episodes run on Rayon's thread pool;
/// since nothing is shared but the immutable grid, results are identical to
/// the sequential path.
pub fn run_batch<Pol, F>(
    grid:        Arc<Grid>,
    config:      &EnvConfig,
    seeds:       &[u64],
    make_policy: F,
) -> Vec<EnvResult<EpisodeSummary>>
where
    Pol: ExitPolicy,
    F:   Fn(u64) -> Pol + Sync,
{
    let run_one = |seed: u64| -> EnvResult<EpisodeSummary> {
        let mut env = EnvBuilder::new(Arc::clone(&grid))
            .config(config.clone())
            .seed(seed)
            .build()?;
        let mut policy = make_policy(seed);
        run_episode(&mut env, &mut policy, &mut NoopObserver, None)
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}

/// Mean total reward over the successful episodes of a batch, or `None` if
/// every episode failed.
pub fn mean_reward(results: &[EnvResult<EpisodeSummary>]) -> Option<f64> {
    let (sum, n) = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .fold((0.0, 0usize), |(s, n), summary| (s + summary.total_reward, n + 1));
    (n > 0).then(|| sum / n as f64)
}
