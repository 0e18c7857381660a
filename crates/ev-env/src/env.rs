//! The `EvacuationEnv` struct and its reset/step protocol.

use std::fmt;
use std::sync::Arc;

use ev_agent::{Agent, AgentStatus, StatusCounts};
use ev_core::{AgentId, Cell, EnvConfig, ExitId, SimRng, Step};
use ev_fire::FireModel;
use ev_grid::{AStarPathfinder, ExitIndex, FireMap, Grid, Pathfinder};
use ev_policy::PolicyContext;
use tracing::{debug, info, trace, warn};

use crate::observation::{self, AreaResampler, Observation};
use crate::{AgentSnapshot, EnvError, EnvResult, EnvView, StepOutcome, StepSnapshot};

// ── EnvPhase ──────────────────────────────────────────────────────────────────

/// Lifecycle of an environment.
///
/// ```text
/// Ready ──reset──▶ Running ──step (done)──▶ Terminated
///                    ▲                          │
///                    └─────────reset────────────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EnvPhase {
    /// Built, never reset.
    Ready,
    /// Accepting `step` calls.
    Running,
    /// The last step terminated or truncated the episode.
    Terminated,
}

impl fmt::Display for EnvPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnvPhase::Ready      => "ready",
            EnvPhase::Running    => "running",
            EnvPhase::Terminated => "terminated",
        })
    }
}

// ── EvacuationEnv ─────────────────────────────────────────────────────────────

/// A building-evacuation episode under a spreading fire.
///
/// Each [`step`](Self::step):
///
/// 1. advances the step counter;
/// 2. spreads the fire once;
/// 3. for every agent still evacuating: re-plans toward the chosen exit if
///    its route is empty or the counter is a multiple of the re-plan
///    interval, moves one cell, then resolves its status;
/// 4. reports `terminated` when nobody is evacuating and `truncated` when
///    the step budget is used up.
///
/// All randomness comes from one [`SimRng`] owned by the environment, so a
/// fixed seed and action sequence reproduce an episode exactly.
///
/// Create via [`EnvBuilder`][crate::EnvBuilder].
pub struct EvacuationEnv<P: Pathfinder = AStarPathfinder> {
    pub(crate) config:     EnvConfig,
    pub(crate) grid:       Arc<Grid>,
    pub(crate) exits:      ExitIndex,
    pub(crate) fire:       FireModel,
    pub(crate) agents:     Vec<Agent>,
    pub(crate) rng:        SimRng,
    pub(crate) step:       Step,
    pub(crate) target:     Option<ExitId>,
    pub(crate) phase:      EnvPhase,
    pub(crate) pathfinder: P,
    pub(crate) resampler:  AreaResampler,
}

impl<P: Pathfinder> EvacuationEnv<P> {
    // ── Protocol ──────────────────────────────────────────────────────────

    /// Start a new episode.
    ///
    /// `Some(seed)` reseeds the random source; `None` continues the current
    /// stream.  Clears the fire, ignites the grid centre, and places every
    /// agent on a uniformly drawn free, unburnt cell.
    pub fn reset(&mut self, seed: Option<u64>) -> EnvResult<Observation> {
        if let Some(seed) = seed {
            self.rng.reseed(seed);
        }
        self.phase = EnvPhase::Ready;
        self.step = Step::ZERO;
        self.target = None;

        self.fire.reset();
        self.fire.ignite(&self.grid, [self.grid.center()]);

        self.agents.clear();
        self.agents = self.place_agents()?;
        self.phase = EnvPhase::Running;

        debug!(
            ?seed,
            agents  = self.agents.len(),
            exits   = self.exits.len(),
            burning = self.fire.map().burning_count(),
            "episode reset"
        );
        Ok(self.observation())
    }

    /// Advance the episode by one step with all evacuees routed to `action`.
    ///
    /// Fails without touching any state if the environment is not running or
    /// `action` does not name an exit.
    pub fn step(&mut self, action: ExitId) -> EnvResult<StepOutcome> {
        if self.phase != EnvPhase::Running {
            return Err(EnvError::NotRunning { phase: self.phase });
        }
        let goal = self.exits.get(action).ok_or(EnvError::InvalidAction {
            action:     action.index(),
            exit_count: self.exits.len(),
        })?;

        self.step = self.step.next();
        self.target = Some(action);
        self.fire.advance(&self.grid, &mut self.rng);

        let rewards = &self.config.rewards;
        let mut reward = rewards.step_penalty;
        let periodic = self.step.is_periodic(self.config.replan_interval);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid       = &*self.grid;
        let fire       = self.fire.map();
        let exits      = &self.exits;
        let pathfinder = &self.pathfinder;
        let radius     = self.config.escape_radius;

        for agent in self.agents.iter_mut().filter(|a| a.is_evacuating()) {
            if periodic || !agent.has_route() {
                agent.replan(pathfinder, grid, goal, fire);
            }
            agent.advance();
            match agent.evaluate_status(fire, exits, radius) {
                Some(AgentStatus::Escaped) => reward += rewards.escape,
                Some(AgentStatus::Burned)  => reward += rewards.burn,
                _ => {}
            }
        }

        let counts = self.status_counts();
        let terminated = counts.all_resolved();
        let truncated = self.step.0 >= self.config.max_steps;

        trace!(
            step    = self.step.0,
            exit    = action.0,
            reward,
            burning = fire.burning_count(),
            evacuating = counts.evacuating,
            "step"
        );

        if terminated || truncated {
            self.phase = EnvPhase::Terminated;
            info!(
                steps   = self.step.0,
                escaped = counts.escaped,
                burned  = counts.burned,
                remaining = counts.evacuating,
                terminated,
                truncated,
                "episode finished"
            );
        }

        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
        })
    }

    /// The observation for the current state.  Side-effect free.
    pub fn observation(&self) -> Observation {
        observation::assemble(
            &self.resampler,
            self.fire.map(),
            &self.agents,
            self.step,
            self.config.max_steps,
        )
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Rejection-sample one free, unburnt cell per agent (row first, then
    /// column), capped at `max_placement_attempts` draws per agent.
    fn place_agents(&mut self) -> EnvResult<Vec<Agent>> {
        let n = self.config.agent_count;
        let cap = self.config.max_placement_attempts;
        let grid = &*self.grid;
        let fire = self.fire.map();

        if n > 0 && !grid.free_cells().any(|c| !fire.is_burning(c)) {
            return Err(EnvError::Placement { agent: AgentId(0), attempts: 0 });
        }

        let (w, h) = (grid.width() as i32, grid.height() as i32);
        let mut agents = Vec::with_capacity(n);
        for i in 0..n {
            let id = AgentId::from_index(i);
            let mut attempts = 0u64;
            let cell = loop {
                if attempts == cap {
                    return Err(EnvError::Placement { agent: id, attempts });
                }
                attempts += 1;
                if attempts == cap / 2 + 1 && cap > 1 {
                    warn!(agent = i, attempts, cap, "agent placement is struggling to find a free cell");
                }
                let y = self.rng.gen_range(0..h);
                let x = self.rng.gen_range(0..w);
                let cell = Cell::new(x, y);
                if grid.is_free(cell) && !fire.is_burning(cell) {
                    break cell;
                }
            };
            agents.push(Agent::new(id, cell));
        }
        Ok(agents)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> EnvPhase {
        self.phase
    }

    #[inline]
    pub fn step_count(&self) -> Step {
        self.step
    }

    #[inline]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn exits(&self) -> &ExitIndex {
        &self.exits
    }

    #[inline]
    pub fn fire_map(&self) -> &FireMap {
        self.fire.map()
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Exit chosen by the most recent step, if any.
    #[inline]
    pub fn target_exit(&self) -> Option<ExitId> {
        self.target
    }

    /// Size of the discrete action space: one choice per exit.
    #[inline]
    pub fn action_count(&self) -> usize {
        self.exits.len()
    }

    /// Length of every observation this environment produces.
    #[inline]
    pub fn observation_len(&self) -> usize {
        self.config.observation_len()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.agents.iter().map(Agent::status).collect()
    }

    /// Burning cells and agent states for reporting.
    pub fn snapshot(&self) -> StepSnapshot {
        StepSnapshot {
            step:    self.step,
            burning: self.fire.map().burning_cells().collect(),
            agents:  self
                .agents
                .iter()
                .map(|a| AgentSnapshot { id: a.id(), position: a.position(), status: a.status() })
                .collect(),
        }
    }

    /// Borrowed view for observers.
    pub fn view(&self) -> EnvView<'_> {
        EnvView {
            step:   self.step,
            grid:   &self.grid,
            exits:  self.exits.cells(),
            fire:   self.fire.map(),
            agents: &self.agents,
        }
    }

    /// Context handed to an [`ExitPolicy`][ev_policy::ExitPolicy].
    pub fn policy_context(&self) -> PolicyContext<'_> {
        PolicyContext::new(self.step, self.exits.cells(), &self.agents)
    }
}
