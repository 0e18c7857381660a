//! The `Agent` record and its three operations.

use std::collections::VecDeque;

use ev_core::{AgentId, Cell};
use ev_grid::{ExitIndex, FireMap, Grid, Pathfinder};

use crate::AgentStatus;

/// A single evacuee.
///
/// Positions are always whole cells.  Status only ever moves away from
/// `Evacuating`; [`evaluate_status`](Self::evaluate_status) ignores agents
/// that are already resolved, and the environment skips them entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    id:       AgentId,
    position: Cell,
    route:    VecDeque<Cell>,
    status:   AgentStatus,
}

impl Agent {
    /// An evacuating agent at `position` with no route yet.
    pub fn new(id: AgentId, position: Cell) -> Self {
        Self {
            id,
            position,
            route:  VecDeque::new(),
            status: AgentStatus::Evacuating,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    #[inline]
    pub fn is_evacuating(&self) -> bool {
        self.status == AgentStatus::Evacuating
    }

    /// Remaining planned cells, next step first.
    #[inline]
    pub fn route(&self) -> &VecDeque<Cell> {
        &self.route
    }

    #[inline]
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    /// Replace the route with a fresh search from the current cell to `goal`
    /// that avoids burning cells.  An unreachable goal leaves the route empty.
    pub fn replan<P>(&mut self, pathfinder: &P, grid: &Grid, goal: Cell, fire: &FireMap)
    where
        P: Pathfinder + ?Sized,
    {
        self.route = pathfinder.find_path(grid, Some(fire), self.position, goal).into();
    }

    /// Step onto the next route cell.  Returns `false` (and stays put) when
    /// the route is empty.
    pub fn advance(&mut self) -> bool {
        match self.route.pop_front() {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }

    /// Resolve the agent's status against the current fire and exits.
    ///
    /// Burning beats escaping: an agent standing on fire is burned even if an
    /// exit is within `escape_radius`.  Returns the new status when this call
    /// changed it.
    pub fn evaluate_status(
        &mut self,
        fire:          &FireMap,
        exits:         &ExitIndex,
        escape_radius: f64,
    ) -> Option<AgentStatus> {
        if self.status.is_terminal() {
            return None;
        }
        let next = if fire.is_burning(self.position) {
            AgentStatus::Burned
        } else if exits.any_within(self.position, escape_radius) {
            AgentStatus::Escaped
        } else {
            return None;
        };
        self.status = next;
        self.route.clear();
        Some(next)
    }
}
