//! Unit tests for ev-agent.

#[cfg(test)]
mod helpers {
    use ev_core::Cell;
    use ev_grid::{ExitIndex, FireMap, Grid};

    pub fn open_world() -> (Grid, FireMap, ExitIndex) {
        let g = Grid::open(20, 20);
        let fire = FireMap::for_grid(&g);
        let exits = ExitIndex::new(vec![Cell::new(1, 1)]);
        (g, fire, exits)
    }
}

#[cfg(test)]
mod movement {
    use ev_core::{AgentId, Cell};
    use ev_grid::AStarPathfinder;

    use crate::{Agent, AgentStatus};

    #[test]
    fn new_agent_is_evacuating_without_route() {
        let a = Agent::new(AgentId(0), Cell::new(3, 4));
        assert_eq!(a.status(), AgentStatus::Evacuating);
        assert!(!a.has_route());
        assert_eq!(a.position(), Cell::new(3, 4));
    }

    #[test]
    fn advance_on_empty_route_stays_put() {
        let mut a = Agent::new(AgentId(0), Cell::new(3, 4));
        assert!(!a.advance());
        assert_eq!(a.position(), Cell::new(3, 4));
    }

    #[test]
    fn replan_then_walk_to_goal() {
        let (g, fire, _) = super::helpers::open_world();
        let mut a = Agent::new(AgentId(0), Cell::new(5, 5));
        a.replan(&AStarPathfinder, &g, Cell::new(8, 5), &fire);
        assert_eq!(a.route().len(), 3);

        assert!(a.advance());
        assert_eq!(a.position(), Cell::new(6, 5));
        assert!(a.advance());
        assert!(a.advance());
        assert_eq!(a.position(), Cell::new(8, 5));
        assert!(!a.advance());
    }

    #[test]
    fn replan_replaces_previous_route() {
        let (g, mut fire, _) = super::helpers::open_world();
        let mut a = Agent::new(AgentId(0), Cell::new(5, 5));
        a.replan(&AStarPathfinder, &g, Cell::new(15, 5), &fire);
        assert_eq!(a.route().len(), 10);

        fire.ignite(Cell::new(15, 5));
        a.replan(&AStarPathfinder, &g, Cell::new(15, 5), &fire);
        assert!(!a.has_route(), "goal on fire → no route");
    }
}

#[cfg(test)]
mod status {
    use ev_core::{AgentId, Cell};
    use ev_grid::{ExitIndex, FireMap};

    use crate::{Agent, AgentStatus, StatusCounts};

    #[test]
    fn far_from_exit_and_fire_stays_evacuating() {
        let (_, fire, exits) = super::helpers::open_world();
        let mut a = Agent::new(AgentId(0), Cell::new(10, 10));
        assert_eq!(a.evaluate_status(&fire, &exits, 5.0), None);
        assert_eq!(a.status(), AgentStatus::Evacuating);
    }

    #[test]
    fn near_exit_escapes() {
        let (_, fire, exits) = super::helpers::open_world();
        let mut a = Agent::new(AgentId(0), Cell::new(4, 4)); // ≈4.24 from (1,1)
        assert_eq!(a.evaluate_status(&fire, &exits, 5.0), Some(AgentStatus::Escaped));
    }

    #[test]
    fn burning_cell_wins_over_exit() {
        let (_, mut fire, exits) = super::helpers::open_world();
        fire.ignite(Cell::new(2, 2));
        let mut a = Agent::new(AgentId(0), Cell::new(2, 2));
        assert_eq!(a.evaluate_status(&fire, &exits, 5.0), Some(AgentStatus::Burned));
    }

    #[test]
    fn terminal_status_is_monotone() {
        let (_, fire, exits) = super::helpers::open_world();
        let mut escaped = Agent::new(AgentId(0), Cell::new(1, 2));
        escaped.evaluate_status(&fire, &exits, 5.0);
        assert_eq!(escaped.status(), AgentStatus::Escaped);

        let mut burning = FireMap::new(20, 20);
        burning.ignite(Cell::new(10, 10));
        let mut burned = Agent::new(AgentId(1), Cell::new(10, 10));
        burned.evaluate_status(&burning, &exits, 5.0);
        assert_eq!(burned.status(), AgentStatus::Burned);

        // Arbitrary inputs: everything on fire, exits everywhere or nowhere.
        let mut all_fire = FireMap::new(20, 20);
        for x in 0..20 {
            for y in 0..20 {
                all_fire.ignite(Cell::new(x, y));
            }
        }
        let everywhere = ExitIndex::new(vec![Cell::new(10, 10), Cell::new(1, 2)]);
        let nowhere = ExitIndex::new(vec![]);

        for i in 0..100 {
            let (f, e) = match i % 3 {
                0 => (&all_fire, &everywhere),
                1 => (&fire, &nowhere),
                _ => (&burning, &everywhere),
            };
            assert_eq!(escaped.evaluate_status(f, e, 50.0), None);
            assert_eq!(burned.evaluate_status(f, e, 50.0), None);
        }
        assert_eq!(escaped.status(), AgentStatus::Escaped);
        assert_eq!(burned.status(), AgentStatus::Burned);
    }

    #[test]
    fn counts_tally() {
        let counts: StatusCounts = [
            AgentStatus::Evacuating,
            AgentStatus::Escaped,
            AgentStatus::Escaped,
            AgentStatus::Burned,
        ]
        .into_iter()
        .collect();
        assert_eq!(counts, StatusCounts { evacuating: 1, escaped: 2, burned: 1 });
        assert_eq!(counts.total(), 4);
        assert!(!counts.all_resolved());
    }

    #[test]
    fn status_display() {
        assert_eq!(AgentStatus::Burned.to_string(), "burned");
        assert!(AgentStatus::Escaped.is_terminal());
        assert!(!AgentStatus::Evacuating.is_terminal());
    }
}
