//! Unit tests for ev-grid.
//!
//! All tests use hand-drawn floor plans so they run without any perception
//! step.

#[cfg(test)]
mod helpers {
    use crate::Grid;

    /// 7x5 room with a solid border and an internal wall that has one gap.
    ///
    /// ```text
    /// #######
    /// #..#..#
    /// #..#..#
    /// #.....#
    /// #######
    /// ```
    pub fn walled_room() -> Grid {
        Grid::parse(
            "#######
             #..#..#
             #..#..#
             #.....#
             #######",
        )
        .unwrap()
    }
}

// ── Grid construction ─────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use ev_core::Cell;

    use crate::{Grid, GridError};

    #[test]
    fn parse_dimensions_and_walls() {
        let g = super::helpers::walled_room();
        assert_eq!((g.width(), g.height()), (7, 5));
        assert!(g.is_wall(Cell::new(0, 0)));
        assert!(g.is_wall(Cell::new(3, 1)));
        assert!(g.is_free(Cell::new(3, 3)));
        assert_eq!(g.free_cell_count(), 13);
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let g = Grid::open(3, 3);
        assert!(g.is_wall(Cell::new(-1, 0)));
        assert!(g.is_wall(Cell::new(0, 3)));
        assert_eq!(g.index_of(Cell::new(3, 0)), None);
    }

    #[test]
    fn index_roundtrip() {
        let g = Grid::open(4, 3);
        for i in 0..g.len() {
            assert_eq!(g.index_of(g.cell_at(i)), Some(i));
        }
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![0u8, 0, 0], vec![0u8, 0]];
        assert!(matches!(Grid::from_rows(&rows), Err(GridError::Ragged { row: 1, .. })));
    }

    #[test]
    fn wrong_buffer_length_rejected() {
        assert!(matches!(
            Grid::new(3, 3, vec![false; 8]),
            Err(GridError::Dimensions { expected: 9, got: 8 })
        ));
        assert!(matches!(Grid::new(0, 3, vec![]), Err(GridError::Empty { .. })));
    }

    #[test]
    fn center_is_half_dimensions() {
        assert_eq!(Grid::open(20, 10).center(), Cell::new(10, 5));
        assert_eq!(Grid::open(7, 5).center(), Cell::new(3, 2));
    }
}

// ── Fire overlay ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod fire_map {
    use ev_core::Cell;

    use crate::FireMap;

    #[test]
    fn ignite_counts_once() {
        let mut f = FireMap::new(5, 5);
        assert!(f.ignite(Cell::new(2, 2)));
        assert!(!f.ignite(Cell::new(2, 2)));
        assert_eq!(f.burning_count(), 1);
        assert!(f.is_burning(Cell::new(2, 2)));
    }

    #[test]
    fn out_of_bounds_ignored() {
        let mut f = FireMap::new(5, 5);
        assert!(!f.ignite(Cell::new(5, 0)));
        assert!(!f.ignite(Cell::new(-1, -1)));
        assert_eq!(f.burning_count(), 0);
        assert!(!f.is_burning(Cell::new(99, 99)));
    }

    #[test]
    fn clear_and_row_major_listing() {
        let mut f = FireMap::new(4, 4);
        f.ignite(Cell::new(3, 0));
        f.ignite(Cell::new(0, 2));
        f.ignite(Cell::new(1, 0));
        let cells: Vec<_> = f.burning_cells().collect();
        assert_eq!(cells, [Cell::new(1, 0), Cell::new(3, 0), Cell::new(0, 2)]);
        f.clear();
        assert_eq!(f.burning_count(), 0);
        assert!(f.as_slice().iter().all(|&b| !b));
    }
}

// ── Exit discovery ────────────────────────────────────────────────────────────

#[cfg(test)]
mod exits {
    use ev_core::{Cell, ExitId};

    use crate::{ExitIndex, Grid, discover_exits};

    #[test]
    fn sealed_plan_has_no_exits() {
        let g = Grid::parse(
            "#####
             #####
             #####
             #####",
        )
        .unwrap();
        assert!(discover_exits(&g, 20.0).is_empty());
    }

    #[test]
    fn first_candidate_always_kept() {
        // Only free cell on any inner ring is (2, 1).
        let g = Grid::parse(
            "#####
             ##.##
             #####
             #####",
        )
        .unwrap();
        assert_eq!(discover_exits(&g, 20.0), [Cell::new(2, 1)]);
    }

    #[test]
    fn top_and_bottom_interleave_per_column() {
        // 50 columns so left/right ends are far apart; separation 0 keeps all
        // distinct candidates, exposing raw scan order.
        let mut g = Grid::open(50, 30);
        for x in 0..50 {
            for y in 0..30 {
                g.set_wall(Cell::new(x, y), true);
            }
        }
        g.set_wall(Cell::new(40, 1), false);
        g.set_wall(Cell::new(5, 28), false);
        g.set_wall(Cell::new(1, 15), false);
        let exits = discover_exits(&g, 0.0);
        assert_eq!(exits, [Cell::new(5, 28), Cell::new(40, 1), Cell::new(1, 15)]);
    }

    #[test]
    fn near_duplicates_merged_greedily() {
        // A doorway 5 cells wide on the top ring of a large room.
        let mut g = Grid::open(60, 60);
        for x in 0..60 {
            for y in 0..60 {
                let border = x <= 1 || y <= 1 || x >= 58 || y >= 58;
                g.set_wall(Cell::new(x, y), border);
            }
        }
        for x in 10..15 {
            g.set_wall(Cell::new(x, 1), false);
        }
        for x in 40..43 {
            g.set_wall(Cell::new(x, 1), false);
        }
        assert_eq!(discover_exits(&g, 20.0), [Cell::new(10, 1), Cell::new(40, 1)]);
    }

    #[test]
    fn separation_is_strict() {
        let mut g = Grid::open(30, 5);
        for x in 0..30 {
            for y in 0..5 {
                g.set_wall(Cell::new(x, y), true);
            }
        }
        g.set_wall(Cell::new(2, 1), false);
        g.set_wall(Cell::new(22, 1), false); // exactly 20 away → merged
        g.set_wall(Cell::new(23, 3), false); // sqrt(21² + 2²) > 20 → kept
        assert_eq!(discover_exits(&g, 20.0), [Cell::new(2, 1), Cell::new(23, 3)]);
    }

    #[test]
    fn index_nearest_and_radius() {
        let idx = ExitIndex::new(vec![Cell::new(0, 0), Cell::new(10, 0)]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(ExitId(1)), Some(Cell::new(10, 0)));
        assert_eq!(idx.get(ExitId(2)), None);

        let (id, d) = idx.nearest(Cell::new(7, 4)).unwrap();
        assert_eq!(id, ExitId(1));
        assert!((d - 5.0).abs() < 1e-9);

        assert!(!idx.any_within(Cell::new(7, 4), 5.0)); // strictly less
        assert!(idx.any_within(Cell::new(8, 3), 5.0));
    }

    #[test]
    fn empty_index() {
        let idx = ExitIndex::new(vec![]);
        assert!(idx.is_empty());
        assert!(idx.nearest(Cell::new(0, 0)).is_none());
        assert!(!idx.any_within(Cell::new(0, 0), 100.0));
    }
}

// ── A* pathfinding ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinding {
    use ev_core::Cell;

    use crate::{AStarPathfinder, FireMap, Grid, Pathfinder};

    fn is_connected(start: Cell, path: &[Cell]) -> bool {
        let mut prev = start;
        path.iter().all(|&c| {
            let ok = prev.manhattan(c) == 1;
            prev = c;
            ok
        })
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let g = Grid::open(5, 5);
        let p = AStarPathfinder.find_path(&g, None, Cell::new(2, 2), Cell::new(2, 2));
        assert!(p.is_empty());
    }

    #[test]
    fn excludes_start_includes_goal() {
        let g = Grid::open(5, 5);
        let p = AStarPathfinder.find_path(&g, None, Cell::new(0, 0), Cell::new(2, 0));
        assert_eq!(p, [Cell::new(1, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn routes_through_gap() {
        let g = super::helpers::walled_room();
        let start = Cell::new(1, 1);
        let goal = Cell::new(5, 1);
        let p = AStarPathfinder.find_path(&g, None, start, goal);
        // Down to row 3, across, back up: 2 + 4 + 2.
        assert_eq!(p.len(), 8);
        assert_eq!(*p.last().unwrap(), goal);
        assert!(is_connected(start, &p));
        assert!(p.iter().all(|&c| g.is_free(c)));
    }

    #[test]
    fn walled_off_goal_is_empty() {
        let g = Grid::parse(
            "#######
             #..#..#
             #..#..#
             #######",
        )
        .unwrap();
        let p = AStarPathfinder.find_path(&g, None, Cell::new(1, 1), Cell::new(5, 1));
        assert!(p.is_empty());
    }

    #[test]
    fn goal_on_wall_or_fire_is_empty() {
        let g = super::helpers::walled_room();
        assert!(AStarPathfinder.find_path(&g, None, Cell::new(1, 1), Cell::new(3, 1)).is_empty());

        let mut fire = FireMap::for_grid(&g);
        fire.ignite(Cell::new(2, 3));
        assert!(AStarPathfinder.find_path(&g, Some(&fire), Cell::new(1, 1), Cell::new(2, 3)).is_empty());
        // Without the overlay the same goal is reachable.
        assert!(!AStarPathfinder.find_path(&g, None, Cell::new(1, 1), Cell::new(2, 3)).is_empty());
    }

    #[test]
    fn fire_blocking_gap_cuts_route() {
        let g = super::helpers::walled_room();
        let mut fire = FireMap::for_grid(&g);
        fire.ignite(Cell::new(3, 3)); // the only gap
        let p = AStarPathfinder.find_path(&g, Some(&fire), Cell::new(1, 1), Cell::new(5, 1));
        assert!(p.is_empty());
    }

    #[test]
    fn detours_around_fire() {
        let g = Grid::open(5, 5);
        let mut fire = FireMap::for_grid(&g);
        fire.ignite(Cell::new(2, 0));
        fire.ignite(Cell::new(2, 1));
        let start = Cell::new(0, 0);
        let p = AStarPathfinder.find_path(&g, Some(&fire), start, Cell::new(4, 0));
        assert_eq!(p.len(), 8);
        assert!(is_connected(start, &p));
        assert!(p.iter().all(|&c| !fire.is_burning(c)));
    }

    #[test]
    fn out_of_bounds_endpoints_are_empty() {
        let g = Grid::open(5, 5);
        assert!(AStarPathfinder.find_path(&g, None, Cell::new(-1, 0), Cell::new(2, 2)).is_empty());
        assert!(AStarPathfinder.find_path(&g, None, Cell::new(0, 0), Cell::new(9, 9)).is_empty());
    }

    #[test]
    #[should_panic(expected = "does not overlay")]
    fn mismatched_fire_map_panics() {
        let g = Grid::open(5, 5);
        let fire = FireMap::new(4, 5);
        AStarPathfinder.find_path(&g, Some(&fire), Cell::new(0, 0), Cell::new(4, 4));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use ev_core::Cell;

    use crate::{AStarPathfinder, FireMap, Grid, Pathfinder};

    proptest! {
        #[test]
        fn open_grid_path_is_manhattan(
            w in 1usize..24, h in 1usize..24,
            sx in 0usize..24, sy in 0usize..24,
            gx in 0usize..24, gy in 0usize..24,
        ) {
            let g = Grid::open(w, h);
            let start = Cell::new((sx % w) as i32, (sy % h) as i32);
            let goal = Cell::new((gx % w) as i32, (gy % h) as i32);
            let p = AStarPathfinder.find_path(&g, None, start, goal);
            prop_assert_eq!(p.len() as u32, start.manhattan(goal));
        }

        #[test]
        fn paths_avoid_walls_and_fire(
            walls in proptest::collection::vec(proptest::bool::weighted(0.25), 16 * 16),
            burning in proptest::collection::vec(proptest::bool::weighted(0.1), 16 * 16),
        ) {
            let mut g = Grid::new(16, 16, walls).unwrap();
            let start = Cell::new(0, 0);
            let goal = Cell::new(15, 15);
            g.set_wall(start, false);

            let mut fire = FireMap::for_grid(&g);
            for (i, &b) in burning.iter().enumerate() {
                if b {
                    fire.ignite(g.cell_at(i));
                }
            }

            let p = AStarPathfinder.find_path(&g, Some(&fire), start, goal);
            let mut prev = start;
            for &c in &p {
                prop_assert!(g.is_free(c));
                prop_assert!(!fire.is_burning(c));
                prop_assert_eq!(prev.manhattan(c), 1);
                prev = c;
            }
            if let Some(&last) = p.last() {
                prop_assert_eq!(last, goal);
            }
        }
    }
}
