// transition.rs - Generation transition properties over arbitrary grids

use conway::{Grid, SimulationEngine};
use proptest::collection::vec;
use proptest::prelude::*;

/// Grids up to 12x12, including zero-sized ones.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (0..12usize, 0..12usize).prop_flat_map(|(rows, cols)| {
        vec(any::<bool>(), rows * cols)
            .prop_map(move |bits| Grid::from_fn(rows, cols, |row, col| bits[row * cols + col]))
    })
}

/// Brute-force neighbour count with signed coordinates.
fn reference_count(grid: &Grid, row: usize, col: usize) -> usize {
    let (rows, cols) = (grid.rows() as i64, grid.cols() as i64);
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r >= 0 && r < rows && c >= 0 && c < cols && grid.is_alive(r as usize, c as usize) {
                count += 1;
            }
        }
    }
    count
}

fn advance(grid: &Grid) -> Grid {
    let mut engine = SimulationEngine::with_seed(0);
    engine.initialize_with(grid.clone());
    engine.advance_generation().unwrap().clone()
}

proptest! {
    #[test]
    fn neighbor_count_matches_reference(grid in arb_grid()) {
        for (row, col, _) in grid.iter() {
            prop_assert_eq!(usize::from(grid.alive_neighbors(row, col)), reference_count(&grid, row, col));
        }
    }

    #[test]
    fn rule_applies_to_every_cell(grid in arb_grid()) {
        let next = advance(&grid);
        prop_assert_eq!(next.dimensions(), grid.dimensions());

        for (row, col, cell) in grid.iter() {
            let after = next.is_alive(row, col);
            match reference_count(&grid, row, col) {
                2 => {
                    prop_assert_eq!(after, cell.is_alive(), "({}, {}) with 2 neighbours", row, col);
                }
                3 => {
                    prop_assert!(after, "({}, {}) with 3 neighbours should be alive", row, col);
                }
                n => {
                    prop_assert!(!after, "({}, {}) with {} neighbours should be dead", row, col, n);
                }
            }
        }
    }

    #[test]
    fn dead_grid_stays_dead(rows in 0..40usize, cols in 0..40usize) {
        let next = advance(&Grid::dead(rows, cols));
        prop_assert_eq!(next, Grid::dead(rows, cols));
    }

    #[test]
    fn lone_cell_dies(rows in 1..20usize, cols in 1..20usize, seed in any::<(usize, usize)>()) {
        let (row, col) = (seed.0 % rows, seed.1 % cols);
        let grid = Grid::from_alive(rows, cols, &[(row, col)]).unwrap();
        prop_assert_eq!(advance(&grid).population(), 0);
    }

    #[test]
    fn reinitialize_reports_new_dimensions(
        first in (0..30usize, 0..30usize),
        second in (0..30usize, 0..30usize),
    ) {
        let mut engine = SimulationEngine::with_seed(5);
        engine.initialize(first.0, first.1);
        engine.advance_generation().unwrap();
        engine.initialize(second.0, second.1);
        prop_assert_eq!(engine.grid().map(Grid::dimensions), Some(second));
        prop_assert_eq!(engine.advance_generation().unwrap().dimensions(), second);
    }
}
