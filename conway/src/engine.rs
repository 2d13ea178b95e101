//! Simulation engine: owns the grid and advances it one generation at a time.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};
use crate::patterns::Pattern;
use crate::rules;

/// Holds the current grid and computes generation transitions.
///
/// A freshly constructed engine has no grid; one of the `initialize*`
/// methods must be called before [`advance_generation`](Self::advance_generation).
/// Re-initializing discards the previous grid entirely.
pub struct SimulationEngine {
    grid: Option<Grid>,
    // Next-generation states, filled during a transition then swapped in.
    next_cells: Vec<Cell>,
    generation: u64,
    rng: ChaCha8Rng,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// Engine whose random initial grids are seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Engine with a reproducible random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            grid: None,
            next_cells: Vec::new(),
            generation: 0,
            rng,
        }
    }

    /// Replaces the grid with a `rows x cols` grid of random cells.
    pub fn initialize(&mut self, rows: usize, cols: usize) {
        let grid = Grid::random(rows, cols, &mut self.rng);
        debug!(rows, cols, population = grid.population(), "Initialized random grid");
        self.install(grid);
    }

    /// Replaces the grid with explicit content.
    pub fn initialize_with(&mut self, grid: Grid) {
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            population = grid.population(),
            "Initialized grid"
        );
        self.install(grid);
    }

    /// Replaces the grid with an all-dead `rows x cols` grid holding
    /// `pattern` at its centre.
    pub fn initialize_with_pattern(&mut self, rows: usize, cols: usize, pattern: &Pattern) -> Result<()> {
        let grid = pattern.centered_in(rows, cols)?;
        debug!(pattern = pattern.name, rows, cols, "Initialized grid from pattern");
        self.install(grid);
        Ok(())
    }

    fn install(&mut self, grid: Grid) {
        self.next_cells = Vec::with_capacity(grid.rows() * grid.cols());
        self.grid = Some(grid);
        self.generation = 0;
    }

    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Owned copy of the current grid.
    pub fn snapshot(&self) -> Option<Grid> {
        self.grid.clone()
    }

    /// Generations advanced since the last initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves every cell to the next generation and returns the updated grid.
    ///
    /// All next states are computed from the pre-transition grid before any
    /// cell is changed, so no cell ever sees a partially updated neighbour.
    pub fn advance_generation(&mut self) -> Result<&Grid> {
        let grid = self.grid.as_mut().ok_or(Error::Uninitialized)?;

        self.next_cells.clear();
        self.next_cells.extend(grid.iter().map(|(row, col, cell)| {
            Cell::new(rules::next_state(cell.is_alive(), grid.alive_neighbors(row, col)))
        }));

        grid.swap_cells(&mut self.next_cells);
        self.generation += 1;
        trace!(generation = self.generation, population = grid.population(), "Advanced generation");

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    #[test]
    fn test_advance_before_initialize_fails() {
        let mut engine = SimulationEngine::with_seed(1);
        assert!(!engine.is_ready());
        assert!(matches!(engine.advance_generation(), Err(Error::Uninitialized)));
    }

    #[test]
    fn test_blinker() {
        let mut engine = SimulationEngine::with_seed(1);
        engine.initialize_with(Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap());

        let grid = engine.advance_generation().unwrap();
        assert_eq!(alive_cells(grid), vec![(1, 2), (2, 2), (3, 2)]);

        let grid = engine.advance_generation().unwrap();
        assert_eq!(alive_cells(grid), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        for (rows, cols) in [(1, 1), (3, 7), (10, 10)] {
            let mut engine = SimulationEngine::with_seed(1);
            engine.initialize_with(Grid::dead(rows, cols));
            let grid = engine.advance_generation().unwrap();
            assert_eq!(grid.population(), 0);
            assert_eq!(grid.dimensions(), (rows, cols));
        }
    }

    #[test]
    fn test_lone_cell_dies_everywhere() {
        for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2), (0, 1), (1, 0), (1, 1)] {
            let mut engine = SimulationEngine::with_seed(1);
            engine.initialize_with(Grid::from_alive(3, 3, &[(row, col)]).unwrap());
            assert_eq!(engine.advance_generation().unwrap().population(), 0);
        }
    }

    #[test]
    fn test_corner_block_survives_without_wraparound() {
        // A block in the corner would gain neighbours if edges wrapped.
        let mut engine = SimulationEngine::with_seed(1);
        let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
        engine.initialize_with(Grid::from_alive(4, 4, &block).unwrap());
        let grid = engine.advance_generation().unwrap();
        assert_eq!(alive_cells(grid), block.to_vec());
    }

    #[test]
    fn test_zero_sized_grid_is_noop() {
        let mut engine = SimulationEngine::with_seed(1);
        engine.initialize(0, 0);
        assert!(engine.advance_generation().unwrap().is_empty());

        engine.initialize(4, 0);
        let grid = engine.advance_generation().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (4, 0));
    }

    #[test]
    fn test_reinitialize_replaces_grid() {
        let mut engine = SimulationEngine::with_seed(3);
        engine.initialize(8, 8);
        engine.advance_generation().unwrap();
        engine.initialize(2, 5);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().map(Grid::dimensions), Some((2, 5)));
        assert_eq!(engine.advance_generation().unwrap().dimensions(), (2, 5));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = SimulationEngine::with_seed(42);
        let mut b = SimulationEngine::with_seed(42);
        a.initialize(20, 30);
        b.initialize(20, 30);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = SimulationEngine::with_seed(1);
        engine.initialize_with(Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap());
        let before = engine.snapshot().unwrap();
        engine.advance_generation().unwrap();
        assert_eq!(alive_cells(&before), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_initialize_with_pattern() {
        let mut engine = SimulationEngine::with_seed(1);
        let glider = patterns::find("glider").unwrap();
        engine.initialize_with_pattern(10, 10, glider).unwrap();
        assert_eq!(engine.grid().map(Grid::population), Some(5));

        let err = engine.initialize_with_pattern(2, 2, glider).unwrap_err();
        assert!(matches!(err, Error::PatternTooLarge { .. }));
    }
}
