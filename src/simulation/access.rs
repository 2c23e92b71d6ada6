//! Per-tick access simulation.
//!
//! One `step` per frame callback, keyed by elapsed time rather than frame
//! count. Sequential, Block and Stride fully re-assign every cell's access
//! flag each tick; Random only ever sets flags, so earlier picks stay marked
//! until another pattern's full reset wipes them. That trailing behavior is
//! deliberate and pinned by tests below.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::simulation::grid::CellGrid;
use crate::simulation::pattern::AccessPattern;

/// Edge length of the square touched by the Block pattern.
pub const BLOCK_SIZE: usize = 4;

/// Step width of the Stride pattern.
pub const STRIDE: usize = 4;

/// Mutates the grid's access state once per tick according to the active
/// pattern. Owns the RNG for the Random pattern so stepping allocates
/// nothing.
pub struct AccessSimulator {
    rng: StdRng,
}

impl AccessSimulator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic simulator for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance the grid to elapsed time `t`. `frame_delta` is the time since
    /// the previous step and gates the Random pattern's pick rate.
    pub fn step(&mut self, grid: &mut CellGrid, t: f32, frame_delta: f32) {
        match AccessPattern::from_time(t) {
            AccessPattern::Sequential => Self::step_sequential(grid, t),
            AccessPattern::Random => self.step_random(grid, t, frame_delta),
            AccessPattern::Block => Self::step_block(grid, t),
            AccessPattern::Stride => Self::step_stride(grid, t),
        }
    }

    /// One cell at a time, advancing ten cells per second.
    fn step_sequential(grid: &mut CellGrid, t: f32) {
        let total = grid.len() as u64;
        let target = ((t * 10.0).floor() as u64 % total) as usize;
        for cell in grid.cells_mut() {
            cell.is_accessed = cell.index == target;
            if cell.is_accessed {
                cell.access_time = t;
            }
        }
    }

    /// Roughly five picks per second; never clears earlier picks.
    fn step_random(&mut self, grid: &mut CellGrid, t: f32, frame_delta: f32) {
        let fired = (t * 5.0).floor() != ((t - frame_delta) * 5.0).floor();
        if !fired {
            return;
        }
        let target = self.rng.random_range(0..grid.len());
        let cell = &mut grid.cells_mut()[target];
        cell.is_accessed = true;
        cell.access_time = t;
    }

    /// One 4x4 block at a time, advancing three blocks per second.
    fn step_block(grid: &mut CellGrid, t: f32) {
        let blocks_per_row = grid.cols() / BLOCK_SIZE;
        let num_blocks = grid.len() / (BLOCK_SIZE * BLOCK_SIZE);
        if blocks_per_row == 0 || num_blocks == 0 {
            return;
        }

        let block_index = ((t * 3.0).floor() as u64 % num_blocks as u64) as usize;
        let start_row = (block_index / blocks_per_row) * BLOCK_SIZE;
        let start_col = (block_index % blocks_per_row) * BLOCK_SIZE;

        for cell in grid.cells_mut() {
            cell.is_accessed = cell.row >= start_row
                && cell.row < start_row + BLOCK_SIZE
                && cell.col >= start_col
                && cell.col < start_col + BLOCK_SIZE;
            if cell.is_accessed {
                cell.access_time = t;
            }
        }
    }

    /// Every fourth cell from a phase that advances eight steps per second.
    fn step_stride(grid: &mut CellGrid, t: f32) {
        let start = ((t * 8.0).floor() as u64 % STRIDE as u64) as usize;
        for cell in grid.cells_mut() {
            cell.is_accessed = cell.index >= start && (cell.index - start) % STRIDE == 0;
            if cell.is_accessed {
                cell.access_time = t;
            }
        }
    }
}

impl Default for AccessSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::grid::GridConfig;

    fn grid(rows: usize, cols: usize) -> CellGrid {
        CellGrid::new(GridConfig { rows, cols }).unwrap()
    }

    fn accessed_indices(grid: &CellGrid) -> Vec<usize> {
        grid.cells()
            .iter()
            .filter(|c| c.is_accessed)
            .map(|c| c.index)
            .collect()
    }

    #[test]
    fn sequential_marks_exactly_one_cell() {
        let mut g = grid(4, 4);
        let mut sim = AccessSimulator::with_seed(0);
        // t = 0.31 -> floor(3.1) % 16 = 3.
        sim.step(&mut g, 0.31, 0.016);
        assert_eq!(accessed_indices(&g), vec![3]);
        assert_eq!(g.cell(3).unwrap().access_time, 0.31);

        // Target wraps around the total cell count.
        let mut sim = AccessSimulator::with_seed(0);
        sim.step(&mut g, 2.05, 0.016); // floor(20.5) % 16 = 4
        assert_eq!(accessed_indices(&g), vec![4]);
    }

    #[test]
    fn sequential_clears_previous_target() {
        let mut g = grid(4, 4);
        let mut sim = AccessSimulator::with_seed(0);
        sim.step(&mut g, 0.31, 0.016);
        sim.step(&mut g, 0.41, 0.1);
        assert_eq!(accessed_indices(&g), vec![4]);
        // The old target keeps its stamp but loses the flag.
        let old = g.cell(3).unwrap();
        assert!(!old.is_accessed);
        assert_eq!(old.access_time, 0.31);
    }

    #[test]
    fn random_fires_only_when_crossing_a_fifth_of_a_second() {
        let mut g = grid(4, 4);
        let mut sim = AccessSimulator::with_seed(7);
        // 0.70 -> 0.71 stays inside the same 0.2s bucket: no pick.
        sim.step(&mut g, 0.71, 0.01);
        assert!(accessed_indices(&g).is_empty());
        // Crossing 0.8 fires exactly one pick.
        sim.step(&mut g, 0.81, 0.02);
        assert_eq!(accessed_indices(&g).len(), 1);
    }

    #[test]
    fn random_trail_persists_until_full_reset() {
        let mut g = grid(16, 16);
        let mut sim = AccessSimulator::with_seed(42);
        sim.step(&mut g, 0.61, 0.1);
        let first = accessed_indices(&g);
        assert_eq!(first.len(), 1);

        sim.step(&mut g, 0.81, 0.2);
        let second = accessed_indices(&g);
        // Earlier picks stay marked: this pattern only ever adds.
        for idx in &first {
            assert!(second.contains(idx));
        }

        // A Sequential tick fully re-assigns every flag and wipes the trail.
        sim.step(&mut g, 2.01, 0.016);
        assert_eq!(accessed_indices(&g).len(), 1);
    }

    #[test]
    fn block_marks_a_contiguous_square() {
        let mut g = grid(32, 32);
        let mut sim = AccessSimulator::with_seed(0);
        // t = 1.1 -> Block pattern, block_index = floor(3.3) % 64 = 3.
        sim.step(&mut g, 1.1, 0.016);
        let accessed = accessed_indices(&g);
        assert_eq!(accessed.len(), 16);
        // Block 3 of a 32-wide grid starts at row 0, col 12.
        for idx in accessed {
            let cell = g.cell(idx).unwrap();
            assert!(cell.row < 4);
            assert!((12..16).contains(&cell.col));
            assert_eq!(cell.access_time, 1.1);
        }
    }

    #[test]
    fn block_does_not_wrap_at_grid_edges() {
        let mut g = grid(8, 8);
        let mut sim = AccessSimulator::with_seed(0);
        // 4 blocks total, 2 per row; block_index = floor(3.9) % 4 = 3
        // -> start_row = 4, start_col = 4 (the bottom-right corner block).
        sim.step(&mut g, 1.3, 0.016);
        for cell in g.cells() {
            let inside = cell.row >= 4 && cell.col >= 4;
            assert_eq!(cell.is_accessed, inside, "cell ({}, {})", cell.row, cell.col);
        }
    }

    #[test]
    fn stride_marks_every_fourth_cell_from_start() {
        let mut g = grid(4, 4);
        let mut sim = AccessSimulator::with_seed(0);
        // t = 1.64 -> Stride pattern, start = floor(13.12) % 4 = 1.
        sim.step(&mut g, 1.64, 0.016);
        assert_eq!(accessed_indices(&g), vec![1, 5, 9, 13]);
    }

    #[test]
    fn stride_reassigns_every_cell_each_tick() {
        let mut g = grid(4, 4);
        let mut sim = AccessSimulator::with_seed(0);
        sim.step(&mut g, 1.64, 0.016); // start = 1
        sim.step(&mut g, 1.76, 0.12); // floor(14.08) % 4 = 2
        assert_eq!(accessed_indices(&g), vec![2, 6, 10, 14]);
    }
}
