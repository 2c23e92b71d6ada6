//! Cell grid arena.
//!
//! The grid is a flat `Vec<Cell>` indexed by `row * cols + col`. Geometry is
//! computed once at construction and never changes; only the access flag and
//! the last-access timestamp are mutated during simulation. All components
//! address cells by integer index, so no cell references escape the arena.

use glam::Vec3;
use thiserror::Error;

/// World-space distance between adjacent cell centers.
pub const SPACING: f32 = 0.18;

/// Edge length of a rendered cell cube in world units.
pub const CELL_SIZE: f32 = 0.15;

/// Grid dimensions, validated at grid construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 32, cols: 32 }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid rows must be nonzero")]
    ZeroRows,
    #[error("grid cols must be nonzero")]
    ZeroCols,
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        Ok(())
    }
}

/// One grid position.
///
/// `position` is static world geometry; `access_time` and `is_accessed` are
/// rewritten every simulation tick.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub position: Vec3,
    pub access_time: f32,
    pub is_accessed: bool,
}

/// Fixed arena of `rows * cols` cells, centered on the world origin in the
/// z = 0 plane.
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let GridConfig { rows, cols } = config;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = (col as f32 - cols as f32 / 2.0) * SPACING;
                let y = (rows as f32 / 2.0 - row as f32) * SPACING;
                cells.push(Cell {
                    index: row * cols + col,
                    row,
                    col,
                    position: Vec3::new(x, y, 0.0),
                    access_time: 0.0,
                    is_accessed: false,
                });
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index-based lookup; out-of-range indices resolve to `None`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Extent of the grid along x and y in world units.
    pub fn extents(&self) -> (f32, f32) {
        (self.cols as f32 * SPACING, self.rows as f32 * SPACING)
    }
}
