//! GPU-accelerated visualization of the cell grid using wgpu.

pub mod color;
pub mod grid_cells;

pub use grid_cells::GridRenderer;
