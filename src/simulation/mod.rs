//! Grid state and the per-tick access simulation.

pub mod access;
pub mod grid;
pub mod pattern;

pub use access::AccessSimulator;
pub use grid::{Cell, CellGrid, ConfigError, GridConfig};
pub use pattern::AccessPattern;
