//! Pointer interaction with the grid.

pub mod picker;

pub use picker::{HoverCallback, HoverEvent, PointerPicker};
