//! # memgrid: Memory Access Pattern Visualization
//!
//! memgrid renders a fixed grid of memory cells and animates four canonical
//! access patterns over it: Sequential, Random, Block, and Stride. Accessed
//! cells flash red and cool down to blue and gray as a function of
//! time-since-last-access; hovering the pointer over a cell resolves it back
//! to its grid coordinates for inspection.
//!
//! ## Architecture Overview
//!
//! - [`simulation`] - the cell arena ([`simulation::CellGrid`]), the pattern
//!   schedule ([`simulation::AccessPattern`]), and the per-tick access
//!   simulation ([`simulation::AccessSimulator`]). The schedule is a pure
//!   function of elapsed time; no transition state is stored.
//! - [`rendering`] - the recency-to-color decay curve and the wgpu instanced
//!   renderer ([`rendering::GridRenderer`]). The whole grid is one draw call;
//!   instance slot k always carries grid cell k.
//! - [`input`] - pointer picking ([`input::PointerPicker`]): cursor position
//!   to normalized device coordinates to a world ray, intersected against
//!   the instanced cubes and resolved back to a cell by index.
//! - [`ui`] - the fixed-target camera shared by rendering and picking.
//! - [`scene`] - [`scene::GridScene`] composes the above and owns the grid.
//! - [`app`] - winit shell: window, wgpu device and surface, per-frame tick.
//!
//! ## Data Flow
//!
//! ```text
//! Frame callback -> schedule -> access simulation -> color mapping
//!                -> instance buffer write (once) -> instanced draw
//! Pointer event  -> ray cast -> cell hit -> hover callback
//! ```
//!
//! Everything runs on the single winit event loop; the simulation is keyed
//! by elapsed seconds, so it is frame-rate independent.
//!
//! ## Dependencies
//!
//! - **Graphics**: `wgpu` (GPU abstraction), `winit` (windowing)
//! - **Math**: `glam` (SIMD math types), `bytemuck` (safe transmutation)
//! - **Simulation**: `rand` (Random pattern picks)
//! - **Diagnostics**: `log` + `env_logger`, `thiserror` for typed errors

pub mod app;
pub mod input;
pub mod rendering;
pub mod scene;
pub mod simulation;
pub mod ui;
