//! Scene composition for the grid visualization.
//!
//! [`GridScene`] owns the cell arena and everything that reads or writes it:
//! the access simulator, the instanced renderer, the camera, and the pointer
//! picker. One `update` per frame callback advances the simulation by elapsed
//! time; picking runs from pointer events on the same event loop and never
//! mutates simulation state.

use crate::input::{HoverEvent, PointerPicker};
use crate::rendering::GridRenderer;
use crate::simulation::{AccessPattern, AccessSimulator, CellGrid, ConfigError, GridConfig};
use crate::ui::camera::CameraController;

/// Tracks the last published pattern name so the title update fires on
/// change only, not every tick.
struct PatternLabel {
    published: Option<&'static str>,
}

impl PatternLabel {
    fn new() -> Self {
        Self { published: None }
    }

    /// Name of the pattern active at `t` if it differs from the last one
    /// reported, `None` otherwise.
    fn observe(&mut self, t: f32) -> Option<&'static str> {
        let name = AccessPattern::from_time(t).name();
        if self.published == Some(name) {
            None
        } else {
            self.published = Some(name);
            Some(name)
        }
    }
}

pub struct GridScene {
    pub grid: CellGrid,
    simulator: AccessSimulator,
    pub renderer: GridRenderer,
    pub camera: CameraController,
    picker: PointerPicker,
    label: PatternLabel,
    elapsed: f32,
}

impl GridScene {
    pub fn new(
        device: &wgpu::Device,
        surface_config: &wgpu::SurfaceConfiguration,
        grid_config: GridConfig,
    ) -> Result<Self, ConfigError> {
        let grid = CellGrid::new(grid_config)?;
        log::info!(
            "grid: {} x {} ({} cells)",
            grid.rows(),
            grid.cols(),
            grid.len()
        );

        let renderer = GridRenderer::new(device, surface_config, grid.len());
        let (extent_x, extent_y) = grid.extents();
        let camera =
            CameraController::new(CameraController::framing_distance(extent_x, extent_y));

        Ok(Self {
            grid,
            simulator: AccessSimulator::new(),
            renderer,
            camera,
            picker: PointerPicker::new(),
            label: PatternLabel::new(),
            elapsed: 0.0,
        })
    }

    /// Elapsed simulation time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the simulation by one frame delta.
    pub fn update(&mut self, dt: f32) {
        self.camera.update(dt);
        self.elapsed += dt;
        self.simulator.step(&mut self.grid, self.elapsed, dt);
    }

    /// Newly active pattern name, reported once per change.
    pub fn take_pattern_change(&mut self) -> Option<&'static str> {
        self.label.observe(self.elapsed)
    }

    pub fn render(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, view: &wgpu::TextureView) {
        self.renderer
            .prepare(queue, &self.grid, self.elapsed, &self.camera);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Grid Scene Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Grid Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.05,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.renderer.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render_in_pass(&mut render_pass);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.renderer.resize(device, width, height);
    }

    /// Resolve a pointer position to a hover result.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Option<HoverEvent> {
        self.picker.pick(
            &self.grid,
            &self.camera,
            x,
            y,
            self.renderer.width as f32,
            self.renderer.height as f32,
        )
    }

    /// The pointer left the surface; drop any hover.
    pub fn pointer_left(&mut self) {
        self.picker.clear();
    }

    /// Index of the currently hovered cell, if any.
    pub fn hovered_cell(&self) -> Option<usize> {
        self.picker.hovered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_label_publishes_only_on_change() {
        let mut label = PatternLabel::new();
        assert_eq!(label.observe(0.1), Some("Sequential"));
        assert_eq!(label.observe(0.2), None);
        assert_eq!(label.observe(0.49), None);
        assert_eq!(label.observe(0.51), Some("Random"));
        assert_eq!(label.observe(0.9), None);
        assert_eq!(label.observe(1.1), Some("Block"));
        assert_eq!(label.observe(1.6), Some("Stride"));
        // Wrapping back around republishes the first name.
        assert_eq!(label.observe(2.1), Some("Sequential"));
    }
}
