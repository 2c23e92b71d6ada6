//! Grid cell rendering with wgpu.
//!
//! Draws the whole grid as one instanced draw call of unit cubes. Each tick
//! the CPU staging vec is rewritten in place (slot k is grid cell k), pushed
//! to the GPU with a single buffer write, and drawn with depth testing
//! against a dark background.

use wgpu::util::DeviceExt;

use crate::rendering::color::cell_color;
use crate::simulation::grid::{CellGrid, CELL_SIZE};
use crate::ui::camera::CameraController;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 3],
    _padding: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CellInstance {
    position: [f32; 3],
    size: f32,
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

const fn v(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

// Unit cube centered on the origin, four vertices per face.
const CUBE_VERTICES: [CubeVertex; 24] = [
    // +X
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    // -X
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    // +Y
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    // -Y
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    // +Z (faces the camera)
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    // -Z
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
];

const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // +X
    4, 5, 6, 4, 6, 7, // -X
    8, 9, 10, 8, 10, 11, // +Y
    12, 13, 14, 12, 14, 15, // -Y
    16, 17, 18, 16, 18, 19, // +Z
    20, 21, 22, 20, 22, 23, // -Z
];

/// Fill the instance staging vec from the grid at elapsed time `t`.
///
/// Slot k always carries cell k; the vec is cleared and refilled in place so
/// steady state never reallocates.
pub(crate) fn pack_instances(grid: &CellGrid, t: f32, out: &mut Vec<CellInstance>) {
    out.clear();
    for cell in grid.cells() {
        let age = t - cell.access_time;
        let [r, g, b] = cell_color(cell.is_accessed, age);
        out.push(CellInstance {
            position: cell.position.to_array(),
            size: CELL_SIZE,
            color: [r, g, b, 1.0],
        });
    }
}

/// Renderer for the cell grid using GPU instancing.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    staging: Vec<CellInstance>,
    #[allow(dead_code)]
    depth_texture: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl GridRenderer {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        capacity: usize,
    ) -> Self {
        let width = config.width;
        let height = config.height;

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Grid Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Grid Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Grid Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Cube Index Buffer"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Grid Instance Buffer"),
            size: (capacity * std::mem::size_of::<CellInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (depth_texture, depth_view) = Self::create_depth_texture(device, width, height);

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3, // position
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3, // normal
                },
            ],
        };

        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3, // translation
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32, // uniform scale
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4, // color
                },
            ],
        };

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Grid Cell Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/grid_cells.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Grid Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Grid Cell Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout, instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group,
            camera_buffer,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            instance_count: 0,
            staging: Vec::with_capacity(capacity),
            depth_texture,
            depth_view,
            width,
            height,
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Grid Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    /// Resize the depth target to match the surface.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;

        let (depth_texture, depth_view) = Self::create_depth_texture(device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
    }

    /// Write this tick's per-cell transforms and colors plus the camera
    /// uniform. Exactly one instance-buffer upload per tick.
    pub fn prepare(
        &mut self,
        queue: &wgpu::Queue,
        grid: &CellGrid,
        t: f32,
        camera: &CameraController,
    ) {
        let aspect = self.width as f32 / self.height as f32;
        let camera_uniform = CameraUniform {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
            camera_pos: camera.position().to_array(),
            _padding: 0.0,
        };
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        pack_instances(grid, t, &mut self.staging);
        self.instance_count = self.staging.len() as u32;
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.staging));
    }

    /// Issue the single instanced draw. `prepare` must have run this tick.
    pub fn render_in_pass(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..self.instance_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::grid::GridConfig;

    #[test]
    fn instance_slot_k_carries_cell_k() {
        let mut grid = CellGrid::new(GridConfig { rows: 2, cols: 2 }).unwrap();
        grid.cells_mut()[3].is_accessed = true;
        grid.cells_mut()[3].access_time = 2.0;

        let mut staging = Vec::new();
        pack_instances(&grid, 2.0, &mut staging);

        assert_eq!(staging.len(), 4);
        for (slot, cell) in staging.iter().zip(grid.cells()) {
            assert_eq!(slot.position, cell.position.to_array());
            assert_eq!(slot.size, CELL_SIZE);
        }
        // Slot 3 is the accessed cell: bright red.
        assert_eq!(staging[3].color, [1.0, 0.2, 0.2, 1.0]);
        // Slot 0 was never accessed; at t = 2.0 its age sits in the blue band.
        assert_eq!(staging[0].color, [0.2, 0.3, 0.7, 1.0]);
    }

    #[test]
    fn repacking_reuses_the_staging_allocation() {
        let grid = CellGrid::new(GridConfig { rows: 8, cols: 8 }).unwrap();
        let mut staging = Vec::with_capacity(grid.len());
        pack_instances(&grid, 0.5, &mut staging);
        let ptr = staging.as_ptr();
        pack_instances(&grid, 1.0, &mut staging);
        assert_eq!(staging.as_ptr(), ptr);
        assert_eq!(staging.len(), 64);
    }
}
