use crate::input::HoverCallback;
use crate::scene::GridScene;
use crate::simulation::{ConfigError, GridConfig};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Memory Access Patterns";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub struct App {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: GridScene,
    on_hover: Option<HoverCallback>,
    last_render_time: std::time::Instant,
    frame_count: u32,
    fps_timer: std::time::Instant,
}

impl App {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                return false;
            }
            WindowEvent::Resized(physical_size) => {
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.config.width = physical_size.width;
                    self.config.height = physical_size.height;
                    self.surface.configure(&self.device, &self.config);
                    self.scene
                        .resize(&self.device, physical_size.width, physical_size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Picking is skipped entirely when nobody listens.
                if self.on_hover.is_some() {
                    let hover = self
                        .scene
                        .pointer_moved(position.x as f32, position.y as f32);
                    if let Some(callback) = self.on_hover.as_mut() {
                        callback(hover);
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.scene.pointer_left();
                if let Some(callback) = self.on_hover.as_mut() {
                    callback(None);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scene.camera.handle_scroll(*delta);
            }
            WindowEvent::RedrawRequested => {
                return self.render();
            }
            _ => {}
        }
        true
    }

    fn render(&mut self) -> bool {
        // Acquire the render target first: if it is not ready this frame,
        // the whole tick is skipped and the next callback retries.
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return true;
            }
            Err(wgpu::SurfaceError::Timeout) => return true,
            Err(e) => {
                log::error!("failed to acquire surface texture: {e}");
                return false;
            }
        };

        let now = std::time::Instant::now();
        let dt = now.duration_since(self.last_render_time).as_secs_f32();
        self.last_render_time = now;

        self.scene.update(dt);

        if let Some(name) = self.scene.take_pattern_change() {
            self.window.set_title(&format!("{WINDOW_TITLE}: {name}"));
            log::info!("pattern: {name}");
        }

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.scene.render(&self.device, &self.queue, &view);
        output.present();

        // FPS counter
        self.frame_count += 1;
        if self.fps_timer.elapsed().as_secs_f32() >= 1.0 {
            log::info!("FPS: {}", self.frame_count);
            self.frame_count = 0;
            self.fps_timer = std::time::Instant::now();
        }
        true
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

struct AppState {
    app: Option<App>,
    grid_config: GridConfig,
    on_hover: Option<HoverCallback>,
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(960, 960));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone()).unwrap();

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .unwrap();

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        }))
        .unwrap();

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        // Dimensions were validated before the event loop started.
        let scene = GridScene::new(&device, &config, self.grid_config)
            .expect("grid config validated before run");

        self.app = Some(App {
            window,
            surface,
            device,
            queue,
            config,
            scene,
            on_hover: self.on_hover.take(),
            last_render_time: std::time::Instant::now(),
            frame_count: 0,
            fps_timer: std::time::Instant::now(),
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = &mut self.app else { return };

        if window_id != app.window().id() {
            return;
        }

        if !app.handle_event(&event) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(app) = &self.app {
            app.request_redraw();
        }
    }
}

/// Open a window and run the visualization until it is closed.
///
/// `on_hover` is invoked from pointer events with the hovered cell (or
/// `None` on a miss or when the pointer leaves the surface); passing no
/// callback disables picking entirely.
pub fn run(grid_config: GridConfig, on_hover: Option<HoverCallback>) -> Result<(), Error> {
    grid_config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut state = AppState {
        app: None,
        grid_config,
        on_hover,
    };

    event_loop.run_app(&mut state)?;
    Ok(())
}
