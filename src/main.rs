//! Seascape - a small ship on a procedural, fogged ocean.
//!
//! Drag to orbit, scroll to zoom, H toggles the wave panel, Esc quits.

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use seascape::camera::OrbitCamera;
use seascape::cli::Args;
use seascape::driver::{FrameDriver, ParamSender, SystemClock};
use seascape::fps::FpsTracker;
use seascape::ocean::WaterGrid;
use seascape::panel::Gui;
use seascape::params::*;
use seascape::rendering::{RenderSystem, SceneUniforms, WaveUniforms};
use seascape::ship::ShipMesh;

/// Wheel pixels that count as one line on touchpads
const PIXELS_PER_LINE: f32 = 50.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    gui: Option<Gui>,

    // Simulation
    driver: FrameDriver<SystemClock>,
    params_tx: ParamSender,
    camera: OrbitCamera,
    fps: FpsTracker,

    // Configuration
    render_config: RenderConfig,
    scene: SceneConfig,

    // Pointer state
    dragging: bool,
    last_cursor: Option<PhysicalPosition<f64>>,

    /// Start-up failure reported after the event loop returns
    fatal: Option<color_eyre::Report>,
}

impl App {
    fn new(args: &Args) -> Self {
        let driver = FrameDriver::new(SystemClock::new(), WaveParameters::default());
        let params_tx = driver.sender();

        Self {
            window: None,
            render_system: None,
            gui: None,
            driver,
            params_tx,
            camera: OrbitCamera::new(OrbitConfig::default()),
            fps: FpsTracker::new(),
            render_config: args.render_config(),
            scene: args.scene_config(),
            dragging: false,
            last_cursor: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Seascape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .wrap_err("Failed to create window")?,
        );

        let water = WaterGrid::new(&self.scene.water);
        let ship = ShipMesh::new(&self.scene.ship);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
            &self.scene,
            &water,
            &ship,
        ))?;

        let gui = Gui::new(&window, self.render_config.show_panel);

        // First frame; every later one is scheduled by the driver
        window.request_redraw();

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.gui = Some(gui);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        match self.init(event_loop) {
            Ok(()) => log::info!("Seascape is running. Press ESC to quit"),
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let consumed = match self.gui.as_mut() {
            Some(gui) => gui.on_window_event(&window, &event),
            None => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop, &window),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyH),
                        repeat: false,
                        ..
                    },
                ..
            } if !consumed => {
                if let Some(gui) = self.gui.as_mut() {
                    gui.panel.toggle();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let over_ui = self.gui.as_ref().is_some_and(|gui| gui.wants_pointer());
                self.dragging = state == ElementState::Pressed && !consumed && !over_ui;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some(last)) = (self.dragging, self.last_cursor) {
                    self.camera
                        .rotate((position.x - last.x) as f32, (position.y - last.y) as f32);
                }
                self.last_cursor = Some(position);
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop, window: &Window) {
        let (Some(render_system), Some(gui)) = (self.render_system.as_mut(), self.gui.as_mut())
        else {
            return;
        };

        self.camera.update();

        let fps = self.fps.current_fps();
        let camera = &self.camera;
        let scene = &self.scene;
        let params_tx = &self.params_tx;

        let result = self.driver.frame(window, |state| {
            // Panel edits land at the start of the next frame
            let (updates, ui) = gui.run(window, &state.params, fps);
            params_tx.send_all(updates);

            let (view_proj, camera_pos) = camera.view_proj(render_system.aspect_ratio());
            render_system.update_scene_uniforms(&SceneUniforms::new(view_proj, camera_pos, scene));
            render_system.update_wave_uniforms(&WaveUniforms::new(&state.params, state.time_s));

            render_system.render(Some(ui))
        });

        match result {
            Ok(_) => self.fps.record_frame(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"),
    )
    .init();

    let args = Args::parse();

    if let Some((x, z, t, sample)) = args.probe() {
        let [r, g, b] = sample.color;
        println!(
            "x={} z={} t={} elevation={:.6} color=[{:.6}, {:.6}, {:.6}]",
            x, z, t, sample.elevation, r, g, b
        );
        return Ok(());
    }

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().wrap_err("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app).wrap_err("Event loop failed")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
