//! Rendering system: wgpu device, water and ship pipelines, egui overlay.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use color_eyre::eyre::{eyre, Result, WrapErr};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::ocean::{Vertex, WaterGrid};
use crate::panel::UiFrame;
use crate::params::{aspect_ratio, RenderConfig, SceneConfig, WaveParameters};
use crate::ship::{self, ShipMesh, ShipVertex};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-frame scene data shared by both pipelines (bind group 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub _padding: f32,
    pub fog_color: [f32; 3],
    pub fog_density: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub sun_direction: [f32; 3],
    pub sun_intensity: f32,
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, camera_position: Vec3, scene: &SceneConfig) -> Self {
        let sun = Vec3::from_array(scene.lighting.sun_direction).normalize_or(Vec3::Y);
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_position: camera_position.to_array(),
            _padding: 0.0,
            fog_color: scene.fog.color,
            fog_density: scene.fog.density,
            ambient_color: scene.lighting.ambient_color,
            ambient_intensity: scene.lighting.ambient_intensity,
            sun_direction: sun.to_array(),
            sun_intensity: scene.lighting.sun_intensity,
        }
    }
}

/// Wave parameters and clock for the water shader (bind group 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    pub depth_color: [f32; 3],
    pub big_elevation: f32,
    pub surface_color: [f32; 3],
    pub big_speed: f32,
    pub big_frequency: [f32; 2],
    pub small_elevation: f32,
    pub small_frequency: f32,
    pub small_speed: f32,
    pub small_iterations: i32,
    pub time: f32,
    pub _padding: f32,
}

impl WaveUniforms {
    pub fn new(params: &WaveParameters, time_s: f32) -> Self {
        Self {
            depth_color: params.depth_color,
            big_elevation: params.big_elevation,
            surface_color: params.surface_color,
            big_speed: params.big_speed,
            big_frequency: params.big_frequency,
            small_elevation: params.small_elevation,
            small_frequency: params.small_frequency,
            small_speed: params.small_speed,
            small_iterations: params.small_iterations,
            time: time_s,
            _padding: 0.0,
        }
    }
}

/// Ship model matrix (bind group 1 of the ship pipeline)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ShipUniforms {
    pub model: [[f32; 4]; 4],
}

/// Rendering system managing wgpu device, pipelines, and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,

    water_pipeline: wgpu::RenderPipeline,
    water_vertex_buffer: wgpu::Buffer,
    water_index_buffer: wgpu::Buffer,
    water_index_count: u32,
    wave_buffer: wgpu::Buffer,
    wave_bind_group: wgpu::BindGroup,

    ship_pipeline: wgpu::RenderPipeline,
    ship_vertex_buffer: wgpu::Buffer,
    ship_index_buffer: wgpu::Buffer,
    ship_index_count: u32,
    ship_bind_group: wgpu::BindGroup,

    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,

    egui_renderer: egui_wgpu::Renderer,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(
        window: Arc<Window>,
        render_config: &RenderConfig,
        scene: &SceneConfig,
        water: &WaterGrid,
        ship_mesh: &ShipMesh,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Surface borrows the window for 'static through the Arc
        let surface = instance
            .create_surface(window)
            .wrap_err("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| eyre!("Failed to find suitable GPU adapter"))?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .wrap_err("Failed to request device")?;

        // Shaders output display-ready colors, so skip the sRGB encode
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| eyre!("Surface is not supported by the adapter"))?;
        log::debug!("Surface format {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: render_config.present_mode(),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, &config);

        // Bind group layouts: scene (group 0) and per-object (group 1)
        let scene_layout = uniform_layout(&device, "Scene Bind Group Layout");
        let object_layout = uniform_layout(&device, "Object Bind Group Layout");

        let scene_uniforms = SceneUniforms::new(Mat4::IDENTITY, Vec3::ZERO, scene);
        let scene_buffer = uniform_buffer(&device, "Scene Uniform Buffer", &[scene_uniforms]);
        let scene_bind_group =
            uniform_bind_group(&device, &scene_layout, &scene_buffer, "Scene Bind Group");

        let wave_uniforms = WaveUniforms::new(&WaveParameters::default(), 0.0);
        let wave_buffer = uniform_buffer(&device, "Wave Uniform Buffer", &[wave_uniforms]);
        let wave_bind_group =
            uniform_bind_group(&device, &object_layout, &wave_buffer, "Wave Bind Group");

        // Ship never moves, so its model matrix is written once
        let ship_uniforms = ShipUniforms {
            model: ship::model_matrix(&scene.ship).to_cols_array_2d(),
        };
        let ship_buffer = uniform_buffer(&device, "Ship Uniform Buffer", &[ship_uniforms]);
        let ship_bind_group =
            uniform_bind_group(&device, &object_layout, &ship_buffer, "Ship Bind Group");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&scene_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let water_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Water Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("water.wgsl").into()),
        });

        let ship_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Ship Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("ship.wgsl").into()),
        });

        // Water is seen from below at low pitch, so draw both sides
        let water_pipeline = create_mesh_pipeline(
            &device,
            "Water Render Pipeline",
            &pipeline_layout,
            &water_shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
            },
            None,
            config.format,
        );

        let ship_pipeline = create_mesh_pipeline(
            &device,
            "Ship Render Pipeline",
            &pipeline_layout,
            &ship_shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ShipVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![
                    0 => Float32x3,
                    1 => Float32x3,
                    2 => Float32x3
                ],
            },
            Some(wgpu::Face::Back),
            config.format,
        );

        let water_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Vertex Buffer"),
            contents: bytemuck::cast_slice(&water.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let water_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Index Buffer"),
            contents: bytemuck::cast_slice(&water.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let ship_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Ship Vertex Buffer"),
            contents: bytemuck::cast_slice(&ship_mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ship_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Ship Index Buffer"),
            contents: bytemuck::cast_slice(&ship_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1, false);

        let [r, g, b] = scene.fog.color;
        let clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };

        log::info!(
            "Scene ready: {} water triangles, {} ship triangles",
            water.index_count() / 3,
            ship_mesh.index_count() / 3
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            clear_color,
            water_pipeline,
            water_vertex_buffer,
            water_index_buffer,
            water_index_count: water.index_count(),
            wave_buffer,
            wave_bind_group,
            ship_pipeline,
            ship_vertex_buffer,
            ship_index_buffer,
            ship_index_count: ship_mesh.index_count(),
            ship_bind_group,
            scene_buffer,
            scene_bind_group,
            egui_renderer,
        })
    }

    /// Reconfigure the surface and depth buffer for a new window size.
    /// Zero sizes (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, &self.config);
    }

    /// Reconfigure at the current size after the surface was lost
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.config.width, self.config.height)
    }

    /// Update scene uniforms
    pub fn update_scene_uniforms(&self, uniforms: &SceneUniforms) {
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }

    /// Update water uniforms
    pub fn update_wave_uniforms(&self, uniforms: &WaveUniforms) {
        self.queue
            .write_buffer(&self.wave_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }

    /// Render the scene, then the UI on top if there is one
    pub fn render(&mut self, ui: Option<UiFrame>) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

            render_pass.set_pipeline(&self.water_pipeline);
            render_pass.set_bind_group(1, &self.wave_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.water_vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(self.water_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.water_index_count, 0, 0..1);

            render_pass.set_pipeline(&self.ship_pipeline);
            render_pass.set_bind_group(1, &self.ship_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.ship_vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(self.ship_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.ship_index_count, 0, 0..1);
        }

        let mut ui_commands = Vec::new();
        let mut freed_textures = Vec::new();

        if let Some(ui) = ui {
            for (id, delta) in &ui.textures_delta.set {
                self.egui_renderer
                    .update_texture(&self.device, &self.queue, *id, delta);
            }

            let screen = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.config.width, self.config.height],
                pixels_per_point: ui.pixels_per_point,
            };

            ui_commands = self.egui_renderer.update_buffers(
                &self.device,
                &self.queue,
                &mut encoder,
                &ui.paint_jobs,
                &screen,
            );

            // UI goes in its own pass: no depth attachment, keep the scene
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("UI Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &ui.paint_jobs, &screen);

            freed_textures = ui.textures_delta.free;
        }

        self.queue
            .submit(ui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        for id in &freed_textures {
            self.egui_renderer.free_texture(id);
        }

        Ok(())
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
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
    })
}

fn uniform_buffer<T: Pod>(device: &wgpu::Device, label: &str, contents: &[T]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

fn uniform_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout,
    cull_mode: Option<wgpu::Face>,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 128);
        assert_eq!(std::mem::size_of::<WaveUniforms>(), 64);
        assert_eq!(std::mem::size_of::<ShipUniforms>(), 64);
    }

    #[test]
    fn test_wave_uniforms_copy_params() {
        let params = WaveParameters {
            small_iterations: -2,
            ..WaveParameters::default()
        };
        let uniforms = WaveUniforms::new(&params, 3.5);

        assert_eq!(uniforms.time, 3.5);
        assert_eq!(uniforms.small_iterations, -2);
        assert_eq!(uniforms.big_frequency, params.big_frequency);
        assert_eq!(uniforms.depth_color, params.depth_color);
        assert_eq!(uniforms.surface_color, params.surface_color);
    }

    #[test]
    fn test_scene_uniforms_normalize_sun() {
        let scene = SceneConfig::default();
        let uniforms = SceneUniforms::new(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 3.0), &scene);

        let sun = Vec3::from_array(uniforms.sun_direction);
        assert!((sun.length() - 1.0).abs() < 1e-5);
        assert_eq!(uniforms.camera_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniforms.fog_density, scene.fog.density);
    }

    #[test]
    fn test_zero_sun_direction_falls_back_to_up() {
        let mut scene = SceneConfig::default();
        scene.lighting.sun_direction = [0.0; 3];
        let uniforms = SceneUniforms::new(Mat4::IDENTITY, Vec3::ZERO, &scene);
        assert_eq!(uniforms.sun_direction, [0.0, 1.0, 0.0]);
    }

    const WATER_WGSL: &str = include_str!("water.wgsl");
    const SHIP_WGSL: &str = include_str!("ship.wgsl");

    fn validate(source: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(source)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(source)));
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .unwrap_or_else(|e| panic!("validation failed: {:?}", e));
        module
    }

    /// (span, member name -> offset) of a WGSL struct
    fn wgsl_struct(module: &naga::Module, name: &str) -> (u32, Vec<(String, u32)>) {
        module
            .types
            .iter()
            .find_map(|(_, ty)| match &ty.inner {
                naga::TypeInner::Struct { members, span } if ty.name.as_deref() == Some(name) => {
                    let offsets = members
                        .iter()
                        .map(|m| (m.name.clone().unwrap_or_default(), m.offset))
                        .collect();
                    Some((*span, offsets))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("struct {} not found", name))
    }

    fn offset_of(members: &[(String, u32)], name: &str) -> usize {
        members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, offset)| *offset as usize)
            .unwrap_or_else(|| panic!("member {} not found", name))
    }

    #[test]
    fn test_shaders_validate() {
        validate(WATER_WGSL);
        validate(SHIP_WGSL);
    }

    #[test]
    fn test_wgsl_structs_match_uniform_layout() {
        let water = validate(WATER_WGSL);
        let ship = validate(SHIP_WGSL);

        let (span, members) = wgsl_struct(&water, "Wave");
        assert_eq!(span as usize, std::mem::size_of::<WaveUniforms>());
        assert_eq!(offset_of(&members, "big_frequency"), std::mem::offset_of!(WaveUniforms, big_frequency));
        assert_eq!(offset_of(&members, "small_iterations"), std::mem::offset_of!(WaveUniforms, small_iterations));
        assert_eq!(offset_of(&members, "time"), std::mem::offset_of!(WaveUniforms, time));

        for module in [&water, &ship] {
            let (span, members) = wgsl_struct(module, "Scene");
            assert_eq!(span as usize, std::mem::size_of::<SceneUniforms>());
            assert_eq!(offset_of(&members, "fog_color"), std::mem::offset_of!(SceneUniforms, fog_color));
            assert_eq!(offset_of(&members, "sun_direction"), std::mem::offset_of!(SceneUniforms, sun_direction));
        }

        let (span, _) = wgsl_struct(&ship, "Ship");
        assert_eq!(span as usize, std::mem::size_of::<ShipUniforms>());
    }

    #[test]
    fn test_water_shader_noise_constants_match_cpu() {
        use crate::ocean::wave::{NOISE_GRADIENT, NOISE_SCALE, NOISE_SKEW};

        let literals = [
            ("0.3333333", NOISE_SKEW),
            ("43758.5453", NOISE_SCALE),
            ("12.9898", NOISE_GRADIENT.x),
            ("78.233", NOISE_GRADIENT.y),
            ("39.346", NOISE_GRADIENT.z),
        ];
        for (literal, cpu) in literals {
            assert!(WATER_WGSL.contains(literal), "{} missing from water.wgsl", literal);
            assert_eq!(literal.parse::<f32>().unwrap(), cpu, "{}", literal);
        }
    }
}
