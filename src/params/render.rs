//! Window and presentation configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (logical pixels)
    pub window_width: u32,

    /// Window height (logical pixels)
    pub window_height: u32,

    /// Wait for vertical blank before presenting
    pub vsync: bool,

    /// Show the parameter panel at start-up
    pub show_panel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            vsync: true,
            show_panel: true,
        }
    }
}

impl RenderConfig {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

/// Aspect ratio of a surface, guarding against a minimized (zero-height) window
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
