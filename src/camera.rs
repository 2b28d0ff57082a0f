//! Damped orbit camera around the scene origin.

use glam::{Mat4, Vec3};

use crate::params::OrbitConfig;

/// Orbit camera with inertia
///
/// Drag and wheel input accumulate into pending deltas; [`OrbitCamera::update`]
/// applies a `damping` fraction of them every frame and keeps the rest for later
/// frames, so motion eases out after the input stops. Zoom is pending in log
/// space so repeated wheel steps compose multiplicatively.
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    /// Create camera at `config.eye` looking at `config.target`
    pub fn new(config: OrbitConfig) -> Self {
        let target = Vec3::from_array(config.target);
        let offset = Vec3::from_array(config.eye) - target;
        let distance = offset.length().max(f32::EPSILON);

        let mut camera = Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            config,
        };
        camera.clamp();
        camera
    }

    /// Queue a rotation from a pointer drag (pixels)
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.pending_yaw -= dx_px * self.config.rotate_speed;
        self.pending_pitch += dy_px * self.config.rotate_speed;
    }

    /// Queue a zoom by wheel lines (positive = towards the target)
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom -= lines * self.config.zoom_step.ln();
    }

    /// Advance inertia by one frame
    pub fn update(&mut self) {
        let damping = self.config.damping.clamp(f32::EPSILON, 1.0);

        self.yaw += self.pending_yaw * damping;
        self.pitch += self.pending_pitch * damping;
        self.distance *= (self.pending_zoom * damping).exp();
        self.pending_yaw *= 1.0 - damping;
        self.pending_pitch *= 1.0 - damping;
        self.pending_zoom *= 1.0 - damping;

        self.clamp();
    }

    fn clamp(&mut self) {
        self.pitch = self.pitch.clamp(
            self.config.min_pitch_degrees.to_radians(),
            self.config.max_pitch_degrees.to_radians(),
        );
        self.distance = self
            .distance
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Eye position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn view_proj(&self, aspect_ratio: f32) -> (Mat4, Vec3) {
        let eye = self.eye();

        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(eye, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            aspect_ratio,
            self.config.near,
            self.config.far,
        );

        (proj * view, eye)
    }
}
