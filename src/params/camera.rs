//! Orbit camera configuration.

/// Damped orbit camera around a fixed target
#[derive(Debug, Clone)]
pub struct OrbitConfig {
    /// Point the camera orbits and looks at (world units)
    pub target: [f32; 3],

    /// Starting eye position (world units)
    pub eye: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near: f32,

    /// Far clipping plane (world units)
    pub far: f32,

    /// Radians of rotation per pixel of drag
    pub rotate_speed: f32,

    /// Zoom factor per wheel line (distance is divided by this per line towards the target)
    pub zoom_step: f32,

    /// Fraction of the pending rotation applied each frame (0 < damping <= 1, 1 = no inertia)
    pub damping: f32,

    pub min_distance: f32,
    pub max_distance: f32,

    /// Pitch limits (degrees above the horizon)
    pub min_pitch_degrees: f32,
    pub max_pitch_degrees: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            eye: [1.0, 1.0, 1.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            rotate_speed: 0.005,
            zoom_step: 1.1,
            damping: 0.05,
            min_distance: 0.3,
            max_distance: 6.0,
            min_pitch_degrees: -10.0, // Allow a peek just under the surface
            max_pitch_degrees: 89.0,
        }
    }
}
