//! Static scene layout: water plane, ship placement, lighting and fog.

use super::wave::hex_rgb;

/// Water plane topology
#[derive(Debug, Clone)]
pub struct WaterPlane {
    /// Edge length of the square plane (world units)
    pub size: f32,

    /// Quads per side (vertices per side = subdivisions + 1)
    pub subdivisions: usize,
}

impl Default for WaterPlane {
    fn default() -> Self {
        Self {
            size: 2.0,
            subdivisions: 512, // 263,169 vertices
        }
    }
}

/// Ship placement and paint
#[derive(Debug, Clone)]
pub struct ShipConfig {
    /// Position of the ship origin (world units). The hull keel sits slightly below it.
    pub position: [f32; 3],

    /// Uniform scale from model units (hull length 2.0) to world units
    pub scale: f32,

    /// Rotation about the vertical axis (degrees)
    pub heading_degrees: f32,

    pub hull_color: [f32; 3],
    pub deck_color: [f32; 3],
    pub cabin_color: [f32; 3],
    pub sail_color: [f32; 3],
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.3, 0.0], // Clear of the default swell crest (0.15)
            scale: 0.12,
            heading_degrees: 30.0,
            hull_color: hex_rgb(0x5b3a29),
            deck_color: hex_rgb(0xa8875f),
            cabin_color: hex_rgb(0xe8e0d0),
            sail_color: hex_rgb(0xf4efe6),
        }
    }
}

/// Ambient plus one directional light
#[derive(Debug, Clone)]
pub struct LightingConfig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,

    /// Direction *towards* the light (normalized when packed)
    pub sun_direction: [f32; 3],
    pub sun_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.55,
            sun_direction: [0.6, 1.0, 0.4],
            sun_intensity: 0.8,
        }
    }
}

/// Exponential-squared fog: `factor = 1 - exp(-density² · distance²)`
#[derive(Debug, Clone)]
pub struct FogConfig {
    pub color: [f32; 3],

    /// Density (1 / world units)
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: hex_rgb(0x0b1d2c),
            density: 0.35,
        }
    }
}

impl FogConfig {
    /// Fraction of fog color at `distance` from the camera.
    ///
    /// CPU twin of `apply_fog` in `water.wgsl` (and the fog in `ship.wgsl`); the renderer never calls it.
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 - (-self.density * self.density * distance * distance).exp()
    }
}

/// Everything that is fixed once the scene is built
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub water: WaterPlane,
    pub ship: ShipConfig,
    pub lighting: LightingConfig,
    pub fog: FogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_factor_bounds() {
        let fog = FogConfig::default();
        assert_eq!(fog.factor(0.0), 0.0);
        assert!(fog.factor(1.0) > 0.0);
        assert!(fog.factor(1000.0) > 0.999);
    }

    #[test]
    fn test_fog_factor_grows_with_distance() {
        let fog = FogConfig::default();
        let mut last = 0.0;
        for step in 1..20 {
            let f = fog.factor(step as f32 * 0.5);
            assert!(f > last);
            last = f;
        }
    }

    #[test]
    fn test_zero_density_disables_fog() {
        let fog = FogConfig {
            density: 0.0,
            ..FogConfig::default()
        };
        assert_eq!(fog.factor(50.0), 0.0);
    }
}
