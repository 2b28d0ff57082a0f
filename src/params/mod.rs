//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers live here:
//! - Units (world units, seconds, degrees)
//! - Documented ranges and meanings
//! - `Default` impls matching the shipped scene

mod camera;
mod render;
mod scene;
mod wave;

// Re-export all types
pub use camera::OrbitConfig;
pub use render::{aspect_ratio, RenderConfig};
pub use scene::{FogConfig, LightingConfig, SceneConfig, ShipConfig, WaterPlane};
pub use wave::{controls, hex_rgb, ControlRange, WaveParameters, WaveUpdate};
