//! Water surface: static plane grid plus the wave field that displaces it.

mod mesh;
pub mod wave;

// Re-export public types
pub use mesh::{Vertex, WaterGrid};
pub use wave::{amplitude_bound, elevation, lattice_noise, sample, surface_color, WaveSample};
