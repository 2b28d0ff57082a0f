//! Seascape library - procedural ocean, ship and wave tuning panel

pub mod camera;
pub mod cli;
pub mod driver;
pub mod fps;
pub mod ocean;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod ship;
