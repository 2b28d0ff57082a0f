//! Command-line argument parsing.

use clap::Parser;

use crate::ocean::{self, WaveSample};
use crate::params::{RenderConfig, SceneConfig, WaveParameters};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seascape")]
#[command(about = "Procedural ocean with a tunable wave panel", long_about = None)]
pub struct Args {
    /// Window width (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Window height (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Fog density (1 / world units)
    #[arg(long, value_name = "DENSITY")]
    pub fog_density: Option<f32>,

    /// Start with the parameter panel hidden (H toggles it)
    #[arg(long)]
    pub hide_panel: bool,

    /// Present without waiting for vertical blank
    #[arg(long)]
    pub no_vsync: bool,

    /// Print the wave sample at X Z T with default parameters and exit
    #[arg(long, num_args = 3, value_names = ["X", "Z", "T"], allow_negative_numbers = true)]
    pub probe: Option<Vec<f32>>,
}

impl Args {
    /// Window configuration from the command line
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            vsync: !self.no_vsync,
            show_panel: !self.hide_panel,
        }
    }

    /// Scene configuration with command-line overrides applied
    pub fn scene_config(&self) -> SceneConfig {
        let mut scene = SceneConfig::default();
        if let Some(density) = self.fog_density {
            log::info!("Fog density: {}", density);
            scene.fog.density = density.max(0.0);
        }
        scene
    }

    /// Evaluate the wave function for `--probe`, if given
    pub fn probe(&self) -> Option<(f32, f32, f32, WaveSample)> {
        match self.probe.as_deref() {
            Some(&[x, z, t]) => Some((x, z, t, ocean::sample(x, z, t, &WaveParameters::default()))),
            _ => None,
        }
    }
}
