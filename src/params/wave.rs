//! Wave field parameters, their panel ranges and the update commands that change them.

/// Tunable inputs of the wave field evaluator.
///
/// Owned by the frame driver. Only [`WaveParameters::apply`] mutates it; the
/// evaluator reads a snapshot once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParameters {
    /// Height of the large swell (world units)
    pub big_elevation: f32,

    /// Spatial frequency of the swell along x and z (radians per world unit)
    pub big_frequency: [f32; 2],

    /// Phase speed of the swell (radians per second, negative reverses direction)
    pub big_speed: f32,

    /// Amplitude of the first noise octave (world units)
    pub small_elevation: f32,

    /// Spatial frequency of the first noise octave
    pub small_frequency: f32,

    /// Time scale of the noise octaves
    pub small_speed: f32,

    /// Number of noise octaves (values <= 0 disable fine detail)
    pub small_iterations: i32,

    /// Color at mix factor 0 (linear RGB)
    pub depth_color: [f32; 3],

    /// Color at mix factor 1 (linear RGB)
    pub surface_color: [f32; 3],
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            big_elevation: 0.15,
            big_frequency: [1.0, 1.0],
            big_speed: 0.75,

            small_elevation: 0.15,
            small_frequency: 3.0,
            small_speed: 0.2,
            small_iterations: 4,

            depth_color: hex_rgb(0x186691),
            surface_color: hex_rgb(0x9bd8ff),
        }
    }
}

/// Convert `0xRRGGBB` to normalized RGB.
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// A single field change issued by the parameter panel (or any other writer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveUpdate {
    BigElevation(f32),
    BigFrequencyX(f32),
    BigFrequencyY(f32),
    BigSpeed(f32),
    SmallElevation(f32),
    SmallFrequency(f32),
    SmallSpeed(f32),
    SmallIterations(i32),
    DepthColor([f32; 3]),
    SurfaceColor([f32; 3]),
}

impl WaveParameters {
    /// Apply one update command. No validation: range clamping belongs to the control that issued it.
    pub fn apply(&mut self, update: WaveUpdate) {
        match update {
            WaveUpdate::BigElevation(v) => self.big_elevation = v,
            WaveUpdate::BigFrequencyX(v) => self.big_frequency[0] = v,
            WaveUpdate::BigFrequencyY(v) => self.big_frequency[1] = v,
            WaveUpdate::BigSpeed(v) => self.big_speed = v,
            WaveUpdate::SmallElevation(v) => self.small_elevation = v,
            WaveUpdate::SmallFrequency(v) => self.small_frequency = v,
            WaveUpdate::SmallSpeed(v) => self.small_speed = v,
            WaveUpdate::SmallIterations(n) => self.small_iterations = n,
            WaveUpdate::DepthColor(c) => self.depth_color = c,
            WaveUpdate::SurfaceColor(c) => self.surface_color = c,
        }
    }

    /// Commands that turn `self` into `target`, one per differing field.
    pub fn diff(&self, target: &WaveParameters) -> Vec<WaveUpdate> {
        let mut updates = Vec::new();

        if self.big_elevation != target.big_elevation {
            updates.push(WaveUpdate::BigElevation(target.big_elevation));
        }
        if self.big_frequency[0] != target.big_frequency[0] {
            updates.push(WaveUpdate::BigFrequencyX(target.big_frequency[0]));
        }
        if self.big_frequency[1] != target.big_frequency[1] {
            updates.push(WaveUpdate::BigFrequencyY(target.big_frequency[1]));
        }
        if self.big_speed != target.big_speed {
            updates.push(WaveUpdate::BigSpeed(target.big_speed));
        }
        if self.small_elevation != target.small_elevation {
            updates.push(WaveUpdate::SmallElevation(target.small_elevation));
        }
        if self.small_frequency != target.small_frequency {
            updates.push(WaveUpdate::SmallFrequency(target.small_frequency));
        }
        if self.small_speed != target.small_speed {
            updates.push(WaveUpdate::SmallSpeed(target.small_speed));
        }
        if self.small_iterations != target.small_iterations {
            updates.push(WaveUpdate::SmallIterations(target.small_iterations));
        }
        if self.depth_color != target.depth_color {
            updates.push(WaveUpdate::DepthColor(target.depth_color));
        }
        if self.surface_color != target.surface_color {
            updates.push(WaveUpdate::SurfaceColor(target.surface_color));
        }

        updates
    }
}

/// Display range and step of one panel slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Clamp, then round to the nearest step counted from `min`.
    ///
    /// Fractional steps divide by the whole number of steps per unit, so a
    /// decimal like 0.75 comes back as the same f32 instead of `750 * 0.001f32`.
    pub fn snap(&self, value: f32) -> f32 {
        let value = self.clamp(value);
        if self.step <= 0.0 {
            return value;
        }

        let min = self.min as f64;
        let offset = value as f64 - min;
        let snapped = if self.step <= 1.0 {
            let steps_per_unit = (1.0 / self.step as f64).round();
            min + (offset * steps_per_unit).round() / steps_per_unit
        } else {
            let step = self.step as f64;
            min + (offset / step).round() * step
        };

        self.clamp(snapped as f32)
    }
}

/// Slider ranges of the parameter panel
pub mod controls {
    use super::ControlRange;

    pub const BIG_ELEVATION: ControlRange = ControlRange::new(0.0, 1.0, 0.001);
    pub const BIG_FREQUENCY: ControlRange = ControlRange::new(0.0, 10.0, 0.001);
    pub const BIG_SPEED: ControlRange = ControlRange::new(0.0, 4.0, 0.001);
    pub const SMALL_ELEVATION: ControlRange = ControlRange::new(0.0, 1.0, 0.001);
    pub const SMALL_FREQUENCY: ControlRange = ControlRange::new(0.0, 30.0, 0.001);
    pub const SMALL_SPEED: ControlRange = ControlRange::new(0.0, 4.0, 0.001);
    pub const SMALL_ITERATIONS: ControlRange = ControlRange::new(0.0, 5.0, 1.0);
}
