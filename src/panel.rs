//! Parameter panel (egui) and its winit glue.
//!
//! Each widget reports its own edit as a [`WaveUpdate`], and only on a frame
//! where egui says it changed. The panel never writes the live parameters.

use winit::event::WindowEvent;
use winit::window::Window;

use crate::params::{controls, ControlRange, WaveParameters, WaveUpdate};

/// Tessellated UI ready for the render system
pub struct UiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// The wave tuning window
pub struct ParameterPanel {
    visible: bool,
}

impl ParameterPanel {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Draw the panel and return the updates the user made this frame
    pub fn show(&mut self, ctx: &egui::Context, current: &WaveParameters, fps: f32) -> Vec<WaveUpdate> {
        if !self.visible {
            return Vec::new();
        }

        let mut updates = Vec::new();
        let mut reset = false;

        egui::Window::new("Waves")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Big waves")
                    .default_open(true)
                    .show(ui, |ui| {
                        if let Some(v) = slider(ui, current.big_elevation, controls::BIG_ELEVATION, "elevation") {
                            updates.push(WaveUpdate::BigElevation(v));
                        }
                        if let Some(v) = slider(ui, current.big_frequency[0], controls::BIG_FREQUENCY, "frequency x") {
                            updates.push(WaveUpdate::BigFrequencyX(v));
                        }
                        if let Some(v) = slider(ui, current.big_frequency[1], controls::BIG_FREQUENCY, "frequency y") {
                            updates.push(WaveUpdate::BigFrequencyY(v));
                        }
                        if let Some(v) = slider(ui, current.big_speed, controls::BIG_SPEED, "speed") {
                            updates.push(WaveUpdate::BigSpeed(v));
                        }
                    });

                egui::CollapsingHeader::new("Small waves")
                    .default_open(true)
                    .show(ui, |ui| {
                        if let Some(v) = slider(ui, current.small_elevation, controls::SMALL_ELEVATION, "elevation") {
                            updates.push(WaveUpdate::SmallElevation(v));
                        }
                        if let Some(v) = slider(ui, current.small_frequency, controls::SMALL_FREQUENCY, "frequency") {
                            updates.push(WaveUpdate::SmallFrequency(v));
                        }
                        if let Some(v) = slider(ui, current.small_speed, controls::SMALL_SPEED, "speed") {
                            updates.push(WaveUpdate::SmallSpeed(v));
                        }

                        let range = controls::SMALL_ITERATIONS;
                        let mut iterations = current.small_iterations;
                        let response = ui.add(
                            egui::Slider::new(&mut iterations, range.min as i32..=range.max as i32)
                                .step_by(range.step as f64)
                                .text("iterations"),
                        );
                        if response.changed() {
                            updates.push(WaveUpdate::SmallIterations(iterations));
                        }
                    });

                egui::CollapsingHeader::new("Colors")
                    .default_open(true)
                    .show(ui, |ui| {
                        if let Some(c) = color_row(ui, "depth", current.depth_color) {
                            updates.push(WaveUpdate::DepthColor(c));
                        }
                        if let Some(c) = color_row(ui, "surface", current.surface_color) {
                            updates.push(WaveUpdate::SurfaceColor(c));
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        reset = true;
                    }
                    ui.label(format!("{:.0} fps", fps));
                });
                ui.label(egui::RichText::new("H toggles this panel").small().weak());
            });

        if reset {
            return current.diff(&WaveParameters::default());
        }
        updates
    }
}

/// Slider over a copy of `value`. Returns the snapped value only when the user moved it.
///
/// No `step_by` here: egui would re-snap the value through f64 on every
/// draw. Quantizing happens in [`ControlRange::snap`] on change instead.
fn slider(ui: &mut egui::Ui, value: f32, range: ControlRange, label: &str) -> Option<f32> {
    let mut edited = value;
    let response = ui.add(egui::Slider::new(&mut edited, range.min..=range.max).text(label));
    response.changed().then(|| range.snap(edited))
}

/// Color picker working in 8-bit display values
fn color_row(ui: &mut egui::Ui, label: &str, color: [f32; 3]) -> Option<[f32; 3]> {
    ui.horizontal(|ui| {
        let mut rgb = to_rgb8(color);
        let changed = ui.color_edit_button_srgb(&mut rgb).changed();
        ui.label(label);
        changed.then(|| from_rgb8(rgb))
    })
    .inner
}

fn to_rgb8(color: [f32; 3]) -> [u8; 3] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn from_rgb8(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| c as f32 / 255.0)
}

/// egui context plus winit input state and the panel itself
pub struct Gui {
    ctx: egui::Context,
    state: egui_winit::State,
    pub panel: ParameterPanel,
}

impl Gui {
    pub fn new(window: &Window, show_panel: bool) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        Self {
            ctx,
            state,
            panel: ParameterPanel::new(show_panel),
        }
    }

    /// Feed a window event to egui. Returns true when egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Whether a pointer drag currently belongs to the UI
    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input() || self.ctx.is_pointer_over_area()
    }

    /// Run one UI frame
    pub fn run(&mut self, window: &Window, current: &WaveParameters, fps: f32) -> (Vec<WaveUpdate>, UiFrame) {
        let raw_input = self.state.take_egui_input(window);

        let mut updates = Vec::new();
        let panel = &mut self.panel;
        let full_output = self.ctx.run(raw_input, |ctx| {
            updates = panel.show(ctx, current, fps);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (
            updates,
            UiFrame {
                paint_jobs,
                textures_delta: full_output.textures_delta,
                pixels_per_point: full_output.pixels_per_point,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_panel(panel: &mut ParameterPanel, current: &WaveParameters) -> Vec<WaveUpdate> {
        let ctx = egui::Context::default();
        let mut updates = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            updates = panel.show(ctx, current, 60.0);
        });
        updates
    }

    #[test]
    fn test_untouched_panel_emits_nothing() {
        let mut panel = ParameterPanel::new(true);
        assert!(run_panel(&mut panel, &WaveParameters::default()).is_empty());
    }

    #[test]
    fn test_idle_frames_never_emit() {
        // Values off the 0.001 grid must survive redraws untouched
        let current = WaveParameters {
            big_speed: 0.123_456_7,
            small_frequency: 17.777_77,
            small_elevation: 0.000_3,
            ..WaveParameters::default()
        };

        let ctx = egui::Context::default();
        let mut panel = ParameterPanel::new(true);
        for frame in 0..5 {
            let mut updates = Vec::new();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                updates = panel.show(ctx, &current, 60.0);
            });
            assert!(updates.is_empty(), "frame {}: {:?}", frame, updates);

            let mut defaults = Vec::new();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                defaults = panel.show(ctx, &WaveParameters::default(), 60.0);
            });
            assert!(defaults.is_empty(), "frame {}: {:?}", frame, defaults);
        }
    }

    #[test]
    fn test_hidden_panel_emits_nothing() {
        let mut panel = ParameterPanel::new(false);
        let current = WaveParameters {
            big_elevation: 7.0,
            ..WaveParameters::default()
        };
        assert!(run_panel(&mut panel, &current).is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut panel = ParameterPanel::new(true);
        panel.toggle();
        assert!(!panel.is_visible());
        panel.toggle();
        assert!(panel.is_visible());
    }

    #[test]
    fn test_rgb8_round_trip_of_defaults() {
        let params = WaveParameters::default();
        assert_eq!(from_rgb8(to_rgb8(params.depth_color)), params.depth_color);
        assert_eq!(to_rgb8([2.0, -1.0, 0.5]), [255, 0, 128]);
    }
}
