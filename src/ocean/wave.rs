//! CPU mirror of the wave field evaluated in `water.wgsl`.
//!
//! Every formula here has a line-for-line twin in the shader. The shader is
//! what the user sees; this module is what tests and `--probe` run.

use glam::Vec3;

use crate::params::WaveParameters;

/// Skew applied before snapping to the noise lattice
pub const NOISE_SKEW: f32 = 0.333_333_3;

/// Dot-product gradient of the lattice hash
pub const NOISE_GRADIENT: Vec3 = Vec3::new(12.9898, 78.233, 39.346);

/// Scale applied to the hashed sine before taking the fractional part
pub const NOISE_SCALE: f32 = 43_758.545_3;

/// Elevation and derived color at one surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    pub elevation: f32,
    pub color: [f32; 3],
}

/// GLSL/WGSL `fract`: `v - floor(v)`, always in `[0, 1)`.
///
/// Not `f32::fract`, which truncates towards zero and goes negative for negative input.
#[inline]
pub fn fract(v: f32) -> f32 {
    v - v.floor()
}

/// Hash noise on a skewed lattice.
///
/// Piecewise constant and discontinuous by construction. Output in `[0, 1)`.
pub fn lattice_noise(p: Vec3) -> f32 {
    let skew = (p.x + p.y + p.z) * NOISE_SKEW;
    let cell = (p + Vec3::splat(skew)).floor();
    fract(cell.dot(NOISE_GRADIENT).sin() * NOISE_SCALE)
}

/// Large swell: product of two travelling sines
pub fn swell(x: f32, z: f32, time_s: f32, params: &WaveParameters) -> f32 {
    let phase = time_s * params.big_speed;
    (x * params.big_frequency[0] + phase).sin()
        * (z * params.big_frequency[1] + phase).sin()
        * params.big_elevation
}

/// Vertical displacement at world position `(x, z)`
///
/// Octaves run `1..=small_iterations`; each one samples the lattice at `i`
/// times the base frequency and subtracts `1/i` of the base amplitude.
pub fn elevation(x: f32, z: f32, time_s: f32, params: &WaveParameters) -> f32 {
    let mut elevation = swell(x, z, time_s, params);

    for i in 1..=params.small_iterations {
        let octave = i as f32;
        let sample = Vec3::new(
            x * params.small_frequency * octave,
            z * params.small_frequency * octave,
            time_s * params.small_speed,
        );
        elevation -= lattice_noise(sample).abs() * params.small_elevation / octave;
    }

    elevation
}

/// Unclamped linear mix between depth and surface color
pub fn surface_color(elevation: f32, params: &WaveParameters) -> [f32; 3] {
    let depth = Vec3::from_array(params.depth_color);
    let surface = Vec3::from_array(params.surface_color);
    (depth * (1.0 - elevation) + surface * elevation).to_array()
}

/// Elevation and color together
pub fn sample(x: f32, z: f32, time_s: f32, params: &WaveParameters) -> WaveSample {
    let elevation = elevation(x, z, time_s, params);
    WaveSample {
        elevation,
        color: surface_color(elevation, params),
    }
}

/// Upper bound of `|elevation|` over all positions and times
pub fn amplitude_bound(params: &WaveParameters) -> f32 {
    let harmonic: f32 = (1..=params.small_iterations).map(|i| 1.0 / i as f32).sum();
    params.big_elevation.abs() + params.small_elevation.abs() * harmonic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_free(params: &WaveParameters) -> WaveParameters {
        WaveParameters {
            small_iterations: 0,
            ..params.clone()
        }
    }

    #[test]
    fn test_zero_iterations_is_pure_swell() {
        let params = detail_free(&WaveParameters {
            big_elevation: 0.3,
            big_frequency: [4.0, 1.5],
            big_speed: 0.75,
            ..WaveParameters::default()
        });

        for ix in -10..=10 {
            for iz in -10..=10 {
                let (x, z, t) = (ix as f32 * 0.1, iz as f32 * 0.1, 2.5);
                let phase = t * params.big_speed;
                let expected = (x * 4.0 + phase).sin() * (z * 1.5 + phase).sin() * 0.3;
                assert_eq!(elevation(x, z, t, &params), expected);
            }
        }
    }

    #[test]
    fn test_negative_iterations_match_zero() {
        let negative = WaveParameters {
            small_iterations: -3,
            ..WaveParameters::default()
        };
        let zero = detail_free(&negative);

        for i in 0..50 {
            let (x, z, t) = (i as f32 * 0.037 - 1.0, 1.0 - i as f32 * 0.041, i as f32 * 0.3);
            assert_eq!(elevation(x, z, t, &negative), elevation(x, z, t, &zero));
        }
        assert_eq!(amplitude_bound(&negative), amplitude_bound(&zero));
    }

    #[test]
    fn test_swell_vanishes_at_origin_at_start() {
        let params = WaveParameters::default();
        assert_eq!(swell(0.0, 0.0, 0.0, &params), 0.0);
        assert_eq!(elevation(0.0, 0.0, 0.0, &detail_free(&params)), 0.0);
    }

    #[test]
    fn test_elevation_within_amplitude_bound() {
        let params = WaveParameters {
            small_iterations: 5,
            ..WaveParameters::default()
        };
        let bound = amplitude_bound(&params);

        // 0.15 + 0.15 * (1 + 1/2 + 1/3 + 1/4 + 1/5)
        assert!((bound - (0.15 + 0.15 * 2.283_333_4)).abs() < 1e-6);

        for ix in 0..64 {
            for iz in 0..64 {
                for t in [0.0, 0.7, 13.1, 250.0] {
                    let x = ix as f32 / 32.0 - 1.0;
                    let z = iz as f32 / 32.0 - 1.0;
                    let e = elevation(x, z, t, &params);
                    assert!(e.abs() <= bound + 1e-6, "|{e}| > {bound} at ({x}, {z}, {t})");
                }
            }
        }
    }

    #[test]
    fn test_octaves_only_lower_the_surface() {
        let params = WaveParameters::default();
        for i in 0..200 {
            let (x, z, t) = (i as f32 * 0.01 - 1.0, i as f32 * 0.007, i as f32 * 0.05);
            assert!(elevation(x, z, t, &params) <= swell(x, z, t, &params));
        }
    }

    #[test]
    fn test_lattice_noise_is_deterministic_and_in_unit_range() {
        for i in 0..500 {
            let p = Vec3::new(i as f32 * 0.31 - 70.0, i as f32 * -0.17, i as f32 * 0.011);
            let a = lattice_noise(p);
            let b = lattice_noise(p);
            assert_eq!(a.to_bits(), b.to_bits());
            assert!((0.0..1.0).contains(&a), "noise {a} out of range at {p}");
        }
    }

    #[test]
    fn test_lattice_noise_constant_within_a_cell() {
        // Points that skew into the same lattice cell hash identically
        let a = lattice_noise(Vec3::new(0.1, 0.1, 0.1));
        let b = lattice_noise(Vec3::new(0.2, 0.15, 0.05));
        assert_eq!(a, b);
        assert_eq!(a, fract(0.0f32.sin() * NOISE_SCALE));
    }

    #[test]
    fn test_fract_matches_shader_semantics() {
        assert_eq!(fract(1.25), 0.25);
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(fract(-3.0), 0.0);
    }

    #[test]
    fn test_single_octave_scenario() {
        let params = WaveParameters {
            small_iterations: 1,
            small_frequency: 3.0,
            small_elevation: 0.15,
            small_speed: 0.2,
            ..WaveParameters::default()
        };

        let detail = lattice_noise(Vec3::new(3.0, 3.0, 0.0)).abs() * 0.15 / 1.0;
        let expected = swell(1.0, 1.0, 0.0, &params) - detail;

        assert_eq!(elevation(1.0, 1.0, 0.0, &params), expected);
        assert_eq!(swell(1.0, 1.0, 0.0, &params), 1.0f32.sin() * 1.0f32.sin() * 0.15);
    }

    #[test]
    fn test_color_endpoints() {
        let params = WaveParameters::default();
        assert_eq!(surface_color(0.0, &params), params.depth_color);
        assert_eq!(surface_color(1.0, &params), params.surface_color);
    }

    #[test]
    fn test_color_is_affine_and_unclamped() {
        let params = WaveParameters::default();
        let depth = Vec3::from_array(params.depth_color);
        let surface = Vec3::from_array(params.surface_color);

        for e in [-2.0f32, -0.5, 0.25, 0.5, 1.5, 3.0] {
            let color = Vec3::from_array(surface_color(e, &params));
            let expected = depth + (surface - depth) * e;
            assert!(color.abs_diff_eq(expected, 1e-5), "e={e}: {color} != {expected}");
        }

        // Midpoint of two samples is the sample of the midpoint
        let a = Vec3::from_array(surface_color(-0.4, &params));
        let b = Vec3::from_array(surface_color(1.2, &params));
        let mid = Vec3::from_array(surface_color(0.4, &params));
        assert!(((a + b) * 0.5).abs_diff_eq(mid, 1e-5));

        // Extrapolation goes below the depth color
        let below = surface_color(-1.0, &params);
        assert!(below[0] < params.depth_color[0]);
    }

    #[test]
    fn test_sample_combines_elevation_and_color() {
        let params = WaveParameters::default();
        let s = sample(0.3, -0.6, 4.0, &params);
        assert_eq!(s.elevation, elevation(0.3, -0.6, 4.0, &params));
        assert_eq!(s.color, surface_color(s.elevation, &params));
    }
}
