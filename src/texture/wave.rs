//! Sum-of-sines stripes.

use std::ops::Range;

use tiny_skia::Point;

use super::Sketch;
use crate::palette::Rgb;

/// One harmonic: `amplitude * ratio * sin(frequency * freq_mul * t / divisor + phase * phase_mul)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    pub ratio: f64,
    pub freq_mul: f64,
    pub phase_mul: f64,
}

impl Harmonic {
    pub const FUNDAMENTAL: Self = Self {
        ratio: 1.0,
        freq_mul: 1.0,
        phase_mul: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Stripes run left to right; the wave displaces `y`.
    Horizontal,
    /// Stripes run top to bottom; the wave displaces `x`.
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveStack {
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub divisor: f64,
    pub phase: f64,
    pub harmonics: Vec<Harmonic>,
}

impl WaveStack {
    pub fn offset_at(&self, t: f64) -> f64 {
        self.harmonics
            .iter()
            .map(|h| {
                let arg = self.frequency * h.freq_mul * t / self.divisor + self.phase * h.phase_mul;
                self.amplitude * h.ratio * arg.sin()
            })
            .sum()
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.base + self.offset_at(t)
    }

    /// Sample `t = 0, step, 2 * step, ..` below `span` along `axis`.
    pub fn trace(&self, axis: Axis, span: i32, step: usize) -> Vec<Point> {
        self.trace_within(axis, 0..span.max(0), step, 0)
    }

    /// Sample every `step` pixels of `along`, evaluating the wave at
    /// `along - origin`.
    pub fn trace_within(
        &self,
        axis: Axis,
        along: Range<i32>,
        step: usize,
        origin: i32,
    ) -> Vec<Point> {
        along
            .step_by(step.max(1))
            .map(|at| {
                let across = self.sample(f64::from(at - origin)) as f32;
                let at = at as f32;
                match axis {
                    Axis::Horizontal => Point::from_xy(at, across),
                    Axis::Vertical => Point::from_xy(across, at),
                }
            })
            .collect()
    }
}

/// Fundamental plus two overtones: the ribbon shape of the gem textures.
pub const RIBBON: [Harmonic; 3] = [
    Harmonic::FUNDAMENTAL,
    Harmonic {
        ratio: 0.3,
        freq_mul: 2.3,
        phase_mul: 1.5,
    },
    Harmonic {
        ratio: 0.15,
        freq_mul: 0.7,
        phase_mul: 0.5,
    },
];

/// A [`RIBBON`] wave over a 100px period scale.
pub fn ribbon(base: f64, amplitude: f64, frequency: f64, phase: f64) -> WaveStack {
    WaveStack {
        base,
        amplitude,
        frequency,
        divisor: 100.0,
        phase,
        harmonics: RIBBON.to_vec(),
    }
}

/// A family of ribbons whose shape parameters grow linearly with the index:
/// each pair is `(first, step)`.
struct RibbonLayer {
    count: usize,
    base: (f64, f64),
    amplitude: (f64, f64),
    frequency: (f64, f64),
    phase: (f64, f64),
    width: f32,
    tint: Rgb,
}

impl RibbonLayer {
    fn stack(&self, index: usize) -> WaveStack {
        let at = |(first, step): (f64, f64)| first + index as f64 * step;
        ribbon(at(self.base), at(self.amplitude), at(self.frequency), at(self.phase))
    }
}

/// Opaque gold ribbons across the whole window plus five wide vertical
/// currents; the chrome drawn on top hides most of them.
pub fn gem_stripes(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let layers = [
        RibbonLayer {
            count: 8,
            base: (100.0, 100.0),
            amplitude: (20.0, 3.0),
            frequency: (0.5, 0.1),
            phase: (0.0, 0.8),
            width: 25.0,
            tint: palette.accent_primary,
        },
        RibbonLayer {
            count: 6,
            base: (150.0, 130.0),
            amplitude: (15.0, 2.0),
            frequency: (0.8, 0.15),
            phase: (2.0, 1.2),
            width: 15.0,
            tint: palette.accent_secondary,
        },
        RibbonLayer {
            count: 10,
            base: (80.0, 85.0),
            amplitude: (8.0, 1.5),
            frequency: (1.2, 0.2),
            phase: (1.0, 0.6),
            width: 5.0,
            tint: palette.accent_highlight,
        },
    ];

    // The ribbons include the right edge itself.
    let span = sketch.width + 1;
    for layer in &layers {
        for index in 0..layer.count {
            let points = layer.stack(index).trace(Axis::Horizontal, span, 5);
            sketch.line(points, layer.tint, layer.width);
        }
    }

    for index in 0..5 {
        let current = WaveStack {
            base: 200.0 + 250.0 * index as f64,
            amplitude: 30.0,
            frequency: 1.0,
            divisor: 80.0,
            phase: 1.5 * index as f64,
            harmonics: vec![Harmonic::FUNDAMENTAL],
        };
        let points = current.trace(Axis::Vertical, sketch.height, 5);
        sketch.line(points, palette.accent_primary, 40.0);
    }
}

/// A family of evenly spaced stripes sharing one shape.
struct Band {
    count: usize,
    first: f64,
    spacing: f64,
    amplitude: f64,
    frequency: f64,
    divisor: f64,
    phase_step: f64,
    overtone: Option<Harmonic>,
    x_step: usize,
    width: f32,
    tint: Rgb,
    alpha: f64,
}

impl Band {
    fn stack(&self, index: usize) -> WaveStack {
        let mut harmonics = vec![Harmonic::FUNDAMENTAL];
        harmonics.extend(self.overtone);
        WaveStack {
            base: self.first + index as f64 * self.spacing,
            amplitude: self.amplitude,
            frequency: self.frequency,
            divisor: self.divisor,
            phase: index as f64 * self.phase_step,
            harmonics,
        }
    }
}

/// Three layers of faint horizontal stripes: wide washes, medium ribbons and
/// fine gold wires.
pub fn organic_stripes(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let bands = [
        Band {
            count: 5,
            first: 150.0,
            spacing: 180.0,
            amplitude: 40.0,
            frequency: 0.3,
            divisor: 100.0,
            phase_step: 1.2,
            overtone: Some(Harmonic {
                ratio: 0.5,
                freq_mul: 1.7,
                phase_mul: 0.8,
            }),
            x_step: 10,
            width: 80.0,
            tint: palette.accent_primary,
            alpha: 0.03,
        },
        Band {
            count: 8,
            first: 80.0,
            spacing: 110.0,
            amplitude: 25.0,
            frequency: 0.5,
            divisor: 80.0,
            phase_step: 0.9,
            overtone: Some(Harmonic {
                ratio: 0.3,
                freq_mul: 2.1,
                phase_mul: 1.1,
            }),
            x_step: 5,
            width: 30.0,
            tint: palette.accent_secondary,
            alpha: 0.05,
        },
        Band {
            count: 12,
            first: 50.0,
            spacing: 75.0,
            amplitude: 15.0,
            frequency: 0.8,
            divisor: 60.0,
            phase_step: 0.6,
            overtone: None,
            x_step: 3,
            width: 3.0,
            tint: palette.accent_highlight,
            alpha: 0.06,
        },
    ];

    for band in &bands {
        let color = palette.bg_primary.blend(band.tint, band.alpha);
        for index in 0..band.count {
            let points = band.stack(index).trace(Axis::Horizontal, sketch.width, band.x_step);
            sketch.line(points, color, band.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{gem_stripes, organic_stripes, ribbon, Axis, Harmonic, WaveStack};
    use crate::palette::Palette;
    use crate::texture::Sketch;
    use crate::zone::ZoneSet;

    fn single(base: f64) -> WaveStack {
        WaveStack {
            base,
            amplitude: 15.0,
            frequency: 0.8,
            divisor: 60.0,
            phase: 0.6,
            harmonics: vec![Harmonic::FUNDAMENTAL],
        }
    }

    #[test]
    fn single_layer_matches_closed_form() {
        let wave = single(50.0);
        for x in [0.0, 3.0, 123.0, 1397.0] {
            let expected = 50.0 + 15.0 * (0.8 * x / 60.0 + 0.6_f64).sin();
            assert!((wave.sample(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn overtones_add_to_the_fundamental() {
        let mut wave = single(0.0);
        let fundamental = wave.offset_at(200.0);
        let overtone = Harmonic {
            ratio: 0.5,
            freq_mul: 1.7,
            phase_mul: 0.8,
        };
        wave.harmonics.push(overtone);
        let expected = fundamental + 7.5 * (0.8 * 1.7 * 200.0 / 60.0 + 0.6 * 0.8_f64).sin();
        assert!((wave.offset_at(200.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn trace_steps_along_the_chosen_axis() {
        let wave = single(100.0);
        let horizontal = wave.trace(Axis::Horizontal, 10, 3);
        assert_eq!(
            horizontal.iter().map(|p| p.x).collect::<Vec<_>>(),
            vec![0.0, 3.0, 6.0, 9.0]
        );
        let vertical = wave.trace(Axis::Vertical, 10, 5);
        assert_eq!(vertical.iter().map(|p| p.y).collect::<Vec<_>>(), vec![0.0, 5.0]);
        assert!((vertical[1].x - wave.sample(5.0) as f32).abs() < 1e-4);
    }

    #[test]
    fn stripes_cover_three_layers() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 0, &palette, &zones);
        organic_stripes(&mut sketch);
        assert_eq!(sketch.primitives().len(), 5 + 8 + 12);
    }

    #[test]
    fn trace_within_offsets_the_wave_origin() {
        let wave = single(10.0);
        let points = wave.trace_within(Axis::Vertical, 38..50, 5, 38);
        assert_eq!(points.iter().map(|p| p.y).collect::<Vec<_>>(), vec![38.0, 43.0, 48.0]);
        assert!((points[0].x - wave.sample(0.0) as f32).abs() < 1e-4);
        assert!((points[2].x - wave.sample(10.0) as f32).abs() < 1e-4);
    }

    #[test]
    fn ribbon_sums_three_harmonics() {
        let wave = ribbon(200.0, 20.0, 0.5, 0.8);
        let x = 350.0_f64;
        let expected = 200.0
            + 20.0 * (0.5 * x / 100.0 + 0.8).sin()
            + 6.0 * (0.5 * 2.3 * x / 100.0 + 0.8 * 1.5).sin()
            + 3.0 * (0.5 * 0.7 * x / 100.0 + 0.8 * 0.5).sin();
        assert!((wave.sample(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn gem_stripes_reach_the_right_edge() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 42, &palette, &zones);
        gem_stripes(&mut sketch);
        let primitives = sketch.finish();
        assert_eq!(primitives.len(), 8 + 6 + 10 + 5);
        let first = primitives[0].points();
        assert_eq!(first.len(), 281);
        assert_eq!(first[280].x, 1400.0);
        let current = primitives[24].points();
        assert_eq!(current.len(), 180);
        assert_eq!(current[179].y, 895.0);
    }
}
