//! Random-walk textures: snakes, threads, organic flows and lava streams.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tiny_skia::Point;

use super::{pt, Shade, Sketch, Tuning};
use crate::palette::Accent;

/// Step `(x, y)` by `step` pixels along `angle`, truncating like the pixel grid does.
#[inline]
pub(crate) fn advance(x: i32, y: i32, step: f64, angle: f64) -> (i32, i32) {
    (x + (step * angle.cos()) as i32, y + (step * angle.sin()) as i32)
}

/// Point `t` of the quadratic Bezier `from -> ctrl -> to`, truncated to the grid.
#[inline]
pub(crate) fn quad_point(from: (i32, i32), ctrl: (i32, i32), to: (i32, i32), t: f64) -> (i32, i32) {
    let u = 1.0 - t;
    let eval = |a: i32, b: i32, c: i32| {
        (u * u * f64::from(a) + 2.0 * u * t * f64::from(b) + t * t * f64::from(c)) as i32
    };
    (eval(from.0, ctrl.0, to.0), eval(from.1, ctrl.1, to.1))
}

/// Meandering lines with swollen knots, blended toward `accent_primary`.
pub fn snake_lines(sketch: &mut Sketch<'_>, intensity: f64) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let line_color = palette.bg_primary.blend(palette.accent_primary, intensity);
    let knot_color = palette.bg_primary.blend(palette.accent_highlight, intensity * 1.5);

    for _ in 0..25 {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(50, h - 50);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(8, 15) {
            let angle = sketch.rng.uniform(0.0, TAU);
            let dist = sketch.rng.range(30, 80);
            (x, y) = advance(x, y, f64::from(dist), angle);
            x = x.clamp(0, w);
            y = y.clamp(0, h);
            points.push(pt(x, y));
        }

        let width = sketch.rng.pick([1.0, 1.0, 2.0, 2.0, 3.0]);
        sketch.line(points.clone(), line_color, width);

        for knot in points.iter().take(points.len() - 1).skip(1) {
            if sketch.rng.chance(0.4) {
                let size = sketch.rng.range(2, 5);
                sketch.dot(knot.x as i32, knot.y as i32, size, knot_color);
            }
        }
    }
}

/// Brownian hairlines sampled every third step.
pub fn bright_threads(sketch: &mut Sketch<'_>, intensity: f64) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..40 {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut points = Vec::new();

        for step in 0..sketch.rng.range(100, 300) {
            x = (x + sketch.rng.range(-3, 3)).clamp(0, w);
            y = (y + sketch.rng.range(-2, 2)).clamp(0, h);
            if step % 3 == 0 {
                points.push(pt(x, y));
            }
        }

        if points.len() > 1 {
            let alpha = intensity * sketch.rng.uniform(0.5, 1.0);
            let color = palette.bg_primary.blend(palette.accent_highlight, alpha);
            sketch.line(points, color, 1.0);
        }
    }
}

/// Vine-like chains of short Bezier hops with occasional knots.
pub fn organic_flow(sketch: &mut Sketch<'_>, intensity: f64) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let color = palette.bg_primary.blend(palette.accent_secondary, intensity);

    for _ in 0..30 {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(5, 12) {
            let dx = sketch.rng.range(-60, 60);
            let dy = sketch.rng.range(-40, 40);
            let mid = (
                x + dx.div_euclid(2) + sketch.rng.range(-15, 15),
                y + dy.div_euclid(2) + sketch.rng.range(-15, 15),
            );
            for t in [0.2, 0.4, 0.6, 0.8] {
                let (px, py) = quad_point((x, y), mid, (x + dx, y + dy), t);
                points.push(pt(px, py));
            }
            x += dx;
            y += dy;
        }

        let base_width = sketch.rng.pick([1.0, 1.0, 1.0, 2.0]);
        sketch.jittered_segments(&points, color, base_width);

        let stride = sketch.rng.range(2, 5) as usize;
        for knot in points.iter().take(points.len() - 1).skip(1).step_by(stride) {
            if sketch.rng.chance(0.3) {
                let size = sketch.rng.range(2, 4);
                sketch.dot(knot.x as i32, knot.y as i32, size, color);
            }
        }
    }
}

/// Random walks bent by a sine field: each step moves along a random heading,
/// then the field pushes `x` by `swirl * sin(y / period)` and `y` by
/// `swirl * cos(x / period)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveField {
    pub curves: usize,
    /// Start `x` may fall this far outside either edge.
    pub margin: i32,
    /// Start `y` keeps this far from the top and bottom.
    pub inset: i32,
    pub steps: (i32, i32),
    pub step: (i32, i32),
    pub swirl: f64,
    pub period: f64,
    /// Walks are clamped this far outside the canvas.
    pub bound: i32,
    pub widths: &'static [f32],
    pub brightness: (f64, f64),
    /// Chance a segment keeps its base width instead of gaining a pixel.
    pub keep: f64,
    /// Knots skip this many points at both ends.
    pub knot_inset: usize,
    pub knot_every: (i32, i32),
    pub knot_chance: f64,
    pub knot_size: (i32, i32),
    pub knot_tint: (Accent, f64),
}

impl CurveField {
    pub const ELEGANT: Self = Self {
        curves: 15,
        margin: 100,
        inset: 50,
        steps: (20, 40),
        step: (20, 40),
        swirl: 15.0,
        period: 30.0,
        bound: 150,
        widths: &[1.0, 1.0, 2.0],
        brightness: (0.4, 0.7),
        keep: 0.7,
        knot_inset: 3,
        knot_every: (4, 7),
        knot_chance: 0.5,
        knot_size: (2, 5),
        knot_tint: (Accent::Highlight, 0.85),
    };

    pub const CONTRAST: Self = Self {
        curves: 20,
        margin: 50,
        inset: 50,
        steps: (30, 60),
        step: (15, 35),
        swirl: 10.0,
        period: 40.0,
        bound: 100,
        widths: &[1.0, 1.0, 1.0, 2.0],
        brightness: (0.3, 0.55),
        keep: 0.8,
        knot_inset: 2,
        knot_every: (3, 6),
        knot_chance: 0.6,
        knot_size: (2, 5),
        knot_tint: (Accent::Highlight, 0.7),
    };

    pub const FINAL: Self = Self {
        curves: 25,
        margin: 100,
        inset: 0,
        steps: (40, 80),
        step: (20, 40),
        swirl: 15.0,
        period: 30.0,
        bound: 150,
        widths: &[1.0, 1.0, 2.0],
        brightness: (0.5, 0.8),
        keep: 0.7,
        knot_inset: 3,
        knot_every: (2, 5),
        knot_chance: 0.7,
        knot_size: (3, 6),
        knot_tint: (Accent::Highlight, 0.9),
    };

    pub const VIVID: Self = Self {
        curves: 30,
        margin: 150,
        inset: 0,
        steps: (50, 100),
        step: (15, 35),
        swirl: 20.0,
        period: 25.0,
        bound: 200,
        widths: &[1.0, 1.0, 2.0],
        brightness: (0.6, 0.9),
        keep: 0.6,
        knot_inset: 3,
        knot_every: (2, 4),
        knot_chance: 0.8,
        knot_size: (3, 7),
        knot_tint: (Accent::Light, 0.95),
    };
}

/// Long bright curves through a sine field, knotted along their length.
pub fn field_curves(sketch: &mut Sketch<'_>, field: &CurveField) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let knot_color = palette.accent(field.knot_tint.0).scaled(field.knot_tint.1);

    for _ in 0..field.curves {
        let mut x = sketch.rng.range(-field.margin, w + field.margin);
        let mut y = sketch.rng.range(field.inset, h - field.inset);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(field.steps.0, field.steps.1) {
            let angle = sketch.rng.uniform(0.0, TAU);
            let step = sketch.rng.range(field.step.0, field.step.1);
            (x, y) = advance(x, y, f64::from(step), angle);
            x += (field.swirl * (f64::from(y) / field.period).sin()) as i32;
            y += (field.swirl * (f64::from(x) / field.period).cos()) as i32;
            x = x.clamp(-field.bound, w + field.bound);
            y = y.clamp(-field.bound, h + field.bound);
            points.push(pt(x, y));
        }

        let width = sketch.rng.choose(field.widths).unwrap_or(1.0);
        let brightness = sketch.rng.uniform(field.brightness.0, field.brightness.1);
        let color = palette.accent_bright.scaled(brightness);
        sketch.thickened_segments(&points, color, width, field.keep);

        let stride = sketch.rng.range(field.knot_every.0, field.knot_every.1).max(1) as usize;
        let end = points.len().saturating_sub(field.knot_inset);
        for knot in points[..end].iter().skip(field.knot_inset).step_by(stride) {
            if sketch.rng.chance(field.knot_chance) {
                let size = sketch.rng.range(field.knot_size.0, field.knot_size.1);
                sketch.dot(knot.x as i32, knot.y as i32, size, knot_color);
            }
        }
    }
}

/// Curves built from quadratic Bezier hops, each hop heading mostly left or
/// right, faded into the background.
pub fn bezier_hops(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..15 {
        let mut x = sketch.rng.range(-100, w + 100);
        let mut y = sketch.rng.range(100, h - 100);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(5, 12) {
            let angle = sketch.rng.uniform(-FRAC_PI_2, FRAC_PI_2) + sketch.rng.pick([0.0, PI]);
            let dist = f64::from(sketch.rng.range(80, 200));
            let mid = (
                x + (dist * angle.cos() / 2.0) as i32 + sketch.rng.range(-30, 30),
                y + (dist * angle.sin() / 2.0) as i32 + sketch.rng.range(-30, 30),
            );
            let end = advance(x, y, dist, angle);
            for t in [0.2, 0.4, 0.6, 0.8, 1.0] {
                let (px, py) = quad_point((x, y), mid, end, t);
                points.push(pt(px, py));
            }
            (x, y) = end;
        }

        let width = sketch.rng.pick([1.0, 1.0, 2.0]);
        let alpha = sketch.rng.uniform(0.15, 0.35);
        let tint = sketch.rng.pick([
            palette.accent_primary,
            palette.accent_secondary,
            palette.accent_highlight,
        ]);
        sketch.line(points.clone(), Shade::Wash.apply(palette, tint, alpha), width);

        let knot_color = Shade::Wash.apply(palette, tint, alpha * 1.3);
        let stride = sketch.rng.range(2, 4) as usize;
        for knot in points.iter().take(points.len() - 1).skip(1).step_by(stride) {
            if sketch.rng.chance(0.5) {
                let size = sketch.rng.range(2, 5);
                sketch.dot(knot.x as i32, knot.y as i32, size, knot_color);
            }
        }
    }
}

/// Snakes that turn a little at every step, with bright beads along the body.
pub fn meanders(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..15 {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut angle = sketch.rng.uniform(0.0, TAU);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(30, 60) {
            angle += sketch.rng.uniform(-0.3, 0.3);
            let step = sketch.rng.range(10, 25);
            (x, y) = advance(x, y, f64::from(step), angle);
            x = x.clamp(-100, w + 100);
            y = y.clamp(-100, h + 100);
            points.push(pt(x, y));
        }

        let width = sketch.rng.pick([1.0, 2.0]);
        let color = palette.accent_highlight.scaled(sketch.rng.uniform(0.5, 0.8));
        sketch.line(points.clone(), color, width);

        let stride = sketch.rng.range(3, 6) as usize;
        let end = points.len().saturating_sub(5);
        for bead in points[..end].iter().skip(5).step_by(stride) {
            let size = sketch.rng.range(2, 5);
            let color = palette.accent_bright.scaled(sketch.rng.uniform(0.7, 1.0));
            sketch.dot(bead.x as i32, bead.y as i32, size, color);
        }
    }
}

/// Jittery hairline filaments; each step is kept with probability `keep`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threads {
    pub count: usize,
    pub steps: (i32, i32),
    pub jitter: (i32, i32),
    pub keep: f64,
    pub tint: Accent,
    pub shade: Shade,
    pub brightness: (f64, f64),
}

impl Threads {
    pub const ELEGANT: Self = Self {
        count: 30,
        steps: (30, 60),
        jitter: (5, 4),
        keep: 0.25,
        tint: Accent::Highlight,
        shade: Shade::Dim,
        brightness: (0.35, 0.6),
    };

    pub const VISIBLE: Self = Self {
        count: 30,
        steps: (20, 50),
        jitter: (5, 3),
        keep: 0.3,
        tint: Accent::Highlight,
        shade: Shade::Wash,
        brightness: (0.2, 0.4),
    };

    pub const CONTRAST: Self = Self {
        count: 40,
        steps: (30, 80),
        jitter: (4, 3),
        keep: 0.25,
        tint: Accent::Highlight,
        shade: Shade::Dim,
        brightness: (0.35, 0.6),
    };

    pub const FINAL: Self = Self {
        count: 50,
        steps: (40, 100),
        jitter: (5, 4),
        keep: 0.2,
        tint: Accent::Highlight,
        shade: Shade::Dim,
        brightness: (0.4, 0.7),
    };

    pub const VIVID: Self = Self {
        count: 60,
        steps: (50, 120),
        jitter: (6, 5),
        keep: 0.15,
        tint: Accent::Light,
        shade: Shade::Dim,
        brightness: (0.5, 0.85),
    };
}

pub fn threads(sketch: &mut Sketch<'_>, threads: &Threads) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let (dx, dy) = threads.jitter;

    for _ in 0..threads.count {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(threads.steps.0, threads.steps.1) {
            x = (x + sketch.rng.range(-dx, dx)).clamp(0, w);
            y = (y + sketch.rng.range(-dy, dy)).clamp(0, h);
            if sketch.rng.chance(threads.keep) {
                points.push(pt(x, y));
            }
        }

        if points.len() > 1 {
            let amount = sketch.rng.uniform(threads.brightness.0, threads.brightness.1);
            let color = threads.shade.apply(palette, palette.accent(threads.tint), amount);
            sketch.line(points, color, 1.0);
        }
    }
}

/// Heavy primary strokes shadowed by two offset gold hairlines.
pub fn organic_gold(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..12 {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut angle = sketch.rng.uniform(0.0, TAU);
        let mut points = Vec::new();

        for _ in 0..sketch.rng.range(20, 40) {
            let step = sketch.rng.range(15, 35);
            angle += sketch.rng.uniform(-0.3, 0.3);
            (x, y) = advance(x, y, f64::from(step), angle);
            x += (10.0 * (f64::from(y) / 25.0).sin()) as i32;
            points.push(pt(x, y));
        }

        let color = palette.accent_primary.scaled(sketch.rng.uniform(0.3, 0.6));
        for pair in points.windows(2) {
            sketch.segment(pair[0], pair[1], color, 2.0);
        }

        for offset in [-5.0_f32, 5.0] {
            let shadow = points
                .iter()
                .map(|p| Point::from_xy(p.x + offset, p.y + offset))
                .collect::<Vec<_>>();
            let color = palette.accent_bright.scaled(sketch.rng.uniform(0.5, 0.8));
            sketch.line(shadow, color, 1.0);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagmaParams {
    pub flows: usize,
    pub steps: (i32, i32),
    pub drift: i32,
    pub fall: (i32, i32),
    pub brightness: f64,
    pub falloff: f64,
}

impl Tuning for MagmaParams {
    const SPARSE: Self = Self {
        flows: 15,
        steps: (20, 40),
        drift: 20,
        fall: (10, 25),
        brightness: 0.8,
        falloff: 0.2,
    };

    const DENSE: Self = Self {
        flows: 20,
        steps: (25, 50),
        drift: 25,
        fall: (12, 22),
        brightness: 0.9,
        falloff: 0.25,
    };
}

/// Lava streams falling from the top edge, drawn as five parallel hairlines
/// that dim away from the centre line.
pub fn magma(sketch: &mut Sketch<'_>, params: MagmaParams) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..params.flows {
        let mut x = sketch.rng.range(0, w);
        let mut y = 0;
        let mut points = Vec::new();

        for _ in 0..sketch.rng.range(params.steps.0, params.steps.1) {
            x += sketch.rng.range(-params.drift, params.drift);
            y += sketch.rng.range(params.fall.0, params.fall.1);
            if y > h {
                break;
            }
            if sketch.admits(x, y) {
                points.push(pt(x, y));
            }
        }

        if points.len() <= 3 {
            continue;
        }
        for offset in -2_i32..=2 {
            let brightness = params.brightness - f64::from(offset.abs()) * params.falloff;
            let color = palette.accent_bright.scaled(brightness);
            let shifted = points
                .iter()
                .map(|p| Point::from_xy(p.x + offset as f32, p.y))
                .collect::<Vec<_>>();
            sketch.line(shifted, color, 1.0);
        }
    }
}
