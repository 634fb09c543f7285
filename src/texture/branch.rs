//! Recursive branching lines.
//!
//! A branch is one bent segment from a start point along an angle. After it
//! is drawn, its [`Fanout`] decides how many children grow from the segment's
//! end, each with a deflected angle and a shrunken length. Recursion stops
//! once `depth > max_depth` or `length < min_length`.

use std::f64::consts::TAU;
use std::ops::Range;

use super::walk::quad_point;
use super::{pt, Sketch};
use crate::palette::{Accent, Rgb};

/// How a single branch segment is bent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// `samples + 1` points of a quadratic Bezier whose control point sits
    /// halfway along the heading, jittered by up to `jitter` pixels.
    Bezier { jitter: i32, samples: u32 },
    /// A single kink at the floor-midpoint, jittered by up to `jitter` pixels.
    Kink { jitter: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildSlot {
    pub chance: f64,
    /// Angle delta range; negated when `mirror` is set.
    pub turn: Range<f64>,
    pub mirror: bool,
    pub shrink: Range<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fanout {
    /// Every slot rolls its own chance.
    Slots(Vec<ChildSlot>),
    /// Pick a child count from `counts`, then grow that many, each turned by
    /// a free draw from `turn`.
    Count {
        counts: &'static [u32],
        turn: Range<f64>,
        shrink: Range<f64>,
    },
}

/// A bead dropped on a segment's end before its children grow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    /// Only segments with `depth < below` are considered.
    pub below: u32,
    pub chance: f64,
    pub size: (i32, i32),
    pub tint: Accent,
    pub brightness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchParams {
    pub max_depth: u32,
    pub min_length: f64,
    pub curve: Curve,
    /// Children are only considered while `depth < spawn_below`.
    pub spawn_below: u32,
    pub fanout: Fanout,
    pub knot: Option<Knot>,
}

impl BranchParams {
    /// Slim single-child branches used by the elegant texture.
    pub fn elegant() -> Self {
        Self {
            max_depth: 4,
            min_length: 15.0,
            curve: Curve::Bezier {
                jitter: 20,
                samples: 10,
            },
            spawn_below: 3,
            fanout: Fanout::Slots(vec![ChildSlot {
                chance: 0.6,
                turn: -0.8..0.8,
                mirror: false,
                shrink: 0.5..0.75,
            }]),
            knot: None,
        }
    }

    /// Forking trees with two independent child slots.
    pub fn forked(max_depth: u32) -> Self {
        Self {
            max_depth,
            min_length: 5.0,
            curve: Curve::Kink { jitter: 10 },
            spawn_below: u32::MAX,
            fanout: Fanout::Slots(vec![
                ChildSlot {
                    chance: 0.7,
                    turn: 0.3..0.8,
                    mirror: false,
                    shrink: 0.5..0.8,
                },
                ChildSlot {
                    chance: 0.5,
                    turn: 0.3..0.8,
                    mirror: true,
                    shrink: 0.4..0.7,
                },
            ]),
            knot: None,
        }
    }
}

/// Grow one branch and its descendants. `look` maps a depth to colour and width.
pub fn grow(
    sketch: &mut Sketch<'_>,
    params: &BranchParams,
    look: &dyn Fn(u32) -> (Rgb, f32),
    start: (i32, i32),
    angle: f64,
    length: f64,
    depth: u32,
) {
    if depth > params.max_depth || length < params.min_length {
        return;
    }
    let (x, y) = start;
    if !sketch.admits(x, y) {
        return;
    }

    let end = (
        x + (length * angle.cos()) as i32,
        y + (length * angle.sin()) as i32,
    );
    let points = match params.curve {
        Curve::Bezier { jitter, samples } => {
            let ctrl = (
                x + (length * angle.cos() * 0.5) as i32 + sketch.rng.range(-jitter, jitter),
                y + (length * angle.sin() * 0.5) as i32 + sketch.rng.range(-jitter, jitter),
            );
            let samples = samples.max(1);
            (0..=samples)
                .map(|i| {
                    let t = f64::from(i) / f64::from(samples);
                    let (px, py) = quad_point(start, ctrl, end, t);
                    pt(px, py)
                })
                .collect::<Vec<_>>()
        }
        Curve::Kink { jitter } => {
            let mid = (
                (x + end.0).div_euclid(2) + sketch.rng.range(-jitter, jitter),
                (y + end.1).div_euclid(2) + sketch.rng.range(-jitter, jitter),
            );
            vec![pt(x, y), pt(mid.0, mid.1), pt(end.0, end.1)]
        }
    };

    let (color, width) = look(depth);
    sketch.line(points, color, width);

    if let Some(knot) = params.knot {
        if depth < knot.below && sketch.rng.chance(knot.chance) {
            let size = sketch.rng.range(knot.size.0, knot.size.1);
            let color = sketch.palette.accent(knot.tint).scaled(knot.brightness);
            sketch.dot(end.0, end.1, size, color);
        }
    }

    if depth >= params.spawn_below {
        return;
    }
    match &params.fanout {
        Fanout::Slots(slots) => {
            for slot in slots {
                if !sketch.rng.chance(slot.chance) {
                    continue;
                }
                let turn = sketch.rng.uniform(slot.turn.start, slot.turn.end);
                let child_angle = if slot.mirror { angle - turn } else { angle + turn };
                let child_length =
                    length * sketch.rng.uniform(slot.shrink.start, slot.shrink.end);
                grow(sketch, params, look, end, child_angle, child_length, depth + 1);
            }
        }
        Fanout::Count {
            counts,
            turn,
            shrink,
        } => {
            let count = sketch.rng.choose(counts).unwrap_or(0);
            for _ in 0..count {
                let child_angle = angle + sketch.rng.uniform(turn.start, turn.end);
                let child_length = length * sketch.rng.uniform(shrink.start, shrink.end);
                grow(sketch, params, look, end, child_angle, child_length, depth + 1);
            }
        }
    }
}

/// Eight slim trees in dimmed `accent_primary`.
pub fn elegant_branches(sketch: &mut Sketch<'_>) {
    let params = BranchParams::elegant();
    let base = sketch.palette.accent_primary;
    let look = |depth: u32| {
        let width = 2_u32.saturating_sub(depth / 2).max(1);
        (base.scaled(0.4 - f64::from(depth) * 0.07), width as f32)
    };
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..8 {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        let angle = sketch.rng.uniform(0.0, TAU);
        let length = sketch.rng.range(80, 150);
        grow(sketch, &params, &look, (x, y), angle, f64::from(length), 0);
    }
}

/// Twelve forked trees blended faintly into the background.
pub fn branch_lines(sketch: &mut Sketch<'_>, intensity: f64) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..12 {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        let angle = sketch.rng.uniform(0.0, TAU);
        let length = sketch.rng.range(60, 120);
        let max_depth = sketch.rng.range(3, 5) as u32;

        let params = BranchParams::forked(max_depth);
        let look = |depth: u32| {
            let fade = 1.0 - f64::from(depth) / f64::from(max_depth) * 0.5;
            let color = palette
                .bg_primary
                .blend(palette.accent_primary, intensity * fade);
            (color, 3_u32.saturating_sub(depth).max(1) as f32)
        };
        grow(sketch, &params, &look, (x, y), angle, f64::from(length), 0);
    }
}
