//! Node and lattice textures: neural meshes, circuit traces, crystals, vines and feathers.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::walk::advance;
use super::wave::{Axis, Harmonic, WaveStack};
use super::{pt, Sketch, Tuning};

/// Neighbours of `nodes[index]` closer than `reach`, nearest first.
/// Ties are broken by node order so the result is stable.
fn neighbours(nodes: &[(i32, i32)], index: usize, reach: f64) -> Vec<(f64, usize)> {
    let (x1, y1) = nodes[index];
    let mut found = nodes
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .filter_map(|(j, &(x2, y2))| {
            let dist = f64::from(x1 - x2).hypot(f64::from(y1 - y2));
            (dist < reach).then_some((dist, j))
        })
        .collect::<Vec<_>>();
    found.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    found
}

/// Glowing nodes linked to their two to four nearest neighbours.
pub fn neural(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    let mut nodes = Vec::with_capacity(80);
    for _ in 0..80 {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        let size = sketch.rng.range(2, 5);
        nodes.push((x, y));
        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.5, 0.9));
        sketch.dot(x, y, size, color);
    }

    for (i, &(x1, y1)) in nodes.iter().enumerate() {
        let near = neighbours(&nodes, i, 200.0);
        let take = sketch.rng.range(2, 4) as usize;
        for &(dist, j) in near.iter().take(take) {
            let alpha = (1.0 - dist / 200.0).max(0.1);
            let color = palette.accent_primary.scaled(alpha * sketch.rng.uniform(0.3, 0.6));
            let (x2, y2) = nodes[j];
            sketch.segment(pt(x1, y1), pt(x2, y2), color, 1.0);
        }
    }
}

/// Sparser mesh whose links bend through a jittered midpoint like sparks.
pub fn neural_lightning(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    let mut nodes = Vec::with_capacity(50);
    for _ in 0..50 {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        nodes.push((x, y));
        let size = sketch.rng.range(2, 4);
        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.6, 0.9));
        sketch.dot(x, y, size, color);
    }

    for (i, &(x1, y1)) in nodes.iter().enumerate() {
        let near = neighbours(&nodes, i, 180.0);
        let take = sketch.rng.range(1, 3) as usize;
        for &(dist, j) in near.iter().take(take) {
            let (x2, y2) = nodes[j];
            let mid_x = (x1 + x2).div_euclid(2) + sketch.rng.range(-30, 30);
            let mid_y = (y1 + y2).div_euclid(2) + sketch.rng.range(-30, 30);
            let brightness = (1.0 - dist / 180.0).max(0.15) * sketch.rng.uniform(0.3, 0.6);
            let color = palette.accent_primary.scaled(brightness);
            sketch.line(vec![pt(x1, y1), pt(mid_x, mid_y), pt(x2, y2)], color, 1.0);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParams {
    pub traces: usize,
    pub span: (i32, i32),
    pub brightness: (f64, f64),
    pub pad_spacing: usize,
    pub pad_chance: f64,
    pub joints: usize,
}

impl Tuning for CircuitParams {
    const SPARSE: Self = Self {
        traces: 20,
        span: (100, 300),
        brightness: (0.4, 0.7),
        pad_spacing: 30,
        pad_chance: 0.5,
        joints: 30,
    };

    const DENSE: Self = Self {
        traces: 40,
        span: (80, 200),
        brightness: (0.45, 0.75),
        pad_spacing: 25,
        pad_chance: 0.4,
        joints: 40,
    };
}

/// Axis-aligned traces with solder pads plus scattered joints.
pub fn circuit(sketch: &mut Sketch<'_>, params: CircuitParams) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let (lo, hi) = params.brightness;

    for _ in 0..params.traces {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        if !sketch.admits(x, y) {
            continue;
        }

        if sketch.rng.chance(0.5) {
            let end_x = (x + sketch.rng.range(params.span.0, params.span.1)).min(w);
            if !sketch.admits(end_x, y) {
                continue;
            }
            let color = palette.accent_bright.scaled(sketch.rng.uniform(lo, hi));
            sketch.segment(pt(x, y), pt(end_x, y), color, 2.0);
            for px in (x..end_x).step_by(params.pad_spacing) {
                if sketch.admits(px, y) && sketch.rng.chance(params.pad_chance) {
                    sketch.dot(px, y, 2, palette.accent_highlight);
                }
            }
        } else {
            let end_y = (y + sketch.rng.range(params.span.0, params.span.1)).min(h);
            if sketch.admits(x, end_y) {
                let color = palette.accent_bright.scaled(sketch.rng.uniform(lo, hi));
                sketch.segment(pt(x, y), pt(x, end_y), color, 2.0);
            }
        }
    }

    for _ in 0..params.joints {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        if sketch.admits(x, y) {
            let size = sketch.rng.range(3, 6);
            let color = palette.accent_highlight.scaled(sketch.rng.uniform(0.6, 0.9));
            sketch.dot(x, y, size, color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalParams {
    pub crystals: usize,
    pub radius: (i32, i32),
    pub jitter: f64,
    pub brightness: (f64, f64),
    /// Skip a diagonal whose first vertex lies in a zone.
    pub guard_diagonals: bool,
}

impl Tuning for CrystalParams {
    const SPARSE: Self = Self {
        crystals: 25,
        radius: (30, 80),
        jitter: 0.2,
        brightness: (0.3, 0.6),
        guard_diagonals: true,
    };

    const DENSE: Self = Self {
        crystals: 40,
        radius: (25, 60),
        jitter: 0.15,
        brightness: (0.35, 0.65),
        guard_diagonals: false,
    };
}

/// Irregular polygons with their inner diagonals.
pub fn crystal(sketch: &mut Sketch<'_>, params: CrystalParams) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..params.crystals {
        let cx = sketch.rng.range(0, w);
        let cy = sketch.rng.range(0, h);
        if !sketch.admits(cx, cy) {
            continue;
        }

        let sides = sketch.rng.pick([3_usize, 4, 5, 6]);
        let radius = sketch.rng.range(params.radius.0, params.radius.1);
        let mut corners = Vec::with_capacity(sides + 1);
        for i in 0..sides {
            let angle = TAU / sides as f64 * i as f64
                + sketch.rng.uniform(-params.jitter, params.jitter);
            corners.push(advance(cx, cy, f64::from(radius), angle));
        }
        corners.push(corners[0]);

        let brightness = sketch
            .rng
            .uniform(params.brightness.0, params.brightness.1);
        let color = palette.accent_highlight.scaled(brightness);
        sketch.line(corners.iter().map(|&(x, y)| pt(x, y)).collect(), color, 1.0);

        for i in 0..sides {
            for j in i + 2..sides {
                if i == 0 && j == sides - 1 {
                    continue;
                }
                let (ax, ay) = corners[i];
                if params.guard_diagonals && !sketch.admits(ax, ay) {
                    continue;
                }
                let (bx, by) = corners[j];
                sketch.segment(pt(ax, ay), pt(bx, by), color, 1.0);
            }
        }
    }
}

/// Spiralling vines climbing from the top or bottom edge, with leaves.
pub fn vine(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..15 {
        let mut x = sketch.rng.range(0, w);
        let rising = sketch.rng.chance(0.5);
        let mut y = if rising { h } else { 0 };
        let mut points = vec![pt(x, y)];

        let mut angle = if rising { -FRAC_PI_2 } else { FRAC_PI_2 };
        let coil = f64::from(sketch.rng.range(20, 50));

        for _ in 0..sketch.rng.range(30, 60) {
            angle += 0.15;
            let climb = sketch.rng.range(10, 20);
            x = (x + (coil * angle.cos()) as i32).clamp(-50, w + 50);
            let next_y = if rising { y - climb } else { y + climb };
            y = next_y.clamp(-50, h + 50);
            points.push(pt(x, y));

            if sketch.rng.chance(0.3) {
                let leaf_x = x + sketch.rng.range(-15, 15);
                let leaf_y = y + sketch.rng.range(-15, 15);
                let size = sketch.rng.range(3, 6);
                let color = palette.accent_highlight.scaled(sketch.rng.uniform(0.6, 0.9));
                sketch.dot(leaf_x, leaf_y, size, color);
            }
        }

        let color = palette.accent_primary.scaled(sketch.rng.uniform(0.5, 0.8));
        sketch.picked_segments(&points, color, [1.0, 1.0, 2.0]);
    }
}

/// Kiln crackle redrawn as sine-bent vines: vertical iron wires with leaves
/// and horizontal gold wires.
pub fn geyao_vine(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let leaf_color = palette.accent_highlight.scaled(0.8);

    for i in 0..6 {
        let x = 200 + i * 200;
        let wave = WaveStack {
            base: f64::from(x),
            amplitude: 40.0,
            frequency: 1.0,
            divisor: 80.0,
            phase: f64::from(i),
            harmonics: vec![Harmonic::FUNDAMENTAL],
        };
        let mut points = vec![pt(x, 0)];
        points.extend(wave.trace(Axis::Vertical, h, 30));

        let color = palette.accent_secondary.scaled(sketch.rng.uniform(0.3, 0.5));
        sketch.line(points.clone(), color, 2.0);

        let end = points.len().saturating_sub(5);
        for leaf in points[..end].iter().skip(5).step_by(8) {
            if sketch.rng.chance(0.6) {
                let size = sketch.rng.range(3, 6);
                sketch.dot(leaf.x as i32, leaf.y as i32, size, leaf_color);
            }
        }
    }

    for i in 0..5 {
        let y = 150 + i * 150;
        let wave = WaveStack {
            base: f64::from(y),
            amplitude: 20.0,
            frequency: 1.0,
            divisor: 60.0,
            phase: f64::from(i),
            harmonics: vec![Harmonic::FUNDAMENTAL],
        };
        let mut points = vec![pt(0, y)];
        points.extend(wave.trace(Axis::Horizontal, w, 25));

        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.4, 0.7));
        sketch.line(points, color, 1.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatherParams {
    pub feathers: usize,
    pub length: (i32, i32),
    pub stride: i32,
    pub bend: f64,
    pub barb_every: usize,
    pub barb_spread: f64,
    pub barb_length: (i32, i32),
    pub barb_brightness: (f64, f64),
}

impl Tuning for FeatherParams {
    const SPARSE: Self = Self {
        feathers: 80,
        length: (50, 150),
        stride: 5,
        bend: 0.1,
        barb_every: 3,
        barb_spread: 1.5,
        barb_length: (10, 25),
        barb_brightness: (0.3, 0.5),
    };

    const DENSE: Self = Self {
        feathers: 60,
        length: (60, 120),
        stride: 4,
        bend: 0.08,
        barb_every: 2,
        barb_spread: 1.2,
        barb_length: (8, 18),
        barb_brightness: (0.25, 0.5),
    };
}

/// Gently curving shafts with short barbs.
pub fn feather(sketch: &mut Sketch<'_>, params: FeatherParams) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..params.feathers {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        if !sketch.admits(x, y) {
            continue;
        }

        let length = sketch.rng.range(params.length.0, params.length.1);
        let mut angle = sketch.rng.uniform(0.0, TAU);
        let (mut cx, mut cy) = (x, y);
        let mut shaft = vec![(x, y)];
        for _ in 0..length / params.stride {
            (cx, cy) = advance(cx, cy, f64::from(params.stride), angle);
            angle += sketch.rng.uniform(-params.bend, params.bend);
            shaft.push((cx, cy));
        }
        if shaft.len() <= 3 {
            continue;
        }

        let color = palette.accent_primary.scaled(sketch.rng.uniform(0.4, 0.7));
        sketch.line(shaft.iter().map(|&(x, y)| pt(x, y)).collect(), color, 1.0);

        for &(mx, my) in shaft.iter().step_by(params.barb_every) {
            let barb_angle = angle + sketch.rng.uniform(-params.barb_spread, params.barb_spread);
            let barb = sketch.rng.range(params.barb_length.0, params.barb_length.1);
            let (bx, by) = advance(mx, my, f64::from(barb), barb_angle);
            if sketch.admits(bx, by) {
                let (lo, hi) = params.barb_brightness;
                let color = palette.accent_secondary.scaled(sketch.rng.uniform(lo, hi));
                sketch.segment(pt(mx, my), pt(bx, by), color, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{circuit, crystal, neighbours, neural, vine, CircuitParams, CrystalParams};
    use crate::palette::Palette;
    use crate::texture::{Primitive, Sketch, Tuning};
    use crate::zone::ZoneSet;

    #[test]
    fn neighbours_are_sorted_and_bounded() {
        let nodes = [(0, 0), (10, 0), (3, 4), (500, 500), (0, 5)];
        let near = neighbours(&nodes, 0, 100.0);
        let order = near.iter().map(|(_, j)| *j).collect::<Vec<_>>();
        // (3, 4) and (0, 5) are both 5 away; node order breaks the tie.
        assert_eq!(order, vec![2, 4, 1]);
        assert!(near.iter().all(|(dist, _)| *dist < 100.0));
    }

    #[test]
    fn neural_draws_every_node() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 300, &palette, &zones);
        neural(&mut sketch);
        let dots = sketch
            .primitives()
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Dot { .. }))
            .count();
        assert_eq!(dots, 80);
    }

    #[test]
    fn circuit_traces_are_axis_aligned() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::code_pane_core();
        let mut sketch = Sketch::new(1400, 900, 1600, &palette, &zones);
        circuit(&mut sketch, CircuitParams::DENSE);
        for primitive in sketch.primitives() {
            if let Primitive::Polyline { points, width, .. } = primitive {
                assert_eq!(*width, 2.0);
                let (a, b) = (points[0], points[1]);
                assert!(a.x == b.x || a.y == b.y);
                assert!(!zones.contains(a.x, a.y) && !zones.contains(b.x, b.y));
            }
        }
    }

    #[test]
    fn crystals_close_their_outline() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 1700, &palette, &zones);
        crystal(&mut sketch, CrystalParams::DENSE);
        let outlines = sketch
            .primitives()
            .iter()
            .filter(|primitive| primitive.points().len() > 2)
            .collect::<Vec<_>>();
        assert_eq!(outlines.len(), 40);
        for outline in outlines {
            let points = outline.points();
            assert_eq!(points.first(), points.last());
        }
    }

    #[test]
    fn vines_start_on_an_edge() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 400, &palette, &zones);
        vine(&mut sketch);
        let first = sketch
            .primitives()
            .iter()
            .find(|primitive| matches!(primitive, Primitive::Polyline { .. }))
            .map(|primitive| primitive.points()[0])
            .expect("at least one vine segment");
        assert!(first.y == 0.0 || first.y == 900.0);
    }
}
