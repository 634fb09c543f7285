//! Fracture textures: dried-earth cracks, kiln crackle and lightning.

use std::f64::consts::TAU;

use super::walk::advance;
use super::{pt, Sketch};

struct CrackShape {
    cracks: usize,
    hops: (i32, i32),
    stride: (i32, i32),
    wobble: f64,
    jitter: (i32, i32),
    bound: Option<i32>,
    fork_chance: f64,
    fork_hops: (i32, i32),
    fork_stride: (i32, i32),
    fork_brightness: (f64, f64),
    brightness: (f64, f64),
    knots: bool,
}

const DRY_EARTH: CrackShape = CrackShape {
    cracks: 20,
    hops: (5, 15),
    stride: (20, 50),
    wobble: 0.5,
    jitter: (5, 5),
    bound: Some(50),
    fork_chance: 0.3,
    fork_hops: (3, 8),
    fork_stride: (10, 25),
    fork_brightness: (0.5, 0.8),
    brightness: (0.6, 0.9),
    knots: true,
};

const SOFT_CRACK: CrackShape = CrackShape {
    cracks: 8,
    hops: (5, 12),
    stride: (30, 60),
    wobble: 0.4,
    jitter: (8, 0),
    bound: None,
    fork_chance: 0.4,
    fork_hops: (3, 6),
    fork_stride: (15, 30),
    fork_brightness: (0.4, 0.7),
    brightness: (0.5, 0.8),
    knots: false,
};

fn cracks(sketch: &mut Sketch<'_>, shape: &CrackShape) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    let knot_color = palette.accent_highlight.scaled(0.9);

    for _ in 0..shape.cracks {
        let mut x = sketch.rng.range(0, w);
        let mut y = sketch.rng.range(0, h);
        let mut angle = sketch.rng.uniform(0.0, TAU);
        let mut points = vec![pt(x, y)];

        for _ in 0..sketch.rng.range(shape.hops.0, shape.hops.1) {
            let step = sketch.rng.range(shape.stride.0, shape.stride.1);
            angle += sketch.rng.uniform(-shape.wobble, shape.wobble);
            (x, y) = advance(x, y, f64::from(step), angle);
            x += sketch.rng.range(-shape.jitter.0, shape.jitter.0);
            y += sketch.rng.range(-shape.jitter.1, shape.jitter.1);
            if let Some(margin) = shape.bound {
                x = x.clamp(-margin, w + margin);
                y = y.clamp(-margin, h + margin);
            }
            points.push(pt(x, y));

            if sketch.rng.chance(shape.fork_chance) {
                let mut fork_angle = angle + sketch.rng.uniform(-1.0, 1.0);
                let (mut fx, mut fy) = (x, y);
                let mut fork = vec![pt(fx, fy)];
                for _ in 0..sketch.rng.range(shape.fork_hops.0, shape.fork_hops.1) {
                    let step = sketch.rng.range(shape.fork_stride.0, shape.fork_stride.1);
                    fork_angle += sketch.rng.uniform(-0.3, 0.3);
                    (fx, fy) = advance(fx, fy, f64::from(step), fork_angle);
                    fork.push(pt(fx, fy));
                }
                let (lo, hi) = shape.fork_brightness;
                let color = palette.accent_bright.scaled(sketch.rng.uniform(lo, hi));
                sketch.line(fork, color, 1.0);
            }
        }

        let (lo, hi) = shape.brightness;
        let color = palette.accent_bright.scaled(sketch.rng.uniform(lo, hi));
        sketch.line(points.clone(), color, 2.0);

        if shape.knots {
            let end = points.len().saturating_sub(2);
            for knot in points[..end].iter().skip(2).step_by(3) {
                let size = sketch.rng.range(2, 4);
                sketch.dot(knot.x as i32, knot.y as i32, size, knot_color);
            }
        }
    }
}

/// Bright jagged cracks with forks and glowing junctions.
pub fn crack(sketch: &mut Sketch<'_>) {
    cracks(sketch, &DRY_EARTH);
}

/// Fewer, longer cracks whose forks curl like tendrils.
pub fn crack_organic(sketch: &mut Sketch<'_>) {
    cracks(sketch, &SOFT_CRACK);
}

/// Straight crackle shards scattered over the canvas.
fn shards(sketch: &mut Sketch<'_>, count: usize, length: (i32, i32), brightness: (f64, f64)) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);
    for _ in 0..count {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        let angle = sketch.rng.uniform(0.0, TAU);
        let len = sketch.rng.range(length.0, length.1);
        let (ex, ey) = advance(x, y, f64::from(len), angle);
        let color = palette.accent_highlight.scaled(sketch.rng.uniform(brightness.0, brightness.1));
        sketch.segment(pt(x, y), pt(ex, ey), color, 1.0);
    }
}

/// Top-to-bottom "iron wire" drifting sideways by up to `jitter` every `step` rows.
fn iron_wire(
    sketch: &mut Sketch<'_>,
    mut x: i32,
    step: usize,
    jitter: i32,
) -> Vec<tiny_skia::Point> {
    let mut points = vec![pt(x, 0)];
    for y in (0..sketch.height).step_by(step) {
        x += sketch.rng.range(-jitter, jitter);
        points.push(pt(x, y));
    }
    points
}

/// Ge-kiln crackle: dark iron wires, bright gold wires and small shards.
pub fn geyao(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..8 {
        let x = sketch.rng.range(0, w);
        let points = iron_wire(sketch, x, 20, 10);
        let color = palette.accent_secondary.scaled(sketch.rng.uniform(0.3, 0.5));
        sketch.line(points, color, 2.0);
    }

    for _ in 0..10 {
        let mut y = sketch.rng.range(0, h);
        let mut points = vec![pt(0, y)];
        for x in (0..w).step_by(25) {
            y += sketch.rng.range(-8, 8);
            points.push(pt(x, y));
        }
        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.5, 0.8));
        sketch.line(points, color, 1.0);
    }

    shards(sketch, 50, (30, 80), (0.4, 0.7));
}

/// Regularly spaced iron wires crossed by stepped gold wires.
pub fn crack_geyao(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let w = sketch.width;

    for i in 0..8 {
        let points = iron_wire(sketch, 150 + i * 160, 40, 15);
        let color = palette.accent_secondary.scaled(sketch.rng.uniform(0.35, 0.55));
        sketch.line(points, color, 2.0);
    }

    for i in 0..6 {
        let (mut x, mut y) = (0, 120 + i * 130);
        let mut points = vec![pt(x, y)];
        while x < w {
            x += sketch.rng.range(40, 80);
            y += sketch.rng.range(-20, 20);
            points.push(pt(x, y));
        }
        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.5, 0.75));
        sketch.line(points, color, 1.0);
    }

    shards(sketch, 30, (20, 50), (0.3, 0.6));
}

/// Zig-zag bolts from the top edge to the bottom edge with short side sparks.
pub fn lightning(sketch: &mut Sketch<'_>) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..25 {
        let x1 = sketch.rng.range(0, w);
        let x2 = sketch.rng.range(0, w);
        let mut points = vec![pt(x1, 0)];

        let segments = sketch.rng.range(5, 12);
        for i in 0..segments {
            let progress = f64::from(i + 1) / f64::from(segments);
            let target_x = f64::from(x1) + f64::from(x2 - x1) * progress;
            let target_y = f64::from(h) * progress;
            let offset = sketch.rng.range(-40, 40);
            points.push(pt((target_x + f64::from(offset)) as i32, target_y as i32));
        }
        points.push(pt(x2, h));

        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.6, 1.0));
        sketch.line(points.clone(), color, 2.0);

        for spark in points.iter().take(points.len() - 1).skip(1) {
            if !sketch.rng.chance(0.4) {
                continue;
            }
            let (px, py) = (spark.x as i32, spark.y as i32);
            let bx = px + sketch.rng.range(-30, 30);
            let by = py + sketch.rng.range(20, 50);
            let color = palette.accent_highlight.scaled(sketch.rng.uniform(0.4, 0.7));
            sketch.segment(pt(px, py), pt(bx, by), color, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{crack, crack_geyao, geyao, lightning};
    use crate::palette::Palette;
    use crate::texture::{Primitive, Sketch};
    use crate::zone::ZoneSet;

    fn sketch_with<'a>(palette: &'a Palette, zones: &'a ZoneSet, seed: u64) -> Sketch<'a> {
        Sketch::new(1400, 900, seed, palette, zones)
    }

    #[test]
    fn cracks_stay_within_the_margin() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = sketch_with(&palette, &zones, 100);
        crack(&mut sketch);
        let mains = sketch
            .primitives()
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Polyline { points, width, .. } if *width == 2.0 => Some(points),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(mains.len(), 20);
        for points in mains {
            for p in points {
                assert!((-50.0..=1450.0).contains(&p.x) && (-50.0..=950.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn bolts_span_top_to_bottom() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = sketch_with(&palette, &zones, 500);
        lightning(&mut sketch);
        let bolts = sketch
            .primitives()
            .iter()
            .filter(|primitive| {
                matches!(primitive, Primitive::Polyline { width, .. } if *width == 2.0)
            })
            .collect::<Vec<_>>();
        assert_eq!(bolts.len(), 25);
        for bolt in bolts {
            let points = bolt.points();
            assert_eq!(points[0].y, 0.0);
            assert_eq!(points[points.len() - 1].y, 900.0);
        }
    }

    #[test]
    fn crackle_layers_are_counted() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = sketch_with(&palette, &zones, 200);
        geyao(&mut sketch);
        assert_eq!(sketch.primitives().len(), 8 + 10 + 50);

        let mut sketch = sketch_with(&palette, &zones, 700);
        crack_geyao(&mut sketch);
        assert_eq!(sketch.primitives().len(), 8 + 6 + 30);
    }
}
