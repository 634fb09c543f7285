//! Centre-based textures: bursts, spiral arms, ripples, webs, star trails and seed heads.
//!
//! These styles are drawn around reserved text zones. Points are tested with
//! [`Sketch::admits`], so a suppressed zone drops them and a thinned zone
//! drops them at random.

use std::f64::consts::TAU;

use super::walk::advance;
use super::{pt, Sketch, Tuning};

/// Rays fanning out from five centres. A ray whose tip would land in a text
/// zone is cut to 30% of its length.
pub fn explosion(sketch: &mut Sketch<'_>) {
    const CENTRES: [(i32, i32); 5] = [(300, 300), (1000, 200), (700, 600), (200, 700), (1200, 700)];
    const RAYS: i32 = 40;
    let palette = sketch.palette;

    for (cx, cy) in CENTRES {
        for i in 0..RAYS {
            let angle = TAU / f64::from(RAYS) * f64::from(i) + sketch.rng.uniform(-0.1, 0.1);
            let mut length = sketch.rng.range(100, 400);
            let mut tip = advance(cx, cy, f64::from(length), angle);
            if sketch.in_zone(tip.0, tip.1) {
                length = (f64::from(length) * 0.3) as i32;
                tip = advance(cx, cy, f64::from(length), angle);
            }

            let mut points = vec![pt(cx, cy)];
            let segments = sketch.rng.range(3, 6);
            for j in 0..segments {
                let t = f64::from(j + 1) / f64::from(segments);
                let px = cx + (t * f64::from(tip.0 - cx)) as i32 + sketch.rng.range(-10, 10);
                let py = cy + (t * f64::from(tip.1 - cy)) as i32 + sketch.rng.range(-10, 10);
                points.push(pt(px, py));
            }

            let color = palette.accent_bright.scaled(sketch.rng.uniform(0.4, 0.8));
            let width = sketch.rng.pick([1.0, 1.0, 2.0]);
            sketch.line(points, color, width);

            if sketch.rng.chance(0.3) {
                sketch.dot(tip.0, tip.1, 3, palette.accent_highlight);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    pub centres: &'static [(i32, i32)],
    pub arms: u32,
    pub steps: i32,
    pub twist: f64,
    pub spread: i32,
    pub star_chance: f64,
}

impl Tuning for GalaxyParams {
    const SPARSE: Self = Self {
        centres: &[(400, 400), (1000, 500)],
        arms: 3,
        steps: 100,
        twist: 0.1,
        spread: 3,
        star_chance: 0.2,
    };

    const DENSE: Self = Self {
        centres: &[(200, 200), (1100, 300), (600, 700)],
        arms: 4,
        steps: 80,
        twist: 0.08,
        spread: 4,
        star_chance: 0.15,
    };
}

/// Archimedean spiral arms sprinkled with stars.
pub fn galaxy(sketch: &mut Sketch<'_>, params: GalaxyParams) {
    let palette = sketch.palette;

    for &(cx, cy) in params.centres {
        for arm in 0..params.arms {
            let offset = f64::from(arm) * (TAU / f64::from(params.arms));
            let mut points = Vec::new();

            for i in 0..params.steps {
                let angle = offset + f64::from(i) * params.twist;
                let radius = f64::from(20 + i * params.spread);
                let (x, y) = advance(cx, cy, radius, angle);
                if !sketch.admits(x, y) {
                    continue;
                }
                points.push(pt(x, y));

                if sketch.rng.chance(params.star_chance) {
                    let size = sketch.rng.range(1, 3);
                    let color = palette.accent_bright.scaled(sketch.rng.uniform(0.5, 0.9));
                    sketch.dot(x, y, size, color);
                }
            }

            if points.len() > 1 {
                let color = palette.accent_primary.scaled(sketch.rng.uniform(0.3, 0.6));
                sketch.line(points, color, 1.0);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleParams {
    pub centres: &'static [(i32, i32)],
    pub radii: (i32, i32, usize),
    pub samples: u32,
    pub angle_step: f64,
    pub distortion: f64,
    pub min_alpha: f64,
    pub fade_radius: f64,
}

impl Tuning for RippleParams {
    const SPARSE: Self = Self {
        centres: &[(200, 200), (600, 400), (1000, 300), (400, 700), (1100, 600)],
        radii: (30, 300, 25),
        samples: 63,
        angle_step: 0.1,
        distortion: 10.0,
        min_alpha: 0.2,
        fade_radius: 300.0,
    };

    const DENSE: Self = Self {
        centres: &[(150, 150), (500, 400), (1200, 200), (300, 700), (1100, 600)],
        radii: (30, 250, 20),
        samples: 126,
        angle_step: 0.05,
        distortion: 8.0,
        min_alpha: 0.3,
        fade_radius: 250.0,
    };
}

/// Concentric wobbling rings that fade with radius. Fully deterministic.
pub fn ripple(sketch: &mut Sketch<'_>, params: RippleParams) {
    let palette = sketch.palette;
    let (start, end, step) = params.radii;

    for &(cx, cy) in params.centres {
        for radius in (start..end).step_by(step) {
            let r = f64::from(radius);
            let mut points = Vec::new();
            for i in 0..params.samples {
                let angle = f64::from(i) * params.angle_step;
                let (mut x, mut y) = advance(cx, cy, r, angle);
                x += (params.distortion * (angle * 5.0).sin()) as i32;
                y += (params.distortion * (angle * 5.0).cos()) as i32;
                if sketch.admits(x, y) {
                    points.push(pt(x, y));
                }
            }

            if points.len() > 5 {
                let alpha = (1.0 - r / params.fade_radius).max(params.min_alpha);
                let color = palette.accent_highlight.scaled(0.5 * alpha);
                sketch.line(points, color, 1.0);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiderwebParams {
    pub centres: &'static [(i32, i32)],
    pub spokes: u32,
    pub spoke_length: i32,
    pub spoke_step: usize,
    pub spoke_brightness: (f64, f64),
    pub rings: (i32, i32, usize),
    pub ring_samples: u32,
    pub ring_step: f64,
    pub sag: f64,
}

impl Tuning for SpiderwebParams {
    const SPARSE: Self = Self {
        centres: &[(300, 300), (1000, 400), (600, 700)],
        spokes: 12,
        spoke_length: 200,
        spoke_step: 20,
        spoke_brightness: (0.3, 0.6),
        rings: (40, 220, 40),
        ring_samples: 126,
        ring_step: 0.05,
        sag: 20.0,
    };

    const DENSE: Self = Self {
        centres: &[(250, 250), (1000, 400), (600, 700)],
        spokes: 10,
        spoke_length: 180,
        spoke_step: 15,
        spoke_brightness: (0.35, 0.6),
        rings: (30, 200, 35),
        ring_samples: 210,
        ring_step: 0.03,
        sag: 12.0,
    };
}

/// Radial spokes and sagging concentric threads.
pub fn spiderweb(sketch: &mut Sketch<'_>, params: SpiderwebParams) {
    let palette = sketch.palette;

    for &(cx, cy) in params.centres {
        for i in 0..params.spokes {
            let angle = TAU / f64::from(params.spokes) * f64::from(i);
            let mut points = vec![pt(cx, cy)];
            for r in (0..params.spoke_length).step_by(params.spoke_step) {
                let (x, y) = advance(cx, cy, f64::from(r), angle);
                if sketch.admits(x, y) {
                    points.push(pt(x, y));
                }
            }
            if points.len() > 1 {
                let (lo, hi) = params.spoke_brightness;
                let color = palette.accent_primary.scaled(sketch.rng.uniform(lo, hi));
                sketch.line(points, color, 1.0);
            }
        }

        let (start, end, step) = params.rings;
        for radius in (start..end).step_by(step) {
            let mut points = Vec::new();
            for i in 0..params.ring_samples {
                let angle = f64::from(i) * params.ring_step;
                let (x, mut y) = advance(cx, cy, f64::from(radius), angle);
                y += (params.sag * (angle * 3.0).sin()) as i32;
                if sketch.admits(x, y) {
                    points.push(pt(x, y));
                }
            }
            if points.len() > 5 {
                let color = palette.accent_highlight.scaled(sketch.rng.uniform(0.25, 0.5));
                sketch.line(points, color, 1.0);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTrailParams {
    pub trails: usize,
    pub start_radius: (i32, i32),
    pub shrink: (i32, i32),
    pub sweep: f64,
    pub brightness: (f64, f64),
    pub star_chance: f64,
}

impl Tuning for StarTrailParams {
    const SPARSE: Self = Self {
        trails: 100,
        start_radius: (100, 600),
        shrink: (20, 50),
        sweep: 0.1,
        brightness: (0.4, 0.8),
        star_chance: 0.3,
    };

    const DENSE: Self = Self {
        trails: 150,
        start_radius: (150, 650),
        shrink: (30, 80),
        sweep: 0.12,
        brightness: (0.35, 0.75),
        star_chance: 0.25,
    };
}

/// Short arcs swept around the canvas centre, as in a long-exposure sky.
pub fn star_trails(sketch: &mut Sketch<'_>, params: StarTrailParams) {
    let palette = sketch.palette;
    let (cx, cy) = (sketch.width.div_euclid(2), sketch.height.div_euclid(2));

    for _ in 0..params.trails {
        let angle = sketch.rng.uniform(0.0, TAU);
        let start_r = sketch.rng.range(params.start_radius.0, params.start_radius.1);
        let end_r = start_r - sketch.rng.range(params.shrink.0, params.shrink.1);
        let (sx, sy) = advance(cx, cy, f64::from(start_r), angle);
        let (ex, ey) = advance(cx, cy, f64::from(end_r), angle + params.sweep);

        if !(sketch.admits(sx, sy) && sketch.admits(ex, ey)) {
            continue;
        }
        let (lo, hi) = params.brightness;
        let color = palette.accent_highlight.scaled(sketch.rng.uniform(lo, hi));
        sketch.segment(pt(sx, sy), pt(ex, ey), color, 1.0);

        if sketch.rng.chance(params.star_chance) {
            sketch.dot(sx, sy, 2, palette.accent_bright);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DandelionParams {
    pub seeds: usize,
    pub hairs: (i32, i32),
    pub hair_length: (i32, i32),
    pub hair_brightness: (f64, f64),
}

impl Tuning for DandelionParams {
    const SPARSE: Self = Self {
        seeds: 50,
        hairs: (5, 10),
        hair_length: (20, 50),
        hair_brightness: (0.2, 0.5),
    };

    const DENSE: Self = Self {
        seeds: 80,
        hairs: (6, 12),
        hair_length: (25, 55),
        hair_brightness: (0.25, 0.5),
    };
}

/// Seed heads with a tuft of radiating hairs.
pub fn dandelion(sketch: &mut Sketch<'_>, params: DandelionParams) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..params.seeds {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        if !sketch.admits(x, y) {
            continue;
        }

        let size = sketch.rng.range(2, 4);
        let color = palette.accent_bright.scaled(sketch.rng.uniform(0.6, 0.9));
        sketch.dot(x, y, size, color);

        for _ in 0..sketch.rng.range(params.hairs.0, params.hairs.1) {
            let angle = sketch.rng.uniform(0.0, TAU);
            let length = sketch.rng.range(params.hair_length.0, params.hair_length.1);
            let (ex, ey) = advance(x, y, f64::from(length), angle);
            if sketch.admits(ex, ey) {
                let (lo, hi) = params.hair_brightness;
                let color = palette.accent_secondary.scaled(sketch.rng.uniform(lo, hi));
                sketch.segment(pt(x, y), pt(ex, ey), color, 1.0);
            }
        }
    }
}

/// Angle of `(x, y)` around `(cx, cy)` in `[0, 2 * PI)`.
#[cfg(test)]
fn bearing(cx: i32, cy: i32, x: f32, y: f32) -> f64 {
    let angle = (f64::from(y) - f64::from(cy)).atan2(f64::from(x) - f64::from(cx));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::{
        bearing, dandelion, explosion, galaxy, ripple, DandelionParams, GalaxyParams, RippleParams,
    };
    use tiny_skia::Point;

    use crate::palette::Palette;
    use crate::texture::{Primitive, Sketch, Tuning};
    use crate::zone::{ZonePolicy, ZoneSet};

    fn rays(zones: &ZoneSet) -> Vec<Vec<Point>> {
        let palette = Palette::dark_gold();
        let mut sketch = Sketch::new(1400, 900, 1100, &palette, zones);
        explosion(&mut sketch);
        sketch
            .finish()
            .into_iter()
            .filter_map(|primitive| match primitive {
                Primitive::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn explosion_cuts_rays_that_end_in_text_zones() {
        let open = rays(&ZoneSet::none());
        let zoned = rays(&ZoneSet::editor_text_zones());
        assert_eq!(open.len(), 200);
        assert_eq!(zoned.len(), open.len());

        let distance = |a: Point, b: Point| f64::from((a.x - b.x).hypot(a.y - b.y));
        let mut cut = 0;
        for (full, ray) in open.iter().zip(&zoned) {
            let centre = full[0];
            assert_eq!(ray[0], centre);
            assert_eq!(ray.len(), full.len());
            if ray == full {
                continue;
            }
            cut += 1;
            // Both endpoints carry the same jitter, so their gap is the
            // 70% of the ray that was removed.
            let (far, near) = (full[full.len() - 1], ray[ray.len() - 1]);
            let removed = distance(far, near);
            assert!((67.0..=283.0).contains(&removed), "removed {removed}");
            assert!(distance(near, centre) <= 136.0);
            assert!(distance(far, centre) > distance(near, centre));
        }
        assert!(cut > 0);
    }

    #[test]
    fn suppressed_zones_never_receive_points() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::editor_text_zones();
        let mut sketch = Sketch::new(1400, 900, 1200, &palette, &zones);
        galaxy(&mut sketch, GalaxyParams::SPARSE);
        ripple(&mut sketch, RippleParams::SPARSE);
        dandelion(&mut sketch, DandelionParams::SPARSE);
        for primitive in sketch.primitives() {
            if let Primitive::Polyline { points, .. } = primitive {
                for p in points {
                    assert!(!zones.contains(p.x, p.y), "({}, {}) in a zone", p.x, p.y);
                }
            }
        }
    }

    #[test]
    fn thinned_galaxy_keeps_some_core_points() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::code_pane_core().with_policy(ZonePolicy::Thin { skip: 0.7 });
        let mut sketch = Sketch::new(1400, 900, 1200, &palette, &zones);
        galaxy(&mut sketch, GalaxyParams::DENSE);
        let inside = sketch
            .primitives()
            .iter()
            .flat_map(|primitive| primitive.points().iter())
            .filter(|p| zones.contains(p.x, p.y))
            .count();
        assert!(inside > 0);
    }

    #[test]
    fn ripple_ignores_the_seed() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut first = Sketch::new(1400, 900, 1, &palette, &zones);
        let mut second = Sketch::new(1400, 900, 2, &palette, &zones);
        ripple(&mut first, RippleParams::DENSE);
        ripple(&mut second, RippleParams::DENSE);
        assert_eq!(first.finish(), second.finish());
    }

    #[test]
    fn explosion_rays_fan_out_evenly() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 1100, &palette, &zones);
        explosion(&mut sketch);
        let rays = sketch
            .primitives()
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Polyline { .. }))
            .collect::<Vec<_>>();
        assert_eq!(rays.len(), 5 * 40);

        // The first ray of the first centre points roughly along +x.
        let first = rays[0].points();
        assert_eq!((first[0].x, first[0].y), (300.0, 300.0));
        let tip = first[first.len() - 1];
        let heading = bearing(300, 300, tip.x, tip.y);
        assert!(heading < 0.5 || heading > 5.8, "heading {heading}");
    }
}
