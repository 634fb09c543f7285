//! Gem-cut ornaments: diagonal facet hatching, the flowing light band under
//! the command bar, and concentric glow rings.
//!
//! These are drawn over chrome panels rather than the background, so they
//! never consult the sketch's zones or RNG.

use tiny_skia::Point;

use super::{pt, Sketch};
use crate::palette::Rgb;

const FACET_SPACING: usize = 20;

/// 45° hairlines across the box `(x, y, w, h)`, one every 20px, each running
/// down and to the left from the top edge. Lines are not clipped to the box.
pub fn gem_pattern(sketch: &mut Sketch<'_>, x: i32, y: i32, w: i32, h: i32) {
    let color = sketch.palette.accent_primary;
    for i in (0..(w + h).max(0)).step_by(FACET_SPACING) {
        sketch.segment(pt(x + i, y), pt(x + i - h, y + h), color, 1.0);
    }
}

/// Five rippling 2px lines between `left` and `right` just below `y_base`,
/// with highlight beads riding above them every 80px.
pub fn flowing_stream(sketch: &mut Sketch<'_>, left: i32, right: i32, y_base: i32) {
    let palette = sketch.palette;
    for i in 0..5 {
        let lane = f64::from(i);
        let points = (left..right)
            .step_by(3)
            .map(|x| {
                let wave = 3.0 * (f64::from(x - left) / 30.0 + lane * 0.5).sin();
                let y = f64::from(y_base) + wave + lane * 0.5;
                Point::from_xy(x as f32, y as f32)
            })
            .collect();
        sketch.line(points, palette.accent_primary, 2.0);
    }

    for x in (left + 40..right - 20).step_by(80) {
        let bead_x = x + (30.0 * (f64::from(x) / 100.0).sin()) as i32;
        for radius in (1..=3).rev() {
            sketch.dot(bead_x, y_base - 2, radius, palette.accent_highlight);
        }
    }
}

/// Concentric 1px rings from `radius` inward in steps of 2, each lighter than
/// `base` by `255 * intensity * (radius - r) / radius`. Rings that would not
/// lighten are skipped.
pub fn gem_glow(
    sketch: &mut Sketch<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    base: Rgb,
    intensity: f64,
) {
    if radius <= 0 {
        return;
    }
    for r in (1..=radius).rev().step_by(2) {
        let lift = (255.0 * intensity * f64::from(radius - r) / f64::from(radius)) as i32;
        if lift > 0 {
            sketch.ring(cx, cy, r, base.lightened(lift.min(255) as u8));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{flowing_stream, gem_glow, gem_pattern};
    use crate::palette::{Palette, Rgb};
    use crate::texture::{pt, Primitive, Sketch};
    use crate::zone::ZoneSet;

    #[test]
    fn facets_cover_width_plus_height_at_45_degrees() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 0, &palette, &zones);
        gem_pattern(&mut sketch, 0, 38, 220, 838);
        let primitives = sketch.finish();
        // range(0, 1058, 20)
        assert_eq!(primitives.len(), 53);
        assert_eq!(primitives[1].points(), &[pt(20, 38), pt(20 - 838, 876)]);
        for primitive in &primitives {
            let [from, to] = primitive.points() else {
                panic!("facets are single segments");
            };
            assert_eq!(from.x - to.x, to.y - from.y);
        }
    }

    #[test]
    fn stream_spans_the_command_bar() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(1400, 900, 0, &palette, &zones);
        flowing_stream(&mut sketch, 220, 1120, 836);
        let primitives = sketch.finish();
        let lines = &primitives[..5];
        for (lane, line) in lines.iter().enumerate() {
            let points = line.points();
            assert_eq!(points.len(), 300);
            assert_eq!(points[0].x, 220.0);
            assert_eq!(points[299].x, 1117.0);
            let expected = 836.0 + 3.0 * (lane as f64 * 0.5).sin() + lane as f64 * 0.5;
            assert!((f64::from(points[0].y) - expected).abs() < 1e-3);
        }
        // range(260, 1100, 80) gives 11 beads, three discs each.
        let beads = &primitives[5..];
        assert_eq!(beads.len(), 33);
        assert!(beads.iter().all(|p| matches!(
            p,
            Primitive::Dot { color, .. } if *color == palette.accent_highlight
        )));
        assert_eq!(beads[0].points()[0].y, 834.0);
    }

    #[test]
    fn glow_rings_lighten_toward_the_centre() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(200, 200, 0, &palette, &zones);
        let base = Rgb::new(100, 100, 100);
        gem_glow(&mut sketch, 50, 50, 10, base, 0.2);
        let rings = sketch
            .finish()
            .into_iter()
            .map(|primitive| match primitive {
                Primitive::Ring { radius, color, .. } => (radius, color),
                other => panic!("unexpected {other:?}"),
            })
            .collect::<Vec<_>>();
        // r = 10 lifts by 0 and is skipped; r = 8 lifts by int(10.2) = 10.
        assert_eq!(rings.len(), 4);
        assert_eq!(rings[0], (8.0, Rgb::new(110, 110, 110)));
        assert_eq!(rings[3], (2.0, Rgb::new(140, 140, 140)));
    }

    #[test]
    fn glow_saturates_at_white() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(200, 200, 0, &palette, &zones);
        gem_glow(&mut sketch, 20, 20, 9, palette.traffic_red, 1.0);
        let last = sketch.finish().pop().unwrap();
        // r = 1 lifts by int(255 * 8 / 9) = 226.
        let white = Rgb::new(255, 255, 255);
        assert!(matches!(last, Primitive::Ring { color, .. } if color == white));
    }
}
