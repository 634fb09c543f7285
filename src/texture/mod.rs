//! Procedural background textures.
//!
//! A generator is a plain function over a [`Sketch`]: it draws random numbers
//! from the sketch's seeded RNG, consults the sketch's zone set, and records
//! [`Primitive`]s. Nothing touches pixels until [`paint`] replays the list
//! onto a [`Canvas`], applying the zone mask for suppressed zone sets.

pub mod branch;
pub mod fracture;
pub mod gem;
pub mod gilt;
pub mod network;
pub mod radial;
pub mod walk;
pub mod wave;

use serde::Serialize;
use tiny_skia::Point;

use crate::canvas::Canvas;
use crate::palette::{Palette, Rgb};
use crate::rng::SeededRng;
use crate::zone::ZoneSet;

/// One decorative mark.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline {
        points: Vec<Point>,
        color: Rgb,
        width: f32,
    },
    /// Filled disc over the inclusive box `center ± radius`.
    Dot {
        center: Point,
        radius: f32,
        color: Rgb,
    },
    /// 1px outline of the same box.
    Ring {
        center: Point,
        radius: f32,
        color: Rgb,
    },
}

impl Primitive {
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Polyline { points, .. } => points,
            Self::Dot { center, .. } | Self::Ring { center, .. } => std::slice::from_ref(center),
        }
    }
}

/// Point on the integer pixel grid.
#[inline]
pub fn pt(x: i32, y: i32) -> Point {
    Point::from_xy(x as f32, y as f32)
}

/// Drawing session for one texture: canvas bounds, RNG, zones, output list.
pub struct Sketch<'a> {
    pub width: i32,
    pub height: i32,
    pub rng: SeededRng,
    pub palette: &'a Palette,
    zones: &'a ZoneSet,
    primitives: Vec<Primitive>,
}

impl<'a> Sketch<'a> {
    pub fn new(
        width: u32,
        height: u32,
        seed: u64,
        palette: &'a Palette,
        zones: &'a ZoneSet,
    ) -> Self {
        Self {
            width: width.min(i32::MAX as u32) as i32,
            height: height.min(i32::MAX as u32) as i32,
            rng: SeededRng::from_seed(seed),
            palette,
            zones,
            primitives: Vec::new(),
        }
    }

    pub fn zones(&self) -> &ZoneSet {
        self.zones
    }

    /// Raw membership test; never consumes randomness.
    pub fn in_zone(&self, x: i32, y: i32) -> bool {
        self.zones.contains(x as f32, y as f32)
    }

    /// Policy-aware test: suppressed zones always reject, thinned zones
    /// reject with their skip probability.
    pub fn admits(&mut self, x: i32, y: i32) -> bool {
        self.zones.admits(x as f32, y as f32, &mut self.rng)
    }

    pub fn line(&mut self, points: Vec<Point>, color: Rgb, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.primitives.push(Primitive::Polyline {
            points,
            color,
            width,
        });
    }

    pub fn segment(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
        self.line(vec![from, to], color, width);
    }

    pub fn dot(&mut self, x: i32, y: i32, size: i32, color: Rgb) {
        self.primitives.push(Primitive::Dot {
            center: pt(x, y),
            radius: size.max(0) as f32,
            color,
        });
    }

    pub fn ring(&mut self, x: i32, y: i32, radius: i32, color: Rgb) {
        self.primitives.push(Primitive::Ring {
            center: pt(x, y),
            radius: radius.max(0) as f32,
            color,
        });
    }

    /// Draw each consecutive pair on its own, thickening a segment by one
    /// pixel with probability 0.3.
    pub fn jittered_segments(&mut self, points: &[Point], color: Rgb, base_width: f32) {
        self.thickened_segments(points, color, base_width, 0.7);
    }

    /// Like [`jittered_segments`](Self::jittered_segments), keeping `base_width`
    /// with probability `keep`.
    pub fn thickened_segments(&mut self, points: &[Point], color: Rgb, base_width: f32, keep: f64) {
        for pair in points.windows(2) {
            let width = if self.rng.chance(keep) {
                base_width
            } else {
                base_width + 1.0
            };
            self.segment(pair[0], pair[1], color, width);
        }
    }

    /// Draw each consecutive pair with a width picked from `widths`.
    pub fn picked_segments<const N: usize>(
        &mut self,
        points: &[Point],
        color: Rgb,
        widths: [f32; N],
    ) {
        for pair in points.windows(2) {
            let width = self.rng.pick(widths);
            self.segment(pair[0], pair[1], color, width);
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn finish(self) -> Vec<Primitive> {
        self.primitives
    }
}

/// How a brightness amount turns an accent into a stroke colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Scale the accent toward black.
    Dim,
    /// Mix the accent into `bg_primary`.
    Wash,
}

impl Shade {
    pub fn apply(self, palette: &Palette, accent: Rgb, amount: f64) -> Rgb {
        match self {
            Self::Dim => accent.scaled(amount),
            Self::Wash => palette.bg_primary.blend(accent, amount),
        }
    }
}

/// Blend strength for the low-contrast variant textures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Intensity(pub f64);

/// Two parameterisations of the zone-aware styles: `Sparse` keeps clear of
/// every editor text zone, `Dense` only of the code pane and packs more marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Sparse,
    Dense,
}

/// Per-density parameter sets for the zone-aware styles.
pub trait Tuning: Sized {
    const SPARSE: Self;
    const DENSE: Self;

    fn for_density(density: Density) -> Self {
        match density {
            Density::Sparse => Self::SPARSE,
            Density::Dense => Self::DENSE,
        }
    }
}

/// Every texture the catalogue can draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextureStyle {
    /// Bare background; the chrome carries all decoration.
    Plain,
    GemStripes,
    Gilded { stage: gilt::GildStage },
    Elegant,
    OrganicStripes,
    SnakeLines { intensity: Intensity },
    BranchLines { intensity: Intensity },
    BrightThreads { intensity: Intensity },
    OrganicFlow { intensity: Intensity },
    Mixed,
    Crack,
    Geyao,
    Neural,
    Vine,
    Lightning,
    CrackOrganic,
    GeyaoVine,
    NeuralLightning,
    OrganicGold,
    CrackGeyao,
    Explosion,
    Galaxy { density: Density },
    Ripple { density: Density },
    Feather { density: Density },
    Spiderweb { density: Density },
    Circuit { density: Density },
    Crystal { density: Density },
    Magma { density: Density },
    StarTrails { density: Density },
    Dandelion { density: Density },
}

impl TextureStyle {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::GemStripes => "gem-stripes",
            Self::Gilded { stage } => stage.keyword(),
            Self::Elegant => "elegant",
            Self::OrganicStripes => "organic-stripes",
            Self::SnakeLines { .. } => "snake",
            Self::BranchLines { .. } => "branch",
            Self::BrightThreads { .. } => "bright",
            Self::OrganicFlow { .. } => "organic",
            Self::Mixed => "mixed",
            Self::Crack => "crack",
            Self::Geyao => "geyao",
            Self::Neural => "neural",
            Self::Vine => "vine",
            Self::Lightning => "lightning",
            Self::CrackOrganic => "crack-organic",
            Self::GeyaoVine => "geyao-vine",
            Self::NeuralLightning => "neural-lightning",
            Self::OrganicGold => "organic-gold",
            Self::CrackGeyao => "crack-geyao",
            Self::Explosion => "explosion",
            Self::Galaxy { .. } => "galaxy",
            Self::Ripple { .. } => "ripple",
            Self::Feather { .. } => "feather",
            Self::Spiderweb { .. } => "spiderweb",
            Self::Circuit { .. } => "circuit",
            Self::Crystal { .. } => "crystal",
            Self::Magma { .. } => "magma",
            Self::StarTrails { .. } => "startrails",
            Self::Dandelion { .. } => "dandelion",
        }
    }

    /// Run the generator for this style into `sketch`.
    pub fn draw(self, sketch: &mut Sketch<'_>) {
        match self {
            Self::Plain => {}
            Self::GemStripes => wave::gem_stripes(sketch),
            Self::Gilded { stage } => gilt::gilded(sketch, stage),
            Self::Elegant => {
                walk::field_curves(sketch, &walk::CurveField::ELEGANT);
                branch::elegant_branches(sketch);
                walk::threads(sketch, &walk::Threads::ELEGANT);
            }
            Self::OrganicStripes => wave::organic_stripes(sketch),
            Self::SnakeLines { intensity } => walk::snake_lines(sketch, intensity.0),
            Self::BranchLines { intensity } => branch::branch_lines(sketch, intensity.0),
            Self::BrightThreads { intensity } => walk::bright_threads(sketch, intensity.0),
            Self::OrganicFlow { intensity } => walk::organic_flow(sketch, intensity.0),
            Self::Mixed => {
                walk::snake_lines(sketch, 0.05);
                branch::branch_lines(sketch, 0.04);
                walk::bright_threads(sketch, 0.08);
                walk::organic_flow(sketch, 0.05);
            }
            Self::Crack => fracture::crack(sketch),
            Self::Geyao => fracture::geyao(sketch),
            Self::Neural => network::neural(sketch),
            Self::Vine => network::vine(sketch),
            Self::Lightning => fracture::lightning(sketch),
            Self::CrackOrganic => fracture::crack_organic(sketch),
            Self::GeyaoVine => network::geyao_vine(sketch),
            Self::NeuralLightning => network::neural_lightning(sketch),
            Self::OrganicGold => walk::organic_gold(sketch),
            Self::CrackGeyao => fracture::crack_geyao(sketch),
            Self::Explosion => radial::explosion(sketch),
            Self::Galaxy { density } => {
                radial::galaxy(sketch, radial::GalaxyParams::for_density(density))
            }
            Self::Ripple { density } => {
                radial::ripple(sketch, radial::RippleParams::for_density(density))
            }
            Self::Feather { density } => {
                network::feather(sketch, network::FeatherParams::for_density(density))
            }
            Self::Spiderweb { density } => {
                radial::spiderweb(sketch, radial::SpiderwebParams::for_density(density))
            }
            Self::Circuit { density } => {
                network::circuit(sketch, network::CircuitParams::for_density(density))
            }
            Self::Crystal { density } => {
                network::crystal(sketch, network::CrystalParams::for_density(density))
            }
            Self::Magma { density } => {
                walk::magma(sketch, walk::MagmaParams::for_density(density))
            }
            Self::StarTrails { density } => {
                radial::star_trails(sketch, radial::StarTrailParams::for_density(density))
            }
            Self::Dandelion { density } => {
                radial::dandelion(sketch, radial::DandelionParams::for_density(density))
            }
        }
    }

    /// Generate this style's primitives without painting them.
    pub fn generate(
        self,
        width: u32,
        height: u32,
        seed: u64,
        palette: &Palette,
        zones: &ZoneSet,
    ) -> Vec<Primitive> {
        let mut sketch = Sketch::new(width, height, seed, palette, zones);
        self.draw(&mut sketch);
        sketch.finish()
    }
}

/// Replay primitives onto the canvas, masking suppressed zones.
pub fn paint(canvas: &mut Canvas, primitives: &[Primitive], zones: &ZoneSet) {
    let mask = zones.build_mask(canvas.width(), canvas.height());
    for primitive in primitives {
        match primitive {
            Primitive::Polyline {
                points,
                color,
                width,
            } => canvas.stroke_polyline(points, *color, *width, mask.as_ref()),
            Primitive::Dot {
                center,
                radius,
                color,
            } => canvas.fill_ellipse(center.x, center.y, *radius, *radius, *color, mask.as_ref()),
            Primitive::Ring {
                center,
                radius,
                color,
            } => canvas.stroke_circle(center.x, center.y, *radius, *color, mask.as_ref()),
        }
    }
    log::debug!(
        "painted {} primitives ({} zones, masked: {})",
        primitives.len(),
        zones.zones().len(),
        mask.is_some()
    );
}

#[cfg(test)]
mod tests {
    use super::gilt::GildStage;
    use super::{pt, Density, Intensity, Primitive, Sketch, TextureStyle};
    use crate::palette::Palette;
    use crate::zone::ZoneSet;

    #[test]
    fn sketch_drops_degenerate_lines() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(100, 100, 1, &palette, &zones);
        sketch.line(vec![pt(1, 1)], palette.accent_bright, 1.0);
        sketch.dot(5, 5, 2, palette.accent_bright);
        assert_eq!(sketch.primitives().len(), 1);
        assert!(matches!(sketch.primitives()[0], Primitive::Dot { .. }));
    }

    #[test]
    fn jittered_segments_emit_one_mark_per_pair() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(100, 100, 5, &palette, &zones);
        let points = [pt(0, 0), pt(10, 0), pt(20, 5), pt(30, 9)];
        sketch.jittered_segments(&points, palette.accent_primary, 1.0);
        let widths = sketch
            .finish()
            .into_iter()
            .map(|primitive| match primitive {
                Primitive::Polyline { width, points, .. } => {
                    assert_eq!(points.len(), 2);
                    width
                }
                other => panic!("unexpected {other:?}"),
            })
            .collect::<Vec<_>>();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| *w == 1.0 || *w == 2.0));
    }

    #[test]
    fn every_style_generates_marks() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let styles = [
            TextureStyle::GemStripes,
            TextureStyle::Gilded {
                stage: GildStage::Visible,
            },
            TextureStyle::Gilded {
                stage: GildStage::Vivid,
            },
            TextureStyle::Elegant,
            TextureStyle::OrganicStripes,
            TextureStyle::SnakeLines {
                intensity: Intensity(0.08),
            },
            TextureStyle::Mixed,
            TextureStyle::Crack,
            TextureStyle::Geyao,
            TextureStyle::Neural,
            TextureStyle::Vine,
            TextureStyle::Lightning,
            TextureStyle::CrackOrganic,
            TextureStyle::GeyaoVine,
            TextureStyle::NeuralLightning,
            TextureStyle::OrganicGold,
            TextureStyle::CrackGeyao,
            TextureStyle::Explosion,
            TextureStyle::Galaxy {
                density: Density::Dense,
            },
            TextureStyle::Ripple {
                density: Density::Sparse,
            },
            TextureStyle::Feather {
                density: Density::Dense,
            },
            TextureStyle::Spiderweb {
                density: Density::Sparse,
            },
            TextureStyle::Circuit {
                density: Density::Dense,
            },
            TextureStyle::Crystal {
                density: Density::Sparse,
            },
            TextureStyle::Magma {
                density: Density::Dense,
            },
            TextureStyle::StarTrails {
                density: Density::Sparse,
            },
            TextureStyle::Dandelion {
                density: Density::Dense,
            },
        ];
        for style in styles {
            let marks = style.generate(1400, 900, 42, &palette, &zones);
            assert!(!marks.is_empty(), "{} produced nothing", style.keyword());
        }
    }

    #[test]
    fn plain_style_draws_nothing() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        assert!(TextureStyle::Plain
            .generate(1400, 900, 7, &palette, &zones)
            .is_empty());
    }

    #[test]
    fn thickened_segments_never_widen_when_always_kept() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(100, 100, 9, &palette, &zones);
        let points = [pt(0, 0), pt(10, 0), pt(20, 5)];
        sketch.thickened_segments(&points, palette.accent_bright, 2.0, 1.0);
        sketch.ring(50, 50, 4, palette.accent_light);
        let primitives = sketch.finish();
        assert_eq!(primitives.len(), 3);
        assert!(primitives[..2]
            .iter()
            .all(|p| matches!(p, Primitive::Polyline { width, .. } if *width == 2.0)));
        assert!(matches!(primitives[2], Primitive::Ring { radius, .. } if radius == 4.0));
    }

    #[test]
    fn generation_is_a_pure_function_of_the_seed() {
        let palette = Palette::dark_gold();
        let zones = ZoneSet::editor_text_zones();
        let style = TextureStyle::Galaxy {
            density: Density::Sparse,
        };
        let first = style.generate(1400, 900, 1200, &palette, &zones);
        let second = style.generate(1400, 900, 1200, &palette, &zones);
        assert_eq!(first, second);
    }
}
