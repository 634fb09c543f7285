use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, RgbImage};
use tiny_skia::{
    LineCap, LineJoin, Mask, Paint, PathBuilder, Pixmap, Point, PremultipliedColorU8, Rect,
    Stroke, Transform,
};

use crate::palette::Rgb;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0001_0000_01b3;

/// Opaque RGB drawing surface.
///
/// Coordinates follow the pixel-grid convention of the mockups: integer
/// `(x, y)` names a pixel, and shapes are offset to pixel centres so a
/// 1px line at `y = 38` lights row 38 rather than smearing across 37/38.
pub struct Canvas {
    pixmap: Pixmap,
    background: Rgb,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("invalid canvas size {width}x{height}"))?;
        let [r, g, b, a] = background.rgba();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        Ok(Self { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let pixel = self.pixmap.pixel(x, y)?;
        Some(Rgb::new(pixel.red(), pixel.green(), pixel.blue()))
    }

    /// Stroke connected segments through `points`.
    pub fn stroke_polyline(
        &mut self,
        points: &[Point],
        color: Rgb,
        width: f32,
        mask: Option<&Mask>,
    ) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(points[0].x + 0.5, points[0].y + 0.5);
        for point in &points[1..] {
            builder.line_to(point.x + 0.5, point.y + 0.5);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), mask);
    }

    /// Filled ellipse covering the inclusive box `[cx - rx, cx + rx] x [cy - ry, cy + ry]`.
    pub fn fill_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Rgb,
        mask: Option<&Mask>,
    ) {
        let Some(oval) = Rect::from_ltrb(cx - rx, cy - ry, cx + rx + 1.0, cy + ry + 1.0) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(oval) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid(color),
            tiny_skia::FillRule::Winding,
            Transform::identity(),
            mask,
        );
    }

    /// 1px ring through the pixel centres of the inclusive box `center ± radius`.
    pub fn stroke_circle(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
        mask: Option<&Mask>,
    ) {
        if radius <= 0.0 {
            return;
        }
        let oval = Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
        if let Some(oval) = oval {
            self.stroke_oval(oval, color, mask);
        }
    }

    /// 1px outline of the oval inscribed in the inclusive pixel box `(x0, y0)..=(x1, y1)`.
    pub fn outline_oval(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let oval = Rect::from_ltrb(x0 as f32, y0 as f32, x1 as f32, y1 as f32);
        if let Some(oval) = oval {
            self.stroke_oval(oval, color, None);
        }
    }

    fn stroke_oval(&mut self, oval: Rect, color: Rgb, mask: Option<&Mask>) {
        let Some(centred) = Rect::from_ltrb(
            oval.left() + 0.5,
            oval.top() + 0.5,
            oval.right() + 0.5,
            oval.bottom() + 0.5,
        ) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(centred) else {
            return;
        };
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), mask);
    }

    /// Filled rectangle over the inclusive pixel box `(x0, y0)..=(x1, y1)`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let (left, right) = (x0.min(x1) as f32, x0.max(x1) as f32 + 1.0);
        let (top, bottom) = (y0.min(y1) as f32, y0.max(y1) as f32 + 1.0);
        let Some(rect) = Rect::from_ltrb(left, top, right, bottom) else {
            return;
        };
        let mut paint = solid(color);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// One-pixel outline of the inclusive box `(x0, y0)..=(x1, y1)`.
    pub fn outline_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        self.fill_rect(x0, y0, x1, y0, color);
        self.fill_rect(x0, y1, x1, y1, color);
        self.fill_rect(x0, y0, x0, y1, color);
        self.fill_rect(x1, y0, x1, y1, color);
    }

    /// Blend `color` into one pixel with 8-bit coverage; used for glyphs.
    pub fn blend_coverage(&mut self, x: i32, y: i32, color: Rgb, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return;
        }
        let idx = (y * width + x) as usize;
        let dst = self.pixmap.pixels()[idx];
        let alpha = u16::from(coverage);
        let inv_alpha = 255 - alpha;
        let mix = |src: u8, dst: u8| {
            ((u16::from(src) * alpha + u16::from(dst) * inv_alpha + 127) / 255) as u8
        };
        self.pixmap.pixels_mut()[idx] = PremultipliedColorU8::from_rgba(
            mix(color.r, dst.red()),
            mix(color.g, dst.green()),
            mix(color.b, dst.blue()),
            255,
        )
        .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let mut rgb = Vec::with_capacity((self.width() * self.height() * 3) as usize);
        for pixel in self.pixmap.pixels() {
            rgb.extend_from_slice(&[pixel.red(), pixel.green(), pixel.blue()]);
        }
        RgbImage::from_raw(self.width(), self.height(), rgb)
            .context("canvas buffer does not match its dimensions")
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let image = self.to_rgb_image()?;
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .context("failed to encode PNG")?;
        Ok(bytes.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(bytes)
    }

    /// FNV-1a over the raw RGB bytes; stable across runs for identical pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for pixel in self.pixmap.pixels() {
            for byte in [pixel.red(), pixel.green(), pixel.blue()] {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        hash
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use tiny_skia::Point;

    use super::Canvas;
    use crate::palette::Rgb;
    use crate::zone::{Zone, ZoneSet};

    const BG: Rgb = Rgb::new(15, 23, 42);
    const GOLD: Rgb = Rgb::new(252, 211, 77);

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(8, 4, BG).unwrap();
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.pixel(7, 3), Some(BG));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(Canvas::new(0, 10, BG).is_err());
    }

    #[test]
    fn fill_rect_is_inclusive() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.fill_rect(2, 2, 4, 3, GOLD);
        assert_eq!(canvas.pixel(2, 2), Some(GOLD));
        assert_eq!(canvas.pixel(4, 3), Some(GOLD));
        assert_eq!(canvas.pixel(5, 3), Some(BG));
        assert_eq!(canvas.pixel(4, 4), Some(BG));
    }

    #[test]
    fn masked_stroke_leaves_zone_untouched() {
        let mut canvas = Canvas::new(40, 20, BG).unwrap();
        let zones = ZoneSet::suppress([Zone::new(10, 0, 10, 19)]);
        let mask = zones.build_mask(40, 20);
        let line = [Point::from_xy(0.0, 10.0), Point::from_xy(39.0, 10.0)];
        canvas.stroke_polyline(&line, GOLD, 3.0, mask.as_ref());

        assert_ne!(canvas.pixel(5, 10), Some(BG));
        assert_ne!(canvas.pixel(30, 10), Some(BG));
        for x in 10..=20 {
            assert_eq!(canvas.pixel(x, 10), Some(BG), "x = {x}");
        }
    }

    #[test]
    fn circle_outline_leaves_the_centre_open() {
        let mut canvas = Canvas::new(21, 21, BG).unwrap();
        canvas.stroke_circle(10.0, 10.0, 6.0, GOLD, None);
        assert_ne!(canvas.pixel(16, 10), Some(BG));
        assert_ne!(canvas.pixel(10, 4), Some(BG));
        assert_eq!(canvas.pixel(10, 10), Some(BG));
        assert_eq!(canvas.pixel(18, 10), Some(BG));
    }

    #[test]
    fn oval_outline_spans_its_box() {
        let mut canvas = Canvas::new(40, 20, BG).unwrap();
        canvas.outline_oval(5, 7, 30, 13, GOLD);
        assert_ne!(canvas.pixel(5, 10), Some(BG));
        assert_ne!(canvas.pixel(30, 10), Some(BG));
        assert_ne!(canvas.pixel(17, 7), Some(BG));
        assert_eq!(canvas.pixel(17, 10), Some(BG));
        assert_eq!(canvas.pixel(33, 10), Some(BG));
    }

    #[test]
    fn png_encoding_round_trips_dimensions() {
        let mut canvas = Canvas::new(12, 7, BG).unwrap();
        canvas.fill_ellipse(6.0, 3.0, 2.0, 2.0, GOLD, None);
        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (12, 7));
        assert_eq!(decoded.get_pixel(6, 3).0, [GOLD.r, GOLD.g, GOLD.b]);
    }

    #[test]
    fn glyph_coverage_blends_toward_colour() {
        let mut canvas = Canvas::new(2, 2, Rgb::new(0, 0, 0)).unwrap();
        canvas.blend_coverage(0, 0, Rgb::new(255, 255, 255), 255);
        canvas.blend_coverage(1, 0, Rgb::new(200, 100, 0), 128);
        canvas.blend_coverage(-1, 5, GOLD, 255);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(canvas.pixel(1, 0), Some(Rgb::new(100, 50, 0)));
    }
}
