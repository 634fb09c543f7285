use std::collections::HashMap;

use fontdue::layout::{
    CoordinateSystem, GlyphRasterConfig, HorizontalAlign, Layout, LayoutSettings, TextStyle,
    VerticalAlign, WrapStyle,
};
use fontdue::Font;

use crate::builtin_font;
use crate::canvas::Canvas;
use crate::fonts::{Face, FontOrigin, FontRole, FontSet};
use crate::palette::Rgb;

#[derive(Debug, Clone)]
struct GlyphBitmap {
    width: usize,
    height: usize,
    bitmap: Vec<u8>,
}

/// Draws single-line labels onto a [`Canvas`] with the faces of a [`FontSet`].
///
/// Characters the face cannot render are dropped rather than drawn as
/// replacement boxes, so emoji in the chrome labels vanish on fonts without
/// them.
pub struct TextPainter {
    fonts: FontSet,
    glyph_cache: HashMap<GlyphRasterConfig, GlyphBitmap>,
}

impl TextPainter {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            glyph_cache: HashMap::new(),
        }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn origin(&self) -> FontOrigin {
        self.fonts.origin()
    }

    /// Horizontal advance of `text` in pixels.
    pub fn measure(&self, role: FontRole, text: &str) -> i32 {
        match self.fonts.face(role) {
            Face::Vector { font, px } => {
                let advance: f32 = text
                    .chars()
                    .filter(|ch| supported(font, *ch))
                    .map(|ch| font.metrics(ch, *px).advance_width)
                    .sum();
                advance.round() as i32
            }
            Face::Builtin { scale } => builtin_font::measure(text, *scale),
        }
    }

    /// Draw `text` with the top of its line box at `y`.
    pub fn draw_text(
        &mut self,
        canvas: &mut Canvas,
        role: FontRole,
        x: i32,
        y: i32,
        text: &str,
        color: Rgb,
    ) {
        let (font, px) = match self.fonts.face(role) {
            Face::Vector { font, px } => (font.clone(), *px),
            Face::Builtin { scale } => {
                builtin_font::draw(canvas, x, y, text, *scale, color);
                return;
            }
        };

        let visible: String = text.chars().filter(|ch| supported(&font, *ch)).collect();
        if visible.trim().is_empty() {
            return;
        }

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: x as f32,
            y: y as f32,
            max_width: None,
            max_height: None,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
            line_height: 1.0,
            wrap_style: WrapStyle::Letter,
            wrap_hard_breaks: true,
        });
        layout.append(&[font.as_ref()], &TextStyle::new(&visible, px, 0));

        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let bitmap = self.glyph_cache.entry(glyph.key).or_insert_with(|| {
                let (_, bitmap) = font.rasterize_config(glyph.key);
                GlyphBitmap {
                    width: glyph.width,
                    height: glyph.height,
                    bitmap,
                }
            });
            blend_glyph(
                canvas,
                glyph.x.round() as i32,
                glyph.y.round() as i32,
                bitmap,
                color,
            );
        }
    }
}

fn supported(font: &Font, ch: char) -> bool {
    !ch.is_control() && (ch == ' ' || font.lookup_glyph_index(ch) != 0)
}

fn blend_glyph(canvas: &mut Canvas, x: i32, y: i32, glyph: &GlyphBitmap, color: Rgb) {
    for row in 0..glyph.height {
        for col in 0..glyph.width {
            let coverage = glyph.bitmap[row * glyph.width + col];
            canvas.blend_coverage(x + col as i32, y + row as i32, color, coverage);
        }
    }
}
