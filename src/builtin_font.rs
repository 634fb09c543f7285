//! 8x8 bitmap font used when no system font can be loaded.
//!
//! Covers printable ASCII only; anything else is skipped and takes no space.

use font8x8::legacy::BASIC_LEGACY;

use crate::canvas::Canvas;
use crate::palette::Rgb;

pub const GLYPH_SIZE: i32 = 8;

/// Row bitmaps for `ch`, least significant bit leftmost.
pub fn glyph(ch: char) -> Option<[u8; 8]> {
    if ch == ' ' || ch.is_ascii_graphic() {
        BASIC_LEGACY.get(ch as usize).copied()
    } else {
        None
    }
}

pub fn measure(text: &str, scale: u32) -> i32 {
    let drawn = text.chars().filter(|ch| glyph(*ch).is_some()).count() as i32;
    drawn * GLYPH_SIZE * scale.max(1) as i32
}

/// Blit `text` with its top-left corner at `(x, y)`, each bit as a `scale`-pixel square.
pub fn draw(canvas: &mut Canvas, x: i32, y: i32, text: &str, scale: u32, color: Rgb) {
    let scale = scale.max(1) as i32;
    let mut pen = x;
    for rows in text.chars().filter_map(glyph) {
        for (dy, bits) in rows.iter().enumerate() {
            for dx in 0..GLYPH_SIZE {
                if (bits >> dx) & 0x01 == 0 {
                    continue;
                }
                let px = pen + dx * scale;
                let py = y + dy as i32 * scale;
                canvas.fill_rect(px, py, px + scale - 1, py + scale - 1, color);
            }
        }
        pen += GLYPH_SIZE * scale;
    }
}
