use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::canvas::Canvas;
use crate::catalog::{MockupSet, MockupSpec};
use crate::chrome::draw_chrome;
use crate::fonts::sha256_hex;
use crate::palette::Palette;
use crate::text::TextPainter;
use crate::texture;

#[derive(Debug, Clone)]
pub struct RenderedMockup {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub sha256: String,
}

impl RenderedMockup {
    /// The confirmation line printed for each written file.
    pub fn confirmation(&self) -> String {
        format!(
            "Wrote {} ({}x{}, sha256={})",
            self.path.display(),
            self.width,
            self.height,
            self.sha256
        )
    }
}

/// Texture first, then chrome on top.
pub fn render_mockup(spec: &MockupSpec, painter: &mut TextPainter) -> Result<Canvas> {
    let palette = Palette::dark_gold();
    let mut canvas = Canvas::new(spec.width, spec.height, palette.bg_primary)
        .with_context(|| format!("failed to allocate canvas for {}", spec.file_name))?;

    let primitives = spec
        .texture
        .generate(spec.width, spec.height, spec.seed, &palette, &spec.zones);
    log::debug!(
        "{}: {} primitives from {} (seed {})",
        spec.file_name,
        primitives.len(),
        spec.texture.keyword(),
        spec.seed
    );
    texture::paint(&mut canvas, &primitives, &spec.zones);

    if let Some(style) = spec.chrome {
        draw_chrome(&mut canvas, painter, &palette, style);
    }
    Ok(canvas)
}

pub fn write_mockup(
    spec: &MockupSpec,
    painter: &mut TextPainter,
    out_dir: &Path,
) -> Result<RenderedMockup> {
    let canvas = render_mockup(spec, painter)?;
    let path = out_dir.join(&spec.file_name);
    let bytes = canvas
        .save_png(&path)
        .with_context(|| format!("failed to save mockup {}", spec.file_name))?;
    Ok(RenderedMockup {
        path,
        width: canvas.width(),
        height: canvas.height(),
        sha256: sha256_hex(&bytes),
    })
}

pub fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))
}

/// Render every mockup of `set` into `out_dir`, creating it if needed.
pub fn render_set(
    set: MockupSet,
    painter: &mut TextPainter,
    out_dir: &Path,
) -> Result<Vec<RenderedMockup>> {
    prepare_out_dir(out_dir)?;
    let specs = set.mockups();
    log::info!("rendering {} mockup(s) for set '{}'", specs.len(), set.keyword());
    specs
        .iter()
        .map(|spec| write_mockup(spec, painter, out_dir))
        .collect()
}
