use std::path::PathBuf;

use goldframe::catalog::MockupSet;
use goldframe::fonts::{FontOrigin, FontSearch, FontSet};
use goldframe::render::render_mockup;
use goldframe::text::TextPainter;
use tempfile::tempdir;

#[test]
fn missing_fonts_still_render_a_full_image() {
    let search = FontSearch {
        display: vec![PathBuf::from("/nonexistent/display.otf")],
        text: vec![PathBuf::from("/nonexistent/text.otf")],
        mono: vec![PathBuf::from("/nonexistent/mono.ttc")],
    };
    let fonts = FontSet::load(&search);
    assert_eq!(fonts.origin(), FontOrigin::Builtin);

    let mut painter = TextPainter::new(fonts);
    let spec = &MockupSet::Stripes.mockups()[0];
    let canvas = render_mockup(spec, &mut painter).expect("render should not fail on fonts");
    assert_eq!((canvas.width(), canvas.height()), (1400, 900));
    let png = canvas.encode_png().expect("png should encode");
    assert!(image::load_from_memory(&png).is_ok());
}

#[test]
fn corrupt_font_file_falls_back() {
    let dir = tempdir().expect("tempdir should create");
    let corrupt = dir.path().join("broken.ttf");
    std::fs::write(&corrupt, [0u8; 64]).expect("font stub should write");
    let search = FontSearch {
        display: vec![corrupt.clone()],
        text: vec![corrupt.clone()],
        mono: vec![corrupt],
    };
    assert!(FontSet::try_load(&search).is_err());
    assert_eq!(FontSet::load(&search).origin(), FontOrigin::Builtin);
}

#[test]
fn system_fonts_render_when_available() {
    let fonts = FontSet::load(&FontSearch::system());
    if fonts.origin() == FontOrigin::Builtin {
        return;
    }
    assert!(!fonts.sources().is_empty());
    let mut painter = TextPainter::new(fonts);
    let spec = &MockupSet::Variants.mockups()[0];
    let first = render_mockup(spec, &mut painter).expect("render").fingerprint();
    let second = render_mockup(spec, &mut painter).expect("render").fingerprint();
    assert_eq!(first, second);
}
