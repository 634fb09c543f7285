use goldframe::catalog::{MockupSet, MOCKUP_HEIGHT, MOCKUP_WIDTH};
use goldframe::fonts::FontSet;
use goldframe::render::render_set;
use goldframe::text::TextPainter;
use tempfile::tempdir;

#[test]
fn rendered_pngs_have_declared_dimensions() {
    let dir = tempdir().expect("tempdir should create");
    let mut painter = TextPainter::new(FontSet::builtin());
    for set in [MockupSet::Elegant, MockupSet::Stripes, MockupSet::Hybrid] {
        let rendered = render_set(set, &mut painter, dir.path()).expect("set should render");
        assert_eq!(rendered.len(), set.mockups().len());
        for mockup in rendered {
            let image = image::open(&mockup.path).expect("png should decode").to_rgb8();
            assert_eq!(image.dimensions(), (MOCKUP_WIDTH, MOCKUP_HEIGHT));
            assert_eq!((mockup.width, mockup.height), (MOCKUP_WIDTH, MOCKUP_HEIGHT));
        }
    }
}

#[test]
fn render_set_creates_missing_output_directory() {
    let dir = tempdir().expect("tempdir should create");
    let nested = dir.path().join("renders").join("mockups");
    let mut painter = TextPainter::new(FontSet::builtin());
    let rendered = render_set(MockupSet::Elegant, &mut painter, &nested).expect("should render");
    assert_eq!(rendered[0].path, nested.join("macos_editor_v9_elegant.png"));
    assert!(rendered[0].path.is_file());
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempdir().expect("tempdir should create");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").expect("blocker should write");
    let mut painter = TextPainter::new(FontSet::builtin());
    let error = render_set(MockupSet::Elegant, &mut painter, &blocker).unwrap_err();
    assert!(format!("{error:#}").contains("output directory"));
}
