use goldframe::catalog::{MockupSet, MockupSpec};
use goldframe::fonts::FontSet;
use goldframe::palette::Palette;
use goldframe::render::render_mockup;
use goldframe::text::TextPainter;
use goldframe::zone::{Zone, ZoneSet};

fn assert_zones_untouched(spec: &MockupSpec) -> usize {
    let background = Palette::dark_gold().bg_primary;
    let mut painter = TextPainter::new(FontSet::builtin());
    let canvas = render_mockup(spec, &mut painter).expect("mockup should render");

    let mut decorated = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let pixel = canvas.pixel(x, y).expect("pixel in bounds");
            if spec.zones.contains(x as f32, y as f32) {
                assert_eq!(
                    pixel, background,
                    "{}: decoration leaked into zone at ({x}, {y})",
                    spec.file_name
                );
            } else if pixel != background {
                decorated += 1;
            }
        }
    }
    decorated
}

#[test]
fn extended_styles_keep_every_text_zone_clear() {
    for spec in MockupSet::Extended.mockups() {
        assert!(spec.zones.is_hard());
        assert_zones_untouched(&spec);
    }
}

#[test]
fn fixed_styles_keep_the_code_pane_core_clear() {
    for spec in MockupSet::ExtendedFixed.mockups() {
        if !spec.zones.is_hard() {
            continue;
        }
        let decorated = assert_zones_untouched(&spec);
        assert!(decorated > 0, "{} drew nothing", spec.file_name);
    }
}

#[test]
fn custom_zone_suppresses_an_unaware_style() {
    let spec = MockupSet::Styles
        .mockups()
        .remove(4)
        .with_zones(ZoneSet::suppress([Zone::new(400, 200, 300, 300)]));
    let decorated = assert_zones_untouched(&spec);
    assert!(decorated > 0);
}
