//! Static mock editor chrome drawn over a finished texture.
//!
//! Everything here is fixed coordinate arithmetic against an [`EditorLayout`];
//! nothing is masked, so chrome always paints over decoration.

use std::ops::Range;

use serde::Serialize;

use crate::canvas::Canvas;
use crate::fonts::FontRole;
use crate::palette::{Palette, Rgb};
use crate::text::TextPainter;
use crate::texture::gem;
use crate::texture::wave::{ribbon, Axis, Harmonic, WaveStack};
use crate::texture::{self, Sketch};
use crate::zone::ZoneSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeStyle {
    /// Opaque filled panels for every region.
    Panels,
    /// Regions marked only by single edge lines so the texture shows through.
    Hairline,
    /// Filled panels hatched with facet lines, full-length code listing.
    Gem,
    /// Filled panels carrying their own gold ribbons and glow rings.
    Glow,
    /// Opaque panels with a row of command-bar glints.
    Filled { glints: Glints },
    /// Edge lines only, like [`ChromeStyle::Hairline`], but with a filled
    /// title bar and an open status bar.
    Outlined,
}

/// Strength of the glint row along the top of the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glints {
    Soft,
    Strong,
    Intense,
}

/// `count` stacked ovals stepping right from the bar's left edge; each oval
/// is `stretch` pixels wider than it is tall.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GlintRow {
    count: i32,
    first: i32,
    step: i32,
    radius: i32,
    strength: f64,
    stretch: f32,
}

impl Glints {
    fn row(self) -> GlintRow {
        match self {
            Self::Soft => GlintRow {
                count: 15,
                first: 40,
                step: 55,
                radius: 5,
                strength: 0.6,
                stretch: 3.0,
            },
            Self::Strong => GlintRow {
                count: 20,
                first: 30,
                step: 42,
                radius: 6,
                strength: 0.7,
                stretch: 4.0,
            },
            Self::Intense => GlintRow {
                count: 25,
                first: 25,
                step: 35,
                radius: 7,
                strength: 0.8,
                stretch: 5.0,
            },
        }
    }
}

const HAIRLINE_GLINTS: GlintRow = GlintRow {
    count: 15,
    first: 35,
    step: 55,
    radius: 5,
    strength: 0.7,
    stretch: 3.0,
};

/// Region boundaries for a `width` x `height` editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub width: i32,
    pub height: i32,
    pub title_bottom: i32,
    pub explorer_right: i32,
    pub tab_bottom: i32,
    pub context_left: i32,
    pub command_top: i32,
    pub status_top: i32,
}

impl EditorLayout {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as i32, height as i32);
        Self {
            width,
            height,
            title_bottom: 38,
            explorer_right: 220,
            tab_bottom: 74,
            context_left: width - 280,
            command_top: height - 66,
            status_top: height - 20,
        }
    }

    /// Bottom edge of the code pane and context panel.
    pub fn editor_bottom(&self) -> i32 {
        self.tab_bottom + self.height - 140
    }
}

const TITLE: &str = "Golden Editor";

const CODE_LINES: [&str; 14] = [
    "import { useState } from 'react';",
    "",
    "function App() {",
    "  const [count, setCount] = useState(0);",
    "",
    "  return (",
    "    <div className='app'>",
    "      <h1>Hello World</h1>",
    "      <p>Count: {count}</p>",
    "    </div>",
    "  );",
    "}",
    "",
    "export default App;",
];
const FULL_LISTING: [&str; 17] = [
    "import { useState } from 'react';",
    "",
    "function App() {",
    "  const [count, setCount] = useState(0);",
    "",
    "  return (",
    "    <div className=\"app\">",
    "      <h1>Hello World</h1>",
    "      <p>Count: {count}</p>",
    "      <button onClick={() => setCount(c + 1)}>",
    "        Increment",
    "      </button>",
    "    </div>",
    "  );",
    "}",
    "",
    "export default App;",
];
const CURRENT_LINE: usize = 3;

/// `(name, indent level)`; the second entry is the open file.
const FILE_TREE: [(&str, i32); 7] = [
    ("📁  src", 0),
    ("  🟨  main.js", 1),
    ("  📄  utils.js", 1),
    ("  📄  config.js", 1),
    ("📁  tests", 0),
    ("  📄  test.js", 1),
    ("📄  README.md", 0),
];
const OPEN_FILE: usize = 1;
const SHORT_TREE: [&str; 3] = ["  🟨  main.js", "  📄  utils.js", "  📄  config.js"];
const TABS: [&str; 3] = ["main.js", "utils.js", "config.js"];

const COMMAND: &str = "git commit -m \"feat: add counter\"";
const STATUS_ITEMS: [&str; 5] = ["Ln 4, Col 15", "UTF-8", "JavaScript", "🌙 暗黑", "⎋ LEAP"];
const CLASSIC_STATUS_ITEMS: [&str; 5] = ["Ln 4, Col 15", "UTF-8", "JavaScript", "◐ 暗黑", "⎋ LEAP"];

pub fn draw_chrome(
    canvas: &mut Canvas,
    painter: &mut TextPainter,
    palette: &Palette,
    style: ChromeStyle,
) {
    let layout = EditorLayout::new(canvas.width(), canvas.height());
    log::debug!("drawing {style:?} chrome at {}x{}", layout.width, layout.height);
    let mut chrome = Chrome {
        canvas,
        painter,
        palette,
        layout,
    };
    match style {
        ChromeStyle::Panels => chrome.panels(),
        ChromeStyle::Hairline => chrome.hairline(),
        ChromeStyle::Gem => chrome.gem(),
        ChromeStyle::Glow => chrome.glow(),
        ChromeStyle::Filled { glints } => chrome.filled(glints.row()),
        ChromeStyle::Outlined => chrome.outlined(),
    }
}

/// How the open row of the short file list is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowMark {
    Filled,
    Underlined,
}

struct Chrome<'a> {
    canvas: &'a mut Canvas,
    painter: &'a mut TextPainter,
    palette: &'a Palette,
    layout: EditorLayout,
}

impl Chrome<'_> {
    fn text(&mut self, role: FontRole, x: i32, y: i32, text: &str, color: Rgb) {
        self.painter.draw_text(self.canvas, role, x, y, text, color);
    }

    fn text_lines(&mut self, role: FontRole, x: i32, y: i32, lines: &[&str], color: Rgb) {
        for (row, line) in lines.iter().enumerate() {
            self.text(role, x, y + 15 * row as i32, line, color);
        }
    }

    /// Run a texture generator against the chrome, unmasked and seedless.
    fn ornament(&mut self, draw: impl FnOnce(&mut Sketch<'_>)) {
        let palette = self.palette;
        let zones = ZoneSet::none();
        let mut sketch = Sketch::new(self.canvas.width(), self.canvas.height(), 0, palette, &zones);
        draw(&mut sketch);
        texture::paint(self.canvas, &sketch.finish(), &zones);
    }

    /// Stroke `wave` sampled every `step` pixels of `along`.
    fn wave(
        &mut self,
        wave: &WaveStack,
        axis: Axis,
        along: Range<i32>,
        origin: i32,
        step: usize,
        (color, width): (Rgb, f32),
    ) {
        let points = wave.trace_within(axis, along, step, origin);
        self.canvas.stroke_polyline(&points, color, width, None);
    }

    fn panels(&mut self) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            command_top,
            status_top,
        } = self.layout;
        let editor_bottom = self.layout.editor_bottom();

        self.canvas.fill_rect(0, 0, width, title_bottom, p.bg_secondary);
        self.title_controls();

        self.canvas
            .fill_rect(0, title_bottom, explorer_right, height - 20, p.bg_secondary);
        self.text(FontRole::Small, 15, title_bottom + 15, "EXPLORER", p.text_muted);
        let mut y = title_bottom + 45;
        for (index, (name, level)) in FILE_TREE.into_iter().enumerate() {
            let color = if index == OPEN_FILE {
                self.canvas
                    .fill_rect(0, y - 3, explorer_right, y + 22, p.bg_tertiary);
                self.canvas.fill_rect(0, y - 3, 1, y + 22, p.accent_primary);
                p.text_primary
            } else {
                p.text_secondary
            };
            self.text(FontRole::Medium, 15 + level * 15, y, name, color);
            y += 28;
        }

        self.canvas
            .fill_rect(explorer_right, title_bottom, context_left, tab_bottom, p.bg_primary);
        let mut x = explorer_right + 10;
        for (index, name) in TABS.into_iter().enumerate() {
            let color = if index == 0 {
                self.canvas
                    .fill_rect(x, title_bottom + 5, x + 110, tab_bottom, p.bg_secondary);
                self.canvas
                    .fill_rect(x, title_bottom + 4, x + 110, title_bottom + 6, p.accent_primary);
                p.text_primary
            } else {
                p.text_secondary
            };
            self.text(FontRole::Medium, x + 12, title_bottom + 12, name, color);
            self.text(FontRole::Medium, x + 90, title_bottom + 10, "×", p.text_muted);
            x += 115;
        }

        self.canvas
            .fill_rect(explorer_right, tab_bottom, context_left, editor_bottom, p.bg_primary);
        let mut y = tab_bottom + 20;
        for (index, code) in CODE_LINES.iter().enumerate() {
            let current = index == CURRENT_LINE;
            if current {
                self.canvas
                    .fill_rect(explorer_right, y - 3, context_left, y + 24, p.bg_secondary);
                self.current_line_edge(y);
            }
            let code_color = if code.starts_with("import") || code.starts_with("function") {
                p.accent_highlight
            } else if current {
                p.text_primary
            } else {
                p.text_secondary
            };
            self.code_line(index, y, code, current, code_color);
            y += 26;
        }

        self.canvas
            .fill_rect(context_left, tab_bottom, width, editor_bottom, p.bg_secondary);
        self.canvas
            .fill_rect(context_left - 1, tab_bottom, context_left, editor_bottom, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, tab_bottom + 15, "CONTEXT", p.text_muted);
        let card = (context_left + 10, tab_bottom + 45, width - 10, tab_bottom + 120);
        self.canvas.fill_rect(card.0, card.1, card.2, card.3, p.bg_tertiary);
        self.canvas
            .outline_rect(card.0, card.1, card.2, card.3, p.accent_primary);
        self.text(
            FontRole::Medium,
            context_left + 20,
            tab_bottom + 60,
            "🤖 AI Assistant",
            p.accent_primary,
        );

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top + 46, p.bg_secondary);
        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top, p.bg_tertiary);
        for i in 0..10 {
            let x = (explorer_right + 50 + i * 80) as f32;
            let y = (command_top + 3) as f32;
            for r in (1..=4).rev() {
                let glow = p.bg_secondary.blend(p.accent_highlight, 0.5 / f64::from(r));
                let r = r as f32;
                self.canvas.fill_ellipse(x, y, r, r, glow, None);
            }
        }
        self.command_prompt(command_top);

        self.canvas.fill_rect(0, status_top, width, height, p.accent_primary);
        self.status_items(status_top + 4, &STATUS_ITEMS, 25);
    }

    fn hairline(&mut self) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            command_top,
            status_top,
        } = self.layout;
        let editor_bottom = self.layout.editor_bottom();

        // A 38px stroke centred on the title edge.
        self.canvas
            .fill_rect(0, title_bottom - 19, width, title_bottom + 18, p.bg_secondary);
        self.title_controls();

        self.canvas.fill_rect(
            explorer_right,
            title_bottom,
            explorer_right,
            height - 20,
            p.accent_primary,
        );
        self.short_tree(["  main.js", "  utils.js", "  config.js"], RowMark::Underlined);

        self.canvas
            .fill_rect(explorer_right, tab_bottom, context_left, tab_bottom, p.bg_tertiary);
        let (tab_left, tab_right) = (explorer_right + 10, explorer_right + 130);
        self.canvas.fill_rect(tab_left, 42, tab_right, 44, p.accent_primary);
        self.canvas
            .fill_rect(tab_left, 43, tab_right, tab_bottom, p.bg_secondary);
        self.text(FontRole::Medium, explorer_right + 22, 52, "main.js", p.text_primary);

        self.short_listing(|chrome, y| {
            chrome.current_line_edge(y);
            chrome
                .canvas
                .fill_rect(explorer_right, y + 24, context_left, y + 24, p.accent_primary);
        });

        self.canvas
            .fill_rect(context_left, tab_bottom, context_left, editor_bottom, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, 89, "CONTEXT", p.text_muted);
        self.canvas
            .fill_rect(context_left + 10, 119, width - 10, 194, p.bg_tertiary);
        self.text(FontRole::Medium, context_left + 20, 148, "AI Assistant", p.accent_primary);

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top, p.bg_tertiary);
        self.glint_row(HAIRLINE_GLINTS);
        self.command_prompt(command_top);

        self.canvas
            .fill_rect(0, status_top - 1, width, height, p.accent_primary);
        self.status_items(height - 16, &STATUS_ITEMS, 25);
    }

    /// Hatched panels around the full listing; the command and status bars
    /// sit four pixels higher than in the other styles.
    fn gem(&mut self) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            ..
        } = self.layout;
        let status_top = height - 24;
        let command_top = status_top - 46;

        self.canvas.fill_rect(0, 0, width, title_bottom, p.bg_secondary);
        self.ornament(|s| gem::gem_pattern(s, 0, 0, width, title_bottom));
        self.ringed_lights(13, false);
        self.centred_title();

        let panel_height = status_top - title_bottom;
        self.canvas
            .fill_rect(0, title_bottom, explorer_right, status_top, p.bg_secondary);
        self.ornament(|s| gem::gem_pattern(s, 0, title_bottom, explorer_right, panel_height));
        self.text(FontRole::Small, 15, title_bottom + 15, "EXPLORER", p.text_muted);
        let mut y = title_bottom + 45;
        for (index, (name, level)) in FILE_TREE.into_iter().enumerate() {
            let color = if index == OPEN_FILE {
                self.canvas
                    .fill_rect(0, y - 3, explorer_right, y + 20, p.bg_tertiary);
                self.canvas.fill_rect(0, y - 3, 1, y + 20, p.accent_primary);
                p.text_primary
            } else {
                p.text_secondary
            };
            let name = if index == OPEN_FILE { "  📄  main.js" } else { name };
            self.text(FontRole::Medium, 15 + level * 15, y, name, color);
            y += 26;
        }

        self.canvas
            .fill_rect(explorer_right, title_bottom, width, tab_bottom, p.bg_primary);
        let after_tabs = self.tab_strip(100, (10, 10), (82, 9), |chrome, x| {
            chrome
                .canvas
                .fill_rect(x, title_bottom + 5, x + 100, title_bottom + 6, p.accent_primary);
        });
        self.text(FontRole::Large, after_tabs + 5, title_bottom + 8, "+", p.text_secondary);

        self.canvas
            .fill_rect(explorer_right, tab_bottom, width, command_top, p.bg_primary);
        let mut y = tab_bottom + 15;
        for (index, code) in FULL_LISTING.iter().enumerate() {
            let current = index == CURRENT_LINE;
            if current {
                self.canvas
                    .fill_rect(explorer_right, y - 2, context_left, y + 20, p.bg_secondary);
                self.canvas.fill_rect(
                    explorer_right - 1,
                    y - 2,
                    explorer_right + 1,
                    y + 20,
                    p.accent_primary,
                );
                let dashes = context_left - explorer_right - 100;
                for i in (0..dashes.max(0)).step_by(200) {
                    let x = explorer_right + i;
                    self.canvas.fill_rect(x, y + 9, x + 50, y + 9, p.accent_primary);
                }
            }
            let number = (index + 1).to_string();
            let number_x = explorer_right + 35 - 4 * number.len() as i32;
            self.text(FontRole::Small, number_x, y, &number, p.text_muted);
            let code_x = explorer_right + 65;
            let plain = if current { p.text_primary } else { p.text_secondary };
            self.keyword_line(code, code_x, y, (50, 60), plain);
            y += 22;
        }

        self.canvas
            .fill_rect(context_left, tab_bottom, width, command_top, p.bg_secondary);
        let panel = (context_left, tab_bottom, width - context_left, command_top - tab_bottom);
        self.ornament(|s| gem::gem_pattern(s, panel.0, panel.1, panel.2, panel.3));
        self.canvas
            .fill_rect(context_left, tab_bottom, context_left, command_top, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, tab_bottom + 15, "CONTEXT", p.text_muted);
        let card = (context_left + 10, tab_bottom + 45, width - 10, tab_bottom + 125);
        self.canvas.fill_rect(card.0, card.1, card.2, card.3, p.bg_tertiary);
        self.text(
            FontRole::Medium,
            context_left + 20,
            tab_bottom + 55,
            "🤖 AI Assistant",
            p.accent_primary,
        );
        self.text_lines(
            FontRole::Small,
            context_left + 20,
            tab_bottom + 80,
            &[
                "useState is a React Hook",
                "that lets you add state",
                "to functional components.",
            ],
            p.text_secondary,
        );

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, status_top, p.bg_secondary);
        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top, p.bg_tertiary);
        // Dotted light bands along the top edge.
        for band in (0..context_left - explorer_right).step_by(300) {
            for dot in (0..100).step_by(2) {
                let x = explorer_right + band + dot;
                self.canvas
                    .fill_rect(x, command_top + 1, x, command_top + 1, p.accent_primary);
            }
        }
        self.command_prompt(command_top);
        let cursor = explorer_right + 280;
        self.canvas
            .fill_rect(cursor, command_top + 14, cursor + 2, command_top + 30, p.accent_primary);

        self.canvas.fill_rect(0, status_top, width, height, p.accent_primary);
        self.status_items(status_top + 4, &CLASSIC_STATUS_ITEMS, 30);
    }

    /// Panels painted with their own ribbons, with glow rings on every
    /// highlighted control.
    fn glow(&mut self) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            command_top,
            status_top,
        } = self.layout;
        let editor_bottom = self.layout.editor_bottom();
        let single = |base: f64, amplitude: f64, frequency: f64, divisor: f64, phase: f64| {
            WaveStack {
                base,
                amplitude,
                frequency,
                divisor,
                phase,
                harmonics: vec![Harmonic::FUNDAMENTAL],
            }
        };

        self.canvas.fill_rect(0, 0, width, title_bottom, p.bg_secondary);
        for i in 0..3 {
            let i = f64::from(i);
            let stripe = ribbon(10.0 + 12.0 * i, 5.0, 1.5, 2.0 * i);
            self.wave(&stripe, Axis::Horizontal, 0..width + 1, 0, 5, (p.accent_primary, 15.0));
        }
        self.ringed_lights(19, true);
        self.centred_title();

        self.canvas
            .fill_rect(0, title_bottom, explorer_right, status_top, p.bg_secondary);
        for i in 0..5 {
            let i = f64::from(i);
            let swell = WaveStack {
                harmonics: vec![
                    Harmonic::FUNDAMENTAL,
                    Harmonic {
                        ratio: 0.4,
                        freq_mul: 2.1,
                        phase_mul: 1.3,
                    },
                ],
                ..single(60.0 + 150.0 * i, 25.0, 0.6 + 0.1 * i, 30.0, 1.5 * i)
            };
            let across = 0..explorer_right + 1;
            self.wave(&swell, Axis::Horizontal, across, 0, 3, (p.accent_primary, 30.0));
        }
        for i in 0..3 {
            let i = f64::from(i);
            let current = single(30.0 + 70.0 * i, 20.0, 1.0, 60.0, 2.0 * i);
            let down = title_bottom..status_top;
            let look = (p.accent_highlight, 25.0);
            self.wave(&current, Axis::Vertical, down, title_bottom, 5, look);
        }
        self.text(FontRole::Small, 15, title_bottom + 15, "EXPLORER", p.text_muted);
        let mut y = title_bottom + 45;
        for (index, (name, level)) in FILE_TREE.into_iter().enumerate() {
            let color = if index == OPEN_FILE {
                self.canvas
                    .fill_rect(0, y - 3, explorer_right, y + 22, p.bg_tertiary);
                self.canvas.fill_rect(0, y - 3, 1, y + 22, p.accent_primary);
                self.ornament(|s| gem::gem_glow(s, 20, y + 10, 15, p.accent_primary, 0.2));
                p.text_primary
            } else {
                p.text_secondary
            };
            self.text(FontRole::Medium, 15 + level * 15, y, name, color);
            y += 28;
        }

        self.canvas
            .fill_rect(explorer_right, title_bottom, context_left, tab_bottom, p.bg_primary);
        for i in 0..2 {
            let i = f64::from(i);
            let crease = single(48.0 + 10.0 * i, 4.0, 2.0, 100.0, 3.0 * i);
            let across = explorer_right..context_left;
            self.wave(&crease, Axis::Horizontal, across, 0, 5, (p.accent_primary, 8.0));
        }
        let after_tabs = self.tab_strip(110, (12, 12), (90, 10), |chrome, x| {
            let top = title_bottom + 5;
            chrome
                .canvas
                .fill_rect(x, top - 1, x + 110, top + 1, p.accent_primary);
            chrome.ornament(|s| gem::gem_glow(s, x + 55, top, 55, p.accent_primary, 0.15));
        });
        self.text(FontRole::Large, after_tabs + 5, title_bottom + 8, "+", p.text_secondary);

        self.canvas
            .fill_rect(explorer_right, tab_bottom, context_left, editor_bottom, p.bg_primary);
        for i in 0..4 {
            let i = f64::from(i);
            let base = f64::from(tab_bottom) + 100.0 + 150.0 * i;
            let swell = single(base, 30.0, 0.4 + 0.1 * i, 100.0, 2.0 * i);
            let across = explorer_right..context_left;
            let look = (p.accent_primary, 60.0);
            self.wave(&swell, Axis::Horizontal, across, explorer_right, 5, look);
        }
        let gutter = explorer_right + 60;
        self.canvas
            .fill_rect(explorer_right, tab_bottom, gutter, editor_bottom, p.bg_primary);
        let mut y = tab_bottom + 20;
        for (index, code) in FULL_LISTING.iter().enumerate() {
            let current = index == CURRENT_LINE;
            if current {
                self.canvas
                    .fill_rect(explorer_right, y - 3, context_left, y + 24, p.bg_secondary);
                self.current_line_edge(y);
                for offset in (0..600).step_by(150) {
                    let x = explorer_right + 300 + offset;
                    for r in (1..=3).rev() {
                        let color = p.accent_primary.lightened((100 / r) as u8);
                        self.canvas
                            .outline_oval(x - r, y + 8 - r, x + 20 + r, y + 8 + r, color);
                    }
                }
                let cx = explorer_right + 100;
                self.ornament(|s| gem::gem_glow(s, cx, y + 10, 50, p.accent_primary, 0.1));
            }
            let number_color = if current { p.accent_primary } else { p.text_muted };
            let number = (index + 1).to_string();
            self.text(FontRole::Small, explorer_right + 45, y, &number, number_color);
            let plain = if current { p.text_primary } else { p.text_secondary };
            self.keyword_line(code, explorer_right + 75, y, (60, 75), plain);
            y += 26;
        }

        self.canvas
            .fill_rect(context_left, tab_bottom, width, editor_bottom, p.bg_secondary);
        for i in 0..4 {
            let i = f64::from(i);
            let base = f64::from(context_left) + 30.0 + 60.0 * i;
            let current = single(base, 25.0, 1.0, 50.0, 1.8 * i);
            let down = tab_bottom..editor_bottom;
            let look = (p.accent_primary, 35.0);
            self.wave(&current, Axis::Vertical, down, tab_bottom, 5, look);
        }
        self.canvas
            .fill_rect(context_left - 1, tab_bottom, context_left, editor_bottom, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, tab_bottom + 15, "CONTEXT", p.text_muted);
        let card = (context_left + 10, tab_bottom + 45, width - 10, tab_bottom + 165);
        self.canvas.fill_rect(card.0, card.1, card.2, card.3, p.bg_tertiary);
        self.canvas
            .outline_rect(card.0, card.1, card.2, card.3, p.accent_primary);
        self.text(
            FontRole::Medium,
            context_left + 20,
            tab_bottom + 60,
            "🤖 AI Assistant",
            p.accent_primary,
        );
        self.text_lines(
            FontRole::Small,
            context_left + 20,
            tab_bottom + 90,
            &[
                "useState is a React Hook",
                "that lets you add state to",
                "functional components.",
            ],
            p.text_secondary,
        );
        for i in 0..3 {
            let base = f64::from(tab_bottom + 185 + 80 * i);
            let rule = single(base, 10.0, 1.0, 40.0, f64::from(i));
            let across = context_left + 10..width - 10;
            let look = (p.accent_highlight, 2.0);
            self.wave(&rule, Axis::Horizontal, across, context_left, 5, look);
        }

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top + 46, p.bg_secondary);
        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top, p.bg_tertiary);
        self.ornament(|s| gem::flowing_stream(s, explorer_right, context_left, command_top + 2));
        for i in 0..8 {
            let sway = (20.0 * (1.5 * f64::from(i)).sin()) as i32;
            let x = (300 + 100 * i + sway) as f32;
            for r in (1..=4).rev() {
                let color = p.accent_highlight.lightened((200 / r) as u8);
                let r = r as f32;
                self.canvas
                    .fill_ellipse(x, (command_top + 3) as f32, r, r, color, None);
            }
        }
        self.command_prompt(command_top);
        let cursor = explorer_right + 320;
        self.canvas
            .fill_rect(cursor, command_top + 14, cursor + 2, command_top + 32, p.accent_primary);
        self.ornament(|s| gem::gem_glow(s, cursor + 1, command_top + 23, 5, p.accent_primary, 0.3));

        self.canvas.fill_rect(0, status_top, width, height, p.accent_primary);
        for i in 0..3 {
            let i = f64::from(i);
            let hem = single(f64::from(status_top) - 5.0 + 5.0 * i, 3.0, 3.0, 100.0, 4.0 * i);
            self.wave(&hem, Axis::Horizontal, 0..width, 0, 5, (p.bg_primary, 3.0));
        }
        self.status_items(status_top + 4, &STATUS_ITEMS, 25);
    }

    fn filled(&mut self, glints: GlintRow) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            command_top,
            status_top,
        } = self.layout;
        let editor_bottom = self.layout.editor_bottom();

        self.canvas.fill_rect(0, 0, width, title_bottom, p.bg_secondary);
        self.title_controls();

        self.canvas
            .fill_rect(0, title_bottom, explorer_right, status_top, p.bg_secondary);
        self.short_tree(SHORT_TREE, RowMark::Filled);

        self.canvas
            .fill_rect(explorer_right, title_bottom, context_left, tab_bottom, p.bg_primary);
        self.open_tab();

        self.canvas
            .fill_rect(explorer_right, tab_bottom, context_left, editor_bottom, p.bg_primary);
        self.short_listing(|chrome, y| {
            chrome
                .canvas
                .fill_rect(explorer_right, y - 3, context_left, y + 24, p.bg_secondary);
            chrome.current_line_edge(y);
        });

        self.canvas
            .fill_rect(context_left, tab_bottom, width, editor_bottom, p.bg_secondary);
        self.canvas
            .fill_rect(context_left - 1, tab_bottom, context_left, editor_bottom, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, 89, "CONTEXT", p.text_muted);
        self.canvas
            .fill_rect(context_left + 10, 119, width - 10, 194, p.bg_tertiary);
        self.canvas
            .outline_rect(context_left + 10, 119, width - 10, 194, p.accent_primary);
        self.text(FontRole::Medium, context_left + 20, 134, "🤖 AI Assistant", p.accent_primary);

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top + 46, p.bg_secondary);
        self.glint_row(glints);
        self.command_prompt(command_top);

        self.canvas.fill_rect(0, status_top, width, height, p.accent_primary);
        self.status_items(height - 16, &STATUS_ITEMS, 25);
    }

    fn outlined(&mut self) {
        let p = *self.palette;
        let EditorLayout {
            width,
            height,
            title_bottom,
            explorer_right,
            tab_bottom,
            context_left,
            command_top,
            status_top,
        } = self.layout;
        let editor_bottom = self.layout.editor_bottom();

        self.canvas.fill_rect(0, 0, width, title_bottom, p.bg_secondary);
        self.title_controls();

        self.canvas.fill_rect(
            explorer_right,
            title_bottom,
            explorer_right,
            status_top,
            p.accent_primary,
        );
        self.short_tree(SHORT_TREE, RowMark::Underlined);

        self.canvas
            .fill_rect(explorer_right, tab_bottom, context_left, tab_bottom, p.bg_tertiary);
        self.open_tab();

        self.short_listing(|chrome, y| {
            chrome
                .canvas
                .fill_rect(explorer_right, y + 24, context_left, y + 24, p.accent_primary);
            chrome.current_line_edge(y);
        });

        self.canvas
            .fill_rect(context_left, tab_bottom, context_left, editor_bottom, p.accent_primary);
        self.text(FontRole::Small, context_left + 15, 89, "CONTEXT", p.text_muted);
        self.canvas
            .fill_rect(context_left + 10, 194, width - 10, 194, p.accent_primary);
        self.text(FontRole::Medium, context_left + 20, 134, "🤖 AI Assistant", p.accent_primary);

        self.canvas
            .fill_rect(explorer_right, command_top, context_left, command_top, p.bg_tertiary);
        self.glint_row(Glints::Intense.row());
        self.command_prompt(command_top);

        self.canvas
            .fill_rect(0, status_top - 1, width, status_top, p.accent_primary);
        self.status_items(height - 16, &STATUS_ITEMS, 25);
    }

    fn traffic_lights(&self) -> [(i32, Rgb); 3] {
        let p = self.palette;
        [(20, p.traffic_red), (40, p.traffic_yellow), (60, p.traffic_green)]
    }

    fn title_controls(&mut self) {
        let p = *self.palette;
        for (x, color) in self.traffic_lights() {
            self.canvas.fill_ellipse(x as f32, 19.0, 6.0, 6.0, color, None);
        }
        self.text(FontRole::Medium, 650, 10, TITLE, p.text_secondary);
    }

    /// Traffic lights with a dark 1px rim, optionally haloed.
    fn ringed_lights(&mut self, y: i32, halo: bool) {
        let rim = self.palette.bg_primary;
        for (x, color) in self.traffic_lights() {
            let (cx, cy) = (x as f32, y as f32);
            self.canvas.fill_ellipse(cx, cy, 7.0, 7.0, rim, None);
            self.canvas.fill_ellipse(cx, cy, 6.0, 6.0, color, None);
            if halo {
                self.ornament(|s| gem::gem_glow(s, x, y, 9, color, 0.15));
            }
        }
    }

    fn centred_title(&mut self) {
        let ink = self.palette.text_secondary;
        let x = (self.layout.width - self.painter.measure(FontRole::Medium, TITLE)).div_euclid(2);
        self.text(FontRole::Medium, x, 10, TITLE, ink);
    }

    /// EXPLORER heading and three files, the first one open.
    fn short_tree(&mut self, names: [&str; 3], mark: RowMark) {
        let p = *self.palette;
        let right = self.layout.explorer_right;
        self.text(FontRole::Small, 15, 53, "EXPLORER", p.text_muted);
        let mut y = 83;
        for (index, name) in names.into_iter().enumerate() {
            let color = if index == 0 {
                match mark {
                    RowMark::Filled => {
                        self.canvas.fill_rect(0, y - 3, right, y + 22, p.bg_tertiary)
                    }
                    RowMark::Underlined => {
                        self.canvas.fill_rect(0, y + 21, right, y + 22, p.accent_primary)
                    }
                }
                self.canvas.fill_rect(0, y - 3, 1, y + 22, p.accent_primary);
                p.text_primary
            } else {
                p.text_secondary
            };
            self.text(FontRole::Medium, 15, y, name, color);
            y += 28;
        }
    }

    /// The lone `main.js` tab with a 3px gold top edge.
    fn open_tab(&mut self) {
        let p = *self.palette;
        let left = self.layout.explorer_right + 10;
        let bottom = self.layout.tab_bottom;
        self.canvas.fill_rect(left, 43, left + 110, bottom, p.bg_secondary);
        self.canvas.fill_rect(left, 42, left + 110, 44, p.accent_primary);
        self.text(FontRole::Medium, left + 12, 50, "main.js", p.text_primary);
    }

    /// Three tabs of `tab_width` with 5px gaps; the first is open and gets
    /// `open_mark` after its fill. Label and close glyph are placed at
    /// `(dx, dy)` from the tab's top-left corner. Returns the `x` just past
    /// the last tab.
    fn tab_strip(
        &mut self,
        tab_width: i32,
        label: (i32, i32),
        close: (i32, i32),
        open_mark: impl Fn(&mut Self, i32),
    ) -> i32 {
        let p = *self.palette;
        let top = self.layout.title_bottom;
        let bottom = self.layout.tab_bottom;
        let mut x = self.layout.explorer_right + 10;
        for (index, name) in TABS.into_iter().enumerate() {
            let color = if index == 0 {
                self.canvas.fill_rect(x, top + 5, x + tab_width, bottom, p.bg_secondary);
                open_mark(self, x);
                p.text_primary
            } else {
                p.text_secondary
            };
            self.text(FontRole::Medium, x + label.0, top + label.1, name, color);
            self.text(FontRole::Medium, x + close.0, top + close.1, "×", p.text_muted);
            x += tab_width + 5;
        }
        x
    }

    /// First seven code lines from `y = 94`; `current` decorates line 4
    /// before its text is drawn.
    fn short_listing(&mut self, current: impl Fn(&mut Self, i32)) {
        let p = *self.palette;
        let mut y = 94;
        for (index, code) in CODE_LINES.iter().take(7).enumerate() {
            let is_current = index == CURRENT_LINE;
            if is_current {
                current(self, y);
            }
            let code_color = match index {
                0 | 2 => p.accent_highlight,
                CURRENT_LINE => p.text_primary,
                _ => p.text_secondary,
            };
            self.code_line(index, y, code, is_current, code_color);
            y += 26;
        }
    }

    /// 4px gold edge on the left of the current line.
    fn current_line_edge(&mut self, y: i32) {
        let left = self.layout.explorer_right;
        let gold = self.palette.accent_primary;
        self.canvas.fill_rect(left - 2, y - 3, left + 1, y + 24, gold);
    }

    fn code_line(&mut self, index: usize, y: i32, code: &str, current: bool, color: Rgb) {
        let p = *self.palette;
        let gutter = self.layout.explorer_right;
        let number_color = if current { p.accent_primary } else { p.text_muted };
        self.text(FontRole::Small, gutter + 45, y, &(index + 1).to_string(), number_color);
        self.text(FontRole::Code, gutter + 75, y, code, color);
    }

    /// Code with a highlighted leading `import` or `function`; the rest of
    /// the line starts `offsets.0` or `offsets.1` pixels further right.
    fn keyword_line(&mut self, code: &str, x: i32, y: i32, offsets: (i32, i32), plain: Rgb) {
        let p = *self.palette;
        if let Some(rest) = code.strip_prefix("import") {
            self.text(FontRole::Code, x, y, "import", p.accent_highlight);
            self.text(FontRole::Code, x + offsets.0, y, rest, p.text_secondary);
        } else if let Some(rest) = code.strip_prefix("function") {
            self.text(FontRole::Code, x, y, "function", p.accent_highlight);
            self.text(FontRole::Code, x + offsets.1, y, rest, p.text_primary);
        } else {
            self.text(FontRole::Code, x, y, code, plain);
        }
    }

    fn glint_row(&mut self, row: GlintRow) {
        let p = *self.palette;
        let left = self.layout.explorer_right;
        let y = (self.layout.command_top + 3) as f32;
        let half = row.stretch / 2.0;
        for i in 0..row.count {
            let x = (left + row.first + i * row.step) as f32;
            for r in (1..=row.radius).rev() {
                let glow = p
                    .bg_secondary
                    .blend(p.accent_highlight, row.strength / f64::from(r));
                let r = r as f32;
                self.canvas.fill_ellipse(x + half, y, r + half, r, glow, None);
            }
        }
    }

    fn command_prompt(&mut self, top: i32) {
        let p = *self.palette;
        let left = self.layout.explorer_right;
        self.text(FontRole::Large, left + 15, top + 12, ">", p.accent_primary);
        self.text(FontRole::Medium, left + 35, top + 14, COMMAND, p.text_primary);
    }

    /// Status labels left to right, each followed by `gap` pixels.
    fn status_items(&mut self, y: i32, items: &[&str], gap: i32) {
        let ink = self.palette.bg_primary;
        let mut x = 15;
        for item in items {
            self.text(FontRole::Small, x, y, item, ink);
            x += self.painter.measure(FontRole::Small, item) + gap;
        }
    }
}
