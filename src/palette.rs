use anyhow::{anyhow, bail, Result};
use serde::Serialize;

/// Opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(raw: &str) -> Result<Self> {
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            bail!("invalid hex colour '{raw}': expected #RRGGBB");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| anyhow!("invalid hex colour '{raw}': non-hex digit"))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Darken (or brighten) by multiplying every channel, truncating toward zero.
    ///
    /// This stands in for alpha over a dark background: a dim accent reads as
    /// a translucent one without any compositing.
    pub fn scaled(self, brightness: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * brightness).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Add `amount` to every channel, saturating at white.
    pub fn lightened(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Linear mix from `self` toward `over` by `alpha` in `[0, 1]`.
    pub fn blend(self, over: Rgb, alpha: f64) -> Self {
        let mix = |bg: u8, fg: u8| {
            (f64::from(bg) * (1.0 - alpha) + f64::from(fg) * alpha).clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, over.r),
            mix(self.g, over.g),
            mix(self.b, over.b),
        )
    }

    pub fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// The gold accents, lightest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Highlight,
    Bright,
    Light,
}

/// The dark/gold editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Rgb,
    pub bg_secondary: Rgb,
    pub bg_tertiary: Rgb,
    pub accent_primary: Rgb,
    pub accent_secondary: Rgb,
    pub accent_highlight: Rgb,
    pub accent_bright: Rgb,
    pub accent_light: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub traffic_red: Rgb,
    pub traffic_yellow: Rgb,
    pub traffic_green: Rgb,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: String,
}

impl Palette {
    pub const fn dark_gold() -> Self {
        Self {
            bg_primary: Rgb::new(0x0F, 0x17, 0x2A),
            bg_secondary: Rgb::new(0x1E, 0x29, 0x3B),
            bg_tertiary: Rgb::new(0x33, 0x41, 0x55),
            accent_primary: Rgb::new(0xCA, 0x8A, 0x04),
            accent_secondary: Rgb::new(0xB4, 0x53, 0x09),
            accent_highlight: Rgb::new(0xF5, 0x9E, 0x0B),
            accent_bright: Rgb::new(0xFC, 0xD3, 0x4D),
            accent_light: Rgb::new(0xFD, 0xE6, 0x8A),
            text_primary: Rgb::new(0xE8, 0xF0, 0xFF),
            text_secondary: Rgb::new(0x94, 0xA3, 0xB8),
            text_muted: Rgb::new(0x64, 0x74, 0x8B),
            traffic_red: Rgb::new(0xFF, 0x5F, 0x57),
            traffic_yellow: Rgb::new(0xFF, 0xBD, 0x2E),
            traffic_green: Rgb::new(0x28, 0xCA, 0x42),
        }
    }

    pub fn accent(&self, accent: Accent) -> Rgb {
        match accent {
            Accent::Primary => self.accent_primary,
            Accent::Secondary => self.accent_secondary,
            Accent::Highlight => self.accent_highlight,
            Accent::Bright => self.accent_bright,
            Accent::Light => self.accent_light,
        }
    }

    fn named(&self) -> [(&'static str, Rgb); 14] {
        [
            ("bg_primary", self.bg_primary),
            ("bg_secondary", self.bg_secondary),
            ("bg_tertiary", self.bg_tertiary),
            ("accent_primary", self.accent_primary),
            ("accent_secondary", self.accent_secondary),
            ("accent_highlight", self.accent_highlight),
            ("accent_bright", self.accent_bright),
            ("accent_light", self.accent_light),
            ("text_primary", self.text_primary),
            ("text_secondary", self.text_secondary),
            ("text_muted", self.text_muted),
            ("traffic_red", self.traffic_red),
            ("traffic_yellow", self.traffic_yellow),
            ("traffic_green", self.traffic_green),
        ]
    }

    pub fn entries(&self) -> Vec<PaletteEntry> {
        self.named()
            .into_iter()
            .map(|(name, color)| PaletteEntry {
                name,
                hex: color.to_hex(),
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark_gold()
    }
}
