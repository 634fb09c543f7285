//! Reserved "text zones" that decorative textures must keep clear of.
//!
//! Two layers of protection exist. Generators ask [`ZoneSet::admits`] before
//! emitting a point, which reproduces the skip/shorten behaviour per style.
//! For [`ZonePolicy::Suppress`] sets the painter additionally rasterises a
//! [`Mask`] so a segment whose endpoints are both outside a zone still cannot
//! deposit pixels inside it.

use serde::Serialize;
use tiny_skia::Mask;

use crate::rng::SeededRng;

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Zone {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (x, y) = (self.x as f32, self.y as f32);
        x <= px && px <= x + self.w as f32 && y <= py && py <= y + self.h as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ZonePolicy {
    /// Nothing decorative may land inside.
    Suppress,
    /// Points inside are dropped with probability `skip`.
    Thin { skip: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSet {
    zones: Vec<Zone>,
    policy: ZonePolicy,
}

impl ZoneSet {
    pub fn none() -> Self {
        Self {
            zones: Vec::new(),
            policy: ZonePolicy::Suppress,
        }
    }

    pub fn suppress(zones: impl Into<Vec<Zone>>) -> Self {
        Self {
            zones: zones.into(),
            policy: ZonePolicy::Suppress,
        }
    }

    pub fn thin(zones: impl Into<Vec<Zone>>, skip: f64) -> Self {
        Self {
            zones: zones.into(),
            policy: ZonePolicy::Thin {
                skip: skip.clamp(0.0, 1.0),
            },
        }
    }

    /// Every text-bearing region of the 1400x900 editor layout.
    pub fn editor_text_zones() -> Self {
        Self::suppress([
            Zone::new(0, 0, 220, 900),
            Zone::new(220, 38, 900, 36),
            Zone::new(220, 74, 60, 760),
            Zone::new(280, 74, 840, 760),
            Zone::new(1120, 74, 280, 760),
            Zone::new(220, 834, 900, 46),
            Zone::new(0, 880, 1400, 20),
        ])
    }

    /// Only the code pane body.
    pub fn code_pane_core() -> Self {
        Self::suppress([Zone::new(280, 100, 840, 750)])
    }

    pub fn with_policy(mut self, policy: ZonePolicy) -> Self {
        self.policy = match policy {
            ZonePolicy::Thin { skip } => ZonePolicy::Thin {
                skip: skip.clamp(0.0, 1.0),
            },
            ZonePolicy::Suppress => ZonePolicy::Suppress,
        };
        self
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn policy(&self) -> ZonePolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.zones.iter().any(|zone| zone.contains(x, y))
    }

    /// Whether a generator may place a point at `(x, y)`.
    ///
    /// The RNG is only consulted for thinned points that fall inside a zone,
    /// so styles without zones draw the exact same sequence either way.
    pub fn admits(&self, x: f32, y: f32, rng: &mut SeededRng) -> bool {
        if !self.contains(x, y) {
            return true;
        }
        match self.policy {
            ZonePolicy::Suppress => false,
            ZonePolicy::Thin { skip } => !rng.chance(skip),
        }
    }

    /// Whether the raster mask applies to this set.
    pub fn is_hard(&self) -> bool {
        !self.zones.is_empty() && self.policy == ZonePolicy::Suppress
    }

    /// Coverage mask that is opaque everywhere except suppressed zone pixels.
    ///
    /// Returns `None` when the set is empty, thinned, or the size is degenerate.
    pub fn build_mask(&self, width: u32, height: u32) -> Option<Mask> {
        if !self.is_hard() {
            return None;
        }
        let mut mask = Mask::new(width, height)?;
        let data = mask.data_mut();
        data.fill(255);

        let stride = width as usize;
        for zone in &self.zones {
            let Some((x0, x1)) = clamp_span(zone.x, zone.w, width) else {
                continue;
            };
            let Some((y0, y1)) = clamp_span(zone.y, zone.h, height) else {
                continue;
            };
            for y in y0..=y1 {
                let row = y * stride;
                data[row + x0..=row + x1].fill(0);
            }
        }
        Some(mask)
    }
}

impl Default for ZoneSet {
    fn default() -> Self {
        Self::none()
    }
}

/// Inclusive pixel span `[start, start + len]` clipped to `[0, limit)`.
fn clamp_span(start: i32, len: i32, limit: u32) -> Option<(usize, usize)> {
    if limit == 0 || len < 0 {
        return None;
    }
    let max = i64::from(limit) - 1;
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(len)).min(max);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}
