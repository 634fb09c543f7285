//! Gilded backgrounds.
//!
//! Each stage layers the same families in a fixed order: long curves,
//! meanders (vivid only), a canopy of branching trees, hairline threads and
//! finally diagonal rules that cross the whole window. Later stages add more
//! of everything and brighten it.

use std::f64::consts::TAU;
use std::ops::Range;

use serde::Serialize;

use super::branch::{self, BranchParams, ChildSlot, Curve, Fanout, Knot};
use super::walk::{self, CurveField, Threads};
use super::{pt, Shade, Sketch};
use crate::palette::Accent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GildStage {
    Visible,
    Contrast,
    Final,
    Vivid,
}

impl GildStage {
    pub const ALL: [Self; 4] = [Self::Visible, Self::Contrast, Self::Final, Self::Vivid];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Visible => "gilded-visible",
            Self::Contrast => "gilded-contrast",
            Self::Final => "gilded-final",
            Self::Vivid => "gilded-vivid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curves {
    /// Faint Bezier hops washed into the background.
    Hops,
    Field(CurveField),
}

/// Maximum tree depth: fixed for the stage, or drawn per root after its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Fixed(u32),
    Drawn(i32, i32),
}

/// Stroke width as a function of depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taper {
    /// `max(1, 2 - depth / 2)`
    Halving,
    /// `max(1, 3 - depth)`
    Steep,
}

impl Taper {
    fn width(self, depth: u32) -> f32 {
        let width = match self {
            Self::Halving => 2_u32.saturating_sub(depth / 2),
            Self::Steep => 3_u32.saturating_sub(depth),
        };
        width.max(1) as f32
    }
}

/// Branching trees in `accent_primary`, fading by `fade` per level.
#[derive(Debug, Clone, PartialEq)]
pub struct Canopy {
    pub roots: usize,
    pub length: (i32, i32),
    pub depth: Depth,
    pub branches: BranchParams,
    pub shade: Shade,
    pub brightness: f64,
    pub fade: f64,
    pub taper: Taper,
}

/// Straight rules from one horizontal edge to the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagonals {
    pub count: usize,
    /// Start `x` may fall this far outside either edge.
    pub pad: i32,
    /// End `x` drifts up to this far from the start.
    pub drift: i32,
    /// Start on a randomly picked edge instead of always the top.
    pub either_edge: bool,
    pub brightness: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GildTuning {
    pub curves: Curves,
    pub meanders: bool,
    pub canopy: Canopy,
    pub threads: Threads,
    pub diagonals: Option<Diagonals>,
}

impl GildTuning {
    pub fn for_stage(stage: GildStage) -> Self {
        match stage {
            GildStage::Visible => Self {
                curves: Curves::Hops,
                meanders: false,
                canopy: Canopy {
                    roots: 8,
                    length: (100, 180),
                    depth: Depth::Fixed(4),
                    branches: BranchParams {
                        max_depth: 4,
                        min_length: 20.0,
                        curve: Curve::Kink { jitter: 15 },
                        spawn_below: u32::MAX,
                        fanout: Fanout::Slots(vec![
                            ChildSlot {
                                chance: 0.7,
                                turn: 0.4..0.9,
                                mirror: false,
                                shrink: 0.5..0.75,
                            },
                            ChildSlot {
                                chance: 0.5,
                                turn: 0.4..0.9,
                                mirror: true,
                                shrink: 0.4..0.65,
                            },
                        ]),
                        knot: None,
                    },
                    shade: Shade::Wash,
                    brightness: 0.2,
                    fade: 0.03,
                    taper: Taper::Halving,
                },
                threads: Threads::VISIBLE,
                diagonals: None,
            },
            GildStage::Contrast => Self {
                curves: Curves::Field(CurveField::CONTRAST),
                meanders: false,
                canopy: Canopy {
                    roots: 10,
                    length: (80, 150),
                    depth: Depth::Drawn(3, 5),
                    branches: counted_branches(15.0, 20, 20, -1.0..1.0, 0.5..0.8, None),
                    shade: Shade::Dim,
                    brightness: 0.4,
                    fade: 0.06,
                    taper: Taper::Steep,
                },
                threads: Threads::CONTRAST,
                diagonals: Some(Diagonals {
                    count: 15,
                    pad: 0,
                    drift: 200,
                    either_edge: false,
                    brightness: (0.15, 0.3),
                }),
            },
            GildStage::Final => Self {
                curves: Curves::Field(CurveField::FINAL),
                meanders: false,
                canopy: Canopy {
                    roots: 12,
                    length: (60, 120),
                    depth: Depth::Fixed(4),
                    branches: counted_branches(12.0, 25, 15, -1.2..1.2, 0.45..0.75, None),
                    shade: Shade::Dim,
                    brightness: 0.5,
                    fade: 0.08,
                    taper: Taper::Halving,
                },
                threads: Threads::FINAL,
                diagonals: Some(Diagonals {
                    count: 20,
                    pad: 100,
                    drift: 300,
                    either_edge: true,
                    brightness: (0.2, 0.4),
                }),
            },
            GildStage::Vivid => {
                let knot = Knot {
                    below: 4,
                    chance: 0.6,
                    size: (2, 4),
                    tint: Accent::Highlight,
                    brightness: 0.8,
                };
                Self {
                    curves: Curves::Field(CurveField::VIVID),
                    meanders: true,
                    canopy: Canopy {
                        roots: 15,
                        length: (50, 100),
                        depth: Depth::Fixed(5),
                        branches: counted_branches(
                            10.0,
                            30,
                            12,
                            -1.0..1.0,
                            0.4..0.7,
                            Some(knot),
                        ),
                        shade: Shade::Dim,
                        brightness: 0.55,
                        fade: 0.08,
                        taper: Taper::Halving,
                    },
                    threads: Threads::VIVID,
                    diagonals: Some(Diagonals {
                        count: 25,
                        pad: 150,
                        drift: 400,
                        either_edge: true,
                        brightness: (0.25, 0.5),
                    }),
                }
            }
        }
    }
}

/// Bezier trees that grow one to three children, two being most likely.
fn counted_branches(
    min_length: f64,
    jitter: i32,
    samples: u32,
    turn: Range<f64>,
    shrink: Range<f64>,
    knot: Option<Knot>,
) -> BranchParams {
    BranchParams {
        max_depth: 0,
        min_length,
        curve: Curve::Bezier { jitter, samples },
        spawn_below: u32::MAX,
        fanout: Fanout::Count {
            counts: &[1, 2, 2, 3],
            turn,
            shrink,
        },
        knot,
    }
}

pub fn gilded(sketch: &mut Sketch<'_>, stage: GildStage) {
    let tuning = GildTuning::for_stage(stage);
    match &tuning.curves {
        Curves::Hops => walk::bezier_hops(sketch),
        Curves::Field(field) => walk::field_curves(sketch, field),
    }
    if tuning.meanders {
        walk::meanders(sketch);
    }
    canopy(sketch, &tuning.canopy);
    walk::threads(sketch, &tuning.threads);
    if let Some(diagonals) = &tuning.diagonals {
        diagonal_rules(sketch, diagonals);
    }
}

fn canopy(sketch: &mut Sketch<'_>, canopy: &Canopy) {
    let palette = sketch.palette;
    let base = palette.accent_primary;
    let look = |depth: u32| {
        let amount = canopy.brightness - f64::from(depth) * canopy.fade;
        (canopy.shade.apply(palette, base, amount), canopy.taper.width(depth))
    };
    let (w, h) = (sketch.width, sketch.height);
    let mut params = canopy.branches.clone();

    for _ in 0..canopy.roots {
        let x = sketch.rng.range(0, w);
        let y = sketch.rng.range(0, h);
        let angle = sketch.rng.uniform(0.0, TAU);
        let length = sketch.rng.range(canopy.length.0, canopy.length.1);
        params.max_depth = match canopy.depth {
            Depth::Fixed(depth) => depth,
            Depth::Drawn(low, high) => sketch.rng.range(low, high).max(0) as u32,
        };
        branch::grow(sketch, &params, &look, (x, y), angle, f64::from(length), 0);
    }
}

fn diagonal_rules(sketch: &mut Sketch<'_>, diagonals: &Diagonals) {
    let palette = sketch.palette;
    let (w, h) = (sketch.width, sketch.height);

    for _ in 0..diagonals.count {
        let x1 = sketch.rng.range(-diagonals.pad, w + diagonals.pad);
        let y1 = if diagonals.either_edge {
            sketch.rng.pick([0, h])
        } else {
            0
        };
        let x2 = x1 + sketch.rng.range(-diagonals.drift, diagonals.drift);
        let y2 = if y1 == 0 { h } else { 0 };
        let amount = sketch
            .rng
            .uniform(diagonals.brightness.0, diagonals.brightness.1);
        let color = palette.accent_secondary.scaled(amount);
        sketch.segment(pt(x1, y1), pt(x2, y2), color, 1.0);
    }
}
