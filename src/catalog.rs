//! The fixed catalogue of mockup images, grouped into sets.

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::json;

use crate::chrome::{ChromeStyle, Glints};
use crate::error_codes::{CodedError, UNKNOWN_MOCKUP_SET};
use crate::palette::{Palette, PaletteEntry};
use crate::texture::gilt::GildStage;
use crate::texture::{Density, Intensity, TextureStyle};
use crate::zone::{ZonePolicy, ZoneSet};

pub const MOCKUP_WIDTH: u32 = 1400;
pub const MOCKUP_HEIGHT: u32 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MockupSet {
    Elegant,
    Stripes,
    Variants,
    Styles,
    Hybrid,
    Extended,
    ExtendedFixed,
    Classic,
    Glow,
    Visible,
    Contrast,
    Final,
    Vivid,
}

impl MockupSet {
    const ALL: [Self; 13] = [
        Self::Elegant,
        Self::Stripes,
        Self::Variants,
        Self::Styles,
        Self::Hybrid,
        Self::Extended,
        Self::ExtendedFixed,
        Self::Classic,
        Self::Glow,
        Self::Visible,
        Self::Contrast,
        Self::Final,
        Self::Vivid,
    ];

    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Elegant => "elegant",
            Self::Stripes => "stripes",
            Self::Variants => "variants",
            Self::Styles => "styles",
            Self::Hybrid => "hybrid",
            Self::Extended => "extended",
            Self::ExtendedFixed => "extended-fixed",
            Self::Classic => "classic",
            Self::Glow => "glow",
            Self::Visible => "visible",
            Self::Contrast => "contrast",
            Self::Final => "final",
            Self::Vivid => "vivid",
        }
    }

    pub fn from_keyword(value: &str) -> Result<Self> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|set| set.keyword() == wanted)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|set| set.keyword()).collect();
                anyhow!(CodedError::usage(
                    UNKNOWN_MOCKUP_SET,
                    format!("unknown mockup set '{value}'"),
                )
                .with_details(json!({
                    "provided": value,
                    "allowed": allowed,
                })))
            })
    }

    pub fn mockups(self) -> Vec<MockupSpec> {
        match self {
            Self::Elegant => vec![MockupSpec::new(
                "macos_editor_v9_elegant.png",
                2024,
                TextureStyle::Elegant,
            )
            .with_chrome(ChromeStyle::Hairline)],
            Self::Stripes => vec![MockupSpec::new(
                "macos_editor_dark_gold_v3.png",
                0,
                TextureStyle::OrganicStripes,
            )
            .with_chrome(ChromeStyle::Panels)],
            Self::Variants => [
                (
                    "variant1_snake",
                    TextureStyle::SnakeLines {
                        intensity: Intensity(0.08),
                    },
                ),
                (
                    "variant2_branch",
                    TextureStyle::BranchLines {
                        intensity: Intensity(0.06),
                    },
                ),
                (
                    "variant3_bright",
                    TextureStyle::BrightThreads {
                        intensity: Intensity(0.15),
                    },
                ),
                (
                    "variant4_organic",
                    TextureStyle::OrganicFlow {
                        intensity: Intensity(0.07),
                    },
                ),
                ("variant5_mixed", TextureStyle::Mixed),
            ]
            .into_iter()
            .map(|(name, texture)| {
                MockupSpec::new(format!("macos_editor_{name}.png"), 42, texture)
                    .with_chrome(ChromeStyle::Panels)
            })
            .collect(),
            Self::Styles => numbered(
                "style",
                "",
                1,
                100,
                [
                    TextureStyle::Crack,
                    TextureStyle::Geyao,
                    TextureStyle::Neural,
                    TextureStyle::Vine,
                    TextureStyle::Lightning,
                ],
                |_| ZoneSet::none(),
            ),
            Self::Hybrid => [
                (1, "crack_organic", 300, TextureStyle::CrackOrganic),
                (2, "geyao_vine", 400, TextureStyle::GeyaoVine),
                (3, "neural_lightning", 500, TextureStyle::NeuralLightning),
                (4, "organic_gold", 600, TextureStyle::OrganicGold),
                (5, "crack_geyao", 700, TextureStyle::CrackGeyao),
            ]
            .into_iter()
            .map(|(index, name, seed, texture)| {
                MockupSpec::new(format!("macos_editor_hybrid{index}_{name}.png"), seed, texture)
            })
            .collect(),
            Self::Extended => {
                let mut specs = vec![MockupSpec::new(
                    "macos_editor_extended1_explosion.png",
                    1100,
                    TextureStyle::Explosion,
                )
                .with_zones(ZoneSet::editor_text_zones())];
                specs.extend(zone_aware(Density::Sparse, ""));
                specs
            }
            Self::ExtendedFixed => zone_aware(Density::Dense, "_fixed"),
            Self::Classic => vec![MockupSpec::new(
                "macos_editor_dark_gold.png",
                0,
                TextureStyle::Plain,
            )
            .with_chrome(ChromeStyle::Gem)],
            Self::Glow => vec![MockupSpec::new(
                "macos_editor_dark_gold_v2.png",
                42,
                TextureStyle::GemStripes,
            )
            .with_chrome(ChromeStyle::Glow)],
            Self::Visible => vec![gilded(5, GildStage::Visible, 123)],
            Self::Contrast => vec![gilded(6, GildStage::Contrast, 456)],
            Self::Final => vec![gilded(7, GildStage::Final, 789)],
            Self::Vivid => vec![gilded(8, GildStage::Vivid, 999)],
        }
    }
}

/// `macos_editor_{prefix}{n}_{keyword}{suffix}.png`, seeds stepping by 100.
fn numbered<const N: usize>(
    prefix: &str,
    suffix: &str,
    first_index: usize,
    first_seed: u64,
    textures: [TextureStyle; N],
    zones: impl Fn(TextureStyle) -> ZoneSet,
) -> Vec<MockupSpec> {
    textures
        .into_iter()
        .enumerate()
        .map(|(index, texture)| {
            let file_name = format!(
                "macos_editor_{prefix}{}_{}{suffix}.png",
                first_index + index,
                texture.keyword()
            );
            MockupSpec::new(file_name, first_seed + 100 * index as u64, texture)
                .with_zones(zones(texture))
        })
        .collect()
}

/// `macos_editor_v{n}_{stage}.png`; later stages get stronger glints and
/// the last drops the filled panels altogether.
fn gilded(index: u32, stage: GildStage, seed: u64) -> MockupSpec {
    let chrome = match stage {
        GildStage::Visible => ChromeStyle::Filled {
            glints: Glints::Soft,
        },
        GildStage::Contrast => ChromeStyle::Filled {
            glints: Glints::Strong,
        },
        GildStage::Final => ChromeStyle::Filled {
            glints: Glints::Intense,
        },
        GildStage::Vivid => ChromeStyle::Outlined,
    };
    let name = stage.keyword().trim_start_matches("gilded-");
    MockupSpec::new(
        format!("macos_editor_v{index}_{name}.png"),
        seed,
        TextureStyle::Gilded { stage },
    )
    .with_chrome(chrome)
}

/// Extended styles 2 to 10; sparse ones avoid all editor text, dense ones
/// only the code pane core.
fn zone_aware(density: Density, suffix: &str) -> Vec<MockupSpec> {
    let textures = [
        TextureStyle::Galaxy { density },
        TextureStyle::Ripple { density },
        TextureStyle::Feather { density },
        TextureStyle::Spiderweb { density },
        TextureStyle::Circuit { density },
        TextureStyle::Crystal { density },
        TextureStyle::Magma { density },
        TextureStyle::StarTrails { density },
        TextureStyle::Dandelion { density },
    ];
    numbered("extended", suffix, 2, 1200, textures, |texture| match density {
        Density::Sparse => ZoneSet::editor_text_zones(),
        Density::Dense => match texture {
            TextureStyle::Galaxy { .. } => {
                ZoneSet::code_pane_core().with_policy(ZonePolicy::Thin { skip: 0.7 })
            }
            _ => ZoneSet::code_pane_core(),
        },
    })
}

/// One output image: texture, zones and optional chrome on a fixed canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockupSpec {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub texture: TextureStyle,
    pub zones: ZoneSet,
    pub chrome: Option<ChromeStyle>,
}

impl MockupSpec {
    pub fn new(file_name: impl Into<String>, seed: u64, texture: TextureStyle) -> Self {
        Self {
            file_name: file_name.into(),
            width: MOCKUP_WIDTH,
            height: MOCKUP_HEIGHT,
            seed,
            texture,
            zones: ZoneSet::none(),
            chrome: None,
        }
    }

    pub fn with_zones(mut self, zones: ZoneSet) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_chrome(mut self, chrome: ChromeStyle) -> Self {
        self.chrome = Some(chrome);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub set: MockupSet,
    pub mockups: Vec<MockupSpec>,
}

pub fn catalog() -> Vec<CatalogEntry> {
    MockupSet::all()
        .iter()
        .map(|&set| CatalogEntry {
            set,
            mockups: set.mockups(),
        })
        .collect()
}

/// Everything `list --json` prints: the named colours and every set.
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub palette: Vec<PaletteEntry>,
    pub sets: Vec<CatalogEntry>,
}

impl CatalogListing {
    pub fn new(palette: &Palette) -> Self {
        Self {
            palette: palette.entries(),
            sets: catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{catalog, CatalogListing, MockupSet, MOCKUP_HEIGHT, MOCKUP_WIDTH};
    use crate::chrome::{ChromeStyle, Glints};
    use crate::palette::Palette;
    use crate::texture::gilt::GildStage;
    use crate::texture::TextureStyle;
    use crate::error_codes::{find_coded_error, UNKNOWN_MOCKUP_SET};
    use crate::zone::ZonePolicy;

    fn names(set: MockupSet) -> Vec<String> {
        set.mockups().into_iter().map(|spec| spec.file_name).collect()
    }

    #[test]
    fn keywords_round_trip() {
        for &set in MockupSet::all() {
            assert_eq!(MockupSet::from_keyword(set.keyword()).unwrap(), set);
        }
        assert_eq!(
            MockupSet::from_keyword(" Extended-Fixed ").unwrap(),
            MockupSet::ExtendedFixed
        );
    }

    #[test]
    fn unknown_set_is_a_coded_error() {
        let error = MockupSet::from_keyword("vaporwave").unwrap_err();
        let coded = find_coded_error(&error).expect("coded");
        assert_eq!(coded.code, UNKNOWN_MOCKUP_SET);
        let details = coded.details.as_ref().unwrap();
        assert_eq!(details["provided"], "vaporwave");
        assert_eq!(details["allowed"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn file_names_follow_the_numbering() {
        assert_eq!(
            names(MockupSet::Styles),
            [
                "macos_editor_style1_crack.png",
                "macos_editor_style2_geyao.png",
                "macos_editor_style3_neural.png",
                "macos_editor_style4_vine.png",
                "macos_editor_style5_lightning.png",
            ]
        );
        let extended = names(MockupSet::Extended);
        assert_eq!(extended.len(), 10);
        assert_eq!(extended[0], "macos_editor_extended1_explosion.png");
        assert_eq!(extended[1], "macos_editor_extended2_galaxy.png");
        assert_eq!(extended[9], "macos_editor_extended10_dandelion.png");
        let fixed = names(MockupSet::ExtendedFixed);
        assert_eq!(fixed.len(), 9);
        assert_eq!(fixed[0], "macos_editor_extended2_galaxy_fixed.png");
        assert_eq!(fixed[7], "macos_editor_extended9_startrails_fixed.png");
        assert_eq!(names(MockupSet::Variants)[4], "macos_editor_variant5_mixed.png");
        assert_eq!(names(MockupSet::Hybrid)[1], "macos_editor_hybrid2_geyao_vine.png");
        assert_eq!(names(MockupSet::Classic), ["macos_editor_dark_gold.png"]);
        assert_eq!(names(MockupSet::Glow), ["macos_editor_dark_gold_v2.png"]);
        assert_eq!(names(MockupSet::Visible), ["macos_editor_v5_visible.png"]);
        assert_eq!(names(MockupSet::Contrast), ["macos_editor_v6_contrast.png"]);
        assert_eq!(names(MockupSet::Final), ["macos_editor_v7_final.png"]);
        assert_eq!(names(MockupSet::Vivid), ["macos_editor_v8_vivid.png"]);
    }

    #[test]
    fn seeds_match_each_set() {
        let seeds = |set: MockupSet| set.mockups().iter().map(|spec| spec.seed).collect::<Vec<_>>();
        assert_eq!(seeds(MockupSet::Elegant), [2024]);
        assert_eq!(seeds(MockupSet::Variants), [42; 5]);
        assert_eq!(seeds(MockupSet::Styles), [100, 200, 300, 400, 500]);
        assert_eq!(seeds(MockupSet::Hybrid), [300, 400, 500, 600, 700]);
        assert_eq!(
            seeds(MockupSet::Extended),
            [1100, 1200, 1300, 1400, 1500, 1600, 1700, 1800, 1900, 2000]
        );
        assert_eq!(seeds(MockupSet::ExtendedFixed)[0], 1200);
        assert_eq!(seeds(MockupSet::Classic), [0]);
        assert_eq!(seeds(MockupSet::Glow), [42]);
        assert_eq!(seeds(MockupSet::Visible), [123]);
        assert_eq!(seeds(MockupSet::Contrast), [456]);
        assert_eq!(seeds(MockupSet::Final), [789]);
        assert_eq!(seeds(MockupSet::Vivid), [999]);
    }

    #[test]
    fn every_file_name_is_unique_and_full_size() {
        let mut seen = HashSet::new();
        for entry in catalog() {
            for spec in entry.mockups {
                assert_eq!((spec.width, spec.height), (MOCKUP_WIDTH, MOCKUP_HEIGHT));
                assert!(seen.insert(spec.file_name.clone()), "{}", spec.file_name);
            }
        }
        assert_eq!(seen.len(), 1 + 1 + 5 + 5 + 5 + 10 + 9 + 6);
    }

    #[test]
    fn zones_and_chrome_per_set() {
        for spec in MockupSet::Extended.mockups() {
            assert_eq!(spec.zones.zones().len(), 7);
            assert!(spec.chrome.is_none());
        }
        let fixed = MockupSet::ExtendedFixed.mockups();
        assert_eq!(fixed[0].zones.policy(), ZonePolicy::Thin { skip: 0.7 });
        assert!(fixed[1..].iter().all(|spec| spec.zones.is_hard()));
        assert_eq!(MockupSet::Elegant.mockups()[0].chrome, Some(ChromeStyle::Hairline));
        assert!(MockupSet::Styles.mockups().iter().all(|spec| spec.zones.is_empty()));
    }

    #[test]
    fn gilded_sets_pair_stage_with_chrome() {
        let only = |set: MockupSet| set.mockups().remove(0);
        let visible = only(MockupSet::Visible);
        assert_eq!(
            visible.texture,
            TextureStyle::Gilded {
                stage: GildStage::Visible
            }
        );
        assert_eq!(
            visible.chrome,
            Some(ChromeStyle::Filled {
                glints: Glints::Soft
            })
        );
        assert_eq!(
            only(MockupSet::Final).chrome,
            Some(ChromeStyle::Filled {
                glints: Glints::Intense
            })
        );
        assert_eq!(only(MockupSet::Vivid).chrome, Some(ChromeStyle::Outlined));
        let classic = only(MockupSet::Classic);
        assert_eq!(classic.texture, TextureStyle::Plain);
        assert_eq!(classic.chrome, Some(ChromeStyle::Gem));
        assert_eq!(only(MockupSet::Glow).texture, TextureStyle::GemStripes);
        for set in [MockupSet::Classic, MockupSet::Glow, MockupSet::Vivid] {
            assert!(only(set).zones.is_empty());
        }
    }

    #[test]
    fn listing_carries_palette_and_every_set() {
        let listing = CatalogListing::new(&Palette::dark_gold());
        assert_eq!(listing.palette.len(), 14);
        assert_eq!(listing.sets.len(), MockupSet::all().len());
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["sets"][7]["set"], "classic");
        assert_eq!(json["sets"][12]["mockups"][0]["chrome"], "outlined");
        assert_eq!(json["sets"][9]["mockups"][0]["chrome"]["filled"]["glints"], "soft");
    }
}
