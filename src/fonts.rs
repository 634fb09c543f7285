use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};
use sha2::{Digest, Sha256};

/// The four text styles the chrome uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Large,
    Medium,
    Small,
    Code,
}

impl FontRole {
    pub const ALL: [Self; 4] = [Self::Large, Self::Medium, Self::Small, Self::Code];

    pub fn px(self) -> f32 {
        match self {
            Self::Large => 16.0,
            Self::Medium => 13.0,
            Self::Small => 11.0,
            Self::Code => 14.0,
        }
    }

    fn builtin_scale(self) -> u32 {
        match self {
            Self::Large => 2,
            Self::Medium | Self::Small | Self::Code => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Display,
    Text,
    Mono,
}

/// Candidate font files per family, tried in order.
#[derive(Debug, Clone, Default)]
pub struct FontSearch {
    pub display: Vec<PathBuf>,
    pub text: Vec<PathBuf>,
    pub mono: Vec<PathBuf>,
}

impl FontSearch {
    /// macOS system fonts first, then common Linux packages.
    pub fn system() -> Self {
        let paths = |list: &[&str]| list.iter().map(PathBuf::from).collect::<Vec<_>>();
        Self {
            display: paths(&[
                "/System/Library/Fonts/SFProDisplay-Regular.otf",
                "/System/Library/Fonts/SFNS.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            ]),
            text: paths(&[
                "/System/Library/Fonts/SFProText-Regular.otf",
                "/System/Library/Fonts/SFNS.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            ]),
            mono: paths(&[
                "/System/Library/Fonts/Menlo.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
            ]),
        }
    }

    fn candidates(&self, family: Family) -> &[PathBuf] {
        match family {
            Family::Display => &self.display,
            Family::Text => &self.text,
            Family::Mono => &self.mono,
        }
    }
}

#[derive(Clone)]
pub enum Face {
    Vector { font: Arc<Font>, px: f32 },
    Builtin { scale: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOrigin {
    System,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub path: PathBuf,
    pub sha256: String,
}

/// One face per [`FontRole`]. Either every role has a system face or every
/// role uses the built-in bitmap font; the two are never mixed.
#[derive(Clone)]
pub struct FontSet {
    large: Face,
    medium: Face,
    small: Face,
    code: Face,
    origin: FontOrigin,
    sources: Vec<LoadedFont>,
}

impl FontSet {
    /// Load system faces, falling back to the built-in font on any failure.
    pub fn load(search: &FontSearch) -> Self {
        match Self::try_load(search) {
            Ok(set) => {
                for source in &set.sources {
                    log::debug!("loaded font {} (sha256={})", source.path.display(), source.sha256);
                }
                set
            }
            Err(error) => {
                log::warn!("{error:#}; falling back to the built-in bitmap font");
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        let face = |role: FontRole| Face::Builtin {
            scale: role.builtin_scale(),
        };
        Self {
            large: face(FontRole::Large),
            medium: face(FontRole::Medium),
            small: face(FontRole::Small),
            code: face(FontRole::Code),
            origin: FontOrigin::Builtin,
            sources: Vec::new(),
        }
    }

    pub fn try_load(search: &FontSearch) -> Result<Self> {
        let display = load_family(search, Family::Display)?;
        let text = load_family(search, Family::Text)?;
        let mono = load_family(search, Family::Mono)?;

        let vector = |font: &Arc<Font>, role: FontRole| Face::Vector {
            font: Arc::clone(font),
            px: role.px(),
        };
        let mut sources = vec![display.1, text.1, mono.1];
        sources.dedup_by(|a, b| a.path == b.path);

        Ok(Self {
            large: vector(&display.0, FontRole::Large),
            medium: vector(&text.0, FontRole::Medium),
            small: vector(&text.0, FontRole::Small),
            code: vector(&mono.0, FontRole::Code),
            origin: FontOrigin::System,
            sources,
        })
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Large => &self.large,
            FontRole::Medium => &self.medium,
            FontRole::Small => &self.small,
            FontRole::Code => &self.code,
        }
    }

    pub fn origin(&self) -> FontOrigin {
        self.origin
    }

    pub fn sources(&self) -> &[LoadedFont] {
        &self.sources
    }
}

fn load_family(search: &FontSearch, family: Family) -> Result<(Arc<Font>, LoadedFont)> {
    let candidates = search.candidates(family);
    let mut last_error = None;
    for path in candidates {
        match load_font_file(path) {
            Ok(found) => return Ok(found),
            Err(error) => {
                log::debug!("skipping font candidate: {error:#}");
                last_error = Some(error);
            }
        }
    }
    let error = last_error.unwrap_or_else(|| anyhow!("no candidates configured"));
    Err(error.context(format!(
        "no usable {family:?} font among {} candidate(s)",
        candidates.len()
    )))
}

fn load_font_file(path: &Path) -> Result<(Arc<Font>, LoadedFont)> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read font file '{}'", path.display()))?;
    let sha256 = sha256_hex(&bytes);
    let settings = FontSettings {
        collection_index: 0,
        ..FontSettings::default()
    };
    let font = Font::from_bytes(bytes, settings)
        .map_err(|error| anyhow!("failed to parse font '{}': {error}", path.display()))?;
    Ok((
        Arc::new(font),
        LoadedFont {
            path: path.to_path_buf(),
            sha256,
        },
    ))
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{sha256_hex, Face, FontOrigin, FontRole, FontSearch, FontSet};

    #[test]
    fn empty_search_falls_back_to_builtin() {
        let fonts = FontSet::load(&FontSearch::default());
        assert_eq!(fonts.origin(), FontOrigin::Builtin);
        assert!(fonts.sources().is_empty());
        for role in FontRole::ALL {
            assert!(matches!(fonts.face(role), Face::Builtin { .. }));
        }
    }

    #[test]
    fn garbage_font_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"definitely not a font").unwrap();
        let search = FontSearch {
            display: vec![bogus.clone()],
            text: vec![bogus.clone()],
            mono: vec![bogus],
        };
        let error = FontSet::try_load(&search).err().expect("garbage must not parse");
        assert!(format!("{error:#}").contains("Display"));
        assert_eq!(FontSet::load(&search).origin(), FontOrigin::Builtin);
    }

    #[test]
    fn missing_family_is_all_or_nothing() {
        let search = FontSearch {
            display: FontSearch::system().display,
            text: FontSearch::system().text,
            mono: vec![PathBuf::from("/nonexistent/mono.ttf")],
        };
        let fonts = FontSet::load(&search);
        assert_eq!(fonts.origin(), FontOrigin::Builtin);
        assert!(matches!(fonts.face(FontRole::Large), Face::Builtin { scale: 2 }));
    }

    #[test]
    fn sha256_is_lowercase_hex() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
