//! Seeded procedural renderer for dark/gold code editor mockups.

pub mod builtin_font;
pub mod canvas;
pub mod catalog;
pub mod chrome;
pub mod error_codes;
pub mod fonts;
pub mod logging;
pub mod palette;
pub mod render;
pub mod rng;
pub mod text;
pub mod texture;
pub mod zone;
