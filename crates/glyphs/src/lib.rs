//! # Icon glyph loading
//!
//! Reads the glyph inventory of an icon font: every glyph's name and, when
//! it has one, its Unicode code point. Sources are either a compiled font
//! (names from `post`, code points from `cmap`) or a `codepoints.json` map.
//!
//! ## Example
//!
//! ```no_run
//! use icons_dump_glyphs::{InputFormat, load};
//!
//! let glyphs = load("public/font/lishogi.ttf", InputFormat::Auto).unwrap();
//! for (glyph, codepoint) in glyphs.mapped() {
//!     println!("{} U+{:04X}", glyph.name(), codepoint as u32);
//! }
//! ```

mod codepoints;
mod error;
mod font;
mod glyph;

use std::{fs::read, path::Path};

use log::info;

pub use codepoints::CodepointsJson;
pub use error::{Error, Result};
pub use font::FontGlyphs;
pub use glyph::{Glyph, GlyphSet};

/// Anything that can list glyph records.
pub trait GlyphSource {
    /// All glyphs in source order, including those without a code point.
    fn glyphs(&self) -> Result<Vec<Glyph>>;
}

/// How to interpret the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Decide by file extension: `.json` is a codepoints map, anything else a font.
    #[default]
    Auto,
    Font,
    Codepoints,
}

impl InputFormat {
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Codepoints,
                _ => Self::Font,
            },
            other => other,
        }
    }
}

/// Enumerate and sort the glyphs of an in-memory source.
pub fn glyph_set(source: &impl GlyphSource) -> Result<GlyphSet> {
    Ok(GlyphSet::new(source.glyphs()?))
}

/// Parse `data` as `format` and return its sorted glyphs.
///
/// There is no path to inspect here, so [`InputFormat::Auto`] reads a font.
pub fn glyphs_from_bytes(data: &[u8], format: InputFormat) -> Result<GlyphSet> {
    match format {
        InputFormat::Codepoints => glyph_set(&CodepointsJson::from_slice(data)?),
        InputFormat::Font | InputFormat::Auto => glyph_set(&FontGlyphs::new(data)?),
    }
}

/// Read a glyph source from disk and return its sorted glyphs.
pub fn load(path: impl AsRef<Path>, format: InputFormat) -> Result<GlyphSet> {
    let path = path.as_ref();
    let format = format.resolve(path);
    let data = read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let glyphs = glyphs_from_bytes(&data, format)?;
    info!(
        "Loaded {} glyphs ({} mapped) from {}",
        glyphs.len(),
        glyphs.mapped_count(),
        path.display()
    );
    Ok(glyphs)
}
