//! Glyph enumeration from a `codepoints.json` map.
//!
//! The file is a flat JSON object of glyph name to code point, as written by
//! icon font builders:
//!
//! ```json
//! { "king": 9812, "rook_promoted": 9814, "unused": -1 }
//! ```
//!
//! A negative value or `null` marks a glyph with no Unicode mapping.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Error, GlyphSource, Result, glyph::Glyph};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CodepointsJson(BTreeMap<String, Option<i64>>);

impl CodepointsJson {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl GlyphSource for CodepointsJson {
    fn glyphs(&self) -> Result<Vec<Glyph>> {
        self.0
            .iter()
            .map(|(name, value)| {
                let codepoint = match *value {
                    None => None,
                    Some(cp) if cp < 0 => None,
                    Some(cp) => Some(
                        u32::try_from(cp)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or_else(|| Error::InvalidCodepoint { name: name.clone(), codepoint: cp })?,
                    ),
                };
                Ok(Glyph::new(name.as_str(), codepoint))
            })
            .collect()
    }
}
