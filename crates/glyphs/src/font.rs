//! Glyph enumeration from TrueType/OpenType binaries.

use std::{collections::BTreeMap, fmt::Formatter};

use log::{debug, warn};
use read_fonts::{
    FontRef, TableProvider,
    tables::cmap::{Cmap, CmapSubtable, PlatformId},
    types::GlyphId16,
};

use crate::{GlyphSource, Result, glyph::Glyph};

/// A parsed font whose glyph names come from `post` and code points from `cmap`.
pub struct FontGlyphs<'a> {
    data: &'a [u8],
    inner: FontRef<'a>,
}

impl std::fmt::Debug for FontGlyphs<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontGlyphs").field("data_len", &self.data.len()).finish_non_exhaustive()
    }
}

impl<'a> TryFrom<&'a [u8]> for FontGlyphs<'a> {
    type Error = crate::Error;

    fn try_from(data: &'a [u8]) -> Result<Self> {
        Self::new(data)
    }
}

impl<'a> FontGlyphs<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Ok(Self { data, inner: FontRef::new(data)? })
    }

    /// Lowest code point per glyph id, from the best Unicode cmap subtable.
    fn codepoints(&self) -> BTreeMap<u32, char> {
        let Ok(cmap) = self.inner.cmap() else {
            warn!("Font has no cmap table; no glyph will be exported");
            return BTreeMap::new();
        };
        let Some(subtable) = find_unicode_subtable(&cmap) else {
            warn!("Font has no Unicode cmap subtable; no glyph will be exported");
            return BTreeMap::new();
        };

        let mut by_gid: BTreeMap<u32, char> = BTreeMap::new();
        for (codepoint, gid) in subtable.iter() {
            let gid = gid.to_u32();
            if gid == 0 {
                continue;
            }
            let Some(ch) = char::from_u32(codepoint) else {
                warn!("Skipping invalid codepoint {codepoint:#x} for glyph id {gid}");
                continue;
            };
            // Subtables iterate in ascending code point order, so the first one seen is the lowest
            match by_gid.get(&gid) {
                Some(kept) => {
                    debug!(
                        "Glyph id {gid}: keeping U+{:04X}, ignoring U+{:04X}",
                        *kept as u32, ch as u32
                    );
                }
                None => {
                    by_gid.insert(gid, ch);
                }
            }
        }
        by_gid
    }

    /// Number of glyphs: maxp, then post v2, then the highest id cmap reaches.
    fn glyph_count(&self, codepoints: &BTreeMap<u32, char>) -> u32 {
        if let Ok(maxp) = self.inner.maxp() {
            return maxp.num_glyphs() as u32;
        }
        if let Ok(post) = self.inner.post()
            && let Some(count) = post.num_glyphs()
        {
            return count as u32;
        }
        codepoints.keys().next_back().map_or(0, |gid| gid + 1)
    }
}

impl GlyphSource for FontGlyphs<'_> {
    fn glyphs(&self) -> Result<Vec<Glyph>> {
        let codepoints = self.codepoints();
        let count = self.glyph_count(&codepoints);
        let post = self.inner.post().ok();

        Ok((0..count)
            .map(|gid| {
                let name = u16::try_from(gid)
                    .ok()
                    .zip(post.as_ref())
                    .and_then(|(id, post)| post.glyph_name(GlyphId16::new(id)))
                    .map(str::to_owned)
                    .unwrap_or_else(|| {
                        debug!("Glyph id {gid} has no post name");
                        format!("glyph{gid:05}")
                    });
                Glyph::new(name, codepoints.get(&gid).copied())
            })
            .collect())
    }
}

fn is_unicode_encoding(platform: PlatformId, encoding: u16, full_repertoire: bool) -> bool {
    match platform {
        PlatformId::Unicode => true,
        PlatformId::Windows => encoding == 10 || (!full_repertoire && encoding == 1),
        _ => false,
    }
}

/// Prefer format 12 (full Unicode), then format 4 (BMP), then any Unicode subtable.
fn find_unicode_subtable<'a>(cmap: &'a Cmap<'a>) -> Option<CmapSubtable<'a>> {
    let records = cmap.encoding_records();

    for record in records {
        if is_unicode_encoding(record.platform_id(), record.encoding_id(), true)
            && let Ok(subtable) = record.subtable(cmap.offset_data())
            && matches!(subtable, CmapSubtable::Format12(_))
        {
            return Some(subtable);
        }
    }

    for record in records {
        if is_unicode_encoding(record.platform_id(), record.encoding_id(), false)
            && let Ok(subtable) = record.subtable(cmap.offset_data())
            && matches!(subtable, CmapSubtable::Format4(_))
        {
            return Some(subtable);
        }
    }

    records
        .iter()
        .filter(|r| is_unicode_encoding(r.platform_id(), r.encoding_id(), false))
        .find_map(|r| r.subtable(cmap.offset_data()).ok())
}
