//! Glyph records and the sorted glyph set handed to exporters.

use std::{ops::Deref, slice::Iter};

/// A named glyph with an optional Unicode mapping.
///
/// A glyph without a code point is kept in the set but never exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: String,
    codepoint: Option<char>,
}

impl Glyph {
    pub fn new(name: impl Into<String>, codepoint: Option<char>) -> Self {
        Self { name: name.into(), codepoint }
    }

    /// Raw glyph name as stored in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }
}

/// Glyphs sorted ascending by raw name.
///
/// Ordering is ordinal (`str` byte order) and stable, so glyphs sharing a
/// name keep their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet(Vec<Glyph>);

impl GlyphSet {
    pub fn new(mut glyphs: Vec<Glyph>) -> Self {
        glyphs.sort_by(|a, b| a.name.cmp(&b.name));
        Self(glyphs)
    }

    /// Glyphs that carry a code point, paired with it.
    pub fn mapped(&self) -> impl Iterator<Item = (&Glyph, char)> {
        self.0.iter().filter_map(|g| g.codepoint.map(|cp| (g, cp)))
    }

    pub fn mapped_count(&self) -> usize {
        self.mapped().count()
    }
}

impl Deref for GlyphSet {
    type Target = [Glyph];

    fn deref(&self) -> &[Glyph] {
        &self.0
    }
}

impl FromIterator<Glyph> for GlyphSet {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GlyphSet {
    type Item = &'a Glyph;
    type IntoIter = Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
