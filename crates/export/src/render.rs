//! Rendering a glyph set into target source text.

use icons_dump_glyphs::GlyphSet;

use crate::{
    literal::CharStyle,
    target::{DEFAULT_COMMENT, DEFAULT_PACKAGE, Target},
};

/// Options shared by all targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub char_style: CharStyle,
    /// Text of the generated-file header comment.
    pub comment: String,
    /// Package line for targets that have one.
    pub package: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            char_style: CharStyle::default(),
            comment: DEFAULT_COMMENT.to_owned(),
            package: DEFAULT_PACKAGE.to_owned(),
        }
    }
}

/// One emitted line's identifier and the glyph it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub raw_name: String,
    pub identifier: String,
}

/// Full text of one artifact plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub target: Target,
    pub text: String,
    pub entries: Vec<Entry>,
}

pub fn render(target: Target, glyphs: &GlyphSet, options: &RenderOptions) -> Rendered {
    let spec = target.spec();
    let mut text = spec.header(&options.comment, &options.package);
    let mut entries = Vec::with_capacity(glyphs.mapped_count());

    for (glyph, codepoint) in glyphs.mapped() {
        let identifier = spec.case.apply(glyph.name());
        let literal = spec.literal.render(codepoint, options.char_style);

        text.push_str(spec.entry_prefix);
        text.push_str(&identifier);
        text.push_str(spec.entry_separator);
        text.push_str(&literal);
        text.push_str(spec.entry_suffix);

        entries.push(Entry { raw_name: glyph.name().to_owned(), identifier });
    }

    text.push_str(spec.footer);
    Rendered { target, text, entries }
}
