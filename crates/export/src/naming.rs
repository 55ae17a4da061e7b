//! Identifier derivation from raw glyph names.

/// Case convention applied to a raw glyph name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    /// `king_promoted` -> `kingPromoted`
    LowerCamel,
    /// `king_promoted` -> `king-promoted`
    Kebab,
}

impl NameCase {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::LowerCamel => to_lower_camel(raw),
            Self::Kebab => to_kebab(raw),
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Split on runs of separators. Leading or trailing runs yield one empty segment.
fn segments(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = raw;
    loop {
        match rest.find(is_separator) {
            Some(start) => {
                parts.push(&rest[..start]);
                let tail = &rest[start..];
                let end = tail.find(|c| !is_separator(c)).unwrap_or(tail.len());
                rest = &tail[end..];
            }
            None => {
                parts.push(rest);
                return parts;
            }
        }
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn to_lower_camel(raw: &str) -> String {
    let mut parts = segments(raw).into_iter();
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

pub fn to_kebab(raw: &str) -> String {
    segments(raw)
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
