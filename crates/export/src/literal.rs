//! Character literals per output syntax.

use std::fmt::Write;

/// How the glyph's character is spelled inside its literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharStyle {
    /// The raw character, with only the syntax's special characters escaped.
    #[default]
    Literal,
    /// A code point escape sequence, keeping the generated file ASCII-only.
    Escaped,
}

/// Code point escape syntax of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSyntax {
    /// `\uXXXX`, or `\u{XXXXX}` above the BMP.
    JavaScript,
    /// `\XXXX` with no padding.
    Css,
    /// `\uXXXX` per UTF-16 code unit.
    Jvm,
}

impl EscapeSyntax {
    pub fn escape(self, ch: char) -> String {
        let cp = ch as u32;
        let mut out = String::new();
        match self {
            Self::JavaScript if cp > 0xFFFF => {
                let _ = write!(out, "\\u{{{cp:X}}}");
            }
            Self::JavaScript => {
                let _ = write!(out, "\\u{cp:04X}");
            }
            Self::Css => {
                let _ = write!(out, "\\{cp:X}");
            }
            Self::Jvm => {
                for unit in ch.encode_utf16(&mut [0; 2]) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
        }
        out
    }
}

/// Quoting rules for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSyntax {
    pub delimiter: char,
    /// Characters whose complete literal is spelled out instead of being
    /// wrapped in `delimiter`.
    pub special: &'static [(char, &'static str)],
    pub escape: EscapeSyntax,
}

impl LiteralSyntax {
    /// Single quotes; a quote switches to double quotes, a backslash is doubled.
    pub const SINGLE_QUOTED: Self = Self {
        delimiter: '\'',
        special: &[('\'', "\"'\""), ('\\', "'\\\\'")],
        escape: EscapeSyntax::JavaScript,
    };

    /// Same quoting as [`Self::SINGLE_QUOTED`], CSS escapes.
    pub const CSS: Self = Self { escape: EscapeSyntax::Css, ..Self::SINGLE_QUOTED };

    /// Double quotes with backslash and quote escaped.
    pub const DOUBLE_QUOTED: Self = Self {
        delimiter: '"',
        special: &[('\\', "\"\\\\\""), ('"', "\"\\\"\"")],
        escape: EscapeSyntax::Jvm,
    };

    pub fn render(&self, ch: char, style: CharStyle) -> String {
        let body = match style {
            CharStyle::Escaped => self.escape.escape(ch),
            CharStyle::Literal => {
                if let Some((_, literal)) = self.special.iter().find(|(c, _)| *c == ch) {
                    return (*literal).to_owned();
                }
                ch.to_string()
            }
        };
        let mut out = String::with_capacity(body.len() + 2);
        out.push(self.delimiter);
        out.push_str(&body);
        out.push(self.delimiter);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted_literal() {
        let syntax = LiteralSyntax::SINGLE_QUOTED;
        assert_eq!(syntax.render('♔', CharStyle::Literal), "'♔'");
        assert_eq!(syntax.render('\'', CharStyle::Literal), r#""'""#);
        assert_eq!(syntax.render('\\', CharStyle::Literal), r"'\\'");
        assert_eq!(syntax.render('"', CharStyle::Literal), r#"'"'"#);
    }

    #[test]
    fn test_double_quoted_literal() {
        let syntax = LiteralSyntax::DOUBLE_QUOTED;
        assert_eq!(syntax.render('♔', CharStyle::Literal), r#""♔""#);
        assert_eq!(syntax.render('\\', CharStyle::Literal), r#""\\""#);
        assert_eq!(syntax.render('"', CharStyle::Literal), r#""\"""#);
        assert_eq!(syntax.render('\'', CharStyle::Literal), r#""'""#);
    }

    #[test]
    fn test_backtick_passes_through() {
        assert_eq!(LiteralSyntax::SINGLE_QUOTED.render('`', CharStyle::Literal), "'`'");
        assert_eq!(LiteralSyntax::CSS.render('`', CharStyle::Literal), "'`'");
        assert_eq!(LiteralSyntax::DOUBLE_QUOTED.render('`', CharStyle::Literal), r#""`""#);
    }

    #[test]
    fn test_escaped_bmp() {
        let ch = char::from_u32(0xE001).unwrap();
        assert_eq!(LiteralSyntax::SINGLE_QUOTED.render(ch, CharStyle::Escaped), r"'\uE001'");
        assert_eq!(LiteralSyntax::CSS.render(ch, CharStyle::Escaped), r"'\E001'");
        assert_eq!(LiteralSyntax::DOUBLE_QUOTED.render(ch, CharStyle::Escaped), r#""\uE001""#);
    }

    #[test]
    fn test_escaped_pads_short_codepoints() {
        assert_eq!(EscapeSyntax::JavaScript.escape('A'), r"\u0041");
        assert_eq!(EscapeSyntax::Jvm.escape('A'), r"\u0041");
        assert_eq!(EscapeSyntax::Css.escape('A'), r"\41");
    }

    #[test]
    fn test_escaped_astral() {
        let ch = '😀';
        assert_eq!(EscapeSyntax::JavaScript.escape(ch), r"\u{1F600}");
        assert_eq!(EscapeSyntax::Css.escape(ch), r"\1F600");
        assert_eq!(EscapeSyntax::Jvm.escape(ch), r"\uD83D\uDE00");
    }

    #[test]
    fn test_escaped_ignores_special_table() {
        assert_eq!(LiteralSyntax::SINGLE_QUOTED.render('\'', CharStyle::Escaped), r"'\u0027'");
    }
}
