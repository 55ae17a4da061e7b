//! Output targets and the tables describing their syntax.

use std::fmt::{Display, Formatter, Result};

use crate::{literal::LiteralSyntax, naming::NameCase};

/// Default header comment text.
pub const DEFAULT_COMMENT: &str = "Auto generated file via icons-dump";

/// Default Scala package.
pub const DEFAULT_PACKAGE: &str = "lila.common";

/// A generated artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    TypeScript,
    Scss,
    Scala,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::TypeScript, Target::Scss, Target::Scala];

    pub fn spec(self) -> &'static TargetSpec {
        match self {
            Target::TypeScript => &TYPESCRIPT,
            Target::Scss => &SCSS,
            Target::Scala => &SCALA,
        }
    }

    /// Short label used in status lines.
    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// Everything that differs between targets.
///
/// `header` may contain `{comment}` and `{package}` placeholders. An entry is
/// written as `entry_prefix`, identifier, `entry_separator`, literal,
/// `entry_suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub label: &'static str,
    pub case: NameCase,
    pub literal: LiteralSyntax,
    pub header: &'static str,
    pub entry_prefix: &'static str,
    pub entry_separator: &'static str,
    pub entry_suffix: &'static str,
    pub footer: &'static str,
}

pub static TYPESCRIPT: TargetSpec = TargetSpec {
    label: "TS",
    case: NameCase::LowerCamel,
    literal: LiteralSyntax::SINGLE_QUOTED,
    header: "// {comment}\n\nexport const icons = {\n",
    entry_prefix: "  ",
    entry_separator: ": ",
    entry_suffix: ",\n",
    footer: "} as const;\n",
};

pub static SCSS: TargetSpec = TargetSpec {
    label: "SCSS",
    case: NameCase::Kebab,
    literal: LiteralSyntax::CSS,
    header: "// {comment}\n\n",
    entry_prefix: "$",
    entry_separator: ": ",
    entry_suffix: ";\n",
    footer: "",
};

pub static SCALA: TargetSpec = TargetSpec {
    label: "Scala",
    case: NameCase::LowerCamel,
    literal: LiteralSyntax::DOUBLE_QUOTED,
    header: "// {comment}\npackage {package}\n// format: off\nobject Icons {\n",
    entry_prefix: "  val ",
    entry_separator: " = ",
    entry_suffix: "\n",
    footer: "}\n",
};

impl TargetSpec {
    pub fn header(&self, comment: &str, package: &str) -> String {
        self.header.replace("{comment}", comment).replace("{package}", package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Target::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["TS", "SCSS", "Scala"]);
    }

    #[test]
    fn test_header_placeholders() {
        assert_eq!(
            SCALA.header("generated", "lila.common"),
            "// generated\npackage lila.common\n// format: off\nobject Icons {\n"
        );
        assert_eq!(SCSS.header("generated", "unused"), "// generated\n\n");
    }

    #[test]
    fn test_cases() {
        assert_eq!(Target::TypeScript.spec().case, NameCase::LowerCamel);
        assert_eq!(Target::Scss.spec().case, NameCase::Kebab);
        assert_eq!(Target::Scala.spec().case, NameCase::LowerCamel);
    }
}
