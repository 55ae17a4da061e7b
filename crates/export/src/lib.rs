//! # Icon source export
//!
//! Turns a [`GlyphSet`] into generated source files: a TypeScript constant
//! map, an SCSS variable list and a Scala constants object. All three share
//! one renderer driven by a [`TargetSpec`] table.
//!
//! Every artifact is rendered and its identifiers checked before the first
//! file is written, so a failing run leaves existing outputs untouched.

mod error;
mod literal;
mod naming;
mod output;
mod render;
mod target;
mod validate;

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use icons_dump_glyphs::GlyphSet;
use log::{info, warn};

pub use error::{Error, Result};
pub use literal::{CharStyle, EscapeSyntax, LiteralSyntax};
pub use naming::{NameCase, to_kebab, to_lower_camel};
pub use output::{OutputFile, WriteOutcome};
pub use render::{Entry, RenderOptions, Rendered, render};
pub use target::{DEFAULT_COMMENT, DEFAULT_PACKAGE, SCALA, SCSS, TYPESCRIPT, Target, TargetSpec};
pub use validate::{Finding, check_identifiers};

/// A target and where its file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub target: Target,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(target: Target, path: impl Into<PathBuf>) -> Self {
        Self { target, path: path.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub render: RenderOptions,
    /// Treat empty or colliding identifiers as errors instead of warnings.
    pub strict: bool,
}

/// Result of exporting one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub target: Target,
    pub path: PathBuf,
    pub entries: usize,
    pub outcome: WriteOutcome,
}

impl Display for ExportReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            WriteOutcome::Written => write!(f, "{} - Wrote {}", self.target, self.path.display()),
            WriteOutcome::Unchanged => {
                write!(f, "{} - File {} unchanged", self.target, self.path.display())
            }
        }
    }
}

/// Render every artifact, check identifiers, then write the files in order.
pub fn export(
    glyphs: &GlyphSet,
    artifacts: &[Artifact],
    options: &ExportOptions,
) -> Result<Vec<ExportReport>> {
    let rendered: Vec<(&Path, Rendered)> = artifacts
        .iter()
        .map(|a| (a.path.as_path(), render(a.target, glyphs, &options.render)))
        .collect();

    for (_, output) in &rendered {
        let findings = check_identifiers(output);
        if findings.is_empty() {
            continue;
        }
        if options.strict {
            return Err(Error::Identifiers { target: output.target, findings });
        }
        for finding in &findings {
            warn!("{}: {finding}", output.target);
        }
    }

    rendered
        .into_iter()
        .map(|(path, output)| {
            let outcome = OutputFile::new(path).write_if_changed(&output.text)?;
            info!("{}: {} entries -> {}", output.target, output.entries.len(), path.display());
            Ok(ExportReport {
                target: output.target,
                path: path.to_path_buf(),
                entries: output.entries.len(),
                outcome,
            })
        })
        .collect()
}
