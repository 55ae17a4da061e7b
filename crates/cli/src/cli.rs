//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use icons_dump_export::{
    Artifact, CharStyle, DEFAULT_PACKAGE, ExportOptions, ExportReport, RenderOptions, Target, export,
};
use icons_dump_glyphs::{InputFormat, load};
use log::debug;

use crate::config::{FONT_PATH, NO_SCALA_FLAG, SCALA_EXPORT_PATH, SCSS_EXPORT_PATH, TS_EXPORT_PATH};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum InputFormatArg {
    #[default]
    Auto,
    Font,
    Codepoints,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Auto => InputFormat::Auto,
            InputFormatArg::Font => InputFormat::Font,
            InputFormatArg::Codepoints => InputFormat::Codepoints,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "icons-dump")]
#[command(about = "Generate TypeScript, SCSS and Scala icon constants from an icon font")]
pub struct Cli {
    /// Icon font (.ttf/.otf) or codepoints JSON map
    #[arg(long, default_value = FONT_PATH)]
    pub font: PathBuf,
    #[arg(long, value_enum, default_value_t = InputFormatArg::Auto)]
    pub input_format: InputFormatArg,
    #[arg(long, default_value = TS_EXPORT_PATH)]
    pub ts_out: PathBuf,
    #[arg(long, default_value = SCSS_EXPORT_PATH)]
    pub scss_out: PathBuf,
    #[arg(long, default_value = SCALA_EXPORT_PATH)]
    pub scala_out: PathBuf,
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub scala_package: String,
    /// Skip the Scala constants object
    #[arg(long)]
    pub no_scala: bool,
    /// Write code point escapes instead of raw characters
    #[arg(long)]
    pub escape: bool,
    /// Fail on empty or colliding identifiers instead of warning
    #[arg(long)]
    pub strict: bool,
    /// Bare flags, e.g. `no-scala`
    #[arg(value_name = "FLAGS", value_parser = [NO_SCALA_FLAG])]
    pub flags: Vec<String>,
}

impl Cli {
    pub fn skip_scala(&self) -> bool {
        self.no_scala || self.flags.iter().any(|f| f == NO_SCALA_FLAG)
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let mut artifacts = vec![
            Artifact::new(Target::TypeScript, &self.ts_out),
            Artifact::new(Target::Scss, &self.scss_out),
        ];
        if !self.skip_scala() {
            artifacts.push(Artifact::new(Target::Scala, &self.scala_out));
        }
        artifacts
    }

    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            render: RenderOptions {
                char_style: if self.escape { CharStyle::Escaped } else { CharStyle::Literal },
                package: self.scala_package.clone(),
                ..RenderOptions::default()
            },
            strict: self.strict,
        }
    }

    /// Load glyphs and write every artifact.
    pub fn execute(&self) -> Result<Vec<ExportReport>> {
        let glyphs = load(&self.font, self.input_format.into())
            .with_context(|| format!("Failed to load glyphs from {}", self.font.display()))?;
        let artifacts = self.artifacts();
        if self.skip_scala() {
            debug!("Scala export disabled");
        }
        let reports =
            export(&glyphs, &artifacts, &self.options()).context("Failed to export icon sources")?;
        Ok(reports)
    }

    pub fn run(self) -> Result<()> {
        for report in self.execute()? {
            println!("{report}");
        }
        Ok(())
    }
}
