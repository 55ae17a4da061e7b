//! Error types for icon exports.

use std::{io, path::PathBuf, result};

use crate::{target::Target, validate::Finding};

/// Errors that can occur while exporting icon sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{target} identifiers are invalid: {}", join_findings(.findings))]
    Identifiers { target: Target, findings: Vec<Finding> },
}

fn join_findings(findings: &[Finding]) -> String {
    findings.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

pub type Result<T> = result::Result<T, Error>;
