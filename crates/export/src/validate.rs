//! Identifier checks on rendered output.

use std::fmt::{Display, Formatter, Result};

use indexmap::IndexMap;

use crate::render::Rendered;

/// A problem with the identifiers of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The raw name contains nothing but separators.
    Empty { raw_name: String },
    /// Several raw names derive the same identifier; all of them are emitted.
    Collision { identifier: String, raw_names: Vec<String> },
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Finding::Empty { raw_name } => write!(f, "glyph '{raw_name}' yields an empty identifier"),
            Finding::Collision { identifier, raw_names } => {
                write!(f, "identifier '{identifier}' is derived from {}", raw_names.join(", "))
            }
        }
    }
}

/// Empty identifiers first, then collisions in order of first appearance.
pub fn check_identifiers(rendered: &Rendered) -> Vec<Finding> {
    let mut by_identifier: IndexMap<&str, Vec<&str>> = IndexMap::new();
    let mut findings = Vec::new();

    for entry in &rendered.entries {
        if entry.identifier.is_empty() {
            findings.push(Finding::Empty { raw_name: entry.raw_name.clone() });
            continue;
        }
        by_identifier.entry(entry.identifier.as_str()).or_default().push(&entry.raw_name);
    }

    findings.extend(by_identifier.into_iter().filter(|(_, names)| names.len() > 1).map(
        |(identifier, names)| Finding::Collision {
            identifier: identifier.to_owned(),
            raw_names: names.into_iter().map(str::to_owned).collect(),
        },
    ));
    findings
}
