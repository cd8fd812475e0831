//! Dialect selection
//!
//! The two markup dialects this crate converts between, with name and file extension lookup so
//! callers can pick a direction from user input or a filename.

use crate::error::FormatError;
use crate::transforms::{from_jira_md, to_jira_md};
use std::fmt;
use std::str::FromStr;

/// A markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// CommonMark
    Markdown,
    /// Jira flavored markdown (Jira wiki markup)
    Jira,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Markdown, Dialect::Jira];

    /// The name of this dialect (e.g., "markdown", "jira")
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Jira => "jira",
        }
    }

    /// Human readable label for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Dialect::Markdown => "CommonMark Markdown",
            Dialect::Jira => "Jira flavored markdown (wiki markup)",
        }
    }

    /// File extensions without the leading dot.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Dialect::Markdown => &["md", "markdown"],
            Dialect::Jira => &["jira", "jfm"],
        }
    }

    /// Detect the dialect from a filename's extension.
    ///
    /// ```ignore
    /// assert_eq!(Dialect::detect_from_filename("notes.md"), Some(Dialect::Markdown));
    /// assert_eq!(Dialect::detect_from_filename("notes.txt"), None);
    /// ```
    pub fn detect_from_filename(filename: &str) -> Option<Dialect> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.file_extensions().contains(&extension.as_str()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = FormatError;

    /// Accepts a dialect name or one of its file extensions, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Dialect::ALL
            .into_iter()
            .find(|dialect| {
                dialect.name() == wanted || dialect.file_extensions().contains(&wanted.as_str())
            })
            .ok_or_else(|| FormatError::FormatNotFound(s.to_string()))
    }
}

/// Convert `source` from one dialect to another. Converting a dialect to itself is the identity.
///
/// Colors are stripped in the Jira → CommonMark direction; use
/// [`crate::from_jira_md_with_colors`] to keep them.
pub fn convert(source: &str, from: Dialect, to: Dialect) -> String {
    match (from, to) {
        (Dialect::Markdown, Dialect::Jira) => to_jira_md(source),
        (Dialect::Jira, Dialect::Markdown) => from_jira_md(source),
        _ => source.to_string(),
    }
}
