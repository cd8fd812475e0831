//! Error types for dialect lookup

use std::fmt;

/// Errors that can occur when selecting a dialect
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No dialect with this name
    FormatNotFound(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
        }
    }
}

impl std::error::Error for FormatError {}
