//! Jira format tests
//!
//! Tests for bidirectional CommonMark ↔ Jira conversion.

mod export;
mod import;
