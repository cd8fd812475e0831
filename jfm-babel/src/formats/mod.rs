//! Format implementations
//!
//! Dialect specific parsing and serialization. The pipelines in `transforms` compose these.

pub mod jira;
pub mod markdown;

pub use jira::{jira_to_markdown, markdown_to_jira, JiraOptions};
pub use markdown::MarkdownExtensions;
