//! CommonMark input
//!
//! CommonMark is only ever read by this crate (the reverse direction produces CommonMark text
//! directly from Jira markup). Parsing is delegated to `comrak`:
//! - Single crate with CommonMark compliance and a tolerant parser that always yields a tree
//! - Arena-allocated AST that is cheap to walk from the Jira serializer
//! - GFM extensions (tables, strikethrough, autolinks, task lists) behind option flags

use comrak::nodes::AstNode;
use comrak::{Arena, ComrakOptions};
use serde::{Deserialize, Serialize};

/// Which comrak extensions are enabled when parsing CommonMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownExtensions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
}

impl Default for MarkdownExtensions {
    fn default() -> Self {
        MarkdownExtensions {
            table: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            superscript: true,
        }
    }
}

impl MarkdownExtensions {
    pub fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.table;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.superscript = self.superscript;
        options.extension.front_matter_delimiter = Some("---".to_string());
        options
    }
}

/// Parse CommonMark into a comrak tree allocated in `arena`.
pub fn parse_markdown<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    extensions: &MarkdownExtensions,
) -> &'a AstNode<'a> {
    comrak::parse_document(arena, source, &extensions.comrak_options())
}
