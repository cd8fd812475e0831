//! Jira flavored markdown
//!
//! Bidirectional conversion between CommonMark and Jira wiki markup.
//!
//! # Library Choice
//!
//! There is no maintained Rust crate for Jira markup, so both directions live here:
//! - Export (CommonMark → Jira) parses with `comrak` and walks its AST (serializer.rs)
//! - Import (Jira → CommonMark) is a regex pipeline over the markup text (parser.rs)
//!
//! # Element Mapping Table
//!
//! | CommonMark           | Jira                        | Export Notes                        | Import Notes                        |
//! |----------------------|-----------------------------|-------------------------------------|-------------------------------------|
//! | `#`..`######`        | `h1.`..`h6.`                | Direct                              | Direct                              |
//! | `**bold**`           | `*bold*`                    | Direct                              | Also accepts `{*}bold{*}`           |
//! | `*italic*`           | `_italic_`                  | Direct                              | Also accepts `{_}italic{_}`         |
//! | `~~strike~~`         | `-strike-`                  | Direct                              | Direct                              |
//! | `` `code` ``         | `{{code}}`                  | Direct                              | Contents never touched              |
//! | fenced code          | `{code:lang}`...`{code}`    | First info word → language          | `{noformat}` also becomes a fence   |
//! | `> quote`            | `{quote}`...`{quote}`       | Block quote                         | Also `bq.` lines                    |
//! | `- item` / `1. item` | `* item` / `# item`         | Nesting by marker repetition        | Nesting → indentation               |
//! | `[text](url)`        | `[text\|url]`               | `[url]` when text is the url        | Bare `[url]` → autolink             |
//! | `![alt](src)`        | `!src!`                     | Alt text dropped                    | Image options dropped               |
//! | table                | `\|\|head\|\|` `\|cell\|`   | Header row → `\|\|`                 | Separator row inserted              |
//! | `<sup>`/`<sub>` etc. | `^sup^`, `~sub~`, `+ins+`   | Superscript only                    | Emitted as inline HTML              |
//! | n/a                  | `{color:x}`...`{color}`     | n/a                                 | Stripped, see crate::color          |
//! | n/a                  | `{panel}`...`{panel}`       | n/a                                 | Block quote with bold title         |
//!
//! # Lossy Conversions
//!
//! - Color tags never reach CommonMark (they are stripped or tunnelled as placeholders)
//! - Image alt text, link titles and code block attributes are dropped
//! - Line endings are normalized to `\n`
//! - A list item's second paragraph loses its indentation on export

pub mod parser;
pub mod serializer;

use crate::formats::markdown::{parse_markdown, MarkdownExtensions};
use comrak::Arena;
use serde::{Deserialize, Serialize};

/// Options for rendering CommonMark as Jira markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraOptions {
    /// Backslash-escape `{` and `}` in text so Jira does not read them as macros.
    pub escape_macros: bool,
    /// CommonMark extensions recognized on input.
    pub extensions: MarkdownExtensions,
}

/// Convert CommonMark to Jira markup.
pub fn markdown_to_jira(md: &str, options: &JiraOptions) -> String {
    let arena = Arena::new();
    let root = parse_markdown(&arena, md, &options.extensions);
    serializer::serialize_to_jira(root, options)
}

pub use parser::jira_to_markdown;
