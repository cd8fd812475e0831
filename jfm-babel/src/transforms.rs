//! Conversion pipelines between CommonMark and Jira markup
//!
//! The reverse direction exists in two flavors. [`from_jira_md`] throws color information away;
//! [`from_jira_md_with_colors`] swaps color regions for placeholder tokens and hands back the
//! [`PlaceholderTable`] needed to turn them into escape codes once the caller has rendered the
//! CommonMark (for example with a terminal markdown renderer):
//!
//! ```ignore
//! let (markdown, colors) = from_jira_md_with_colors(description);
//! let rendered = render_for_terminal(&markdown);
//! let display = colors.expand(&rendered);
//! ```

use crate::color::placeholders::PlaceholderTable;
use crate::color::tags::strip_color_tags;
use crate::formats::jira::{jira_to_markdown, markdown_to_jira, JiraOptions};
use serde::{Deserialize, Serialize};

/// Options for the Jira → CommonMark direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseOptions {
    /// Tunnel color tags as placeholders instead of stripping them.
    pub preserve_colors: bool,
}

impl Default for ReverseOptions {
    fn default() -> Self {
        ReverseOptions {
            preserve_colors: true,
        }
    }
}

/// Convert Windows line endings to `\n`.
///
/// Table rules in the Jira translator are anchored at line ends and do not match before `\r`.
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Rewrite the alternate emphasis delimiters: `{*}bold{*}` → `*bold*`, `{_}italic{_}` → `_italic_`.
pub fn fix_escaped_markup(input: &str) -> String {
    input.replace("{*}", "*").replace("{_}", "_")
}

/// The stages shared by both reverse paths, before color handling.
fn prepare_jira(jfm: &str) -> String {
    fix_escaped_markup(&normalize_line_endings(jfm))
}

/// Translate CommonMark to Jira flavored markdown.
pub fn to_jira_md(md: &str) -> String {
    to_jira_md_with_options(md, &JiraOptions::default())
}

/// Translate CommonMark to Jira flavored markdown with explicit rendering options.
pub fn to_jira_md_with_options(md: &str, options: &JiraOptions) -> String {
    if md.is_empty() {
        return String::new();
    }
    markdown_to_jira(md, options)
}

/// Translate Jira flavored markdown to CommonMark. Color tags are stripped, content kept.
pub fn from_jira_md(jfm: &str) -> String {
    let prepared = prepare_jira(jfm);
    jira_to_markdown(&strip_color_tags(&prepared))
}

/// Translate Jira flavored markdown to CommonMark, keeping colors as placeholders.
///
/// Run the returned text through any renderer that leaves plain words alone, then call
/// [`PlaceholderTable::expand`] on the result.
pub fn from_jira_md_with_colors(jfm: &str) -> (String, PlaceholderTable) {
    let table = PlaceholderTable::new();
    let prepared = prepare_jira(jfm);
    let tunnelled = table.process_color_tags(&prepared);
    log::debug!("tunnelled {} color region(s) through placeholders", table.len());
    (jira_to_markdown(&tunnelled), table)
}

/// Translate Jira flavored markdown to CommonMark according to `options`.
///
/// With `preserve_colors` off this is [`from_jira_md`] paired with an empty table, so callers
/// can expand unconditionally.
pub fn from_jira_md_with_options(jfm: &str, options: &ReverseOptions) -> (String, PlaceholderTable) {
    if options.preserve_colors {
        from_jira_md_with_colors(jfm)
    } else {
        (from_jira_md(jfm), PlaceholderTable::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_line_endings("lone\rcr"), "lone\rcr");
    }

    #[test]
    fn test_fix_escaped_markup() {
        assert_eq!(fix_escaped_markup("{*}bold{*}"), "*bold*");
        assert_eq!(fix_escaped_markup("{_}italic{_}"), "_italic_");
        assert_eq!(fix_escaped_markup("{color}x{color}"), "{color}x{color}");
    }

    #[test]
    fn test_empty_forward_is_empty() {
        assert_eq!(to_jira_md(""), "");
    }

    #[test]
    fn test_colors_off_returns_empty_table() {
        let options = ReverseOptions {
            preserve_colors: false,
        };
        let (md, table) = from_jira_md_with_options("{color:red}x{color}", &options);
        assert_eq!(md, "x");
        assert!(table.is_empty());
    }
}
