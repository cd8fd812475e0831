//! Jira markup import (Jira → CommonMark)
//!
//! Pipeline over the markup text, in this order:
//!
//!     1. Code blocks, `{noformat}` blocks and `{{monospace}}` are lifted out into stash tokens so
//!        that no later rule touches code.
//!     2. Color tags are stripped (callers normally handle them before getting here), and color
//!        placeholder tokens are lifted so they act as word boundaries for emphasis rules.
//!     3. Block constructs: panels and quotes, horizontal rules, lists, headings, table headers.
//!     4. Links and images. Their targets are stashed too, so emphasis rules never see URLs.
//!     5. Inline emphasis: bold, italic, citation, insert, superscript, subscript, strikethrough.
//!     6. Stash tokens are restored.
//!
//! Input is expected to use `\n` line endings; rules anchored at line ends do not match before
//! `\r`. The output is not trimmed, so text without markup comes back unchanged.

use crate::color::placeholders::MARKER;
use crate::color::tags::strip_color_tags;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const STASH_SENTINEL: char = '\u{1a}';

macro_rules! regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new($pattern).expect(concat!(stringify!($name), " regex is valid"))
        });
    };
}

// One alternation so that whichever construct opens first wins: `{{code}}` is monospace, never
// the start of a code block.
regex!(
    CODE_SPAN,
    concat!(
        r"(?s)\{\{(?P<mono>[^\n]+?)\}\}",
        r"|\{code(?::(?P<params>[^}]*))?\}\n?(?P<code>.*?)\n?\{code\}",
        r"|\{noformat(?::[^}]*)?\}\n?(?P<raw>.*?)\n?\{noformat\}",
    )
);
regex!(PANEL, r"(?s)\{panel(?::([^}]*))?\}\n?(.*?)\n?\{panel\}");
regex!(QUOTE, r"(?s)\{quote\}\n?(.*?)\n?\{quote\}");
regex!(BQ_LINE, r"(?m)^[ \t]*bq\.[ \t]+");
regex!(HORIZONTAL_RULE, r"(?m)^[ \t]*-{4,}[ \t]*$");
regex!(LIST_ITEM, r"(?m)^[ \t]*([*#-]+)[ \t]+(.*)$");
regex!(HEADING, r"(?m)^[ \t]*h([1-6])\.[ \t]*(.*)$");
regex!(TABLE_HEADER, r"(?m)^[ \t]*\|\|(.*)\|\|[ \t]*$");
regex!(NAMED_LINK, r"\[([^\[\]|\n]+)\|([^\[\]|\n]+)\]");
regex!(URL_LINK, r"\[([a-zA-Z][a-zA-Z0-9+.-]*:[^\[\]|\s]+)\]");
regex!(IMAGE, r"!([^!\s|]*[./][^!\s|]*)(?:\|[^!\n]*)?!");
regex!(BOLD, r"(^|[^\w*])\*([^*\s](?:[^*\n]*[^*\s])?)\*");
regex!(ITALIC, r"(^|[^\w_])_([^_\s](?:[^_\n]*[^_\s])?)_");
regex!(CITATION, r"\?\?([^?\n]+)\?\?");
regex!(INSERT, r"(^|[^\w+])\+([^+\s](?:[^+\n]*[^+\s])?)\+");
regex!(SUPERSCRIPT, r"\^([^\^\s](?:[^\^\n]*[^\^\s])?)\^");
regex!(SUBSCRIPT, r"~([^~\s\[\]](?:[^~\n\[\]]*[^~\s\[\]])?)~");
regex!(STRIKETHROUGH, r"(^|[^\w-])-([^-\s](?:[^-\n]*[^-\s])?)-");
regex!(STASH_TOKEN, "\u{1a}([0-9]+)\u{1a}");

/// Holds text lifted out of the document while other rules run.
#[derive(Debug, Default)]
struct Stash {
    items: Vec<String>,
}

impl Stash {
    fn put(&mut self, text: String) -> String {
        let token = format!("{STASH_SENTINEL}{}{STASH_SENTINEL}", self.items.len());
        self.items.push(text);
        token
    }

    /// Hide sentinels already present in `input` behind a token of their own, so that only
    /// tokens handed out by [`Stash::put`] look like tokens.
    fn escape(&mut self, input: &str) -> String {
        if !input.contains(STASH_SENTINEL) {
            return input.to_string();
        }
        let token = self.put(STASH_SENTINEL.to_string());
        input.replace(STASH_SENTINEL, &token)
    }

    /// Swap tokens back for their text. Items only ever hold tokens created before them, so the
    /// recursion is bounded, and restored text is never scanned again.
    fn restore(&self, text: &str) -> String {
        STASH_TOKEN
            .replace_all(text, |caps: &Captures<'_>| {
                match caps[1].parse::<usize>().ok().and_then(|index| self.items.get(index)) {
                    Some(item) => self.restore(item),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Translate Jira markup to CommonMark.
pub fn jira_to_markdown(jira: &str) -> String {
    let mut stash = Stash::default();

    let text = stash.escape(jira);
    let text = lift_code(&text, &mut stash);
    let text = strip_color_tags(&text);
    let text = MARKER
        .replace_all(&text, |caps: &Captures<'_>| stash.put(caps[0].to_string()))
        .into_owned();

    let text = convert_panels(&text);
    let text = convert_quotes(&text);
    let text = HORIZONTAL_RULE.replace_all(&text, "---").into_owned();
    let text = convert_lists(&text);
    let text = convert_headings(&text);
    let text = convert_table_headers(&text);

    let text = convert_links(&text, &mut stash);
    let text = convert_emphasis(&text);

    stash.restore(&text)
}

fn lift_code(input: &str, stash: &mut Stash) -> String {
    CODE_SPAN
        .replace_all(input, |caps: &Captures<'_>| {
            if let Some(code) = caps.name("mono").map(|m| m.as_str()) {
                if code.contains('`') {
                    stash.put(format!("`` {code} ``"))
                } else {
                    stash.put(format!("`{code}`"))
                }
            } else if let Some(raw) = caps.name("raw") {
                stash.put(format!("```\n{}\n```", raw.as_str()))
            } else {
                let language = caps.name("params").map_or("", |m| code_language(m.as_str()));
                let code = caps.name("code").map_or("", |m| m.as_str());
                stash.put(format!("```{language}\n{code}\n```"))
            }
        })
        .into_owned()
}

/// Pick the language out of `{code:...}` parameters such as `java|title=Main.java`.
fn code_language(params: &str) -> &str {
    params
        .split(['|', ':'])
        .map(str::trim)
        .find(|param| !param.is_empty() && !param.contains('='))
        .unwrap_or("")
}

fn quote_lines(body: &str) -> String {
    body.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn convert_panels(input: &str) -> String {
    PANEL
        .replace_all(input, |caps: &Captures<'_>| {
            let title = caps.get(1).and_then(|params| {
                params
                    .as_str()
                    .split('|')
                    .find_map(|param| param.trim().strip_prefix("title="))
                    .map(str::trim)
                    .filter(|title| !title.is_empty())
            });
            let body = quote_lines(&caps[2]);
            match title {
                Some(title) => format!("> **{title}**\n>\n{body}"),
                None => body,
            }
        })
        .into_owned()
}

fn convert_quotes(input: &str) -> String {
    let text = QUOTE.replace_all(input, |caps: &Captures<'_>| quote_lines(&caps[1]));
    BQ_LINE.replace_all(&text, "> ").into_owned()
}

/// `*`, `-` and `#` markers become bullets and numbered items, nested by marker count.
fn convert_lists(input: &str) -> String {
    LIST_ITEM
        .replace_all(input, |caps: &Captures<'_>| {
            let markers = &caps[1];
            let mut indent = String::new();
            let mut last = '*';
            for (i, marker) in markers.chars().enumerate() {
                if i + 1 < markers.chars().count() {
                    indent.push_str(if marker == '#' { "   " } else { "  " });
                }
                last = marker;
            }
            let bullet = if last == '#' { "1. " } else { "- " };
            format!("{indent}{bullet}{}", &caps[2])
        })
        .into_owned()
}

fn convert_headings(input: &str) -> String {
    HEADING
        .replace_all(input, |caps: &Captures<'_>| {
            let level = caps[1].parse::<usize>().unwrap_or(1);
            let hashes = "#".repeat(level);
            let title = caps[2].trim_end();
            if title.is_empty() {
                hashes
            } else {
                format!("{hashes} {title}")
            }
        })
        .into_owned()
}

fn convert_table_headers(input: &str) -> String {
    TABLE_HEADER
        .replace_all(input, |caps: &Captures<'_>| {
            let cells: Vec<&str> = caps[1].split("||").map(str::trim).collect();
            let header = format!("| {} |", cells.join(" | "));
            let separator = format!("|{}", " --- |".repeat(cells.len()));
            format!("{header}\n{separator}")
        })
        .into_owned()
}

fn convert_links(input: &str, stash: &mut Stash) -> String {
    let text = IMAGE.replace_all(input, |caps: &Captures<'_>| {
        stash.put(format!("![]({})", &caps[1]))
    });
    let text = NAMED_LINK.replace_all(&text, |caps: &Captures<'_>| {
        let target = stash.put(caps[2].trim().to_string());
        format!("[{}]({target})", caps[1].trim())
    });
    URL_LINK
        .replace_all(&text, |caps: &Captures<'_>| stash.put(format!("<{}>", &caps[1])))
        .into_owned()
}

/// Replace `open content close` runs matched by `re`, whose first group is the character in
/// front of the opening delimiter. Matches running straight into a word are left alone.
fn replace_delimited(input: &str, re: &Regex, open: &str, close: &str) -> String {
    re.replace_all(input, |caps: &Captures<'_>| {
        let (end, whole) = caps.get(0).map_or((0, ""), |m| (m.end(), m.as_str()));
        let followed_by_word = input[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if followed_by_word {
            whole.to_string()
        } else {
            format!("{}{open}{}{close}", &caps[1], &caps[2])
        }
    })
    .into_owned()
}

fn convert_emphasis(input: &str) -> String {
    let text = replace_delimited(input, &BOLD, "**", "**");
    let text = replace_delimited(&text, &ITALIC, "*", "*");
    let text = CITATION.replace_all(&text, "<cite>$1</cite>");
    let text = replace_delimited(&text, &INSERT, "<ins>", "</ins>");
    let text = SUPERSCRIPT.replace_all(&text, "<sup>$1</sup>");
    let text = SUBSCRIPT.replace_all(&text, "<sub>$1</sub>");
    replace_delimited(&text, &STRIKETHROUGH, "~~", "~~")
}
