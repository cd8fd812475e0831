//! The `{color[:spec]}...{color}` tag grammar
//!
//! Matching is non-greedy, so `{color:red}a{color} b {color:blue}c{color}` yields two regions.
//! Regions do not nest: an inner opening tag is part of the outer region's content and its
//! closing tag ends the outer region.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static COLOR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{color(?::([^}]+))?\}(.*?)\{color\}").expect("color tag regex is valid")
});

/// One matched color region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTag<'a> {
    /// Raw spec between `:` and `}`, empty for a bare `{color}`.
    pub spec: &'a str,
    /// Everything between the opening and closing tag.
    pub content: &'a str,
}

impl<'a> ColorTag<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        ColorTag {
            spec: caps.get(1).map_or("", |m| m.as_str()),
            content: caps.get(2).map_or("", |m| m.as_str()),
        }
    }
}

/// Replace every color region with the output of `replace`.
pub fn replace_color_tags<F>(input: &str, mut replace: F) -> String
where
    F: FnMut(&ColorTag<'_>) -> String,
{
    COLOR_TAG
        .replace_all(input, |caps: &Captures<'_>| {
            replace(&ColorTag::from_captures(caps))
        })
        .into_owned()
}

/// Remove color tags, keeping only their content.
pub fn strip_color_tags(input: &str) -> String {
    COLOR_TAG.replace_all(input, "$2").into_owned()
}

/// Whether the input contains at least one complete color region.
pub fn has_color_tags(input: &str) -> bool {
    COLOR_TAG.is_match(input)
}
