//! Color tunnelling tests
//!
//! Jira color tags → placeholders → (renderer) → terminal escape codes.

use jfm_babel::color::tags::has_color_tags;
use jfm_babel::formats::jira::jira_to_markdown;
use jfm_babel::transforms::{fix_escaped_markup, normalize_line_endings};
use jfm_babel::{
    color_to_ansi, from_jira_md, from_jira_md_with_colors, from_jira_md_with_options,
    PlaceholderTable, ReverseOptions, ANSI_RESET,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

/// Expand as if the renderer were the identity.
fn render_identity(jira: &str) -> String {
    let (md, table) = from_jira_md_with_colors(jira);
    table.expand(&md)
}

#[test]
fn test_red_round_trip() {
    let (md, table) = from_jira_md_with_colors("{color:red}hello{color}");

    assert_eq!(table.len(), 1);
    assert_eq!(md.matches(table.reset_marker()).count(), 1);
    assert_eq!(md.matches("hello").count(), 1);
    assert!(md.ends_with(&format!("hello{}", table.reset_marker())));
    assert_eq!(table.expand(&md), "\x1b[31mhello\x1b[0m");
}

#[test]
fn test_placeholders_survive_surrounding_markup() {
    assert_eq!(
        render_identity("h2. Status: {color:green}*done*{color}"),
        "## Status: \x1b[32m**done**\x1b[0m"
    );
    assert_eq!(
        render_identity("* {color:#f00}urgent{color} item"),
        "- \x1b[38;2;255;0;0murgent\x1b[0m item"
    );
}

#[test]
fn test_invalid_spec_leaves_bare_content() {
    let (md, table) = from_jira_md_with_colors("{color:notacolor}x{color}");
    assert_eq!(md, "x");
    assert!(table.is_empty());
    assert!(!md.contains("CLRM"));
}

#[test]
fn test_bare_color_tag_is_no_color() {
    let (md, table) = from_jira_md_with_colors("{color}x{color}");
    assert_eq!(md, "x");
    assert!(table.is_empty());
}

#[test]
fn test_spec_whitespace_and_case() {
    assert_eq!(
        render_identity("{color: RED }x{color}"),
        render_identity("{color:red}x{color}")
    );
}

#[test]
fn test_multiple_regions_share_one_reset_marker() {
    let (md, table) = from_jira_md_with_colors("{color:red}a{color} {color:blue}b{color}");
    assert_eq!(table.len(), 2);
    assert_eq!(md.matches(table.reset_marker()).count(), 2);
    assert_eq!(
        table.expand(&md),
        format!("\x1b[31ma{ANSI_RESET} \x1b[34mb{ANSI_RESET}")
    );
}

#[test]
fn test_renderer_reformatting_keeps_colors() {
    let (md, table) = from_jira_md_with_colors("{color:yellow}note{color}");
    // a renderer that indents and wraps the paragraph
    let rendered = format!("  {}\n", md);
    assert_eq!(table.expand(&rendered), "  \x1b[33mnote\x1b[0m\n");
}

#[test]
fn test_dropped_placeholder_degrades_gracefully() {
    let (md, table) = from_jira_md_with_colors("{color:red}x{color}");
    let without_reset = md.replace(table.reset_marker(), "");
    assert_eq!(table.expand(&without_reset), "\x1b[31mx");
}

#[test]
fn test_tables_are_independent() {
    let (first, first_table) = from_jira_md_with_colors("{color:red}x{color}");
    let (_, second_table) = from_jira_md_with_colors("{color:red}x{color}");
    assert_ne!(first_table.reset_marker(), second_table.reset_marker());
    assert_eq!(second_table.expand(&first), first);
}

#[test]
fn test_expand_from_other_threads() {
    let (md, table) = from_jira_md_with_colors("{color:cyan}shared{color}");
    let table = Arc::new(table);
    let md = Arc::new(md);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            let md = Arc::clone(&md);
            thread::spawn(move || table.expand(&md))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("expander panicked"), "\x1b[36mshared\x1b[0m");
    }
}

#[test]
fn test_colors_disabled_by_options() {
    let options = ReverseOptions {
        preserve_colors: false,
    };
    let (md, table) = from_jira_md_with_options("{color:red}x{color} y", &options);
    assert_eq!(md, from_jira_md("{color:red}x{color} y"));
    assert_eq!(table.expand(&md), "x y");
}

#[test]
fn test_named_aliases() {
    assert_eq!(color_to_ansi("purple"), color_to_ansi("magenta"));
    assert_eq!(color_to_ansi("gray"), color_to_ansi("grey"));
}

#[test]
fn test_short_hex_matches_long_hex() {
    assert_eq!(color_to_ansi("#f00"), color_to_ansi("#ff0000"));
    assert_eq!(color_to_ansi("#f00"), "\x1b[38;2;255;0;0m");
}

proptest! {
    #[test]
    fn prop_no_color_tags_means_no_difference(input in "[a-z0-9 *_#|{}.\n\r-]{0,64}") {
        prop_assume!(!has_color_tags(&input));

        let direct = jira_to_markdown(&fix_escaped_markup(&normalize_line_endings(&input)));
        prop_assert_eq!(from_jira_md(&input), direct.clone());

        let (md, table) = from_jira_md_with_colors(&input);
        prop_assert!(table.is_empty());
        prop_assert_eq!(table.expand(&md), direct);
    }

    #[test]
    fn prop_crlf_is_normalized(input in "[a-z0-9 *_#|.\n-]{0,64}") {
        let crlf = input.replace('\n', "\r\n");
        prop_assert_eq!(from_jira_md(&crlf), from_jira_md(&input));
    }

    #[test]
    fn prop_hex_channels_are_decimal(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let expected = format!("\x1b[38;2;{r};{g};{b}m");
        prop_assert_eq!(color_to_ansi(&format!("#{r:02x}{g:02x}{b:02x}")), expected.clone());
        prop_assert_eq!(color_to_ansi(&format!("{r:02X}{g:02X}{b:02X}")), expected);
    }

    #[test]
    fn prop_empty_table_expand_is_identity(text in ".{0,64}") {
        let table = PlaceholderTable::new();
        prop_assert_eq!(table.expand(&text), text);
    }
}
