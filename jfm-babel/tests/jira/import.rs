//! Import tests for the Jira format (Jira → CommonMark)

use insta::assert_snapshot;
use jfm_babel::from_jira_md;
use jfm_babel::formats::jira::jira_to_markdown;
use jfm_babel::transforms::{fix_escaped_markup, normalize_line_endings};

#[test]
fn test_empty_input() {
    assert_eq!(from_jira_md(""), "");
}

#[test]
fn test_headings() {
    assert_eq!(from_jira_md("h1. Title"), "# Title");
    assert_eq!(from_jira_md("h3. Deeper"), "### Deeper");
}

#[test]
fn test_escaped_emphasis_before_translation() {
    assert_eq!(fix_escaped_markup("{*}bold{*}"), "*bold*");
    assert_eq!(fix_escaped_markup("{_}italic{_}"), "_italic_");

    assert_eq!(from_jira_md("{*}bold{*}"), "**bold**");
    assert_eq!(from_jira_md("{_}italic{_}"), "*italic*");
    assert_eq!(from_jira_md("a{*}b{*}c"), from_jira_md("a*b*c"));
}

#[test]
fn test_colors_are_stripped() {
    assert_eq!(from_jira_md("{color:red}alert{color} now"), "alert now");
    assert_eq!(from_jira_md("{color}plain{color}"), "plain");
    assert_eq!(from_jira_md("{color:#ff0000}*hot*{color}"), "**hot**");
}

#[test]
fn test_crlf_table_matches_lf_table() {
    let lf = "||Key||Value||\n|a|1|\n|b|2|\n";
    let crlf = lf.replace('\n', "\r\n");

    assert_eq!(from_jira_md(&crlf), from_jira_md(lf));
    assert_eq!(from_jira_md(lf), "| Key | Value |\n| --- | --- |\n|a|1|\n|b|2|\n");
}

#[test]
fn test_translator_needs_normalized_line_endings() {
    let crlf = "||Key||Value||\r\n|a|1|\r\n";
    assert_ne!(jira_to_markdown(crlf), jira_to_markdown(&normalize_line_endings(crlf)));
}

#[test]
fn test_links() {
    assert_eq!(
        from_jira_md("[Example|https://example.com]"),
        "[Example](https://example.com)"
    );
    assert_eq!(from_jira_md("[https://example.com]"), "<https://example.com>");
    assert_eq!(from_jira_md("[not a link]"), "[not a link]");
}

#[test]
fn test_images() {
    assert_eq!(from_jira_md("!diagram.png|width=300!"), "![](diagram.png)");
    assert_eq!(from_jira_md("Hey!"), "Hey!");
}

#[test]
fn test_inline_html_markup() {
    assert_eq!(from_jira_md("??Someone??"), "<cite>Someone</cite>");
    assert_eq!(from_jira_md("+added+"), "<ins>added</ins>");
    assert_eq!(from_jira_md("x^2^"), "x<sup>2</sup>");
    assert_eq!(from_jira_md("H~2~O"), "H<sub>2</sub>O");
    assert_eq!(from_jira_md("-removed-"), "~~removed~~");
}

#[test]
fn test_monospace_mentioning_code() {
    assert_eq!(
        from_jira_md("use {{code}} and {{code}} here"),
        "use `code` and `code` here"
    );
    assert_eq!(from_jira_md("set {{code:java}} first"), "set `code:java` first");
    assert_eq!(
        from_jira_md("{{noformat}} vs {code:sh}\nls\n{code}"),
        "`noformat` vs ```sh\nls\n```"
    );
}

#[test]
fn test_control_characters_pass_through() {
    assert_eq!(
        from_jira_md("a \u{1a}0\u{1a} b {{x}}"),
        "a \u{1a}0\u{1a} b `x`"
    );
}

#[test]
fn test_quotes() {
    assert_eq!(from_jira_md("bq. quoted"), "> quoted");
    assert_eq!(
        from_jira_md("{quote}\nfirst\n\nsecond\n{quote}"),
        "> first\n>\n> second"
    );
}

#[test]
fn test_kitchensink() {
    let jira = "h2. Summary

*Bold* and _italic_ with {{inline_code}}.

* first
** nested
# numbered

||Key||Value||
|a|[link|https://example.com]|

{code:java}
int x = *y*;
{code}

bq. quoted text
----";

    assert_snapshot!(from_jira_md(jira), @r"
## Summary

**Bold** and *italic* with `inline_code`.

- first
  - nested
1. numbered

| Key | Value |
| --- | --- |
|a|[link](https://example.com)|

```java
int x = *y*;
```

> quoted text
---
");
}
