//! Export tests for the Jira format (CommonMark → Jira)

use insta::assert_snapshot;
use jfm_babel::{to_jira_md, to_jira_md_with_options, JiraOptions, MarkdownExtensions};

#[test]
fn test_empty_input() {
    assert_eq!(to_jira_md(""), "");
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(to_jira_md("\n\n"), "");
}

#[test]
fn test_headings() {
    assert_eq!(to_jira_md("# One\n"), "h1. One\n");
    assert_eq!(to_jira_md("###### Six\n"), "h6. Six\n");
    assert_eq!(to_jira_md("Setext\n======\n"), "h1. Setext\n");
}

#[test]
fn test_inline_markup() {
    assert_eq!(
        to_jira_md("**bold** *italic* ~~gone~~ `code`\n"),
        "*bold* _italic_ -gone- {{code}}\n"
    );
}

#[test]
fn test_links_and_images() {
    assert_eq!(
        to_jira_md("[docs](https://example.com) ![logo](logo.png)\n"),
        "[docs|https://example.com] !logo.png!\n"
    );
}

#[test]
fn test_code_block_without_language() {
    assert_eq!(
        to_jira_md("```\nplain\n```\n"),
        "{code}\nplain\n{code}\n"
    );
}

#[test]
fn test_indented_code_block() {
    assert_eq!(to_jira_md("    indented\n"), "{code}\nindented\n{code}\n");
}

#[test]
fn test_ordered_list_inside_bullets() {
    assert_eq!(
        to_jira_md("1. first\n   - inner\n2. second\n"),
        "# first\n#* inner\n# second\n"
    );
}

#[test]
fn test_task_list() {
    assert_eq!(
        to_jira_md("- [x] done\n- [ ] todo\n"),
        "* [x] done\n* [ ] todo\n"
    );
}

#[test]
fn test_hard_break() {
    assert_eq!(to_jira_md("one\\\ntwo\n"), "one\\\\\ntwo\n");
}

#[test]
fn test_table_without_extension_is_text() {
    let options = JiraOptions {
        extensions: MarkdownExtensions {
            table: false,
            ..MarkdownExtensions::default()
        },
        ..JiraOptions::default()
    };
    assert_eq!(
        to_jira_md_with_options("| a |\n| --- |\n", &options),
        "| a |\n| --- |\n"
    );
}

#[test]
fn test_color_tags_pass_through_unescaped() {
    assert_eq!(
        to_jira_md("{color:red}warning{color}\n"),
        "{color:red}warning{color}\n"
    );
}

#[test]
fn test_kitchensink() {
    let md = "# Release notes

Some **bold**, *italic*, ~~gone~~ and `code`.

- one
- two
  1. nested

| Name | Value |
| --- | --- |
| a | 1 |

```rust
let x = 1;
```

> quoted

---

See [docs](https://example.com).
";

    assert_snapshot!(to_jira_md(md), @r"
h1. Release notes

Some *bold*, _italic_, -gone- and {{code}}.

* one
* two
*# nested

||Name||Value||
|a|1|

{code:rust}
let x = 1;
{code}

{quote}
quoted
{quote}

----

See [docs|https://example.com].
");
}
