//! Jira markup serialization (CommonMark → Jira)
//!
//! Walks a comrak tree and writes Jira wiki markup. Block siblings at document and quote level
//! are separated by a blank line; list items and table rows are written line by line.

use super::JiraOptions;
use comrak::nodes::{AstNode, ListType, NodeValue};

/// Render a parsed CommonMark document as Jira markup.
///
/// The result is either empty or ends with exactly one newline.
pub fn serialize_to_jira<'a>(root: &'a AstNode<'a>, options: &JiraOptions) -> String {
    let mut serializer = JiraSerializer::new(options);
    serializer.block(root);
    serializer.finish()
}

struct JiraSerializer<'o> {
    options: &'o JiraOptions,
    output: String,
    /// One `*` or `#` per open list, outermost first.
    list_markers: String,
    in_table_cell: bool,
}

impl<'o> JiraSerializer<'o> {
    fn new(options: &'o JiraOptions) -> Self {
        JiraSerializer {
            options,
            output: String::new(),
            list_markers: String::new(),
            in_table_cell: false,
        }
    }

    fn finish(mut self) -> String {
        let trimmed = self.output.trim_end_matches('\n').len();
        self.output.truncate(trimmed);
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }

    fn end_line(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
    }

    /// Write child blocks separated by blank lines. Children that produce no output do not
    /// leave a gap behind.
    fn blocks<'a>(&mut self, parent: &'a AstNode<'a>) {
        let mut first = true;
        for child in parent.children() {
            let mark = self.output.len();
            if !first {
                self.output.push('\n');
            }
            let before = self.output.len();
            self.block(child);
            if self.output.len() == before {
                self.output.truncate(mark);
            } else {
                first = false;
            }
        }
    }

    fn block<'a>(&mut self, node: &'a AstNode<'a>) {
        let data = node.data.borrow();
        match &data.value {
            NodeValue::Document => self.blocks(node),

            NodeValue::FrontMatter(_) => {}

            NodeValue::Paragraph => {
                self.inlines(node);
                self.end_line();
            }

            NodeValue::Heading(heading) => {
                self.output.push_str(&format!("h{}. ", heading.level.clamp(1, 6)));
                self.inlines(node);
                self.end_line();
            }

            NodeValue::ThematicBreak => self.output.push_str("----\n"),

            NodeValue::CodeBlock(code_block) => {
                let language = code_block.info.split_whitespace().next().unwrap_or("");
                if language.is_empty() {
                    self.output.push_str("{code}\n");
                } else {
                    self.output.push_str(&format!("{{code:{language}}}\n"));
                }
                self.output.push_str(&code_block.literal);
                self.end_line();
                self.output.push_str("{code}\n");
            }

            NodeValue::HtmlBlock(html) => {
                self.output.push_str(&html.literal);
                self.end_line();
            }

            NodeValue::BlockQuote => {
                self.output.push_str("{quote}\n");
                self.blocks(node);
                self.end_line();
                self.output.push_str("{quote}\n");
            }

            NodeValue::List(list) => {
                let ordered = matches!(list.list_type, ListType::Ordered);
                self.list(node, ordered);
            }

            NodeValue::Table(_) => {
                for row in node.children() {
                    self.table_row(row);
                }
            }

            _ => self.blocks(node),
        }
    }

    fn list<'a>(&mut self, node: &'a AstNode<'a>, ordered: bool) {
        self.list_markers.push(if ordered { '#' } else { '*' });
        for item in node.children() {
            self.list_item(item);
        }
        self.list_markers.pop();
    }

    fn list_item<'a>(&mut self, item: &'a AstNode<'a>) {
        self.end_line();
        self.output.push_str(&self.list_markers);
        self.output.push(' ');

        if let NodeValue::TaskItem(checked) = &item.data.borrow().value {
            self.output
                .push_str(if checked.is_some() { "[x] " } else { "[ ] " });
        }

        // The first paragraph goes on the marker line, everything else follows on its own lines.
        let mut line_open = true;
        for child in item.children() {
            let data = child.data.borrow();
            match &data.value {
                NodeValue::Paragraph => {
                    self.inlines(child);
                    self.end_line();
                }
                NodeValue::List(list) => {
                    self.end_line();
                    let ordered = matches!(list.list_type, ListType::Ordered);
                    self.list(child, ordered);
                }
                _ => {
                    self.end_line();
                    self.block(child);
                }
            }
            line_open = false;
        }
        if line_open {
            let trimmed = self.output.trim_end_matches(' ').len();
            self.output.truncate(trimmed);
        }
        self.end_line();
    }

    fn table_row<'a>(&mut self, row: &'a AstNode<'a>) {
        let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let separator = if header { "||" } else { "|" };

        self.in_table_cell = true;
        for cell in row.children() {
            self.output.push_str(separator);
            self.inlines(cell);
        }
        self.in_table_cell = false;

        self.output.push_str(separator);
        self.output.push('\n');
    }

    fn inlines<'a>(&mut self, parent: &'a AstNode<'a>) {
        for child in parent.children() {
            self.inline(child);
        }
    }

    /// Render the inline children of `parent` into a separate string.
    fn capture_inlines<'a>(&mut self, parent: &'a AstNode<'a>) -> String {
        let saved = std::mem::take(&mut self.output);
        self.inlines(parent);
        std::mem::replace(&mut self.output, saved)
    }

    fn wrap<'a>(&mut self, node: &'a AstNode<'a>, delimiter: &str) {
        self.output.push_str(delimiter);
        self.inlines(node);
        self.output.push_str(delimiter);
    }

    fn inline<'a>(&mut self, node: &'a AstNode<'a>) {
        let data = node.data.borrow();
        match &data.value {
            NodeValue::Text(text) => self.text(text),

            NodeValue::SoftBreak => {
                self.output.push(if self.in_table_cell { ' ' } else { '\n' });
            }

            NodeValue::LineBreak => {
                self.output
                    .push_str(if self.in_table_cell { "\\\\ " } else { "\\\\\n" });
            }

            NodeValue::Code(code) => {
                self.output.push_str("{{");
                self.output.push_str(&code.literal);
                self.output.push_str("}}");
            }

            NodeValue::HtmlInline(html) => self.output.push_str(html),

            NodeValue::Strong => self.wrap(node, "*"),
            NodeValue::Emph => self.wrap(node, "_"),
            NodeValue::Strikethrough => self.wrap(node, "-"),
            NodeValue::Superscript => self.wrap(node, "^"),

            NodeValue::Link(link) => {
                let text = self.capture_inlines(node);
                if text.is_empty() || text == link.url {
                    self.output.push_str(&format!("[{}]", link.url));
                } else {
                    self.output.push_str(&format!("[{text}|{}]", link.url));
                }
            }

            NodeValue::Image(link) => {
                self.output.push_str(&format!("!{}!", link.url));
            }

            _ => self.inlines(node),
        }
    }

    fn text(&mut self, text: &str) {
        if self.options.escape_macros {
            for c in text.chars() {
                if matches!(c, '{' | '}') {
                    self.output.push('\\');
                }
                self.output.push(c);
            }
        } else {
            self.output.push_str(text);
        }
    }
}
