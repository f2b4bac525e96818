use pulldown_cmark::{Alignment as MdAlignment, Event, HeadingLevel, Tag, TagEnd};

use crate::error::Result;
use crate::models::Alignment;
use crate::table::{self, Column};

/// Width of the line drawn for a thematic break
const RULE_WIDTH: usize = 30;

/// Render markdown events as plain text
pub(super) fn render<'a>(
    events: impl IntoIterator<Item = Event<'a>>,
    wrap_width: usize,
) -> Result<String> {
    let mut writer = PlainTextWriter::new(wrap_width);
    for event in events {
        writer.event(event)?;
    }
    Ok(writer.finish())
}

struct TableState {
    alignments: Vec<Alignment>,
    head: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
}

/// Block that collects its own text and is indented into its parent on close
enum Block {
    Quote,
    Item { marker: String },
}

struct Container {
    block: Block,
    text: String,
}

struct PlainTextWriter {
    wrap_width: usize,
    output: String,
    /// Open quotes and list items, innermost last
    containers: Vec<Container>,
    in_code_block: bool,
    code_buffer: String,
    /// Ordered lists carry their next number, bullet lists None
    lists: Vec<Option<u64>>,
    /// Destination and label start offset of open links and images
    links: Vec<(String, usize)>,
    heading: Option<(HeadingLevel, usize)>,
    table: Option<TableState>,
    in_cell: bool,
    cell: String,
}

impl PlainTextWriter {
    fn new(wrap_width: usize) -> Self {
        Self {
            wrap_width,
            output: String::new(),
            containers: Vec::new(),
            in_code_block: false,
            code_buffer: String::new(),
            lists: Vec::new(),
            links: Vec::new(),
            heading: None,
            table: None,
            in_cell: false,
            cell: String::new(),
        }
    }

    fn target(&mut self) -> &mut String {
        if self.in_cell {
            return &mut self.cell;
        }
        match self.containers.last_mut() {
            Some(container) => &mut container.text,
            None => &mut self.output,
        }
    }

    /// Leave one blank line between the previous block and the next one
    fn block_break(&mut self) {
        let target = self.target();
        let trimmed = target.trim_end_matches([' ', '\n']).len();
        target.truncate(trimmed);
        if !target.is_empty() {
            target.push_str("\n\n");
        }
    }

    /// Start the next line unless the target is already at one
    fn line_break(&mut self) {
        let target = self.target();
        if !target.is_empty() && !target.ends_with('\n') {
            target.push('\n');
        }
    }

    fn open(&mut self, block: Block) {
        self.containers.push(Container {
            block,
            text: String::new(),
        });
    }

    /// Close the innermost container, writing its text into the parent
    fn close(&mut self) {
        let Some(container) = self.containers.pop() else {
            return;
        };
        let text = container.text.trim_end();

        match container.block {
            Block::Quote => {
                let quoted = text
                    .lines()
                    .map(|line| {
                        if line.is_empty() {
                            ">".to_string()
                        } else {
                            format!("> {}", line)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                self.block_break();
                self.target().push_str(&quoted);
            }
            Block::Item { marker } => {
                let indent = " ".repeat(marker.chars().count());
                let mut item = marker.trim_end().to_string();
                for (index, line) in text.lines().enumerate() {
                    if index == 0 {
                        item = format!("{}{}", marker, line);
                    } else if line.is_empty() {
                        item.push('\n');
                    } else {
                        item.push('\n');
                        item.push_str(&indent);
                        item.push_str(line);
                    }
                }
                self.line_break();
                self.target().push_str(&item);
            }
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag)?,
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_buffer.push_str(&text);
                } else {
                    self.target().push_str(&text);
                }
            }
            Event::Code(code) => self.target().push_str(&code),
            Event::SoftBreak | Event::HardBreak => {
                let separator = if self.in_cell { ' ' } else { '\n' };
                self.target().push(separator);
            }
            Event::Rule => {
                self.block_break();
                self.target().push_str(&"-".repeat(RULE_WIDTH));
            }
            Event::TaskListMarker(checked) => {
                self.target().push_str(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.block_break(),
            Tag::Heading { level, .. } => {
                self.block_break();
                let start = self.target().len();
                self.heading = Some((level, start));
            }
            Tag::BlockQuote { .. } => {
                self.block_break();
                self.open(Block::Quote);
            }
            Tag::CodeBlock(_) => {
                self.block_break();
                self.in_code_block = true;
                self.code_buffer.clear();
            }
            Tag::List(first) => {
                // A list nested in an item follows the item's text directly
                let in_item = matches!(
                    self.containers.last(),
                    Some(Container {
                        block: Block::Item { .. },
                        ..
                    })
                );
                if in_item {
                    self.line_break();
                } else {
                    self.block_break();
                }
                self.lists.push(first);
            }
            Tag::Item => {
                let marker = match self.lists.last().copied().flatten() {
                    Some(number) => format!("{}. ", number),
                    None => "* ".to_string(),
                };
                self.open(Block::Item { marker });
            }
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                let start = self.target().len();
                self.links.push((dest_url.to_string(), start));
            }
            Tag::Table(alignments) => {
                self.block_break();
                self.table = Some(TableState {
                    alignments: alignments
                        .iter()
                        .map(|a| match a {
                            MdAlignment::Right => Alignment::Right,
                            _ => Alignment::Left,
                        })
                        .collect(),
                    head: Vec::new(),
                    rows: Vec::new(),
                    row: Vec::new(),
                });
            }
            Tag::TableCell => {
                self.in_cell = true;
                self.cell.clear();
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<()> {
        match tag {
            TagEnd::Heading { .. } => {
                if let Some((level, start)) = self.heading.take() {
                    let target = self.target();
                    let width = target[start..].chars().count();
                    let underline = match level {
                        HeadingLevel::H1 => Some('='),
                        HeadingLevel::H2 => Some('-'),
                        _ => None,
                    };
                    if let Some(c) = underline {
                        target.push('\n');
                        target.push_str(&c.to_string().repeat(width));
                    }
                }
            }
            TagEnd::BlockQuote { .. } => self.close(),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                let code = std::mem::take(&mut self.code_buffer);
                let indented = code
                    .trim_end_matches('\n')
                    .lines()
                    .map(|line| {
                        if line.is_empty() {
                            String::new()
                        } else {
                            format!("    {}", line)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                self.target().push_str(&indented);
            }
            TagEnd::List { .. } => {
                self.lists.pop();
            }
            TagEnd::Item => {
                self.close();
                if let Some(Some(number)) = self.lists.last_mut() {
                    *number += 1;
                }
            }
            TagEnd::Link | TagEnd::Image => {
                if let Some((url, start)) = self.links.pop() {
                    let target = self.target();
                    let label = target.get(start..).unwrap_or("").trim().to_string();
                    let redundant = url.is_empty()
                        || url == label
                        || url.strip_prefix("mailto:") == Some(label.as_str());
                    if !redundant {
                        if label.is_empty() {
                            target.push_str(&url);
                        } else {
                            target.push_str(&format!(" ({})", url));
                        }
                    }
                }
            }
            TagEnd::TableCell => {
                self.in_cell = false;
                let cell = std::mem::take(&mut self.cell).trim().to_string();
                if let Some(table) = self.table.as_mut() {
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.head = std::mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.write_table(table)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn write_table(&mut self, table: TableState) -> Result<()> {
        let columns: Vec<Column> = table
            .head
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let align = table.alignments.get(index).copied().unwrap_or_default();
                Column::new(label.as_str(), align)
            })
            .collect();

        // Markdown rows may be ragged: pad short rows, drop extra cells
        let rows: Vec<Vec<String>> = table
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns.len(), String::new());
                row
            })
            .collect();

        let lines = table::format(&columns, &rows, self.wrap_width)?;
        if !lines.is_empty() {
            self.target().push_str(&lines.join("\n"));
        }
        Ok(())
    }

    fn finish(self) -> String {
        self.output.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    fn plain(markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        render(Parser::new_ext(markdown, options), 30).unwrap()
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(plain("First **bold**.\n\nSecond _em_."), "First bold.\n\nSecond em.");
    }

    #[test]
    fn test_headings_underlined() {
        assert_eq!(
            plain("# Title\n\n## Part\n\n### Small"),
            "Title\n=====\n\nPart\n----\n\nSmall"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(plain("- a\n- b\n  - c"), "* a\n* b\n  * c");
        assert_eq!(plain("3. x\n4. y"), "3. x\n4. y");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            plain("[site](https://example.com) and <https://example.com>"),
            "site (https://example.com) and https://example.com"
        );
    }

    #[test]
    fn test_code_block_indented() {
        assert_eq!(plain("```\nlet x = 1;\n```"), "    let x = 1;");
    }

    #[test]
    fn test_multi_paragraph_quote() {
        assert_eq!(plain("> one\n>\n> two"), "> one\n>\n> two");
    }

    #[test]
    fn test_ragged_table_rows() {
        let out = plain("| A | B |\n|---|--:|\n| 1 |\n| 2 | 3 | 4 |");
        assert_eq!(
            out,
            "+---+---+\n| A | B |\n+---+---+\n| 1 |   |\n| 2 | 3 |\n+---+---+"
        );
    }

    #[test]
    fn test_right_aligned_markdown_column() {
        let out = plain("| Name | Amount |\n|------|-------:|\n| a | 1 |");
        assert!(out.contains("| a    |      1 |"), "{}", out);
    }

    #[test]
    fn test_list_item_with_two_paragraphs() {
        assert_eq!(
            plain("- a\n\n  second para\n- b"),
            "* a\n\n  second para\n* b"
        );
    }

    #[test]
    fn test_ordered_item_continuation_indent() {
        assert_eq!(
            plain("1. first\n\n   more\n2. second"),
            "1. first\n\n   more\n2. second"
        );
    }

    #[test]
    fn test_heading_inside_list_item_keeps_marker() {
        assert_eq!(plain("- # Title\n- item"), "* Title\n  =====\n* item");
    }

    #[test]
    fn test_table_inside_list_item_keeps_marker() {
        assert_eq!(
            plain("- | A | B |\n  |---|---|\n  | 1 | 2 |"),
            "* +---+---+\n  | A | B |\n  +---+---+\n  | 1 | 2 |\n  +---+---+"
        );
    }

    #[test]
    fn test_nested_quotes_keep_depth() {
        assert_eq!(
            plain("> outer\n>\n> > inner"),
            "> outer\n>\n> > inner"
        );
        assert_eq!(
            plain("> > a\n> >\n> > b"),
            "> > a\n> >\n> > b"
        );
    }

    #[test]
    fn test_quote_inside_list_item() {
        assert_eq!(plain("- > quoted\n- plain"), "* > quoted\n* plain");
    }

    #[test]
    fn test_code_block_keeps_blank_lines() {
        assert_eq!(
            plain("```\nline one\n\n\n\nline two\n```"),
            "    line one\n\n\n\n    line two"
        );
    }
}
