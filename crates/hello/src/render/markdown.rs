//! Markdown to terminal text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::theme::Painter;

/// Renders a markdown document into wrapped, optionally colored lines.
///
/// Headings keep their `#` markers, paragraphs and list items wrap at
/// `width`, code blocks are indented, and rules span the full width.
#[must_use]
pub fn render_markdown(markdown: &str, painter: &Painter, width: usize) -> String {
    let mut ctx = RenderContext::new(painter, width);
    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        ctx.handle_event(event);
    }
    ctx.finish()
}

struct RenderContext<'p> {
    painter: &'p Painter,
    width: usize,
    lines: Vec<String>,
    text_buffer: String,
    heading: Option<HeadingLevel>,
    in_code_block: bool,
    code_block_content: String,
    /// One entry per open list: the next item number, or `None` for bullets.
    list_numbers: Vec<Option<u64>>,
    emphasis: usize,
    strong: usize,
    link_url: Option<String>,
}

impl<'p> RenderContext<'p> {
    const fn new(painter: &'p Painter, width: usize) -> Self {
        Self {
            painter,
            width,
            lines: Vec::new(),
            text_buffer: String::new(),
            heading: None,
            in_code_block: false,
            code_block_content: String::new(),
            list_numbers: Vec::new(),
            emphasis: 0,
            strong: 0,
            link_url: None,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.heading = Some(level);
                self.text_buffer.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_heading();
                self.heading = None;
            }

            Event::Start(Tag::Paragraph) => {
                if self.list_numbers.is_empty() {
                    self.text_buffer.clear();
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if self.list_numbers.is_empty() {
                    self.flush_paragraph();
                }
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.in_code_block = true;
                self.code_block_content.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush_code_block();
                self.in_code_block = false;
            }

            Event::Start(Tag::List(first)) => {
                // An item's own text comes before its nested list.
                if !self.list_numbers.is_empty() {
                    self.flush_list_item();
                }
                self.list_numbers.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_numbers.pop();
                if self.list_numbers.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => self.text_buffer.clear(),
            Event::End(TagEnd::Item) => self.flush_list_item(),

            Event::Start(Tag::Emphasis) => self.emphasis += 1,
            Event::End(TagEnd::Emphasis) => self.emphasis = self.emphasis.saturating_sub(1),
            Event::Start(Tag::Strong) => self.strong += 1,
            Event::End(TagEnd::Strong) => self.strong = self.strong.saturating_sub(1),

            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link_url = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = self.link_url.take() {
                    let shown = self.painter.muted(&format!(" ({url})"));
                    self.text_buffer.push_str(&shown);
                }
            }

            Event::Text(text) => {
                if self.in_code_block {
                    self.code_block_content.push_str(&text);
                } else {
                    let styled = self.style_inline(&text);
                    self.text_buffer.push_str(&styled);
                }
            }
            Event::Code(code) => {
                let styled = self.painter.fg(&code, self.painter.theme().secondary);
                self.text_buffer.push_str(&styled);
            }
            Event::SoftBreak => self.text_buffer.push(' '),
            Event::HardBreak => self.text_buffer.push('\n'),
            Event::Rule => {
                let rule = "─".repeat(self.width);
                self.lines.push(self.painter.fg(&rule, self.painter.theme().border));
                self.blank_line();
            }

            _ => {}
        }
    }

    fn style_inline(&self, text: &str) -> String {
        let theme = self.painter.theme();
        if self.link_url.is_some() {
            self.painter.fg(text, theme.info)
        } else if self.strong > 0 {
            self.painter.bold(text)
        } else if self.emphasis > 0 {
            self.painter.italic(text)
        } else {
            text.to_owned()
        }
    }

    fn flush_heading(&mut self) {
        let Some(level) = self.heading else {
            return;
        };
        let hashes = "#".repeat(level as usize);
        let text = std::mem::take(&mut self.text_buffer);
        let theme = self.painter.theme();
        let color = if matches!(level, HeadingLevel::H1 | HeadingLevel::H2) {
            theme.primary
        } else {
            theme.secondary
        };
        let heading = self.painter.strong(&format!("{hashes} {}", text.trim()), color);
        self.lines.push(heading);
        self.blank_line();
    }

    fn flush_paragraph(&mut self) {
        let text = std::mem::take(&mut self.text_buffer);
        if text.trim().is_empty() {
            return;
        }
        let wrapped = textwrap::fill(text.trim(), self.width);
        self.lines.extend(wrapped.lines().map(str::to_owned));
        self.blank_line();
    }

    fn flush_list_item(&mut self) {
        let text = std::mem::take(&mut self.text_buffer);
        if text.trim().is_empty() {
            return;
        }
        let depth = self.list_numbers.len().saturating_sub(1);
        let indent = "  ".repeat(depth);
        let marker = match self.list_numbers.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{number}. ");
                *number += 1;
                marker
            }
            _ => "• ".to_owned(),
        };
        let first = format!("{indent}{marker}");
        let rest = " ".repeat(first.chars().count());
        let options = textwrap::Options::new(self.width)
            .initial_indent(&first)
            .subsequent_indent(&rest);
        let wrapped = textwrap::fill(text.trim(), options);
        self.lines.extend(wrapped.lines().map(str::to_owned));
    }

    fn flush_code_block(&mut self) {
        let code = std::mem::take(&mut self.code_block_content);
        let color = self.painter.theme().secondary;
        for line in code.trim_end_matches('\n').lines() {
            let painted = self.painter.fg(line, color);
            self.lines.push(format!("    {painted}").trim_end().to_owned());
        }
        self.blank_line();
    }

    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> String {
        // Text outside any block, e.g. a lone inline run.
        if !self.text_buffer.trim().is_empty() {
            self.flush_paragraph();
        }
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}
