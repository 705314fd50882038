//! Block scanner implementation.

use crate::cursor::{Cursor, is_horizontal_space};
use crate::Options;

use super::event::BlockKind;
use super::handler::ContentHandler;

/// Prefix that introduces a directive.
const DIRECTIVE_MARKER: &[u8] = b".. ";

/// Prefix that introduces a bullet list item.
const LIST_MARKER: u8 = b'*';

/// What the first line of a block opens with.
///
/// Directives and list items are recognized but have no parser yet; both
/// currently fall through to ordinary block scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStart {
    /// `.. ` directive marker.
    Directive,
    /// `*` bullet marker.
    ListItem,
    /// Anything else.
    Text,
}

impl LineStart {
    /// Classify the line at the cursor, which must sit on the first
    /// non-whitespace byte.
    pub fn detect(cursor: &Cursor<'_>) -> Self {
        if cursor.starts_with(DIRECTIVE_MARKER) {
            Self::Directive
        } else if cursor.at(LIST_MARKER) {
            Self::ListItem
        } else {
            Self::Text
        }
    }
}

/// Block scanner state.
///
/// A scanner walks its input once, front to back. Between blocks the
/// cursor always rests at the start of a physical line.
pub struct BlockScanner<'a> {
    /// Input text.
    input: &'a str,
    /// Current cursor position.
    cursor: Cursor<'a>,
    /// Columns between tab stops.
    tab_width: usize,
    /// Normalized text of the block being scanned.
    text: String,
    /// Blocks emitted so far.
    blocks: usize,
}

impl<'a> BlockScanner<'a> {
    /// Create a scanner with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, Options::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(input: &'a str, options: Options) -> Self {
        Self {
            input,
            cursor: Cursor::new(input.as_bytes()),
            tab_width: options.tab_width(),
            text: String::with_capacity(256),
            blocks: 0,
        }
    }

    /// Number of blocks emitted so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Scan all remaining input, reporting each block to `handler`.
    ///
    /// Stops at the first handler error and returns it unchanged.
    pub fn scan<H>(&mut self, handler: &mut H) -> Result<(), H::Error>
    where
        H: ContentHandler + ?Sized,
    {
        while let Some(indent) = self.skip_blank_lines() {
            let kind = BlockKind::from_indent(indent);

            match LineStart::detect(&self.cursor) {
                LineStart::Directive => log::debug!(
                    "directive marker at offset {}, scanning as {:?}",
                    self.cursor.offset(),
                    kind
                ),
                LineStart::ListItem => log::debug!(
                    "list marker at offset {}, scanning as {:?}",
                    self.cursor.offset(),
                    kind
                ),
                LineStart::Text => {}
            }

            self.scan_block(kind, indent, handler)?;
        }

        log::debug!(
            "scanned {} blocks from {} bytes",
            self.blocks,
            self.input.len()
        );
        Ok(())
    }

    /// Skip blank lines.
    ///
    /// Returns the indentation of the next non-blank line, leaving the cursor
    /// on its first non-whitespace byte, or `None` at end of input.
    fn skip_blank_lines(&mut self) -> Option<usize> {
        loop {
            let indent = self.cursor.skip_whitespace();
            if self.cursor.eat(b'\n') {
                continue;
            }
            if self.cursor.is_eof() {
                return None;
            }
            return Some(indent);
        }
    }

    /// Scan one block whose first line starts at the cursor.
    fn scan_block<H>(
        &mut self,
        kind: BlockKind,
        indent: usize,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H: ContentHandler + ?Sized,
    {
        log::trace!(
            "{:?} at offset {} with indent {}",
            kind,
            self.cursor.offset(),
            indent
        );
        handler.start_block(kind, indent)?;

        self.text.clear();
        self.scan_line(indent);

        while self.continues_block() {
            // A line at a different indentation belongs to the next block,
            // so only commit the probe when the column matches.
            let mut probe = self.cursor;
            if probe.skip_whitespace() != indent {
                break;
            }
            self.cursor = probe;

            self.text.push('\n');
            self.scan_line(indent);
        }

        if self.text.ends_with('\n') {
            self.text.pop();
        }

        handler.handle_text(&self.text)?;
        handler.end_block()?;
        self.blocks += 1;

        log::trace!("block ended at offset {}", self.cursor.offset());
        Ok(())
    }

    /// Append the rest of the current line to the block text and move past
    /// its terminator.
    fn scan_line(&mut self, indent: usize) {
        let start = self.cursor.offset();
        let line_end = self.cursor.line_end();
        let end = trim_trailing_space(self.input.as_bytes(), start, line_end);

        self.push_normalized(start, end, indent);

        self.cursor.advance(line_end - start);
        self.cursor.eat(b'\n');
    }

    /// Look ahead for a blank line or end of input.
    ///
    /// Either one ends the block and is consumed. Otherwise the cursor is
    /// left at the start of the next line.
    fn continues_block(&mut self) -> bool {
        let mut probe = self.cursor;
        probe.skip_whitespace();
        if probe.is_eof() || probe.eat(b'\n') {
            self.cursor = probe;
            return false;
        }
        true
    }

    /// Append `input[start..end]` with whitespace normalized.
    ///
    /// Tabs advance to the next tab stop of the absolute column, which starts
    /// at `indent`. Every other whitespace byte becomes one space.
    fn push_normalized(&mut self, start: usize, end: usize, indent: usize) {
        let input = self.input;
        let line = &input[start..end];
        let mut column = indent;
        let mut run_start = 0;

        for (i, b) in line.bytes().enumerate() {
            if !is_horizontal_space(b) {
                continue;
            }

            let run = &line[run_start..i];
            self.text.push_str(run);
            column += run.chars().count();

            if b == b'\t' {
                let spaces = self.tab_width - column % self.tab_width;
                self.text.extend(std::iter::repeat_n(' ', spaces));
                column += spaces;
            } else {
                self.text.push(' ');
                column += 1;
            }
            run_start = i + 1;
        }

        self.text.push_str(&line[run_start..]);
    }
}

/// Trim trailing horizontal whitespace from `input[start..end]`.
fn trim_trailing_space(input: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && is_horizontal_space(input[end - 1]) {
        end -= 1;
    }
    end
}
