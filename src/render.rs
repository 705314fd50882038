//! HTML output for scanned blocks.
//!
//! Each block becomes one element on its own line: `<p>` for paragraphs,
//! `<blockquote>` for blockquotes. Text is HTML-escaped.

use std::convert::Infallible;
use std::io::{self, Write};

use crate::block::{BlockKind, ContentHandler};

/// HTML writer with a reusable in-memory buffer.
///
/// # Example
/// ```
/// use rstscan::{BlockScanner, HtmlWriter};
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// let Ok(()) = BlockScanner::new("a < b\n\n quoted").scan(&mut writer);
///
/// assert_eq!(
///     writer.into_string(),
///     "<p>a &lt; b</p>\n<blockquote>quoted</blockquote>\n"
/// );
/// ```
pub struct HtmlWriter {
    out: String,
    open: Option<BlockKind>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add a little on top of the text; we reserve a quarter extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            open: None,
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
        self.open = None;
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHandler for HtmlWriter {
    type Error = Infallible;

    fn start_block(&mut self, kind: BlockKind, _indent: usize) -> Result<(), Infallible> {
        self.out.push('<');
        self.out.push_str(kind.tag());
        self.out.push('>');
        self.open = Some(kind);
        Ok(())
    }

    fn handle_text(&mut self, text: &str) -> Result<(), Infallible> {
        html_escape::encode_text_to_string(text, &mut self.out);
        Ok(())
    }

    fn end_block(&mut self) -> Result<(), Infallible> {
        if let Some(kind) = self.open.take() {
            self.out.push_str("</");
            self.out.push_str(kind.tag());
            self.out.push_str(">\n");
        }
        Ok(())
    }
}

/// HTML writer that streams straight into an [`io::Write`] sink.
///
/// A write failure aborts the scan and comes back out of
/// [`BlockScanner::scan`](crate::BlockScanner::scan) as the `io::Error`.
pub struct HtmlStream<W> {
    sink: W,
    open: Option<BlockKind>,
}

impl<W: Write> HtmlStream<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, open: None }
    }

    /// Flush and return the sink.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

impl<W: Write> ContentHandler for HtmlStream<W> {
    type Error = io::Error;

    fn start_block(&mut self, kind: BlockKind, _indent: usize) -> io::Result<()> {
        write!(self.sink, "<{}>", kind.tag())?;
        self.open = Some(kind);
        Ok(())
    }

    fn handle_text(&mut self, text: &str) -> io::Result<()> {
        self.sink
            .write_all(html_escape::encode_text(text).as_bytes())
    }

    fn end_block(&mut self) -> io::Result<()> {
        match self.open.take() {
            Some(kind) => writeln!(self.sink, "</{}>", kind.tag()),
            None => Ok(()),
        }
    }
}
