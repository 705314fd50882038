//! rstscan: streaming block scanner for a subset of reStructuredText
//!
//! The scanner splits text into paragraphs and blockquotes and reports each
//! one through a push-style [`ContentHandler`].
//!
//! # Design Principles
//! - No tree: blocks are reported as they are found, then forgotten
//! - Indentation is the only structural signal
//! - Single forward pass, no backtracking
//! - Scanning itself never fails; only handlers can abort a scan
//!
//! # Example
//! ```
//! let html = rstscan::to_html("Hello\nworld\n\n  quoted");
//! assert_eq!(html, "<p>Hello\nworld</p>\n<blockquote>quoted</blockquote>\n");
//! ```

pub mod block;
pub mod cursor;
pub mod error;
pub mod limits;
pub mod render;

use std::io::Write;

// Re-export primary types
pub use block::{Block, BlockEvent, BlockKind, BlockScanner, ContentHandler, assemble_blocks};
pub use error::Error;
pub use render::{HtmlStream, HtmlWriter};

use limits::{MAX_TAB_WIDTH, TAB_WIDTH};

/// Scanning options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    tab_width: usize,
}

impl Options {
    /// Options with a custom tab width.
    ///
    /// Fails unless `1 <= width <= MAX_TAB_WIDTH`.
    pub fn with_tab_width(width: usize) -> Result<Self, Error> {
        if width == 0 || width > MAX_TAB_WIDTH {
            return Err(Error::InvalidTabWidth(width));
        }
        Ok(Self { tab_width: width })
    }

    /// Columns between tab stops.
    #[inline]
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
        }
    }
}

/// Scan `input`, reporting every block to `handler`.
///
/// Returns the handler's first error, if any; scanning stops there.
pub fn scan<H>(input: &str, handler: &mut H) -> Result<(), H::Error>
where
    H: ContentHandler + ?Sized,
{
    BlockScanner::new(input).scan(handler)
}

/// Scan `input` into block records.
pub fn to_blocks(input: &str) -> Vec<Block> {
    let mut events: Vec<BlockEvent> = Vec::new();
    let Ok(()) = scan(input, &mut events);
    assemble_blocks(&events)
}

/// Convert text to HTML.
///
/// # Example
/// ```
/// let html = rstscan::to_html("a\tb");
/// assert_eq!(html, "<p>a       b</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert text to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let Ok(()) = BlockScanner::with_options(input, *options).scan(&mut writer);
    writer.into_string()
}

/// Convert text to HTML, streaming the output into `sink`.
pub fn write_html<W: Write>(input: &str, options: &Options, sink: W) -> Result<(), Error> {
    let mut stream = HtmlStream::new(sink);
    BlockScanner::with_options(input, *options).scan(&mut stream)?;
    stream.into_inner()?;
    Ok(())
}
