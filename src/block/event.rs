//! Block-level event types.

/// Kind of a scanned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// First line starts at column 0.
    Paragraph,
    /// First line is indented.
    Blockquote,
}

impl BlockKind {
    /// Classify a block by the indentation of its first line.
    #[inline]
    pub fn from_indent(indent: usize) -> Self {
        if indent == 0 {
            Self::Paragraph
        } else {
            Self::Blockquote
        }
    }

    /// HTML element name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Blockquote => "blockquote",
        }
    }
}

/// Owned form of the calls a scanner makes on its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a block.
    BlockStart {
        kind: BlockKind,
        /// Leading whitespace count shared by every line of the block.
        indent: usize,
    },
    /// Normalized text of the current block.
    Text(String),
    /// End of the current block.
    BlockEnd,
}

/// A complete block assembled from its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub indent: usize,
    pub text: String,
}
