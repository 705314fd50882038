//! Block-level scanner.
//!
//! The scanner is line-oriented and recognizes:
//! - Paragraphs (first line at column 0)
//! - Blockquotes (first line indented)
//!
//! Blocks are separated by blank lines or by a change of indentation.

mod event;
mod handler;
mod scanner;

pub use event::{Block, BlockEvent, BlockKind};
pub use handler::ContentHandler;
pub use scanner::{BlockScanner, LineStart};

/// Fold an event stream into block records.
///
/// Events outside a `BlockStart`/`BlockEnd` pair are ignored, as is a
/// trailing block that never ends.
pub fn assemble_blocks(events: &[BlockEvent]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<Block> = None;

    for event in events {
        match event {
            BlockEvent::BlockStart { kind, indent } => {
                open = Some(Block {
                    kind: *kind,
                    indent: *indent,
                    text: String::new(),
                });
            }
            BlockEvent::Text(text) => {
                if let Some(block) = open.as_mut() {
                    block.text.push_str(text);
                }
            }
            BlockEvent::BlockEnd => {
                if let Some(block) = open.take() {
                    blocks.push(block);
                }
            }
        }
    }

    blocks
}
