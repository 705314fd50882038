//! The callback interface driven by the block scanner.

use std::convert::Infallible;

use super::event::{BlockEvent, BlockKind};

/// Receives blocks from a scanner.
///
/// Per block the scanner calls `start_block`, then `handle_text` exactly
/// once, then `end_block`. Blocks arrive in input order and never nest.
///
/// Returning `Err` from any method stops the scan; the error is handed back
/// to the caller of the scan unchanged.
pub trait ContentHandler {
    /// Error a handler may raise to abort scanning.
    type Error;

    /// Announce a new block. `indent` is the leading whitespace count
    /// shared by all of its lines.
    fn start_block(&mut self, kind: BlockKind, indent: usize) -> Result<(), Self::Error>;

    /// Deliver the normalized text of the current block.
    fn handle_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Close the current block.
    fn end_block(&mut self) -> Result<(), Self::Error>;
}

impl<H: ContentHandler + ?Sized> ContentHandler for &mut H {
    type Error = H::Error;

    #[inline]
    fn start_block(&mut self, kind: BlockKind, indent: usize) -> Result<(), Self::Error> {
        (**self).start_block(kind, indent)
    }

    #[inline]
    fn handle_text(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).handle_text(text)
    }

    #[inline]
    fn end_block(&mut self) -> Result<(), Self::Error> {
        (**self).end_block()
    }
}

/// Collects events for later inspection.
impl ContentHandler for Vec<BlockEvent> {
    type Error = Infallible;

    fn start_block(&mut self, kind: BlockKind, indent: usize) -> Result<(), Infallible> {
        self.push(BlockEvent::BlockStart { kind, indent });
        Ok(())
    }

    fn handle_text(&mut self, text: &str) -> Result<(), Infallible> {
        self.push(BlockEvent::Text(text.to_owned()));
        Ok(())
    }

    fn end_block(&mut self) -> Result<(), Infallible> {
        self.push(BlockEvent::BlockEnd);
        Ok(())
    }
}
