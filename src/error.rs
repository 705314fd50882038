//! Crate error type.

use std::io;
use std::path::PathBuf;

use crate::limits::MAX_TAB_WIDTH;

/// Errors raised outside the scanner itself.
///
/// Scanning never fails on its own; these cover configuration and the
/// I/O around a scan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tab width must be between 1 and {max}, got {0}", max = MAX_TAB_WIDTH)]
    InvalidTabWidth(usize),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
