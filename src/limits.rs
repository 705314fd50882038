//! Scanner constants.

/// Default distance between tab stops, in columns.
pub const TAB_WIDTH: usize = 8;

/// Largest accepted tab width. Wider stops would let a single tab byte
/// expand into an arbitrarily long run of spaces.
pub const MAX_TAB_WIDTH: usize = 32;
