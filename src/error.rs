//! Error types.
//!
//! Only recoverable conditions live here. Broken `History` invariants
//! (no snapshot at all, undo past the initial snapshot) are caller bugs and
//! panic instead.

use core::fmt;

/// Failure while drawing to a [`Canvas`](crate::Canvas).
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The underlying `fmt::Write` sink refused the text.
    #[error("failed to write to the canvas")]
    Fmt(#[from] fmt::Error),

    /// The underlying byte sink failed.
    #[cfg(feature = "std")]
    #[error("failed to write to the output stream: {0}")]
    Io(#[from] std::io::Error),

    /// A document nested deeper than [`Style::max_depth`](crate::Style::max_depth).
    #[error("document nesting exceeds the limit of {limit}")]
    TooDeep { limit: usize },
}

/// Failure of an index-based [`Document`](crate::Document) edit.
///
/// The document is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("index {index} is out of range for a document of {len} entries")]
    OutOfRange { index: usize, len: usize },
}
