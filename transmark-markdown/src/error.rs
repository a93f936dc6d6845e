use std::io;

use thiserror::Error;

/// Error type for transmark-markdown operations.
#[derive(Debug, Error)]
pub enum MarkdownError {
  /// The underlying markdown parse failed.
  #[error("markdown parse failed: {0}")]
  Parse(String),

  /// A heading's byte offset could not be mapped back to a source line.
  /// Signals a desynchronisation between the parser and the line index;
  /// not recoverable locally.
  #[error("cannot resolve line for heading at byte offset {0}")]
  LineResolution(usize),

  /// The document contains no headings at all, so there is no title
  /// heading to carry the version marker.
  #[error("document has no title heading")]
  MissingTitle,

  /// A document handed to marker bootstrap already carries stamps.
  #[error("document already contains translated= markers")]
  AlreadyStamped,

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}
