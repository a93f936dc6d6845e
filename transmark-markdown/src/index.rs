//! Byte-offset to line-number mapping for raw source buffers.

use crate::error::MarkdownError;

/// Maps byte offsets in a source buffer to 1-based line numbers.
///
/// The offset of every line start is recorded up front (the first entry is
/// always 0, and a trailing newline contributes the start of the final,
/// possibly empty, line). Lookups binary-search for the greatest line start
/// at or before the queried offset.
#[derive(Debug, Clone)]
pub struct LineIndex {
  line_starts: Vec<usize>,
}

impl LineIndex {
  /// Build the index for `source`.
  #[must_use]
  pub fn new(source: &str) -> Self {
    let mut line_starts = vec![0];
    for (pos, byte) in source.bytes().enumerate() {
      if byte == b'\n' {
        line_starts.push(pos + 1);
      }
    }
    Self { line_starts }
  }

  /// Resolve the 1-based line number containing byte offset `pos`.
  ///
  /// # Errors
  ///
  /// Returns [`MarkdownError::LineResolution`] when no recorded line start
  /// lies at or before `pos`. That cannot happen for an index built by
  /// [`LineIndex::new`] over the same buffer, so hitting it means the
  /// parser and the index disagree about the source.
  pub fn offset_to_line(&self, pos: usize) -> Result<usize, MarkdownError> {
    let line = self.line_starts.partition_point(|&start| start <= pos);
    if line == 0 {
      return Err(MarkdownError::LineResolution(pos));
    }
    Ok(line)
  }
}
