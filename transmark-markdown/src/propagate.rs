//! In-place marker rewriting for translated documents.
//!
//! The rewrite is a surgical textual substitution: only the value inside an
//! existing `translated="..."` or `version="..."` attribute changes, on the
//! single line carrying the heading. Every other byte of the document,
//! including line count and the final-newline convention, survives
//! untouched.

use std::{collections::HashMap, sync::LazyLock};

use log::debug;
use regex::{NoExpand, Regex};

use crate::{
  error::MarkdownError,
  segment::{MarkdownOptions, segment},
};

#[allow(clippy::expect_used, reason = "the pattern is a valid literal")]
static TRANSLATED_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"translated="[^"]+""#)
    .expect("translated marker pattern should always compile")
});

#[allow(clippy::expect_used, reason = "the pattern is a valid literal")]
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"version="[^"]+""#)
    .expect("version marker pattern should always compile")
});

/// Rewrite the translation markers in `source` according to `verdicts`.
///
/// Every non-title heading whose identifier has an unchanged (`true`)
/// verdict and which already carries a non-empty `translated` stamp is
/// re-stamped with `current_version`. Headings whose identifier has no
/// verdict, a changed verdict, or an empty identifier are left entirely
/// untouched; their stale stamp is the signal to a human translator. The
/// title heading's `version` marker is rewritten unconditionally.
///
/// # Errors
///
/// Returns [`MarkdownError::MissingTitle`] when `source` contains no
/// headings at all, and propagates segmentation failures.
pub fn propagate(
  source: &str,
  verdicts: &HashMap<String, bool>,
  current_version: &str,
  options: &MarkdownOptions,
) -> Result<String, MarkdownError> {
  let doc = segment(source, options)?;
  let Some(title) = doc.title() else {
    return Err(MarkdownError::MissingTitle);
  };

  let mut lines: Vec<String> = source.split('\n').map(String::from).collect();

  for heading in doc.headings.iter().skip(1) {
    if heading.id.is_empty() || heading.translated.is_empty() {
      continue;
    }
    if !verdicts.get(&heading.id).copied().unwrap_or(false) {
      continue;
    }
    debug!("updating heading {:?} (up-to-date)", heading.id);
    let stamp = format!(r#"translated="{current_version}""#);
    if let Some(line) = lines.get_mut(heading.line - 1) {
      *line = TRANSLATED_RE
        .replace_all(line.as_str(), NoExpand(&stamp))
        .into_owned();
    }
  }

  let stamp = format!(r#"version="{current_version}""#);
  if let Some(line) = lines.get_mut(title.line - 1) {
    *line = VERSION_RE
      .replace_all(line.as_str(), NoExpand(&stamp))
      .into_owned();
  }

  Ok(lines.join("\n"))
}

/// Stamp every non-title heading with a `translated="TODO"` marker, for
/// bootstrapping a fresh translation copy of a source document.
///
/// A heading line already ending in an attribute block gets the stamp
/// inserted before the closing brace; a heading without a block gets a
/// fresh `{translated="TODO"}` block appended.
///
/// # Errors
///
/// Returns [`MarkdownError::AlreadyStamped`] when any non-title heading
/// line already contains a `translated=` marker, and propagates
/// segmentation failures.
pub fn stamp_missing(
  source: &str,
  options: &MarkdownOptions,
) -> Result<String, MarkdownError> {
  let doc = segment(source, options)?;
  let mut lines: Vec<String> = source.split('\n').map(String::from).collect();

  for heading in doc.headings.iter().skip(1) {
    let Some(line) = lines.get_mut(heading.line - 1) else {
      continue;
    };
    if line.contains("translated=") {
      return Err(MarkdownError::AlreadyStamped);
    }
    match line.rfind('}') {
      Some(brace) if line[brace + 1..].trim().is_empty() => {
        line.insert_str(brace, r#" translated="TODO""#);
      },
      _ => line.push_str(r#" {translated="TODO"}"#),
    }
  }

  Ok(lines.join("\n"))
}
