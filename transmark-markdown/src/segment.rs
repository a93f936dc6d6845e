//! Heading extraction and document segmentation.
//!
//! A document is split into heading-anchored sections with exact
//! source-line provenance: the parser reports each heading's starting byte
//! offset, the [`LineIndex`] maps that offset back to a 1-based line, and
//! the raw line array is partitioned on those lines. Heading attribute
//! blocks (`{#id translated="4_18"}`) are literal text as far as the
//! parser is concerned; [`HeadingAttrs`] is the single place that turns
//! them into typed values.

use std::sync::LazyLock;

use log::trace;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

use crate::{
  error::MarkdownError,
  index::LineIndex,
  types::{Document, Heading, Section},
  utils::slugify,
};

/// Options for configuring markdown parsing.
///
/// Constructed once and passed into every parse or render call, so the
/// segmentation and rendering paths stay independently parameterizable
/// instead of sharing implicit global parser state.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, footnotes,
  /// strikethrough, task lists).
  pub gfm: bool,
}

impl MarkdownOptions {
  /// Build the pulldown-cmark option set for these options.
  #[must_use]
  pub fn to_parser_options(&self) -> Options {
    let mut options = Options::empty();
    if self.gfm {
      options.insert(Options::ENABLE_TABLES);
      options.insert(Options::ENABLE_FOOTNOTES);
      options.insert(Options::ENABLE_STRIKETHROUGH);
      options.insert(Options::ENABLE_TASKLISTS);
    }
    options
  }
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self { gfm: true }
  }
}

#[allow(clippy::expect_used, reason = "the pattern is a valid literal")]
static ATTR_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?x)
      \# (?P<id> [^\s"{}]+ )
    | \. (?P<class> [^\s"{}]+ )
    | (?P<key> [A-Za-z][A-Za-z0-9_-]* ) = (?: " (?P<quoted> [^"]* ) " | (?P<bare> [^\s"{}]+ ) )
    "#,
  )
  .expect("attribute token pattern should always compile")
});

/// Typed view of the loosely-typed key/value bag in a heading's attribute
/// block. No other component reads raw attribute tokens.
#[derive(Debug, Clone, Default)]
pub(crate) struct HeadingAttrs {
  /// Explicit identifier (`{#id}` or `{id="id"}`).
  pub id: Option<String>,

  /// Last-synced translation stamp (`translated="4_18"`).
  pub translated: Option<String>,

  /// Document version declared on the title heading (`version="4_19"`).
  pub version: Option<String>,

  /// Source version the heading first appeared in (`introduced="4_16"`,
  /// or a `.since-4_16` class).
  pub introduced: Option<String>,

  /// Remaining classes, preserved for rendering.
  pub classes: Vec<String>,
}

impl HeadingAttrs {
  /// Parse the inside of a `{...}` attribute block.
  pub(crate) fn parse(block: &str) -> Self {
    let mut attrs = Self::default();
    for caps in ATTR_TOKEN_RE.captures_iter(block) {
      if let Some(id) = caps.name("id") {
        attrs.id = Some(id.as_str().to_string());
      } else if let Some(class) = caps.name("class") {
        if let Some(version) = class.as_str().strip_prefix("since-") {
          attrs.introduced.get_or_insert_with(|| version.to_string());
        } else {
          attrs.classes.push(class.as_str().to_string());
        }
      } else if let Some(key) = caps.name("key") {
        let value = caps
          .name("quoted")
          .or_else(|| caps.name("bare"))
          .map_or("", |m| m.as_str());
        match key.as_str() {
          "id" => attrs.id = Some(value.to_string()),
          "translated" => attrs.translated = Some(value.to_string()),
          "version" => attrs.version = Some(value.to_string()),
          "introduced" => attrs.introduced = Some(value.to_string()),
          _ => {},
        }
      }
    }
    attrs
  }
}

/// Split a trailing `{...}` attribute block off accumulated heading text.
/// Returns the cleaned text and, when present, the inside of the block.
pub(crate) fn split_attr_block(text: &str) -> (&str, Option<&str>) {
  let trimmed = text.trim_end();
  if !trimmed.ends_with('}') {
    return (trimmed, None);
  }
  let Some(start) = trimmed.rfind('{') else {
    return (trimmed, None);
  };
  let block = &trimmed[start + 1..trimmed.len() - 1];
  (trimmed[..start].trim_end(), Some(block))
}

/// A heading currently being collected from the event stream.
struct PendingHeading {
  offset: usize,
  text:   String,
}

/// Segment `source` into a [`Document`]: ordered headings with source-line
/// provenance, plus the contiguous line range each heading owns.
///
/// Every heading receives an identifier: the explicit `{#id}` when present,
/// otherwise a slug derived from the heading text. The first heading's
/// `version` attribute populates [`Document::version`].
///
/// # Errors
///
/// Returns [`MarkdownError::LineResolution`] when a heading's byte offset
/// cannot be mapped back to a source line, which signals an inconsistency
/// between the parser and the line index rather than a malformed document.
pub fn segment(
  source: &str,
  options: &MarkdownOptions,
) -> Result<Document, MarkdownError> {
  let index = LineIndex::new(source);
  let parser = Parser::new_ext(source, options.to_parser_options());

  let mut version = String::new();
  let mut headings: Vec<Heading> = Vec::new();
  let mut pending: Option<PendingHeading> = None;

  for (event, range) in parser.into_offset_iter() {
    match event {
      Event::Start(Tag::Heading { .. }) => {
        pending = Some(PendingHeading {
          offset: range.start,
          text:   String::new(),
        });
      },
      Event::End(TagEnd::Heading(_)) => {
        if let Some(heading) = pending.take() {
          let line = index.offset_to_line(heading.offset)?;
          let (text, block) = split_attr_block(&heading.text);
          let attrs = block.map(HeadingAttrs::parse).unwrap_or_default();
          if headings.is_empty()
            && let Some(declared) = attrs.version
          {
            version = declared;
          }
          headings.push(Heading {
            line,
            id: attrs.id.unwrap_or_else(|| slugify(text)),
            translated: attrs.translated.unwrap_or_default(),
            text: text.to_string(),
          });
        }
      },
      Event::Text(text) | Event::Code(text) => {
        if let Some(heading) = pending.as_mut() {
          heading.text.push_str(&text);
        }
      },
      Event::SoftBreak | Event::HardBreak => {
        if let Some(heading) = pending.as_mut() {
          heading.text.push(' ');
        }
      },
      _ => {},
    }
  }

  trace!("extracted {} headings", headings.len());

  // Split the document into lines, then partition the lines into sections
  // based on the headings. The element following the final newline is not a
  // line of its own and is excluded from the last section.
  let lines: Vec<String> = source.split('\n').map(String::from).collect();
  let mut sections = Vec::with_capacity(headings.len());
  for (idx, heading) in headings.iter().enumerate() {
    let end = match headings.get(idx + 1) {
      Some(next) => next.line - 1,
      None => lines.len().saturating_sub(1),
    };
    let start = heading.line.min(end);
    sections.push(Section {
      heading: heading.clone(),
      lines:   lines.get(start..end).unwrap_or_default().to_vec(),
    });
  }

  Ok(Document::new(version, headings, sections))
}
