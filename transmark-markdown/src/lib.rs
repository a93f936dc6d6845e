//! # transmark-markdown
//!
//! Segmentation and translation-staleness engine for versioned markdown
//! documents.
//!
//! A source document carries a stable identifier and version-tracking
//! attributes on its headings (`{#id translated="4_18"}`, with
//! `version="4_19"` on the title heading). This crate splits such a
//! document into heading-anchored sections with exact source-line
//! provenance, decides per section whether content changed between two
//! revisions, and rewrites the version markers of translated copies in
//! place without disturbing any other byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use transmark_markdown::{MarkdownOptions, segment};
//!
//! # fn main() -> Result<(), transmark_markdown::MarkdownError> {
//! let options = MarkdownOptions::default();
//! let doc = segment("# document {version=\"4_18\"}\n", &options)?;
//!
//! assert_eq!(doc.version, "4_18");
//! assert_eq!(doc.headings[0].id, "document");
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! - [`segment()`] — parse a byte buffer into an immutable [`Document`]
//! - [`compare()`] — per-identifier unchanged/changed verdicts between two
//!   [`Document`] revisions
//! - [`propagate()`] — rewrite a translation's `translated="..."` and
//!   `version="..."` markers from a verdict map
//! - [`stamp_missing`] — bootstrap `translated="TODO"` markers on a fresh
//!   translation copy
//! - [`render_html`] — HTML output with "since version" and out-of-date
//!   annotations derived from the same heading attributes

pub mod compare;
pub mod error;
pub mod index;
pub mod propagate;
pub mod render;
pub mod segment;
mod types;
pub mod utils;

pub use crate::{
  compare::compare,
  error::MarkdownError,
  index::LineIndex,
  propagate::{propagate, stamp_missing},
  render::{RenderOptions, render_html},
  segment::{MarkdownOptions, segment},
  types::{Document, Heading, Section},
};
