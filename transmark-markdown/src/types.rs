//! Document model produced by segmentation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A heading extracted from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
  /// 1-based source line on which the heading text begins.
  pub line: usize,

  /// Stable identifier, explicit (`{#id}`) or derived from the heading
  /// text. May be empty, and duplicates are tolerated (last write wins in
  /// identifier-keyed lookups).
  pub id: String,

  /// Document version this heading's translation was last synced at.
  /// Empty for unstamped headings and for source documents.
  pub translated: String,

  /// Inline heading text with markup and the attribute block stripped.
  pub text: String,
}

/// The body owned by one heading: the raw source lines strictly between
/// the heading line and the next heading's line (or end of document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
  pub heading: Heading,
  pub lines:   Vec<String>,
}

/// An immutable, segmented view of one markdown document revision.
///
/// Computed once per [`segment`](crate::segment()) call and never mutated;
/// rewriting a document produces a new buffer, after which any `Document`
/// derived from the old buffer is stale.
#[derive(Debug, Clone, Default)]
pub struct Document {
  /// Document version declared by the title heading's `version` attribute.
  pub version: String,

  /// All headings, in document order.
  pub headings: Vec<Heading>,

  /// One section per heading, in document order.
  pub sections: Vec<Section>,

  headings_by_id: HashMap<String, usize>,
  sections_by_id: HashMap<String, usize>,
}

impl Document {
  pub(crate) fn new(
    version: String,
    headings: Vec<Heading>,
    sections: Vec<Section>,
  ) -> Self {
    let mut headings_by_id = HashMap::with_capacity(headings.len());
    for (idx, heading) in headings.iter().enumerate() {
      headings_by_id.insert(heading.id.clone(), idx);
    }

    let mut sections_by_id = HashMap::with_capacity(sections.len());
    for (idx, section) in sections.iter().enumerate() {
      sections_by_id.insert(section.heading.id.clone(), idx);
    }

    Self {
      version,
      headings,
      sections,
      headings_by_id,
      sections_by_id,
    }
  }

  /// Look up a heading by identifier. The last occurrence wins when the
  /// identifier is duplicated.
  #[must_use]
  pub fn heading_by_id(&self, id: &str) -> Option<&Heading> {
    self
      .headings_by_id
      .get(id)
      .and_then(|&idx| self.headings.get(idx))
  }

  /// Look up a section by identifier. The last occurrence wins when the
  /// identifier is duplicated.
  #[must_use]
  pub fn section_by_id(&self, id: &str) -> Option<&Section> {
    self
      .sections_by_id
      .get(id)
      .and_then(|&idx| self.sections.get(idx))
  }

  /// The title heading, when the document has one.
  #[must_use]
  pub fn title(&self) -> Option<&Heading> {
    self.headings.first()
  }
}
