//! Per-section staleness comparison between two document revisions.

use std::collections::HashMap;

use log::{debug, warn};

use crate::types::Document;

/// Compare `current` against `prior`, section by section.
///
/// Returns a map from heading identifier to `true` when that section's
/// line content is identical in both revisions (exact, order-sensitive,
/// whitespace-sensitive; no normalization). A current section with no
/// counterpart in `prior` is logged and omitted from the map entirely:
/// an absent verdict means "unknown" and must never be coerced to a
/// boolean by callers.
#[must_use]
pub fn compare(current: &Document, prior: &Document) -> HashMap<String, bool> {
  let mut unchanged = HashMap::with_capacity(current.sections.len());

  for section in &current.sections {
    let id = &section.heading.id;
    let Some(prior_section) = prior.section_by_id(id) else {
      warn!("section {id:?} not found in prior revision");
      continue;
    };
    let identical = section.lines == prior_section.lines;
    if !identical {
      debug!("section {id:?} changed since prior revision");
    }
    unchanged.insert(id.clone(), identical);
  }

  unchanged
}
