//! Small text utilities shared by segmentation and rendering.

/// Slugify a string for use as a heading anchor ID.
/// Converts to lowercase, replaces non-alphanumeric characters with dashes,
/// and trims leading/trailing dashes. May produce an empty slug for text
/// with no alphanumeric content; callers must tolerate empty identifiers.
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .to_lowercase()
    .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
    .trim_matches('-')
    .to_string()
}

/// Render a `4_18`-style version string for humans (`4.18`).
#[must_use]
pub fn version_to_human(version: &str) -> String {
  version.replace('_', ".")
}
