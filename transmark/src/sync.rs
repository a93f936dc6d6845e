//! The `sync` subcommand: compare two revisions of a source document and
//! refresh the translation markers of every locale copy next to it.
//!
//! Locale copies live in subdirectories alongside the source document,
//! named identically to it. A locale directory without a mirrored copy is
//! skipped silently; each copy's rewrite is fully composed before anything
//! is written back.

use std::{fs, io, path::Path};

use color_eyre::eyre::{Context, Result, eyre};
use log::{info, warn};
use transmark_markdown::{Document, MarkdownOptions, compare, propagate, segment};

use crate::utils::write_atomic;

/// Propagate staleness verdicts for `file` (compared against the prior
/// revision at `old_path`) into every locale copy found in subdirectories
/// next to `file`.
pub fn run(file: &Path, old_path: &Path) -> Result<()> {
  let options = MarkdownOptions::default();
  let current = segment_file(file, &options)?;
  let prior = segment_file(old_path, &options)?;

  let verdicts = compare(&current, &prior);

  let dir = file
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));
  let basename = file
    .file_name()
    .ok_or_else(|| eyre!("{} has no file name", file.display()))?;

  let entries = fs::read_dir(dir)
    .wrap_err_with(|| format!("Failed to read directory: {}", dir.display()))?;
  for entry in entries {
    let entry = entry?;
    if !entry.file_type()?.is_dir() {
      continue;
    }

    let translation_path = entry.path().join(basename);
    let translation_source = match fs::read_to_string(&translation_path) {
      Ok(source) => source,
      Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
      Err(err) => {
        warn!("skipping {}: {err}", translation_path.display());
        continue;
      },
    };

    info!("processing translation {}", translation_path.display());
    let rewritten =
      propagate(&translation_source, &verdicts, &current.version, &options)
        .wrap_err_with(|| {
          format!("Failed to update {}", translation_path.display())
        })?;
    write_atomic(&translation_path, &rewritten)?;
  }

  Ok(())
}

fn segment_file(path: &Path, options: &MarkdownOptions) -> Result<Document> {
  let source = fs::read_to_string(path)
    .wrap_err_with(|| format!("Failed to read markdown file: {}", path.display()))?;
  segment(&source, options)
    .wrap_err_with(|| format!("Failed to segment {}", path.display()))
}
