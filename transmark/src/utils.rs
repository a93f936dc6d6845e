//! Filesystem helpers shared by the transmark commands.

use std::{
  io::Write as _,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use log::trace;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Collect all markdown files beneath `path`. A file argument is returned
/// as-is; directories are walked recursively.
#[must_use]
pub fn collect_markdown_files(path: &Path) -> Vec<PathBuf> {
  if path.is_file() {
    return vec![path.to_owned()];
  }

  let mut files = Vec::with_capacity(100);
  for entry in WalkDir::new(path).follow_links(true).into_iter().flatten() {
    let entry_path = entry.path();
    if entry_path.is_file()
      && entry_path
        .extension()
        .is_some_and(|ext| ext == "md" || ext == "markdown")
    {
      files.push(entry_path.to_owned());
    }
  }

  trace!("Found {} markdown files to process", files.len());
  files
}

/// Write `contents` to `path` through a sibling temporary file and an
/// atomic rename, so readers never observe a partially written document.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
  let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
  let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
    .wrap_err_with(|| {
      format!("Failed to create temporary file for {}", path.display())
    })?;
  tmp
    .write_all(contents.as_bytes())
    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
  tmp
    .persist(path)
    .wrap_err_with(|| format!("Failed to replace {}", path.display()))?;
  Ok(())
}
