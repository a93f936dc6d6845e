//! The `stamp` subcommand: bootstrap `translated="TODO"` markers on a
//! fresh translation copy.

use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use log::info;
use transmark_markdown::{MarkdownOptions, stamp_missing};

use crate::utils::write_atomic;

/// Stamp every non-title heading in `file` with a fresh TODO marker,
/// rewriting the file in place.
pub fn run(file: &Path) -> Result<()> {
  let source = fs::read_to_string(file)
    .wrap_err_with(|| format!("Failed to read markdown file: {}", file.display()))?;

  let options = MarkdownOptions::default();
  let stamped = stamp_missing(&source, &options)
    .wrap_err_with(|| format!("Failed to stamp {}", file.display()))?;

  write_atomic(file, &stamped)?;
  info!("Stamped translation markers in {}", file.display());
  Ok(())
}
