use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for transmark
#[derive(Parser, Debug)]
#[command(version, about = "transmark: translation-aware markdown tooling")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

/// All supported subcommands for the transmark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Stamp every non-title heading of a fresh translation copy with a
  /// translated="TODO" marker.
  Stamp {
    /// Markdown file to stamp in place.
    file: PathBuf,
  },

  /// Compare the current document against a prior revision and refresh
  /// the translation markers of every locale copy next to it.
  Sync {
    /// Current revision of the source document.
    file: PathBuf,

    /// Prior revision of the source document to compare against.
    #[arg(short = 'o', long = "old-path")]
    old_path: PathBuf,
  },

  /// Render markdown files to HTML with translation-status annotations.
  Render {
    /// Markdown files or directories to render. Directories are walked
    /// recursively for markdown files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Path to a tera template rendered before the converted markdown
    /// content. Receives the document title as `title`.
    #[arg(long = "header-template")]
    header_template: Option<PathBuf>,

    /// Path to a tera template rendered after the converted markdown
    /// content.
    #[arg(long = "footer-template")]
    footer_template: Option<PathBuf>,

    /// Product name shown in "since version" annotations.
    #[arg(long)]
    product: Option<String>,

    /// Base URL of the commit-history view linked from out-of-date
    /// notices. The document's base filename is appended.
    #[arg(long = "history-url")]
    history_url: Option<String>,

    /// Base URL of the edit view linked from out-of-date notices. The
    /// document's base filename is appended.
    #[arg(long = "edit-url")]
    edit_url: Option<String>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
