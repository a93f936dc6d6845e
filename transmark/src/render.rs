//! The `render` subcommand: annotated HTML output with optional tera page
//! templates.

use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, eyre};
use log::info;
use rayon::prelude::*;
use tera::Tera;
use transmark_markdown::{
  MarkdownOptions,
  RenderOptions,
  render_html,
  segment,
};

use crate::utils::{collect_markdown_files, write_atomic};

/// Inputs for one render invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderJob {
  /// Markdown files or directories to render.
  pub paths: Vec<PathBuf>,

  /// Optional tera template rendered before the document body. Receives
  /// the document title as `title`.
  pub header_template: Option<PathBuf>,

  /// Optional tera template rendered after the document body.
  pub footer_template: Option<PathBuf>,

  /// Product name shown in "since version" annotations.
  pub product: Option<String>,

  /// Base URL of the commit-history view for out-of-date notices.
  pub history_url: Option<String>,

  /// Base URL of the edit view for out-of-date notices.
  pub edit_url: Option<String>,
}

/// Render every markdown file named by `job` to a sibling `.html` file.
/// Files are independent of each other and render in parallel.
pub fn run(job: &RenderJob) -> Result<()> {
  let header = job
    .header_template
    .as_deref()
    .map(load_template)
    .transpose()?;
  let footer = job
    .footer_template
    .as_deref()
    .map(load_template)
    .transpose()?;

  let files: Vec<PathBuf> = job
    .paths
    .iter()
    .flat_map(|path| collect_markdown_files(path))
    .collect();

  files.par_iter().try_for_each(|file| {
    render_file(file, job, header.as_deref(), footer.as_deref())
  })
}

fn load_template(path: &Path) -> Result<String> {
  fs::read_to_string(path)
    .wrap_err_with(|| format!("Failed to read template: {}", path.display()))
}

/// Render one markdown file next to itself as `<basename>.html`.
fn render_file(
  file: &Path,
  job: &RenderJob,
  header: Option<&str>,
  footer: Option<&str>,
) -> Result<()> {
  let source = fs::read_to_string(file)
    .wrap_err_with(|| format!("Failed to read markdown file: {}", file.display()))?;

  let options = RenderOptions {
    markdown: MarkdownOptions::default(),
    product: job.product.clone(),
    history_url_base: job.history_url.clone(),
    edit_url_base: job.edit_url.clone(),
    basename: file
      .file_stem()
      .and_then(|stem| stem.to_str())
      .unwrap_or_default()
      .to_string(),
  };

  let mut output = String::new();
  if let Some(template) = header {
    let doc = segment(&source, &options.markdown)
      .wrap_err_with(|| format!("Failed to segment {}", file.display()))?;
    let title = doc
      .title()
      .ok_or_else(|| eyre!("{} has no title heading", file.display()))?;

    let mut tera = Tera::default();
    tera.add_raw_template("header", template)?;
    let mut ctx = tera::Context::new();
    ctx.insert("title", &title.text);
    output.push_str(&tera.render("header", &ctx).wrap_err_with(|| {
      format!("rendering header template for {}", file.display())
    })?);
  }

  output.push_str(&render_html(&source, &options));

  if let Some(template) = footer {
    let mut tera = Tera::default();
    tera.add_raw_template("footer", template)?;
    output.push_str(&tera.render("footer", &tera::Context::new()).wrap_err_with(
      || format!("rendering footer template for {}", file.display()),
    )?);
  }

  let out_path = file.with_extension("html");
  write_atomic(&out_path, &output)?;
  info!("Rendered {} -> {}", file.display(), out_path.display());
  Ok(())
}
