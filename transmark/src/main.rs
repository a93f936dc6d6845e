use color_eyre::eyre::Result;
use log::LevelFilter;

mod cli;
mod render;
mod stamp;
mod sync;
mod utils;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match cli.command {
    Commands::Stamp { file } => stamp::run(&file),
    Commands::Sync { file, old_path } => sync::run(&file, &old_path),
    Commands::Render {
      paths,
      header_template,
      footer_template,
      product,
      history_url,
      edit_url,
    } => render::run(&render::RenderJob {
      paths,
      header_template,
      footer_template,
      product,
      history_url,
      edit_url,
    }),
  }
}
