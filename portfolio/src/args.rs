//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Render the TinaRen AI portfolio page to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to an HTML file (or stdout)
    Render(RenderArgs),
    /// List catalog entries per group
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file; parent directories are created
    #[arg(short, long, default_value = "dist/index.html")]
    pub output: PathBuf,

    /// Config file (defaults to ./portfolio.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Footer year instead of the current one
    #[arg(long)]
    pub year: Option<i32>,

    /// Write the document to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Config file (defaults to ./portfolio.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}
