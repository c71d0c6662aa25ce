//! # portfolio
//!
//! Writes the TinaRen AI portfolio page as one static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Render to dist/index.html
//! portfolio render
//!
//! # Reproducible output with a pinned footer year
//! portfolio render --year 2026 -o public/index.html
//!
//! # Inspect the catalog
//! portfolio catalog --json
//! ```

mod args;
mod config;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_page::{Catalog, Group, Site, current_year, render_page_for_year};
use tracing::{debug, error, info, warn};

use args::{CatalogArgs, Cli, Command, RenderArgs};
use config::SiteConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render(args),
        Command::Catalog(args) => list_catalog(args),
    }
}

fn load_site(explicit: Option<&Path>) -> Result<Site> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, path) = SiteConfig::resolve(explicit, &cwd)?;
    match &path {
        Some(path) => info!("loaded config from {}", path.display()),
        None => debug!("using built-in profile and catalog"),
    }

    let site = config.into_site();
    for (group, url) in site.catalog.duplicate_urls() {
        warn!("{} lists {} more than once; every copy is rendered", group.key(), url);
    }
    Ok(site)
}

fn render(args: RenderArgs) -> Result<()> {
    let site = load_site(args.config.as_deref())?;
    let year = args.year.unwrap_or_else(current_year);

    let html = render_page_for_year(&site, year);
    debug!(bytes = html.len(), year, "rendered page");

    if args.stdout {
        let mut out = io::stdout().lock();
        out.write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        out.flush()?;
        return Ok(());
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.output, &html)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        "wrote {} ({} projects, {} bytes)",
        args.output.display(),
        site.catalog.len(),
        html.len()
    );
    Ok(())
}

fn list_catalog(args: CatalogArgs) -> Result<()> {
    let site = load_site(args.config.as_deref())?;
    let mut out = io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&site.catalog)
            .context("failed to serialize catalog")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    write_catalog_text(&mut out, &site.catalog)?;
    Ok(())
}

fn write_catalog_text(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for group in Group::ALL {
        let entries = catalog.entries(group);
        writeln!(out, "{} ({})", group.key(), entries.len())?;
        for entry in entries {
            writeln!(out, "  {}  {}  {}", entry.name(), entry.url(), entry.description())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_page::ProjectEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_text_lists_groups_in_order() {
        let catalog = Catalog::new(
            vec![ProjectEntry::new("消消乐", "https://match.tina-ai.xyz/", "经典三消益智游戏")],
            vec![],
        );
        let mut buf = Vec::new();
        write_catalog_text(&mut buf, &catalog).expect("write to vec");

        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "games (1)\n  消消乐  https://match.tina-ai.xyz/  经典三消益智游戏\napps (0)\n"
        );
    }
}
