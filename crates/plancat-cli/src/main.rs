//! Plancat CLI Application
//!
//! Command-line interface for browsing, filtering and comparing the plans of
//! a fitness catalog.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, BrowseArgs, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use plancat_core::{CatalogBuilder, CatalogConfig};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        max_selectable,
        no_comparison,
        command,
    } = Args::parse();

    let mut config = CatalogConfig::default().with_comparison(!no_comparison);
    if let Some(max) = max_selectable {
        config = config.with_max_selectable(max);
    }

    let catalog = CatalogBuilder::new()
        .with_database_path(database_file)
        .with_config(config)
        .build()
        .await
        .context("Failed to initialize catalog")?;

    let cli = Cli::new(catalog, TerminalRenderer::new(!no_color));

    info!("Plancat started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Browse(args)) => cli.browse(args).await,
        Some(Compare(args)) => cli.compare(args).await,
        Some(Seed) => cli.seed().await,
        None => cli.browse(BrowseArgs::default()).await,
    }
}
