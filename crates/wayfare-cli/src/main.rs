//! Wayfare CLI Application
//!
//! Terminal front end and MCP server for the trip booking wizard.

mod args;
mod cli;
mod commands;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::CommandRunner;
use log::info;
use mcp::{run_stdio_server, BookingMcpServer};
use renderer::TerminalRenderer;
use wayfare_core::{BookingSessionBuilder, CatalogSource, SessionStore};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        session_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let store = SessionStore::open(session_file).context("Failed to locate session file")?;
    let catalog = CatalogSource::discover(catalog_file)
        .load()
        .context("Failed to load catalog")?;
    // Reset must work even when the session file is unreadable
    let resumed = if matches!(command, Some(Reset)) {
        None
    } else {
        store
            .load()
            .with_context(|| format!("Failed to read session file {}", store.path().display()))?
    };

    let session = BookingSessionBuilder::new()
        .with_catalog(catalog)
        .with_configuration(resumed)
        .build()
        .context("Failed to start booking session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfare started");

    match command {
        Some(Serve) => {
            info!("Starting Wayfare MCP server");
            run_stdio_server(BookingMcpServer::new(session, store))
                .await
                .context("MCP server failed")
        }
        Some(Trip { command }) => {
            CommandRunner::new(session, store, renderer).handle_trip_command(command)
        }
        Some(Hotel { command }) => {
            CommandRunner::new(session, store, renderer).handle_hotel_command(command)
        }
        Some(Meal { command }) => {
            CommandRunner::new(session, store, renderer).handle_meal_command(command)
        }
        Some(Summary) => CommandRunner::new(session, store, renderer).show_summary(),
        Some(Catalog { command }) => {
            CommandRunner::new(session, store, renderer).handle_catalog_command(command)
        }
        Some(Reset) => CommandRunner::new(session, store, renderer).reset(),
        None => CommandRunner::new(session, store, renderer).show_configuration(),
    }
}
