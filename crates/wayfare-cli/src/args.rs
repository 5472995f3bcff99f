use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, HotelCommands, MealCommands, TripCommands};

/// Main command-line interface for the Wayfare booking wizard
///
/// Wayfare walks a traveler through a trip booking: trip details, then a
/// hotel and daily meals, then a priced summary. The in-progress booking is
/// kept in a session file between invocations, and the same wizard can be
/// driven by AI assistants through the MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "wayfare")]
pub struct Args {
    /// Path to the session file. Defaults to
    /// $XDG_DATA_HOME/wayfare/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Path to a catalog JSON file. Defaults to
    /// $XDG_CONFIG_HOME/wayfare/catalog.json, then the bundled sample catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfare CLI
///
/// The commands follow the pages of the wizard:
/// - `trip`: citizenship, destination, dates and board type
/// - `hotel` and `meal`: accommodation and daily meals
/// - `summary`: the priced booking
#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the trip details
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Choose the hotel
    #[command(alias = "h")]
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Choose daily meals
    #[command(alias = "m")]
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },
    /// Show the booking summary with daily costs
    #[command(alias = "s")]
    Summary,
    /// Browse the reference catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// End the session and start over
    Reset,
    /// Start the MCP server
    Serve,
}
