//! MCP server implementation for Wayfare
//!
//! Exposes the booking wizard to AI assistants over the Model Context
//! Protocol. The server owns one booking session; tool calls are serialized
//! through a mutex and every change is written to the session file, so the
//! CLI sees what the assistant booked.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use wayfare_core::{BookingSession, SessionStore};

pub mod errors;
pub mod handlers;

pub use handlers::{ConfigPatch, McpResult, SelectHotel, SelectMeal};

/// MCP server for Wayfare
#[derive(Clone)]
pub struct BookingMcpServer {
    session: Arc<Mutex<BookingSession>>,
    store: Arc<SessionStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BookingMcpServer {
    pub fn new(session: BookingSession, store: SessionStore) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            store: Arc::new(store),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone(), self.store.clone())
    }

    #[tool(
        name = "show_configuration",
        description = "Show the current trip configuration: citizenship, destination, start date, trip length, board type, selected hotel and the meal chosen for each day with names and prices."
    )]
    async fn show_configuration(&self) -> McpResult {
        self.handlers().show_configuration().await
    }

    #[tool(
        name = "update_configuration",
        description = "Change trip details. Every field is optional: citizenship, destination (case-insensitive), trip_days (1 to 365; other values are ignored), start_date (YYYY-MM-DD) and board_type ('FB' full board, 'HB' half board, 'NB' no board). Changing trip_days or board_type clears all daily meal choices; the hotel is kept."
    )]
    async fn update_configuration(&self, params: Parameters<ConfigPatch>) -> McpResult {
        self.handlers().update_configuration(params).await
    }

    #[tool(
        name = "list_destinations",
        description = "List the destinations and board types offered by the catalog."
    )]
    async fn list_destinations(&self) -> McpResult {
        self.handlers().list_destinations().await
    }

    #[tool(
        name = "list_hotels",
        description = "List the hotels of the current destination with their IDs and nightly prices. The selected hotel is marked."
    )]
    async fn list_hotels(&self) -> McpResult {
        self.handlers().list_hotels().await
    }

    #[tool(
        name = "select_hotel",
        description = "Select a hotel of the current destination by hotel_id, as shown by list_hotels. Pass null to clear the selection. A hotel is required before meals can be chosen and before the summary is available."
    )]
    async fn select_hotel(&self, params: Parameters<SelectHotel>) -> McpResult {
        self.handlers().select_hotel(params).await
    }

    #[tool(
        name = "list_meals",
        description = "List the lunch and dinner menus of the current destination with meal IDs and prices."
    )]
    async fn list_meals(&self) -> McpResult {
        self.handlers().list_meals().await
    }

    #[tool(
        name = "select_meal",
        description = "Choose or clear a meal. day_index is 0-based (0 = first trip day), meal_type is 'lunch' or 'dinner', meal_id comes from list_meals (null clears the slot). Requires a hotel. Not available with No Board. Under Half Board a day has lunch or dinner: choosing the other one fails unless replace=true, which clears the meal already chosen."
    )]
    async fn select_meal(&self, params: Parameters<SelectMeal>) -> McpResult {
        self.handlers().select_meal(params).await
    }

    #[tool(
        name = "booking_summary",
        description = "Show the booking summary: hotel and meal cost for every day, daily totals and the booking total. Requires a selected hotel."
    )]
    async fn booking_summary(&self) -> McpResult {
        self.handlers().booking_summary().await
    }

    #[tool(
        name = "reset_booking",
        description = "End the session and start over with the default configuration."
    )]
    async fn reset_booking(&self) -> McpResult {
        self.handlers().reset_booking().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BookingMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Wayfare is a trip booking wizard. One booking is in progress at a time.

## Workflow
1. `list_destinations` to see where the traveler can go
2. `update_configuration` with citizenship, destination, trip_days, start_date and board_type
3. `list_hotels`, then `select_hotel`
4. `list_meals`, then `select_meal` for each day (day_index is 0-based)
5. `booking_summary` for the priced booking

## Rules
- Changing trip_days or board_type clears every meal choice
- Full Board: lunch and dinner every day
- Half Board: lunch or dinner each day, not both
- No Board: no meals
- Meals and the summary require a hotel
- `reset_booking` starts over"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BookingMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Wayfare MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
