//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use wayfare_core::{
    display::{BoardTypeList, DestinationList, HotelList, MealMenuView},
    params as core, BookingSession, BookingSummary, Configuration, OperationStatus,
    SessionStore, TripOverview,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types derive JsonSchema behind the core's `schema` feature.
// The transparent wrapper gives them the Deserialize + JsonSchema shape the
// tool router expects without MCP-specific attributes in the core.

/// Transparent MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type ConfigPatch = McpParams<core::ConfigPatch>;

/// Parameters for selecting a hotel
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectHotel {
    /// Hotel ID from list_hotels; null clears the selection
    pub hotel_id: Option<u64>,
}

/// Parameters for choosing a meal
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectMeal {
    #[serde(flatten)]
    pub edit: core::MealSelectionEdit,
    /// Under half board, replace the other meal already chosen for that day
    #[serde(default)]
    pub replace: bool,
}

pub type McpResult = Result<CallToolResult, ErrorData>;

fn markdown(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<BookingSession>>,
    store: Arc<SessionStore>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<BookingSession>>, store: Arc<SessionStore>) -> Self {
        Self { session, store }
    }

    fn overview(session: &BookingSession) -> String {
        TripOverview {
            config: session.config(),
            meals: session.resolved().meals,
            currency: &session.catalog().currency,
        }
        .to_string()
    }

    /// Write the session file off the async workers.
    ///
    /// Callers keep the session lock across the await so writes land in the
    /// order the edits were made.
    async fn save(&self, config: Configuration) -> Result<(), ErrorData> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.save(&config))
            .await
            .map_err(|e| {
                ErrorData::internal_error(format!("Session save task failed: {e}"), None)
            })?
            .map_err(|e| to_mcp_error("Failed to save session", &e))
    }

    pub async fn show_configuration(&self) -> McpResult {
        debug!("show_configuration");
        let session = self.session.lock().await;
        markdown(Self::overview(&session))
    }

    pub async fn update_configuration(
        &self,
        Parameters(params): Parameters<ConfigPatch>,
    ) -> McpResult {
        debug!("update_configuration: {params:?}");
        let patch = params.into_inner();
        let fields = patch.field_names();

        let mut session = self.session.lock().await;
        if !patch.is_empty() {
            session.update(patch);
            self.save(session.config().clone()).await?;
        }

        let status = OperationStatus::updated(&fields);
        markdown(format!("{status}\n{}", Self::overview(&session)))
    }

    pub async fn list_destinations(&self) -> McpResult {
        debug!("list_destinations");
        let session = self.session.lock().await;
        let catalog = session.catalog();
        let boards = BoardTypeList {
            board_types: &catalog.board_types,
            current: session.config().board_type,
        };
        markdown(format!(
            "# Destinations\n\n{}\n# Board types\n\n{boards}",
            DestinationList(&catalog.destinations)
        ))
    }

    pub async fn list_hotels(&self) -> McpResult {
        debug!("list_hotels");
        let session = self.session.lock().await;
        let config = session.config();
        let list = HotelList {
            hotels: session.resolved().hotels,
            selected: config.selected_hotel.as_ref().map(|hotel| hotel.id),
            currency: &session.catalog().currency,
        };
        markdown(format!("# Hotels in {}\n\n{list}", config.destination))
    }

    pub async fn select_hotel(&self, Parameters(params): Parameters<SelectHotel>) -> McpResult {
        debug!("select_hotel: {params:?}");
        let mut session = self.session.lock().await;

        let status = match params.hotel_id {
            Some(id) => {
                let hotel = session
                    .select_hotel_by_id(id)
                    .map_err(|e| to_mcp_error("Failed to select hotel", &e))?;
                OperationStatus::success(format!("Selected {}.", hotel.name))
            }
            None => {
                session.clear_hotel();
                OperationStatus::success("Hotel selection cleared.")
            }
        };
        self.save(session.config().clone()).await?;
        markdown(format!("{status}\n{}", Self::overview(&session)))
    }

    pub async fn list_meals(&self) -> McpResult {
        debug!("list_meals");
        let session = self.session.lock().await;
        let view = MealMenuView {
            menu: session.resolved().meals,
            currency: &session.catalog().currency,
        };
        markdown(format!(
            "# Meals in {}\n\n{view}",
            session.config().destination
        ))
    }

    pub async fn select_meal(&self, Parameters(params): Parameters<SelectMeal>) -> McpResult {
        debug!("select_meal: {params:?}");
        let SelectMeal { edit, replace } = params;
        let day = edit.day_index + 1;
        let meal_type = edit.meal_type;
        let cleared = edit.meal_id.is_none();

        let mut session = self.session.lock().await;
        session
            .choose_meal(edit, replace)
            .map_err(|e| to_mcp_error("Failed to select meal", &e))?;
        self.save(session.config().clone()).await?;

        let status = if cleared {
            OperationStatus::success(format!("Day {day} {meal_type} cleared."))
        } else {
            OperationStatus::success(format!("Day {day} {meal_type} chosen."))
        };
        markdown(format!("{status}\n{}", Self::overview(&session)))
    }

    pub async fn booking_summary(&self) -> McpResult {
        debug!("booking_summary");
        let session = self.session.lock().await;
        let breakdown = session
            .breakdown()
            .map_err(|e| to_mcp_error("Summary unavailable", &e))?;
        let summary = BookingSummary::new(
            session.config(),
            &breakdown,
            &session.catalog().currency,
        );
        markdown(summary.to_string())
    }

    pub async fn reset_booking(&self) -> McpResult {
        debug!("reset_booking");
        let mut session = self.session.lock().await;
        session.reset();
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.clear())
            .await
            .map_err(|e| {
                ErrorData::internal_error(format!("Session reset task failed: {e}"), None)
            })?
            .map_err(|e| to_mcp_error("Failed to remove session file", &e))?;
        let status = OperationStatus::success("Session reset.");
        markdown(format!("{status}\n{}", Self::overview(&session)))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;
    use wayfare_core::BookingSessionBuilder;

    use super::*;

    fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        let session = BookingSessionBuilder::new()
            .with_start_date(date(2026, 10, 16))
            .build()
            .expect("Failed to create session");
        let handlers = McpHandlers::new(Arc::new(Mutex::new(session)), Arc::new(store));
        (temp_dir, handlers)
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    fn params<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> Parameters<T> {
        Parameters(serde_json::from_value(json).expect("Invalid test params"))
    }

    #[tokio::test]
    async fn test_booking_flow_over_tools() {
        let (_temp_dir, handlers) = create_test_handlers();

        handlers
            .update_configuration(params(serde_json::json!({
                "destination": "Italy",
                "trip_days": 2,
                "board_type": "HB"
            })))
            .await
            .unwrap();
        handlers
            .select_hotel(params(serde_json::json!({ "hotel_id": 301 })))
            .await
            .unwrap();
        handlers
            .select_meal(params(serde_json::json!({
                "day_index": 1,
                "meal_type": "dinner",
                "meal_id": 3101
            })))
            .await
            .unwrap();

        let summary = text_of(&handlers.booking_summary().await.unwrap());
        assert!(summary.contains("# Booking summary"));
        assert!(summary.contains("- Day total: 140 AZN"));
        assert!(handlers.store.path().exists());
    }

    #[tokio::test]
    async fn test_summary_requires_hotel() {
        let (_temp_dir, handlers) = create_test_handlers();
        let err = handlers.booking_summary().await.unwrap_err();
        assert!(err.message.contains("select a hotel"));
    }

    #[tokio::test]
    async fn test_half_board_lock_needs_replace() {
        let (_temp_dir, handlers) = create_test_handlers();
        handlers
            .update_configuration(params(serde_json::json!({
                "destination": "Turkey",
                "board_type": "HB"
            })))
            .await
            .unwrap();
        handlers
            .select_hotel(params(serde_json::json!({ "hotel_id": 101 })))
            .await
            .unwrap();
        handlers
            .select_meal(params(serde_json::json!({
                "day_index": 0, "meal_type": "lunch", "meal_id": 1001
            })))
            .await
            .unwrap();

        let dinner = serde_json::json!({
            "day_index": 0, "meal_type": "dinner", "meal_id": 1101
        });
        assert!(handlers.select_meal(params(dinner.clone())).await.is_err());

        let mut replace = dinner;
        replace["replace"] = serde_json::Value::Bool(true);
        handlers.select_meal(params(replace)).await.unwrap();

        let session = handlers.session.lock().await;
        let day = session.config().daily_meal_selections[0];
        assert_eq!((day.lunch_id, day.dinner_id), (None, Some(1101)));
    }

    #[tokio::test]
    async fn test_unknown_hotel_is_rejected() {
        let (_temp_dir, handlers) = create_test_handlers();
        let result = handlers
            .select_hotel(params(serde_json::json!({ "hotel_id": 101 })))
            .await;
        assert!(result.is_err());
        assert!(!handlers.store.path().exists());
    }

    #[tokio::test]
    async fn test_bad_trip_days_keep_other_fields() {
        let (_temp_dir, handlers) = create_test_handlers();
        for days in [
            serde_json::json!(-2),
            serde_json::json!(4_294_967_295_u64),
            serde_json::json!(1.5),
        ] {
            handlers
                .update_configuration(params(serde_json::json!({
                    "trip_days": days,
                    "destination": "Italy",
                })))
                .await
                .unwrap();
            let session = handlers.session.lock().await;
            assert_eq!(session.config().trip_days, 1);
            assert_eq!(session.config().destination, "Italy");
        }

        let stored = handlers.store.load().unwrap().unwrap();
        assert_eq!(stored.destination, "Italy");
        assert_eq!(stored.trip_days, 1);
    }

    #[tokio::test]
    async fn test_reset_booking_clears_session_file() {
        let (_temp_dir, handlers) = create_test_handlers();
        handlers
            .update_configuration(params(serde_json::json!({ "trip_days": 3 })))
            .await
            .unwrap();
        assert!(handlers.store.path().exists());

        let text = text_of(&handlers.reset_booking().await.unwrap());
        assert!(text.contains("Session reset."));
        assert!(!handlers.store.path().exists());
        assert_eq!(handlers.session.lock().await.config().trip_days, 1);
    }
}
