//! Parameter structures for engine operations.
//!
//! These structures are shared by every presentation layer (CLI, MCP) and
//! carry no framework derives beyond serde. JSON schema generation for the MCP
//! server is enabled with the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{BoardType, MealId, MealType};

/// Field-level overrides for [`crate::engine::apply_partial_update`].
///
/// Every field is optional; absent fields leave the configuration unchanged.
/// Changing `trip_days` or `board_type` resets all per-day meal choices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ConfigPatch {
    /// Traveler's country of citizenship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    /// Destination name, matched case-insensitively against the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Board type code: FB, HB or NB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_type: Option<BoardType>,
    /// Number of trip days (at least 1; other values are ignored)
    #[serde(
        default,
        deserialize_with = "lenient_trip_days",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<u32>"))]
    pub trip_days: Option<u32>,
    /// First day of the trip as YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub start_date: Option<Date>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &ConfigPatch::default()
    }

    /// Names of the fields this patch sets, for change reporting.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.citizenship.is_some() {
            fields.push("citizenship");
        }
        if self.destination.is_some() {
            fields.push("destination");
        }
        if self.board_type.is_some() {
            fields.push("board_type");
        }
        if self.trip_days.is_some() {
            fields.push("trip_days");
        }
        if self.start_date.is_some() {
            fields.push("start_date");
        }
        fields
    }
}

/// Read `trip_days` without failing the whole patch.
///
/// Negative, fractional, oversized or non-numeric values become `None`, so
/// the other fields of the patch still apply.
fn lenient_trip_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let days = value.as_u64().and_then(|days| u32::try_from(days).ok());
        if days.is_none() {
            warn!("Ignoring trip_days of {value}: not a day count");
        }
        days
    }))
}

/// Parameters for [`crate::engine::update_daily_meal_selection`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MealSelectionEdit {
    /// 0-based trip day
    pub day_index: usize,
    /// Slot to change: lunch or dinner
    pub meal_type: MealType,
    /// Meal to select; omit or null to clear the slot
    #[serde(default)]
    pub meal_id: Option<MealId>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: ConfigPatch =
            serde_json::from_str(r#"{"trip_days": 4, "start_date": "2026-07-01"}"#).unwrap();
        assert_eq!(patch.trip_days, Some(4));
        assert_eq!(patch.start_date, Some(date(2026, 7, 1)));
        assert!(patch.board_type.is_none());
        assert_eq!(patch.field_names(), vec!["trip_days", "start_date"]);
    }

    #[test]
    fn test_bad_trip_days_keep_rest_of_patch() {
        for raw in ["-3", "2.5", "\"three\"", "4294967296", "null"] {
            let json = format!(r#"{{"trip_days": {raw}, "destination": "Italy"}}"#);
            let patch: ConfigPatch = serde_json::from_str(&json).unwrap();
            assert_eq!(patch.trip_days, None, "trip_days {raw}");
            assert_eq!(patch.destination.as_deref(), Some("Italy"));
        }
    }

    #[test]
    fn test_empty_patch() {
        assert!(ConfigPatch::default().is_empty());
        let patch = ConfigPatch {
            board_type: Some(BoardType::NoBoard),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_meal_edit_defaults_to_clear() {
        let edit: MealSelectionEdit =
            serde_json::from_str(r#"{"day_index": 1, "meal_type": "dinner"}"#).unwrap();
        assert_eq!(edit.meal_type, MealType::Dinner);
        assert!(edit.meal_id.is_none());
    }
}
