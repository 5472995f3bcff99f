//! Core library for the Wayfare trip booking wizard.
//!
//! This crate holds the booking configuration state engine: the configuration
//! model, the pure transition functions that keep it consistent, the pricing
//! calculator, and the catalogs it is priced against.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the [`Configuration`] aggregate and catalog
//!   records
//! - **Engine** ([`engine`]): `Configuration + Edit → Configuration`, with
//!   structural resets when the trip length or board type changes
//! - **Pricing** ([`pricing`]): daily and total costs, never stored
//! - **Catalogs** ([`catalog`]): destination-keyed hotels and meal menus
//! - **Session** ([`session`]): the single mutable cell holding the current
//!   configuration, plus a JSON snapshot file for the CLI
//! - **Display** ([`display`]): markdown rendering for the terminal and MCP
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfare_core::{BookingSessionBuilder, ConfigPatch, MealSelectionEdit, MealType};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = BookingSessionBuilder::new()
//!     .with_start_date(date(2026, 10, 16))
//!     .build()?;
//!
//! session.update(ConfigPatch {
//!     destination: Some("Turkey".to_string()),
//!     trip_days: Some(3),
//!     ..Default::default()
//! });
//! session.select_hotel_by_id(101)?;
//! session.select_meal(MealSelectionEdit {
//!     day_index: 0,
//!     meal_type: MealType::Dinner,
//!     meal_id: Some(1101),
//! });
//!
//! let breakdown = session.breakdown()?;
//! assert_eq!(breakdown.grand_total, 120 * 3 + 15);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod pricing;
pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSource, ResolvedCatalog};
pub use display::{BookingSummary, OperationStatus, TripOverview};
pub use engine::{apply, replay, Edit};
pub use error::{BookingError, Result};
pub use models::{
    BoardType, Configuration, DailyMealSelection, HotelId, MealId, MealMenu, MealType,
    SelectedHotel, MAX_TRIP_DAYS,
};
pub use params::{ConfigPatch, MealSelectionEdit};
pub use pricing::{compute_daily_cost, compute_grand_total, CostBreakdown};
pub use session::{BookingSession, BookingSessionBuilder, SessionStore};
pub use wizard::{ensure_slot_open, SlotLock, WizardStep};
