//! Display formatting for configurations, summaries and catalog listings.
//!
//! Domain models implement [`std::fmt::Display`] directly; wrapper types add
//! the context a plain model lacks (the destination's menu, the currency, the
//! current selection). Everything renders as markdown so the CLI can print it
//! through its terminal renderer and the MCP server can return it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Configuration  │    │    Wrappers     │    │    Markdown     │
//! │  CostBreakdown  │───▶│ (+ menu, money) │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Under no board, stored meal ids are never shown.

pub mod catalog;
pub mod datetime;
pub mod models;
pub mod status;
pub mod summary;

pub use catalog::{BoardTypeList, DestinationList, HotelList, MealMenuView};
pub use datetime::{TripDate, TripLength};
pub use models::TripOverview;
pub use status::OperationStatus;
pub use summary::BookingSummary;
