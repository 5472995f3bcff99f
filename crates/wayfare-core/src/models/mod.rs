//! Data models for the booking wizard.
//!
//! This module holds the configuration aggregate that the engine transforms
//! and the reference catalog records it is priced against. Models implement
//! [`std::fmt::Display`] in [`crate::display`] for markdown output.
//!
//! ```text
//! Configuration
//! ├── citizenship: String
//! ├── destination: String
//! ├── board_type: BoardType             // FB, HB, NB
//! ├── trip_days: u32                    // >= 1
//! ├── start_date: civil::Date
//! ├── selected_hotel: Option<SelectedHotel>
//! └── daily_meal_selections: Vec<DailyMealSelection>   // len == trip_days
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfare_core::models::{BoardType, Configuration};
//!
//! let config = Configuration::starting_on(date(2026, 5, 1));
//! assert_eq!(config.board_type, BoardType::FullBoard);
//! assert_eq!(config.daily_meal_selections.len(), 1);
//! assert!(config.validate().is_ok());
//! ```

mod board;
mod catalog;
mod configuration;

pub use board::{BoardType, MealType};
pub use catalog::{BoardTypeInfo, Destination, Hotel, MealItem, MealMenu, EMPTY_MENU};
pub use configuration::{
    empty_selections, Configuration, DailyMealSelection, HotelId, MealId, SelectedHotel,
    CITIZENSHIP_PLACEHOLDER, DESTINATION_PLACEHOLDER, MAX_TRIP_DAYS,
};
