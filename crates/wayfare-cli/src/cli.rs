//! Command-line argument wrappers using clap
//!
//! Each wrapper carries the clap-specific parsing (flags, help text, value
//! ranges) and converts into the core parameter type it stands for:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → BookingSession
//! ```
//!
//! Days are 1-based on the command line and 0-based in the core.

use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use wayfare_core::{BoardType, ConfigPatch, MealSelectionEdit, MealType, MAX_TRIP_DAYS};

/// Change trip details
///
/// Only the given fields change. A new trip length or board type clears all
/// daily meal choices; the hotel is kept.
#[derive(Args)]
pub struct TripSetArgs {
    #[arg(long, help = "Traveler's country of citizenship")]
    pub citizenship: Option<String>,
    #[arg(short, long, help = "Destination name (case-insensitive)")]
    pub destination: Option<String>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TRIP_DAYS)),
        help = "Number of trip days (1 to 365)"
    )]
    pub days: Option<u32>,
    #[arg(long, help = "First day of the trip as YYYY-MM-DD")]
    pub start_date: Option<Date>,
    #[arg(short, long, help = "Board type: fb, hb or nb")]
    pub board: Option<BoardTypeArg>,
}

impl From<TripSetArgs> for ConfigPatch {
    fn from(val: TripSetArgs) -> Self {
        ConfigPatch {
            citizenship: val.citizenship,
            destination: val.destination,
            board_type: val.board.map(BoardType::from),
            trip_days: val.days,
            start_date: val.start_date,
        }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Show the current configuration
    #[command(alias = "s")]
    Show,
    /// Change trip details
    #[command(alias = "u")]
    Set(TripSetArgs),
}

/// Select a hotel of the current destination
#[derive(Args)]
pub struct HotelSelectArgs {
    #[arg(help = "ID of the hotel, as shown by `hotel list`")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum HotelCommands {
    /// List hotels of the current destination
    #[command(aliases = ["l", "ls"])]
    List,
    /// Select a hotel of the current destination
    #[command(alias = "s")]
    Select(HotelSelectArgs),
    /// Clear the hotel selection
    Clear,
}

/// Choose a meal for one day
///
/// Under half board a day has either lunch or dinner. Choosing the other meal
/// of a day that already has one is refused unless --replace is given.
#[derive(Args)]
pub struct MealSetArgs {
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Trip day, starting at 1"
    )]
    pub day: u32,
    #[arg(value_enum, help = "Meal slot")]
    pub meal_type: MealTypeArg,
    #[arg(help = "ID of the meal, as shown by `meal list`")]
    pub meal_id: u64,
    #[arg(long, help = "Under half board, replace the other meal of the day")]
    pub replace: bool,
}

impl From<&MealSetArgs> for MealSelectionEdit {
    fn from(val: &MealSetArgs) -> Self {
        MealSelectionEdit {
            day_index: day_index(val.day),
            meal_type: val.meal_type.into(),
            meal_id: Some(val.meal_id),
        }
    }
}

/// Clear a meal slot of one day
#[derive(Args)]
pub struct MealClearArgs {
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Trip day, starting at 1"
    )]
    pub day: u32,
    #[arg(value_enum, help = "Meal slot")]
    pub meal_type: MealTypeArg,
}

impl From<MealClearArgs> for MealSelectionEdit {
    fn from(val: MealClearArgs) -> Self {
        MealSelectionEdit {
            day_index: day_index(val.day),
            meal_type: val.meal_type.into(),
            meal_id: None,
        }
    }
}

fn day_index(day: u32) -> usize {
    day.saturating_sub(1) as usize
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// Show the lunch and dinner menus of the current destination
    #[command(aliases = ["l", "ls"])]
    List,
    /// Choose a meal for one day
    #[command(alias = "s")]
    Set(MealSetArgs),
    /// Clear a meal slot of one day
    #[command(alias = "c")]
    Clear(MealClearArgs),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List destinations
    #[command(alias = "d")]
    Destinations,
    /// List board types
    #[command(alias = "b")]
    Boards,
}

/// Command-line representation of board types
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BoardTypeArg {
    /// Full board: lunch and dinner every day
    Fb,
    /// Half board: lunch or dinner each day
    Hb,
    /// No board: no meals
    Nb,
}

impl From<BoardTypeArg> for BoardType {
    fn from(val: BoardTypeArg) -> Self {
        match val {
            BoardTypeArg::Fb => BoardType::FullBoard,
            BoardTypeArg::Hb => BoardType::HalfBoard,
            BoardTypeArg::Nb => BoardType::NoBoard,
        }
    }
}

/// Command-line representation of meal slots
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MealTypeArg {
    Lunch,
    Dinner,
}

impl From<MealTypeArg> for MealType {
    fn from(val: MealTypeArg) -> Self {
        match val {
            MealTypeArg::Lunch => MealType::Lunch,
            MealTypeArg::Dinner => MealType::Dinner,
        }
    }
}
