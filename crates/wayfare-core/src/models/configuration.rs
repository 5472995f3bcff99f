//! The booking configuration aggregate and its parts.

use jiff::{civil::Date, Zoned};
use serde::{Deserialize, Serialize};

use super::{BoardType, MealType};
use crate::error::{BookingError, Result};

/// Identifier of a hotel in the reference catalog.
pub type HotelId = u64;

/// Identifier of a meal in the reference catalog.
pub type MealId = u64;

/// Placeholder shown until the traveler picks a citizenship.
pub const CITIZENSHIP_PLACEHOLDER: &str = "Citizenship";

/// Placeholder shown until the traveler picks a destination.
pub const DESTINATION_PLACEHOLDER: &str = "Destination";

/// Longest bookable trip, in days.
pub const MAX_TRIP_DAYS: u32 = 365;

/// One trip day's lunch and dinner choice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyMealSelection {
    pub lunch_id: Option<MealId>,
    pub dinner_id: Option<MealId>,
}

impl DailyMealSelection {
    /// Read the slot for `meal_type`.
    pub fn get(&self, meal_type: MealType) -> Option<MealId> {
        match meal_type {
            MealType::Lunch => self.lunch_id,
            MealType::Dinner => self.dinner_id,
        }
    }

    /// Overwrite the slot for `meal_type`.
    pub fn set(&mut self, meal_type: MealType, meal_id: Option<MealId>) {
        match meal_type {
            MealType::Lunch => self.lunch_id = meal_id,
            MealType::Dinner => self.dinner_id = meal_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lunch_id.is_none() && self.dinner_id.is_none()
    }
}

/// `days` fresh, empty per-day selections.
pub fn empty_selections(days: u32) -> Vec<DailyMealSelection> {
    vec![DailyMealSelection::default(); days as usize]
}

/// The hotel chosen for the whole stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedHotel {
    pub id: HotelId,
    pub name: String,
    pub price_per_night: u64,
}

/// The complete in-progress booking.
///
/// Owned by the hosting application and changed only through the transition
/// functions in [`crate::engine`]. Every transition returns a new value, so a
/// caller holding an earlier configuration never observes a change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    pub citizenship: String,
    pub destination: String,
    pub board_type: BoardType,
    pub trip_days: u32,
    pub start_date: Date,
    pub selected_hotel: Option<SelectedHotel>,
    /// Exactly `trip_days` entries, indexed by 0-based trip day
    pub daily_meal_selections: Vec<DailyMealSelection>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::starting_on(Zoned::now().date())
    }
}

impl Configuration {
    /// Default configuration with an explicit start date.
    pub fn starting_on(start_date: Date) -> Self {
        Self {
            citizenship: CITIZENSHIP_PLACEHOLDER.to_string(),
            destination: DESTINATION_PLACEHOLDER.to_string(),
            board_type: BoardType::default(),
            trip_days: 1,
            start_date,
            selected_hotel: None,
            daily_meal_selections: empty_selections(1),
        }
    }

    pub fn has_hotel(&self) -> bool {
        self.selected_hotel.is_some()
    }

    /// Nightly hotel price, or 0 without a hotel.
    pub fn hotel_price(&self) -> u64 {
        self.selected_hotel
            .as_ref()
            .map_or(0, |hotel| hotel.price_per_night)
    }

    /// The day's selection as it counts for pricing and display.
    ///
    /// Under no board the stored ids are hidden behind an empty selection.
    /// Returns `None` for a day outside the trip.
    pub fn effective_selection(&self, day_index: usize) -> Option<DailyMealSelection> {
        let stored = self.daily_meal_selections.get(day_index)?;
        if self.board_type.includes_meals() {
            Some(*stored)
        } else {
            Some(DailyMealSelection::default())
        }
    }

    /// Calendar date of a trip day, if it is representable.
    pub fn date_of_day(&self, day_index: usize) -> Option<Date> {
        let offset = i64::try_from(day_index).ok()?;
        self.start_date.checked_add(jiff::Span::new().try_days(offset).ok()?).ok()
    }

    /// Check the structural invariants of a configuration that came from
    /// outside the engine.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TRIP_DAYS).contains(&self.trip_days) {
            return Err(BookingError::invalid_session(format!(
                "trip_days must be between 1 and {MAX_TRIP_DAYS}"
            )));
        }
        if self.daily_meal_selections.len() != self.trip_days as usize {
            return Err(BookingError::invalid_session(format!(
                "expected {} daily meal selections, found {}",
                self.trip_days,
                self.daily_meal_selections.len()
            )));
        }
        if self.board_type.meals_exclusive() {
            if let Some(day) = self
                .daily_meal_selections
                .iter()
                .position(|s| s.lunch_id.is_some() && s.dinner_id.is_some())
            {
                return Err(BookingError::invalid_session(format!(
                    "day {} has both lunch and dinner under half board",
                    day + 1
                )));
            }
        }
        Ok(())
    }
}
