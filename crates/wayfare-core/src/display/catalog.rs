//! Listings of catalog entries.
//!
//! Each wrapper borrows the catalog slice it lists and handles the empty case
//! with a sentence instead of an empty list.

use std::fmt;

use super::models::money;
use crate::models::{BoardType, BoardTypeInfo, Destination, Hotel, HotelId, MealMenu, MealType};

/// Hotels of the current destination, marking the selected one.
pub struct HotelList<'a> {
    pub hotels: &'a [Hotel],
    pub selected: Option<HotelId>,
    pub currency: &'a str,
}

impl fmt::Display for HotelList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hotels.is_empty() {
            return writeln!(f, "No hotels available for this destination.");
        }
        for hotel in self.hotels {
            let marker = if self.selected == Some(hotel.id) { " (selected)" } else { "" };
            writeln!(
                f,
                "- {}. {} - {} / night{marker}",
                hotel.id,
                hotel.name,
                money(hotel.price, self.currency)
            )?;
        }
        Ok(())
    }
}

/// Lunch and dinner menus of the current destination.
pub struct MealMenuView<'a> {
    pub menu: &'a MealMenu,
    pub currency: &'a str,
}

impl fmt::Display for MealMenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.menu.is_empty() {
            return writeln!(f, "No meals available for this destination.");
        }
        for meal_type in [MealType::Lunch, MealType::Dinner] {
            let heading = match meal_type {
                MealType::Lunch => "Lunch",
                MealType::Dinner => "Dinner",
            };
            writeln!(f, "## {heading}")?;
            writeln!(f)?;
            let items = self.menu.items(meal_type);
            if items.is_empty() {
                writeln!(f, "Nothing on the menu.")?;
            }
            for meal in items {
                writeln!(
                    f,
                    "- {}. {} - {}",
                    meal.id,
                    meal.name,
                    money(meal.price, self.currency)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Destinations offered by the catalog.
pub struct DestinationList<'a>(pub &'a [Destination]);

impl fmt::Display for DestinationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No destinations found.");
        }
        for destination in self.0 {
            writeln!(f, "- {}", destination.name)?;
        }
        Ok(())
    }
}

/// Board types with the current choice marked.
pub struct BoardTypeList<'a> {
    pub board_types: &'a [BoardTypeInfo],
    pub current: BoardType,
}

impl fmt::Display for BoardTypeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in self.board_types {
            let marker = if info.code == self.current { " (current)" } else { "" };
            writeln!(f, "- {}: {}{marker}", info.code.code(), info.name)?;
        }
        Ok(())
    }
}
