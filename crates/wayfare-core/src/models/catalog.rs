//! Reference catalog records.

use serde::{Deserialize, Serialize};

use super::{BoardType, HotelId, MealId, MealType, SelectedHotel};

/// A bookable destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub id: u64,
    pub name: String,
}

/// Board type entry as offered to the traveler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardTypeInfo {
    pub code: BoardType,
    pub name: String,
}

impl From<BoardType> for BoardTypeInfo {
    fn from(code: BoardType) -> Self {
        Self {
            code,
            name: code.display_name().to_string(),
        }
    }
}

/// A hotel of one destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// Price per night
    pub price: u64,
}

impl From<&Hotel> for SelectedHotel {
    fn from(hotel: &Hotel) -> Self {
        SelectedHotel {
            id: hotel.id,
            name: hotel.name.clone(),
            price_per_night: hotel.price,
        }
    }
}

/// A dish on a destination's menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealItem {
    pub id: MealId,
    pub name: String,
    pub price: u64,
}

/// Lunch and dinner menus of one destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealMenu {
    #[serde(default)]
    pub lunch: Vec<MealItem>,
    #[serde(default)]
    pub dinner: Vec<MealItem>,
}

/// The menu used when a destination has none.
pub static EMPTY_MENU: MealMenu = MealMenu {
    lunch: Vec::new(),
    dinner: Vec::new(),
};

impl MealMenu {
    /// Items offered for one slot.
    pub fn items(&self, meal_type: MealType) -> &[MealItem] {
        match meal_type {
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    /// Resolve a meal id against both menus.
    ///
    /// Ids are looked up across lunch and dinner together, so a dish listed
    /// only under dinner still resolves when stored in the lunch slot.
    pub fn find(&self, meal_id: MealId) -> Option<&MealItem> {
        self.lunch
            .iter()
            .chain(self.dinner.iter())
            .find(|meal| meal.id == meal_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lunch.is_empty() && self.dinner.is_empty()
    }
}
