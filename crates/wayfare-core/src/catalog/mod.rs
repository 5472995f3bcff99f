//! Reference catalogs and the destination resolver.
//!
//! Catalogs are read-only lookup tables keyed by destination name. The engine
//! and the pricing calculator never match destination keys themselves: the
//! presentation layer calls [`Catalog::resolve`] once, which normalizes the
//! key (trimmed, case-insensitive) and hands back the destination's hotels and
//! meal menu. An unknown destination resolves to empty data, so the wizard
//! degrades to "no options available" instead of failing.

mod source;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

pub use source::CatalogSource;

use crate::{
    error::{BookingError, Result},
    models::{BoardType, BoardTypeInfo, Destination, Hotel, HotelId, MealMenu, EMPTY_MENU},
};

fn default_currency() -> String {
    "AZN".to_string()
}

fn default_board_types() -> Vec<BoardTypeInfo> {
    BoardType::ALL.into_iter().map(BoardTypeInfo::from).collect()
}

/// All reference data the wizard offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Currency label used when displaying prices
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default = "default_board_types")]
    pub board_types: Vec<BoardTypeInfo>,
    /// Hotels keyed by destination name
    #[serde(default)]
    pub hotels: BTreeMap<String, Vec<Hotel>>,
    /// Lunch and dinner menus keyed by destination name
    #[serde(default)]
    pub meals: BTreeMap<String, MealMenu>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            destinations: Vec::new(),
            board_types: default_board_types(),
            hotels: BTreeMap::new(),
            meals: BTreeMap::new(),
        }
    }
}

/// Hotels and meals of one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCatalog<'a> {
    pub hotels: &'a [Hotel],
    pub meals: &'a MealMenu,
}

impl ResolvedCatalog<'_> {
    /// Find a hotel of this destination by id.
    pub fn hotel(&self, id: HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }
}

/// Normalize a destination key for lookup.
pub fn normalize_key(destination: &str) -> String {
    destination.trim().to_lowercase()
}

impl Catalog {
    /// Parse a catalog from JSON and check it for duplicate ids.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up the hotels and meal menu for `destination`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfare_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::bundled().unwrap();
    /// let turkey = catalog.resolve("  tURKEY ");
    /// assert!(!turkey.hotels.is_empty());
    ///
    /// let nowhere = catalog.resolve("Atlantis");
    /// assert!(nowhere.hotels.is_empty());
    /// assert!(nowhere.meals.is_empty());
    /// ```
    pub fn resolve(&self, destination: &str) -> ResolvedCatalog<'_> {
        let needle = normalize_key(destination);
        let hotels = self
            .hotels
            .iter()
            .find(|(key, _)| normalize_key(key) == needle)
            .map_or(&[][..], |(_, hotels)| hotels.as_slice());
        let meals = self
            .meals
            .iter()
            .find(|(key, _)| normalize_key(key) == needle)
            .map_or(&EMPTY_MENU, |(_, menu)| menu);
        ResolvedCatalog { hotels, meals }
    }

    /// Find a listed destination by name, case-insensitively.
    pub fn destination(&self, name: &str) -> Option<&Destination> {
        let needle = normalize_key(name);
        self.destinations
            .iter()
            .find(|d| normalize_key(&d.name) == needle)
    }

    /// Reject catalogs whose destination keys or ids are ambiguous.
    pub fn validate(&self) -> Result<()> {
        ensure_unique_keys("hotels", self.hotels.keys())?;
        ensure_unique_keys("meals", self.meals.keys())?;
        for (destination, hotels) in &self.hotels {
            let mut seen = HashSet::new();
            if let Some(dup) = hotels.iter().find(|h| !seen.insert(h.id)) {
                return Err(BookingError::catalog(format!(
                    "duplicate hotel id {} for destination '{destination}'",
                    dup.id
                )));
            }
        }
        for (destination, menu) in &self.meals {
            let mut seen = HashSet::new();
            if let Some(dup) = menu
                .lunch
                .iter()
                .chain(menu.dinner.iter())
                .find(|m| !seen.insert(m.id))
            {
                return Err(BookingError::catalog(format!(
                    "duplicate meal id {} for destination '{destination}'",
                    dup.id
                )));
            }
        }
        Ok(())
    }
}

/// Two keys that normalize alike would make [`Catalog::resolve`] pick one
/// of them arbitrarily.
fn ensure_unique_keys<'a>(table: &str, keys: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(normalize_key(key)) {
            return Err(BookingError::catalog(format!(
                "duplicate destination '{}' in {table}",
                key.trim()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealItem;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.hotels.insert(
            "UAE".to_string(),
            vec![Hotel {
                id: 1,
                name: "Creek Tower".to_string(),
                price: 150,
            }],
        );
        catalog.meals.insert(
            "UAE".to_string(),
            MealMenu {
                lunch: vec![MealItem {
                    id: 10,
                    name: "Machboos".to_string(),
                    price: 18,
                }],
                dinner: Vec::new(),
            },
        );
        catalog
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = small_catalog();
        let resolved = catalog.resolve("uae");
        assert_eq!(resolved.hotels.len(), 1);
        assert_eq!(resolved.meals.lunch[0].name, "Machboos");
        assert_eq!(resolved.hotel(1).map(|h| h.price), Some(150));
        assert!(resolved.hotel(2).is_none());
    }

    #[test]
    fn test_resolve_unknown_destination_is_empty() {
        let catalog = small_catalog();
        let resolved = catalog.resolve("Destination");
        assert!(resolved.hotels.is_empty());
        assert!(resolved.meals.is_empty());
    }

    #[test]
    fn test_defaults_fill_board_types_and_currency() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog.currency, "AZN");
        assert_eq!(catalog.board_types.len(), 3);
        assert_eq!(catalog.board_types[1].name, "Half Board (HB)");
    }

    #[test]
    fn test_duplicate_meal_ids_rejected() {
        let json = r#"{
            "meals": {
                "Italy": {
                    "lunch": [{"id": 1, "name": "Risotto", "price": 14}],
                    "dinner": [{"id": 1, "name": "Osso Buco", "price": 25}]
                }
            }
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate meal id 1"));
    }

    #[test]
    fn test_destination_keys_differing_in_case_rejected() {
        let json = r#"{
            "hotels": {
                "Italy": [{"id": 1, "name": "Hotel Roma", "price": 110}],
                "italy ": [{"id": 2, "name": "Villa Milano", "price": 130}]
            }
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate destination 'italy' in hotels"));

        let mut catalog = small_catalog();
        catalog.meals.insert(" uae".to_string(), MealMenu::default());
        assert!(catalog.validate().is_err());
        assert!(small_catalog().validate().is_ok());
    }

    #[test]
    fn test_destination_lookup() {
        let mut catalog = small_catalog();
        catalog.destinations.push(Destination {
            id: 2,
            name: "UAE".to_string(),
        });
        assert_eq!(catalog.destination("uae ").map(|d| d.id), Some(2));
        assert!(catalog.destination("Italy").is_none());
    }
}
