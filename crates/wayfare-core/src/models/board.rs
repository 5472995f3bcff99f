//! Board type and meal type enumerations.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Meal-inclusion policy of a hotel stay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum BoardType {
    /// Lunch and dinner can be chosen independently every day
    #[default]
    #[serde(rename = "FB")]
    FullBoard,

    /// Breakfast plus one of lunch or dinner per day
    #[serde(rename = "HB")]
    HalfBoard,

    /// No meals; stored meal choices are ignored
    #[serde(rename = "NB")]
    NoBoard,
}

impl FromStr for BoardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "fb" | "fullboard" => Ok(BoardType::FullBoard),
            "hb" | "halfboard" => Ok(BoardType::HalfBoard),
            "nb" | "noboard" => Ok(BoardType::NoBoard),
            _ => Err(format!("Invalid board type: {s}")),
        }
    }
}

impl BoardType {
    /// All board types in catalog order.
    pub const ALL: [BoardType; 3] = [
        BoardType::FullBoard,
        BoardType::HalfBoard,
        BoardType::NoBoard,
    ];

    /// Short code used on the wire and in the session file.
    pub fn code(&self) -> &'static str {
        match self {
            BoardType::FullBoard => "FB",
            BoardType::HalfBoard => "HB",
            BoardType::NoBoard => "NB",
        }
    }

    /// Human readable name including the code.
    ///
    /// ```rust
    /// use wayfare_core::models::BoardType;
    ///
    /// assert_eq!(BoardType::HalfBoard.display_name(), "Half Board (HB)");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            BoardType::FullBoard => "Full Board (FB)",
            BoardType::HalfBoard => "Half Board (HB)",
            BoardType::NoBoard => "No Board (NB)",
        }
    }

    /// Whether meal choices count towards cost and display at all.
    pub fn includes_meals(&self) -> bool {
        !matches!(self, BoardType::NoBoard)
    }

    /// Whether lunch and dinner exclude each other on the same day.
    pub fn meals_exclusive(&self) -> bool {
        matches!(self, BoardType::HalfBoard)
    }
}

/// The two selectable meal slots of a trip day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lunch" | "l" => Ok(MealType::Lunch),
            "dinner" | "d" => Ok(MealType::Dinner),
            _ => Err(format!("Invalid meal type: {s}")),
        }
    }
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    /// The slot on the same day that this one competes with under half board.
    pub fn other(&self) -> MealType {
        match self {
            MealType::Lunch => MealType::Dinner,
            MealType::Dinner => MealType::Lunch,
        }
    }
}
