//! Configuration engine.
//!
//! Every user action becomes an [`Edit`]. [`apply`] takes the current
//! configuration and an edit and returns the next configuration. Nothing is
//! mutated in place and there is no I/O here; the hosting application keeps
//! the single mutable cell (see [`crate::session::BookingSession`]).
//!
//! ```text
//! Configuration + Edit  →  apply()  →  Configuration
//! ```
//!
//! Each edit first resolves structural triggers (trip length, board type),
//! which rebuild the per-day meal selections, then applies the leaf change.
//! Invalid edits (a zero-day trip, a day outside the trip) are no-ops rather
//! than errors.

mod transitions;

use log::debug;
use serde::{Deserialize, Serialize};

pub use transitions::{apply_partial_update, select_hotel, update_daily_meal_selection};

use crate::{
    models::{Configuration, SelectedHotel},
    params::{ConfigPatch, MealSelectionEdit},
};

/// A single user action against the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    Update(ConfigPatch),
    SelectHotel { hotel: Option<SelectedHotel> },
    SelectMeal(MealSelectionEdit),
}

/// Apply one edit and return the next configuration.
pub fn apply(state: &Configuration, edit: &Edit) -> Configuration {
    debug!("Applying edit: {edit:?}");
    match edit {
        Edit::Update(patch) => apply_partial_update(state, patch),
        Edit::SelectHotel { hotel } => select_hotel(state, hotel.clone()),
        Edit::SelectMeal(MealSelectionEdit {
            day_index,
            meal_type,
            meal_id,
        }) => update_daily_meal_selection(state, *day_index, *meal_type, *meal_id),
    }
}

/// Replay a sequence of edits from `initial`.
pub fn replay<'a, I>(initial: &Configuration, edits: I) -> Configuration
where
    I: IntoIterator<Item = &'a Edit>,
{
    edits
        .into_iter()
        .fold(initial.clone(), |state, edit| apply(&state, edit))
}
