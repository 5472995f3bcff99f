//! Invariant-preserving transitions over [`Configuration`].

use log::{debug, warn};

use crate::{
    models::{empty_selections, Configuration, MealId, MealType, SelectedHotel, MAX_TRIP_DAYS},
    params::ConfigPatch,
};

/// Apply field-level overrides and resolve structural triggers.
///
/// A changed day count or board type rebuilds the per-day meal selections
/// from scratch; the day count takes precedence when both change. A
/// `trip_days` outside `1..=MAX_TRIP_DAYS` is dropped while the rest of the
/// patch still applies.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use wayfare_core::{engine::apply_partial_update, models::Configuration, params::ConfigPatch};
///
/// let config = Configuration::starting_on(date(2026, 5, 1));
/// let next = apply_partial_update(
///     &config,
///     &ConfigPatch {
///         trip_days: Some(3),
///         ..Default::default()
///     },
/// );
/// assert_eq!(next.daily_meal_selections.len(), 3);
/// assert_eq!(config.trip_days, 1);
/// ```
pub fn apply_partial_update(state: &Configuration, patch: &ConfigPatch) -> Configuration {
    let trip_days = match patch.trip_days {
        Some(0) => {
            warn!("Ignoring trip_days of 0: a trip lasts at least one day");
            None
        }
        Some(days) if days > MAX_TRIP_DAYS => {
            warn!("Ignoring trip_days of {days}: trips last at most {MAX_TRIP_DAYS} days");
            None
        }
        other => other,
    };

    let mut next = state.clone();

    if let Some(days) = trip_days.filter(|days| *days != state.trip_days) {
        debug!(
            "Trip length changed from {} to {} days, resetting meal selections",
            state.trip_days, days
        );
        next.trip_days = days;
        next.daily_meal_selections = empty_selections(days);
    } else if let Some(board_type) = patch.board_type.filter(|b| *b != state.board_type) {
        debug!(
            "Board type changed from {} to {}, resetting meal selections",
            state.board_type.code(),
            board_type.code()
        );
        next.daily_meal_selections = empty_selections(state.trip_days);
    }

    if let Some(citizenship) = &patch.citizenship {
        next.citizenship.clone_from(citizenship);
    }
    if let Some(destination) = &patch.destination {
        next.destination.clone_from(destination);
    }
    if let Some(board_type) = patch.board_type {
        next.board_type = board_type;
    }
    if let Some(start_date) = patch.start_date {
        next.start_date = start_date;
    }

    next
}

/// Replace the selected hotel wholesale; `None` clears it.
pub fn select_hotel(state: &Configuration, hotel: Option<SelectedHotel>) -> Configuration {
    match &hotel {
        Some(h) => debug!("Selecting hotel {} ({})", h.id, h.name),
        None => debug!("Clearing hotel selection"),
    }
    Configuration {
        selected_hotel: hotel,
        ..state.clone()
    }
}

/// Set or clear one meal slot of one trip day.
///
/// Out-of-range days leave the configuration unchanged. Under half board a
/// non-empty choice clears the other slot of the same day. Under no board the
/// choice is stored but never priced or displayed.
pub fn update_daily_meal_selection(
    state: &Configuration,
    day_index: usize,
    meal_type: MealType,
    meal_id: Option<MealId>,
) -> Configuration {
    if day_index >= state.daily_meal_selections.len() {
        warn!(
            "Ignoring {} edit for day index {} of a {}-day trip",
            meal_type.as_str(),
            day_index,
            state.trip_days
        );
        return state.clone();
    }

    let mut next = state.clone();
    let day = &mut next.daily_meal_selections[day_index];
    day.set(meal_type, meal_id);

    if state.board_type.meals_exclusive() && meal_id.is_some() {
        let other = meal_type.other();
        if day.get(other).is_some() {
            debug!(
                "Half board: clearing {} on day {} after choosing {}",
                other.as_str(),
                day_index + 1,
                meal_type.as_str()
            );
        }
        day.set(other, None);
    }

    next
}
