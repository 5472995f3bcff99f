//! Pricing calculator.
//!
//! Costs are derived from a [`Configuration`] and the meal menu of its
//! destination. Nothing here mutates the configuration, so every function can
//! be called as often as the presentation layer needs.
//!
//! A day costs the nightly hotel price plus the price of each chosen meal
//! that resolves in the menu. Meals never count under no board, and an id that
//! no longer resolves (for example after a destination change) adds nothing.
//!
//! Prices come from a user-editable catalog, so sums saturate at `u64::MAX`
//! instead of overflowing.

use jiff::civil::Date;
use serde::Serialize;

use crate::models::{Configuration, MealItem, MealMenu};

/// Cost of one trip day.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use wayfare_core::{
///     models::{Configuration, MealMenu, SelectedHotel},
///     pricing::compute_daily_cost,
/// };
///
/// let mut config = Configuration::starting_on(date(2026, 5, 1));
/// config.selected_hotel = Some(SelectedHotel {
///     id: 1,
///     name: "Marina".to_string(),
///     price_per_night: 80,
/// });
/// assert_eq!(compute_daily_cost(&config, 0, &MealMenu::default()), 80);
/// ```
pub fn compute_daily_cost(state: &Configuration, day_index: usize, meals: &MealMenu) -> u64 {
    resolved_meals(state, day_index, meals)
        .into_iter()
        .flatten()
        .fold(state.hotel_price(), |total, meal| total.saturating_add(meal.price))
}

/// Sum of [`compute_daily_cost`] over every trip day.
pub fn compute_grand_total(state: &Configuration, meals: &MealMenu) -> u64 {
    (0..state.trip_days as usize)
        .map(|day| compute_daily_cost(state, day, meals))
        .fold(0, u64::saturating_add)
}

/// Lunch and dinner of a day as they count for pricing.
fn resolved_meals<'m>(
    state: &Configuration,
    day_index: usize,
    meals: &'m MealMenu,
) -> [Option<&'m MealItem>; 2] {
    match state.effective_selection(day_index) {
        Some(selection) => [
            selection.lunch_id.and_then(|id| meals.find(id)),
            selection.dinner_id.and_then(|id| meals.find(id)),
        ],
        None => [None, None],
    }
}

/// Priced view of one trip day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCost {
    /// 0-based trip day
    pub day_index: usize,
    pub date: Option<Date>,
    pub hotel_price: u64,
    pub lunch: Option<MealItem>,
    pub dinner: Option<MealItem>,
    pub total: u64,
}

/// Per-day costs and the booking total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub days: Vec<DayCost>,
    pub grand_total: u64,
}

impl CostBreakdown {
    /// Price every day of the trip.
    pub fn compute(state: &Configuration, meals: &MealMenu) -> Self {
        let days = (0..state.trip_days as usize)
            .map(|day_index| {
                let [lunch, dinner] = resolved_meals(state, day_index, meals);
                DayCost {
                    day_index,
                    date: state.date_of_day(day_index),
                    hotel_price: state.hotel_price(),
                    lunch: lunch.cloned(),
                    dinner: dinner.cloned(),
                    total: compute_daily_cost(state, day_index, meals),
                }
            })
            .collect();

        Self {
            days,
            grand_total: compute_grand_total(state, meals),
        }
    }
}
