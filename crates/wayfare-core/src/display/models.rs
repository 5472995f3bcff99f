//! Display implementations for domain models.
//!
//! Output is markdown for the terminal renderer and the MCP server. The plain
//! [`Configuration`] display shows raw meal ids; [`TripOverview`] resolves
//! them against the destination's menu.

use std::fmt;

use super::datetime::{TripDate, TripLength};
use crate::models::{BoardType, Configuration, DailyMealSelection, MealMenu, MealType};

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `amount` followed by the currency label, if there is one.
pub(crate) fn money(amount: u64, currency: &str) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{amount} {currency}")
    }
}

fn write_trip_block(f: &mut fmt::Formatter<'_>, config: &Configuration, currency: &str) -> fmt::Result {
    writeln!(f, "# Trip configuration")?;
    writeln!(f)?;
    writeln!(f, "- Citizenship: {}", config.citizenship)?;
    writeln!(f, "- Destination: {}", config.destination)?;
    writeln!(f, "- Start date: {}", TripDate(&config.start_date))?;
    writeln!(f, "- Trip length: {}", TripLength(config.trip_days))?;
    writeln!(f, "- Board type: {}", config.board_type)?;
    match &config.selected_hotel {
        Some(hotel) => writeln!(
            f,
            "- Hotel: {} ({} / night)",
            hotel.name,
            money(hotel.price_per_night, currency)
        )?,
        None => writeln!(f, "- Hotel: not selected")?,
    }
    Ok(())
}

fn write_day_heading(f: &mut fmt::Formatter<'_>, config: &Configuration, day_index: usize) -> fmt::Result {
    match config.date_of_day(day_index) {
        Some(date) => write!(f, "- Day {} ({})", day_index + 1, TripDate(&date)),
        None => write!(f, "- Day {}", day_index + 1),
    }
}

fn write_meal_section<F>(f: &mut fmt::Formatter<'_>, config: &Configuration, mut slot: F) -> fmt::Result
where
    F: FnMut(&DailyMealSelection, MealType) -> String,
{
    writeln!(f)?;
    writeln!(f, "## Daily meals")?;
    writeln!(f)?;

    if !config.board_type.includes_meals() {
        writeln!(f, "Meals are not included with {}.", config.board_type)?;
        return Ok(());
    }

    for day_index in 0..config.trip_days as usize {
        let selection = config.effective_selection(day_index).unwrap_or_default();
        write_day_heading(f, config, day_index)?;
        writeln!(
            f,
            ": lunch {}, dinner {}",
            slot(&selection, MealType::Lunch),
            slot(&selection, MealType::Dinner)
        )?;
    }
    Ok(())
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_trip_block(f, self, "")?;
        write_meal_section(f, self, |selection, meal_type| match selection.get(meal_type) {
            Some(id) => format!("#{id}"),
            None => "-".to_string(),
        })
    }
}

/// Configuration with meal names and prices resolved from the menu.
pub struct TripOverview<'a> {
    pub config: &'a Configuration,
    pub meals: &'a MealMenu,
    pub currency: &'a str,
}

impl fmt::Display for TripOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_trip_block(f, self.config, self.currency)?;
        write_meal_section(f, self.config, |selection, meal_type| {
            match selection.get(meal_type) {
                Some(id) => match self.meals.find(id) {
                    Some(meal) => format!("{} ({})", meal.name, money(meal.price, self.currency)),
                    None => format!("#{id} (unavailable)"),
                },
                None => "-".to_string(),
            }
        })
    }
}
