//! Booking summary with per-day costs.

use std::fmt;

use super::{
    datetime::{TripDate, TripLength},
    models::money,
};
use crate::{
    models::{Configuration, MealItem},
    pricing::{CostBreakdown, DayCost},
};

/// Final step of the wizard: the configuration and its cost breakdown.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use wayfare_core::{
///     display::BookingSummary,
///     models::{Configuration, MealMenu, SelectedHotel},
///     pricing::CostBreakdown,
/// };
///
/// let mut config = Configuration::starting_on(date(2026, 10, 16));
/// config.selected_hotel = Some(SelectedHotel {
///     id: 1,
///     name: "Hotel Roma".to_string(),
///     price_per_night: 140,
/// });
/// let breakdown = CostBreakdown::compute(&config, &MealMenu::default());
/// let summary = BookingSummary::new(&config, &breakdown, "EUR");
/// assert!(summary.to_string().contains("## Booking total: 140 EUR"));
/// ```
pub struct BookingSummary<'a> {
    config: &'a Configuration,
    breakdown: &'a CostBreakdown,
    currency: &'a str,
}

impl<'a> BookingSummary<'a> {
    pub fn new(config: &'a Configuration, breakdown: &'a CostBreakdown, currency: &'a str) -> Self {
        Self {
            config,
            breakdown,
            currency,
        }
    }

    fn meal_line(&self, meal: Option<&MealItem>) -> String {
        match meal {
            Some(meal) => format!("{} ({})", meal.name, money(meal.price, self.currency)),
            None => "none".to_string(),
        }
    }

    fn fmt_day(&self, f: &mut fmt::Formatter<'_>, day: &DayCost) -> fmt::Result {
        match &day.date {
            Some(date) => writeln!(f, "### Day {} ({})", day.day_index + 1, TripDate(date))?,
            None => writeln!(f, "### Day {}", day.day_index + 1)?,
        }
        writeln!(f)?;
        writeln!(f, "- Hotel: {}", money(day.hotel_price, self.currency))?;
        if self.config.board_type.includes_meals() {
            writeln!(f, "- Lunch: {}", self.meal_line(day.lunch.as_ref()))?;
            writeln!(f, "- Dinner: {}", self.meal_line(day.dinner.as_ref()))?;
        } else {
            writeln!(f, "- Meals: not included")?;
        }
        writeln!(f, "- Day total: {}", money(day.total, self.currency))?;
        writeln!(f)
    }
}

impl fmt::Display for BookingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        writeln!(f, "# Booking summary")?;
        writeln!(f)?;
        writeln!(f, "- Citizenship: {}", config.citizenship)?;
        writeln!(f, "- Destination: {}", config.destination)?;
        writeln!(f, "- Start date: {}", TripDate(&config.start_date))?;
        writeln!(f, "- Trip length: {}", TripLength(config.trip_days))?;
        writeln!(f, "- Board type: {}", config.board_type)?;
        if let Some(hotel) = &config.selected_hotel {
            writeln!(
                f,
                "- Hotel: {} ({} / night)",
                hotel.name,
                money(hotel.price_per_night, self.currency)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "## Daily costs")?;
        writeln!(f)?;

        for day in &self.breakdown.days {
            self.fmt_day(f, day)?;
        }

        writeln!(
            f,
            "## Booking total: {}",
            money(self.breakdown.grand_total, self.currency)
        )
    }
}
