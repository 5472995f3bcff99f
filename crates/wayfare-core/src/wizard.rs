//! Navigation rules of the booking wizard.
//!
//! The engine accepts any edit; deciding which steps and meal slots are open
//! is the presentation layer's job. These helpers keep that policy in one
//! place so the CLI and the MCP server gate the same way.

use std::fmt;

use crate::{
    error::{BookingError, Result},
    models::{BoardType, Configuration, MealType},
    params::MealSelectionEdit,
};

/// The three pages of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Citizenship, destination, dates and board type
    Trip,
    /// Hotel and daily meals
    Meals,
    /// Cost breakdown
    Summary,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Trip => "trip",
            WizardStep::Meals => "meals",
            WizardStep::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Why a step cannot be entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    HotelRequired,
}

impl Gate {
    pub fn reason(&self) -> &'static str {
        match self {
            Gate::HotelRequired => "select a hotel before viewing the summary",
        }
    }
}

/// Why a meal slot is not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLock {
    /// Meals are chosen only after a hotel
    NoHotel,
    /// The board type includes no meals
    NoBoard,
    /// Half board and the other meal of that day is already chosen
    OtherMealChosen,
}

impl SlotLock {
    pub fn reason(&self) -> &'static str {
        match self {
            SlotLock::NoHotel => "select a hotel first to start meal configuration",
            SlotLock::NoBoard => "meal selection is not available with No Board",
            SlotLock::OtherMealChosen => {
                "half board allows lunch or dinner, and the other meal is already chosen"
            }
        }
    }
}

/// Check whether `step` may be entered with the current configuration.
pub fn gate(step: WizardStep, config: &Configuration) -> Option<Gate> {
    match step {
        WizardStep::Trip | WizardStep::Meals => None,
        WizardStep::Summary if !config.has_hotel() => Some(Gate::HotelRequired),
        WizardStep::Summary => None,
    }
}

/// Like [`gate`], but as an error for `?` propagation.
pub fn ensure_can_enter(step: WizardStep, config: &Configuration) -> Result<()> {
    match gate(step, config) {
        Some(gate) => Err(BookingError::StepLocked {
            step: step.to_string(),
            reason: gate.reason().to_string(),
        }),
        None => Ok(()),
    }
}

/// Availability of one meal slot on the meals page.
///
/// Days outside the trip report no lock; the engine ignores them anyway.
pub fn slot_lock(config: &Configuration, day_index: usize, meal_type: MealType) -> Option<SlotLock> {
    if !config.has_hotel() {
        return Some(SlotLock::NoHotel);
    }
    match config.board_type {
        BoardType::NoBoard => Some(SlotLock::NoBoard),
        BoardType::HalfBoard => config
            .daily_meal_selections
            .get(day_index)
            .filter(|day| day.get(meal_type.other()).is_some())
            .map(|_| SlotLock::OtherMealChosen),
        BoardType::FullBoard => None,
    }
}

/// Check a meal edit against the trip length and the slot locks.
///
/// Clearing a slot is always allowed. With `replace`, a half-board choice may
/// displace the other meal of the day, which the engine then clears.
///
/// # Errors
///
/// `BookingError::InvalidInput` for a day outside the trip,
/// `BookingError::SlotLocked` for a closed slot.
pub fn ensure_slot_open(config: &Configuration, edit: &MealSelectionEdit, replace: bool) -> Result<()> {
    if edit.day_index >= config.daily_meal_selections.len() {
        return Err(BookingError::invalid_input("day").with_reason(format!(
            "day {} is outside the {}-day trip",
            edit.day_index + 1,
            config.trip_days
        )));
    }
    if edit.meal_id.is_none() {
        return Ok(());
    }
    match slot_lock(config, edit.day_index, edit.meal_type) {
        Some(SlotLock::OtherMealChosen) if replace => Ok(()),
        Some(lock) => Err(BookingError::SlotLocked {
            day: edit.day_index + 1,
            meal_type: edit.meal_type.as_str().to_string(),
            reason: lock.reason().to_string(),
        }),
        None => Ok(()),
    }
}
