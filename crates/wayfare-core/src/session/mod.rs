//! The hosting cell for one wizard session.
//!
//! [`BookingSession`] is the only place that holds "the current"
//! configuration. It threads the value through the pure engine functions,
//! keeps the edit log, and resolves catalog data for the current destination.
//! [`SessionStore`] snapshots the configuration to a JSON file so a session
//! can span several CLI invocations.

mod store;

use jiff::{civil::Date, Zoned};
use log::{debug, info};

pub use store::SessionStore;

use crate::{
    catalog::{Catalog, ResolvedCatalog},
    engine::{self, Edit},
    error::{BookingError, Result},
    models::{Configuration, HotelId, SelectedHotel},
    params::{ConfigPatch, MealSelectionEdit},
    pricing::CostBreakdown,
    wizard::{ensure_can_enter, ensure_slot_open, WizardStep},
};

/// Current configuration plus the catalog it is priced against.
#[derive(Debug, Clone)]
pub struct BookingSession {
    config: Configuration,
    catalog: Catalog,
    history: Vec<Edit>,
    fixed_start: Option<Date>,
}

impl BookingSession {
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Edits applied since the session started or was last reset.
    pub fn history(&self) -> &[Edit] {
        &self.history
    }

    /// Hotels and meals of the current destination.
    pub fn resolved(&self) -> ResolvedCatalog<'_> {
        self.catalog.resolve(&self.config.destination)
    }

    /// Apply an edit and make the result current.
    pub fn dispatch(&mut self, edit: Edit) -> &Configuration {
        self.config = engine::apply(&self.config, &edit);
        self.history.push(edit);
        &self.config
    }

    pub fn update(&mut self, patch: ConfigPatch) -> &Configuration {
        self.dispatch(Edit::Update(patch))
    }

    pub fn select_meal(&mut self, edit: MealSelectionEdit) -> &Configuration {
        self.dispatch(Edit::SelectMeal(edit))
    }

    /// Select a hotel of the current destination by id.
    ///
    /// # Errors
    ///
    /// `BookingError::InvalidInput` if the destination has no such hotel.
    pub fn select_hotel_by_id(&mut self, id: HotelId) -> Result<SelectedHotel> {
        let hotel = self
            .resolved()
            .hotel(id)
            .map(SelectedHotel::from)
            .ok_or_else(|| {
                BookingError::invalid_input("hotel").with_reason(format!(
                    "no hotel with ID {id} in {}",
                    self.config.destination
                ))
            })?;
        self.dispatch(Edit::SelectHotel {
            hotel: Some(hotel.clone()),
        });
        Ok(hotel)
    }

    /// Choose a meal the way the meals page allows it.
    ///
    /// Unlike [`BookingSession::select_meal`], this refuses locked slots and
    /// ids that are not on the destination's menu for that meal.
    ///
    /// # Errors
    ///
    /// `BookingError::InvalidInput` for a day outside the trip or an unknown
    /// meal, `BookingError::SlotLocked` for a closed slot.
    pub fn choose_meal(&mut self, edit: MealSelectionEdit, replace: bool) -> Result<&Configuration> {
        ensure_slot_open(&self.config, &edit, replace)?;
        if let Some(id) = edit.meal_id {
            let listed = self
                .resolved()
                .meals
                .items(edit.meal_type)
                .iter()
                .any(|meal| meal.id == id);
            if !listed {
                return Err(BookingError::invalid_input("meal").with_reason(format!(
                    "no {} with ID {id} in {}",
                    edit.meal_type, self.config.destination
                )));
            }
        }
        Ok(self.select_meal(edit))
    }

    pub fn clear_hotel(&mut self) -> &Configuration {
        self.dispatch(Edit::SelectHotel { hotel: None })
    }

    /// Cost breakdown for the summary step.
    ///
    /// # Errors
    ///
    /// `BookingError::StepLocked` until a hotel is selected.
    pub fn breakdown(&self) -> Result<CostBreakdown> {
        ensure_can_enter(WizardStep::Summary, &self.config)?;
        Ok(CostBreakdown::compute(&self.config, self.resolved().meals))
    }

    /// End the session: back to defaults and an empty edit log.
    pub fn reset(&mut self) -> &Configuration {
        info!("Resetting booking session");
        self.config = Configuration::starting_on(self.fixed_start.unwrap_or_else(today));
        self.history.clear();
        &self.config
    }

    pub fn into_config(self) -> Configuration {
        self.config
    }
}

fn today() -> Date {
    Zoned::now().date()
}

/// Builder for [`BookingSession`].
#[derive(Debug, Clone, Default)]
pub struct BookingSessionBuilder {
    catalog: Option<Catalog>,
    configuration: Option<Configuration>,
    start_date: Option<Date>,
}

impl BookingSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog to price against. Defaults to the bundled sample catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resume from a configuration, e.g. one read from a session file.
    pub fn with_configuration(mut self, configuration: Option<Configuration>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Start date for fresh configurations instead of today.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Build the session.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidSession` if a resumed configuration breaks
    /// an invariant, or a catalog error if the bundled catalog is unusable.
    pub fn build(self) -> Result<BookingSession> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::bundled()?,
        };

        let config = match self.configuration {
            Some(config) => {
                config.validate()?;
                debug!("Resuming configuration for {}", config.destination);
                config
            }
            None => Configuration::starting_on(self.start_date.unwrap_or_else(today)),
        };

        Ok(BookingSession {
            config,
            catalog,
            history: Vec::new(),
            fixed_start: self.start_date,
        })
    }
}
