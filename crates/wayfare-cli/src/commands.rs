//! Command handlers for the terminal wizard
//!
//! Every invocation loads the session, applies at most one edit, writes the
//! session back and renders the result.

use anyhow::{Context, Result};
use log::debug;
use wayfare_core::{
    display::{BoardTypeList, DestinationList, HotelList, MealMenuView},
    BookingSession, BookingSummary, ConfigPatch, MealSelectionEdit, OperationStatus,
    SessionStore, TripOverview,
};

use crate::{
    cli::{CatalogCommands, HotelCommands, MealCommands, TripCommands},
    renderer::TerminalRenderer,
};

pub struct CommandRunner {
    session: BookingSession,
    store: SessionStore,
    renderer: TerminalRenderer,
}

impl CommandRunner {
    pub fn new(session: BookingSession, store: SessionStore, renderer: TerminalRenderer) -> Self {
        Self {
            session,
            store,
            renderer,
        }
    }

    fn currency(&self) -> &str {
        &self.session.catalog().currency
    }

    fn save(&self) -> Result<()> {
        self.store
            .save(self.session.config())
            .with_context(|| format!("Failed to save session to {}", self.store.path().display()))
    }

    fn overview(&self) -> String {
        TripOverview {
            config: self.session.config(),
            meals: self.session.resolved().meals,
            currency: self.currency(),
        }
        .to_string()
    }

    fn render_with_overview(&self, status: &OperationStatus) {
        self.renderer
            .render(&format!("{status}\n{}", self.overview()));
    }

    pub fn show_configuration(&self) -> Result<()> {
        self.renderer.render(&self.overview());
        Ok(())
    }

    pub fn handle_trip_command(mut self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Show => self.show_configuration(),
            TripCommands::Set(args) => self.update_trip(args.into()),
        }
    }

    fn update_trip(&mut self, patch: ConfigPatch) -> Result<()> {
        if patch.is_empty() {
            self.renderer
                .render(&OperationStatus::updated(&[]).to_string());
            return Ok(());
        }

        let fields = patch.field_names();
        let destination = patch.destination.clone();
        self.session.update(patch);
        self.save()?;

        let mut status = OperationStatus::updated(&fields);
        if let Some(destination) = destination {
            if self.session.catalog().destination(&destination).is_none() {
                status.message.push_str(&format!(
                    " {destination} is not in the catalog, so no hotels or meals are offered."
                ));
            }
        }
        self.render_with_overview(&status);
        Ok(())
    }

    pub fn handle_hotel_command(mut self, command: HotelCommands) -> Result<()> {
        match command {
            HotelCommands::List => {
                let config = self.session.config();
                let list = HotelList {
                    hotels: self.session.resolved().hotels,
                    selected: config.selected_hotel.as_ref().map(|hotel| hotel.id),
                    currency: self.currency(),
                };
                self.renderer
                    .render(&format!("# Hotels in {}\n\n{list}", config.destination));
                Ok(())
            }
            HotelCommands::Select(args) => {
                let hotel = self.session.select_hotel_by_id(args.id)?;
                self.save()?;
                let status = OperationStatus::success(format!(
                    "Selected {} ({} {} / night).",
                    hotel.name,
                    hotel.price_per_night,
                    self.currency()
                ));
                self.render_with_overview(&status);
                Ok(())
            }
            HotelCommands::Clear => {
                self.session.clear_hotel();
                self.save()?;
                self.render_with_overview(&OperationStatus::success("Hotel selection cleared."));
                Ok(())
            }
        }
    }

    pub fn handle_meal_command(mut self, command: MealCommands) -> Result<()> {
        match command {
            MealCommands::List => {
                let view = MealMenuView {
                    menu: self.session.resolved().meals,
                    currency: self.currency(),
                };
                self.renderer.render(&format!(
                    "# Meals in {}\n\n{view}",
                    self.session.config().destination
                ));
                Ok(())
            }
            MealCommands::Set(args) => {
                let edit = MealSelectionEdit::from(&args);
                debug!("Choosing meal: {edit:?} (replace: {})", args.replace);
                self.session.choose_meal(edit.clone(), args.replace)?;
                self.save()?;

                let name = self
                    .session
                    .resolved()
                    .meals
                    .find(args.meal_id)
                    .map_or_else(|| format!("#{}", args.meal_id), |meal| meal.name.clone());
                let status = OperationStatus::success(format!(
                    "Day {} {}: {name}.",
                    edit.day_index + 1,
                    edit.meal_type
                ));
                self.render_with_overview(&status);
                Ok(())
            }
            MealCommands::Clear(args) => {
                let edit = MealSelectionEdit::from(args);
                let day = edit.day_index + 1;
                let meal_type = edit.meal_type;
                self.session.choose_meal(edit, false)?;
                self.save()?;
                let status =
                    OperationStatus::success(format!("Day {day} {meal_type} cleared."));
                self.render_with_overview(&status);
                Ok(())
            }
        }
    }

    pub fn show_summary(&self) -> Result<()> {
        let breakdown = self.session.breakdown()?;
        let summary = BookingSummary::new(self.session.config(), &breakdown, self.currency());
        self.renderer.render(&summary.to_string());
        Ok(())
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        let catalog = self.session.catalog();
        let markdown = match command {
            CatalogCommands::Destinations => {
                format!("# Destinations\n\n{}", DestinationList(&catalog.destinations))
            }
            CatalogCommands::Boards => {
                let list = BoardTypeList {
                    board_types: &catalog.board_types,
                    current: self.session.config().board_type,
                };
                format!("# Board types\n\n{list}")
            }
        };
        self.renderer.render(&markdown);
        Ok(())
    }

    pub fn reset(mut self) -> Result<()> {
        self.session.reset();
        self.store.clear().context("Failed to remove session file")?;
        self.render_with_overview(&OperationStatus::success("Session reset."));
        Ok(())
    }
}
