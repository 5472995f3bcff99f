use jiff::civil::{date, Date};
use wayfare_core::{BookingSession, BookingSessionBuilder, Catalog};

pub const START: Date = date(2026, 10, 16);

/// Session over the bundled catalog with a fixed start date.
pub fn create_test_session() -> BookingSession {
    BookingSessionBuilder::new()
        .with_catalog(Catalog::bundled().expect("Bundled catalog should load"))
        .with_start_date(START)
        .build()
        .expect("Failed to create session")
}
