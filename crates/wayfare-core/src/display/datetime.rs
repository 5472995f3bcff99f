//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A trip date formatted with its weekday, e.g. `Fri 16 Oct 2026`.
pub struct TripDate<'a>(pub &'a Date);

impl fmt::Display for TripDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %-d %b %Y"))
    }
}

/// A trip length with its unit, e.g. `1 day` or `3 days`.
pub struct TripLength(pub u32);

impl fmt::Display for TripLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0 == 1 { "day" } else { "days" };
        write!(f, "{} {unit}", self.0)
    }
}
