use chrono::{Datelike, NaiveDate};

/// The calendar range a query selects around an anchor day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    /// ISO-8601 week: Monday based, numbered within the ISO week-year.
    Week,
    Month,
}

impl Period {
    pub fn contains(self, anchor: NaiveDate, date: NaiveDate) -> bool {
        match self {
            Period::Day => date == anchor,
            Period::Week => date.iso_week() == anchor.iso_week(),
            Period::Month => date.year() == anchor.year() && date.month() == anchor.month(),
        }
    }
}
