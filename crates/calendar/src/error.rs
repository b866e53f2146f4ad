//! Error types for the rota-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the rota-calendar crate.
///
/// Both variants signal a caller bug: a week or date that does not exist in
/// the requested year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a week number is outside the ISO range of its year.
    #[error("invalid ISO week: {week} for year {year} (must be 1..={max})")]
    InvalidWeek {
        /// The ISO year that was queried.
        year: i32,
        /// The invalid week number that was provided.
        week: u32,
        /// Number of ISO weeks in `year` (52 or 53).
        max: u32,
    },

    /// Returned when a month/day pair does not exist in the given year.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The calendar year.
        year: i32,
        /// The month (1..=12 when valid).
        month: u32,
        /// The day within the month.
        day: u32,
    },

    /// Returned when a date computed for `year` lies in a week of a
    /// neighbouring ISO year.
    #[error("{date} falls in ISO year {iso_year}, not {year}")]
    OutsideIsoYear {
        /// The year the date was computed for.
        year: i32,
        /// The computed date.
        date: NaiveDate,
        /// The ISO year `date` belongs to.
        iso_year: i32,
    },
}
