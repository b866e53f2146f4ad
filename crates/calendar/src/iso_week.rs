//! ISO 8601 week arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// The Monday-to-Sunday date span of one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekSpan {
    year: i32,
    week: u32,
    monday: NaiveDate,
    sunday: NaiveDate,
}

impl WeekSpan {
    /// Returns the ISO year the week belongs to.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the ISO week number.
    pub fn week(self) -> u32 {
        self.week
    }

    /// Returns the first day of the week.
    pub fn monday(self) -> NaiveDate {
        self.monday
    }

    /// Returns the last day of the week.
    pub fn sunday(self) -> NaiveDate {
        self.sunday
    }

    /// Returns `true` if `date` lies within this week (inclusive).
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.monday..=self.sunday).contains(&date)
    }

    /// Iterates over the seven dates of the week, Monday first.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.monday.iter_days().take(7)
    }
}

/// Returns the ISO week number of `date`.
///
/// Dates at the very start or end of a calendar year may belong to the last
/// week of the previous ISO year or week 1 of the next one; use
/// [`iso_year_week`] when the ISO year matters.
pub fn week_of(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Returns the ISO `(year, week)` coordinate of `date`.
pub fn iso_year_week(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// Returns the number of ISO weeks in `year` (52 or 53).
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday. Equivalently, Dec 31 does not belong to
/// week 1 of the following year.
pub fn weeks_in_iso_year(year: i32) -> u32 {
    // Weekday (0 = Sunday) of Dec 31 of `y`.
    fn dec31_weekday(y: i32) -> i32 {
        (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7)
    }
    if dec31_weekday(year) == 4 || dec31_weekday(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// Returns the Monday and Sunday of ISO week `week` in ISO year `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is outside
/// `1..=weeks_in_iso_year(year)`.
pub fn week_bounds(year: i32, week: u32) -> Result<WeekSpan, CalendarError> {
    let max = weeks_in_iso_year(year);
    let invalid = CalendarError::InvalidWeek { year, week, max };
    if !(1..=max).contains(&week) {
        return Err(invalid);
    }
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or(invalid.clone())?;
    let sunday = NaiveDate::from_isoywd_opt(year, week, Weekday::Sun).ok_or(invalid)?;
    Ok(WeekSpan {
        year,
        week,
        monday,
        sunday,
    })
}

/// Builds a calendar date, mapping impossible month/day pairs to an error.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the date does not exist.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_of_known_dates() {
        assert_eq!(week_of(ymd(2025, 6, 21)), 25);
        assert_eq!(week_of(ymd(2020, 4, 12)), 15);
        // Sunday belongs to the week that started on the preceding Monday.
        assert_eq!(week_of(ymd(2025, 4, 20)), 16);
        assert_eq!(week_of(ymd(2025, 4, 21)), 17);
    }

    #[test]
    fn week_of_year_boundaries() {
        // Jan 1 2021 is a Friday: still week 53 of ISO year 2020.
        assert_eq!(iso_year_week(ymd(2021, 1, 1)), (2020, 53));
        // Dec 29 2025 is a Monday: week 1 of ISO year 2026.
        assert_eq!(iso_year_week(ymd(2025, 12, 29)), (2026, 1));
        assert_eq!(week_of(ymd(2025, 12, 31)), 1);
    }

    #[test]
    fn weeks_in_long_years() {
        for year in [2004, 2009, 2015, 2020, 2026, 2032] {
            assert_eq!(weeks_in_iso_year(year), 53, "year {year}");
        }
    }

    #[test]
    fn weeks_in_short_years() {
        for year in [2019, 2021, 2022, 2023, 2024, 2025] {
            assert_eq!(weeks_in_iso_year(year), 52, "year {year}");
        }
    }

    #[test]
    fn bounds_of_week_one() {
        let span = week_bounds(2026, 1).unwrap();
        assert_eq!(span.monday(), ymd(2025, 12, 29));
        assert_eq!(span.sunday(), ymd(2026, 1, 4));
        assert_eq!(span.year(), 2026);
        assert_eq!(span.week(), 1);
    }

    #[test]
    fn bounds_of_week_53() {
        let span = week_bounds(2020, 53).unwrap();
        assert_eq!(span.monday(), ymd(2020, 12, 28));
        assert_eq!(span.sunday(), ymd(2021, 1, 3));
    }

    #[test]
    fn bounds_reject_week_zero() {
        assert_eq!(
            week_bounds(2025, 0).unwrap_err(),
            CalendarError::InvalidWeek {
                year: 2025,
                week: 0,
                max: 52
            }
        );
    }

    #[test]
    fn bounds_reject_week_53_in_short_year() {
        assert_eq!(
            week_bounds(2025, 53).unwrap_err(),
            CalendarError::InvalidWeek {
                year: 2025,
                week: 53,
                max: 52
            }
        );
    }

    #[test]
    fn span_contains_and_days() {
        let span = week_bounds(2025, 25).unwrap();
        assert!(span.contains(ymd(2025, 6, 16)));
        assert!(span.contains(ymd(2025, 6, 22)));
        assert!(!span.contains(ymd(2025, 6, 23)));

        let days: Vec<NaiveDate> = span.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], span.monday());
        assert_eq!(days[6], span.sunday());
    }

    #[test]
    fn date_rejects_feb_29_in_common_year() {
        assert_eq!(
            date(2025, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2025,
                month: 2,
                day: 29
            }
        );
        assert_eq!(date(2024, 2, 29).unwrap(), ymd(2024, 2, 29));
    }
}
