//! Holiday resolution: Easter (the movable holiday) and the anchor holiday.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::iso_week::{date, iso_year_week, week_of};

/// Every ISO week Easter Sunday can fall in.
///
/// Western Easter lies between March 22 and April 25, which is week 12 at
/// the earliest and week 17 at the latest.
pub const MOVABLE_HOLIDAY_WEEKS: RangeInclusive<u32> = 12..=17;

/// Returns the date of Western (Gregorian) Easter Sunday.
///
/// Uses the anonymous Gregorian computus.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] only for years outside the range
/// `chrono` can represent.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month = n.div_euclid(31) as u32;
    let day = n.rem_euclid(31) as u32 + 1;
    date(year, month, day)
}

/// Returns the ISO week of Easter Sunday in `year`.
///
/// # Errors
///
/// See [`easter_sunday`].
pub fn movable_holiday_week(year: i32) -> Result<u32, CalendarError> {
    easter_sunday(year).map(week_of)
}

/// Returns the first `weekday` on or after `from`.
///
/// Returns `None` only when the result would overflow `chrono`'s date range.
pub fn weekday_on_or_after(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead =
        (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    from.checked_add_days(Days::new(u64::from(ahead)))
}

/// Returns the first Saturday on or after `from`.
pub fn saturday_on_or_after(from: NaiveDate) -> Option<NaiveDate> {
    weekday_on_or_after(from, Weekday::Sat)
}

/// The anchor holiday rule: the Saturday on or after a fixed month/day.
///
/// The default is June 20, which yields the Finnish midsummer Saturday
/// (always between June 20 and June 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorHoliday {
    month: u32,
    day: u32,
}

impl AnchorHoliday {
    /// Creates a rule anchored at `month`/`day`.
    ///
    /// The pair is checked against a leap year, so February 29 is accepted
    /// here and rejected later for years that lack it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month/day pair never
    /// exists.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        date(2000, month, day).map_err(|_| CalendarError::InvalidDate {
            year: 2000,
            month,
            day,
        })?;
        Ok(Self { month, day })
    }

    /// Returns the month the rule starts searching from.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day the rule starts searching from.
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the holiday's date in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the start date does not
    /// exist in `year` (February 29 in a common year).
    pub fn date(self, year: i32) -> Result<NaiveDate, CalendarError> {
        let start = date(year, self.month, self.day)?;
        saturday_on_or_after(start).ok_or(CalendarError::InvalidDate {
            year,
            month: self.month,
            day: self.day,
        })
    }

    /// Returns the ISO week of the holiday in `year`.
    ///
    /// # Errors
    ///
    /// See [`AnchorHoliday::date`]. Also returns
    /// [`CalendarError::OutsideIsoYear`] when the holiday lands in week 1 of
    /// the next ISO year (or the last week of the previous one).
    pub fn week(self, year: i32) -> Result<u32, CalendarError> {
        let date = self.date(year)?;
        let (iso_year, week) = iso_year_week(date);
        if iso_year != year {
            return Err(CalendarError::OutsideIsoYear {
                year,
                date,
                iso_year,
            });
        }
        Ok(week)
    }
}

impl Default for AnchorHoliday {
    fn default() -> Self {
        Self { month: 6, day: 20 }
    }
}

/// Returns the ISO week of the default anchor holiday (midsummer) in `year`.
///
/// # Errors
///
/// See [`AnchorHoliday::date`].
pub fn anchor_holiday_week(year: i32) -> Result<u32, CalendarError> {
    AnchorHoliday::default().week(year)
}
