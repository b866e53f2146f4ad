//! # rota-calendar
//!
//! ISO 8601 week arithmetic and the two holidays that drive a rotation
//! season: Easter (movable, used for collision avoidance) and the anchor
//! holiday (midsummer by default, the week that rotates between seasons).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"week_of()"| B["ISO week"]
//!     C["(year, week)"] -->|"week_bounds()"| D["WeekSpan (Mon..=Sun)"]
//!     E["year"] -->|"weeks_in_iso_year()"| F["52 | 53"]
//!     E -->|"easter_sunday()"| A
//!     E -->|"AnchorHoliday::date()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rota_calendar::{AnchorHoliday, movable_holiday_week, week_bounds, weeks_in_iso_year};
//!
//! assert_eq!(weeks_in_iso_year(2020), 53);
//! assert_eq!(movable_holiday_week(2025).unwrap(), 16);
//! assert_eq!(AnchorHoliday::default().week(2025).unwrap(), 25);
//!
//! let span = week_bounds(2025, 25).unwrap();
//! assert_eq!(span.sunday() - span.monday(), chrono::TimeDelta::days(6));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `iso_week` | Date to ISO week, week to Monday/Sunday span, weeks per year |
//! | `holiday` | Easter computus and the Saturday-on-or-after anchor rule |
//! | `error` | Error types |

mod error;
mod holiday;
mod iso_week;

pub use error::CalendarError;
pub use holiday::{
    AnchorHoliday, MOVABLE_HOLIDAY_WEEKS, anchor_holiday_week, easter_sunday,
    movable_holiday_week, saturday_on_or_after, weekday_on_or_after,
};
pub use iso_week::{WeekSpan, date, iso_year_week, week_bounds, week_of, weeks_in_iso_year};
