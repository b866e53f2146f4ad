//! Error types for the rota-season crate.

use rota_calendar::CalendarError;
use rota_rotation::RotationError;

/// Error type for all fallible operations in the rota-season crate.
///
/// Every variant aborts the season computation; no partial allocation is
/// ever returned. Use [`SeasonError::is_configuration`] to tell
/// configuration mistakes from internal consistency failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeasonError {
    /// Returned when the season week range is empty or outside 1..=53.
    #[error("invalid season bounds: weeks {first_week}..={last_week} (need 1 <= first <= last <= 53)")]
    InvalidSeasonBounds {
        /// Configured first week.
        first_week: u32,
        /// Configured last week.
        last_week: u32,
    },

    /// Returned when the rotation weeks do not divide evenly among the roster.
    #[error("{weeks} rotation weeks cannot be shared equally among {roster_size} participants")]
    UnevenShare {
        /// Season weeks left for rotation after fixed-purpose weeks.
        weeks: u32,
        /// Number of participants.
        roster_size: usize,
    },

    /// Returned when a fixed-purpose week is outside 1..=53.
    #[error("fixed-purpose week {week} is outside 1..=53")]
    FixedWeekOutOfRange {
        /// The configured week.
        week: u32,
    },

    /// Returned when a fixed-purpose week has a blank label.
    #[error("fixed-purpose week {week} has an empty label")]
    EmptyFixedLabel {
        /// The configured week.
        week: u32,
    },

    /// Returned when two fixed-purpose weeks could land on the same week.
    #[error("fixed-purpose weeks {first} and {second} both land on week {week}")]
    FixedWeekConflict {
        /// The contested week.
        week: u32,
        /// Configured week of the first claimant.
        first: u32,
        /// Configured week of the second claimant.
        second: u32,
    },

    /// Returned when shifting a fixed-purpose week off Easter could move it
    /// across the season boundary.
    #[error(
        "fixed-purpose week {week} may shift across the season boundary of weeks {first_week}..={last_week}"
    )]
    FixedWeekStraddlesSeason {
        /// The configured week.
        week: u32,
        /// Configured first week.
        first_week: u32,
        /// Configured last week.
        last_week: u32,
    },

    /// Returned when the season extends past the last ISO week of the year.
    #[error("season ends in week {last_week} but {year} has only {weeks_in_year} ISO weeks")]
    SeasonExceedsYear {
        /// Season year.
        year: i32,
        /// Configured last week.
        last_week: u32,
        /// ISO weeks in `year`.
        weeks_in_year: u32,
    },

    /// Returned when the anchor holiday falls outside the season.
    #[error("anchor week {week} of {year} is outside the season weeks {first_week}..={last_week}")]
    AnchorOutsideSeason {
        /// Season year.
        year: i32,
        /// Computed anchor week.
        week: u32,
        /// Configured first week.
        first_week: u32,
        /// Configured last week.
        last_week: u32,
    },

    /// Returned when the anchor holiday falls on a fixed-purpose week.
    #[error("anchor week {week} of {year} is taken by fixed-purpose week {label:?}")]
    AnchorOnFixedWeek {
        /// Season year.
        year: i32,
        /// Computed anchor week.
        week: u32,
        /// Label of the fixed-purpose week occupying it.
        label: String,
    },

    /// Returned when a finished allocation does not give every participant
    /// the same number of weeks. Indicates an allocator defect.
    #[error("fairness check failed: {name:?} has {actual} weeks, expected {expected}")]
    FairnessViolation {
        /// The participant with the wrong count.
        name: String,
        /// Weeks each participant should hold.
        expected: u32,
        /// Weeks this participant holds.
        actual: u32,
    },

    /// Calendar lookup failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Roster or continuation failure.
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

impl SeasonError {
    /// Returns `true` for errors caused by the season configuration rather
    /// than by a lookup or by the allocator itself.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Self::FairnessViolation { .. } | Self::Calendar(_) | Self::Rotation(_)
        )
    }
}
