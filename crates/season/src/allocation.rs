//! The finished week-to-label mapping of one season.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rota_calendar::{CalendarError, WeekSpan, week_bounds};
use rota_rotation::AnchorRecord;

/// What a single week is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// A roster participant holds the week.
    Participant(String),
    /// A fixed-purpose week carrying a constant label.
    Fixed(String),
}

impl Assignment {
    /// Returns the participant name or fixed-purpose label.
    pub fn label(&self) -> &str {
        match self {
            Self::Participant(name) | Self::Fixed(name) => name,
        }
    }

    /// Returns the participant name, or `None` for a fixed-purpose week.
    pub fn participant(&self) -> Option<&str> {
        match self {
            Self::Participant(name) => Some(name),
            Self::Fixed(_) => None,
        }
    }

    /// Returns `true` for a fixed-purpose week.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a fixed-purpose week ended up in a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlacement {
    /// Week number from the configuration.
    pub configured: u32,
    /// Week the label was written to (`configured - 1` on an Easter clash).
    pub week: u32,
    /// The fixed-purpose label.
    pub label: String,
}

impl FixedPlacement {
    /// Returns `true` if the week was moved off the Easter week.
    pub fn is_shifted(&self) -> bool {
        self.week != self.configured
    }
}

/// A complete, immutable allocation for one season.
///
/// Holds the year alongside an ordered map from ISO week number to
/// [`Assignment`]. Entries cover every season week plus any fixed-purpose
/// weeks outside the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonAllocation {
    year: i32,
    first_week: u32,
    last_week: u32,
    anchor_week: u32,
    anchor_name: String,
    weeks: BTreeMap<u32, Assignment>,
    placements: Vec<FixedPlacement>,
}

impl SeasonAllocation {
    pub(crate) fn new(
        year: i32,
        (first_week, last_week): (u32, u32),
        (anchor_week, anchor_name): (u32, String),
        weeks: BTreeMap<u32, Assignment>,
        placements: Vec<FixedPlacement>,
    ) -> Self {
        Self {
            year,
            first_week,
            last_week,
            anchor_week,
            anchor_name,
            weeks,
            placements,
        }
    }

    /// Returns the season year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the first rotation week.
    pub fn first_week(&self) -> u32 {
        self.first_week
    }

    /// Returns the last rotation week.
    pub fn last_week(&self) -> u32 {
        self.last_week
    }

    /// Returns the ISO week of the anchor holiday.
    pub fn anchor_week(&self) -> u32 {
        self.anchor_week
    }

    /// Returns the participant holding the anchor week.
    pub fn anchor_name(&self) -> &str {
        &self.anchor_name
    }

    /// Returns this season's anchor record, the input for continuing into
    /// the next season.
    pub fn anchor_record(&self) -> AnchorRecord {
        AnchorRecord::new(self.year, self.anchor_name.clone())
    }

    /// Returns the assignment for `week`, if the week is part of the allocation.
    pub fn get(&self, week: u32) -> Option<&Assignment> {
        self.weeks.get(&week)
    }

    /// Returns the label for `week`, if the week is part of the allocation.
    pub fn label(&self, week: u32) -> Option<&str> {
        self.get(week).map(Assignment::label)
    }

    /// Iterates over all weeks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Assignment)> {
        self.weeks.iter().map(|(&week, a)| (week, a))
    }

    /// Returns the number of allocated weeks, fixed-purpose ones included.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns `true` if no week is allocated.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates over weeks held by participants.
    pub fn participant_weeks(&self) -> impl Iterator<Item = (u32, &str)> {
        self.iter()
            .filter_map(|(week, a)| a.participant().map(|name| (week, name)))
    }

    /// Iterates over fixed-purpose weeks and their labels.
    pub fn fixed_weeks(&self) -> impl Iterator<Item = (u32, &str)> {
        self.iter()
            .filter(|(_, a)| a.is_fixed())
            .map(|(week, a)| (week, a.label()))
    }

    /// Returns where each configured fixed-purpose week was placed this year.
    pub fn fixed_placements(&self) -> &[FixedPlacement] {
        &self.placements
    }

    /// Returns the weeks held by `name`, ascending.
    pub fn weeks_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = u32> + 'a {
        self.participant_weeks()
            .filter(move |(_, n)| *n == name)
            .map(|(week, _)| week)
    }

    /// Returns the Monday–Sunday span of `week` in this season's year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeek`] if `week` does not exist in
    /// the year.
    pub fn week_span(&self, week: u32) -> Result<WeekSpan, CalendarError> {
        week_bounds(self.year, week)
    }

    /// Returns the season's date boundaries: the Monday of the first week
    /// and the Sunday of the last week.
    ///
    /// # Errors
    ///
    /// See [`SeasonAllocation::week_span`].
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        let first = self.week_span(self.first_week)?;
        let last = self.week_span(self.last_week)?;
        Ok((first.monday(), last.sunday()))
    }
}
