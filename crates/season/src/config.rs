//! Season configuration.

use std::collections::BTreeMap;

use rota_calendar::{AnchorHoliday, MOVABLE_HOLIDAY_WEEKS};
use rota_rotation::Roster;

use crate::error::SeasonError;

/// Highest ISO week number in any year.
const MAX_ISO_WEEK: u32 = 53;

/// A week excluded from the rotation and given a constant label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWeek {
    /// Configured ISO week number (before any Easter shift).
    pub week: u32,
    /// Label written into the allocation, e.g. `"TALKOOT"`.
    pub label: String,
}

/// Immutable per-run constants for allocating seasons.
///
/// Use the builder methods to add fixed-purpose weeks or change the anchor
/// holiday, then call [`SeasonConfig::validate`] (the allocator does so on
/// every call).
///
/// # Example
///
/// ```
/// use rota_rotation::Roster;
/// use rota_season::SeasonConfig;
///
/// let roster = Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap();
/// let config = SeasonConfig::new(roster, 21, 35)
///     .with_fixed_week(20, "TALKOOT")
///     .with_fixed_week(36, "TALKOOT");
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weeks_per_name(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SeasonConfig {
    /// Participants in rotation order.
    roster: Roster,
    /// First ISO week of the rotation.
    first_week: u32,
    /// Last ISO week of the rotation (inclusive).
    last_week: u32,
    /// Fixed-purpose weeks in insertion order.
    fixed_weeks: Vec<FixedWeek>,
    /// Rule locating the anchor week each year.
    anchor_holiday: AnchorHoliday,
}

impl SeasonConfig {
    /// Creates a configuration for weeks `first_week..=last_week`.
    ///
    /// Defaults: no fixed-purpose weeks, midsummer anchor (Saturday on or
    /// after June 20).
    pub fn new(roster: Roster, first_week: u32, last_week: u32) -> Self {
        Self {
            roster,
            first_week,
            last_week,
            fixed_weeks: Vec::new(),
            anchor_holiday: AnchorHoliday::default(),
        }
    }

    /// Adds a fixed-purpose week.
    pub fn with_fixed_week(mut self, week: u32, label: impl Into<String>) -> Self {
        self.fixed_weeks.push(FixedWeek {
            week,
            label: label.into(),
        });
        self
    }

    /// Sets the anchor holiday rule.
    pub fn with_anchor_holiday(mut self, anchor_holiday: AnchorHoliday) -> Self {
        self.anchor_holiday = anchor_holiday;
        self
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the first week of the season.
    pub fn first_week(&self) -> u32 {
        self.first_week
    }

    /// Returns the last week of the season.
    pub fn last_week(&self) -> u32 {
        self.last_week
    }

    /// Returns the configured fixed-purpose weeks.
    pub fn fixed_weeks(&self) -> &[FixedWeek] {
        &self.fixed_weeks
    }

    /// Returns the anchor holiday rule.
    pub fn anchor_holiday(&self) -> AnchorHoliday {
        self.anchor_holiday
    }

    /// Returns `true` if `week` lies within `first_week..=last_week`.
    pub fn in_season(&self, week: u32) -> bool {
        (self.first_week..=self.last_week).contains(&week)
    }

    /// Number of weeks in `first_week..=last_week`.
    pub fn season_len(&self) -> u32 {
        (self.last_week + 1).saturating_sub(self.first_week)
    }

    /// Number of season weeks handed out by rotation (season weeks minus
    /// fixed-purpose weeks inside the season).
    pub fn rotation_weeks(&self) -> u32 {
        let carved = self
            .fixed_weeks
            .iter()
            .filter(|f| self.in_season(f.week))
            .count() as u32;
        self.season_len().saturating_sub(carved)
    }

    /// Number of rotation weeks each participant receives.
    ///
    /// Only meaningful after [`SeasonConfig::validate`] succeeded.
    pub fn weeks_per_name(&self) -> u32 {
        self.rotation_weeks() / self.roster.len() as u32
    }

    /// Validates this configuration.
    ///
    /// Checks, in order: season bounds, fixed-purpose week ranges and labels,
    /// duplicate fixed weeks, fixed weeks whose Easter shift could collide
    /// with another fixed week or cross the season boundary, and that the
    /// rotation weeks divide evenly among the roster.
    pub fn validate(&self) -> Result<(), SeasonError> {
        if self.first_week < 1 || self.first_week > self.last_week || self.last_week > MAX_ISO_WEEK
        {
            return Err(SeasonError::InvalidSeasonBounds {
                first_week: self.first_week,
                last_week: self.last_week,
            });
        }

        let mut by_week: BTreeMap<u32, &FixedWeek> = BTreeMap::new();
        for fixed in &self.fixed_weeks {
            if !(1..=MAX_ISO_WEEK).contains(&fixed.week) {
                return Err(SeasonError::FixedWeekOutOfRange { week: fixed.week });
            }
            if fixed.label.trim().is_empty() {
                return Err(SeasonError::EmptyFixedLabel { week: fixed.week });
            }
            if by_week.insert(fixed.week, fixed).is_some() {
                return Err(SeasonError::FixedWeekConflict {
                    week: fixed.week,
                    first: fixed.week,
                    second: fixed.week,
                });
            }
        }

        // Only weeks Easter can fall in are ever shifted back by one.
        for &week in by_week.keys().filter(|w| MOVABLE_HOLIDAY_WEEKS.contains(w)) {
            if by_week.contains_key(&(week - 1)) {
                return Err(SeasonError::FixedWeekConflict {
                    week: week - 1,
                    first: week - 1,
                    second: week,
                });
            }
            if week == self.first_week || week == self.last_week + 1 {
                return Err(SeasonError::FixedWeekStraddlesSeason {
                    week,
                    first_week: self.first_week,
                    last_week: self.last_week,
                });
            }
        }

        let weeks = self.rotation_weeks();
        let roster_size = self.roster.len();
        if weeks == 0 || weeks as usize % roster_size != 0 {
            return Err(SeasonError::UnevenShare { weeks, roster_size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = SeasonConfig::new(roster(), 21, 35);
        assert_eq!(cfg.first_week(), 21);
        assert_eq!(cfg.last_week(), 35);
        assert!(cfg.fixed_weeks().is_empty());
        assert_eq!(cfg.anchor_holiday(), AnchorHoliday::default());
        assert_eq!(cfg.season_len(), 15);
        assert_eq!(cfg.rotation_weeks(), 15);
        assert_eq!(cfg.weeks_per_name(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let rule = AnchorHoliday::new(7, 1).unwrap();
        let cfg = SeasonConfig::new(roster(), 17, 41)
            .with_fixed_week(16, "TALKOOT")
            .with_fixed_week(42, "TALKOOT")
            .with_anchor_holiday(rule);
        assert_eq!(cfg.fixed_weeks().len(), 2);
        assert_eq!(cfg.fixed_weeks()[1].week, 42);
        assert_eq!(cfg.anchor_holiday(), rule);
        assert_eq!(cfg.weeks_per_name(), 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_in_season_fixed_weeks_are_carved_out() {
        let cfg = SeasonConfig::new(roster(), 20, 35).with_fixed_week(30, "HUOLTO");
        assert_eq!(cfg.season_len(), 16);
        assert_eq!(cfg.rotation_weeks(), 15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        for (first, last) in [(0, 10), (30, 20), (40, 54)] {
            assert_eq!(
                SeasonConfig::new(roster(), first, last).validate(),
                Err(SeasonError::InvalidSeasonBounds {
                    first_week: first,
                    last_week: last
                })
            );
        }
    }

    #[test]
    fn test_validate_uneven_share() {
        let result = SeasonConfig::new(roster(), 21, 34).validate();
        assert_eq!(
            result,
            Err(SeasonError::UnevenShare {
                weeks: 14,
                roster_size: 5
            })
        );
    }

    #[test]
    fn test_validate_all_weeks_fixed() {
        let single = Roster::new(["Solo"]).unwrap();
        let result = SeasonConfig::new(single, 30, 30)
            .with_fixed_week(30, "HUOLTO")
            .validate();
        assert!(matches!(
            result,
            Err(SeasonError::UnevenShare { weeks: 0, .. })
        ));
    }

    #[test]
    fn test_validate_fixed_week_range() {
        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(54, "X")
            .validate();
        assert_eq!(result, Err(SeasonError::FixedWeekOutOfRange { week: 54 }));

        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(0, "X")
            .validate();
        assert_eq!(result, Err(SeasonError::FixedWeekOutOfRange { week: 0 }));
    }

    #[test]
    fn test_validate_empty_label() {
        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(20, " ")
            .validate();
        assert_eq!(result, Err(SeasonError::EmptyFixedLabel { week: 20 }));
    }

    #[test]
    fn test_validate_duplicate_fixed_week() {
        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(20, "TALKOOT")
            .with_fixed_week(20, "SIIVOUS")
            .validate();
        assert_eq!(
            result,
            Err(SeasonError::FixedWeekConflict {
                week: 20,
                first: 20,
                second: 20
            })
        );
    }

    #[test]
    fn test_validate_adjacent_shiftable_weeks() {
        // Week 16 shifts to 15 whenever Easter is in week 16.
        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(15, "A")
            .with_fixed_week(16, "B")
            .validate();
        assert_eq!(
            result,
            Err(SeasonError::FixedWeekConflict {
                week: 15,
                first: 15,
                second: 16
            })
        );
    }

    #[test]
    fn test_validate_adjacent_unshiftable_weeks_ok() {
        // Easter never reaches week 37, so neither week ever moves.
        let result = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(36, "A")
            .with_fixed_week(37, "B")
            .validate();
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_shift_across_first_week() {
        let result = SeasonConfig::new(roster(), 16, 40)
            .with_fixed_week(16, "TALKOOT")
            .validate();
        assert_eq!(
            result,
            Err(SeasonError::FixedWeekStraddlesSeason {
                week: 16,
                first_week: 16,
                last_week: 40
            })
        );
    }

    #[test]
    fn test_validate_shift_into_season_end() {
        let result = SeasonConfig::new(roster(), 1, 15)
            .with_fixed_week(16, "TALKOOT")
            .validate();
        assert!(matches!(
            result,
            Err(SeasonError::FixedWeekStraddlesSeason { week: 16, .. })
        ));
    }

    #[test]
    fn test_validate_end_to_end_config_ok() {
        let cfg = SeasonConfig::new(roster(), 21, 35)
            .with_fixed_week(20, "TALKOOT")
            .with_fixed_week(36, "TALKOOT")
            .with_fixed_week(42, "TALVIKUNTOON");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weeks_per_name(), 3);
    }
}
