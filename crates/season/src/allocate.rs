//! Season allocation: anchor week, bidirectional rotation fill and
//! fixed-purpose weeks.

use std::collections::BTreeMap;

use rota_calendar::{CalendarError, movable_holiday_week, weeks_in_iso_year};
use rota_rotation::Sequencer;
use tracing::{debug, info};

use crate::allocation::{Assignment, FixedPlacement, SeasonAllocation};
use crate::config::SeasonConfig;
use crate::error::SeasonError;
use crate::fairness::check_fairness;

/// Allocates every week of the `year` season.
///
/// The anchor holiday's week goes to `anchor_name`. Earlier season weeks are
/// filled walking the roster backward from the anchor holder, later ones
/// walking it forward. Fixed-purpose weeks are placed first and skipped by
/// both walks; a fixed week that coincides with Easter's week moves to the
/// week before. The result is checked with [`check_fairness`] before it is
/// returned.
///
/// Identical inputs always produce identical allocations.
///
/// # Errors
///
/// Returns a configuration error from [`SeasonConfig::validate`], or
/// - [`SeasonError::Rotation`] if `anchor_name` is not in the roster,
/// - [`SeasonError::SeasonExceedsYear`] if `year` lacks the last season week,
/// - [`SeasonError::Calendar`] if the anchor holiday falls in another ISO year,
/// - [`SeasonError::FixedWeekConflict`] if two fixed weeks land together,
/// - [`SeasonError::AnchorOutsideSeason`] or [`SeasonError::AnchorOnFixedWeek`]
///   if the anchor week cannot be assigned,
/// - [`SeasonError::FairnessViolation`] if the finished allocation is unfair.
pub fn allocate_season(
    year: i32,
    anchor_name: &str,
    config: &SeasonConfig,
) -> Result<SeasonAllocation, SeasonError> {
    config.validate()?;
    let roster = config.roster();
    let (first_week, last_week) = (config.first_week(), config.last_week());

    let backward = Sequencer::backward(roster, anchor_name)?;
    let forward = Sequencer::forward(roster, anchor_name)?;

    let weeks_in_year = weeks_in_iso_year(year);
    if last_week > weeks_in_year {
        return Err(SeasonError::SeasonExceedsYear {
            year,
            last_week,
            weeks_in_year,
        });
    }

    let placements = place_fixed_weeks(year, config, weeks_in_year)?;

    let anchor_week = config.anchor_holiday().week(year)?;
    if !config.in_season(anchor_week) {
        return Err(SeasonError::AnchorOutsideSeason {
            year,
            week: anchor_week,
            first_week,
            last_week,
        });
    }
    if let Some(fixed) = placements.get(&anchor_week) {
        return Err(SeasonError::AnchorOnFixedWeek {
            year,
            week: anchor_week,
            label: fixed.label.clone(),
        });
    }

    let mut weeks = BTreeMap::new();
    weeks.insert(anchor_week, Assignment::Participant(anchor_name.to_string()));

    let before = (first_week..anchor_week)
        .rev()
        .filter(|w| !placements.contains_key(w));
    for (week, name) in before.zip(backward) {
        weeks.insert(week, Assignment::Participant(name.to_string()));
    }

    let after = (anchor_week + 1..=last_week).filter(|w| !placements.contains_key(w));
    for (week, name) in after.zip(forward) {
        weeks.insert(week, Assignment::Participant(name.to_string()));
    }

    for placement in placements.values() {
        weeks.insert(placement.week, Assignment::Fixed(placement.label.clone()));
    }

    let allocation = SeasonAllocation::new(
        year,
        (first_week, last_week),
        (anchor_week, anchor_name.to_string()),
        weeks,
        placements.into_values().collect(),
    );
    check_fairness(&allocation, config)?;

    info!(
        year,
        anchor = anchor_name,
        anchor_week,
        weeks = allocation.len(),
        per_name = config.weeks_per_name(),
        "season allocated"
    );
    Ok(allocation)
}

/// Resolves where each fixed-purpose week lands in `year`, keyed by the
/// week it lands on.
fn place_fixed_weeks(
    year: i32,
    config: &SeasonConfig,
    weeks_in_year: u32,
) -> Result<BTreeMap<u32, FixedPlacement>, SeasonError> {
    let easter_week = movable_holiday_week(year)?;
    let mut placed: BTreeMap<u32, FixedPlacement> = BTreeMap::new();

    for fixed in config.fixed_weeks() {
        let week = if fixed.week == easter_week {
            fixed.week - 1
        } else {
            fixed.week
        };
        if !(1..=weeks_in_year).contains(&week) {
            return Err(CalendarError::InvalidWeek {
                year,
                week,
                max: weeks_in_year,
            }
            .into());
        }
        if week != fixed.week {
            debug!(
                year,
                label = %fixed.label,
                from = fixed.week,
                to = week,
                "fixed-purpose week falls on Easter, moved one week earlier"
            );
        }
        if let Some(existing) = placed.get(&week) {
            return Err(SeasonError::FixedWeekConflict {
                week,
                first: existing.configured,
                second: fixed.week,
            });
        }
        placed.insert(
            week,
            FixedPlacement {
                configured: fixed.week,
                week,
                label: fixed.label.clone(),
            },
        );
    }
    Ok(placed)
}
