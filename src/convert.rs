//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};

use rota_calendar::AnchorHoliday;
use rota_rotation::{AnchorRecord, Roster};
use rota_season::SeasonConfig;

use crate::config::*;

/// Builds a [`Roster`] from the TOML roster section.
pub fn build_roster(roster: &RosterToml) -> Result<Roster> {
    Roster::new(roster.names.iter().cloned()).context("invalid [roster]")
}

/// Builds the [`AnchorHoliday`] rule from the TOML season section.
pub fn build_anchor_holiday(season: &SeasonToml) -> Result<AnchorHoliday> {
    AnchorHoliday::new(season.anchor_month, season.anchor_day)
        .context("invalid [season].anchor_month / anchor_day")
}

/// Builds and validates a [`SeasonConfig`] from the whole configuration.
pub fn build_season_config(config: &RotaConfig) -> Result<SeasonConfig> {
    let roster = build_roster(&config.roster)?;
    let anchor_holiday = build_anchor_holiday(&config.season)?;
    let season = config
        .fixed_weeks
        .iter()
        .fold(
            SeasonConfig::new(roster, config.season.first_week, config.season.last_week),
            |cfg, fixed| cfg.with_fixed_week(fixed.week, fixed.label.clone()),
        )
        .with_anchor_holiday(anchor_holiday);
    season.validate().context("invalid season configuration")?;
    Ok(season)
}

/// Converts the optional `[anchor]` section into an [`AnchorRecord`].
pub fn build_previous_anchor(anchor: Option<&AnchorToml>) -> Option<AnchorRecord> {
    anchor.map(|a| AnchorRecord::new(a.year, a.name.clone()))
}
