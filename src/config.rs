use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level rota configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotaConfig {
    /// RNG seed for drawing the very first anchor holder.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Participants in rotation order.
    pub roster: RosterToml,

    /// Season bounds and anchor holiday.
    pub season: SeasonToml,

    /// Weeks excluded from rotation.
    #[serde(default)]
    pub fixed_weeks: Vec<FixedWeekToml>,

    /// Last known anchor record, continued from when allocating.
    #[serde(default)]
    pub anchor: Option<AnchorToml>,
}

impl RotaConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterToml {
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    pub first_week: u32,
    pub last_week: u32,
    #[serde(default = "default_anchor_month")]
    pub anchor_month: u32,
    #[serde(default = "default_anchor_day")]
    pub anchor_day: u32,
}

fn default_anchor_month() -> u32 {
    6
}
fn default_anchor_day() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedWeekToml {
    pub week: u32,
    pub label: String,
}

/// A previously recorded anchor holder.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorToml {
    pub year: i32,
    pub name: String,
}
