//! Output formats for allocated seasons.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use rota_rotation::{AnchorRecord, Roster};
use rota_season::{Assignment, SeasonAllocation};

/// Renders every season as a Markdown table, separated by blank lines.
pub fn markdown(seasons: &[SeasonAllocation]) -> Result<String> {
    let tables = seasons
        .iter()
        .map(season_markdown)
        .collect::<Result<Vec<_>>>()?;
    Ok(tables.join("\n"))
}

fn season_markdown(season: &SeasonAllocation) -> Result<String> {
    let mut out = format!(
        "{}\n====\n\n| Vk | Pvm           | Haltija    |\n|:--:|:-------------:|:----------:|\n",
        season.year()
    );
    for (week, assignment) in season.iter() {
        let span = season
            .week_span(week)
            .with_context(|| format!("week {week} of {}", season.year()))?;
        let label = match assignment {
            Assignment::Participant(name) => name.clone(),
            Assignment::Fixed(label) => format!("*{label}*"),
        };
        out.push_str(&format!(
            "| **{week:02}** | {} - {} | {label:10} |\n",
            span.monday().format("%d.%m"),
            span.sunday().format("%d.%m"),
        ));
    }
    Ok(out)
}

/// Renders an anchor record as the `[anchor]` config section that continues
/// from it.
pub fn anchor_toml(record: &AnchorRecord) -> Result<String> {
    #[derive(Serialize)]
    struct Section<'a> {
        anchor: &'a AnchorRecord,
    }
    toml::to_string(&Section { anchor: record }).context("failed to serialize anchor record")
}

/// Serializable summary of one season.
#[derive(Debug, Serialize)]
pub struct SeasonReport {
    pub year: i32,
    pub anchor: AnchorRecord,
    pub next_anchor: AnchorRecord,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weeks: Vec<WeekEntry>,
}

/// One row of a [`SeasonReport`].
#[derive(Debug, Serialize)]
pub struct WeekEntry {
    pub week: u32,
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
    pub label: String,
    pub kind: WeekKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekKind {
    Participant,
    Fixed,
}

impl SeasonReport {
    /// Builds the report for `season`.
    pub fn new(season: &SeasonAllocation, roster: &Roster) -> Result<Self> {
        let anchor = season.anchor_record();
        let next_anchor = anchor.successor(roster)?;
        let (start, end) = season.date_range()?;
        let weeks = season
            .iter()
            .map(|(week, assignment)| -> Result<WeekEntry> {
                let span = season.week_span(week)?;
                Ok(WeekEntry {
                    week,
                    monday: span.monday(),
                    sunday: span.sunday(),
                    label: assignment.label().to_string(),
                    kind: if assignment.is_fixed() {
                        WeekKind::Fixed
                    } else {
                        WeekKind::Participant
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            year: season.year(),
            anchor,
            next_anchor,
            start,
            end,
            weeks,
        })
    }
}

/// Renders every season as a pretty-printed JSON array of [`SeasonReport`]s.
pub fn json(seasons: &[SeasonAllocation], roster: &Roster) -> Result<String> {
    let reports = seasons
        .iter()
        .map(|s| SeasonReport::new(s, roster))
        .collect::<Result<Vec<_>>>()?;
    let mut out = serde_json::to_string_pretty(&reports).context("failed to serialize report")?;
    out.push('\n');
    Ok(out)
}
