//! Anchor command: show who holds the anchor week in a given year.

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use rota_rotation::{AnchorRecord, Roster, next_anchor};

use crate::cli::AnchorArgs;
use crate::config::RotaConfig;
use crate::convert;

/// Print the anchor record for one season.
pub fn run(args: AnchorArgs) -> Result<()> {
    let _cmd = info_span!("anchor").entered();
    let config = RotaConfig::load(&args.config)?;
    let roster = convert::build_roster(&config.roster)?;
    let year = args.year.unwrap_or_else(current_year);

    let record = resolve_anchor(&config, &roster, year, None, args.seed)?;
    info!(year = record.year, name = %record.name, "anchor resolved");
    println!("{}: {}", record.year, record.name);
    Ok(())
}

/// Returns the current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Decides who holds the anchor week in `year`.
///
/// Priority: an explicit `override_name`, then the configured `[anchor]`
/// record (used as is for its own year, continued forward otherwise), then a
/// random draw seeded by `seed` or the configured seed.
pub fn resolve_anchor(
    config: &RotaConfig,
    roster: &Roster,
    year: i32,
    override_name: Option<&str>,
    seed: Option<u64>,
) -> Result<AnchorRecord> {
    if let Some(name) = override_name {
        if !roster.contains(name) {
            bail!("anchor {name:?} is not in the roster");
        }
        return Ok(AnchorRecord::new(year, name));
    }

    let previous = convert::build_previous_anchor(config.anchor.as_ref());
    if let Some(record) = previous.as_ref().filter(|r| r.year == year) {
        if !roster.contains(&record.name) {
            bail!("configured [anchor] {:?} is not in the roster", record.name);
        }
        return Ok(record.clone());
    }

    let mut rng = match seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    next_anchor(previous.as_ref(), year, roster, &mut rng)
        .with_context(|| format!("failed to choose the anchor for {year}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnchorToml, RosterToml, SeasonToml};

    fn config(anchor: Option<(i32, &str)>) -> RotaConfig {
        RotaConfig {
            seed: Some(3),
            roster: RosterToml {
                names: ["Tytti", "Kari", "Ripa", "Timppa", "Pera"]
                    .map(String::from)
                    .to_vec(),
            },
            season: SeasonToml {
                first_week: 21,
                last_week: 35,
                anchor_month: 6,
                anchor_day: 20,
            },
            fixed_weeks: Vec::new(),
            anchor: anchor.map(|(year, name)| AnchorToml {
                year,
                name: name.into(),
            }),
        }
    }

    fn roster(cfg: &RotaConfig) -> Roster {
        convert::build_roster(&cfg.roster).unwrap()
    }

    #[test]
    fn override_wins() {
        let cfg = config(Some((2024, "Kari")));
        let record = resolve_anchor(&cfg, &roster(&cfg), 2025, Some("Pera"), None).unwrap();
        assert_eq!(record, AnchorRecord::new(2025, "Pera"));
    }

    #[test]
    fn unknown_override_rejected() {
        let cfg = config(None);
        let err = resolve_anchor(&cfg, &roster(&cfg), 2025, Some("Matti"), None).unwrap_err();
        assert!(err.to_string().contains("not in the roster"));
    }

    #[test]
    fn configured_record_for_same_year() {
        let cfg = config(Some((2025, "Ripa")));
        let record = resolve_anchor(&cfg, &roster(&cfg), 2025, None, None).unwrap();
        assert_eq!(record, AnchorRecord::new(2025, "Ripa"));
    }

    #[test]
    fn configured_record_continued() {
        let cfg = config(Some((2024, "Kari")));
        let r = roster(&cfg);
        assert_eq!(
            resolve_anchor(&cfg, &r, 2025, None, None).unwrap(),
            AnchorRecord::new(2025, "Ripa")
        );
        assert_eq!(
            resolve_anchor(&cfg, &r, 2027, None, None).unwrap(),
            AnchorRecord::new(2027, "Pera")
        );
    }

    #[test]
    fn earlier_year_than_record_fails() {
        let cfg = config(Some((2025, "Kari")));
        assert!(resolve_anchor(&cfg, &roster(&cfg), 2024, None, None).is_err());
    }

    #[test]
    fn seeded_draw_is_reproducible() {
        let cfg = config(None);
        let r = roster(&cfg);
        let a = resolve_anchor(&cfg, &r, 2025, None, Some(11)).unwrap();
        let b = resolve_anchor(&cfg, &r, 2025, None, Some(11)).unwrap();
        assert_eq!(a, b);
        // Falls back to the configured seed.
        let c = resolve_anchor(&cfg, &r, 2025, None, None).unwrap();
        let d = resolve_anchor(&cfg, &r, 2025, None, Some(3)).unwrap();
        assert_eq!(c, d);
    }
}
