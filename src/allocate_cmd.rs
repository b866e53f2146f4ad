//! Allocate command: plan consecutive seasons and render them.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use rota_season::plan_seasons;

use crate::anchor_cmd::{current_year, resolve_anchor};
use crate::cli::{AllocateArgs, Format};
use crate::config::RotaConfig;
use crate::{convert, render};

/// Run the allocation pipeline.
pub fn run(args: AllocateArgs) -> Result<()> {
    let _cmd = info_span!("allocate").entered();
    if args.seasons == 0 {
        bail!("--seasons must be at least 1");
    }

    // 1. Load and validate configuration
    let config = RotaConfig::load(&args.config)?;
    let season_cfg = convert::build_season_config(&config)?;
    let roster = season_cfg.roster();
    let year = args.year.unwrap_or_else(current_year);

    // 2. Pick the first anchor holder
    let first = resolve_anchor(&config, roster, year, args.anchor.as_deref(), args.seed)?;
    info!(year, anchor = %first.name, seasons = args.seasons, "first anchor resolved");

    // 3. Allocate
    let seasons = plan_seasons(&season_cfg, &first, args.seasons)
        .with_context(|| format!("failed to allocate seasons from {year}"))?;

    // 4. Render
    let rendered = match args.format {
        Format::Markdown => render::markdown(&seasons)?,
        Format::Json => render::json(&seasons, roster)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{rendered}"),
    }

    // Shown at every verbosity; the next run continues from it.
    if let Some(last) = seasons.last() {
        let next = last.anchor_record().successor(roster)?;
        info!(year = next.year, name = %next.name, "next anchor record");
        eprint!("Next anchor record:\n{}", render::anchor_toml(&next)?);
    }
    Ok(())
}
