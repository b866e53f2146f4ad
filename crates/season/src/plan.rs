//! Consecutive seasons with the anchor carried from one to the next.

use rayon::prelude::*;
use rota_rotation::AnchorRecord;
use tracing::info;

use crate::allocate::allocate_season;
use crate::allocation::SeasonAllocation;
use crate::config::SeasonConfig;
use crate::error::SeasonError;

/// Allocates `count` consecutive seasons starting with `first`.
///
/// The anchor chain is computed up front (each season's holder is the
/// roster successor of the previous one); the seasons themselves are
/// independent and allocated in parallel. Results are in year order.
///
/// # Errors
///
/// Returns the first error from [`SeasonConfig::validate`], the anchor
/// chain, or any season's [`allocate_season`].
pub fn plan_seasons(
    config: &SeasonConfig,
    first: &AnchorRecord,
    count: usize,
) -> Result<Vec<SeasonAllocation>, SeasonError> {
    config.validate()?;

    let mut anchors = Vec::with_capacity(count);
    let mut record = first.clone();
    for i in 0..count {
        if i > 0 {
            record = record.successor(config.roster())?;
        }
        anchors.push(record.clone());
    }
    info!(first_year = first.year, count, "planning seasons");

    anchors
        .par_iter()
        .map(|anchor| allocate_season(anchor.year, &anchor.name, config))
        .collect()
}
