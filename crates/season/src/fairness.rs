//! Equal-share check over a finished allocation.

use std::collections::HashMap;

use crate::allocation::SeasonAllocation;
use crate::config::SeasonConfig;
use crate::error::SeasonError;

/// Verifies that every roster participant holds exactly
/// [`SeasonConfig::weeks_per_name`] weeks. Fixed-purpose weeks are not
/// counted.
///
/// # Errors
///
/// Returns [`SeasonError::FairnessViolation`] for the first participant
/// (in roster order) whose count is off, or for any name in the allocation
/// that is not in the roster (expected count 0).
pub fn check_fairness(
    allocation: &SeasonAllocation,
    config: &SeasonConfig,
) -> Result<(), SeasonError> {
    let expected = config.weeks_per_name();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for (_, name) in allocation.participant_weeks() {
        *counts.entry(name).or_default() += 1;
    }

    for name in config.roster().names() {
        let actual = counts.remove(name.as_str()).unwrap_or(0);
        if actual != expected {
            return Err(SeasonError::FairnessViolation {
                name: name.clone(),
                expected,
                actual,
            });
        }
    }

    // Anything left over is not a roster member.
    if let Some((name, actual)) = counts.into_iter().min() {
        return Err(SeasonError::FairnessViolation {
            name: name.to_string(),
            expected: 0,
            actual,
        });
    }
    Ok(())
}
