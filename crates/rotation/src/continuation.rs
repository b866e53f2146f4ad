//! Cross-season continuation of the anchor slot.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RotationError;
use crate::roster::Roster;

/// Who holds the anchor week in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// Season year.
    pub year: i32,
    /// Anchor holder for that season.
    pub name: String,
}

impl AnchorRecord {
    /// Creates a record.
    pub fn new(year: i32, name: impl Into<String>) -> Self {
        Self {
            year,
            name: name.into(),
        }
    }

    /// Returns the record for the following year: the next participant in
    /// roster order holds the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::UnknownParticipant`] if this record's name is
    /// no longer in `roster`.
    pub fn successor(&self, roster: &Roster) -> Result<Self, RotationError> {
        let name = roster.successor(&self.name, 1)?;
        Ok(Self::new(self.year + 1, name))
    }
}

/// Chooses the anchor holder for `year`.
///
/// With a previous record, the holder moves one roster position forward per
/// elapsed year, so `previous.year + 1` yields the participant immediately
/// after the previous holder. Without one, a participant is drawn uniformly
/// from `rng`; the caller must keep the returned record so later seasons
/// continue deterministically.
///
/// # Errors
///
/// Returns [`RotationError::NonIncreasingYear`] if `year` is not after the
/// previous record's year and [`RotationError::UnknownParticipant`] if the
/// previous holder is not in `roster`.
pub fn next_anchor<R: Rng + ?Sized>(
    previous: Option<&AnchorRecord>,
    year: i32,
    roster: &Roster,
    rng: &mut R,
) -> Result<AnchorRecord, RotationError> {
    let Some(previous) = previous else {
        let index = rng.random_range(0..roster.len());
        let name = roster.name_at(index);
        warn!(year, name, "no previous anchor record, drew anchor holder at random");
        return Ok(AnchorRecord::new(year, name));
    };

    if year <= previous.year {
        return Err(RotationError::NonIncreasingYear {
            previous: previous.year,
            requested: year,
        });
    }
    // u32 always fits a usize on the targets chrono supports.
    let steps = usize::try_from(year.abs_diff(previous.year)).unwrap_or(usize::MAX);
    let name = roster.successor(&previous.name, steps)?;
    debug!(
        from_year = previous.year,
        from = %previous.name,
        year,
        name,
        "continued anchor rotation"
    );
    Ok(AnchorRecord::new(year, name))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn roster() -> Roster {
        Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap()
    }

    #[test]
    fn continues_to_next_in_roster() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(2025, "Kari");
        let next = next_anchor(Some(&prev), 2026, &r, &mut rng).unwrap();
        assert_eq!(next, AnchorRecord::new(2026, "Ripa"));
    }

    #[test]
    fn wraps_at_roster_end() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(2025, "Pera");
        let next = next_anchor(Some(&prev), 2026, &r, &mut rng).unwrap();
        assert_eq!(next.name, "Tytti");
    }

    #[test]
    fn skips_elapsed_years() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(2018, "Tytti");
        // Seven years later: seven steps forward, i.e. two around a roster of five.
        let next = next_anchor(Some(&prev), 2025, &r, &mut rng).unwrap();
        assert_eq!(next, AnchorRecord::new(2025, "Ripa"));
    }

    #[test]
    fn widest_year_gap_does_not_overflow() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(i32::MIN, "Ripa");
        // u32::MAX elapsed years is a multiple of five.
        let next = next_anchor(Some(&prev), i32::MAX, &r, &mut rng).unwrap();
        assert_eq!(next, AnchorRecord::new(i32::MAX, "Ripa"));
    }

    #[test]
    fn rejects_same_or_earlier_year() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(2025, "Kari");
        assert_eq!(
            next_anchor(Some(&prev), 2025, &r, &mut rng).unwrap_err(),
            RotationError::NonIncreasingYear {
                previous: 2025,
                requested: 2025
            }
        );
        assert!(next_anchor(Some(&prev), 2024, &r, &mut rng).is_err());
    }

    #[test]
    fn rejects_holder_missing_from_roster() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(0);
        let prev = AnchorRecord::new(2025, "Matti");
        assert!(matches!(
            next_anchor(Some(&prev), 2026, &r, &mut rng),
            Err(RotationError::UnknownParticipant { .. })
        ));
    }

    #[test]
    fn random_draw_is_reproducible_with_seed() {
        let r = roster();
        let a = next_anchor(None, 2025, &r, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = next_anchor(None, 2025, &r, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year, 2025);
        assert!(r.contains(&a.name));
    }

    #[test]
    fn random_draw_reaches_every_participant() {
        let r = roster();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(next_anchor(None, 2025, &r, &mut rng).unwrap().name);
        }
        assert_eq!(seen.len(), r.len());
    }

    #[test]
    fn successor_matches_next_anchor() {
        let r = roster();
        let prev = AnchorRecord::new(2030, "Timppa");
        let via_record = prev.successor(&r).unwrap();
        let via_fn = next_anchor(Some(&prev), 2031, &r, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(via_record, via_fn);
        assert_eq!(via_record.name, "Pera");
    }
}
