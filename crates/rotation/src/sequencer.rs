//! Cyclic walk over a roster.

use crate::error::RotationError;
use crate::roster::{Direction, Roster};

/// An endless walk around a [`Roster`] in one direction.
///
/// The walk is seeded at a named participant and yields the participants
/// after (or before) that name, wrapping at the roster boundaries. A fresh
/// sequencer restarts the walk; one instance is never shared between fills.
///
/// # Example
///
/// ```
/// use rota_rotation::{Direction, Roster, Sequencer};
///
/// let roster = Roster::new(["A", "B", "C"]).unwrap();
/// let back: Vec<&str> = Sequencer::new(&roster, "A", Direction::Backward)
///     .unwrap()
///     .take(4)
///     .collect();
/// assert_eq!(back, ["C", "B", "A", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct Sequencer<'a> {
    roster: &'a Roster,
    position: usize,
    direction: Direction,
}

impl<'a> Sequencer<'a> {
    /// Creates a sequencer positioned on `start`.
    ///
    /// The first call to [`Iterator::next`] returns the neighbour of `start`
    /// in `direction`, never `start` itself (unless the roster has one name).
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::UnknownParticipant`] if `start` is not in the
    /// roster.
    pub fn new(roster: &'a Roster, start: &str, direction: Direction) -> Result<Self, RotationError> {
        let position = roster.index_of(start)?;
        Ok(Self {
            roster,
            position,
            direction,
        })
    }

    /// Shorthand for a [`Direction::Forward`] sequencer.
    pub fn forward(roster: &'a Roster, start: &str) -> Result<Self, RotationError> {
        Self::new(roster, start, Direction::Forward)
    }

    /// Shorthand for a [`Direction::Backward`] sequencer.
    pub fn backward(roster: &'a Roster, start: &str) -> Result<Self, RotationError> {
        Self::new(roster, start, Direction::Backward)
    }

    /// Returns the direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the roster index of the most recently yielded name (or the
    /// start, before the first step).
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Sequencer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.position = self.roster.offset(self.position, 1, self.direction);
        Some(self.roster.name_at(self.position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap()
    }

    #[test]
    fn forward_starts_after_seed() {
        let r = roster();
        let names: Vec<&str> = Sequencer::forward(&r, "Ripa").unwrap().take(6).collect();
        assert_eq!(names, ["Timppa", "Pera", "Tytti", "Kari", "Ripa", "Timppa"]);
    }

    #[test]
    fn backward_starts_before_seed() {
        let r = roster();
        let names: Vec<&str> = Sequencer::backward(&r, "Kari").unwrap().take(6).collect();
        assert_eq!(names, ["Tytti", "Pera", "Timppa", "Ripa", "Kari", "Tytti"]);
    }

    #[test]
    fn unknown_seed_fails() {
        let r = roster();
        assert_eq!(
            Sequencer::forward(&r, "Matti").unwrap_err(),
            RotationError::UnknownParticipant {
                name: "Matti".into()
            }
        );
    }

    #[test]
    fn position_tracks_last_yield() {
        let r = roster();
        let mut seq = Sequencer::new(&r, "Pera", Direction::Forward).unwrap();
        assert_eq!(seq.position(), 4);
        assert_eq!(seq.direction(), Direction::Forward);
        assert_eq!(seq.next(), Some("Tytti"));
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn full_cycle_visits_everyone_once() {
        let r = roster();
        for start in r.names() {
            for direction in [Direction::Forward, Direction::Backward] {
                let mut cycle: Vec<&str> = Sequencer::new(&r, start, direction)
                    .unwrap()
                    .take(r.len())
                    .collect();
                assert_eq!(cycle.last().copied(), Some(start.as_str()));
                cycle.sort_unstable();
                let mut expected: Vec<&str> = r.names().iter().map(String::as_str).collect();
                expected.sort_unstable();
                assert_eq!(cycle, expected);
            }
        }
    }

    #[test]
    fn single_member_repeats() {
        let r = Roster::new(["Solo"]).unwrap();
        let names: Vec<&str> = Sequencer::backward(&r, "Solo").unwrap().take(3).collect();
        assert_eq!(names, ["Solo", "Solo", "Solo"]);
    }
}
