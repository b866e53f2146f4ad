//! The ordered participant roster.

use std::collections::HashSet;

use crate::error::RotationError;

/// Direction of travel around the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Roster order: each step moves to the next name.
    #[default]
    Forward,
    /// Reverse roster order: each step moves to the previous name.
    Backward,
}

/// An ordered list of distinct participant names.
///
/// Insertion order is rotation order. A roster always holds at least one
/// name and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster from names in rotation order.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyRoster`] for no names,
    /// [`RotationError::EmptyName`] for a blank name and
    /// [`RotationError::DuplicateParticipant`] for a repeated one.
    pub fn new<I, S>(names: I) -> Result<Self, RotationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(RotationError::EmptyRoster);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(RotationError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(RotationError::DuplicateParticipant { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Returns the number of participants (always >= 1).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in rotation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name at `index`, wrapping around the roster.
    pub fn name_at(&self, index: usize) -> &str {
        &self.names[index % self.names.len()]
    }

    /// Returns `true` if `name` is in the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the position of `name` in rotation order.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::UnknownParticipant`] if `name` is absent.
    pub fn index_of(&self, name: &str) -> Result<usize, RotationError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| RotationError::UnknownParticipant {
                name: name.to_string(),
            })
    }

    /// Returns the index `steps` positions away from `index`, cycling at the
    /// roster boundaries.
    pub fn offset(&self, index: usize, steps: usize, direction: Direction) -> usize {
        let len = self.names.len();
        let steps = steps % len;
        match direction {
            Direction::Forward => (index + steps) % len,
            Direction::Backward => (index + len - steps) % len,
        }
    }

    /// Returns the name `steps` positions after `name` in roster order.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::UnknownParticipant`] if `name` is absent.
    pub fn successor(&self, name: &str, steps: usize) -> Result<&str, RotationError> {
        let start = self.index_of(name)?;
        Ok(self.name_at(self.offset(start, steps, Direction::Forward)))
    }
}
