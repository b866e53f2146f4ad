//! Error types for the rota-rotation crate.

/// Error type for all fallible operations in the rota-rotation crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationError {
    /// Returned when a roster is built from no names.
    #[error("roster must contain at least one participant")]
    EmptyRoster,

    /// Returned when a roster name is empty or only whitespace.
    #[error("participant names must not be empty")]
    EmptyName,

    /// Returned when the same name appears twice in a roster.
    #[error("duplicate participant in roster: {name:?}")]
    DuplicateParticipant {
        /// The repeated name.
        name: String,
    },

    /// Returned when a seed or anchor name is not in the roster.
    ///
    /// Usually means the roster changed between seasons.
    #[error("unknown participant: {name:?} is not in the roster")]
    UnknownParticipant {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when continuing from a record that is not older than the
    /// requested year.
    #[error("cannot continue from anchor record of {previous} into year {requested}")]
    NonIncreasingYear {
        /// Year of the previous anchor record.
        previous: i32,
        /// Year that was requested.
        requested: i32,
    },
}
