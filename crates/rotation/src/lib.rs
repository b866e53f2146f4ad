//! Roster rotation and cross-season anchor continuation.
//!
//! A [`Roster`] fixes the rotation order. A [`Sequencer`] walks it forward
//! or backward from a named participant, and [`next_anchor`] decides who
//! holds the anchor week next season.
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rota_rotation::{AnchorRecord, Roster, Sequencer, next_anchor};
//!
//! let roster = Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap();
//!
//! let after_kari: Vec<&str> = Sequencer::forward(&roster, "Kari").unwrap().take(2).collect();
//! assert_eq!(after_kari, ["Ripa", "Timppa"]);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let prev = AnchorRecord::new(2025, "Kari");
//! let next = next_anchor(Some(&prev), 2026, &roster, &mut rng).unwrap();
//! assert_eq!(next.name, "Ripa");
//! ```

pub mod continuation;
pub mod error;
pub mod roster;
pub mod sequencer;

pub use continuation::{AnchorRecord, next_anchor};
pub use error::RotationError;
pub use roster::{Direction, Roster};
pub use sequencer::Sequencer;
