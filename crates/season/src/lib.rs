//! # rota-season
//!
//! Allocates the weeks of a rotation season among a roster.
//!
//! The anchor holiday's week (midsummer by default) goes to the season's
//! anchor holder; the weeks before it are handed out walking the roster
//! backward, the weeks after it walking forward. Fixed-purpose weeks are
//! carved out of the walk and moved one week earlier when they clash with
//! Easter. Every allocation is checked to give each participant the same
//! number of weeks.
//!
//! # Quick start
//!
//! ```
//! use rota_rotation::Roster;
//! use rota_season::{SeasonConfig, allocate_season};
//!
//! let roster = Roster::new(["Tytti", "Kari", "Ripa", "Timppa", "Pera"]).unwrap();
//! let config = SeasonConfig::new(roster, 21, 35)
//!     .with_fixed_week(20, "TALKOOT")
//!     .with_fixed_week(36, "TALKOOT")
//!     .with_fixed_week(42, "TALVIKUNTOON");
//!
//! let season = allocate_season(2025, "Timppa", &config).unwrap();
//! assert_eq!(season.label(season.anchor_week()), Some("Timppa"));
//! assert_eq!(season.weeks_of("Kari").count(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! allocate_season()
//!   ├─ SeasonConfig::validate()      (config.rs)
//!   ├─ place_fixed_weeks()           Easter clash → week − 1
//!   ├─ AnchorHoliday::week()         (rota-calendar)
//!   ├─ backward / forward Sequencer  (rota-rotation)
//!   └─ check_fairness()              (fairness.rs)
//! ```

pub mod allocate;
pub mod allocation;
pub mod config;
pub mod error;
pub mod fairness;
pub mod plan;

pub use allocate::allocate_season;
pub use allocation::{Assignment, FixedPlacement, SeasonAllocation};
pub use config::{FixedWeek, SeasonConfig};
pub use error::SeasonError;
pub use fairness::check_fairness;
pub use plan::plan_seasons;
