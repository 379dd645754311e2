//! Shared building blocks: coordinates, RNG, outcomes, configuration, errors.
//!
//! Nothing here knows about a particular game. The engines depend on `core`
//! and never on each other.

pub mod coord;
pub mod rng;
pub mod config;
pub mod outcome;
pub mod error;
pub mod snapshot;

pub use coord::Coord;
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, PacingConfig, SudokuConfig};
pub use outcome::{report_transition, GameKind, GameOutcome, GameResult, OutcomeSink, Reportable};
pub use error::{CoordError, NotationError, SnapshotError};
