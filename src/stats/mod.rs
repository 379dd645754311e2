//! In-memory stat ledger fed by finished-game outcomes.

mod book;

pub use book::{GameStat, StatsBook};
