//! Per-game win/loss/draw counters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameKind, GameOutcome, GameResult, OutcomeSink};

/// Counters for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStat {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Fastest recorded finish in seconds.
    pub best_time: Option<u64>,
}

impl GameStat {
    /// Fold one outcome into the counters.
    pub fn apply(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        match outcome.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        // Only sudoku is timed, and a zero time is not a record.
        if let (GameKind::Sudoku, Some(secs @ 1..)) = (outcome.game, outcome.elapsed_secs) {
            self.best_time = Some(self.best_time.map_or(secs, |best| best.min(secs)));
        }
    }
}

/// Stats for every game kind.
///
/// Persisting the book is the host's job; it serializes with serde.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBook {
    stats: FxHashMap<GameKind, GameStat>,
}

impl StatsBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for `game`, zeroed if it has never been played.
    #[must_use]
    pub fn get(&self, game: GameKind) -> GameStat {
        self.stats.get(&game).cloned().unwrap_or_default()
    }

    /// Forget everything recorded for `game`.
    pub fn reset(&mut self, game: GameKind) {
        self.stats.remove(&game);
    }

    /// Stats for every game kind, in menu order.
    #[must_use]
    pub fn all(&self) -> Vec<(GameKind, GameStat)> {
        GameKind::ALL.iter().map(|&kind| (kind, self.get(kind))).collect()
    }
}

impl OutcomeSink for StatsBook {
    fn record(&mut self, outcome: &GameOutcome) {
        let stat = self.stats.entry(outcome.game).or_default();
        stat.apply(outcome);
        tracing::debug!(
            game = %outcome.game,
            result = ?outcome.result,
            played = stat.games_played,
            "recorded outcome"
        );
    }
}
