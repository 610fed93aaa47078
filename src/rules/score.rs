//! Score reporting.
//!
//! When a game ends the orchestrator emits one `+1` [`ScoreEvent`] per
//! winner to its [`ScoreSink`]. Persisting scores is up to the sink; the
//! engine never touches files.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A score change for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub player: PlayerId,
    pub delta: i64,
}

/// Receiver of score events.
pub trait ScoreSink: Send {
    fn record(&mut self, event: ScoreEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn record(&mut self, _event: ScoreEvent) {}
}

/// In-memory running totals.
///
/// Clones share the same totals, so a caller can keep one handle and give
/// another to the game.
///
/// ```
/// use tower_rules::core::PlayerId;
/// use tower_rules::rules::{Leaderboard, ScoreEvent, ScoreSink};
///
/// let board = Leaderboard::new();
/// let mut sink = board.clone();
/// sink.record(ScoreEvent { player: PlayerId::new(1), delta: 1 });
///
/// assert_eq!(board.score(PlayerId::new(1)), 1);
/// assert_eq!(board.score(PlayerId::new(0)), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    scores: Arc<Mutex<FxHashMap<PlayerId, i64>>>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current total for `player` (0 if never scored).
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        let scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        scores.get(&player).copied().unwrap_or(0)
    }

    /// All recorded totals, highest first; ties by player id.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, i64)> {
        let scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows: Vec<_> = scores.iter().map(|(&p, &s)| (p, s)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        rows
    }

    /// Reset every total to zero.
    pub fn reset(&self) {
        self.scores
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ScoreSink for Leaderboard {
    fn record(&mut self, event: ScoreEvent) {
        let mut scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        *scores.entry(event.player).or_insert(0) += event.delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_accumulates() {
        let board = Leaderboard::new();
        let mut sink = board.clone();

        sink.record(ScoreEvent { player: PlayerId::new(0), delta: 1 });
        sink.record(ScoreEvent { player: PlayerId::new(2), delta: 1 });
        sink.record(ScoreEvent { player: PlayerId::new(2), delta: 1 });

        assert_eq!(
            board.standings(),
            vec![(PlayerId::new(2), 2), (PlayerId::new(0), 1)]
        );

        board.reset();
        assert_eq!(board.score(PlayerId::new(2)), 0);
    }

    #[test]
    fn test_null_sink_is_silent() {
        let mut sink = NullScoreSink;
        sink.record(ScoreEvent { player: PlayerId::new(0), delta: 1 });
    }
}
