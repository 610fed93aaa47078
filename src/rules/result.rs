//! Game results and the events reported by turn operations.

use serde::{Deserialize, Serialize};

use crate::board::{TileId, TowerTier};
use crate::core::{PlayerId, WorkerId};
use crate::gods::{AbilityOffer, GodCard};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every remaining player was eliminated in the same pass.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Why a player left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationReason {
    /// None of the player's workers had a legal destination.
    Immobile,
    /// The player selected a worker that could not move.
    TouchRule,
}

/// Something that happened while processing a turn operation.
///
/// Operations return these in order; the presentation layer replays them to
/// update its view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    WorkerSelected {
        player: PlayerId,
        worker: WorkerId,
    },
    Moved {
        worker: WorkerId,
        from: TileId,
        to: TileId,
    },
    Built {
        worker: WorkerId,
        at: TileId,
        tier: TowerTier,
    },
    /// A god ability is waiting for activation or decline.
    AbilityOffered(AbilityOffer),
    AbilityResolved {
        player: PlayerId,
        card: GodCard,
        activated: bool,
    },
    PlayerEliminated {
        player: PlayerId,
        reason: EliminationReason,
    },
    GameOver(GameResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = TurnEvent::PlayerEliminated {
            player: PlayerId::new(2),
            reason: EliminationReason::TouchRule,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: TurnEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
