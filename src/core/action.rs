//! Action records for the game history.
//!
//! Every executed step of a turn is appended to the history as an
//! [`ActionRecord`]: who acted, what they did, and when. The history is a
//! log for the presentation layer; it is never replayed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::worker::WorkerId;
use crate::board::{TileId, TowerTier};
use crate::gods::GodCard;

/// One executed step of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// A worker was committed for this turn.
    SelectWorker(WorkerId),

    Move {
        worker: WorkerId,
        from: TileId,
        to: TileId,
    },

    /// `tier` is the tile's tier after the build.
    Build {
        worker: WorkerId,
        at: TileId,
        tier: TowerTier,
    },

    /// A god ability was used on `target`.
    ActivateAbility {
        card: GodCard,
        worker: WorkerId,
        target: TileId,
    },

    /// A god ability was declined (resolved as a no-op action).
    DeclineAbility { card: GodCard, worker: WorkerId },
}

impl TurnAction {
    /// The worker this action concerns.
    #[must_use]
    pub fn worker(&self) -> WorkerId {
        match self {
            TurnAction::SelectWorker(worker)
            | TurnAction::Move { worker, .. }
            | TurnAction::Build { worker, .. }
            | TurnAction::ActivateAbility { worker, .. }
            | TurnAction::DeclineAbility { worker, .. } => *worker,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn number when the action was taken (first turn is 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_worker() {
        let mv = TurnAction::Move {
            worker: WorkerId::new(3),
            from: TileId::new(0),
            to: TileId::new(1),
        };
        assert_eq!(mv.worker(), WorkerId::new(3));

        let decline = TurnAction::DeclineAbility {
            card: GodCard::Artemis,
            worker: WorkerId::new(1),
        };
        assert_eq!(decline.worker(), WorkerId::new(1));
    }

    #[test]
    fn test_action_record() {
        let action = TurnAction::Build {
            worker: WorkerId::new(0),
            at: TileId::new(6),
            tier: TowerTier::Tower1,
        };
        let record = ActionRecord::new(PlayerId::new(1), action.clone(), 3, 2);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 2);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(0),
            TurnAction::ActivateAbility {
                card: GodCard::Zeus,
                worker: WorkerId::new(0),
                target: TileId::new(12),
            },
            1,
            4,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
