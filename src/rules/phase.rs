//! Turn phases.
//!
//! ```text
//! SelectingWorker -> Moving -> Building -> (next player)
//!                       \          \
//!                        GodAbility  GodAbility
//! ```
//!
//! Any phase may jump to `GameOver`, which is terminal.

use serde::{Deserialize, Serialize};

use super::result::GameResult;
use crate::board::TileId;
use crate::core::WorkerId;
use crate::gods::AbilityOffer;

/// Where the current player is within their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    SelectingWorker,
    /// The selected worker must move.
    Moving { worker: WorkerId },
    /// The worker stands on `from` and must build.
    Building { worker: WorkerId, from: TileId },
    /// A god ability awaits activation or decline.
    GodAbility(AbilityOffer),
    GameOver(GameResult),
}

impl TurnPhase {
    /// Human-readable name, used in rejection messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TurnPhase::SelectingWorker => "selecting a worker",
            TurnPhase::Moving { .. } => "moving",
            TurnPhase::Building { .. } => "building",
            TurnPhase::GodAbility(_) => "resolving a god ability",
            TurnPhase::GameOver(_) => "the game is over",
        }
    }

    /// The worker acting this turn, once selected.
    #[must_use]
    pub fn worker(&self) -> Option<WorkerId> {
        match self {
            TurnPhase::Moving { worker } | TurnPhase::Building { worker, .. } => Some(*worker),
            TurnPhase::GodAbility(offer) => Some(offer.worker),
            TurnPhase::SelectingWorker | TurnPhase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }
}
