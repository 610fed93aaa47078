//! Pending ability offers and their resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{artemis, demeter, zeus, GodCard, ResumeAt};
use crate::actions::ActionOutcome;
use crate::board::{Board, TileId};
use crate::core::{GameError, RuleViolation, Worker, WorkerId};

/// An ability waiting for the player's decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOffer {
    pub card: GodCard,
    pub worker: WorkerId,
    pub from: TileId,
    pub to: TileId,
    /// Tiles the ability may be used on. May be empty.
    pub targets: Vec<TileId>,
    /// Whether the player may opt out.
    pub declinable: bool,
}

/// Result of activating or declining an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityResolution {
    pub outcome: ActionOutcome,
    pub resume: ResumeAt,
}

impl AbilityOffer {
    #[must_use]
    pub fn is_target(&self, tile: TileId) -> bool {
        self.targets.contains(&tile)
    }

    /// Use the ability on `target`.
    ///
    /// Rejected targets leave everything untouched.
    pub fn activate(
        &self,
        board: &mut Board,
        worker: &mut Worker,
        target: TileId,
    ) -> Result<AbilityResolution, GameError> {
        if worker.id != self.worker {
            return Err(RuleViolation::UnknownWorker(worker.id).into());
        }
        if !self.is_target(target) {
            return Err(RuleViolation::NotAnAbilityTarget(target).into());
        }

        debug!(card = %self.card, worker = %self.worker, %target, "activating ability");
        let resolution = match self.card {
            GodCard::Artemis => artemis::activate(self, board, worker, target)?,
            GodCard::Demeter => demeter::activate(self, board, worker, target)?,
            GodCard::Zeus => zeus::activate(self, board, worker, target)?,
        };
        Ok(resolution)
    }

    /// Opt out. Runs a no-op action and resumes where activation would.
    pub fn deactivate(
        &self,
        board: &mut Board,
        worker: &mut Worker,
    ) -> Result<AbilityResolution, GameError> {
        if worker.id != self.worker {
            return Err(RuleViolation::UnknownWorker(worker.id).into());
        }
        if !self.declinable {
            return Err(RuleViolation::AbilityNotDeclinable(self.card).into());
        }

        debug!(card = %self.card, worker = %self.worker, "declining ability");
        let resolution = match self.card {
            GodCard::Artemis => artemis::deactivate(self, board, worker)?,
            GodCard::Demeter => demeter::deactivate(self, board, worker)?,
            GodCard::Zeus => zeus::deactivate(self, board, worker)?,
        };
        Ok(resolution)
    }
}
