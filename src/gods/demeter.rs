//! Demeter: build a second time, on a different tile.

use super::{AbilityOffer, AbilityResolution, GodCard, ResumeAt};
use crate::actions::{ActionExecutor, WorkerAction};
use crate::board::{Board, TileId};
use crate::core::{RegistryError, Worker};

/// `from` is the worker's tile, `to` the tile built on first.
pub(super) fn perform(board: &Board, worker: &mut Worker, from: TileId, to: TileId) -> AbilityOffer {
    let targets = board
        .exits(from)
        .iter()
        .copied()
        .filter(|&t| t != to && board.can_worker_build(worker, t))
        .collect();

    AbilityOffer {
        card: GodCard::Demeter,
        worker: worker.id,
        from,
        to,
        targets,
        declinable: true,
    }
}

pub(super) fn activate(
    _offer: &AbilityOffer,
    board: &mut Board,
    worker: &mut Worker,
    target: TileId,
) -> Result<AbilityResolution, RegistryError> {
    let outcome = ActionExecutor::execute(board, worker, WorkerAction::Build { at: target })?;
    Ok(AbilityResolution {
        outcome,
        resume: ResumeAt::NextTurn,
    })
}

pub(super) fn deactivate(
    _offer: &AbilityOffer,
    board: &mut Board,
    worker: &mut Worker,
) -> Result<AbilityResolution, RegistryError> {
    let outcome = ActionExecutor::execute(board, worker, WorkerAction::DoNothing)?;
    Ok(AbilityResolution {
        outcome,
        resume: ResumeAt::NextTurn,
    })
}
