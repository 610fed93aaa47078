//! Zeus: the build step may target the worker's own tile.
//!
//! The offer replaces the ordinary build. While it is pending the worker
//! holds `BUILD_BELOW_WORKER_ON_TOWER`; the token is revoked when the
//! ability resolves. Building under oneself never grants `WIN`.

use super::{AbilityOffer, AbilityResolution, GodCard, ResumeAt};
use crate::actions::{ActionExecutor, WorkerAction};
use crate::board::{Board, TileId};
use crate::capability::Capability;
use crate::core::{RegistryError, Worker};

pub(super) fn perform(board: &Board, worker: &mut Worker, from: TileId, to: TileId) -> AbilityOffer {
    let caps = worker.capabilities_mut();
    caps.add(Capability::BuildBelowWorkerOnTower);
    if let Some(tier) = board.tier(from) {
        caps.add_all(tier.grants());
    }
    // standing still on a top tower is not a climb
    caps.remove(Capability::Win);

    let targets: Vec<TileId> = board
        .exits(from)
        .iter()
        .copied()
        .chain(std::iter::once(from))
        .filter(|&t| board.can_worker_build(worker, t))
        .collect();

    // Zeus stands in for the build step; opting out is only possible
    // when there is nothing to build on.
    let declinable = targets.is_empty();

    AbilityOffer {
        card: GodCard::Zeus,
        worker: worker.id,
        from,
        to,
        targets,
        declinable,
    }
}

pub(super) fn activate(
    offer: &AbilityOffer,
    board: &mut Board,
    worker: &mut Worker,
    target: TileId,
) -> Result<AbilityResolution, RegistryError> {
    let outcome = ActionExecutor::execute(board, worker, WorkerAction::Build { at: target })?;

    if let Some(tier) = board.tier(offer.from) {
        tier.apply_to(worker.capabilities_mut());
    }
    worker
        .capabilities_mut()
        .remove_all(&[Capability::Win, Capability::BuildBelowWorkerOnTower]);

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
    worker
        .capabilities_mut()
        .remove_all(&[Capability::Win, Capability::BuildBelowWorkerOnTower]);
    Ok(AbilityResolution {
        outcome,
        resume: ResumeAt::NextTurn,
    })
}
