//! Artemis: move again, but not back to the tile just left.

use super::{AbilityOffer, AbilityResolution, GodCard, ResumeAt};
use crate::actions::{ActionExecutor, WorkerAction};
use crate::board::{Board, TileId};
use crate::core::{RegistryError, Worker};

pub(super) fn perform(board: &Board, worker: &mut Worker, from: TileId, to: TileId) -> AbilityOffer {
    let targets = board
        .exits(to)
        .iter()
        .copied()
        .filter(|&t| t != from && board.can_worker_travel(worker, t))
        .collect();

    AbilityOffer {
        card: GodCard::Artemis,
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
    let outcome = ActionExecutor::execute(board, worker, WorkerAction::Move { to: target })?;
    Ok(AbilityResolution {
        outcome,
        resume: ResumeAt::BuildPhase(target),
    })
}

pub(super) fn deactivate(
    offer: &AbilityOffer,
    board: &mut Board,
    worker: &mut Worker,
) -> Result<AbilityResolution, RegistryError> {
    let outcome = ActionExecutor::execute(board, worker, WorkerAction::DoNothing)?;
    Ok(AbilityResolution {
        outcome,
        resume: ResumeAt::BuildPhase(offer.to),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionOutcome;
    use crate::core::{PlayerId, Position, WorkerId, DEFAULT_LAYOUT};

    fn setup() -> (Board, Worker, TileId, TileId) {
        let mut board = Board::parse(DEFAULT_LAYOUT, 2).unwrap();
        let mut worker = Worker::new(WorkerId::new(0), PlayerId::new(0));
        let from = board.tile_at(Position::new(1, 1)).unwrap();
        let to = board.tile_at(Position::new(2, 2)).unwrap();

        board.add_worker(&mut worker, from).unwrap();
        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to }).unwrap();
        (board, worker, from, to)
    }

    #[test]
    fn test_offer_excludes_origin() {
        let (board, mut worker, from, to) = setup();
        let offer = GodCard::Artemis.perform_ability(&board, &mut worker, from, to);

        assert!(board.can_worker_travel(&worker, from));
        assert!(!offer.is_target(from));
        assert_eq!(offer.targets.len(), 7);
        assert!(offer.declinable);
    }

    #[test]
    fn test_activate_moves_again() {
        let (mut board, mut worker, from, to) = setup();
        let offer = GodCard::Artemis.perform_ability(&board, &mut worker, from, to);
        let second = board.tile_at(Position::new(3, 3)).unwrap();

        let resolution = offer.activate(&mut board, &mut worker, second).unwrap();

        assert_eq!(resolution.outcome, ActionOutcome::Moved { from: to, to: second });
        assert_eq!(resolution.resume, ResumeAt::BuildPhase(second));
        assert_eq!(board.tile_of(worker.id), Some(second));
    }

    #[test]
    fn test_activate_rejects_origin() {
        let (mut board, mut worker, from, to) = setup();
        let offer = GodCard::Artemis.perform_ability(&board, &mut worker, from, to);

        assert!(offer.activate(&mut board, &mut worker, from).is_err());
        assert_eq!(board.tile_of(worker.id), Some(to));
    }

    #[test]
    fn test_decline_builds_from_destination() {
        let (mut board, mut worker, from, to) = setup();
        let offer = GodCard::Artemis.perform_ability(&board, &mut worker, from, to);

        let resolution = offer.deactivate(&mut board, &mut worker).unwrap();
        assert_eq!(resolution.outcome, ActionOutcome::Nothing);
        assert_eq!(resolution.resume, ResumeAt::BuildPhase(to));
    }
}
