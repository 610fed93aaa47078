//! Applying worker actions to the board.

use tracing::debug;

use super::{ActionOutcome, WorkerAction};
use crate::board::{Board, TileId};
use crate::capability::Capability;
use crate::core::{RegistryError, Worker};

/// Applies [`WorkerAction`]s.
///
/// A failed action leaves the board and the worker untouched.
pub struct ActionExecutor;

impl ActionExecutor {
    /// Execute one action for `worker`.
    pub fn execute(
        board: &mut Board,
        worker: &mut Worker,
        action: WorkerAction,
    ) -> Result<ActionOutcome, RegistryError> {
        match action {
            WorkerAction::Move { to } => Self::execute_move(board, worker, to),
            WorkerAction::Build { at } => Self::execute_build(board, worker, at),
            WorkerAction::DoNothing => {
                debug!(worker = %worker.id, "no-op action");
                Ok(ActionOutcome::Nothing)
            }
        }
    }

    fn execute_move(
        board: &mut Board,
        worker: &mut Worker,
        to: TileId,
    ) -> Result<ActionOutcome, RegistryError> {
        let dest_tier = board.tier(to).ok_or(RegistryError::NoSuchTile(to))?;
        let from = board.move_worker(worker.id, to)?;
        let from_level = board.tier(from).map(|t| t.level());

        dest_tier.apply_to(worker.capabilities_mut());

        // Stepping sideways between two top towers is not a climb.
        if from_level == Some(3) && dest_tier.level() == 3 {
            worker.capabilities_mut().remove(Capability::Win);
        }

        debug!(worker = %worker.id, %from, %to, tier = %dest_tier, "moved");
        Ok(ActionOutcome::Moved { from, to })
    }

    fn execute_build(
        board: &mut Board,
        worker: &Worker,
        at: TileId,
    ) -> Result<ActionOutcome, RegistryError> {
        let tier = board.build_up(at).ok_or(RegistryError::NoSuchTile(at))?;
        debug!(worker = %worker.id, %at, %tier, "built");
        Ok(ActionOutcome::Built { at, tier })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TowerTier;
    use crate::core::{PlayerId, WorkerId, DEFAULT_LAYOUT};

    fn setup() -> (Board, Worker) {
        let mut board = Board::parse(DEFAULT_LAYOUT, 2).unwrap();
        let mut worker = Worker::new(WorkerId::new(0), PlayerId::new(0));
        board.add_worker(&mut worker, TileId::new(0)).unwrap();
        (board, worker)
    }

    fn raise(board: &mut Board, tile: TileId, times: usize) {
        for _ in 0..times {
            board.build_up(tile);
        }
    }

    #[test]
    fn test_move_updates_occupancy() {
        let (mut board, mut worker) = setup();
        let to = TileId::new(1);
        assert!(board.can_worker_travel(&worker, to));

        let outcome =
            ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to }).unwrap();

        assert_eq!(outcome, ActionOutcome::Moved { from: TileId::new(0), to });
        assert_eq!(board.tile_of(worker.id), Some(to));
        assert!(!board.is_occupied(TileId::new(0)));
    }

    #[test]
    fn test_move_onto_tower2_rederives_capabilities() {
        let (mut board, mut worker) = setup();
        raise(&mut board, TileId::new(1), 1);
        raise(&mut board, TileId::new(2), 2);

        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to: TileId::new(1) })
            .unwrap();
        assert!(worker.can(Capability::MoveToTower2));
        assert!(!worker.can(Capability::MoveToTower3));

        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to: TileId::new(2) })
            .unwrap();
        assert!(worker.can(Capability::MoveToTower2));
        assert!(worker.can(Capability::MoveToTower3));

        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to: TileId::new(3) })
            .unwrap();
        assert!(!worker.can(Capability::MoveToTower2));
        assert!(!worker.can(Capability::MoveToTower3));
        assert!(worker.can(Capability::Build));
    }

    #[test]
    fn test_climbing_to_tower3_grants_win() {
        let (mut board, mut worker) = setup();
        raise(&mut board, TileId::new(0), 2);
        worker.capabilities_mut().add(Capability::MoveToTower3);
        raise(&mut board, TileId::new(1), 3);

        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to: TileId::new(1) })
            .unwrap();
        assert!(worker.can(Capability::Win));
    }

    #[test]
    fn test_lateral_tower3_move_strips_win() {
        let (mut board, mut worker) = setup();
        raise(&mut board, TileId::new(0), 3);
        raise(&mut board, TileId::new(1), 3);
        worker.capabilities_mut().add_all(&[Capability::MoveToTower3, Capability::Win]);

        ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Move { to: TileId::new(1) })
            .unwrap();
        assert!(!worker.can(Capability::Win));
        assert!(worker.can(Capability::MoveToTower3));
    }

    #[test]
    fn test_move_onto_occupied_fails_cleanly() {
        let (mut board, mut worker) = setup();
        let mut other = Worker::new(WorkerId::new(1), PlayerId::new(1));
        board.add_worker(&mut other, TileId::new(1)).unwrap();
        let before = worker.capabilities().clone();

        let err = ActionExecutor::execute(
            &mut board,
            &mut worker,
            WorkerAction::Move { to: TileId::new(1) },
        )
        .unwrap_err();

        assert_eq!(
            err,
            RegistryError::TileOccupied { tile: TileId::new(1), occupant: other.id }
        );
        assert_eq!(board.tile_of(worker.id), Some(TileId::new(0)));
        assert_eq!(worker.capabilities(), &before);
    }

    #[test]
    fn test_build_sequence_to_dome() {
        let (mut board, mut worker) = setup();
        let at = TileId::new(1);
        let mut tiers = Vec::new();
        for _ in 0..4 {
            match ActionExecutor::execute(&mut board, &mut worker, WorkerAction::Build { at }) {
                Ok(ActionOutcome::Built { tier, .. }) => tiers.push(tier),
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        assert_eq!(
            tiers,
            vec![TowerTier::Tower1, TowerTier::Tower2, TowerTier::Tower3, TowerTier::Dome]
        );
        assert!(!board.can_worker_build(&worker, at));
    }

    #[test]
    fn test_do_nothing() {
        let (mut board, mut worker) = setup();
        let before = worker.clone();

        let outcome =
            ActionExecutor::execute(&mut board, &mut worker, WorkerAction::DoNothing).unwrap();

        assert_eq!(outcome, ActionOutcome::Nothing);
        assert_eq!(worker, before);
        assert_eq!(board.tile_of(worker.id), Some(TileId::new(0)));
    }
}
