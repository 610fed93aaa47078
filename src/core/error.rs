//! Error taxonomy.
//!
//! - [`ConfigError`]: bad setup input, surfaced before any game exists.
//! - [`RegistryError`]: a broken occupancy invariant (double placement,
//!   moving onto an occupied tile).
//! - [`RuleViolation`]: a call the turn state machine cannot accept
//!   (wrong phase, illegal target). Nothing is mutated when one is returned.
//!
//! Game-rule outcomes such as elimination or victory are never errors; they
//! are reported as [`TurnEvent`](crate::rules::TurnEvent)s.

use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::player::PlayerId;
use super::position::Position;
use super::worker::WorkerId;
use crate::board::TileId;
use crate::gods::GodCard;

/// Setup errors. Fatal: no game state is created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count {0} is outside {min}..={max}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCount(usize),

    #[error("each player needs at least one worker")]
    NoWorkers,

    #[error("board layout has no traversable tiles")]
    EmptyLayout,

    #[error("board has {traversable} traversable tiles but needs more than {required}")]
    TooFewTiles { traversable: usize, required: usize },

    #[error("{workers} workers cannot spawn on {traversable} tiles")]
    NotEnoughSpawnTiles { workers: usize, traversable: usize },

    #[error("god assignment has {given} entries for {players} players")]
    GodAssignmentLength { given: usize, players: usize },

    #[error("placement has {given} positions for {workers} workers")]
    PlacementLength { given: usize, workers: usize },

    #[error("spawn position {0} is not a traversable tile")]
    SpawnOffBoard(Position),

    #[error("preset tower at {0} is not a traversable tile")]
    TowerOffBoard(Position),

    #[error("invalid spawn: {0}")]
    Spawn(#[from] RegistryError),
}

/// Worker-location registry invariant violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{tile} is already occupied by {occupant}")]
    TileOccupied { tile: TileId, occupant: WorkerId },

    #[error("{worker} is already placed on {tile}")]
    WorkerAlreadyPlaced { worker: WorkerId, tile: TileId },

    #[error("{0} is not on the board")]
    WorkerNotPlaced(WorkerId),

    #[error("{0} does not exist on this board")]
    NoSuchTile(TileId),

    #[error("the board already holds its limit of {capacity} workers")]
    BoardFull { capacity: usize },
}

/// Calls rejected by the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("cannot {action} while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },

    #[error("the game is over")]
    GameOver,

    #[error("{worker} does not belong to {player}")]
    NotOwnWorker { worker: WorkerId, player: PlayerId },

    #[error("unknown {0}")]
    UnknownWorker(WorkerId),

    #[error("unknown {0}")]
    UnknownTile(TileId),

    #[error("{worker} cannot travel to {to}")]
    IllegalMove { worker: WorkerId, to: TileId },

    #[error("{worker} cannot build on {at}")]
    IllegalBuild { worker: WorkerId, at: TileId },

    #[error("{0} is not offered by the pending ability")]
    NotAnAbilityTarget(TileId),

    #[error("{0:?}'s ability cannot be declined")]
    AbilityNotDeclinable(GodCard),
}

/// Umbrella error returned by game operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl GameError {
    /// Config and registry errors mean the caller skipped a legality query
    /// or fed a broken setup; the game cannot continue meaningfully.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::Config(_) | GameError::Registry(_))
    }
}
