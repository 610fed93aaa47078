//! Core types: positions, players, workers, RNG, configuration, errors and
//! action records.
//!
//! Everything else in the crate addresses players, workers and tiles through
//! the id newtypes defined here and in [`board`](crate::board).

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod worker;

pub use action::{ActionRecord, TurnAction};
pub use config::{
    GameConfig, DEFAULT_LAYOUT, DEFAULT_WORKERS_PER_PLAYER, MAX_PLAYERS, MIN_PLAYERS,
};
pub use error::{ConfigError, GameError, RegistryError, RuleViolation};
pub use player::{Player, PlayerId, PlayerMap};
pub use position::{Position, NEIGHBOR_OFFSETS};
pub use rng::GameRng;
pub use worker::{Worker, WorkerId, STARTING_CAPABILITIES};
