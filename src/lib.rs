//! # tower-rules
//!
//! Rule engine for a turn-based tower-climbing board game for 2-8 players.
//!
//! Each player controls a few workers on a grid of tiles. On their turn a
//! player selects one worker, moves it to an adjacent tile, then builds one
//! level on a tile adjacent to where it now stands. Climbing onto a level-3
//! tower wins; a player whose workers can no longer move anywhere is
//! eliminated. God cards bend these rules for the player holding them.
//!
//! ## Design Principles
//!
//! 1. **Capabilities gate everything**: every move and build checks a
//!    permission token held by the acting worker. Tiers grant and revoke
//!    tokens as workers step onto them.
//!
//! 2. **Handles, not references**: players, workers and tiles are addressed
//!    by id. The [`Board`] owns tiles and occupancy; the [`Game`] owns
//!    players and workers.
//!
//! 3. **Explicit continuations**: god cards return a [`ResumeAt`] token
//!    instead of calling back into the orchestrator.
//!
//! 4. **N-player first**: nothing assumes two players.
//!
//! ## Modules
//!
//! - `core`: ids, positions, players, workers, RNG, configuration, errors
//! - `capability`: permission tokens and per-worker sets
//! - `board`: tiers, tiles, layouts, the worker registry and the board graph
//! - `actions`: move / build / no-op executors
//! - `gods`: Artemis, Demeter and Zeus
//! - `rules`: the turn orchestrator, results and scoring
//!
//! ## Example
//!
//! ```
//! use tower_rules::{GameBuilder, TurnPhase};
//!
//! let mut game = GameBuilder::new().without_god_cards().seed(42).build().unwrap();
//! let player = game.current_player();
//! let worker = game
//!     .player(player)
//!     .unwrap()
//!     .workers()
//!     .iter()
//!     .copied()
//!     .find(|&w| !game.legal_destinations(w).is_empty())
//!     .unwrap();
//!
//! game.select_worker(worker).unwrap();
//! let to = game.legal_destinations(worker)[0];
//! game.move_worker(to).unwrap();
//!
//! let at = game.legal_build_targets(worker)[0];
//! game.build(at).unwrap();
//!
//! assert_eq!(game.phase(), &TurnPhase::SelectingWorker);
//! assert_ne!(game.current_player(), player);
//! ```

pub mod actions;
pub mod board;
pub mod capability;
pub mod core;
pub mod gods;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap,
    Position, RegistryError, RuleViolation, TurnAction, Worker, WorkerId,
};

pub use crate::capability::{Capability, CapabilitySet};

pub use crate::board::{Board, BoardLayout, Tile, TileId, TowerTier, WorkerRegistry};

pub use crate::actions::{ActionExecutor, ActionOutcome, WorkerAction};

pub use crate::gods::{AbilityOffer, AbilityResolution, AbilityTiming, GodCard, ResumeAt};

pub use crate::rules::{
    EliminationReason, Game, GameBuilder, GameResult, GodAssignment, Leaderboard, NullScoreSink,
    Placement, ScoreEvent, ScoreSink, TurnEvent, TurnPhase,
};
