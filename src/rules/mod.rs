//! Turn orchestration: phases, the game itself, results and scoring.
//!
//! ## Key Types
//!
//! - [`Game`]: owns all state and exposes the turn operations
//! - [`GameBuilder`]: validated, seeded setup
//! - [`TurnPhase`]: where the current player is within their turn
//! - [`TurnEvent`]: what an operation did
//! - [`GameResult`]: winner or draw
//! - [`ScoreSink`]: receives `+1` per winner when the game ends

mod builder;
mod game;
mod phase;
mod result;
mod score;

pub use builder::{GameBuilder, GodAssignment, Placement};
pub use game::Game;
pub use phase::TurnPhase;
pub use result::{EliminationReason, GameResult, TurnEvent};
pub use score::{Leaderboard, NullScoreSink, ScoreEvent, ScoreSink};
