//! Action executors: the only code that mutates tiles and occupancy.
//!
//! A [`WorkerAction`] is a plain value; [`ActionExecutor`] applies it to a
//! board on behalf of one worker. Executors do not check legality beyond
//! what the registry enforces; callers filter targets through the board's
//! legality predicates first.
//!
//! ## Actions
//!
//! - `Move { to }`: registry update, then the destination tier's grants and
//!   revocations. A lateral move between two level-3 towers strips `WIN`.
//! - `Build { at }`: raises the target tile by one tier.
//! - `DoNothing`: identity. Declining an ability runs this so that both
//!   branches share one execution path.

mod executor;

pub use executor::ActionExecutor;

use serde::{Deserialize, Serialize};

use crate::board::{TileId, TowerTier};

/// A single worker step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerAction {
    Move { to: TileId },
    Build { at: TileId },
    DoNothing,
}

/// What an executed action changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved { from: TileId, to: TileId },
    Built { at: TileId, tier: TowerTier },
    Nothing,
}
