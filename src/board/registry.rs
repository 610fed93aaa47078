//! Worker-location registry.
//!
//! The single source of truth for which worker stands on which tile. Two
//! maps are kept in lockstep so both directions are O(1):
//!
//! - `locations`: worker -> tile
//! - `occupants`: tile -> worker
//!
//! Every mutation either updates both maps or returns an error before
//! touching either, so the mapping stays a bijection.

use rustc_hash::FxHashMap;

use super::tile::TileId;
use crate::core::{RegistryError, WorkerId};

/// Bijective worker <-> tile map.
///
/// ```
/// use tower_rules::board::{TileId, WorkerRegistry};
/// use tower_rules::core::WorkerId;
///
/// let mut registry = WorkerRegistry::new();
/// registry.add(WorkerId::new(0), TileId::new(4)).unwrap();
/// registry.move_worker(WorkerId::new(0), TileId::new(5)).unwrap();
///
/// assert_eq!(registry.tile_of(WorkerId::new(0)), Some(TileId::new(5)));
/// assert_eq!(registry.occupant(TileId::new(4)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WorkerRegistry {
    locations: FxHashMap<WorkerId, TileId>,
    occupants: FxHashMap<TileId, WorkerId>,
}

impl WorkerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a worker that is not yet on the board.
    pub fn add(&mut self, worker: WorkerId, tile: TileId) -> Result<(), RegistryError> {
        if let Some(&placed) = self.locations.get(&worker) {
            return Err(RegistryError::WorkerAlreadyPlaced { worker, tile: placed });
        }
        if let Some(&occupant) = self.occupants.get(&tile) {
            return Err(RegistryError::TileOccupied { tile, occupant });
        }

        self.locations.insert(worker, tile);
        self.occupants.insert(tile, worker);
        Ok(())
    }

    /// Move a placed worker to an empty tile.
    ///
    /// Returns the tile the worker left. The destination must be empty; a
    /// worker's own tile counts as occupied.
    pub fn move_worker(&mut self, worker: WorkerId, to: TileId) -> Result<TileId, RegistryError> {
        let from = self
            .locations
            .get(&worker)
            .copied()
            .ok_or(RegistryError::WorkerNotPlaced(worker))?;
        if let Some(&occupant) = self.occupants.get(&to) {
            return Err(RegistryError::TileOccupied { tile: to, occupant });
        }

        self.occupants.remove(&from);
        self.occupants.insert(to, worker);
        self.locations.insert(worker, to);
        Ok(from)
    }

    /// Detach a worker. Returns the tile it stood on, or `None` if unplaced.
    pub fn remove(&mut self, worker: WorkerId) -> Option<TileId> {
        let tile = self.locations.remove(&worker)?;
        self.occupants.remove(&tile);
        Some(tile)
    }

    #[must_use]
    pub fn tile_of(&self, worker: WorkerId) -> Option<TileId> {
        self.locations.get(&worker).copied()
    }

    #[must_use]
    pub fn occupant(&self, tile: TileId) -> Option<WorkerId> {
        self.occupants.get(&tile).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, tile: TileId) -> bool {
        self.occupants.contains_key(&tile)
    }

    #[must_use]
    pub fn is_placed(&self, worker: WorkerId) -> bool {
        self.locations.contains_key(&worker)
    }

    /// Number of placed workers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All (worker, tile) pairs, unordered.
    pub fn iter(&self) -> impl Iterator<Item = (WorkerId, TileId)> + '_ {
        self.locations.iter().map(|(&w, &t)| (w, t))
    }

    /// Both maps agree with each other.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.locations.len() == self.occupants.len()
            && self
                .locations
                .iter()
                .all(|(w, t)| self.occupants.get(t) == Some(w))
    }
}
