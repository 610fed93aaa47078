//! The board: sole owner of tiles and worker locations.
//!
//! Built once from a [`BoardLayout`]. Each traversable cell becomes a floor
//! tile; exits are added toward every traversable 8-neighbour, from both
//! ends, so the graph is effectively undirected. Holes and out-of-bounds
//! cells never receive edges.
//!
//! Workers themselves live in the game; the board only tracks where they
//! stand and answers per-worker legality questions.

use rustc_hash::FxHashMap;

use super::layout::BoardLayout;
use super::registry::WorkerRegistry;
use super::tier::TowerTier;
use super::tile::{Tile, TileId};
use crate::capability::Capability;
use crate::core::{ConfigError, Position, RegistryError, Worker, WorkerId};

/// Tiles, adjacency and occupancy.
///
/// A board may be given a worker capacity (players x workers per player);
/// placing a worker beyond it fails with [`RegistryError::BoardFull`].
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    by_position: FxHashMap<Position, TileId>,
    registry: WorkerRegistry,
    worker_capacity: Option<usize>,
    width: usize,
    height: usize,
}

impl Board {
    /// Build a board for `player_count` players.
    ///
    /// Fails unless the layout has more than two tiles per player.
    pub fn new(layout: &BoardLayout, player_count: usize) -> Result<Self, ConfigError> {
        layout.ensure_capacity(player_count)?;

        let mut tiles: Vec<Tile> = Vec::with_capacity(layout.traversable_count());
        let mut by_position = FxHashMap::default();

        for (i, &position) in layout.positions().iter().enumerate() {
            let id = TileId::new(i as u32);
            tiles.push(Tile::new(id, position));
            by_position.insert(position, id);
        }

        for i in 0..tiles.len() {
            let here = tiles[i].id;
            let neighbours: Vec<TileId> = tiles[i]
                .position
                .neighbors()
                .filter_map(|p| by_position.get(&p).copied())
                .collect();

            for there in neighbours {
                tiles[here.index()].push_exit(there);
                tiles[there.index()].push_exit(here);
            }
        }

        Ok(Self {
            tiles,
            by_position,
            registry: WorkerRegistry::new(),
            worker_capacity: None,
            width: layout.width(),
            height: layout.height(),
        })
    }

    /// Cap the number of workers that may stand on the board at once.
    #[must_use]
    pub fn with_worker_capacity(mut self, capacity: usize) -> Self {
        self.worker_capacity = Some(capacity);
        self
    }

    /// Parse `text` and build the board in one step.
    pub fn parse(text: &str, player_count: usize) -> Result<Self, ConfigError> {
        Self::new(&BoardLayout::parse(text)?, player_count)
    }

    // === Queries ===

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.by_position.get(&position).copied()
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    /// Exits of a tile. Empty for an unknown id.
    #[must_use]
    pub fn exits(&self, id: TileId) -> &[TileId] {
        match self.tile(id) {
            Some(tile) => tile.exits(),
            None => &[],
        }
    }

    /// Tier of a tile, or `None` for an unknown id.
    #[must_use]
    pub fn tier(&self, id: TileId) -> Option<TowerTier> {
        self.tile(id).map(Tile::tier)
    }

    #[must_use]
    pub fn occupant(&self, tile: TileId) -> Option<WorkerId> {
        self.registry.occupant(tile)
    }

    #[must_use]
    pub fn tile_of(&self, worker: WorkerId) -> Option<TileId> {
        self.registry.tile_of(worker)
    }

    #[must_use]
    pub fn is_occupied(&self, tile: TileId) -> bool {
        self.registry.is_occupied(tile)
    }

    /// True if `worker` stands on `tile`.
    #[must_use]
    pub fn is_worker_at(&self, worker: WorkerId, tile: TileId) -> bool {
        self.registry.occupant(tile) == Some(worker)
    }

    #[must_use]
    pub fn registry(&self) -> &WorkerRegistry {
        &self.registry
    }

    /// Most workers that may be placed at once, if capped.
    #[must_use]
    pub fn worker_capacity(&self) -> Option<usize> {
        self.worker_capacity
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    // === Mutations ===

    /// Place a worker and grant it the tile tier's capabilities.
    ///
    /// Revocations are not applied on placement.
    pub fn add_worker(&mut self, worker: &mut Worker, tile: TileId) -> Result<(), RegistryError> {
        let tier = self.tier(tile).ok_or(RegistryError::NoSuchTile(tile))?;
        if let Some(capacity) = self.worker_capacity {
            if self.registry.len() >= capacity && !self.registry.is_placed(worker.id) {
                return Err(RegistryError::BoardFull { capacity });
            }
        }
        self.registry.add(worker.id, tile)?;
        worker.capabilities_mut().add_all(tier.grants());
        Ok(())
    }

    /// Move a placed worker onto an empty tile. Returns the tile it left.
    ///
    /// Registry only: capabilities are re-derived by the move executor.
    pub fn move_worker(&mut self, worker: WorkerId, to: TileId) -> Result<TileId, RegistryError> {
        if !self.contains(to) {
            return Err(RegistryError::NoSuchTile(to));
        }
        self.registry.move_worker(worker, to)
    }

    /// Detach a worker from the board.
    pub fn remove_worker(&mut self, worker: WorkerId) -> Option<TileId> {
        self.registry.remove(worker)
    }

    /// Raise a tile by one step. Returns the new tier.
    pub fn build_up(&mut self, tile: TileId) -> Option<TowerTier> {
        self.tiles.get_mut(tile.index()).map(Tile::build_up)
    }

    // === Legality ===

    /// `worker` may step onto `tile`: empty and reachable for its capabilities.
    ///
    /// Adjacency is not checked here; callers iterate exits.
    #[must_use]
    pub fn can_worker_travel(&self, worker: &Worker, tile: TileId) -> bool {
        match self.tier(tile) {
            Some(tier) => !self.is_occupied(tile) && tier.can_worker_travel(worker.capabilities()),
            None => false,
        }
    }

    /// `worker` may build on `tile`.
    ///
    /// An empty buildable tile qualifies. So does the worker's own tile when
    /// it holds [`Capability::BuildBelowWorkerOnTower`] and the tile is below
    /// level 3.
    #[must_use]
    pub fn can_worker_build(&self, worker: &Worker, tile: TileId) -> bool {
        let Some(tier) = self.tier(tile) else {
            return false;
        };
        if !tier.can_worker_build(worker.capabilities()) {
            return false;
        }

        match self.occupant(tile) {
            None => true,
            Some(occupant) => {
                occupant == worker.id
                    && worker.can(Capability::BuildBelowWorkerOnTower)
                    && tier.level() != 3
            }
        }
    }

    /// Exits of the worker's tile it can travel to.
    #[must_use]
    pub fn travel_targets(&self, worker: &Worker) -> Vec<TileId> {
        let Some(from) = self.tile_of(worker.id) else {
            return Vec::new();
        };
        self.exits(from)
            .iter()
            .copied()
            .filter(|&t| self.can_worker_travel(worker, t))
            .collect()
    }

    /// True if the worker has at least one legal destination.
    #[must_use]
    pub fn can_move(&self, worker: &Worker) -> bool {
        self.tile_of(worker.id).is_some_and(|from| {
            self.exits(from)
                .iter()
                .any(|&t| self.can_worker_travel(worker, t))
        })
    }
}

impl std::fmt::Display for Board {
    /// One row per line: level digit, `D` for a dome, `*` for an occupied
    /// tile, space for a hole.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            let mut row = String::with_capacity(self.width);
            for x in 0..self.width {
                let cell = match self.tile_at(Position::new(x as i32, y as i32)) {
                    None => ' ',
                    Some(id) if self.is_occupied(id) => '*',
                    Some(id) => match self.tier(id) {
                        Some(TowerTier::Dome) => 'D',
                        Some(tier) => char::from(b'0' + tier.level()),
                        None => ' ',
                    },
                };
                row.push(cell);
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
