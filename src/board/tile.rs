//! Tiles: nodes of the board graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tier::TowerTier;
use crate::core::Position;

/// Tile identifier. Tiles are numbered in layout reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A traversable cell: position, tier and the fixed list of exits.
///
/// Occupancy is not stored here; ask the [`Board`](super::Board).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
    tier: TowerTier,
    /// At most eight neighbours; stays inline.
    exits: SmallVec<[TileId; 8]>,
}

impl Tile {
    /// A floor tile with no exits yet.
    #[must_use]
    pub fn new(id: TileId, position: Position) -> Self {
        Self {
            id,
            position,
            tier: TowerTier::Floor,
            exits: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn tier(&self) -> TowerTier {
        self.tier
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.tier.level()
    }

    #[must_use]
    pub fn has_dome(&self) -> bool {
        self.tier.has_dome()
    }

    /// Adjacent traversable tiles, in neighbour-offset order.
    #[must_use]
    pub fn exits(&self) -> &[TileId] {
        &self.exits
    }

    /// Advance the tier by one step and return the new tier.
    pub fn build_up(&mut self) -> TowerTier {
        self.tier = self.tier.built_up();
        self.tier
    }

    pub(crate) fn push_exit(&mut self, exit: TileId) {
        if !self.exits.contains(&exit) {
            self.exits.push(exit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_floor() {
        let tile = Tile::new(TileId::new(0), Position::new(1, 2));
        assert_eq!(tile.tier(), TowerTier::Floor);
        assert_eq!(tile.level(), 0);
        assert!(tile.exits().is_empty());
    }

    #[test]
    fn test_build_up_until_dome() {
        let mut tile = Tile::new(TileId::new(0), Position::new(0, 0));
        assert_eq!(tile.build_up(), TowerTier::Tower1);
        assert_eq!(tile.build_up(), TowerTier::Tower2);
        assert_eq!(tile.build_up(), TowerTier::Tower3);
        assert_eq!(tile.build_up(), TowerTier::Dome);
        assert_eq!(tile.build_up(), TowerTier::Dome);
        assert!(tile.has_dome());
        assert_eq!(tile.level(), 3);
    }

    #[test]
    fn test_push_exit_dedups() {
        let mut tile = Tile::new(TileId::new(0), Position::new(0, 0));
        tile.push_exit(TileId::new(1));
        tile.push_exit(TileId::new(1));
        assert_eq!(tile.exits(), &[TileId::new(1)]);
    }
}
