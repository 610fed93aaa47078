//! Tower tiers: the structural state of a tile.
//!
//! ```text
//! Floor(0) -> Tower1(1) -> Tower2(2) -> Tower3(3) -> Dome
//! ```
//!
//! `built_up` is the only transition. A dome caps a level-3 tower; building
//! on a dome leaves it unchanged. Whether a build may be attempted at all is
//! decided by capability checks, not by the tier.
//!
//! Each tier carries a fixed set of capabilities it grants to a worker that
//! steps onto it and a set it revokes. Granting and revoking are applied
//! incrementally to the worker's existing set.

use serde::{Deserialize, Serialize};

use crate::capability::{Capability, CapabilitySet};

use Capability::{MoveToFloor, MoveToTower1, MoveToTower2, MoveToTower3, Win};

/// Height of a tile, or a domed level-3 tower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TowerTier {
    #[default]
    Floor,
    Tower1,
    Tower2,
    Tower3,
    Dome,
}

impl TowerTier {
    /// Numeric level. A dome sits on a level-3 tower, so it reports 3.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            TowerTier::Floor => 0,
            TowerTier::Tower1 => 1,
            TowerTier::Tower2 => 2,
            TowerTier::Tower3 | TowerTier::Dome => 3,
        }
    }

    #[must_use]
    pub const fn has_dome(self) -> bool {
        matches!(self, TowerTier::Dome)
    }

    /// The tier after one more block is placed.
    #[must_use]
    pub const fn built_up(self) -> TowerTier {
        match self {
            TowerTier::Floor => TowerTier::Tower1,
            TowerTier::Tower1 => TowerTier::Tower2,
            TowerTier::Tower2 => TowerTier::Tower3,
            TowerTier::Tower3 | TowerTier::Dome => TowerTier::Dome,
        }
    }

    /// Capabilities granted to a worker standing here.
    #[must_use]
    pub const fn grants(self) -> &'static [Capability] {
        match self {
            TowerTier::Floor => &[MoveToFloor, MoveToTower1],
            TowerTier::Tower1 => &[MoveToFloor, MoveToTower1, MoveToTower2],
            TowerTier::Tower2 => &[MoveToFloor, MoveToTower1, MoveToTower2, MoveToTower3],
            TowerTier::Tower3 | TowerTier::Dome => {
                &[MoveToFloor, MoveToTower1, MoveToTower2, MoveToTower3, Win]
            }
        }
    }

    /// Capabilities revoked from a worker standing here.
    #[must_use]
    pub const fn revokes(self) -> &'static [Capability] {
        match self {
            TowerTier::Floor => &[MoveToTower2, MoveToTower3],
            TowerTier::Tower1 => &[MoveToTower3],
            TowerTier::Tower2 | TowerTier::Tower3 | TowerTier::Dome => &[],
        }
    }

    /// The token a worker needs to step onto this tier. `None` once domed.
    #[must_use]
    pub const fn travel_capability(self) -> Option<Capability> {
        if self.has_dome() {
            None
        } else {
            Capability::move_to_level(self.level())
        }
    }

    /// Tier-level travel check; occupancy is checked by the board.
    #[must_use]
    pub fn can_worker_travel(self, caps: &CapabilitySet) -> bool {
        self.travel_capability().is_some_and(|cap| caps.has(cap))
    }

    /// Tier-level build check; occupancy is checked by the board.
    #[must_use]
    pub fn can_worker_build(self, caps: &CapabilitySet) -> bool {
        caps.has(Capability::Build) && !self.has_dome()
    }

    /// Apply this tier's grants then its revocations.
    pub fn apply_to(self, caps: &mut CapabilitySet) {
        caps.add_all(self.grants());
        caps.remove_all(self.revokes());
    }
}

impl std::fmt::Display for TowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TowerTier::Floor => "Floor",
            TowerTier::Tower1 => "Tower 1",
            TowerTier::Tower2 => "Tower 2",
            TowerTier::Tower3 => "Tower 3",
            TowerTier::Dome => "Dome",
        };
        f.write_str(name)
    }
}
