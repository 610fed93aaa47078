//! Worker permissions.
//!
//! Every legal move and build is gated by a capability token held by the
//! acting worker. Tiers grant and revoke tokens as workers step onto them;
//! god cards grant extra tokens temporarily.
//!
//! ## Key Types
//!
//! - [`Capability`]: a single permission token
//! - [`CapabilitySet`]: the per-worker set, mutated incrementally

mod set;

pub use set::CapabilitySet;

use serde::{Deserialize, Serialize};

/// A named permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    MoveToFloor,
    MoveToTower1,
    MoveToTower2,
    MoveToTower3,
    Build,
    Win,
    /// Lets a worker build on the tile it stands on (Zeus).
    BuildBelowWorkerOnTower,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 7] = [
        Capability::MoveToFloor,
        Capability::MoveToTower1,
        Capability::MoveToTower2,
        Capability::MoveToTower3,
        Capability::Build,
        Capability::Win,
        Capability::BuildBelowWorkerOnTower,
    ];

    /// The movement token needed to step onto a tile of the given level.
    #[must_use]
    pub const fn move_to_level(level: u8) -> Option<Capability> {
        match level {
            0 => Some(Capability::MoveToFloor),
            1 => Some(Capability::MoveToTower1),
            2 => Some(Capability::MoveToTower2),
            3 => Some(Capability::MoveToTower3),
            _ => None,
        }
    }

    /// Upper snake case name, as shown in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Capability::MoveToFloor => "MOVE_TO_FLOOR",
            Capability::MoveToTower1 => "MOVE_TO_TOWER_1",
            Capability::MoveToTower2 => "MOVE_TO_TOWER_2",
            Capability::MoveToTower3 => "MOVE_TO_TOWER_3",
            Capability::Build => "BUILD",
            Capability::Win => "WIN",
            Capability::BuildBelowWorkerOnTower => "BUILD_BELOW_WORKER_ON_TOWER",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_level() {
        assert_eq!(Capability::move_to_level(0), Some(Capability::MoveToFloor));
        assert_eq!(Capability::move_to_level(3), Some(Capability::MoveToTower3));
        assert_eq!(Capability::move_to_level(4), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Capability::Win.to_string(), "WIN");
        assert_eq!(
            Capability::BuildBelowWorkerOnTower.to_string(),
            "BUILD_BELOW_WORKER_ON_TOWER"
        );
        assert_eq!(Capability::ALL.len(), 7);
    }
}
