//! Workers: the pieces players move and build with.
//!
//! A worker belongs to exactly one player for its whole life and carries its
//! own [`CapabilitySet`]. It is never destroyed; eliminating its owner only
//! detaches it from the board.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::capability::{Capability, CapabilitySet};

/// Capabilities every worker starts with, before standing on any tile.
pub const STARTING_CAPABILITIES: [Capability; 3] = [
    Capability::MoveToFloor,
    Capability::MoveToTower1,
    Capability::Build,
];

/// Worker identifier, unique across all players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub u16);

impl WorkerId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Worker({})", self.0)
    }
}

/// A single worker and its current permissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    owner: PlayerId,
    capabilities: CapabilitySet,
}

impl Worker {
    /// Create a worker holding [`STARTING_CAPABILITIES`].
    #[must_use]
    pub fn new(id: WorkerId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            capabilities: CapabilitySet::from_slice(&STARTING_CAPABILITIES),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn capabilities_mut(&mut self) -> &mut CapabilitySet {
        &mut self.capabilities
    }

    /// Shorthand for `capabilities().has(cap)`.
    #[must_use]
    pub fn can(&self, cap: Capability) -> bool {
        self.capabilities.has(cap)
    }
}
