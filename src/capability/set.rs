//! Per-worker capability set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::Capability;

/// Set of permissions held by one worker.
///
/// All operations are idempotent: adding a held capability or removing an
/// absent one is a no-op. Sets are never shared between workers.
///
/// ```
/// use tower_rules::capability::{Capability, CapabilitySet};
///
/// let mut caps = CapabilitySet::new();
/// caps.add(Capability::Build);
/// caps.add(Capability::Build);
/// assert!(caps.has(Capability::Build));
///
/// caps.remove(Capability::Win);
/// assert_eq!(caps.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    caps: FxHashSet<Capability>,
}

impl CapabilitySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding exactly the given capabilities.
    #[must_use]
    pub fn from_slice(caps: &[Capability]) -> Self {
        let mut set = Self::new();
        set.add_all(caps);
        set
    }

    pub fn add(&mut self, cap: Capability) {
        self.caps.insert(cap);
    }

    pub fn add_all(&mut self, caps: &[Capability]) {
        self.caps.extend(caps.iter().copied());
    }

    pub fn remove(&mut self, cap: Capability) {
        self.caps.remove(&cap);
    }

    pub fn remove_all(&mut self, caps: &[Capability]) {
        for cap in caps {
            self.caps.remove(cap);
        }
    }

    #[must_use]
    pub fn has(&self, cap: Capability) -> bool {
        self.caps.contains(&cap)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }

    /// Held capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.caps.contains(c))
    }
}
