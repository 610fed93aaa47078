//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 0-based and stable for the whole
//! game: eliminating a player never renumbers the others.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//! It always holds an entry for every seated player, eliminated or not;
//! the orchestrator tracks who is still active separately.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::worker::WorkerId;
use crate::gods::GodCard;

/// Player identifier.
///
/// The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use tower_rules::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player: its workers and its (optional) god card.
///
/// The worker list is fixed once setup finishes; the god card is dealt once
/// before the first turn and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    workers: Vec<WorkerId>,
    god: Option<GodCard>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            workers: Vec::new(),
            god: None,
        }
    }

    /// Workers owned by this player, in creation order.
    #[must_use]
    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    /// Check if the given worker belongs to this player.
    #[must_use]
    pub fn owns(&self, worker: WorkerId) -> bool {
        self.workers.contains(&worker)
    }

    /// The god card dealt to this player, if any.
    #[must_use]
    pub fn god_card(&self) -> Option<GodCard> {
        self.god
    }

    pub(crate) fn push_worker(&mut self, worker: WorkerId) {
        self.workers.push(worker);
    }

    pub(crate) fn assign_god_card(&mut self, card: GodCard) {
        self.god = Some(card);
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tower_rules::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an id outside this map.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
