//! Game configuration.
//!
//! The engine takes everything it needs as ordinary values: player count,
//! workers per player and the textual board layout. There is no global UI
//! state; a presentation layer passes a `GameConfig` (or uses
//! [`GameBuilder`](crate::rules::GameBuilder)) and gets a game back.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::BoardLayout;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 8;

/// Workers each player controls unless configured otherwise.
pub const DEFAULT_WORKERS_PER_PLAYER: usize = 2;

/// Fully traversable 5x5 board.
pub const DEFAULT_LAYOUT: &str = "XXXXX\nXXXXX\nXXXXX\nXXXXX\nXXXXX\n";

/// Everything needed to set up a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seated players (2-8).
    pub player_count: usize,

    /// Workers per player, fixed for the whole game.
    pub workers_per_player: usize,

    /// Board layout: one line per row, `X` marks a tile.
    pub layout: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            workers_per_player: DEFAULT_WORKERS_PER_PLAYER,
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a config on the default board.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set workers per player (builder pattern).
    #[must_use]
    pub fn with_workers_per_player(mut self, workers: usize) -> Self {
        self.workers_per_player = workers;
        self
    }

    /// Set the board layout (builder pattern).
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Total workers on the board at the start of the game.
    #[must_use]
    pub fn total_workers(&self) -> usize {
        self.player_count * self.workers_per_player
    }

    /// Check the config and return the parsed layout.
    pub fn validate(&self) -> Result<BoardLayout, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.workers_per_player == 0 {
            return Err(ConfigError::NoWorkers);
        }

        let layout = BoardLayout::parse(&self.layout)?;
        layout.ensure_capacity(self.player_count)?;

        let traversable = layout.traversable_count();
        if traversable < self.total_workers() {
            return Err(ConfigError::NotEnoughSpawnTiles {
                workers: self.total_workers(),
                traversable,
            });
        }

        Ok(layout)
    }
}
