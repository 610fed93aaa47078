//! Textual board layouts.
//!
//! One line per row; the character `X` marks a traversable tile and any
//! other character marks a hole. Rows may have different lengths; missing
//! cells at the end of a short row are holes.

use crate::core::{ConfigError, Position};

/// The traversable character.
pub const TILE_CHAR: char = 'X';

/// Parsed layout: which grid cells hold a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    positions: Vec<Position>,
    width: usize,
    height: usize,
}

impl BoardLayout {
    /// Parse a layout. Fails if there is no traversable tile at all.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut positions = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            height = y + 1;
            width = width.max(line.chars().count());

            for (x, c) in line.chars().enumerate() {
                if c == TILE_CHAR {
                    positions.push(Position::new(x as i32, y as i32));
                }
            }
        }

        if positions.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        Ok(Self {
            positions,
            width,
            height,
        })
    }

    /// Traversable positions in reading order (row by row).
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn traversable_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// A board must hold strictly more than two tiles per player.
    pub fn ensure_capacity(&self, player_count: usize) -> Result<(), ConfigError> {
        let required = player_count * 2;
        if self.traversable_count() <= required {
            return Err(ConfigError::TooFewTiles {
                traversable: self.traversable_count(),
                required,
            });
        }
        Ok(())
    }
}
