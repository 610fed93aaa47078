//! Grid coordinates and 8-directional adjacency.
//!
//! A `Position` is a plain value: two integers, compared and hashed by value.
//! Column `x` grows to the right, row `y` grows downward, matching the order
//! in which board layouts are read (one text line per row).

use serde::{Deserialize, Serialize};

/// Offsets of the eight neighbouring cells, row-major.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Integer grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The eight surrounding positions. Some may be off the board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// True if `other` is one of the eight surrounding cells.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_eight_distinct() {
        let center = Position::new(2, 2);
        let mut around: Vec<_> = center.neighbors().collect();
        around.sort();
        around.dedup();

        assert_eq!(around.len(), 8);
        assert!(!around.contains(&center));
        assert!(around.iter().all(|&p| center.is_adjacent(p)));
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(0, 0);
        assert!(p.is_adjacent(Position::new(1, 1)));
        assert!(p.is_adjacent(Position::new(-1, 0)));
        assert!(!p.is_adjacent(Position::new(2, 0)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn test_value_semantics() {
        let a = Position::new(3, 4);
        let b = Position::new(3, 4);
        assert_eq!(a, b);
        assert_eq!(format!("{}", a), "(3, 4)");

        let mut set = rustc_hash::FxHashSet::default();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
