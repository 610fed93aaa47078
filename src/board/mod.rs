//! Board model: tiers, tiles, layouts, the worker registry and the board graph.
//!
//! ## Key Types
//!
//! - [`TowerTier`]: per-tile height state machine
//! - [`Tile`] / [`TileId`]: graph nodes
//! - [`BoardLayout`]: parsed textual layout
//! - [`WorkerRegistry`]: bijective worker <-> tile map
//! - [`Board`]: owns all of the above

mod graph;
mod layout;
mod registry;
mod tier;
mod tile;

pub use graph::Board;
pub use layout::{BoardLayout, TILE_CHAR};
pub use registry::WorkerRegistry;
pub use tier::TowerTier;
pub use tile::{Tile, TileId};
