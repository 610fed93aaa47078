//! Game setup.
//!
//! `GameBuilder` collects the configuration, validates it, and performs the
//! seeded setup steps:
//!
//! 1. Create `workers_per_player` workers for each player, in id order.
//! 2. Deal god cards: shuffle the pool and the seating order, then give the
//!    first `min(players, cards)` players in that order one card each.
//! 3. Drop workers onto tiles: shuffle all tiles and place workers in id
//!    order onto successive tiles.
//!
//! Either step may instead be fixed explicitly, and tiles may be preset to
//! a given tier, which is what puzzle setups and scenario tests use.

use tracing::info;

use super::game::Game;
use super::score::{NullScoreSink, ScoreSink};
use crate::board::{Board, TileId, TowerTier};
use crate::core::{
    ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, Position, Worker, WorkerId,
};
use crate::gods::GodCard;

/// How god cards reach players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GodAssignment {
    /// Deal from the pool in shuffled seating order.
    #[default]
    Random,
    /// One entry per player, in id order.
    Fixed(Vec<Option<GodCard>>),
}

/// Where workers start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Shuffled tiles.
    #[default]
    Random,
    /// One position per worker, in worker id order.
    Fixed(Vec<Position>),
}

/// Builder for creating a [`Game`].
///
/// ```
/// use tower_rules::rules::GameBuilder;
///
/// let game = GameBuilder::new().player_count(3).seed(7).build().unwrap();
/// assert_eq!(game.active_players().len(), 3);
/// assert_eq!(game.workers().len(), 6);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    god_cards: Vec<GodCard>,
    god_assignment: GodAssignment,
    placement: Placement,
    towers: Vec<(Position, TowerTier)>,
    seed: u64,
    score_sink: Option<Box<dyn ScoreSink>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            god_cards: GodCard::ALL.to_vec(),
            god_assignment: GodAssignment::Random,
            placement: Placement::Random,
            towers: Vec::new(),
            seed: 0,
            score_sink: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    #[must_use]
    pub fn workers_per_player(mut self, count: usize) -> Self {
        self.config.workers_per_player = count;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.config.layout = layout.into();
        self
    }

    /// Cards available for random dealing. Defaults to every card.
    #[must_use]
    pub fn god_cards(mut self, cards: Vec<GodCard>) -> Self {
        self.god_cards = cards;
        self
    }

    #[must_use]
    pub fn without_god_cards(self) -> Self {
        self.god_cards(Vec::new())
    }

    #[must_use]
    pub fn god_assignment(mut self, assignment: GodAssignment) -> Self {
        self.god_assignment = assignment;
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Start the tile at `position` at `tier`.
    ///
    /// Presets are applied after workers are placed, as if built under them:
    /// a worker already standing there keeps its placement capabilities.
    #[must_use]
    pub fn tower(mut self, position: Position, tier: TowerTier) -> Self {
        self.towers.push((position, tier));
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn score_sink(mut self, sink: impl ScoreSink + 'static) -> Self {
        self.score_sink = Some(Box::new(sink));
        self
    }

    /// Validate and set up the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        let layout = self.config.validate()?;
        let player_count = self.config.player_count;
        let mut board =
            Board::new(&layout, player_count)?.with_worker_capacity(self.config.total_workers());
        let mut rng = GameRng::new(self.seed);

        let mut players = PlayerMap::new(player_count, Player::new);
        let mut workers = Vec::with_capacity(self.config.total_workers());
        for player in PlayerId::all(player_count) {
            for _ in 0..self.config.workers_per_player {
                let id = WorkerId::new(workers.len() as u16);
                workers.push(Worker::new(id, player));
                players[player].push_worker(id);
            }
        }

        match self.god_assignment {
            GodAssignment::Random => {
                let mut pool = self.god_cards;
                rng.shuffle(&mut pool);
                let mut order: Vec<PlayerId> = PlayerId::all(player_count).collect();
                rng.shuffle(&mut order);

                for (player, card) in order.into_iter().zip(pool) {
                    players[player].assign_god_card(card);
                }
            }
            GodAssignment::Fixed(cards) => {
                if cards.len() != player_count {
                    return Err(ConfigError::GodAssignmentLength {
                        given: cards.len(),
                        players: player_count,
                    });
                }
                for (player, card) in PlayerId::all(player_count).zip(cards) {
                    if let Some(card) = card {
                        players[player].assign_god_card(card);
                    }
                }
            }
        }

        match self.placement {
            Placement::Random => {
                let mut tiles: Vec<TileId> = board.tiles().iter().map(|t| t.id).collect();
                rng.shuffle(&mut tiles);
                for (worker, tile) in workers.iter_mut().zip(tiles) {
                    board.add_worker(worker, tile)?;
                }
            }
            Placement::Fixed(positions) => {
                if positions.len() != workers.len() {
                    return Err(ConfigError::PlacementLength {
                        given: positions.len(),
                        workers: workers.len(),
                    });
                }
                for (worker, position) in workers.iter_mut().zip(positions) {
                    let tile = board
                        .tile_at(position)
                        .ok_or(ConfigError::SpawnOffBoard(position))?;
                    board.add_worker(worker, tile)?;
                }
            }
        }

        for (position, tier) in self.towers {
            let tile = board
                .tile_at(position)
                .ok_or(ConfigError::TowerOffBoard(position))?;
            while board.tier(tile).is_some_and(|t| t < tier) {
                board.build_up(tile);
            }
        }

        info!(
            players = player_count,
            workers = workers.len(),
            tiles = board.tile_count(),
            seed = self.seed,
            "game created"
        );

        let sink = self
            .score_sink
            .unwrap_or_else(|| Box::new(NullScoreSink));
        Ok(Game::new(self.config, board, players, workers, self.seed, sink))
    }
}
