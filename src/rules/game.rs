//! The game orchestrator.
//!
//! `Game` owns the board, players and workers, and drives the turn phase
//! machine. Each turn operation validates its input against the current
//! phase and the legality predicates before touching anything; a rejected
//! call returns an error and leaves the game exactly as it was.
//!
//! ## Turn flow
//!
//! 1. `select_worker`: commits a worker. Selecting one with no legal
//!    destination eliminates its owner (touch rule).
//! 2. `move_worker`: moves it; the win check runs, then Artemis (after-move)
//!    or the build phase.
//! 3. `build`: builds; Demeter (after-build) may follow. Zeus (before-build)
//!    replaces this step with an ability offer.
//! 4. `activate_ability` / `decline_ability`: resolve a pending offer and
//!    resume where the card says.
//!
//! After every action the win check and the elimination pass run. A player
//! is eliminated when none of their workers can travel anywhere; if that
//! removes the acting player the turn passes on immediately.

use im::Vector;
use tracing::{debug, info, warn};

use super::phase::TurnPhase;
use super::result::{EliminationReason, GameResult, TurnEvent};
use super::score::{ScoreEvent, ScoreSink};
use crate::actions::{ActionExecutor, ActionOutcome, WorkerAction};
use crate::board::{Board, TileId};
use crate::capability::Capability;
use crate::core::{
    ActionRecord, GameConfig, GameError, Player, PlayerId, PlayerMap, RuleViolation, TurnAction,
    Worker, WorkerId,
};
use crate::gods::{AbilityResolution, AbilityTiming, GodCard, ResumeAt};

/// A game in progress (or finished).
///
/// Created by [`GameBuilder`](super::GameBuilder). The first turn belongs to
/// `PlayerId(0)` and has already started when the game is returned.
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    workers: Vec<Worker>,
    /// Players still in the game, in seat order.
    active: Vec<PlayerId>,
    current: PlayerId,
    phase: TurnPhase,
    turn: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
    score_sink: Box<dyn ScoreSink>,
    seed: u64,
}

impl Game {
    pub(crate) fn new(
        config: GameConfig,
        board: Board,
        players: PlayerMap<Player>,
        workers: Vec<Worker>,
        seed: u64,
        score_sink: Box<dyn ScoreSink>,
    ) -> Self {
        let active = players.player_ids().collect();
        Self {
            config,
            board,
            players,
            workers,
            active,
            current: PlayerId::new(0),
            phase: TurnPhase::SelectingWorker,
            turn: 1,
            sequence: 0,
            history: Vector::new(),
            score_sink,
            seed,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.index())
    }

    /// Players still in the game, in seat order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.contains(&player)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.phase {
            TurnPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Every executed action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Seed used for setup randomness.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The god card held by `player`, if any.
    #[must_use]
    pub fn god_card(&self, player: PlayerId) -> Option<GodCard> {
        self.players.get(player).and_then(Player::god_card)
    }

    // === Legality queries ===

    /// Can `worker` step onto `tile` right now (ignoring adjacency)?
    #[must_use]
    pub fn can_worker_travel(&self, worker: WorkerId, tile: TileId) -> bool {
        self.worker(worker)
            .is_some_and(|w| self.board.can_worker_travel(w, tile))
    }

    /// Can `worker` build on `tile` right now (ignoring adjacency)?
    #[must_use]
    pub fn can_worker_build(&self, worker: WorkerId, tile: TileId) -> bool {
        self.worker(worker)
            .is_some_and(|w| self.board.can_worker_build(w, tile))
    }

    /// Exits of the worker's tile it may move to.
    #[must_use]
    pub fn legal_destinations(&self, worker: WorkerId) -> Vec<TileId> {
        self.worker(worker)
            .map(|w| self.board.travel_targets(w))
            .unwrap_or_default()
    }

    /// Tiles the worker may build on: buildable exits, plus its own tile
    /// while it holds `BUILD_BELOW_WORKER_ON_TOWER`.
    #[must_use]
    pub fn legal_build_targets(&self, worker: WorkerId) -> Vec<TileId> {
        let Some(w) = self.worker(worker) else {
            return Vec::new();
        };
        let Some(here) = self.board.tile_of(worker) else {
            return Vec::new();
        };

        let mut targets: Vec<TileId> = self
            .board
            .exits(here)
            .iter()
            .copied()
            .filter(|&t| self.board.can_worker_build(w, t))
            .collect();
        if self.board.can_worker_build(w, here) {
            targets.push(here);
        }
        targets
    }

    // === Turn operations ===

    /// Commit one of the current player's workers for this turn.
    pub fn select_worker(&mut self, worker: WorkerId) -> Result<Vec<TurnEvent>, GameError> {
        if !matches!(self.phase, TurnPhase::SelectingWorker) {
            return Err(self.wrong_phase("select a worker"));
        }
        if self.worker(worker).is_none() {
            return Err(self.reject(RuleViolation::UnknownWorker(worker)));
        }
        let player = self.current;
        if !self.players.get(player).is_some_and(|p| p.owns(worker)) {
            return Err(self.reject(RuleViolation::NotOwnWorker { worker, player }));
        }

        let mut events = Vec::new();
        self.record(player, TurnAction::SelectWorker(worker));
        events.push(TurnEvent::WorkerSelected { player, worker });

        if self.legal_destinations(worker).is_empty() {
            info!(%player, %worker, "selected a worker that cannot move");
            self.eliminate(player, EliminationReason::TouchRule, &mut events);
            self.advance_turn(&mut events);
            return Ok(events);
        }

        debug!(%player, %worker, "worker selected");
        self.phase = TurnPhase::Moving { worker };
        Ok(events)
    }

    /// Move the selected worker.
    pub fn move_worker(&mut self, to: TileId) -> Result<Vec<TurnEvent>, GameError> {
        let TurnPhase::Moving { worker } = self.phase else {
            return Err(self.wrong_phase("move"));
        };
        if !self.board.contains(to) {
            return Err(self.reject(RuleViolation::UnknownTile(to)));
        }
        if !self.legal_destinations(worker).contains(&to) {
            return Err(self.reject(RuleViolation::IllegalMove { worker, to }));
        }

        let player = self.current;
        let mut events = Vec::new();
        let outcome = self.run_action(worker, WorkerAction::Move { to })?;
        self.log_outcome(player, worker, outcome, &mut events);

        let from = match outcome {
            ActionOutcome::Moved { from, .. } => from,
            _ => to,
        };

        if self.check_winner(&mut events) {
            return Ok(events);
        }

        match self.god_card_with_timing(player, AbilityTiming::AfterMove) {
            Some(card) => {
                if !self.check_losing_players(&mut events) {
                    self.offer_ability(card, worker, from, to, &mut events);
                }
            }
            None => self.enter_build_phase(worker, to, &mut events),
        }
        Ok(events)
    }

    /// Build with the selected worker.
    pub fn build(&mut self, at: TileId) -> Result<Vec<TurnEvent>, GameError> {
        let TurnPhase::Building { worker, from } = self.phase else {
            return Err(self.wrong_phase("build"));
        };
        if !self.board.contains(at) {
            return Err(self.reject(RuleViolation::UnknownTile(at)));
        }
        if !self.legal_build_targets(worker).contains(&at) {
            return Err(self.reject(RuleViolation::IllegalBuild { worker, at }));
        }

        let player = self.current;
        let mut events = Vec::new();
        let outcome = self.run_action(worker, WorkerAction::Build { at })?;
        self.log_outcome(player, worker, outcome, &mut events);

        if self.check_winner(&mut events) || self.check_losing_players(&mut events) {
            return Ok(events);
        }

        match self.god_card_with_timing(player, AbilityTiming::AfterBuild) {
            Some(card) => self.offer_ability(card, worker, from, at, &mut events),
            None => self.advance_turn(&mut events),
        }
        Ok(events)
    }

    /// Use the pending god ability on `target`.
    pub fn activate_ability(&mut self, target: TileId) -> Result<Vec<TurnEvent>, GameError> {
        let TurnPhase::GodAbility(offer) = &self.phase else {
            return Err(self.wrong_phase("activate an ability"));
        };
        let offer = offer.clone();

        if self.worker(offer.worker).is_none() {
            return Err(self.reject(RuleViolation::UnknownWorker(offer.worker)));
        }
        let worker = &mut self.workers[offer.worker.index()];
        let resolution = match offer.activate(&mut self.board, worker, target) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(card = %offer.card, %target, error = %err, "ability activation rejected");
                return Err(err);
            }
        };

        let player = self.current;
        let mut events = Vec::new();
        self.record(
            player,
            TurnAction::ActivateAbility {
                card: offer.card,
                worker: offer.worker,
                target,
            },
        );
        events.push(TurnEvent::AbilityResolved {
            player,
            card: offer.card,
            activated: true,
        });
        self.resume(player, offer.worker, resolution, &mut events);
        Ok(events)
    }

    /// Decline the pending god ability.
    pub fn decline_ability(&mut self) -> Result<Vec<TurnEvent>, GameError> {
        let TurnPhase::GodAbility(offer) = &self.phase else {
            return Err(self.wrong_phase("decline an ability"));
        };
        let offer = offer.clone();

        if self.worker(offer.worker).is_none() {
            return Err(self.reject(RuleViolation::UnknownWorker(offer.worker)));
        }
        let worker = &mut self.workers[offer.worker.index()];
        let resolution = match offer.deactivate(&mut self.board, worker) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(card = %offer.card, error = %err, "ability decline rejected");
                return Err(err);
            }
        };

        let player = self.current;
        let mut events = Vec::new();
        self.record(
            player,
            TurnAction::DeclineAbility {
                card: offer.card,
                worker: offer.worker,
            },
        );
        events.push(TurnEvent::AbilityResolved {
            player,
            card: offer.card,
            activated: false,
        });
        self.resume(player, offer.worker, resolution, &mut events);
        Ok(events)
    }

    // === Flow ===

    fn resume(
        &mut self,
        player: PlayerId,
        worker: WorkerId,
        resolution: AbilityResolution,
        events: &mut Vec<TurnEvent>,
    ) {
        self.log_outcome(player, worker, resolution.outcome, events);
        if self.check_winner(events) {
            return;
        }

        match resolution.resume {
            ResumeAt::BuildPhase(tile) => self.enter_build_phase(worker, tile, events),
            ResumeAt::NextTurn => {
                if !self.check_losing_players(events) {
                    self.advance_turn(events);
                }
            }
        }
    }

    /// The worker stands on `from` and must build next.
    fn enter_build_phase(&mut self, worker: WorkerId, from: TileId, events: &mut Vec<TurnEvent>) {
        if self.check_losing_players(events) || self.check_winner(events) {
            return;
        }

        let player = self.current;
        if let Some(card) = self.god_card_with_timing(player, AbilityTiming::BeforeBuild) {
            self.offer_ability(card, worker, from, from, events);
            return;
        }

        if self.legal_build_targets(worker).is_empty() {
            debug!(%player, %worker, "nothing to build on; turn ends");
            self.advance_turn(events);
            return;
        }

        debug!(%player, %worker, %from, "build phase");
        self.phase = TurnPhase::Building { worker, from };
    }

    fn offer_ability(
        &mut self,
        card: GodCard,
        worker: WorkerId,
        from: TileId,
        to: TileId,
        events: &mut Vec<TurnEvent>,
    ) {
        let Some(w) = self.workers.get_mut(worker.index()) else {
            return;
        };
        let offer = card.perform_ability(&self.board, w, from, to);

        debug!(%card, %worker, targets = offer.targets.len(), "ability offered");
        events.push(TurnEvent::AbilityOffered(offer.clone()));
        self.phase = TurnPhase::GodAbility(offer);
    }

    /// Pass the turn to the next active player in seat order.
    fn advance_turn(&mut self, events: &mut Vec<TurnEvent>) {
        if self.settle_if_decided(events) {
            return;
        }

        let next = self
            .active
            .iter()
            .copied()
            .find(|&p| p > self.current)
            .or_else(|| self.active.first().copied());
        let Some(next) = next else {
            return;
        };

        self.current = next;
        self.turn += 1;
        self.sequence = 0;
        self.phase = TurnPhase::SelectingWorker;

        info!(player = %next, turn = self.turn, "turn started");
        events.push(TurnEvent::TurnStarted {
            player: next,
            turn: self.turn,
        });
    }

    /// First active player with a worker holding `WIN` wins.
    fn check_winner(&mut self, events: &mut Vec<TurnEvent>) -> bool {
        if self.is_over() {
            return true;
        }

        let winner = self.active.iter().copied().find(|&p| {
            self.players.get(p).is_some_and(|player| {
                player
                    .workers()
                    .iter()
                    .any(|&w| self.worker(w).is_some_and(|w| w.can(Capability::Win)))
            })
        });

        match winner {
            Some(player) => {
                self.finish(GameResult::Winner(player), events);
                true
            }
            None => false,
        }
    }

    /// Remove every player whose workers are all immobile.
    ///
    /// Returns true if the current turn cannot continue: the game ended or
    /// the acting player was removed (in which case the turn has already
    /// passed on).
    fn check_losing_players(&mut self, events: &mut Vec<TurnEvent>) -> bool {
        if self.is_over() {
            return true;
        }

        let losing: Vec<PlayerId> = self
            .active
            .iter()
            .copied()
            .filter(|&p| !self.player_can_move(p))
            .collect();
        if losing.is_empty() {
            return false;
        }

        let current_removed = losing.contains(&self.current);
        for player in losing {
            self.eliminate(player, EliminationReason::Immobile, events);
        }

        if self.settle_if_decided(events) {
            return true;
        }
        if current_removed {
            self.advance_turn(events);
            return true;
        }
        false
    }

    /// End the game if at most one player remains.
    fn settle_if_decided(&mut self, events: &mut Vec<TurnEvent>) -> bool {
        if self.is_over() {
            return true;
        }
        let result = match self.active.as_slice() {
            [] => GameResult::Draw,
            [last] => GameResult::Winner(*last),
            _ => return false,
        };
        self.finish(result, events);
        true
    }

    fn eliminate(&mut self, player: PlayerId, reason: EliminationReason, events: &mut Vec<TurnEvent>) {
        self.active.retain(|&p| p != player);
        if let Some(p) = self.players.get(player) {
            for &worker in p.workers() {
                self.board.remove_worker(worker);
            }
        }

        info!(%player, ?reason, remaining = self.active.len(), "player eliminated");
        events.push(TurnEvent::PlayerEliminated { player, reason });
    }

    fn finish(&mut self, result: GameResult, events: &mut Vec<TurnEvent>) {
        if let Some(winner) = result.winner() {
            self.score_sink.record(ScoreEvent {
                player: winner,
                delta: 1,
            });
        }

        info!(?result, turn = self.turn, "game over");
        self.phase = TurnPhase::GameOver(result.clone());
        events.push(TurnEvent::GameOver(result));
    }

    // === Helpers ===

    fn player_can_move(&self, player: PlayerId) -> bool {
        self.players.get(player).is_some_and(|p| {
            p.workers()
                .iter()
                .any(|&w| self.worker(w).is_some_and(|w| self.board.can_move(w)))
        })
    }

    fn god_card_with_timing(&self, player: PlayerId, timing: AbilityTiming) -> Option<GodCard> {
        self.god_card(player).filter(|card| card.timing() == timing)
    }

    fn run_action(
        &mut self,
        worker: WorkerId,
        action: WorkerAction,
    ) -> Result<ActionOutcome, GameError> {
        if self.worker(worker).is_none() {
            return Err(self.reject(RuleViolation::UnknownWorker(worker)));
        }
        let w = &mut self.workers[worker.index()];
        Ok(ActionExecutor::execute(&mut self.board, w, action)?)
    }

    fn log_outcome(
        &mut self,
        player: PlayerId,
        worker: WorkerId,
        outcome: ActionOutcome,
        events: &mut Vec<TurnEvent>,
    ) {
        match outcome {
            ActionOutcome::Moved { from, to } => {
                self.record(player, TurnAction::Move { worker, from, to });
                events.push(TurnEvent::Moved { worker, from, to });
            }
            ActionOutcome::Built { at, tier } => {
                self.record(player, TurnAction::Build { worker, at, tier });
                events.push(TurnEvent::Built { worker, at, tier });
            }
            ActionOutcome::Nothing => {}
        }
    }

    fn record(&mut self, player: PlayerId, action: TurnAction) {
        debug!(%player, turn = self.turn, seq = self.sequence, ?action, "action");
        self.history
            .push_back(ActionRecord::new(player, action, self.turn, self.sequence));
        self.sequence += 1;
    }

    fn wrong_phase(&self, action: &'static str) -> GameError {
        let violation = if self.is_over() {
            RuleViolation::GameOver
        } else {
            RuleViolation::WrongPhase {
                action,
                phase: self.phase.name(),
            }
        };
        self.reject(violation)
    }

    fn reject(&self, violation: RuleViolation) -> GameError {
        warn!(player = %self.current, %violation, "rejected");
        violation.into()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("phase", &self.phase)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
