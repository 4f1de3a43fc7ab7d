//! The session state machine.
//!
//! ## Phase flow
//!
//! ```text
//! Setup <-> Rules
//! Setup -> NameEntry -> Playing -> {Transition | InterimLeaderboard | Finished}
//! Transition -> Playing            (deferred auto-advance, cancellable)
//! InterimLeaderboard -> Transition
//! Finished -> Playing              (play again)
//! Finished -> Setup                (new game)
//! ```
//!
//! Every action handler is a silent no-op outside the phases it belongs
//! to; there are no error pathways. Handlers that touch the clock take the
//! caller's `Instant`.

use log::debug;
use std::time::{Duration, Instant};

use crate::core::{GameConfig, GamePhase, GameRng, PlayerId, PlayerMap, Rank};
use crate::leaderboard::{standings, Standing};
use crate::names;
use crate::round::{RoundAssignment, ScoreHistory};
use super::timer::Timer;

/// The interim leaderboard appears after every this-many completed rounds.
const LEADERBOARD_EVERY: u32 = 3;

/// Handle for the deferred auto-advance out of [`GamePhase::Transition`].
///
/// Issued when the transition screen is entered and bound to that exact
/// phase entry: if the session has moved on before the presentation
/// layer's delay fires, [`GameSession::complete_transition`] rejects the
/// stale token instead of advancing a different phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionToken {
    serial: u64,
}

/// One in-memory game session: configuration, phase, names, round state,
/// history, and clock. The single source of truth for the whole screen.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    /// Bumped on every phase change; anchors [`TransitionToken`]s.
    phase_serial: u64,
    names: PlayerMap<String>,
    /// 1-based; the round currently being played (or just finished, once
    /// the session reaches `Finished`).
    current_round: u32,
    assignment: RoundAssignment,
    history: ScoreHistory,
    timer: Timer,
    rng: GameRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a fresh session on the setup screen, seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a session with a fixed seed (reproducible name suggestions).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        let config = GameConfig::default();
        Self {
            names: PlayerMap::with_value(config.players_count(), String::new()),
            config,
            phase: GamePhase::Setup,
            phase_serial: 0,
            current_round: 1,
            assignment: RoundAssignment::new(),
            history: ScoreHistory::new(),
            timer: Timer::new(),
            rng,
        }
    }

    fn enter(&mut self, phase: GamePhase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.phase_serial += 1;
    }

    // === Reads ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player display names, indexed by player.
    #[must_use]
    pub fn names(&self) -> &PlayerMap<String> {
        &self.names
    }

    /// The 1-based round currently being played.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// The in-progress rank assignment.
    #[must_use]
    pub fn assignment(&self) -> &RoundAssignment {
        &self.assignment
    }

    /// All completed rounds.
    #[must_use]
    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Derived totals per player (lower is better).
    #[must_use]
    pub fn totals(&self) -> PlayerMap<u32> {
        self.history.totals(self.config.players_count())
    }

    /// Derived leaderboard ordering; index 0 is the current winner.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        standings(self.config.players_count(), &self.history)
    }

    /// Elapsed play time as of `now`; zero before the game starts, frozen
    /// once finished.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }

    /// Whether the current round can be confirmed (every player has a rank).
    #[must_use]
    pub fn round_complete(&self) -> bool {
        self.assignment.is_complete(self.config.players_count())
    }

    /// Whether a rank button should be enabled for a player: true unless
    /// another player currently holds the rank.
    #[must_use]
    pub fn rank_available(&self, player: PlayerId, rank: Rank) -> bool {
        match self.assignment.holder_of(rank) {
            None => true,
            Some(holder) => holder == player,
        }
    }

    // === Setup ===

    /// Set the number of rounds (setup screen only, clamped to 3..=10).
    pub fn set_rounds(&mut self, rounds: u32) {
        if self.phase != GamePhase::Setup {
            return;
        }
        self.config.set_rounds(rounds);
    }

    /// Set the number of players (setup screen only, clamped to 2..=6).
    /// Resizes the name map; names are re-suggested on name entry anyway.
    pub fn set_player_count(&mut self, players: usize) {
        if self.phase != GamePhase::Setup {
            return;
        }
        self.config.set_players(players);
        self.names = PlayerMap::with_value(self.config.players_count(), String::new());
    }

    /// Show the rules screen.
    pub fn show_rules(&mut self) {
        if self.phase != GamePhase::Setup {
            return;
        }
        self.enter(GamePhase::Rules);
    }

    /// Return from the rules screen to setup.
    pub fn back_to_setup(&mut self) {
        if self.phase != GamePhase::Rules {
            return;
        }
        self.enter(GamePhase::Setup);
    }

    /// Confirm the configuration and move to name entry.
    ///
    /// Suggests one distinct name per player from the pool and clears any
    /// leftover round state from a previous game.
    pub fn begin_name_entry(&mut self) {
        if self.phase != GamePhase::Setup {
            return;
        }
        let suggested = names::suggest(self.config.players_count(), &mut self.rng);
        self.names = PlayerMap::new(self.config.players_count(), |p| {
            suggested[p.index()].clone()
        });
        self.assignment.clear();
        self.history.clear();
        self.current_round = 1;
        self.enter(GamePhase::NameEntry);
    }

    // === Name entry ===

    /// Set a player's display name (name-entry screen only). Free text;
    /// empty and duplicate names are allowed.
    pub fn set_player_name(&mut self, player: PlayerId, name: impl Into<String>) {
        if self.phase != GamePhase::NameEntry {
            return;
        }
        if player.index() >= self.config.players_count() {
            return;
        }
        self.names[player] = name.into();
    }

    /// Start the game: round 1, empty history, timer running from `now`.
    pub fn start_game(&mut self, now: Instant) {
        if self.phase != GamePhase::NameEntry {
            return;
        }
        self.history.clear();
        self.assignment.clear();
        self.current_round = 1;
        self.timer.start(now);
        self.enter(GamePhase::Playing);
    }

    // === Playing ===

    /// Toggle a rank for a player (see [`RoundAssignment::toggle`]).
    /// Out-of-range players or ranks are ignored.
    pub fn toggle_assign(&mut self, player: PlayerId, rank: Rank) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let players_count = self.config.players_count();
        if player.index() >= players_count || !rank.in_bounds(players_count) {
            return;
        }
        self.assignment.toggle(player, rank);
    }

    /// Clear the in-progress assignment. History and the round counter are
    /// untouched.
    pub fn reset_round(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.assignment.clear();
    }

    /// Confirm the current round.
    ///
    /// No-op unless every player holds a rank. Appends the completed round
    /// to history, then either finishes the game (final round: timer
    /// freezes at `now`), shows the interim leaderboard (after rounds 3, 6,
    /// 9 -- judged on the round just played), or runs the short transition.
    pub fn confirm_round(&mut self, now: Instant) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(record) = self.assignment.to_record(self.config.players_count()) else {
            return;
        };
        self.history.push_round(record);
        self.assignment.clear();

        let played = self.current_round;
        debug!("round {} confirmed", played);

        if played >= self.config.rounds_total() {
            self.timer.freeze(now);
            self.enter(GamePhase::Finished);
            return;
        }

        self.current_round = played + 1;
        if played % LEADERBOARD_EVERY == 0 {
            self.enter(GamePhase::InterimLeaderboard);
        } else {
            self.enter(GamePhase::Transition);
        }
    }

    // === Transition ===

    /// Token for the pending auto-advance, present only while the
    /// transition screen is up. The presentation layer schedules its delay
    /// with this token and hands it back via [`Self::complete_transition`].
    #[must_use]
    pub fn transition_token(&self) -> Option<TransitionToken> {
        (self.phase == GamePhase::Transition).then_some(TransitionToken {
            serial: self.phase_serial,
        })
    }

    /// Complete a pending transition, returning to play.
    ///
    /// Returns `false` without side effects when the token is stale, i.e.
    /// the phase has changed since the token was issued.
    pub fn complete_transition(&mut self, token: TransitionToken) -> bool {
        if self.phase != GamePhase::Transition || token.serial != self.phase_serial {
            debug!("stale transition token ignored");
            return false;
        }
        self.enter(GamePhase::Playing);
        true
    }

    // === Leaderboard / finished ===

    /// Leave the interim leaderboard and keep playing.
    pub fn continue_from_leaderboard(&mut self) {
        if self.phase != GamePhase::InterimLeaderboard {
            return;
        }
        self.enter(GamePhase::Transition);
    }

    /// Replay with the same configuration and names: history cleared,
    /// round counter back to 1, timer restarted from `now`.
    pub fn play_again(&mut self, now: Instant) {
        if self.phase != GamePhase::Finished {
            return;
        }
        self.history.clear();
        self.assignment.clear();
        self.current_round = 1;
        self.timer.start(now);
        self.enter(GamePhase::Playing);
    }

    /// Return to setup for a brand-new game. Names and all round state are
    /// discarded; the setup sliders keep their last values.
    pub fn new_game(&mut self) {
        if self.phase != GamePhase::Finished {
            return;
        }
        self.names = PlayerMap::with_value(self.config.players_count(), String::new());
        self.history.clear();
        self.assignment.clear();
        self.current_round = 1;
        self.timer.reset();
        self.enter(GamePhase::Setup);
    }
}
