//! The scoreboard: owner of the session and its only mutator.
//!
//! Every operation is total. A call that does not fit the current
//! state leaves the session as it was and reports why through
//! [`Effect::Ignored`]; nothing here returns an error or panics.

use super::invariants::{InvariantSet, ScoreboardInvariants};
use super::player::IdSequence;
use super::rules::{self, MIN_PLAYERS};
use super::{Effect, GamePhase, IgnoreReason, Intent, Outcome, Player, PlayerId, Snapshot, TargetWord};
use tracing::{debug, info, instrument};

/// Game engine for one Mentiroso table.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    word: TargetWord,
    players: Vec<Player>,
    phase: GamePhase,
    outcome: Option<Outcome>,
    ids: IdSequence,
}

impl Scoreboard {
    /// Creates an empty scoreboard in setup, using `word` as the target.
    #[instrument]
    pub fn new(word: TargetWord) -> Self {
        info!(%word, "Creating scoreboard");
        Self {
            word,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read-only view
    // ─────────────────────────────────────────────────────────────

    /// The target word.
    pub fn word(&self) -> &TargetWord {
        &self.word
    }

    /// Players in the order they joined.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// How the game ended, once it has.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The winning player, if the game ended with one.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.as_ref().and_then(Outcome::winner)
    }

    /// Number of players who can still take strikes.
    pub fn active_count(&self) -> usize {
        rules::active_players(&self.players, self.word.len()).count()
    }

    /// Whether the roster is large enough for the view to offer a start.
    ///
    /// [`Scoreboard::start_game`] itself only refuses an empty roster.
    pub fn can_start(&self) -> bool {
        self.phase == GamePhase::Setup && self.players.len() >= MIN_PLAYERS
    }

    /// Owned copy of the session for rendering or serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Applies an intent by dispatching to the matching operation.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::AddPlayer(name) => self.try_add_player(&name).map(|_| ()).into(),
            Intent::RemovePlayer(id) => self.remove_player(id),
            Intent::StartGame => self.start_game(),
            Intent::AddStrike(id) => self.add_strike(id),
            Intent::UndoStrike(id) => self.undo_strike(id),
            Intent::ResetGame => self.reset_game(),
            Intent::PlayAgain => self.play_again(),
        }
    }

    /// Appends a player during setup. Returns the new id.
    ///
    /// The name is trimmed; a blank name, or a call outside setup, adds
    /// nothing and returns `None`. Duplicate names are allowed.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        self.try_add_player(name).ok()
    }

    /// Removes a player. Any phase; absent ids are ignored.
    ///
    /// While playing, the smaller roster is re-evaluated for a winner.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn remove_player(&mut self, id: PlayerId) -> Effect {
        self.settle(|board| {
            let before = board.players.len();
            board.players.retain(|p| p.id() != id);
            if board.players.len() == before {
                return Err(IgnoreReason::UnknownPlayer(id));
            }
            info!(%id, remaining = board.players.len(), "Player removed");
            if board.phase == GamePhase::Playing {
                board.detect_end();
            }
            Ok(())
        })
        .into()
    }

    /// Moves from setup to playing if anyone is on the roster.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self) -> Effect {
        self.settle(|board| {
            board.require(GamePhase::Setup)?;
            if board.players.is_empty() {
                return Err(IgnoreReason::NoPlayers);
            }
            board.phase = GamePhase::Playing;
            info!(players = board.players.len(), "Game started");
            Ok(())
        })
        .into()
    }

    /// Reveals one more letter for a player, then checks for a winner.
    ///
    /// Eliminated players cannot take further strikes.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn add_strike(&mut self, id: PlayerId) -> Effect {
        self.settle(|board| {
            board.require(GamePhase::Playing)?;
            let threshold = board.word.len();
            let player = board.player_mut(id)?;
            if !player.strike(threshold) {
                return Err(IgnoreReason::AlreadyEliminated(id));
            }
            debug!(%id, strikes = player.strikes(), "Strike added");
            if player.is_eliminated(threshold) {
                info!(%id, name = %player.name(), "Player eliminated");
            }
            board.detect_end();
            Ok(())
        })
        .into()
    }

    /// Hides the last revealed letter for a player, floored at zero.
    ///
    /// Does not re-evaluate the roster.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn undo_strike(&mut self, id: PlayerId) -> Effect {
        self.settle(|board| {
            board.require(GamePhase::Playing)?;
            let player = board.player_mut(id)?;
            if !player.unstrike() {
                return Err(IgnoreReason::NoStrikes(id));
            }
            debug!(%id, strikes = player.strikes(), "Strike undone");
            Ok(())
        })
        .into()
    }

    /// Discards the roster and returns to setup. Valid in every phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset_game(&mut self) -> Effect {
        self.settle(|board| {
            board.players.clear();
            board.outcome = None;
            board.phase = GamePhase::Setup;
            info!("Session reset");
            Ok(())
        })
        .into()
    }

    /// Keeps the roster, zeroes every strike count, and plays again.
    ///
    /// Only available once a game is over.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_again(&mut self) -> Effect {
        self.settle(|board| {
            board.require(GamePhase::GameOver)?;
            board.players.iter_mut().for_each(Player::clear_strikes);
            board.outcome = None;
            board.phase = GamePhase::Playing;
            info!(players = board.players.len(), "Playing again");
            Ok(())
        })
        .into()
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn try_add_player(&mut self, name: &str) -> Result<PlayerId, IgnoreReason> {
        self.settle(|board| {
            board.require(GamePhase::Setup)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(IgnoreReason::BlankName);
            }
            let id = board.ids.next_id();
            board.players.push(Player::new(id, name.to_string()));
            info!(%id, name, "Player added");
            Ok(id)
        })
    }

    /// Runs a mutation, logs it when ignored, and checks invariants in
    /// debug builds when applied.
    fn settle<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, IgnoreReason>,
    ) -> Result<T, IgnoreReason> {
        let result = op(self);
        match &result {
            Ok(_) => {
                debug_assert_eq!(
                    ScoreboardInvariants::check_all(&*self),
                    Ok(()),
                    "Scoreboard invariants violated"
                );
            }
            Err(reason) => {
                debug!(%reason, "Intent ignored");
            }
        }
        result
    }

    fn require(&self, expected: GamePhase) -> Result<(), IgnoreReason> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IgnoreReason::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, IgnoreReason> {
        self.players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(IgnoreReason::UnknownPlayer(id))
    }

    fn detect_end(&mut self) {
        if let Some(outcome) = rules::evaluate(&self.players, self.word.len()) {
            info!(%outcome, "Game over");
            self.outcome = Some(outcome);
            self.phase = GamePhase::GameOver;
        }
    }

    #[cfg(test)]
    pub(crate) fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }
}
