//! First-class intents and the effect of applying them.
//!
//! Intents are what the view asks for. The scoreboard never rejects one
//! with an error: an intent that does not fit the current state leaves
//! the session untouched and comes back as [`Effect::Ignored`].

use super::{GamePhase, PlayerId};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A request to change the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Append a player to the roster.
    AddPlayer(String),
    /// Drop a player from the roster.
    RemovePlayer(PlayerId),
    /// Leave setup and begin handing out strikes.
    StartGame,
    /// Reveal one more letter for a player.
    AddStrike(PlayerId),
    /// Hide the last revealed letter for a player.
    UndoStrike(PlayerId),
    /// Throw the session away and return to setup.
    ResetGame,
    /// Keep the roster, clear strikes, and play another round.
    PlayAgain,
}

/// Why an intent left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IgnoreReason {
    /// Player name was empty after trimming.
    #[display("Player name is blank")]
    BlankName,
    /// Intent is not valid in the current phase.
    #[display("Expected phase {expected}, session is in {actual}")]
    WrongPhase {
        /// Phase the intent needs.
        expected: GamePhase,
        /// Phase the session is in.
        actual: GamePhase,
    },
    /// No player has this id.
    #[display("No player with id {_0}")]
    UnknownPlayer(PlayerId),
    /// Roster is empty.
    #[display("No players on the roster")]
    NoPlayers,
    /// Player has already revealed the whole word.
    #[display("Player {_0} is already eliminated")]
    AlreadyEliminated(PlayerId),
    /// Player has nothing to undo.
    #[display("Player {_0} has no strikes")]
    NoStrikes(PlayerId),
}

/// What applying an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// The session changed.
    Applied,
    /// The session is exactly as it was.
    Ignored(IgnoreReason),
}

impl Effect {
    /// Returns true if the session changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Effect::Applied)
    }

    /// Returns the reason the intent was ignored, if it was.
    pub fn ignored(&self) -> Option<IgnoreReason> {
        match self {
            Effect::Applied => None,
            Effect::Ignored(reason) => Some(*reason),
        }
    }
}

impl From<Result<(), IgnoreReason>> for Effect {
    fn from(result: Result<(), IgnoreReason>) -> Self {
        match result {
            Ok(()) => Effect::Applied,
            Err(reason) => Effect::Ignored(reason),
        }
    }
}
