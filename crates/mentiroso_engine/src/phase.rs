//! Session phases and the outcome of a finished game.

use super::Player;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Where the session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GamePhase {
    /// Roster is being assembled.
    #[default]
    Setup,
    /// Strikes are being handed out.
    Playing,
    /// Elimination left at most one player standing.
    GameOver,
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The last active player.
    Winner(Player),
    /// Every player was eliminated at once.
    NoSurvivors,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::NoSurvivors => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player.name()),
            Outcome::NoSurvivors => write!(f, "Everyone is out"),
        }
    }
}
