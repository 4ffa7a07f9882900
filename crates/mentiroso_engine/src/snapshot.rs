//! Serializable copy of a scoreboard for views and logs.

use super::{GamePhase, Player, Scoreboard, TargetWord};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Owned, read-only picture of the session at one moment.
///
/// The view renders from this; mutating it has no effect on the
/// scoreboard it came from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Target word in play.
    word: TargetWord,
    /// Current phase.
    #[getter(copy)]
    phase: GamePhase,
    /// Roster in join order.
    players: Vec<Player>,
    /// Winner of a finished game, if any.
    winner: Option<Player>,
}

impl Snapshot {
    /// Players who can still take strikes.
    pub fn active_count(&self) -> usize {
        let threshold = self.word.len();
        self.players.iter().filter(|p| p.is_active(threshold)).count()
    }
}

impl From<&Scoreboard> for Snapshot {
    fn from(board: &Scoreboard) -> Self {
        Self {
            word: board.word().clone(),
            phase: board.phase(),
            players: board.players().to_vec(),
            winner: board.winner().cloned(),
        }
    }
}
