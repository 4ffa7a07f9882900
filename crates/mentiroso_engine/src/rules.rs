//! Elimination rules.
//!
//! Pure functions over the roster. The scoreboard calls [`evaluate`]
//! after any change that can shrink the set of active players.

use super::{Outcome, Player};
use tracing::{debug, instrument};

/// Smallest roster that can end by elimination.
pub const MIN_PLAYERS: usize = 2;

/// Players still able to take strikes.
pub fn active_players(players: &[Player], threshold: usize) -> impl Iterator<Item = &Player> {
    players.iter().filter(move |p| p.is_active(threshold))
}

/// Decides whether the roster has reached an end.
///
/// Returns `None` while two or more players are active, or when the
/// roster is too small to be decided by elimination.
#[instrument(skip(players), fields(roster = players.len()))]
pub fn evaluate(players: &[Player], threshold: usize) -> Option<Outcome> {
    if players.len() < MIN_PLAYERS {
        return None;
    }

    let mut active = active_players(players, threshold);
    let outcome = match (active.next(), active.next()) {
        (Some(last), None) => Some(Outcome::Winner(last.clone())),
        (None, _) => Some(Outcome::NoSurvivors),
        (Some(_), Some(_)) => None,
    };
    debug!(?outcome, "Evaluated roster");
    outcome
}
