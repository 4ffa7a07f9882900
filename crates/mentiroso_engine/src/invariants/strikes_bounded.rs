//! Strikes never exceed the target word length.

use super::Invariant;
use crate::Scoreboard;

/// Invariant: every player has between zero and `L` strikes.
///
/// The lower bound is carried by the unsigned counter, so only the
/// upper bound needs checking.
pub struct StrikesBoundedInvariant;

impl Invariant<Scoreboard> for StrikesBoundedInvariant {
    fn holds(board: &Scoreboard) -> bool {
        let threshold = board.word().len();
        board.players().iter().all(|p| p.strikes() <= threshold)
    }

    fn description() -> &'static str {
        "Strikes stay within the target word length"
    }
}
