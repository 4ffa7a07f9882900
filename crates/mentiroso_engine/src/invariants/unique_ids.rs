//! No two players share an id.

use super::Invariant;
use crate::Scoreboard;
use std::collections::HashSet;

/// Invariant: player ids are unique across the roster.
pub struct UniqueIdsInvariant;

impl Invariant<Scoreboard> for UniqueIdsInvariant {
    fn holds(board: &Scoreboard) -> bool {
        let mut seen = HashSet::new();
        board.players().iter().all(|p| seen.insert(p.id()))
    }

    fn description() -> &'static str {
        "Player ids are unique"
    }
}
