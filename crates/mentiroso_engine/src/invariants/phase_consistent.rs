//! The outcome exists exactly when the game is over.

use super::Invariant;
use crate::{GamePhase, Scoreboard};

/// Invariant: an outcome is recorded iff the phase is `GameOver`.
pub struct PhaseConsistentInvariant;

impl Invariant<Scoreboard> for PhaseConsistentInvariant {
    fn holds(board: &Scoreboard) -> bool {
        (board.phase() == GamePhase::GameOver) == board.outcome().is_some()
    }

    fn description() -> &'static str {
        "Outcome is present only in GameOver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_lifecycle() {
        let mut board = Scoreboard::default();
        let ana = board.add_player("Ana").expect("added");
        board.add_player("Luis");
        assert!(PhaseConsistentInvariant::holds(&board));

        board.start_game();
        assert!(PhaseConsistentInvariant::holds(&board));

        for _ in 0..board.word().len() {
            board.add_strike(ana);
        }
        assert_eq!(board.phase(), GamePhase::GameOver);
        assert!(PhaseConsistentInvariant::holds(&board));

        board.play_again();
        assert!(PhaseConsistentInvariant::holds(&board));
    }
}
