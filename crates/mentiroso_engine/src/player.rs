//! Players on the scoreboard.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque player identifier, unique within one scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Raw numeric value, for display and logging only.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh ids. Never reuses a value.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub(crate) fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

/// A named player and the strikes they have collected.
///
/// Name and id are fixed at creation. Only the scoreboard changes
/// `strikes`, and it keeps them within the target word length.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Identifier assigned when the player joined.
    #[getter(copy)]
    id: PlayerId,
    /// Display name, already trimmed.
    name: String,
    /// Letters revealed so far.
    #[getter(copy)]
    strikes: usize,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            strikes: 0,
        }
    }

    /// True once the player has revealed every letter.
    pub fn is_eliminated(&self, threshold: usize) -> bool {
        self.strikes >= threshold
    }

    /// True while the player can still take strikes.
    pub fn is_active(&self, threshold: usize) -> bool {
        !self.is_eliminated(threshold)
    }

    /// Adds one strike unless already at `threshold`. Returns whether it changed.
    pub(crate) fn strike(&mut self, threshold: usize) -> bool {
        if self.strikes >= threshold {
            return false;
        }
        self.strikes += 1;
        true
    }

    /// Removes one strike, floored at zero. Returns whether it changed.
    pub(crate) fn unstrike(&mut self) -> bool {
        if self.strikes == 0 {
            return false;
        }
        self.strikes -= 1;
        true
    }

    pub(crate) fn clear_strikes(&mut self) {
        self.strikes = 0;
    }

    #[cfg(test)]
    pub(crate) fn with_strikes(mut self, strikes: usize) -> Self {
        self.strikes = strikes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let mut ids = IdSequence::default();
        Player::new(ids.next_id(), "Ana".to_string())
    }

    #[test]
    fn test_ids_are_sequential_and_distinct() {
        let mut ids = IdSequence::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(b.raw(), a.raw() + 1);
        assert_eq!(format!("{}", a), "#0");
    }

    #[test]
    fn test_strike_stops_at_threshold() {
        let mut p = player();
        assert!(p.strike(2));
        assert!(p.strike(2));
        assert!(!p.strike(2));
        assert_eq!(p.strikes(), 2);
        assert!(p.is_eliminated(2));
        assert!(!p.is_active(2));
    }

    #[test]
    fn test_unstrike_floors_at_zero() {
        let mut p = player();
        assert!(!p.unstrike());
        assert_eq!(p.strikes(), 0);

        p.strike(9);
        assert!(p.unstrike());
        assert_eq!(p.strikes(), 0);
    }

    #[test]
    fn test_clear_strikes_keeps_identity() {
        let mut p = player().with_strikes(5);
        let id = p.id();
        p.clear_strikes();
        assert_eq!(p.strikes(), 0);
        assert_eq!(p.id(), id);
        assert_eq!(p.name(), "Ana");
    }
}
