//! Mentiroso scoreboard engine.
//!
//! Pure, synchronous game logic for the Mentiroso dice game: a roster of
//! players collects strikes, one letter of the target word at a time,
//! until a single player is left standing.
//!
//! # Architecture
//!
//! - **Domain**: [`Player`], [`PlayerId`], [`TargetWord`], [`GamePhase`], [`Outcome`]
//! - **Engine**: [`Scoreboard`] owns the session and is its only mutator
//! - **Intents**: [`Intent`] values applied with [`Scoreboard::apply`]
//! - **Rules**: elimination and win detection in [`rules`]
//! - **Invariants**: checkable properties in [`invariants`]
//!
//! # Example
//!
//! ```
//! use mentiroso_engine::{GamePhase, Scoreboard};
//!
//! let mut board = Scoreboard::default();
//! let ana = board.add_player("Ana").unwrap();
//! let luis = board.add_player("Luis").unwrap();
//! board.start_game();
//!
//! for _ in 0..board.word().len() {
//!     board.add_strike(ana);
//! }
//!
//! assert_eq!(board.phase(), GamePhase::GameOver);
//! assert_eq!(board.winner().map(|p| p.id()), Some(luis));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod phase;
mod player;
pub mod rules;
mod scoreboard;
mod snapshot;
mod word;

pub use action::{Effect, IgnoreReason, Intent};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, PhaseConsistentInvariant, ScoreboardInvariants,
    StrikesBoundedInvariant, UniqueIdsInvariant,
};
pub use phase::{GamePhase, Outcome};
pub use player::{Player, PlayerId};
pub use rules::MIN_PLAYERS;
pub use scoreboard::Scoreboard;
pub use snapshot::Snapshot;
pub use word::{DEFAULT_WORD, TargetWord, TargetWordError};
