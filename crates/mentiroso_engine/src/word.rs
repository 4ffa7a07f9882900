//! The target word whose letters count a player's strikes.
//!
//! Each strike reveals one more letter. A player who has revealed the
//! whole word is eliminated, so the word length is the elimination
//! threshold for the session.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Word used when no other is configured.
pub const DEFAULT_WORD: &str = "MENTIROSO";

/// Ordered letters of the target word.
///
/// Always non-empty. Letters are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetWord {
    letters: Vec<char>,
}

/// Reasons a word cannot be used as a target.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TargetWordError {
    /// Nothing left after trimming.
    #[display("Target word is empty")]
    Empty,
    /// Whitespace inside the word.
    #[display("Target word {:?} contains whitespace", _0)]
    Whitespace(#[error(not(source))] String),
}

impl TargetWord {
    /// Builds a target word from text.
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`TargetWordError::Empty`] for blank text and
    /// [`TargetWordError::Whitespace`] if the trimmed text has inner spaces.
    #[instrument]
    pub fn new(text: &str) -> Result<Self, TargetWordError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TargetWordError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(TargetWordError::Whitespace(trimmed.to_string()));
        }
        Ok(Self {
            letters: trimmed.chars().flat_map(char::to_uppercase).collect(),
        })
    }

    /// Number of letters, i.e. the strikes needed for elimination.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a target word has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters uncovered by `strikes` strikes.
    pub fn revealed(&self, strikes: usize) -> &[char] {
        &self.letters[..strikes.min(self.letters.len())]
    }
}

impl Default for TargetWord {
    fn default() -> Self {
        Self {
            letters: DEFAULT_WORD.chars().collect(),
        }
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TargetWord {
    type Err = TargetWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetWord {
    type Error = TargetWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TargetWord> for String {
    fn from(word: TargetWord) -> Self {
        word.to_string()
    }
}
