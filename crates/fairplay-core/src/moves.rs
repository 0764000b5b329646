//! Validated move sets.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from move-set validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("need at least 3 moves, got {0}")]
    TooFew(usize),

    #[error("need an odd number of moves, got {0}")]
    EvenCount(usize),

    #[error("move name at position {0} is blank")]
    Blank(usize),

    #[error("duplicate move name: {0:?}")]
    Duplicate(String),
}

/// Ordered list of distinct move names, odd length >= 3.
///
/// Names are trimmed on construction; uniqueness is post-trim and
/// case-sensitive. Immutable once built, one per game session.
/// Construction through `new` is the only way to obtain one, so the
/// invariants hold for every live value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set from caller-supplied names.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut moves = Vec::new();
        for (position, name) in names.into_iter().enumerate() {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return Err(ConfigError::Blank(position + 1));
            }
            if moves.iter().any(|m| m == trimmed) {
                return Err(ConfigError::Duplicate(trimmed.to_string()));
            }
            moves.push(trimmed.to_string());
        }

        if !moves.is_empty() && moves.len() % 2 == 0 {
            return Err(ConfigError::EvenCount(moves.len()));
        }
        if moves.len() < 3 {
            return Err(ConfigError::TooFew(moves.len()));
        }

        Ok(Self { moves })
    }

    /// Number of moves (odd, >= 3)
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// A validated move set is never empty
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move name at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Index of `name`, if it belongs to this set
    pub fn position(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == name)
    }

    /// Iterate the names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.moves.join(", "))
    }
}
