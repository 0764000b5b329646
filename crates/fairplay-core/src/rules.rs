//! Rule derivation and outcome queries.
//!
//! For an odd move set of size n, move i defeats the (n-1)/2 moves reached by
//! stepping backward circularly from i. Every pair of distinct moves has
//! exactly one winner, so the relation is a total tournament.

use crate::moves::MoveSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from outcome queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("move {0:?} is not part of this game's move set")]
    InvalidMove(String),
}

/// Round outcome, from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Beats-relation over a move set, computed once per session
#[derive(Clone, Debug)]
pub struct RuleTable {
    moves: MoveSet,
    /// beats[i] holds the indices move i defeats, each of size (n-1)/2
    beats: Vec<Vec<usize>>,
}

impl RuleTable {
    /// Derive the beats-relation from circular adjacency.
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let half = (n - 1) / 2;
        let beats = (0..n)
            .map(|i| (1..=half).map(|j| (i + n - j) % n).collect())
            .collect();
        Self {
            moves: moves.clone(),
            beats,
        }
    }

    /// The move set this table was derived from
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Does `attacker` defeat `defender`? Indices into the move set.
    pub fn defeats(&self, attacker: usize, defender: usize) -> bool {
        self.beats[attacker].contains(&defender)
    }

    /// Outcome for the player, by index. Equal indices draw.
    pub fn outcome_by_index(&self, player: usize, computer: usize) -> Outcome {
        if player == computer {
            Outcome::Draw
        } else if self.defeats(player, computer) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Outcome for the player, by move name.
    ///
    /// Both names must belong to the move set this table was built from;
    /// anything else is a programming error surfaced as `InvalidMove`.
    pub fn outcome(&self, player: &str, computer: &str) -> Result<Outcome, RuleError> {
        let p = self
            .moves
            .position(player)
            .ok_or_else(|| RuleError::InvalidMove(player.to_string()))?;
        let c = self
            .moves
            .position(computer)
            .ok_or_else(|| RuleError::InvalidMove(computer.to_string()))?;
        Ok(self.outcome_by_index(p, c))
    }

    /// Full n x n outcome matrix: rows = computer move, columns = player move,
    /// cells from the player's perspective. Used for the help display.
    pub fn outcome_matrix(&self) -> Vec<Vec<Outcome>> {
        let n = self.moves.len();
        (0..n)
            .map(|computer| {
                (0..n)
                    .map(|player| self.outcome_by_index(player, computer))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str]) -> RuleTable {
        RuleTable::build(&MoveSet::new(names.iter().copied()).unwrap())
    }

    #[test]
    fn test_classic_triple() {
        let t = table(&["rock", "paper", "scissors"]);
        assert_eq!(t.outcome("rock", "scissors"), Ok(Outcome::Win));
        assert_eq!(t.outcome("paper", "rock"), Ok(Outcome::Win));
        assert_eq!(t.outcome("scissors", "paper"), Ok(Outcome::Win));
        assert_eq!(t.outcome("rock", "paper"), Ok(Outcome::Lose));
        assert_eq!(t.outcome("scissors", "rock"), Ok(Outcome::Lose));
        assert_eq!(t.outcome("paper", "scissors"), Ok(Outcome::Lose));
    }

    #[test]
    fn test_self_play_draws() {
        let t = table(&["rock", "paper", "scissors", "lizard", "spock"]);
        for m in t.moves().iter() {
            assert_eq!(t.outcome(m, m), Ok(Outcome::Draw));
        }
    }

    #[test]
    fn test_five_moves_defeat_two_each() {
        let t = table(&["rock", "paper", "scissors", "lizard", "spock"]);
        for i in 0..5 {
            let defeated: Vec<usize> = (0..5).filter(|&j| t.defeats(i, j)).collect();
            assert_eq!(defeated.len(), 2);
            assert!(!defeated.contains(&i));
        }
    }

    #[test]
    fn test_total_tournament_property() {
        for n in [3usize, 5, 7, 9] {
            let names: Vec<String> = (0..n).map(|i| format!("move{i}")).collect();
            let t = RuleTable::build(&MoveSet::new(&names).unwrap());
            let half = (n - 1) / 2;
            for i in 0..n {
                let out_degree = (0..n).filter(|&j| t.defeats(i, j)).count();
                assert_eq!(out_degree, half, "out-degree mismatch at n={n}, i={i}");
                for j in 0..n {
                    if i != j {
                        assert!(
                            t.defeats(i, j) ^ t.defeats(j, i),
                            "pair ({i},{j}) must have exactly one winner at n={n}"
                        );
                    } else {
                        assert!(!t.defeats(i, j));
                    }
                }
            }
        }
    }

    #[test]
    fn test_determinism() {
        let a = table(&["rock", "paper", "scissors"]);
        let b = table(&["rock", "paper", "scissors"]);
        assert_eq!(a.outcome_matrix(), b.outcome_matrix());
    }

    #[test]
    fn test_foreign_move_rejected() {
        let t = table(&["rock", "paper", "scissors"]);
        assert_eq!(
            t.outcome("lizard", "rock"),
            Err(RuleError::InvalidMove("lizard".to_string()))
        );
        assert_eq!(
            t.outcome("rock", "lizard"),
            Err(RuleError::InvalidMove("lizard".to_string()))
        );
    }

    #[test]
    fn test_outcome_matrix_shape() {
        let t = table(&["rock", "paper", "scissors"]);
        let matrix = t.outcome_matrix();
        assert_eq!(matrix.len(), 3);
        // Diagonal draws: row = computer, column = player
        for i in 0..3 {
            assert_eq!(matrix[i].len(), 3);
            assert_eq!(matrix[i][i], Outcome::Draw);
        }
        // Computer rock vs player paper: player wins
        assert_eq!(matrix[0][1], Outcome::Win);
        // Computer rock vs player scissors: player loses
        assert_eq!(matrix[0][2], Outcome::Lose);
    }
}
