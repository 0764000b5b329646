//! Fairplay Core Library
//!
//! This crate provides the rule engine, commitment scheme, move selection,
//! and session state machine for a generalized N-move rock-paper-scissors
//! with a commit-reveal fairness proof.

pub mod crypto;
pub mod moves;
pub mod rules;
pub mod select;
pub mod session;

pub use crypto::{Commitment, CommitmentHandler, SecretKey};
pub use moves::{ConfigError, MoveSet};
pub use rules::{Outcome, RuleError, RuleTable};
pub use select::select_move;
pub use session::{GameSession, Reply, RoundResult, EXIT_TOKEN, HELP_TOKEN};
