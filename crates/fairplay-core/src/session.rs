//! Single-round game session state machine.
//!
//! Construction draws the computer's move and commits to it; the digest is
//! available before any player input is consumed. `handle_line` drives the
//! machine one input at a time and returns a reply value for the caller to
//! render, so the loop can be tested with a scripted sequence of lines.
//!
//! Ordering invariant: digest publication precedes player-move capture, which
//! precedes key reveal. The reveal is only reachable from the resolve
//! transition, and the handler is consumed there, so a second reveal cannot
//! happen.

use crate::crypto::{Commitment, CommitmentHandler, SecretKey};
use crate::moves::MoveSet;
use crate::rules::{Outcome, RuleTable};
use crate::select::select_move;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

/// Input token that ends the session with no result
pub const EXIT_TOKEN: &str = "0";

/// Input token that requests the outcome-matrix help display
pub const HELP_TOKEN: &str = "?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    AwaitingChoice,
    Resolved,
    Terminated,
}

/// What a resolved round reports to the player
#[derive(Debug)]
pub struct RoundResult {
    pub player_move: String,
    pub computer_move: String,
    /// From the player's perspective
    pub outcome: Outcome,
    /// Proof material: HMAC-SHA-256(key, computer_move) equals the digest
    /// published at session start
    pub key: SecretKey,
}

/// Reply to one line of player input
#[derive(Debug)]
pub enum Reply {
    /// Unrecognized or out-of-range input; the session keeps waiting
    Invalid { input: String },
    /// Player asked for the help table; the session keeps waiting
    Help,
    /// Player locked in a move; the round is resolved and the key revealed
    Round(RoundResult),
    /// Player chose the exit token; no result
    Exit,
    /// The session already ended; no further input is accepted
    Finished,
}

/// One single-round game: commit, await choice, resolve, reveal.
pub struct GameSession {
    rules: RuleTable,
    computer_index: usize,
    commitment: Commitment,
    handler: Option<CommitmentHandler>,
    state: State,
}

impl GameSession {
    /// Start a session: build rules, draw the computer's move, commit to it.
    ///
    /// The caller injects the secure random source; production uses `OsRng`,
    /// tests a seeded generator.
    pub fn new<R: RngCore + CryptoRng>(moves: MoveSet, rng: &mut R) -> Self {
        let rules = RuleTable::build(&moves);
        let (computer_index, computer_move) = select_move(rng, &moves);
        let handler = CommitmentHandler::commit(rng, computer_move);
        let commitment = *handler.commitment();
        info!(digest = %commitment, "computer move committed");
        Self {
            rules,
            computer_index,
            commitment,
            handler: Some(handler),
            state: State::AwaitingChoice,
        }
    }

    /// The digest to publish before asking for the player's move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The session's move set
    pub fn move_set(&self) -> &MoveSet {
        self.rules.moves()
    }

    /// The derived rule table, used by the help display
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Has the session reached a terminal state?
    pub fn is_finished(&self) -> bool {
        self.state != State::AwaitingChoice
    }

    /// Consume one line of player input and advance the machine.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if self.state != State::AwaitingChoice {
            return Reply::Finished;
        }

        let input = line.trim();
        if input == EXIT_TOKEN {
            debug!("player exited without playing");
            self.state = State::Terminated;
            return Reply::Exit;
        }
        if input == HELP_TOKEN {
            return Reply::Help;
        }

        match input.parse::<usize>() {
            Ok(choice) if (1..=self.move_set().len()).contains(&choice) => {
                Reply::Round(self.resolve(choice - 1))
            }
            _ => Reply::Invalid {
                input: input.to_string(),
            },
        }
    }

    /// Resolve the round: score it, then (and only then) reveal the key.
    fn resolve(&mut self, player_index: usize) -> RoundResult {
        self.state = State::Resolved;

        let player_move = self
            .move_set()
            .get(player_index)
            .expect("choice validated against move set length")
            .to_string();
        let outcome = self.rules.outcome_by_index(player_index, self.computer_index);

        let handler = self
            .handler
            .take()
            .expect("commitment held until the single resolve");
        let computer_move = handler.move_name().to_string();
        let key = handler.reveal();
        info!(%outcome, "round resolved, key revealed");

        RoundResult {
            player_move,
            computer_move,
            outcome,
            key,
        }
    }
}
