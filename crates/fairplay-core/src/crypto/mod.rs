//! Cryptographic primitives for the commit-reveal protocol.
//!
//! This module provides:
//! - SecretKey: 256-bit single-use HMAC key
//! - Commitment: HMAC-SHA-256 digest binding the computer's move
//! - CommitmentHandler: owns the {key, move, digest} triple for one session

mod commitment;

pub use commitment::{Commitment, CommitmentHandler, SecretKey};
