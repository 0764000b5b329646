//! Uniform move selection from a cryptographically secure source.

use crate::moves::MoveSet;
use rand::{CryptoRng, Rng, RngCore};

/// Draw one move uniformly from `moves`.
///
/// The generator must be cryptographically secure: a predictable draw would
/// let the player guess the committed move before reveal, defeating the
/// commitment even with a sound MAC. The caller injects the source so tests
/// can substitute a seeded one.
pub fn select_move<'a, R>(rng: &mut R, moves: &'a MoveSet) -> (usize, &'a str)
where
    R: RngCore + CryptoRng,
{
    let index = rng.gen_range(0..moves.len());
    let name = moves.get(index).expect("index drawn from 0..len");
    (index, name)
}
