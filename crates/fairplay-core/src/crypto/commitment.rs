//! Commitment and SecretKey for the commit-reveal scheme.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// 256-bit HMAC key, generated fresh for each session and never reused
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Draw a new random key from a cryptographically secure source
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex rendering, the form shown to the player at reveal
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the full key through Debug
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// Commitment = HMAC-SHA-256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Compute the keyed digest of a move name
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC-SHA-256 accepts keys of any length");
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move name produce this commitment
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        *self == Self::new(key, move_name)
    }

    /// Uppercase hex rendering, the form published to the player
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Owns the {key, move, digest} triple for one session.
///
/// The digest is computed exactly once, at construction, before anything is
/// shown to the player. `reveal` consumes the handler, so the key can be
/// disclosed at most once; callers must not invoke it until the player's move
/// has been captured, or the fairness guarantee is void.
pub struct CommitmentHandler {
    key: SecretKey,
    move_name: String,
    commitment: Commitment,
}

impl CommitmentHandler {
    /// Bind a freshly drawn key to `move_name`
    pub fn commit<R: RngCore + CryptoRng>(rng: &mut R, move_name: &str) -> Self {
        let key = SecretKey::random(rng);
        let commitment = Commitment::new(&key, move_name);
        Self {
            key,
            move_name: move_name.to_string(),
            commitment,
        }
    }

    /// The digest, safe to publish before the player chooses
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The committed move name
    pub fn move_name(&self) -> &str {
        &self.move_name
    }

    /// Disclose the key, consuming the handler
    pub fn reveal(self) -> SecretKey {
        self.key
    }
}

impl fmt::Debug for CommitmentHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The move stays hidden until reveal; only the digest is public
        f.debug_struct("CommitmentHandler")
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_commitment_verification() {
        let key = SecretKey::random(&mut rng());
        let commitment = Commitment::new(&key, "rock");

        assert!(commitment.verify(&key, "rock"));
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = SecretKey::random(&mut rng());
        let commitment1 = Commitment::new(&key, "rock");
        let commitment2 = Commitment::new(&key, "paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let mut r = rng();
        let key1 = SecretKey::random(&mut r);
        let key2 = SecretKey::random(&mut r);
        let commitment1 = Commitment::new(&key1, "rock");
        let commitment2 = Commitment::new(&key2, "rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = SecretKey::random(&mut rng());
        let commitment = Commitment::new(&key, "rock");

        assert!(!commitment.verify(&key, "paper"));
    }

    #[test]
    fn test_tampered_key_fails_verification() {
        let key = SecretKey::random(&mut rng());
        let commitment = Commitment::new(&key, "rock");

        let mut bytes = *key.as_bytes();
        bytes[0] ^= 0x01;
        let tampered = SecretKey::from_bytes(bytes);

        assert!(!commitment.verify(&tampered, "rock"));
    }

    #[test]
    fn test_tampered_digest_fails_verification() {
        let key = SecretKey::random(&mut rng());
        let commitment = Commitment::new(&key, "rock");

        let mut bytes = *commitment.as_bytes();
        bytes[31] ^= 0x01;
        let tampered = Commitment::from_bytes(bytes);

        assert!(!tampered.verify(&key, "rock"));
    }

    #[test]
    fn test_handler_round_trip() {
        let handler = CommitmentHandler::commit(&mut rng(), "scissors");
        let digest = *handler.commitment();
        assert_eq!(handler.move_name(), "scissors");

        let key = handler.reveal();
        assert!(digest.verify(&key, "scissors"));
        assert!(!digest.verify(&key, "rock"));
    }

    #[test]
    fn test_sequential_handlers_use_distinct_keys() {
        let mut r = rng();
        let a = CommitmentHandler::commit(&mut r, "rock");
        let b = CommitmentHandler::commit(&mut r, "rock");
        assert_ne!(a.commitment(), b.commitment());
        assert_ne!(a.reveal(), b.reveal());
    }

    #[test]
    fn test_hex_rendering_is_uppercase() {
        let key = SecretKey::random(&mut rng());
        let commitment = Commitment::new(&key, "rock");

        for s in [key.to_hex(), commitment.to_hex(), commitment.to_string()] {
            assert_eq!(s.len(), 64);
            assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_known_hmac_vector() {
        // HMAC-SHA-256 with an all-zero 32-byte key over "rock"
        let key = SecretKey::from_bytes([0u8; 32]);
        let commitment = Commitment::new(&key, "rock");
        assert_eq!(
            commitment.to_hex(),
            "499FC39BBA1E0B079B0861E276E806B344B1C2E835A4EF73A34B64286FB6588A"
        );
    }
}
