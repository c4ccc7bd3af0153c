//! Checkpoint - Save/Load Generator State
//!
//! Enables serialization and deserialization of a generator mid-sequence
//! for pause/resume functionality.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact sequence
//! - **Integrity**: A snapshot whose state does not match its digest is rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::Xoshiro256;

/// Checkpoint errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot digest mismatch: expected {expected}, computed {actual}")]
    DigestMismatch { expected: String, actual: String },
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Raw state words (s0, s1, s2, s3)
    pub state: [u64; 4],

    /// SHA256 of the big-endian state bytes
    pub digest: String,
}

impl GeneratorSnapshot {
    /// Capture the current state of `rng`
    pub fn capture(rng: &Xoshiro256) -> Self {
        Self {
            state: rng.state(),
            digest: compute_state_digest(rng),
        }
    }

    /// Rebuild the generator, verifying the digest first
    pub fn restore(&self) -> Result<Xoshiro256, CheckpointError> {
        let rng = Xoshiro256::from_state(self.state);
        let actual = compute_state_digest(&rng);
        if actual != self.digest {
            return Err(CheckpointError::DigestMismatch {
                expected: self.digest.clone(),
                actual,
            });
        }

        log::debug!("restored generator from snapshot {}", &self.digest[..12]);
        Ok(rng)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute SHA256 hash of the generator state
///
/// Hashes the same big-endian bytes that [`Xoshiro256::from_seed`] reads, so
/// the digest is identical on every platform.
pub fn compute_state_digest(rng: &Xoshiro256) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rng.to_bytes());
    hex::encode(hasher.finalize())
}
