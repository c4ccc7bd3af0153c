//! Seed - 32 bytes of caller entropy
//!
//! The seed is the only artifact needed to reproduce a sequence elsewhere.
//! In text form (config files, logs, CLI flags of embedding apps) it is
//! written as 64 hex digits, most significant byte first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::rng::{SplitMix64, Xoshiro256};

/// Seed parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("Seed must be 64 hex digits, got {len}")]
    InvalidLength { len: usize },

    #[error("Invalid hex digit at position {index}")]
    InvalidHex { index: usize },
}

/// Generator seed
///
/// # Example
/// ```
/// use xoshiro_core_rs::{Seed, Xoshiro256};
///
/// let seed: Seed = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
///     .parse()
///     .unwrap();
/// let rng = Xoshiro256::from(seed);
/// assert_eq!(rng.state()[0], 0x0001_0203_0405_0607);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed([u8; 32]);

impl Seed {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Expand a u64 through SplitMix64
    pub fn from_u64(value: u64) -> Self {
        Self(SplitMix64::new(value).seed_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// True for the all-zero seed, which makes the generator output only zeros
    pub fn is_degenerate(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl Default for Seed {
    /// Same non-zero seed as `Xoshiro256::default()`
    fn default() -> Self {
        Self::from_u64(0)
    }
}

impl From<[u8; 32]> for Seed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Seed> for Xoshiro256 {
    fn from(seed: Seed) -> Self {
        Xoshiro256::from_seed(seed.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(SeedError::InvalidLength { len: s.len() });
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { index, .. } => SeedError::InvalidHex { index },
            _ => SeedError::InvalidLength { len: s.len() },
        })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Seed {
    type Error = SeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENTIAL_HEX: &str =
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    fn sequential() -> [u8; 32] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Seed::new(sequential()).to_string(), SEQUENTIAL_HEX);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: Seed = SEQUENTIAL_HEX.to_uppercase().parse().unwrap();
        assert_eq!(seed.into_bytes(), sequential());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("abcd".parse::<Seed>(), Err(SeedError::InvalidLength { len: 4 }));
    }

    #[test]
    fn test_parse_reports_bad_digit_position() {
        let mut text = SEQUENTIAL_HEX.to_string();
        text.replace_range(5..6, "g");
        assert_eq!(text.parse::<Seed>(), Err(SeedError::InvalidHex { index: 5 }));
    }

    #[test]
    fn test_parse_rejects_multibyte_chars() {
        // 62 ascii digits + one 2-byte char = 64 bytes
        let text = format!("{}é", &SEQUENTIAL_HEX[..62]);
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<Seed>(), Err(SeedError::InvalidHex { index: 62 }));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let seed = Seed::new(sequential());
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{}\"", SEQUENTIAL_HEX));

        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }

    #[test]
    fn test_serde_rejects_bad_seed() {
        let result: Result<Seed, _> = serde_json::from_str("\"1234\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_u64_matches_generator_seeding() {
        let rng = Xoshiro256::from(Seed::from_u64(77));
        assert_eq!(rng, Xoshiro256::seed_from_u64(77));
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(Seed::new([0u8; 32]).is_degenerate());
        assert!(!Seed::from_u64(0).is_degenerate());
    }

    #[test]
    fn test_default_seed_is_not_degenerate() {
        assert!(!Seed::default().is_degenerate());
        assert_eq!(Xoshiro256::from(Seed::default()), Xoshiro256::default());
    }
}
