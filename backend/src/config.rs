//! Generator configuration
//!
//! Serializable description of where a generator starts: a root seed plus
//! the index of the jump-separated stream to use. Embedding applications
//! keep one of these per worker (or per agent) in their own config files.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::rng::Xoshiro256;
use crate::seed::Seed;

/// Largest stream index accepted when deserializing a config
///
/// Building stream `n` costs `n` jumps (256 steps each).
pub const MAX_STREAM: u64 = 1 << 16;

/// Generator configuration
///
/// # Example
/// ```
/// use xoshiro_core_rs::{RngConfig, Seed, Xoshiro256};
///
/// let config = RngConfig { seed: Seed::from_u64(12345), stream: 2 };
/// let rng = config.build();
///
/// let mut expected = Xoshiro256::seed_from_u64(12345);
/// expected.jump();
/// expected.jump();
/// assert_eq!(rng, expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RngConfig {
    /// Root seed
    pub seed: Seed,

    /// Stream index: number of jumps applied after seeding
    ///
    /// [`RngConfig::build`] is linear in this value. Serialized configs are
    /// limited to [`MAX_STREAM`].
    #[serde(default, deserialize_with = "bounded_stream")]
    pub stream: u64,
}

impl RngConfig {
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            stream: 0,
        }
    }

    /// Same seed, different stream
    pub fn with_stream(mut self, stream: u64) -> Self {
        self.stream = stream;
        self
    }

    /// Create the generator this config describes
    ///
    /// Costs one jump per stream index; stream `n` takes `256 * n` steps.
    pub fn build(&self) -> Xoshiro256 {
        if self.seed.is_degenerate() {
            log::warn!("building generator from all-zero seed; every output will be 0");
        }

        let mut rng = Xoshiro256::from(self.seed);
        for _ in 0..self.stream {
            rng.jump();
        }

        log::debug!("built generator for stream {}", self.stream);
        rng
    }
}

fn bounded_stream<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let stream = u64::deserialize(deserializer)?;
    if stream > MAX_STREAM {
        return Err(de::Error::custom(format!(
            "stream {} exceeds maximum {}",
            stream, MAX_STREAM
        )));
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_zero_is_plain_seed() {
        let config = RngConfig::new([3u8; 32]);
        assert_eq!(config.build(), Xoshiro256::from_seed([3u8; 32]));
    }

    #[test]
    fn test_stream_default_when_missing() {
        let json = r#"{"seed":"0101010101010101010101010101010101010101010101010101010101010101"}"#;
        let config: RngConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.stream, 0);
        assert_eq!(config.seed, Seed::new([1u8; 32]));
    }

    #[test]
    fn test_stream_limit_enforced_on_deserialize() {
        let seed = Seed::from_u64(1);
        let at_limit = format!(r#"{{"seed":"{}","stream":{}}}"#, seed, MAX_STREAM);
        let config: RngConfig = serde_json::from_str(&at_limit).unwrap();
        assert_eq!(config.stream, MAX_STREAM);

        let huge = format!(r#"{{"seed":"{}","stream":1000000000000000000}}"#, seed);
        let err = serde_json::from_str::<RngConfig>(&huge).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"), "unexpected error: {}", err);
    }

    #[test]
    fn test_with_stream_matches_streams_iterator() {
        let config = RngConfig::new(Seed::from_u64(9)).with_stream(3);
        let root = Xoshiro256::seed_from_u64(9);
        assert_eq!(Some(config.build()), root.streams().nth(3));
    }
}
