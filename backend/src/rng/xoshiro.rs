//! xoshiro256** random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes. It is NOT cryptographically secure.
//!
//! # Algorithm
//!
//! xoshiro256** keeps 256 bits of state in four u64 words and scrambles
//! word 1 with a multiply-rotate-multiply to produce each output. Period is
//! 2^256 - 1; the all-zero state is the single fixed point and yields zeros
//! forever.
//!
//! # Determinism
//!
//! Same 32 seed bytes → same sequence of random numbers, on every platform.
//! Seed bytes are read big-endian regardless of host byte order.
//!
//! # Parallel use
//!
//! A generator is a plain value owned by one thread. To hand out independent
//! streams, copy a root generator and [`Xoshiro256::jump`] each copy; every
//! jump skips 2^128 outputs, so the streams never overlap in practice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::conv;
use super::splitmix::SplitMix64;
use super::streams::Streams;

/// Jump polynomial for advancing 2^128 steps, applied LSB first, in order
pub const JUMP: [u64; 4] = [
    0x180E_C6D3_3CFD_0ABA,
    0xD5A6_1266_F0C9_392C,
    0xA958_2618_E03F_C9AA,
    0x39AB_DC45_29B1_661C,
];

/// Errors from bounded integer sampling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Empty range: min {min} must be less than max {max}")]
    Empty { min: i64, max: i64 },
}

#[inline(always)]
fn rotl(x: u64, k: u32) -> u64 {
    x.rotate_left(k)
}

/// Deterministic random number generator using xoshiro256**
///
/// # Example
/// ```
/// use xoshiro_core_rs::Xoshiro256;
///
/// let mut rng = Xoshiro256::from_seed([7u8; 32]);
/// let mut replay = Xoshiro256::from_seed([7u8; 32]);
/// let word = rng.next_u64();
/// assert_eq!(word, replay.next_u64());
///
/// let unit = rng.double_co();
/// assert!((0.0..1.0).contains(&unit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xoshiro256 {
    /// Internal state (s0, s1, s2, s3)
    s: [u64; 4],
}

impl Xoshiro256 {
    /// Create a generator from 32 seed bytes
    ///
    /// Each 8-byte group is one big-endian state word: byte 0 is the most
    /// significant byte of word 0. An all-zero seed is accepted but produces
    /// a generator that only ever returns 0.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256;
    ///
    /// let rng = Xoshiro256::from_seed([1u8; 32]);
    /// assert_eq!(rng.state()[0], 0x0101_0101_0101_0101);
    /// ```
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let mut rng = Self { s: [0; 4] };
        rng.reseed(seed);
        rng
    }

    /// Replace the state with one derived from 32 seed bytes
    pub fn reseed(&mut self, seed: [u8; 32]) {
        for (word, chunk) in self.s.iter_mut().zip(seed.chunks_exact(8)) {
            let mut be = [0u8; 8];
            be.copy_from_slice(chunk);
            *word = u64::from_be_bytes(be);
        }
    }

    /// Create a generator from a single u64, expanded through SplitMix64
    ///
    /// Never yields the all-zero state for any input.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_seed(SplitMix64::new(seed).seed_bytes())
    }

    /// Restore a generator from raw state words (for checkpointing/replay)
    pub fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }

    /// Get current state words (for checkpointing/replay)
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Current state as 32 bytes, the inverse of [`Xoshiro256::from_seed`]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.s.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Generate next random u64 value
    ///
    /// The output is scrambled from s1 before the state is mixed.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = rotl(s[1].wrapping_mul(5), 7).wrapping_mul(9);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = rotl(s[3], 45);

        result
    }

    /// Upper 32 bits of the next word
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Top bit of the next word
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }

    /// Random f32 in [0.0, 1.0), 2^24 equally likely values
    #[inline]
    pub fn float_co(&mut self) -> f32 {
        conv::float_co(self.next_u64())
    }

    /// Random f32 in [0.0, 1.0], both endpoints reachable
    #[inline]
    pub fn float_cc(&mut self) -> f32 {
        conv::float_cc(self.next_u64())
    }

    /// Random f64 in [0.0, 1.0), 2^53 equally likely values
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256;
    ///
    /// let mut rng = Xoshiro256::seed_from_u64(12345);
    /// let probability = rng.double_co();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    #[inline]
    pub fn double_co(&mut self) -> f64 {
        conv::double_co(self.next_u64())
    }

    /// Random f64 in [0.0, 1.0], both endpoints reachable
    #[inline]
    pub fn double_cc(&mut self) -> f64 {
        conv::double_cc(self.next_u64())
    }

    /// Generate random value in range [min, max)
    ///
    /// Uses rejection sampling, so every value in the range is equally
    /// likely. May consume more than one word.
    ///
    /// # Errors
    /// Returns [`RangeError::Empty`] if min >= max
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256;
    ///
    /// let mut rng = Xoshiro256::seed_from_u64(12345);
    /// let roll = rng.range(1, 7).unwrap();
    /// assert!((1..7).contains(&roll));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        if min >= max {
            return Err(RangeError::Empty { min, max });
        }

        let span = (i128::from(max) - i128::from(min)) as u64;
        // 2^64 mod span: words below this would bias the low residues
        let zone = span.wrapping_neg() % span;
        loop {
            let value = self.next_u64();
            if value >= zone {
                return Ok(min.wrapping_add((value % span) as i64));
            }
        }
    }

    /// Fill `dest` with random bytes, each word emitted big-endian
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Advance the state by 2^128 calls to [`Xoshiro256::next_u64`]
    ///
    /// Costs 256 steps. Used to carve one seed into non-overlapping
    /// subsequences.
    pub fn jump(&mut self) {
        let mut acc = [0u64; 4];
        for &poly in JUMP.iter() {
            for bit in 0..64 {
                if poly & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.next_u64();
            }
        }
        self.s = acc;
        log::trace!("jumped generator ahead by 2^128 steps");
    }

    /// Copy of this generator, jumped once
    pub fn jumped(&self) -> Self {
        let mut next = *self;
        next.jump();
        next
    }

    /// Infinite iterator of non-overlapping streams
    ///
    /// The first item is a copy of `self`; each following item is the
    /// previous one jumped once.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256;
    ///
    /// let root = Xoshiro256::seed_from_u64(42);
    /// let workers: Vec<Xoshiro256> = root.streams().take(4).collect();
    /// assert_eq!(workers[0], root);
    /// assert_eq!(workers[1], root.jumped());
    /// ```
    pub fn streams(&self) -> Streams {
        Streams::new(*self)
    }
}

impl Default for Xoshiro256 {
    /// Fixed non-zero state, identical to `seed_from_u64(0)`
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotl_inverse() {
        let values = [
            0u64,
            u64::MAX,
            0xAAAA_AAAA_AAAA_AAAA,
            0x5555_5555_5555_5555,
            0x0123_4567_89AB_CDEF,
        ];
        for &x in &values {
            for k in 1..64 {
                assert_eq!(rotl(rotl(x, k), 64 - k), x, "rotl({:#x}, {}) not invertible", x, k);
            }
        }
    }

    #[test]
    fn test_rotl_matches_shift_definition() {
        let x = 0x8000_0000_0000_0001u64;
        for k in 1..64 {
            assert_eq!(rotl(x, k), (x << k) | (x >> (64 - k)));
        }
    }

    #[test]
    fn test_reseed_overwrites_state() {
        let mut rng = Xoshiro256::seed_from_u64(99);
        rng.next_u64();
        rng.reseed([0x01; 32]);
        assert_eq!(rng, Xoshiro256::from_seed([0x01; 32]));
    }

    #[test]
    fn test_to_bytes_inverts_from_seed() {
        let seed: [u8; 32] = core::array::from_fn(|i| (i * 7 + 3) as u8);
        assert_eq!(Xoshiro256::from_seed(seed).to_bytes(), seed);
    }

    #[test]
    fn test_default_is_not_degenerate() {
        let rng = Xoshiro256::default();
        assert_ne!(rng.state(), [0; 4]);
        assert_eq!(rng, Xoshiro256::seed_from_u64(0));
    }

    #[test]
    fn test_range_empty() {
        let mut rng = Xoshiro256::seed_from_u64(12345);
        assert_eq!(rng.range(100, 50), Err(RangeError::Empty { min: 100, max: 50 }));
        assert_eq!(rng.range(7, 7), Err(RangeError::Empty { min: 7, max: 7 }));
    }

    #[test]
    fn test_range_full_i64_span() {
        let mut rng = Xoshiro256::seed_from_u64(12345);
        for _ in 0..1000 {
            let v = rng.range(i64::MIN, i64::MAX).unwrap();
            assert!(v < i64::MAX);
        }
    }

    #[test]
    fn test_fill_bytes_partial_word() {
        let mut a = Xoshiro256::seed_from_u64(5);
        let mut b = a;

        let mut buf = [0u8; 11];
        a.fill_bytes(&mut buf);

        let w0 = b.next_u64().to_be_bytes();
        let w1 = b.next_u64().to_be_bytes();
        assert_eq!(&buf[..8], &w0);
        assert_eq!(&buf[8..], &w1[..3]);
        assert_eq!(a, b, "partial word still consumes a full step");
    }

    #[test]
    fn test_next_u32_is_upper_half() {
        let mut a = Xoshiro256::seed_from_u64(8);
        let mut b = a;
        assert_eq!(a.next_u32(), (b.next_u64() >> 32) as u32);
    }

    #[test]
    fn test_next_bool_produces_both() {
        let mut rng = Xoshiro256::seed_from_u64(3);
        let trues = (0..1000).filter(|_| rng.next_bool()).count();
        assert!(trues > 400 && trues < 600, "unbalanced bools: {}", trues);
    }
}
