//! Word-to-float conversions
//!
//! Pure mappings from one raw 64-bit word to a bounded float. The generator
//! methods (`float_co`, `double_cc`, ...) draw one word and pass it through
//! these, so crafted words can be used to check the interval endpoints.
//!
//! - `*_co`: closed-open `[0.0, 1.0)`, every output equally likely
//! - `*_cc`: closed-closed `[0.0, 1.0]`, more bits used, slight bias

/// 2^24, the number of distinct `float_co` outputs
const F32_CO_SCALE: f32 = 16777216.0;

/// 2^53, the number of distinct `double_co` outputs
const F64_CO_SCALE: f64 = 9007199254740992.0;

/// Top 24 bits of `word` as an f32 in `[0.0, 1.0)`
#[inline]
pub fn float_co(word: u64) -> f32 {
    (word >> 40) as f32 / F32_CO_SCALE
}

/// Top 32 bits of `word` as an f32 in `[0.0, 1.0]`
///
/// `u32::MAX as f32` rounds up to 2^32, and so do the largest inputs, so
/// `1.0` is reachable.
#[inline]
pub fn float_cc(word: u64) -> f32 {
    (word >> 32) as f32 / u32::MAX as f32
}

/// Top 53 bits of `word` as an f64 in `[0.0, 1.0)`
#[inline]
pub fn double_co(word: u64) -> f64 {
    (word >> 11) as f64 / F64_CO_SCALE
}

/// Full `word` as an f64 in `[0.0, 1.0]`
#[inline]
pub fn double_cc(word: u64) -> f64 {
    word as f64 / u64::MAX as f64
}
