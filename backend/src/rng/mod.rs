//! Deterministic random number generation
//!
//! Uses the xoshiro256** algorithm for fast, deterministic random number generation.
//! CRITICAL: Same seed bytes produce the same sequence on every platform.

pub mod conv;
mod splitmix;
mod streams;
mod xoshiro;

#[cfg(feature = "rand_core")]
mod rand_compat;

pub use splitmix::SplitMix64;
pub use streams::Streams;
pub use xoshiro::{RangeError, Xoshiro256, JUMP};
