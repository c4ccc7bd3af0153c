//! Xoshiro Core - Rust Engine
//!
//! Fast, seedable, reproducible xoshiro256** random number generation for
//! simulations, games and Monte Carlo work. NOT cryptographically secure.
//!
//! # Architecture
//!
//! - **rng**: The generator, float conversions and jump-separated streams
//! - **seed**: 32-byte seed type with hex text form
//! - **config**: Serializable seed + stream configuration
//! - **checkpoint**: Save/restore generator state with integrity digest
//!
//! # Critical Invariants
//!
//! 1. Same seed bytes → same sequence on every platform (big-endian seeding)
//! 2. Core generator operations never fail and never allocate
//! 3. The all-zero state is degenerate and only ever outputs 0
//!
//! # Example
//! ```
//! use xoshiro_core_rs::Xoshiro256;
//!
//! let seed: [u8; 32] = core::array::from_fn(|i| i as u8);
//! let mut rng = Xoshiro256::from_seed(seed);
//! assert_eq!(rng.next_u64(), 0xCB61_F88F_25BC_5234);
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use config::{RngConfig, MAX_STREAM};
pub use rng::{RangeError, SplitMix64, Streams, Xoshiro256};
pub use seed::{Seed, SeedError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
