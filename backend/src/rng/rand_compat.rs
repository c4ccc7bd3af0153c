//! `rand_core` integration
//!
//! Lets the generator drive anything in the `rand` ecosystem. Seeding keeps
//! the big-endian byte mapping of [`Xoshiro256::from_seed`], so a seed stored
//! by one side reproduces the same sequence on the other.

use rand_core::{Error, RngCore, SeedableRng};

use super::xoshiro::Xoshiro256;

impl RngCore for Xoshiro256 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Xoshiro256::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoshiro256::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Xoshiro256::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Xoshiro256::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Xoshiro256 {
    type Seed = [u8; 32];

    fn from_seed(seed: [u8; 32]) -> Self {
        Xoshiro256::from_seed(seed)
    }

    /// SplitMix64 expansion rather than rand_core's PCG default
    fn seed_from_u64(state: u64) -> Self {
        Xoshiro256::seed_from_u64(state)
    }
}
