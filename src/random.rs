use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::RngCore;
use rand_core::SeedableRng;

/// Source of random field elements for coefficient generation
///
/// Implementations must return values distributed uniformly over
/// `[0, bound)`; plain reduction of a wider draw modulo `bound` would skew
/// the distribution.
pub trait RandomSource {
    /// Returns a uniform value in `[0, bound)`. `bound` must be nonzero.
    fn next_below(&mut self, bound: &BigUint) -> BigUint;
}

/// Default random source: ChaCha20 CSPRNG seeded from the operating system
///
/// Samples by drawing exactly as many bytes as the bound occupies, masking
/// the excess top bits and retrying until the candidate falls below the
/// bound (rejection sampling, so no modulo bias).
pub struct ChaChaRandom {
    rng: ChaCha20Rng,
}

impl ChaChaRandom {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::try_from_rng(&mut OsRng).unwrap(),
        }
    }
}

impl Default for ChaChaRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ChaChaRandom {
    fn next_below(&mut self, bound: &BigUint) -> BigUint {
        debug_assert!(!bound.is_zero());
        let bits = bound.bits();
        let byte_count = bits.div_ceil(8) as usize;
        let excess_bits = (byte_count as u64 * 8 - bits) as u32;

        let mut buffer = vec![0u8; byte_count];
        loop {
            self.rng.fill_bytes(&mut buffer);
            buffer[0] &= 0xffu8 >> excess_bits;
            let candidate = BigUint::from_bytes_be(&buffer);
            if &candidate < bound {
                return candidate;
            }
        }
    }
}
