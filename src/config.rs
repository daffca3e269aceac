use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::codec::{PAD_MARKER, SHARE_ALPHABET};
use crate::error::{Result, ShamirError};

/// Smallest supported chunk size in bytes
pub const MIN_CHUNK_SIZE: usize = 1;
/// Largest supported chunk size in bytes
pub const MAX_CHUNK_SIZE: usize = 7;

/// Smallest prime exceeding the largest value representable in 1..=7 bytes
const PRIMES: [u64; MAX_CHUNK_SIZE] = [
    257,
    65_537,
    16_777_259,
    4_294_967_311,
    1_099_511_627_791,
    281_474_976_710_677,
    72_057_594_037_928_017,
];

static PRIME_TABLE: Lazy<[BigUint; MAX_CHUNK_SIZE]> = Lazy::new(|| PRIMES.map(BigUint::from));

/// Prime modulus for the given chunk size.
pub fn prime_for(chunk_size: usize) -> Result<&'static BigUint> {
    if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
        return Err(ShamirError::ChunkSizeOutOfRange(chunk_size));
    }
    Ok(&PRIME_TABLE[chunk_size - 1])
}

/// Picks the chunk size for a sharing operation
///
/// Returns the minimal chunk size whose prime leaves room for `shares`
/// distinct x-coordinates, or the explicitly `requested` size when that is
/// at least as large. A requested size below what `shares` needs, or outside
/// the supported range, is rejected.
pub fn chunk_size_for(shares: usize, requested: Option<usize>) -> Result<usize> {
    let required = PRIMES
        .iter()
        .position(|&prime| (shares as u64) < prime)
        .map(|i| i + 1)
        .ok_or(ShamirError::ShareCountTooLarge {
            shares,
            max: PRIMES[MAX_CHUNK_SIZE - 1] - 1,
        })?;

    match requested {
        None => Ok(required),
        Some(size) if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&size) => {
            Err(ShamirError::ChunkSizeOutOfRange(size))
        }
        Some(size) if size < required => Err(ShamirError::ChunkSizeTooSmall {
            requested: size,
            required,
        }),
        Some(size) => Ok(size),
    }
}

/// Configuration options for splitting
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicitly requested chunk size; `None` selects the minimal one
    pub(crate) chunk_size: Option<usize>,
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a fixed chunk size instead of the minimal one
    pub fn with_chunk_size(mut self, size: usize) -> Result<Self> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&size) {
            return Err(ShamirError::ChunkSizeOutOfRange(size));
        }
        self.chunk_size = Some(size);
        Ok(self)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if SHARE_ALPHABET.contains(PAD_MARKER) {
            return Err(ShamirError::PadMarkerCollision);
        }
        if let Some(size) = self.chunk_size {
            if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&size) {
                return Err(ShamirError::ChunkSizeOutOfRange(size));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_primes_exceed_byte_range() {
        for (i, prime) in PRIME_TABLE.iter().enumerate() {
            let max_chunk_value = (BigUint::one() << (8 * (i + 1))) - BigUint::one();
            assert!(*prime > max_chunk_value, "prime for {} bytes too small", i + 1);
        }
    }

    #[test]
    fn test_minimal_chunk_size_selection() {
        assert_eq!(chunk_size_for(1, None).unwrap(), 1);
        assert_eq!(chunk_size_for(256, None).unwrap(), 1);
        // 257 shares no longer fit below the 1-byte prime
        assert_eq!(chunk_size_for(257, None).unwrap(), 2);
        assert_eq!(chunk_size_for(300, None).unwrap(), 2);
        assert_eq!(chunk_size_for(65_537, None).unwrap(), 3);
    }

    #[test]
    fn test_requested_chunk_size_is_honored() {
        assert_eq!(chunk_size_for(5, Some(4)).unwrap(), 4);
        assert_eq!(chunk_size_for(300, Some(2)).unwrap(), 2);
    }

    #[test]
    fn test_requested_chunk_size_too_small() {
        assert!(matches!(
            chunk_size_for(300, Some(1)),
            Err(ShamirError::ChunkSizeTooSmall {
                requested: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_chunk_size_out_of_range() {
        assert!(matches!(
            chunk_size_for(5, Some(0)),
            Err(ShamirError::ChunkSizeOutOfRange(0))
        ));
        assert!(matches!(
            chunk_size_for(5, Some(8)),
            Err(ShamirError::ChunkSizeOutOfRange(8))
        ));
        assert!(prime_for(0).is_err());
        assert!(prime_for(8).is_err());
    }

    #[test]
    fn test_share_count_exceeding_largest_field() {
        let too_many = 72_057_594_037_928_017usize;
        assert!(matches!(
            chunk_size_for(too_many, None),
            Err(ShamirError::ShareCountTooLarge { .. })
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new().with_chunk_size(3).unwrap();
        assert_eq!(config.chunk_size, Some(3));
        assert!(config.validate().is_ok());
        assert!(Config::new().with_chunk_size(0).is_err());
    }
}
