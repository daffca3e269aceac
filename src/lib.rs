//! Shamir's Secret Sharing over prime fields with compact printable shares
//!
//! A secret byte sequence is split into `n` share strings such that any
//! `t` of them reconstruct it exactly, while fewer than `t` reveal nothing.
//! The secret is processed in chunks of 1 to 7 bytes, each chunk treated as
//! an element of the prime field matching the chunk size, and the resulting
//! polynomial values are base-encoded into a compact share alphabet. The
//! chunk size grows automatically when the share count outgrows the field.
//!
//! # Quick Start
//!
//! ```
//! use prime_shamir::SecretSharing;
//!
//! // Create a scheme with 5 shares and threshold 3
//! let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
//!
//! // Split a secret into printable share strings
//! let shares = scheme.share(b"my secret data").unwrap();
//! assert_eq!(shares.len(), 5);
//!
//! // Any 3 shares recover the secret
//! let recovered = SecretSharing::recover(&shares[1..4]).unwrap();
//! assert_eq!(recovered, b"my secret data");
//! ```

mod codec;
mod config;
mod error;
mod finite_field;
mod random;
mod shamir;

pub use codec::{DECIMAL, PAD_MARKER, SHARE_ALPHABET, convert_base};
pub use config::{Config, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
pub use error::{Result, ShamirError};
pub use finite_field::PrimeField;
pub use random::{ChaChaRandom, RandomSource};
pub use shamir::{SecretSharing, SecretSharingBuilder};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        ChaChaRandom, Config, RandomSource, Result, SecretSharing, SecretSharingBuilder,
        ShamirError,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() -> Result<()> {
        let secret = "Wichtig: streng geheime Zutatenliste 🔑".as_bytes();

        let mut scheme = SecretSharing::builder(5, 3).build()?;
        let shares = scheme.share(secret)?;
        assert_eq!(shares.len(), 5);

        // Shares are printable and drawn from the alphabet plus the pad marker
        for share in &shares {
            assert!(
                share
                    .chars()
                    .all(|c| SHARE_ALPHABET.contains(c) || c == PAD_MARKER)
            );
        }

        let recovered = SecretSharing::recover(&shares[0..3])?;
        assert_eq!(recovered, secret);
        Ok(())
    }

    #[test]
    fn test_workflow_with_explicit_chunk_size() -> Result<()> {
        let config = Config::new().with_chunk_size(4)?;
        let mut scheme = SecretSharing::builder(3, 2).with_config(config).build()?;

        let shares = scheme.share(b"wide field")?;
        assert_eq!(SecretSharing::recover(&shares[1..3])?, b"wide field");
        Ok(())
    }

    #[test]
    fn test_error_handling() {
        assert!(matches!(
            SecretSharing::builder(2, 3).build(),
            Err(ShamirError::ThresholdTooLarge { .. })
        ));

        let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
        let shares = scheme.share(b"test").unwrap();
        assert!(matches!(
            SecretSharing::recover(&shares[0..2]),
            Err(ShamirError::InsufficientShares { .. })
        ));
    }
}
