use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::codec::ShareString;
use crate::config::{self, Config};
use crate::error::{Result, ShamirError};
use crate::finite_field::PrimeField;
use crate::random::{ChaChaRandom, RandomSource};

/// Threshold secret sharing over a prime field
///
/// A secret is split into `total_shares` printable share strings of which
/// any `threshold` reconstruct it exactly; fewer reveal nothing. The secret
/// is processed in fixed-width byte chunks, each treated as one element of
/// the prime field matching the chunk size.
///
/// # Example
/// ```
/// use prime_shamir::SecretSharing;
///
/// let mut scheme = SecretSharing::builder(3, 2).build().unwrap();
/// let shares = scheme.share(b"AB").unwrap();
/// assert_eq!(shares.len(), 3);
///
/// let recovered = SecretSharing::recover(&shares[0..2]).unwrap();
/// assert_eq!(recovered, b"AB");
/// ```
pub struct SecretSharing {
    /// Total number of shares to generate
    total_shares: usize,
    /// Minimum number of shares needed for recovery
    threshold: usize,
    /// Configuration options for the sharing scheme
    config: Config,
    /// Source of random polynomial coefficients
    random: Box<dyn RandomSource>,
}

/// Builder for creating [`SecretSharing`] instances with custom configuration
///
/// # Example
/// ```
/// use prime_shamir::{Config, SecretSharing};
///
/// let config = Config::new().with_chunk_size(2).unwrap();
/// let scheme = SecretSharing::builder(5, 3)
///     .with_config(config)
///     .build()
///     .unwrap();
/// ```
pub struct SecretSharingBuilder {
    total_shares: usize,
    threshold: usize,
    config: Config,
    random: Option<Box<dyn RandomSource>>,
}

impl SecretSharingBuilder {
    /// Creates a new builder with the specified parameters and default configuration
    pub fn new(total_shares: usize, threshold: usize) -> Self {
        Self {
            total_shares,
            threshold,
            config: Config::default(),
            random: None,
        }
    }

    /// Sets a custom configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Injects a random source; the default is a ChaCha20 generator seeded
    /// from the operating system
    pub fn with_random_source(mut self, source: Box<dyn RandomSource>) -> Self {
        self.random = Some(source);
        self
    }

    /// Builds the [`SecretSharing`] instance with validation
    ///
    /// # Errors
    /// Returns `ShamirError` if `total_shares` is 0, `threshold` is 0 or
    /// exceeds `total_shares`, the share count does not fit the largest
    /// supported field, or configuration validation fails.
    pub fn build(self) -> Result<SecretSharing> {
        if self.total_shares == 0 {
            return Err(ShamirError::InvalidShareCount(self.total_shares));
        }
        if self.threshold == 0 {
            return Err(ShamirError::InvalidThreshold(self.threshold));
        }
        if self.threshold > self.total_shares {
            return Err(ShamirError::ThresholdTooLarge {
                threshold: self.threshold,
                total_shares: self.total_shares,
            });
        }

        self.config.validate()?;
        // The share count must leave room below the prime for distinct x values
        config::chunk_size_for(self.total_shares, self.config.chunk_size)?;

        Ok(SecretSharing {
            total_shares: self.total_shares,
            threshold: self.threshold,
            config: self.config,
            random: self
                .random
                .unwrap_or_else(|| Box::new(ChaChaRandom::new())),
        })
    }
}

impl SecretSharing {
    /// Creates a builder for configuring a [`SecretSharing`] instance
    pub fn builder(total_shares: usize, threshold: usize) -> SecretSharingBuilder {
        SecretSharingBuilder::new(total_shares, threshold)
    }

    /// Splits a secret into `total_shares` share strings
    ///
    /// The secret is padded up to a multiple of the chunk size, each chunk
    /// becomes the constant term of a fresh random polynomial of degree
    /// `threshold - 1`, and every share carries the polynomial values at its
    /// sequence number together with the metadata needed for recovery.
    ///
    /// # Example
    /// ```
    /// use prime_shamir::SecretSharing;
    ///
    /// let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
    /// let shares = scheme.share(b"secret data").unwrap();
    /// assert_eq!(shares.len(), 5);
    /// ```
    pub fn share(&mut self, secret: &[u8]) -> Result<Vec<String>> {
        let chunk_size = config::chunk_size_for(self.total_shares, self.config.chunk_size)?;
        let prime = config::prime_for(chunk_size)?;
        let field = PrimeField::new(prime.clone());

        let pad_count = (chunk_size - secret.len() % chunk_size) % chunk_size;
        let mut padded = secret.to_vec();
        padded.resize(secret.len() + pad_count, 0);

        let chunk_count = padded.len() / chunk_size;
        let mut share_values: Vec<Vec<BigUint>> =
            vec![Vec::with_capacity(chunk_count); self.total_shares];

        for chunk in padded.chunks(chunk_size) {
            let mut coefficients = self.generate_coefficients(&field);
            coefficients.push(BigUint::from_bytes_le(chunk));

            for (i, values) in share_values.iter_mut().enumerate() {
                values.push(evaluate(&field, i + 1, &coefficients));
            }
        }

        #[cfg(feature = "zeroize")]
        padded.zeroize();

        let shares = share_values
            .into_iter()
            .enumerate()
            .map(|(i, values)| {
                ShareString {
                    chunk_size,
                    threshold: self.threshold,
                    index: (i + 1) as u64,
                    values,
                    pad_count,
                }
                .assemble()
            })
            .collect();

        Ok(shares)
    }

    /// Recovers the secret from a set of share strings
    ///
    /// The chunk size, threshold and padding length are read from the shares
    /// themselves. At least `threshold` shares are required; all of them
    /// must stem from the same sharing operation.
    ///
    /// # Errors
    /// Returns `ShamirError` if the share list is empty, a share string is
    /// malformed, fewer shares than the encoded threshold are supplied, the
    /// shares disagree on chunk size, threshold or encoded length, or two
    /// shares carry the same sequence number.
    ///
    /// # Example
    /// ```
    /// use prime_shamir::SecretSharing;
    ///
    /// let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
    /// let shares = scheme.share(b"data").unwrap();
    ///
    /// let secret = SecretSharing::recover(&shares[2..5]).unwrap();
    /// assert_eq!(secret, b"data");
    /// ```
    pub fn recover(shares: &[String]) -> Result<Vec<u8>> {
        if shares.is_empty() {
            return Err(ShamirError::NoShares);
        }

        let parsed = shares
            .iter()
            .map(|share| ShareString::parse(share))
            .collect::<Result<Vec<_>>>()?;

        let first = &parsed[0];
        let threshold = first.threshold;
        if parsed.len() < threshold {
            return Err(ShamirError::InsufficientShares {
                needed: threshold,
                got: parsed.len(),
            });
        }

        for share in &parsed[1..] {
            if share.chunk_size != first.chunk_size || share.threshold != threshold {
                return Err(ShamirError::IncompatibleShares);
            }
            if share.values.len() != first.values.len() {
                return Err(ShamirError::InconsistentShareLength);
            }
        }

        // Explicit distinct-x precondition; interpolation would only flag a
        // repeat indirectly through an incidental zero coefficient
        for i in 0..parsed.len() {
            for j in (i + 1)..parsed.len() {
                if parsed[i].index == parsed[j].index {
                    return Err(ShamirError::DuplicateShareIndex(parsed[i].index));
                }
            }
        }

        let prime = config::prime_for(first.chunk_size)?;
        let field = PrimeField::new(prime.clone());

        let selected = &parsed[..threshold];
        let xs: Vec<u64> = selected.iter().map(|share| share.index).collect();
        let coefficients = reverse_coefficients(&field, &xs)?;

        let mut secret = join_secret(&field, &coefficients, selected, first.chunk_size);
        secret.truncate(secret.len() - first.pad_count);
        Ok(secret)
    }

    /// Draws `threshold - 1` random nonzero field elements.
    fn generate_coefficients(&mut self, field: &PrimeField) -> Vec<BigUint> {
        (1..self.threshold)
            .map(|_| loop {
                // A zero draw would lower the polynomial degree; retry
                let candidate = self.random.next_below(field.prime());
                if !candidate.is_zero() {
                    break candidate;
                }
            })
            .collect()
    }
}

/// Evaluates the polynomial at `x` using Horner's method
///
/// Coefficients are ordered highest-degree term first, ending with the
/// chunk's constant term.
fn evaluate(field: &PrimeField, x: usize, coefficients: &[BigUint]) -> BigUint {
    let x = BigUint::from(x);
    coefficients
        .iter()
        .fold(BigUint::zero(), |y, c| (y * &x + c) % field.prime())
}

/// Computes the reconstruction weights for the points `xs`
///
/// For each index `i` this is the product over all `j != i` of
/// `-x_j / (x_i - x_j)` in the field, i.e. the Lagrange basis polynomial
/// evaluated at zero.
fn reverse_coefficients(field: &PrimeField, xs: &[u64]) -> Result<Vec<BigUint>> {
    let mut coefficients = Vec::with_capacity(xs.len());

    for (i, &x_i) in xs.iter().enumerate() {
        let mut product = BigUint::one();
        for (j, &x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            let denominator = BigInt::from(x_i) - BigInt::from(x_j);
            let inverse = field
                .inverse(&denominator)
                .map_err(|_| ShamirError::DuplicateShareIndex(x_i))?;
            let step = -BigInt::from(product * x_j * inverse);
            product = field.modulo(&step);
        }
        coefficients.push(product);
    }

    Ok(coefficients)
}

/// Recombines chunk values into secret bytes
///
/// Each chunk is the weighted sum of the share values at that chunk index,
/// decomposed into `chunk_size` bytes little-endian.
fn join_secret(
    field: &PrimeField,
    coefficients: &[BigUint],
    shares: &[ShareString],
    chunk_size: usize,
) -> Vec<u8> {
    let chunk_count = shares[0].values.len();
    let mut secret = Vec::with_capacity(chunk_count * chunk_size);

    for chunk in 0..chunk_count {
        let mut sum = BigUint::zero();
        for (share, coefficient) in shares.iter().zip(coefficients) {
            sum = (sum + &share.values[chunk] * coefficient) % field.prime();
        }
        let mut bytes = sum.to_bytes_le();
        bytes.resize(chunk_size, 0);
        secret.extend_from_slice(&bytes);
    }

    secret
}
