use thiserror::Error;

/// Error type for prime-field secret sharing operations
#[derive(Error, Debug)]
pub enum ShamirError {
    /// Invalid total shares count (must be >= 1)
    #[error("Invalid share count {0}")]
    InvalidShareCount(usize),

    /// Invalid threshold value (must be 1 <= threshold <= total_shares)
    #[error("Invalid threshold value {0}")]
    InvalidThreshold(usize),

    /// Threshold exceeds total shares
    #[error("Threshold {threshold} exceeds total shares {total_shares}")]
    ThresholdTooLarge {
        threshold: usize,
        total_shares: usize,
    },

    /// Chunk size outside the supported range
    #[error("Chunk size {0} is outside the supported range 1..=7")]
    ChunkSizeOutOfRange(usize),

    /// Explicitly requested chunk size cannot address the share count
    #[error("Chunk size {requested} is too small for the share count (needs at least {required})")]
    ChunkSizeTooSmall { requested: usize, required: usize },

    /// Share count exceeds the largest supported prime field
    #[error("Share count {shares} exceeds the largest supported field ({max} shares)")]
    ShareCountTooLarge { shares: usize, max: u64 },

    /// Pad marker must stay outside the share alphabet
    #[error("Pad marker collides with the share alphabet")]
    PadMarkerCollision,

    /// Empty share list passed to recovery
    #[error("No shares given")]
    NoShares,

    /// Insufficient shares for reconstruction
    #[error("Need at least {needed} shares, got {got}")]
    InsufficientShares { needed: usize, got: usize },

    /// Shares disagree on chunk size or threshold
    #[error("Given shares are incompatible")]
    IncompatibleShares,

    /// Shares disagree on encoded value length
    #[error("Given shares vary in encoded length")]
    InconsistentShareLength,

    /// Share string does not follow the share grammar
    #[error("Invalid share format")]
    InvalidShareFormat,

    /// Symbol outside the active alphabet during base conversion
    #[error("Symbol {0:?} does not belong to the alphabet")]
    UnknownSymbol(char),

    /// Two shares carry the same sequence number
    #[error("Duplicate share sequence number {0}")]
    DuplicateShareIndex(u64),

    /// Non-invertible value during field inversion
    #[error("Value has no multiplicative inverse modulo the field prime")]
    NonInvertible,
}

pub type Result<T> = std::result::Result<T, ShamirError>;
