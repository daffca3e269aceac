//! Base conversion and the share string grammar
//!
//! A share string is laid out as
//!
//! ```text
//! chunkSizeTag (1 hex symbol)
//! || threshold      (base-encoded, width W)
//! || sequenceNumber (base-encoded, width W)
//! || chunkCount x y-value (base-encoded, width W each)
//! || trailing pad-marker run
//! ```
//!
//! where `W` is the number of alphabet symbols needed to write
//! `2^(8 * chunkSize)`, every field left-padded with the alphabet's zero
//! symbol. The pad-marker run records how many padding bytes were appended
//! to the secret before chunking.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::config::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::error::{Result, ShamirError};

/// Calculation base (decimal)
pub const DECIMAL: &str = "0123456789";

/// Target base symbols used in share strings
pub const SHARE_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJ";

/// Marker for padding bytes; must stay outside [`SHARE_ALPHABET`]
pub const PAD_MARKER: char = '=';

/// Decodes a string of `alphabet` symbols into its numeric value.
pub fn decode_value(input: &str, alphabet: &str) -> Result<BigUint> {
    let radix = BigUint::from(alphabet.chars().count());
    let mut value = BigUint::zero();
    for symbol in input.chars() {
        let digit = alphabet
            .chars()
            .position(|c| c == symbol)
            .ok_or(ShamirError::UnknownSymbol(symbol))?;
        value = value * &radix + digit;
    }
    Ok(value)
}

/// Encodes a numeric value as a string of `alphabet` symbols.
pub fn encode_value(value: &BigUint, alphabet: &str) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    let radix = BigUint::from(symbols.len());
    if value.is_zero() {
        return symbols[0].to_string();
    }

    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        // The remainder is below the radix, so it always fits a usize
        let digit = (&rest % &radix).to_usize().unwrap();
        digits.push(symbols[digit]);
        rest = &rest / &radix;
    }
    digits.iter().rev().collect()
}

/// Arbitrary-precision conversion of `number` between two symbol alphabets
///
/// # Example
/// ```
/// use prime_shamir::{convert_base, DECIMAL, SHARE_ALPHABET};
///
/// let encoded = convert_base("123456789", DECIMAL, SHARE_ALPHABET).unwrap();
/// let decoded = convert_base(&encoded, SHARE_ALPHABET, DECIMAL).unwrap();
/// assert_eq!(decoded, "123456789");
/// ```
pub fn convert_base(number: &str, from_alphabet: &str, to_alphabet: &str) -> Result<String> {
    if from_alphabet == to_alphabet {
        return Ok(number.to_string());
    }
    let value = decode_value(number, from_alphabet)?;
    Ok(encode_value(&value, to_alphabet))
}

/// Number of share-alphabet symbols needed for the largest chunk value
///
/// Defined as the width of `2^(8 * chunk_size)` in the share alphabet. The
/// table primes sit just above that bound and never need an extra symbol.
pub fn symbol_width(chunk_size: usize) -> usize {
    let bound = BigUint::one() << (8 * chunk_size);
    encode_value(&bound, SHARE_ALPHABET).chars().count()
}

/// Encodes a grammar field at the fixed width for its chunk size.
fn encode_field(value: &BigUint, width: usize) -> String {
    let digits = encode_value(value, SHARE_ALPHABET);
    let zero = SHARE_ALPHABET.as_bytes()[0] as char;
    let mut field = String::with_capacity(width);
    for _ in digits.chars().count()..width {
        field.push(zero);
    }
    field.push_str(&digits);
    field
}

/// Decoded form of one share string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShareString {
    /// Bytes per chunk, also selects the prime modulus
    pub chunk_size: usize,
    /// Minimum number of shares required for recovery
    pub threshold: usize,
    /// Sequence number (x-coordinate), starting at 1
    pub index: u64,
    /// One evaluated polynomial value per chunk
    pub values: Vec<BigUint>,
    /// Number of padding bytes appended to the secret before chunking
    pub pad_count: usize,
}

impl ShareString {
    /// Renders the share into its string form.
    pub fn assemble(&self) -> String {
        let width = symbol_width(self.chunk_size);
        let mut out = String::with_capacity(1 + (2 + self.values.len()) * width + self.pad_count);
        out.push_str(&format!("{:x}", self.chunk_size));
        out.push_str(&encode_field(&BigUint::from(self.threshold), width));
        out.push_str(&encode_field(&BigUint::from(self.index), width));
        for value in &self.values {
            out.push_str(&encode_field(value, width));
        }
        for _ in 0..self.pad_count {
            out.push(PAD_MARKER);
        }
        out
    }

    /// Parses a share string back into its fields.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim_end_matches(PAD_MARKER);
        let pad_count = input.chars().count() - trimmed.chars().count();

        let mut symbols = trimmed.chars();
        let tag = symbols.next().ok_or(ShamirError::InvalidShareFormat)?;
        let chunk_size = tag.to_digit(16).ok_or(ShamirError::InvalidShareFormat)? as usize;
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(ShamirError::InvalidShareFormat);
        }

        let width = symbol_width(chunk_size);
        let body: Vec<char> = symbols.collect();
        if body.len() < 2 * width || body.len() % width != 0 {
            return Err(ShamirError::InvalidShareFormat);
        }

        let field = |index: usize| -> String {
            body[index * width..(index + 1) * width].iter().collect()
        };
        let threshold = decode_value(&field(0), SHARE_ALPHABET)?
            .to_usize()
            .ok_or(ShamirError::InvalidShareFormat)?;
        let index = decode_value(&field(1), SHARE_ALPHABET)?
            .to_u64()
            .ok_or(ShamirError::InvalidShareFormat)?;
        if threshold == 0 || index == 0 {
            return Err(ShamirError::InvalidShareFormat);
        }

        let chunk_count = body.len() / width - 2;
        let mut values = Vec::with_capacity(chunk_count);
        for chunk in 0..chunk_count {
            values.push(decode_value(&field(2 + chunk), SHARE_ALPHABET)?);
        }

        // The splitter never pads a full chunk, nor an empty secret
        if pad_count >= chunk_size || (values.is_empty() && pad_count > 0) {
            return Err(ShamirError::InvalidShareFormat);
        }

        Ok(Self {
            chunk_size,
            threshold,
            index,
            values,
            pad_count,
        })
    }
}
