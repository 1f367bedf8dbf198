//  Errors.

use thiserror::Error;

/// An attempt to access a bit at, or beyond, the length of a bit store.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
#[error("index {index} is out of bounds for a bit set of length {len}")]
pub struct CapacityError {
    /// The offending index.
    pub index: u64,
    /// The length of the bit store at the time of the access.
    pub len: u64,
}

/// An error in decoding a bit store from its serialized form.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The number of words doesn't match the number required by the length.
    #[error("length {len} requires {expected} words, but {actual} were supplied")]
    LengthMismatch {
        /// The encoded length, in bits.
        len: u64,
        /// The number of words required by `len`.
        expected: u64,
        /// The number of words supplied.
        actual: u64,
    },
    /// The byte form is not a whole number of 8 bytes blocks, or lacks the length block.
    #[error("invalid byte length {actual}, expected 8 bytes of length followed by 8 bytes per word")]
    InvalidByteLength {
        /// The number of bytes supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_display() {
        let error = CapacityError { index: 8, len: 8 };

        assert_eq!("index 8 is out of bounds for a bit set of length 8", error.to_string());
    }

    #[test]
    fn decode_display() {
        let error = DecodeError::LengthMismatch {
            len: 65,
            expected: 2,
            actual: 0,
        };

        assert_eq!("length 65 requires 2 words, but 0 were supplied", error.to_string());
    }
} // mod tests
