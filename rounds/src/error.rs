//! Errors reported when an input is not a permutation of `1 ..= n`.

use std::num::ParseIntError;

/// Reasons a sequence or an operation on it was rejected.
///
/// A missing value always shows up as one of the other two sequence errors: with `n` slots and no
/// duplicates, a value absent from `1 ..= n` forces some slot to hold a value outside the range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundsError {
    /// A value lies outside `1 ..= len`.
    #[error("value {value} at index {index} is outside 1..={len}")]
    OutOfRange {
        /// The offending value.
        value: usize,
        /// Its index in the sequence.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// A value occurs more than once.
    #[error("value {value} occurs at both index {first} and index {second}")]
    Duplicate {
        /// The repeated value.
        value: usize,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the second occurrence.
        second: usize,
    },
    /// A token of a textual permutation is not an unsigned integer.
    #[error("could not interpret {token:?} as a value: {source}")]
    Parse {
        /// The token as it appeared in the text.
        token: String,
        /// The underlying integer parse error.
        #[source]
        source: ParseIntError,
    },
    /// A swap names a position past the end of the sequence.
    #[error("swap position {index} is outside a sequence of length {len}")]
    SwapOutOfRange {
        /// The offending position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}
