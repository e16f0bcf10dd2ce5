//! Permutations of `1 ..= n` and the value-to-position tables derived from them.
//!
//! Every operation in this crate first checks that its input holds each of `1 ..= n` exactly once.
//! The check happens while the position table is built, so validation and table construction
//! share a single pass over the sequence.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::RoundsError;

/// Marks a value whose position has not been recorded yet.
const UNSET: usize = usize::MAX;

/// Maps each value of a permutation to its zero-based index in the sequence.
///
/// Indexing with a value in `1 ..= len()` returns that value's position. As with slices, indexing
/// with any other value panics; use [`PositionTable::position`] for a checked lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    /// `positions[v - 1]` is the index of value `v`.
    positions: Vec<usize>,
}

impl PositionTable {
    /// Builds the table for `sequence`, rejecting anything that is not a permutation of `1 ..= n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rounds::{PositionTable, RoundsError};
    ///
    /// let table = PositionTable::build(&[3, 1, 2]).unwrap();
    /// assert_eq!(table.position(3), Some(0));
    /// assert_eq!(table[1], 1);
    ///
    /// let error = PositionTable::build(&[1, 1]).unwrap_err();
    /// assert_eq!(error, RoundsError::Duplicate { value: 1, first: 0, second: 1 });
    /// ```
    pub fn build(sequence: &[usize]) -> Result<Self, RoundsError> {
        let len = sequence.len();
        let mut positions = vec![UNSET; len];
        for (index, &value) in sequence.iter().enumerate() {
            if value == 0 || value > len {
                return Err(RoundsError::OutOfRange { value, index, len });
            }
            let slot = &mut positions[value - 1];
            if *slot != UNSET {
                return Err(RoundsError::Duplicate { value, first: *slot, second: index });
            }
            *slot = index;
        }
        Ok(PositionTable { positions })
    }

    /// The position of `value`, or `None` if it is outside `1 ..= len()`.
    pub fn position(&self, value: usize) -> Option<usize> {
        value.checked_sub(1).and_then(|slot| self.positions.get(slot)).copied()
    }

    /// Number of values in the permutation.
    pub fn len(&self) -> usize { self.positions.len() }

    /// True when the permutation has no values.
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Values at which a round begins, in increasing order.
    ///
    /// Value `1` always begins the first round. Any other value `v` begins a round when it sits to
    /// the left of `v - 1`.
    pub fn round_starts(&self) -> impl Iterator<Item = usize> + '_ {
        (1 ..= self.len()).filter(move |&value| value == 1 || self[value] < self[value - 1])
    }
}

impl Index<usize> for PositionTable {
    type Output = usize;
    fn index(&self, value: usize) -> &usize { &self.positions[value - 1] }
}

/// An owned sequence known to hold each of `1 ..= n` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    elements: Vec<usize>,
}

impl Permutation {
    /// Validates `elements` as a permutation of `1 ..= elements.len()`.
    pub fn new(elements: Vec<usize>) -> Result<Self, RoundsError> {
        PositionTable::build(&elements)?;
        Ok(Permutation { elements })
    }

    /// The ascending permutation `1, 2, ..., n`.
    pub fn identity(n: usize) -> Self {
        Permutation { elements: (1 ..= n).collect() }
    }

    /// The descending permutation `n, n-1, ..., 1`.
    pub fn reversed(n: usize) -> Self {
        Permutation { elements: (1 ..= n).rev().collect() }
    }

    /// The values in sequence order.
    pub fn as_slice(&self) -> &[usize] { &self.elements }

    /// Number of values.
    pub fn len(&self) -> usize { self.elements.len() }

    /// True for the empty permutation.
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// The position table of this permutation.
    pub fn positions(&self) -> PositionTable {
        let mut positions = vec![0; self.len()];
        for (index, &value) in self.elements.iter().enumerate() {
            positions[value - 1] = index;
        }
        PositionTable { positions }
    }

    /// Number of rounds needed to remove every value; see [`crate::count_rounds`].
    pub fn rounds(&self) -> usize {
        crate::count::rounds_in(&self.positions())
    }

    /// Exchanges the values at positions `left` and `right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rounds::Permutation;
    ///
    /// let mut perm = Permutation::identity(4);
    /// assert_eq!(perm.rounds(), 1);
    /// perm.swap(1, 2).unwrap();
    /// assert_eq!(perm.as_slice(), &[1, 3, 2, 4]);
    /// assert_eq!(perm.rounds(), 2);
    /// assert!(perm.swap(0, 4).is_err());
    /// ```
    pub fn swap(&mut self, left: usize, right: usize) -> Result<(), RoundsError> {
        let len = self.len();
        for index in [left, right] {
            if index >= len {
                return Err(RoundsError::SwapOutOfRange { index, len });
            }
        }
        self.elements.swap(left, right);
        Ok(())
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] { &self.elements }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self { permutation.elements }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = RoundsError;
    fn try_from(elements: Vec<usize>) -> Result<Self, RoundsError> { Permutation::new(elements) }
}

/// Parses values separated by whitespace and/or commas, e.g. `"2 1 4 3"` or `"[2, 1, 4, 3]"`.
///
/// Enclosing square brackets are accepted and ignored.
impl FromStr for Permutation {
    type Err = RoundsError;

    fn from_str(text: &str) -> Result<Self, RoundsError> {
        let text = text.trim();
        let text = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')).unwrap_or(text);
        let elements = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| token.parse().map_err(|source| RoundsError::Parse { token: token.to_string(), source }))
            .collect::<Result<Vec<usize>, _>>()?;
        Permutation::new(elements)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.elements.iter().enumerate() {
            if index > 0 { write!(f, ", ")?; }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
