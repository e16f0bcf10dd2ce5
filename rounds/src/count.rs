//! Counting the rounds of the consecutive-value deletion process.
//!
//! Starting from `1`, values are removed in increasing order by sweeping left to right over the
//! sequence. A sweep continues from `v` to `v + 1` as long as `v + 1` lies to the right of `v`;
//! otherwise the sweep ends and the next one starts back at the left, at `v + 1`. Each sweep is a
//! round.
//!
//! Simulating the sweeps against a shrinking list costs `O(n)` per removal. Whether `v + 1` needs
//! a new sweep depends only on the original positions of `v` and `v + 1`, though, so one pass over
//! a position table answers the question for every value at once.

use std::ops::RangeInclusive;

use crate::error::RoundsError;
use crate::permutation::PositionTable;

/// Number of rounds needed to remove every value of `sequence`.
///
/// Returns an error if `sequence` is not a permutation of `1 ..= sequence.len()`. The empty
/// sequence needs no rounds.
///
/// # Examples
///
/// ```
/// use rounds::count_rounds;
///
/// assert_eq!(count_rounds(&[1, 2, 3, 4]), Ok(1));
/// assert_eq!(count_rounds(&[1, 3, 2, 4]), Ok(2));
/// assert_eq!(count_rounds(&[2, 1, 4, 7, 5, 3, 6, 8]), Ok(4));
/// assert!(count_rounds(&[1, 3]).is_err());
/// ```
pub fn count_rounds(sequence: &[usize]) -> Result<usize, RoundsError> {
    let positions = PositionTable::build(sequence)?;
    Ok(rounds_in(&positions))
}

/// Counts rounds from an already validated position table.
pub(crate) fn rounds_in(positions: &PositionTable) -> usize {
    if positions.is_empty() {
        return 0;
    }
    let mut rounds = 1;
    for value in 2 ..= positions.len() {
        if positions[value] < positions[value - 1] {
            rounds += 1;
        }
    }
    rounds
}

/// The rounds themselves, as ranges of the consecutive values each one removes.
///
/// The ranges are in increasing order and together cover `1 ..= sequence.len()`.
///
/// # Examples
///
/// ```
/// use rounds::round_ranges;
///
/// let ranges = round_ranges(&[2, 1, 4, 7, 5, 3, 6, 8]).unwrap();
/// assert_eq!(ranges, vec![1..=1, 2..=3, 4..=6, 7..=8]);
/// ```
pub fn round_ranges(sequence: &[usize]) -> Result<Vec<RangeInclusive<usize>>, RoundsError> {
    let positions = PositionTable::build(sequence)?;
    let mut ranges = Vec::new();
    let mut starts = positions.round_starts().peekable();
    while let Some(start) = starts.next() {
        let end = starts.peek().map(|next| next - 1).unwrap_or(positions.len());
        ranges.push(start ..= end);
    }
    Ok(ranges)
}
