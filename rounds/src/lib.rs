//! Counting the rounds needed to remove `1, 2, ..., n` from a permutation.
//!
//! A round sweeps the sequence from left to right, removing consecutive values starting from the
//! smallest value not yet removed, and ends as soon as the next value lies behind the sweep. The
//! number of rounds depends only on the original positions of consecutive values: `v + 1` starts
//! a new round exactly when it sits to the left of `v`. The [`count_rounds`] function uses this to
//! count rounds in one linear pass over a value-to-position table, with no simulation.
//!
//! The same rule is also available as a differential dataflow in [`dataflow`], where the round
//! count is maintained incrementally as positions of values change.
//!
//! # Examples
//!
//! ```
//! use rounds::{count_rounds, Permutation, RoundsError};
//!
//! assert_eq!(count_rounds(&[4, 3, 2, 1]), Ok(4));
//!
//! let perm: Permutation = "2 1 4 7 5 3 6 8".parse().unwrap();
//! assert_eq!(perm.rounds(), 4);
//!
//! assert_eq!(
//!     count_rounds(&[1, 5]),
//!     Err(RoundsError::OutOfRange { value: 5, index: 1, len: 2 }),
//! );
//! ```

#![forbid(missing_docs)]

pub use crate::count::{count_rounds, round_ranges};
pub use crate::error::RoundsError;
pub use crate::permutation::{Permutation, PositionTable};

pub mod count;
pub mod dataflow;
pub mod error;
pub mod logging;
pub mod permutation;
