//! Compact textual notation for sets of integers.
//!
//! This crate parses strings such as `"1,3,4-5,8-11,12-18:2,25"` (single values,
//! inclusive intervals and strided intervals) into a canonical list of strided
//! intervals, and answers queries over the represented set without expanding it:
//!
//! - **Queries**: length, first/last, membership, value-to-index and index-to-value
//!   lookups, next-after stepping and sub-range extraction, all proportional to the
//!   number of intervals rather than the number of elements
//! - **Canonical form**: equivalent inputs are compacted into a minimal interval list
//!   which renders back to a string that re-parses to the same list
//! - **Resumable iteration**: a cursor that can either rewind at every pass or resume
//!   where the previous pass stopped
//!
//! # Key Types
//!
//! - [`StrideSet`] - The parsed, compacted set of integers
//! - [`Interval`] - One `lo-hi:stride` run of the set
//! - [`RangeInput`] - The accepted construction inputs (text, scalar, sequence, array)
//!
//! # Example
//!
//! ```
//! use srange::StrideSet;
//!
//! let set = StrideSet::parse("3,5,9-20").unwrap();
//! assert_eq!(set.len(), 14);
//! assert_eq!(set.next_after(5), Some(9));
//! assert_eq!(set.index_of(5), Some(1));
//! assert_eq!(set.value_at(3).unwrap(), 10);
//! assert_eq!(set.sub_range(5, 3).unwrap(), "5,9-10");
//! ```

mod compact;
pub mod cursor;
mod format;
pub mod input;
pub mod interval;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod set;
mod validate;

#[cfg(test)]
mod tests;

pub use cursor::Steps;
pub use input::{IntArray, Number, RangeInput};
pub use interval::{Interval, IntervalValues};
pub use set::{StrideSet, StrideSetOptions, Values};
pub use srange_common::{Error, ErrorKind, Result};

/// Bound used for the `inf` token.
pub const POS_INFINITY: i64 = i64::MAX;

/// Bound used for the `-inf` token.
///
/// Mirrors [`POS_INFINITY`], so `-inf-inf` spans exactly `u64::MAX` values.
pub const NEG_INFINITY: i64 = -i64::MAX;

/// Maximum number of values [`StrideSet::materialize`] will expand.
pub const MATERIALIZE_LIMIT: u64 = 10_000_000;

/// Character reserved by the notation; input containing it is rejected.
pub const RESERVED_CHAR: char = '@';
