//! Canonical string rendering of an interval list.

use itertools::Itertools;

use crate::Interval;

/// Joins the intervals as `lo`, `lo-hi` or `lo-hi:stride` clauses separated by commas.
///
/// The empty list renders as the empty string.
pub(crate) fn format_intervals(intervals: &[Interval]) -> String {
    intervals.iter().join(",")
}
