//! Ordering checks for raw intervals, with a single resort attempt.

use log::debug;
use srange_common::{Error, Result};

use crate::Interval;

/// Returns the intervals if they are well formed, strictly increasing and
/// non-overlapping, resorting them by `lo` once if necessary.
///
/// The resort only repairs out-of-order input; reversed or overlapping
/// intervals still fail with an unsortable error.
pub(crate) fn validate(mut intervals: Vec<Interval>) -> Result<Vec<Interval>> {
    if first_violation(&intervals).is_none() {
        return Ok(intervals);
    }

    debug!(
        "resorting {} range intervals into ascending order",
        intervals.len()
    );
    intervals.sort_by_key(Interval::lo);

    match first_violation(&intervals) {
        None => Ok(intervals),
        Some(message) => {
            debug!("range intervals rejected after resort: {message}");
            Err(Error::unsortable(message))
        }
    }
}

/// Describes the first interval that breaks the ordering invariants, if any.
fn first_violation(intervals: &[Interval]) -> Option<String> {
    let mut prev: Option<&Interval> = None;
    for iv in intervals {
        if !iv.is_well_formed() {
            return Some(format!("interval {}-{} is reversed", iv.lo(), iv.hi()));
        }
        if let Some(prev) = prev.filter(|prev| prev.hi() >= iv.lo()) {
            return Some(format!("intervals {prev} and {iv} overlap"));
        }
        prev = Some(iv);
    }
    None
}
