//! The parsed, compacted set of integers and its read-only queries.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use log::debug;
use srange_common::{Error, Result};

use crate::{
    Interval, IntervalValues, MATERIALIZE_LIMIT, RangeInput, compact::compact,
    format::format_intervals, validate::validate,
};

/// Construction options for a [`StrideSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideSetOptions {
    /// Rewind the cursor at the start of every [`steps`](StrideSet::steps) pass.
    ///
    /// When `false`, a pass resumes after the last value produced by the
    /// previous one. Defaults to `true`.
    pub auto_reset: bool,
}

impl Default for StrideSetOptions {
    fn default() -> Self {
        StrideSetOptions { auto_reset: true }
    }
}

/// An ordered set of integers stored as a list of strided intervals.
///
/// A `StrideSet` is built once (from range text, a single integer, a sequence of
/// numbers or an integer array) and its content never changes afterwards. The
/// intervals are kept sorted, non-overlapping and compacted, so all queries run
/// in time proportional to the number of intervals, or logarithmic in it for
/// lookups, regardless of how many integers the set holds.
///
/// Besides the content, a set carries a cursor (the last value produced by
/// [`advance`](Self::advance)) that drives resumable iteration; see the
/// [`cursor`](crate::cursor) module.
///
/// # Example
///
/// ```
/// use srange::StrideSet;
///
/// let set = StrideSet::parse("1,3,4-5,8-11,12-18:2,25").unwrap();
/// assert_eq!(set.to_string(), "1,3-5,8-11,12-18:2,25");
/// assert_eq!(set.len(), 13);
/// assert!(set.contains(14));
/// assert!(!set.contains(13));
/// ```
#[derive(Clone)]
pub struct StrideSet {
    /// Compacted intervals, strictly increasing and non-overlapping.
    intervals: Vec<Interval>,

    /// `offsets[i]` is the number of values in `intervals[..i]`.
    offsets: Vec<u64>,

    /// Total number of values.
    len: u64,

    /// Canonical rendering of `intervals`.
    text: String,

    /// Last value produced by `advance`; `None` before the first value.
    pub(crate) cursor: Option<i64>,

    pub(crate) auto_reset: bool,
}

impl StrideSet {
    /// Builds a set with default options.
    pub fn new<'a>(input: impl Into<RangeInput<'a>>) -> Result<StrideSet> {
        StrideSet::with_options(input, StrideSetOptions::default())
    }

    /// Builds a set: parse, validate (resorting once if needed), then compact.
    ///
    /// Fails without producing a set if any step fails.
    pub fn with_options<'a>(
        input: impl Into<RangeInput<'a>>,
        options: StrideSetOptions,
    ) -> Result<StrideSet> {
        let raw = input.into().into_intervals()?;
        let ordered = validate(raw)?;
        Ok(StrideSet::from_compacted(compact(&ordered), options))
    }

    /// Parses range text such as `"1,3,4-5,8-11,12-18:2,25"`.
    pub fn parse(text: &str) -> Result<StrideSet> {
        StrideSet::new(RangeInput::Text(text))
    }

    /// The empty set.
    pub fn empty() -> StrideSet {
        StrideSet::from_compacted(Vec::new(), StrideSetOptions::default())
    }

    fn from_compacted(intervals: Vec<Interval>, options: StrideSetOptions) -> StrideSet {
        let mut offsets = Vec::with_capacity(intervals.len());
        let mut len = 0u64;
        for iv in &intervals {
            offsets.push(len);
            len = len.saturating_add(iv.count_values());
        }
        let text = format_intervals(&intervals);
        StrideSet {
            intervals,
            offsets,
            len,
            text,
            cursor: None,
            auto_reset: options.auto_reset,
        }
    }

    /// The compacted intervals.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of values in the set.
    ///
    /// Saturates at `u64::MAX`, which is only reachable with an explicit
    /// `i64::MIN` bound.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Smallest value of the set.
    pub fn first(&self) -> Result<i64> {
        self.intervals
            .first()
            .map(Interval::lo)
            .ok_or_else(|| Error::empty_range("first"))
    }

    /// Largest value of the set.
    pub fn last(&self) -> Result<i64> {
        self.intervals
            .last()
            .map(Interval::hi)
            .ok_or_else(|| Error::empty_range("last"))
    }

    /// Index of the first interval whose `hi` is not below `value`.
    #[inline]
    fn search(&self, value: i64) -> usize {
        self.intervals.partition_point(|iv| iv.hi() < value)
    }

    /// Returns `true` if `value` belongs to the set.
    pub fn contains(&self, value: i64) -> bool {
        self.intervals
            .get(self.search(value))
            .is_some_and(|iv| iv.contains(value))
    }

    /// Position of `value` within the set, `None` if it is not a member.
    pub fn index_of(&self, value: i64) -> Option<u64> {
        let idx = self.search(value);
        let offset = self.intervals.get(idx)?.offset_of(value)?;
        Some(self.offsets[idx].saturating_add(offset))
    }

    /// The value at logical position `index` (zero-based).
    pub fn value_at(&self, index: u64) -> Result<i64> {
        if index >= self.len {
            return Err(Error::index_out_of_bounds(index, self.len));
        }
        // `offsets[0] == 0 <= index`, so the partition point is at least 1.
        let idx = self.offsets.partition_point(|&offset| offset <= index) - 1;
        self.intervals[idx]
            .value_at(index - self.offsets[idx])
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len))
    }

    /// Like [`value_at`](Self::value_at), returning `None` for an out-of-range index.
    pub fn get(&self, index: u64) -> Option<i64> {
        self.value_at(index).ok()
    }

    /// Smallest member strictly greater than `value`.
    ///
    /// Does not touch the cursor.
    pub fn next_after(&self, value: i64) -> Option<i64> {
        let idx = self.intervals.partition_point(|iv| iv.hi() <= value);
        self.intervals.get(idx)?.next_after(value)
    }

    /// Selects up to `count` values starting at the first member `>= start`.
    ///
    /// The selected portion is compacted again before it is returned.
    pub(crate) fn select(&self, start: i64, count: u64) -> Result<Vec<Interval>> {
        if self.is_empty() {
            return Err(Error::empty_range("sub_range"));
        }

        let mut remaining = count;
        let mut selected = Vec::new();
        for iv in &self.intervals[self.search(start)..] {
            if remaining == 0 {
                break;
            }
            let Some(lo) = iv.first_at_or_after(start) else {
                continue;
            };
            let tail = Interval::normalized(lo, iv.hi(), iv.stride());
            let take = remaining.min(tail.count_values());
            let Some(hi) = tail.value_at(take - 1) else {
                continue;
            };
            selected.push(Interval::normalized(lo, hi, iv.stride()));
            remaining -= take;
        }
        Ok(compact(&selected))
    }

    /// Canonical string of up to `count` values beginning at the first member
    /// that is `>= start`.
    ///
    /// Returns an empty string when nothing is selected (e.g. `count == 0` or
    /// `start` past the last value). Fails on an empty set.
    ///
    /// See [`sub_range_commit`](Self::sub_range_commit) for the variant that
    /// also moves the cursor.
    pub fn sub_range(&self, start: i64, count: u64) -> Result<String> {
        self.select(start, count)
            .map(|selected| format_intervals(&selected))
    }

    /// All values in increasing order.
    ///
    /// Fails if the set holds more than [`MATERIALIZE_LIMIT`] values.
    pub fn materialize(&self) -> Result<Vec<i64>> {
        if self.len > MATERIALIZE_LIMIT {
            debug!(
                "refusing to materialize {} values (limit {MATERIALIZE_LIMIT})",
                self.len
            );
            return Err(Error::too_large(self.len, MATERIALIZE_LIMIT));
        }
        Ok(self.values().collect())
    }

    /// Iterates over all values without touching the cursor.
    pub fn values(&self) -> Values<'_> {
        Values {
            intervals: self.intervals.iter(),
            current: None,
        }
    }
}

impl Default for StrideSet {
    fn default() -> Self {
        StrideSet::empty()
    }
}

impl PartialEq for StrideSet {
    /// Two sets are equal if they hold the same values; cursor state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl Eq for StrideSet {}

impl Hash for StrideSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.intervals.hash(state);
    }
}

impl fmt::Display for StrideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for StrideSet {
    /// `srange('1-4', len=4, previous=None, auto_reset=true)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "srange('{}', len={}, previous=", self.text, self.len)?;
        match self.cursor {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("None")?,
        }
        write!(f, ", auto_reset={})", self.auto_reset)
    }
}

impl FromStr for StrideSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<StrideSet> {
        StrideSet::parse(s)
    }
}

impl TryFrom<&str> for StrideSet {
    type Error = Error;

    fn try_from(text: &str) -> Result<StrideSet> {
        StrideSet::parse(text)
    }
}

impl TryFrom<&[i64]> for StrideSet {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<StrideSet> {
        StrideSet::new(values)
    }
}

impl TryFrom<Vec<i64>> for StrideSet {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<StrideSet> {
        StrideSet::new(values.as_slice())
    }
}

impl From<i64> for StrideSet {
    fn from(value: i64) -> Self {
        StrideSet::from_compacted(vec![Interval::single(value)], StrideSetOptions::default())
    }
}

impl<'a> IntoIterator for &'a StrideSet {
    type Item = i64;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.values()
    }
}

/// Iterator over the values of a [`StrideSet`], independent of its cursor.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    intervals: std::slice::Iter<'a, Interval>,
    current: Option<IntervalValues>,
}

impl Iterator for Values<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                return Some(value);
            }
            self.current = Some(self.intervals.next()?.values());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let set = StrideSet::parse("3,5,9-20").unwrap();
        assert_eq!(set.offsets, vec![0, 1, 2]);
        assert_eq!(set.len(), 14);
    }

    #[test]
    fn test_select_clips_tail() {
        let set = StrideSet::parse("1-9:2,20-30").unwrap();
        assert_eq!(
            set.select(4, 3).unwrap(),
            vec![Interval::from_bounds(5, 9, 2)]
        );
        assert_eq!(
            set.select(8, 3).unwrap(),
            vec![Interval::single(9), Interval::from_bounds(20, 21, 1)]
        );
        assert!(set.select(31, 3).unwrap().is_empty());
        assert!(set.select(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_debug_repr() {
        let set = StrideSet::parse("1-4").unwrap();
        assert_eq!(
            format!("{set:?}"),
            "srange('1-4', len=4, previous=None, auto_reset=true)"
        );
    }
}
