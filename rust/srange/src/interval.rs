//! A single strided run of integers, the building block of a [`StrideSet`](crate::StrideSet).

use std::fmt;

use srange_common::{Result, verify_arg};

use crate::{NEG_INFINITY, POS_INFINITY};

/// An inclusive arithmetic progression `lo, lo + stride, ..., hi`.
///
/// A well-formed interval satisfies:
/// - `lo <= hi`
/// - `stride >= 1`
/// - `(hi - lo) % stride == 0`, so `hi` is itself a member
/// - `stride == 1` whenever `lo == hi`
///
/// Intervals produced by the parser before validation may violate the first
/// property (e.g. `"5-3"`); such intervals never survive construction of a
/// [`StrideSet`](crate::StrideSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: i64,
    hi: i64,
    stride: u64,
}

impl Interval {
    /// Creates a well-formed interval, rejecting bounds that violate the invariants.
    ///
    /// A degenerate interval (`lo == hi`) is stored with stride 1 regardless of `stride`.
    pub fn new(lo: i64, hi: i64, stride: u64) -> Result<Interval> {
        verify_arg!(stride, stride > 0);
        verify_arg!(hi, lo <= hi);
        verify_arg!(hi, hi.abs_diff(lo) % stride == 0);
        Ok(Interval::normalized(lo, hi, stride))
    }

    /// Interval holding exactly one value.
    #[inline]
    pub const fn single(value: i64) -> Interval {
        Interval {
            lo: value,
            hi: value,
            stride: 1,
        }
    }

    /// Builds an interval from two parsed bounds, pulling `hi` down to the last
    /// value reachable from `lo`.
    ///
    /// Reversed bounds are kept as they are; validation rejects them later.
    pub(crate) fn from_bounds(lo: i64, hi: i64, stride: u64) -> Interval {
        if hi < lo {
            return Interval { lo, hi, stride };
        }
        let excess = hi.abs_diff(lo) % stride;
        // `excess <= hi - lo`, the result stays within `[lo, hi]`.
        Interval::normalized(lo, hi.wrapping_sub_unsigned(excess), stride)
    }

    /// Caller guarantees `lo <= hi` and stride alignment of `hi`.
    #[inline]
    pub(crate) fn normalized(lo: i64, hi: i64, stride: u64) -> Interval {
        let stride = if lo == hi { 1 } else { stride };
        Interval { lo, hi, stride }
    }

    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    #[inline]
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Returns `true` if the interval holds exactly one value.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.lo == self.hi
    }

    /// Checks the ordering and stride invariants (alignment is guaranteed by construction).
    #[inline]
    pub(crate) fn is_well_formed(&self) -> bool {
        self.stride >= 1 && self.lo <= self.hi
    }

    /// Number of values in the interval.
    ///
    /// Saturates at `u64::MAX` for the single pathological interval `i64::MIN..=i64::MAX`.
    #[inline]
    pub fn count_values(&self) -> u64 {
        (self.hi.abs_diff(self.lo) / self.stride).saturating_add(1)
    }

    /// Returns `true` if `value` is one of the interval's members.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.offset_of(value).is_some()
    }

    /// Position of `value` within the interval, `None` if it is not a member.
    pub fn offset_of(&self, value: i64) -> Option<u64> {
        if value < self.lo || value > self.hi {
            return None;
        }
        let distance = value.abs_diff(self.lo);
        (distance % self.stride == 0).then_some(distance / self.stride)
    }

    /// The `n`-th value of the interval (zero-based), `None` past the end.
    pub fn value_at(&self, n: u64) -> Option<i64> {
        if n >= self.count_values() {
            return None;
        }
        // `n * stride <= hi - lo`, neither step can overflow for in-range `n`.
        let distance = n.checked_mul(self.stride)?;
        self.lo.checked_add_unsigned(distance)
    }

    /// Smallest member strictly greater than `value`.
    pub fn next_after(&self, value: i64) -> Option<i64> {
        if value < self.lo {
            return Some(self.lo);
        }
        if value >= self.hi {
            return None;
        }
        let step = self.stride - value.abs_diff(self.lo) % self.stride;
        value.checked_add_unsigned(step)
    }

    /// Smallest member greater than or equal to `value`.
    pub fn first_at_or_after(&self, value: i64) -> Option<i64> {
        match self.offset_of(value) {
            Some(_) => Some(value),
            None => self.next_after(value),
        }
    }

    /// Iterates over the interval's values in increasing order.
    pub fn values(&self) -> IntervalValues {
        IntervalValues {
            next: Some(self.lo),
            hi: self.hi,
            stride: self.stride,
        }
    }
}

impl From<i64> for Interval {
    fn from(value: i64) -> Self {
        Interval::single(value)
    }
}

impl fmt::Display for Interval {
    /// Renders `lo`, `lo-hi` or `lo-hi:stride`; sentinel bounds render as `-inf`/`inf`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bound(f, self.lo)?;
        if self.hi > self.lo {
            f.write_str("-")?;
            write_bound(f, self.hi)?;
            if self.stride > 1 {
                write!(f, ":{}", self.stride)?;
            }
        }
        Ok(())
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, value: i64) -> fmt::Result {
    match value {
        POS_INFINITY => f.write_str("inf"),
        NEG_INFINITY => f.write_str("-inf"),
        _ => write!(f, "{value}"),
    }
}

/// Iterator over the values of one [`Interval`].
#[derive(Debug, Clone)]
pub struct IntervalValues {
    next: Option<i64>,
    hi: i64,
    stride: u64,
}

impl Iterator for IntervalValues {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.next?;
        self.next = if value < self.hi {
            value.checked_add_unsigned(self.stride)
        } else {
            None
        };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) => {
                let remaining = (self.hi.abs_diff(next) / self.stride).saturating_add(1);
                match usize::try_from(remaining) {
                    Ok(n) => (n, Some(n)),
                    Err(_) => (usize::MAX, None),
                }
            }
            None => (0, Some(0)),
        }
    }
}
