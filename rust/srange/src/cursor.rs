//! Stateful stepping over a [`StrideSet`].
//!
//! A set remembers the last value it produced. [`StrideSet::advance`] moves
//! that cursor to the next member, and [`StrideSet::steps`] wraps repeated
//! calls into an iteration pass:
//!
//! - with `auto_reset` enabled (the default), every pass starts from the first
//!   value, like iterating a regular collection;
//! - with `auto_reset` disabled, a pass continues after the last value of the
//!   previous pass, so a set can be consumed in several partial passes.
//!
//! ```
//! use srange::{StrideSet, StrideSetOptions};
//!
//! let mut set =
//!     StrideSet::with_options("1-5", StrideSetOptions { auto_reset: false }).unwrap();
//! let head: Vec<i64> = set.steps().take(2).collect();
//! let rest: Vec<i64> = set.steps().collect();
//! assert_eq!(head, vec![1, 2]);
//! assert_eq!(rest, vec![3, 4, 5]);
//! ```
//!
//! Stepping requires `&mut StrideSet`; callers sharing a set between threads
//! serialize access themselves.

use srange_common::Result;

use crate::{StrideSet, format::format_intervals};

impl StrideSet {
    /// Moves the cursor to the next member and returns it.
    ///
    /// Returns `None` once the set is exhausted; the cursor then stays on the
    /// last value, so further calls keep returning `None` until a reset.
    pub fn advance(&mut self) -> Option<i64> {
        let next = match self.cursor {
            None => self.intervals().first().map(|iv| iv.lo()),
            Some(previous) => self.next_after(previous),
        };
        if next.is_some() {
            self.cursor = next;
        }
        next
    }

    /// Rewinds the cursor to before the first value.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// The last value produced by [`advance`](Self::advance), `None` before the first.
    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn auto_reset(&self) -> bool {
        self.auto_reset
    }

    pub fn set_auto_reset(&mut self, auto_reset: bool) {
        self.auto_reset = auto_reset;
    }

    /// Starts an iteration pass driven by the cursor.
    ///
    /// Rewinds first when `auto_reset` is enabled.
    pub fn steps(&mut self) -> Steps<'_> {
        if self.auto_reset {
            self.reset_cursor();
        }
        Steps { set: self }
    }

    /// Same as [`sub_range`](Self::sub_range), and moves the cursor to the last
    /// selected value so the next pass continues after the sub-range.
    ///
    /// The cursor is left alone when nothing is selected.
    pub fn sub_range_commit(&mut self, start: i64, count: u64) -> Result<String> {
        let selected = self.select(start, count)?;
        if let Some(last) = selected.last() {
            self.cursor = Some(last.hi());
        }
        Ok(format_intervals(&selected))
    }
}

/// An iteration pass over a [`StrideSet`], advancing its cursor.
#[derive(Debug)]
pub struct Steps<'a> {
    set: &'a mut StrideSet,
}

impl Iterator for Steps<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.set.advance()
    }
}
