//! Compaction of validated intervals into their minimal strided form.
//!
//! Two passes:
//! 1. Runs of three or more singleton intervals forming an arithmetic progression
//!    collapse into one strided interval.
//! 2. Neighbouring intervals that continue each other's stride are merged. Two
//!    singletons are never merged by this pass, so an incidental pair such as
//!    `5,9` does not turn into `5-9:4`.
//!
//! The output is a fixed point: compacting it again returns it unchanged.

use log::trace;

use crate::Interval;

/// Compacts strictly increasing, non-overlapping intervals.
pub(crate) fn compact(intervals: &[Interval]) -> Vec<Interval> {
    let collapsed = collapse_singleton_runs(intervals);
    let merged = merge_adjacent(collapsed);
    trace!(
        "compacted {} range intervals into {}",
        intervals.len(),
        merged.len()
    );
    merged
}

/// Candidate run of consecutive singleton values with a common step.
#[derive(Debug, Clone, Copy)]
struct SingletonRun {
    start: i64,
    last: i64,
    stride: u64,
    count: usize,
}

impl SingletonRun {
    fn start(value: i64) -> SingletonRun {
        SingletonRun {
            start: value,
            last: value,
            stride: 0,
            count: 1,
        }
    }

    /// Second value of the run; fixes the stride.
    fn pair(self, value: i64) -> SingletonRun {
        SingletonRun {
            stride: value.abs_diff(self.last),
            last: value,
            count: 2,
            ..self
        }
    }

    fn continues_with(&self, value: i64) -> bool {
        self.last.checked_add_unsigned(self.stride) == Some(value)
    }

    fn extend(self, value: i64) -> SingletonRun {
        SingletonRun {
            last: value,
            count: self.count + 1,
            ..self
        }
    }

    fn flush_into(self, out: &mut Vec<Interval>) {
        match self.count {
            0 => {}
            1 => out.push(Interval::single(self.start)),
            2 => {
                out.push(Interval::single(self.start));
                out.push(Interval::single(self.last));
            }
            _ => out.push(Interval::normalized(self.start, self.last, self.stride)),
        }
    }
}

fn collapse_singleton_runs(intervals: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::with_capacity(intervals.len());
    let mut run: Option<SingletonRun> = None;

    for iv in intervals {
        if !iv.is_single() {
            if let Some(run) = run.take() {
                run.flush_into(&mut out);
            }
            out.push(*iv);
            continue;
        }

        let value = iv.lo();
        run = Some(match run.take() {
            None => SingletonRun::start(value),
            Some(current) if current.count == 1 => current.pair(value),
            Some(current) if current.continues_with(value) => current.extend(value),
            Some(current) if current.count > 2 => {
                current.flush_into(&mut out);
                SingletonRun::start(value)
            }
            Some(current) => {
                // A broken pair: its first value stays single, its second one
                // may still open a run with `value`.
                out.push(Interval::single(current.start));
                SingletonRun::start(current.last).pair(value)
            }
        });
    }

    if let Some(run) = run {
        run.flush_into(&mut out);
    }
    out
}

fn merge_adjacent(intervals: Vec<Interval>) -> Vec<Interval> {
    let mut out: Vec<Interval> = Vec::with_capacity(intervals.len());
    for mut current in intervals {
        while let Some(merged) = out.last().and_then(|prev| try_merge(prev, &current)) {
            out.pop();
            current = merged;
        }
        out.push(current);
    }
    out
}

/// Merges `next` into `prev` if it continues `prev` with a shared stride.
fn try_merge(prev: &Interval, next: &Interval) -> Option<Interval> {
    let stride = match (prev.is_single(), next.is_single()) {
        (true, true) => return None,
        (false, true) => prev.stride(),
        (true, false) => next.stride(),
        (false, false) if prev.stride() == next.stride() => prev.stride(),
        (false, false) => return None,
    };
    (prev.hi().checked_add_unsigned(stride)? == next.lo())
        .then(|| Interval::normalized(prev.lo(), next.hi(), stride))
}
