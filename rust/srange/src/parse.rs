//! Text to raw intervals.
//!
//! The parser only translates clauses; it neither orders nor compacts the result.

use srange_common::{Error, Result};

use crate::{Interval, NEG_INFINITY, POS_INFINITY, RESERVED_CHAR};

/// Parses a complete range string into one raw interval per comma-separated clause.
///
/// An empty string, or the word `none` in any case, yields no intervals.
pub(crate) fn parse_intervals(text: &str) -> Result<Vec<Interval>> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    if text.contains(RESERVED_CHAR) {
        return Err(Error::format(
            text,
            format!("reserved character '{RESERVED_CHAR}'"),
        ));
    }
    text.split(',').map(parse_clause).collect()
}

/// Parses one `bound['-'bound[':'stride]]` clause.
fn parse_clause(clause: &str) -> Result<Interval> {
    let clause = clause.trim();
    let (bounds, stride) = match clause.split_once(':') {
        Some((bounds, stride)) => (bounds.trim(), parse_stride(clause, stride)?),
        None => (clause, 1),
    };

    match split_bounds(bounds) {
        Some((lo, hi)) => {
            let lo = parse_bound(clause, lo)?;
            let hi = parse_bound(clause, hi)?;
            Ok(Interval::from_bounds(lo, hi, stride))
        }
        None => parse_bound(clause, bounds).map(Interval::single),
    }
}

/// Splits `lo-hi` at the first dash that is not the leading character.
///
/// A dash in the first position is the sign of the low bound, so `-3-3` splits
/// into `-3` and `3`, while `-3` does not split at all.
fn split_bounds(bounds: &str) -> Option<(&str, &str)> {
    let (pos, _) = bounds.char_indices().skip(1).find(|&(_, c)| c == '-')?;
    Some((&bounds[..pos], &bounds[pos + 1..]))
}

fn parse_bound(clause: &str, token: &str) -> Result<i64> {
    let token = token.trim();
    if token.to_ascii_lowercase().contains("inf") {
        return Ok(if token.starts_with('-') {
            NEG_INFINITY
        } else {
            POS_INFINITY
        });
    }
    token.parse::<i64>().map_err(|_| {
        Error::format(clause, format!("bound '{token}' is not an integer"))
    })
}

fn parse_stride(clause: &str, token: &str) -> Result<u64> {
    let token = token.trim();
    match token.parse::<u64>() {
        Ok(stride) if stride > 0 => Ok(stride),
        _ => Err(Error::format(
            clause,
            format!("stride '{token}' is not a positive integer"),
        )),
    }
}
