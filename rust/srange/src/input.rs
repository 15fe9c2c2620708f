//! The input categories a [`StrideSet`](crate::StrideSet) can be built from.

use std::fmt;

use srange_common::{Error, Result};

use crate::{Interval, parse};

/// Construction input for a [`StrideSet`](crate::StrideSet).
///
/// Each variant is dispatched to its own builder; no variant is coerced into another.
#[derive(Debug, Clone, Copy)]
pub enum RangeInput<'a> {
    /// Range notation, e.g. `"1,3,4-5,8-11,12-18:2,25"` or `"none"`.
    Text(&'a str),
    /// One loosely typed number; only integers are accepted.
    Scalar(Number),
    /// Loosely typed numbers, one singleton interval each, in input order.
    Sequence(&'a [Number]),
    /// A fixed-width integer array, widened to `i64`.
    Array(IntArray<'a>),
}

/// A number as received from a loosely typed source (e.g. a decoded document).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Returns the value as `i64`, failing for floats and out-of-range unsigned values.
    pub fn to_integer(self) -> Result<i64> {
        match self {
            Number::Int(value) => Ok(value),
            Number::UInt(value) => i64::try_from(value)
                .map_err(|_| Error::type_mismatch("integer within i64", value.to_string())),
            Number::Float(value) => Err(Error::type_mismatch("integer", format!("float {value}"))),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::UInt(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Borrowed fixed-width integer array.
#[derive(Debug, Clone, Copy)]
pub enum IntArray<'a> {
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
    I64(&'a [i64]),
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
    U64(&'a [u64]),
}

impl IntArray<'_> {
    pub fn len(&self) -> usize {
        match self {
            IntArray::I8(values) => values.len(),
            IntArray::I16(values) => values.len(),
            IntArray::I32(values) => values.len(),
            IntArray::I64(values) => values.len(),
            IntArray::U8(values) => values.len(),
            IntArray::U16(values) => values.len(),
            IntArray::U32(values) => values.len(),
            IntArray::U64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_intervals(self) -> Result<Vec<Interval>> {
        match self {
            IntArray::I8(values) => widen(values),
            IntArray::I16(values) => widen(values),
            IntArray::I32(values) => widen(values),
            IntArray::I64(values) => widen(values),
            IntArray::U8(values) => widen(values),
            IntArray::U16(values) => widen(values),
            IntArray::U32(values) => widen(values),
            IntArray::U64(values) => widen(values),
        }
    }
}

fn widen<T>(values: &[T]) -> Result<Vec<Interval>>
where
    T: Copy + TryInto<i64> + fmt::Display,
{
    values
        .iter()
        .map(|&value| {
            value
                .try_into()
                .map(Interval::single)
                .map_err(|_| Error::type_mismatch("integer within i64", value.to_string()))
        })
        .collect()
}

impl RangeInput<'_> {
    /// Converts the input into raw (unvalidated, uncompacted) intervals.
    pub(crate) fn into_intervals(self) -> Result<Vec<Interval>> {
        match self {
            RangeInput::Text(text) => parse::parse_intervals(text),
            RangeInput::Scalar(number) => Ok(vec![Interval::single(number.to_integer()?)]),
            RangeInput::Sequence(numbers) => numbers
                .iter()
                .map(|number| number.to_integer().map(Interval::single))
                .collect(),
            RangeInput::Array(array) => array.to_intervals(),
        }
    }
}

impl<'a> From<&'a str> for RangeInput<'a> {
    fn from(text: &'a str) -> Self {
        RangeInput::Text(text)
    }
}

impl<'a> From<&'a String> for RangeInput<'a> {
    fn from(text: &'a String) -> Self {
        RangeInput::Text(text.as_str())
    }
}

impl From<i64> for RangeInput<'_> {
    fn from(value: i64) -> Self {
        RangeInput::Scalar(Number::Int(value))
    }
}

impl From<Number> for RangeInput<'_> {
    fn from(number: Number) -> Self {
        RangeInput::Scalar(number)
    }
}

impl<'a> From<&'a [Number]> for RangeInput<'a> {
    fn from(numbers: &'a [Number]) -> Self {
        RangeInput::Sequence(numbers)
    }
}

impl<'a> From<IntArray<'a>> for RangeInput<'a> {
    fn from(array: IntArray<'a>) -> Self {
        RangeInput::Array(array)
    }
}

macro_rules! impl_int_array_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$ty]> for IntArray<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    IntArray::$variant(values)
                }
            }

            impl<'a> From<&'a [$ty]> for RangeInput<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    RangeInput::Array(IntArray::$variant(values))
                }
            }

            impl<'a> From<&'a Vec<$ty>> for RangeInput<'a> {
                fn from(values: &'a Vec<$ty>) -> Self {
                    RangeInput::Array(IntArray::$variant(values.as_slice()))
                }
            }
        )*
    };
}

impl_int_array_from!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);
