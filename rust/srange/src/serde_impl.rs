//! `serde` support: a [`StrideSet`] serializes as its canonical string and
//! deserializes from a string, an integer or a sequence of integers.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{Number, RangeInput, StrideSet};

impl Serialize for StrideSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StrideSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StrideSetVisitor)
    }
}

struct StrideSetVisitor;

impl StrideSetVisitor {
    fn build<E: de::Error>(input: RangeInput<'_>) -> Result<StrideSet, E> {
        StrideSet::new(input).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for StrideSetVisitor {
    type Value = StrideSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a range string, an integer or a sequence of integers")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StrideSet, E> {
        Self::build(RangeInput::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StrideSet, E> {
        Self::build(RangeInput::Scalar(Number::Int(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StrideSet, E> {
        Self::build(RangeInput::Scalar(Number::UInt(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StrideSet, E> {
        Self::build(RangeInput::Scalar(Number::Float(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<StrideSet, E> {
        Ok(StrideSet::empty())
    }

    fn visit_none<E: de::Error>(self) -> Result<StrideSet, E> {
        Ok(StrideSet::empty())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StrideSet, A::Error> {
        let mut numbers = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(NumberElement(number)) = seq.next_element()? {
            numbers.push(number);
        }
        Self::build(RangeInput::Sequence(&numbers))
    }
}

/// Sequence element, accepted as any JSON-like number.
struct NumberElement(Number);

impl<'de> Deserialize<'de> for NumberElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = NumberElement;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumberElement, E> {
                Ok(NumberElement(Number::Int(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumberElement, E> {
                Ok(NumberElement(Number::UInt(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<NumberElement, E> {
                Ok(NumberElement(Number::Float(v)))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}
