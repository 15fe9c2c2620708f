use crate::{ErrorKind, IntArray, Interval, NEG_INFINITY, Number, POS_INFINITY, StrideSet};

fn canonical(text: &str) -> String {
    StrideSet::parse(text).unwrap().to_string()
}

fn triples(set: &StrideSet) -> Vec<(i64, i64, u64)> {
    set.intervals()
        .iter()
        .map(|iv| (iv.lo(), iv.hi(), iv.stride()))
        .collect()
}

fn kind_of(text: &str) -> ErrorKind {
    StrideSet::parse(text).unwrap_err().into_kind()
}

#[test]
fn test_simple_ranges() {
    assert_eq!(canonical("1,3,4-5,8-11,12-13,20"), "1,3-5,8-13,20");
    assert_eq!(canonical("5"), "5");
    assert_eq!(canonical("5,6"), "5,6");
    assert_eq!(canonical("1,3,4-5,8-11,12-18:2,25"), "1,3-5,8-11,12-18:2,25");
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(
        canonical("1, 3,   \t 4-5,8 - 11, 12-13,20"),
        "1,3-5,8-13,20"
    );
    assert_eq!(canonical("  1 - 9 : 2 "), "1-9:2");
}

#[test]
fn test_out_of_order_input_is_resorted() {
    assert_eq!(canonical("2,1,3"), "1-3");
    assert_eq!(canonical("20-30,1-5"), "1-5,20-30");
}

#[test]
fn test_overlapping_input_is_rejected() {
    assert!(matches!(kind_of("1-5,3-8"), ErrorKind::Unsortable { .. }));
    assert!(matches!(kind_of("4,4"), ErrorKind::Unsortable { .. }));
    assert!(matches!(kind_of("9-3"), ErrorKind::Unsortable { .. }));
}

#[test]
fn test_negative_values() {
    let set = StrideSet::parse("-3-3, 5-11").unwrap();
    assert_eq!(set.intervals()[0], Interval::new(-3, 3, 1).unwrap());
    assert_eq!(set.to_string(), "-3-3,5-11");
    assert_eq!(canonical("-10--8,-4"), "-10--8,-4");
}

#[test]
fn test_strides() {
    assert_eq!(canonical("1-10:2"), "1-9:2");
    assert_eq!(canonical("1-7:2,9-13:2"), "1-13:2");
    assert_eq!(canonical("1-7:2, 9-13:2, 15-19:2"), "1-19:2");
    assert_eq!(canonical("1,2,3,4,5"), "1-5");
    assert_eq!(canonical("0,2,4,6,8"), "0-8:2");
    assert_eq!(canonical("0,3,6,9,12"), "0-12:3");
    assert_eq!(canonical("1,3-7:2,9"), "1-9:2");
    assert_eq!(canonical("1-5:1"), "1-5");
    assert_eq!(canonical("1-5:2, 7-7:1"), "1-7:2");
    assert_eq!(canonical("1,3,5,7, 10,12,14,16, 18-20:2"), "1-7:2,10-20:2");
}

#[test]
fn test_bad_strides() {
    for text in ["1-5:2, 7-7:0", "1-5:2, 7-7:-1", "1-5:1.1", "1-5:"] {
        assert!(
            matches!(kind_of(text), ErrorKind::Format { .. }),
            "{text} should be rejected"
        );
    }
}

#[test]
fn test_bad_bounds() {
    for text in ["3.65", "1,,2", "x", "1-y", "1-2-3"] {
        assert!(
            matches!(kind_of(text), ErrorKind::Format { .. }),
            "{text} should be rejected"
        );
    }
}

#[test]
fn test_reserved_character() {
    assert!(matches!(kind_of("1-5@2"), ErrorKind::Format { .. }));
    assert!(matches!(kind_of("@1"), ErrorKind::Format { .. }));
}

#[test]
fn test_empty_inputs() {
    for text in ["", "   ", "none", "None", "NONE"] {
        let set = StrideSet::parse(text).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_string(), "");
    }
    assert_eq!(StrideSet::default(), StrideSet::empty());
}

#[test]
fn test_infinite_bounds() {
    let set = StrideSet::parse("-inf-0").unwrap();
    assert_eq!(triples(&set), vec![(NEG_INFINITY, 0, 1)]);
    assert_eq!(set.to_string(), "-inf-0");
    assert_eq!(set.len(), i64::MAX as u64 + 1);

    let set = StrideSet::parse("10-Infinity").unwrap();
    assert_eq!(set.last().unwrap(), POS_INFINITY);
    assert_eq!(set.to_string(), "10-inf");

    let set = StrideSet::parse("-INF-inf").unwrap();
    assert_eq!(set.len(), u64::MAX);
    assert!(set.contains(0));
    assert_eq!(set.index_of(0), Some(i64::MAX as u64));
}

#[test]
fn test_scalar_input() {
    let set = StrideSet::from(7_i64);
    assert_eq!(set.to_string(), "7");
    assert_eq!(set.len(), 1);

    let set = StrideSet::new(Number::Int(-2)).unwrap();
    assert_eq!(set.to_string(), "-2");

    let err = StrideSet::new(Number::Float(3.65)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
}

#[test]
fn test_list_input() {
    let set = StrideSet::try_from(vec![3_i64, 5, 9, 10, 11, 12]).unwrap();
    assert_eq!(set.to_string(), "3,5,9-12");

    let set = StrideSet::try_from(&[3_i64, 5, 9, 10, 11, 12, 14, 16, 18, 20][..]).unwrap();
    assert_eq!(set.to_string(), "3,5,9-12,14-20:2");

    let set = StrideSet::try_from(vec![4_i64, 1, 2, 3]).unwrap();
    assert_eq!(set.to_string(), "1-4");

    let numbers = [Number::Float(3.141), Number::Float(6.282), Number::Float(21.163)];
    let err = StrideSet::new(&numbers[..]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));

    let err = StrideSet::try_from(vec![1_i64, 2, 2]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Unsortable { .. }));
}

#[test]
fn test_array_input() {
    let values: Vec<i32> = vec![3, 5, 9, 10, 11, 12];
    let set = StrideSet::new(&values).unwrap();
    assert_eq!(set.to_string(), "3,5,9-12");

    let bytes: &[u8] = &[0, 2, 4, 6];
    let set = StrideSet::new(IntArray::U8(bytes)).unwrap();
    assert_eq!(set.to_string(), "0-6:2");

    let huge: &[u64] = &[u64::MAX];
    let err = StrideSet::new(huge).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
}

#[test]
fn test_from_str() {
    let set: StrideSet = "1-3,7".parse().unwrap();
    assert_eq!(set.as_str(), "1-3,7");
    assert!("1-3:0".parse::<StrideSet>().is_err());
    assert_eq!(StrideSet::try_from("5-6").unwrap().len(), 2);
}

#[test]
fn test_equality_ignores_cursor() {
    let mut a = StrideSet::parse("1-5").unwrap();
    let b = StrideSet::parse("1,2,3,4,5").unwrap();
    a.advance();
    assert_eq!(a, b);
    assert_ne!(a, StrideSet::parse("1-4").unwrap());
}
