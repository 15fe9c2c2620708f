use crate::{StrideSet, StrideSetOptions};

#[test]
fn test_auto_reset_restarts_every_pass() {
    let mut s = StrideSet::parse("5-7").unwrap();
    assert!(s.auto_reset());
    assert_eq!(s.steps().collect::<Vec<_>>(), vec![5, 6, 7]);
    assert_eq!(s.steps().collect::<Vec<_>>(), vec![5, 6, 7]);
}

#[test]
fn test_auto_reset_after_partial_pass() {
    let mut s = StrideSet::parse("1-5").unwrap();
    assert_eq!(s.steps().take(2).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(s.steps().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_resumable_passes() {
    let mut s =
        StrideSet::with_options("1-5", StrideSetOptions { auto_reset: false }).unwrap();
    let mut first = Vec::new();
    for value in s.steps() {
        if value == 2 {
            break;
        }
        first.push(value);
    }
    assert_eq!(first, vec![1]);
    assert_eq!(s.cursor(), Some(2));
    assert_eq!(s.steps().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert!(s.steps().next().is_none());

    s.reset_cursor();
    assert_eq!(s.steps().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_toggle_auto_reset() {
    let mut s = StrideSet::parse("10-40:10").unwrap();
    s.set_auto_reset(false);
    assert_eq!(s.steps().next(), Some(10));
    assert_eq!(s.steps().next(), Some(20));
    s.set_auto_reset(true);
    assert_eq!(s.steps().next(), Some(10));
    assert_eq!(
        format!("{s:?}"),
        "srange('10-40:10', len=4, previous=10, auto_reset=true)"
    );
}

#[test]
fn test_strided_stepping() {
    let mut s = StrideSet::parse("1,3,4-5,8-11,12-18:2,25").unwrap();
    assert_eq!(
        s.steps().collect::<Vec<_>>(),
        vec![1, 3, 4, 5, 8, 9, 10, 11, 12, 14, 16, 18, 25]
    );
}

#[test]
fn test_commit_then_resume() {
    let mut s =
        StrideSet::with_options("3,5,9-20", StrideSetOptions { auto_reset: false }).unwrap();
    assert_eq!(s.sub_range_commit(5, 3).unwrap(), "5,9-10");
    assert_eq!(s.steps().take(3).collect::<Vec<_>>(), vec![11, 12, 13]);

    let start = s.next_after(s.cursor().unwrap()).unwrap();
    assert_eq!(s.sub_range_commit(start, 100).unwrap(), "14-20");
    assert!(s.steps().next().is_none());
}
