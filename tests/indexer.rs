//! Integration tests for the keyed container adapter.

use std::collections::VecDeque;

use gridstore::{Indexer, LockedSeries, LookupError, Series, Tagged};

// ---------------------------------------------------------------------------
// Construction and access
// ---------------------------------------------------------------------------

#[test]
fn from_values_uses_default_keys() {
    let s: Series<f64> = Series::from_values(vec![1.0, 2.0, 3.0]);
    assert_eq!(s.len(), 3);
    assert_eq!(s[1], 2.0);
    assert_eq!(s.key(0), "");
}

#[test]
fn with_keys_pairs_up() {
    let s: Series<i32> = Series::with_keys(vec![10, 20], vec!["a".into(), "b".into()]);
    assert_eq!(s.key(0), "a");
    assert_eq!(*s.at(1), 20);
}

#[test]
#[should_panic]
fn with_keys_rejects_length_mismatch() {
    let _: Series<i32> = Series::with_keys(vec![1, 2, 3], vec!["a".into()]);
}

#[test]
fn positional_mutation() {
    let mut s: Series<i32> = Series::with_keys(vec![1, 2], vec!["a".into(), "b".into()]);
    *s.at_mut(0) += 100;
    s[1] = 7;
    assert_eq!(*s.at(0), 101);
    assert_eq!(s[1], 7);
}

#[test]
#[should_panic]
fn positional_access_out_of_bounds_panics() {
    let s: Series<i32> = Series::from_values(vec![1]);
    let _ = s.at(1);
}

#[test]
fn element_exposes_key_and_value() {
    let s: Series<i32> = Series::with_keys(vec![5], vec!["x".into()]);
    let e: &Tagged<i32> = s.element(0);
    assert_eq!(e.key, "x");
    assert_eq!(**e, 5);
}

// ---------------------------------------------------------------------------
// Key lookup
// ---------------------------------------------------------------------------

#[test]
fn find_returns_first_match() {
    let s: Series<i32> =
        Series::with_keys(vec![1, 2, 3], vec!["a".into(), "b".into(), "b".into()]);
    assert_eq!(s.find(&"b".into()), Ok(1));
    assert_eq!(*s.at_key(&"b".into()).unwrap(), 2);
}

#[test]
fn missing_key_is_recoverable() {
    let s: Series<i32> = Series::with_keys(vec![1], vec!["a".into()]);
    let err = s.find(&"nope".into()).unwrap_err();
    assert_eq!(err, LookupError::KeyNotFound("nope".into()));
}

#[test]
fn at_key_mut_writes_through() {
    let mut s: Series<i32> = Series::with_keys(vec![1, 2], vec!["a".into(), "b".into()]);
    *s.at_key_mut(&"b".into()).unwrap() = 99;
    assert_eq!(s[1], 99);
}

#[test]
fn key_bookkeeping() {
    let mut s: Series<i32> = Series::from_values(vec![1, 2]);
    s.set_keys(&["x".into(), "y".into(), "z".into()]);
    assert_eq!(s.get_keys(), vec!["x".to_string(), "y".to_string()]);
    *s.key_mut(0) = "w".into();
    assert_eq!(s.key(0), "w");
}

// ---------------------------------------------------------------------------
// Capability-gated growth
// ---------------------------------------------------------------------------

#[test]
fn push_and_pop_back() {
    let mut s: Series<i32> = Series::default();
    s.push_back("a".into(), 1);
    s.push_back_value(2);
    assert_eq!(s.len(), 2);
    assert_eq!(s.key(0), "a");
    let popped = s.pop_back().unwrap();
    assert_eq!(*popped, 2);
    assert_eq!(s.len(), 1);
}

#[test]
fn deque_supports_front_growth() {
    let mut s: Indexer<VecDeque<Tagged<i32>>, false> =
        Indexer::new(VecDeque::new());
    s.push_back("b".into(), 2);
    s.push_front("a".into(), 1);
    assert_eq!(*s.at(0), 1);
    assert_eq!(s.key(0), "a");
    let front = s.pop_front().unwrap();
    assert_eq!(*front, 1);
}

#[test]
fn reserve_and_clear() {
    let mut s: Series<i32> = Series::from_values(vec![1, 2, 3]);
    s.reserve(100);
    s.clear();
    assert!(s.is_empty());
}

// ---------------------------------------------------------------------------
// Locked form
// ---------------------------------------------------------------------------

#[test]
#[should_panic]
fn locked_rejects_empty_construction() {
    let _: LockedSeries<i32> = LockedSeries::new(Vec::new());
}

#[test]
fn locked_allows_content_mutation() {
    let mut s: LockedSeries<i32> =
        LockedSeries::with_keys(vec![1, 2], vec!["a".into(), "b".into()]);
    *s.at_mut(0) = 10;
    s.set_keys(&["x".into(), "y".into()]);
    assert_eq!(*s.at(0), 10);
    assert_eq!(s.key(1), "y");
}

#[test]
fn lock_round_trip() {
    let s: Series<i32> = Series::from_values(vec![1, 2]);
    let locked = s.into_locked();
    assert_eq!(locked.len(), 2);
    let mut unlocked = locked.into_unlocked();
    unlocked.push_back_value(3);
    assert_eq!(unlocked.len(), 3);
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

#[test]
fn iter_yields_values() {
    let s: Series<i32> = Series::with_keys(vec![1, 2, 3], vec!["a".into(), "b".into(), "c".into()]);
    let values: Vec<i32> = s.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn windows_walk_values() {
    let s: Series<i32> = Series::from_values((0..7).collect());
    let mut win = s.windows(3, 1);
    assert_eq!(win.iter().copied().collect::<Vec<i32>>(), vec![0, 1, 2]);
    win.advance();
    win.advance();
    assert_eq!(win.iter().copied().collect::<Vec<i32>>(), vec![4, 5, 6]);
}
