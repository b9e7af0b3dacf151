//! Integration tests for numeric presets and ordering helpers.

use gridstore::numeric::{identity, linspace, linspaced, ones, random, sort_indexes, square, zeros};
use gridstore::Matrix;

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

#[test]
fn zeros_and_ones() {
    let z: Matrix<f64> = zeros(2, 3);
    assert_eq!(z.shape(), (2, 3));
    assert!(z.iter().all(|&v| v == 0.0));

    let o: Matrix<i32> = ones(3, 2);
    assert!(o.iter().all(|&v| v == 1));
}

#[test]
fn square_is_square() {
    let s: Matrix<i64> = square(4);
    assert!(s.is_square());
    assert_eq!(s.size(), 16);
}

#[test]
fn identity_has_unit_diagonal() {
    let i: Matrix<f64> = identity(3);
    assert_eq!(i.diag().to_vec(), vec![1.0, 1.0, 1.0]);
    assert_eq!(i[(0, 1)], 0.0);
    assert_eq!(i[(2, 0)], 0.0);
}

#[test]
fn random_has_requested_shape_and_spread() {
    let r = random(10, 10, 0.0, 50.0);
    assert_eq!(r.shape(), (10, 10));
    let first = r[0];
    assert!(r.iter().any(|&v| v != first));
}

#[test]
#[should_panic]
fn random_rejects_nonpositive_spread() {
    let _ = random(2, 2, 0.0, 0.0);
}

#[test]
fn linspaced_includes_endpoints() {
    assert_eq!(linspaced(0, 0.0, 1.0), Vec::<f64>::new());
    assert_eq!(linspaced(1, 3.0, 9.0), vec![3.0]);
    assert_eq!(linspaced(5, 0.0, 1.0), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn linspace_fills_row_major() {
    let m = linspace(2, 2, 0.0, 3.0);
    assert_eq!(m.elements(), &[0.0, 1.0, 2.0, 3.0]);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn sort_indexes_is_an_argsort() {
    let values = [3.0, 1.0, 2.0];
    assert_eq!(sort_indexes(&values), vec![1, 2, 0]);
}

#[test]
fn sort_indexes_keeps_tied_order() {
    let values = [2, 1, 2, 1];
    assert_eq!(sort_indexes(&values), vec![1, 3, 0, 2]);
}
