//! Integration tests for index-based views and their arithmetic.

use gridstore::{Matrix, Subset, SubsetMut};

// ---------------------------------------------------------------------------
// Shared views
// ---------------------------------------------------------------------------

#[test]
fn view_over_plain_vec() {
    let data = vec![10, 20, 30, 40, 50];
    let view = Subset::new(&data, vec![4, 0, 2]);
    assert_eq!(view.len(), 3);
    assert_eq!(view.source_len(), 5);
    assert_eq!(view.to_vec(), vec![50, 10, 30]);
    assert_eq!(view[1], 10);
}

#[test]
fn duplicate_positions_are_allowed() {
    let data = vec![1, 2, 3];
    let view = Subset::new(&data, vec![1, 1, 1]);
    assert_eq!(view.to_vec(), vec![2, 2, 2]);
}

#[test]
#[should_panic]
fn out_of_bounds_position_panics() {
    let data = vec![1, 2, 3];
    let _ = Subset::new(&data, vec![0, 3]);
}

#[test]
fn range_zero_stop_means_to_end() {
    let data = vec![0, 1, 2, 3, 4, 5];
    let view = Subset::new(&data, vec![5, 4, 3, 2, 1]);
    assert_eq!(view.range(2, 0).to_vec(), vec![3, 2, 1]);
    assert_eq!(view.range(1, 3).to_vec(), vec![4, 3]);
}

#[test]
fn range_allows_empty_slice() {
    let data = vec![0, 1, 2, 3, 4];
    let view = Subset::new(&data, vec![0, 1, 2, 3]);
    assert!(view.range(2, 2).is_empty());
}

#[test]
#[should_panic]
fn range_rejects_stop_before_start() {
    let data = vec![0, 1, 2, 3, 4];
    let view = Subset::new(&data, vec![0, 1, 2, 3]);
    let _ = view.range(3, 2);
}

#[test]
#[should_panic]
fn range_mut_rejects_stop_before_start() {
    let mut data = vec![0, 1, 2, 3];
    let mut view = SubsetMut::new(&mut data, vec![0, 1, 2, 3]);
    let _ = view.range_mut(3, 1);
}

#[test]
fn segment_takes_half_open_slice() {
    let data = vec![0, 1, 2, 3, 4, 5];
    let view = Subset::new(&data, vec![0, 2, 4, 5]);
    assert_eq!(view.segment(1, 3).to_vec(), vec![2, 4]);
}

#[test]
#[should_panic]
fn segment_rejects_bad_bounds() {
    let data = vec![0, 1, 2];
    let view = Subset::new(&data, vec![0, 1, 2]);
    let _ = view.segment(2, 2);
}

#[test]
fn cast_vec_converts() {
    let data = vec![1i32, 2, 3];
    let view = Subset::new(&data, vec![0, 2]);
    let wide: Vec<i64> = view.cast_vec();
    assert_eq!(wide, vec![1i64, 3]);
}

// ---------------------------------------------------------------------------
// Exclusive views
// ---------------------------------------------------------------------------

#[test]
fn fill_writes_through() {
    let mut m = Matrix::from_elem(3, 3, 0i32);
    m.row_mut(1).fill(7);
    assert_eq!(m.elements(), &[0, 0, 0, 7, 7, 7, 0, 0, 0]);
}

#[test]
fn assign_writes_in_view_order() {
    let mut m = Matrix::from_elem(2, 3, 0i32);
    m.col_mut(2).assign(&[5, 6, 99]);
    assert_eq!(m[(0, 2)], 5);
    assert_eq!(m[(1, 2)], 6);
}

#[test]
#[should_panic]
fn assign_rejects_short_input() {
    let mut data = vec![0, 0, 0];
    let mut view = SubsetMut::new(&mut data, vec![0, 1, 2]);
    view.assign(&[1, 2]);
}

#[test]
fn assign_view_copies_between_sources() {
    let src = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let mut dst = Matrix::from_elem(2, 2, 0i32);
    dst.row_mut(0).assign_view(&src.col(1));
    assert_eq!(dst.elements(), &[2, 4, 0, 0]);
}

#[test]
fn range_mut_reborrows() {
    let mut data = vec![0, 0, 0, 0];
    let mut view = SubsetMut::new(&mut data, vec![0, 1, 2, 3]);
    view.range_mut(2, 0).fill(9);
    assert_eq!(data, vec![0, 0, 9, 9]);
}

#[test]
fn for_each_mut_visits_every_position() {
    let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    m.diag_mut().for_each_mut(|v| *v *= 10);
    assert_eq!(m.elements(), &[10, 2, 3, 40]);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn scalar_ops_do_not_mutate() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let row = m.row(0);
    assert_eq!(&row + 10, vec![11, 12]);
    assert_eq!(&row * 3, vec![3, 6]);
    assert_eq!(&row - 1, vec![0, 1]);
    assert_eq!(&row / 1, vec![1, 2]);
    assert_eq!(m.elements(), &[1, 2, 3, 4]);
}

#[test]
fn compound_scalar_ops_mutate_through() {
    let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let mut row = m.row_mut(1);
    row += 10;
    row *= 2;
    assert_eq!(m.elements(), &[1, 2, 26, 28]);
}

#[test]
fn slice_operand_by_position() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let got = &m.row(0) + &[10, 20, 30][..];
    assert_eq!(got, vec![11, 22]);
}

#[test]
#[should_panic]
fn short_right_operand_panics() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let _ = &m.row(0) + &[10][..];
}

#[test]
fn view_plus_view() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let got = &m.row(0) + &m.row(1);
    assert_eq!(got, vec![4, 6]);
}

#[test]
fn compound_view_operand() {
    let src = Matrix::from_vec(2, 2, vec![10, 20, 30, 40]);
    let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let mut row = m.row_mut(0);
    row += &src.row(1);
    assert_eq!(m.elements(), &[31, 42, 3, 4]);
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[test]
fn scalar_comparisons() {
    let m = Matrix::from_vec(2, 2, vec![1, 5, 3, 5]);
    let col = m.col(1);
    assert_eq!(col.eq_scalar(5), vec![true, true]);
    assert_eq!(m.row(0).lt_scalar(4), vec![true, false]);
    assert_eq!(m.row(1).ge_scalar(5), vec![false, true]);
    assert_eq!(m.diag().ne_scalar(1), vec![false, true]);
}

#[test]
fn view_comparisons_by_position() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 2]);
    assert_eq!(m.row(0).lt_view(&m.row(1)), vec![true, false]);
    assert_eq!(m.row(0).eq_view(&m.row(1)), vec![false, true]);
    assert_eq!(m.row(1).gt_view(&m.row(0)), vec![true, false]);
}

#[test]
#[should_panic]
fn view_comparison_rejects_short_right_operand() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let _ = m.row(0).le_view(&m.diag().range(0, 1));
}

#[test]
fn as_subset_snapshots_for_reading() {
    let mut m = Matrix::from_vec(2, 2, vec![1.0f64, 2.0, 3.0, 4.0]);
    let mut row = m.row_mut(0);
    let doubled = &row.as_subset() * 2.0;
    row.assign(&doubled);
    assert_eq!(m.elements(), &[2.0, 4.0, 3.0, 4.0]);
}
