//! Integration tests for the rank-2 dense container.

use gridstore::Matrix;

// ---------------------------------------------------------------------------
// Construction and shape
// ---------------------------------------------------------------------------

#[test]
fn new_is_empty() {
    let m: Matrix<i32> = Matrix::new();
    assert!(m.is_empty());
    assert_eq!(m.size(), 0);
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn from_vec_takes_leading_elements() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.elements(), &[1, 2, 3, 4]);
}

#[test]
#[should_panic]
fn from_vec_rejects_short_buffer() {
    let _ = Matrix::from_vec(2, 3, vec![1, 2, 3]);
}

#[test]
fn from_elem_fills() {
    let m = Matrix::from_elem(2, 3, 7i32);
    assert_eq!(m.size(), 6);
    assert!(m.iter().all(|&v| v == 7));
}

#[test]
fn from_rows_pads_short_rows() {
    let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4], vec![5, 6]]);
    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m.elements(), &[1, 2, 3, 4, 0, 0, 5, 6, 0]);
}

#[test]
fn square_and_position() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    assert!(m.is_square());
    assert_eq!(m.position(0), (0, 0));
    assert_eq!(m.position(3), (1, 1));
}

#[test]
#[should_panic]
fn position_past_end_panics() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    let _ = m.position(4);
}

// ---------------------------------------------------------------------------
// Indexing and views
// ---------------------------------------------------------------------------

#[test]
fn tuple_and_flat_indexing_agree() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(m[(1, 2)], 6);
    assert_eq!(m[1 * 3 + 2], 6);
    assert_eq!(*m.at(0, 1), 2);
}

#[test]
fn row_view_matches_direct_indexing() {
    let m = Matrix::from_vec(3, 4, (0..12).collect::<Vec<i32>>());
    let row = m.row(1);
    assert_eq!(row.len(), 4);
    for c in 0..4 {
        assert_eq!(*row.get(c), m[(1, c)]);
    }
}

#[test]
fn col_and_diag_views() {
    let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    assert_eq!(m.col(0).to_vec(), vec![1, 4, 7]);
    assert_eq!(m.diag().to_vec(), vec![1, 5, 9]);
}

#[test]
fn diag_of_wide_matrix_is_short() {
    let m = Matrix::from_vec(2, 4, (0..8).collect::<Vec<i32>>());
    assert_eq!(m.diag().len(), 2);
}

#[test]
fn block_ids_zero_means_full_width() {
    let m = Matrix::from_vec(3, 3, (0..9).collect::<Vec<i32>>());
    assert_eq!(m.block_ids(1, 3, 0, 0), vec![3, 4, 5, 6, 7, 8]);
    assert_eq!(m.block(1, 2, 1, 3).to_vec(), vec![4, 5]);
}

#[test]
fn submat_materializes_block() {
    let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    let s = m.submat(1, 3, 1, 3);
    assert_eq!(s.shape(), (2, 2));
    assert_eq!(s.elements(), &[5, 6, 8, 9]);
}

#[test]
fn from_view_uses_bounding_box() {
    let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    let d = Matrix::from_view(&m.diag());
    assert_eq!(d.shape(), (3, 3));
    assert_eq!(d[(0, 0)], 1);
    assert_eq!(d[(1, 1)], 5);
    assert_eq!(d[(2, 2)], 9);
    assert_eq!(d[(0, 1)], 0);
}

#[test]
fn from_view_of_block_is_compact() {
    let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    let b = Matrix::from_view(&m.block(1, 3, 1, 3));
    assert_eq!(b.shape(), (2, 2));
    assert_eq!(b.elements(), &[5, 6, 8, 9]);
}

// ---------------------------------------------------------------------------
// Structural mutation
// ---------------------------------------------------------------------------

#[test]
fn push_row_onto_empty_adopts_width() {
    let mut m: Matrix<i32> = Matrix::new();
    m.push_row(&[1, 2, 3]);
    assert_eq!(m.shape(), (1, 3));
    m.push_row(&[4, 5, 6]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(1, 0)], 4);
}

#[test]
#[should_panic]
fn push_row_length_mismatch_panics() {
    let mut m = Matrix::from_vec(1, 3, vec![1, 2, 3]);
    m.push_row(&[4, 5]);
}

#[test]
fn push_col_interleaves() {
    let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    m.push_col(&[9, 8]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.elements(), &[1, 2, 9, 3, 4, 8]);
}

#[test]
fn push_col_onto_empty_adopts_height() {
    let mut m: Matrix<i32> = Matrix::new();
    m.push_col(&[1, 2, 3]);
    assert_eq!(m.shape(), (3, 1));
    assert_eq!(m.elements(), &[1, 2, 3]);
}

#[test]
fn pop_last_line_clears() {
    let mut m = Matrix::from_vec(1, 3, vec![1, 2, 3]);
    m.pop_row();
    assert!(m.is_empty());
    assert_eq!(m.shape(), (0, 0));

    let mut m = Matrix::from_vec(3, 1, vec![1, 2, 3]);
    m.pop_col();
    assert!(m.is_empty());
}

#[test]
fn delete_row_and_col() {
    let mut m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    m.delete_row(1);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.elements(), &[1, 2, 3, 7, 8, 9]);
    m.delete_col(0);
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.elements(), &[2, 3, 8, 9]);
}

#[test]
fn reshape_matches_cols_before_rows() {
    let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    m.reshape(3, 2);
    assert_eq!(m.shape(), (3, 2));
    // cols 3 -> 2 drops the last column, then a default row is appended
    assert_eq!(m.elements(), &[1, 2, 4, 5, 0, 0]);
}

#[test]
fn reshape_zero_clears() {
    let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    m.reshape(0, 5);
    assert!(m.is_empty());
}

#[test]
fn reshape_from_empty() {
    let mut m: Matrix<i32> = Matrix::new();
    m.reshape(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.iter().all(|&v| v == 0));
}

#[test]
fn resize_preserves_coordinates() {
    let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    m.resize(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m[(0, 0)], 1);
    assert_eq!(m[(0, 1)], 2);
    assert_eq!(m[(1, 0)], 4);
    assert_eq!(m[(1, 1)], 5);
    assert_eq!(m[(2, 0)], 0);
}

#[test]
fn transpose_in_place() {
    let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    m.transpose();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.elements(), &[1, 4, 2, 5, 3, 6]);
}

#[test]
fn set_and_fill() {
    let mut m = Matrix::from_elem(2, 2, 0i32);
    m.set(&[1, 2, 3, 4, 99]);
    assert_eq!(m.elements(), &[1, 2, 3, 4]);
    m.fill(7);
    assert!(m.iter().all(|&v| v == 7));
}

// ---------------------------------------------------------------------------
// Conversion and equality
// ---------------------------------------------------------------------------

#[test]
fn cast_and_mapv() {
    let m = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]);
    let w: Matrix<i64> = m.cast();
    assert_eq!(w[(1, 1)], 4i64);
    let neg = m.mapv(|&v| -v);
    assert_eq!(neg.elements(), &[-1, -2, -3, -4]);
}

#[test]
fn equality_ignores_shape() {
    let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let b = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(a, b);
    let c = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 7]);
    assert_ne!(a, c);
}
