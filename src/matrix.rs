//! Rank-2 dense array with row-major flat storage.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::capability::{Sequence, SequenceMut, Shaped};
use crate::subset::{Subset, SubsetMut};

/// Dense 2D container backed by a single row-major `Vec`.
///
/// The flat length always equals `rows * cols`. Structural operations keep
/// that invariant: removing the last line on either axis clears the whole
/// matrix, and an empty matrix adopts its column (or row) count from the
/// first pushed line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Shapes the first `rows * cols` elements of `data`. Panics when the
    /// buffer is too short; extra elements are dropped.
    pub fn from_vec(rows: usize, cols: usize, mut data: Vec<T>) -> Self {
        assert!(data.len() >= rows * cols, "buffer too short for shape");
        data.truncate(rows * cols);
        Self { rows, cols, data }
    }

    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Builds from nested rows. The widest row sets the column count and
    /// shorter rows are padded with the default value.
    pub fn from_rows(rows: &[Vec<T>]) -> Self
    where
        T: Clone + Default,
    {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row);
            data.extend((row.len()..cols).map(|_| T::default()));
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Builds from a view over a shape-aware source: the bounding box of
    /// the viewed positions on the last two axes becomes the shape, each
    /// element lands at its offset inside that box, and gaps are filled
    /// with the default value.
    pub fn from_view<C>(view: &Subset<'_, C>) -> Self
    where
        C: Sequence<Elem = T> + Shaped,
        T: Clone + Default,
    {
        if view.is_empty() {
            return Self::new();
        }
        let source = view.source();
        let coords: Vec<(usize, usize)> = view
            .index()
            .iter()
            .map(|&i| {
                let pos = source.position_of(i);
                let n = pos.len();
                (pos[n - 2], pos[n - 1])
            })
            .collect();
        let min_r = coords.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let max_r = coords.iter().map(|&(r, _)| r).max().unwrap_or(0);
        let min_c = coords.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let max_c = coords.iter().map(|&(_, c)| c).max().unwrap_or(0);
        let mut out = Self::from_elem(max_r - min_r + 1, max_c - min_c + 1, T::default());
        for (n, &(r, c)) in coords.iter().enumerate() {
            out[(r - min_r, c - min_c)] = view.get(n).clone();
        }
        out
    }

    /// Builds a single-row matrix from a view over a flat source.
    pub fn from_subset<C>(view: &Subset<'_, C>) -> Self
    where
        C: Sequence<Elem = T>,
        T: Clone,
    {
        Self {
            rows: usize::from(!view.is_empty()),
            cols: view.len(),
            data: view.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// (row, col) of a flat position. Panics when `idx` is out of bounds.
    pub fn position(&self, idx: usize) -> (usize, usize) {
        assert!(idx < self.data.len(), "flat index out of bounds");
        (idx / self.cols, idx % self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn at(&self, row: usize, col: usize) -> &T {
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        &self.data[self.offset(row, col)]
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    pub fn elements(&self) -> &[T] {
        &self.data
    }

    pub fn elements_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // -- index-set builders ------------------------------------------------

    pub fn all_ids(&self) -> Vec<usize> {
        (0..self.data.len()).collect()
    }

    pub fn row_ids(&self, row: usize) -> Vec<usize> {
        assert!(row < self.rows, "row index out of bounds");
        (0..self.cols).map(|c| self.offset(row, c)).collect()
    }

    pub fn col_ids(&self, col: usize) -> Vec<usize> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|r| self.offset(r, col)).collect()
    }

    /// Upper diagonal positions, min(rows, cols) entries.
    pub fn diag_ids(&self) -> Vec<usize> {
        (0..usize::min(self.rows, self.cols))
            .map(|i| i * (self.cols + 1))
            .collect()
    }

    /// Row-major positions of the block `[r0, r1) x [c0, c1)`. A `c1` of 0
    /// selects the full width.
    pub fn block_ids(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Vec<usize> {
        assert!(r0 < r1 && r1 <= self.rows, "row block out of bounds");
        assert!(c0 <= c1 && c1 <= self.cols, "column block out of bounds");
        let c1 = if c1 == 0 { self.cols } else { c1 };
        let mut ids = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for r in r0..r1 {
            for c in c0..c1 {
                ids.push(self.offset(r, c));
            }
        }
        ids
    }

    // -- views ---------------------------------------------------------

    pub fn all(&self) -> Subset<'_, Self> {
        Subset::new(self, self.all_ids())
    }

    pub fn all_mut(&mut self) -> SubsetMut<'_, Self> {
        let ids = self.all_ids();
        SubsetMut::new(self, ids)
    }

    pub fn row(&self, row: usize) -> Subset<'_, Self> {
        Subset::new(self, self.row_ids(row))
    }

    pub fn row_mut(&mut self, row: usize) -> SubsetMut<'_, Self> {
        let ids = self.row_ids(row);
        SubsetMut::new(self, ids)
    }

    pub fn col(&self, col: usize) -> Subset<'_, Self> {
        Subset::new(self, self.col_ids(col))
    }

    pub fn col_mut(&mut self, col: usize) -> SubsetMut<'_, Self> {
        let ids = self.col_ids(col);
        SubsetMut::new(self, ids)
    }

    pub fn diag(&self) -> Subset<'_, Self> {
        Subset::new(self, self.diag_ids())
    }

    pub fn diag_mut(&mut self) -> SubsetMut<'_, Self> {
        let ids = self.diag_ids();
        SubsetMut::new(self, ids)
    }

    pub fn block(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Subset<'_, Self> {
        Subset::new(self, self.block_ids(r0, r1, c0, c1))
    }

    pub fn block_mut(&mut self, r0: usize, r1: usize, c0: usize, c1: usize) -> SubsetMut<'_, Self> {
        let ids = self.block_ids(r0, r1, c0, c1);
        SubsetMut::new(self, ids)
    }

    /// Materializes a block into a new matrix.
    pub fn submat(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Matrix<T>
    where
        T: Clone,
    {
        let c1 = if c1 == 0 { self.cols } else { c1 };
        let ids = self.block_ids(r0, r1, c0, c1);
        Matrix {
            rows: r1 - r0,
            cols: c1 - c0,
            data: ids.iter().map(|&i| self.data[i].clone()).collect(),
        }
    }

    // -- mutators --------------------------------------------------------

    /// Overwrites the content in flat order, keeping the shape. Panics when
    /// fewer values than elements are given; extra values are ignored.
    pub fn set(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert!(values.len() >= self.data.len(), "not enough values");
        let len = self.data.len();
        self.data.clone_from_slice(&values[..len]);
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for v in &mut self.data {
            *v = value.clone();
        }
    }

    /// Appends a row. An empty matrix adopts the input length as its column
    /// count; otherwise the length must match exactly.
    pub fn push_row(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert!(!values.is_empty(), "cannot push an empty row");
        if self.cols > 0 {
            assert!(values.len() == self.cols, "row length does not match");
        } else {
            self.cols = values.len();
        }
        self.data.extend_from_slice(values);
        self.rows += 1;
    }

    /// Appends a column. An empty matrix adopts the input length as its row
    /// count; otherwise the length must match exactly.
    pub fn push_col(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert!(!values.is_empty(), "cannot push an empty column");
        if self.rows > 0 {
            assert!(values.len() == self.rows, "column length does not match");
        } else {
            self.rows = values.len();
        }
        for r in (0..self.rows).rev() {
            self.data.insert(r * self.cols + self.cols, values[r].clone());
        }
        self.cols += 1;
    }

    /// Appends a default-filled row to a non-empty matrix.
    pub fn push_row_default(&mut self)
    where
        T: Clone + Default,
    {
        assert!(!self.is_empty(), "cannot grow an empty matrix");
        self.push_row(&vec![T::default(); self.cols]);
    }

    /// Appends a default-filled column to a non-empty matrix.
    pub fn push_col_default(&mut self)
    where
        T: Clone + Default,
    {
        assert!(!self.is_empty(), "cannot grow an empty matrix");
        self.push_col(&vec![T::default(); self.rows]);
    }

    /// Removes the last row; removing the only row clears the matrix.
    pub fn pop_row(&mut self) {
        assert!(self.rows > 0, "no row to pop");
        if self.rows == 1 {
            self.clear();
        } else {
            self.rows -= 1;
            self.data.truncate(self.rows * self.cols);
        }
    }

    /// Removes the last column; removing the only column clears the matrix.
    pub fn pop_col(&mut self) {
        assert!(self.cols > 0, "no column to pop");
        if self.cols == 1 {
            self.clear();
        } else {
            for r in (0..self.rows).rev() {
                self.data.remove(r * self.cols + self.cols - 1);
            }
            self.cols -= 1;
        }
    }

    pub fn delete_row(&mut self, row: usize) {
        assert!(row < self.rows, "row index out of bounds");
        if self.rows == 1 {
            self.clear();
        } else {
            self.data.drain(row * self.cols..(row + 1) * self.cols);
            self.rows -= 1;
        }
    }

    pub fn delete_col(&mut self, col: usize) {
        assert!(col < self.cols, "column index out of bounds");
        if self.cols == 1 {
            self.clear();
        } else {
            for r in (0..self.rows).rev() {
                self.data.remove(r * self.cols + col);
            }
            self.cols -= 1;
        }
    }

    /// Reshapes by matching columns first, then rows, growing with
    /// default-filled lines and shrinking from the high end. A zero target
    /// on either axis clears the matrix.
    pub fn reshape(&mut self, rows: usize, cols: usize)
    where
        T: Clone + Default,
    {
        if rows == 0 || cols == 0 {
            self.clear();
            return;
        }
        if self.rows == 0 {
            self.rows = rows;
        }
        while self.cols > cols {
            self.pop_col();
        }
        while self.cols < cols {
            self.push_col(&vec![T::default(); self.rows]);
        }
        while self.rows > rows {
            self.pop_row();
        }
        while self.rows < rows {
            self.push_row(&vec![T::default(); self.cols]);
        }
    }

    /// Resizes preserving the (row, col) of surviving elements; new cells
    /// are default-filled. A zero target on either axis clears the matrix.
    pub fn resize(&mut self, rows: usize, cols: usize)
    where
        T: Clone + Default,
    {
        if rows == 0 || cols == 0 {
            self.clear();
            return;
        }
        if cols == self.cols {
            self.data.resize(rows * cols, T::default());
        } else {
            let old = std::mem::take(&mut self.data);
            self.data = Vec::with_capacity(rows * cols);
            for r in 0..rows {
                for c in 0..cols {
                    if r < self.rows && c < self.cols {
                        self.data.push(old[r * self.cols + c].clone());
                    } else {
                        self.data.push(T::default());
                    }
                }
            }
        }
        self.rows = rows;
        self.cols = cols;
    }

    /// Transposes in place.
    pub fn transpose(&mut self)
    where
        T: Clone,
    {
        let old = self.clone();
        self.rows = old.cols;
        self.cols = old.rows;
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.data[r * self.cols + c] = old.data[c * old.cols + r].clone();
            }
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.rows = 0;
        self.cols = 0;
    }

    pub fn reserve(&mut self, rows: usize, cols: usize) {
        self.data
            .reserve((rows * cols).saturating_sub(self.data.len()));
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise conversion to another element type.
    pub fn cast<U>(&self) -> Matrix<U>
    where
        T: Clone + Into<U>,
    {
        self.mapv(|v| v.clone().into())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality compares flattened content only; two shapes holding the same
// elements in the same flat order are equal.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        self.at(index.0, index.1)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        self.at_mut(index.0, index.1)
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> Sequence for Matrix<T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, pos: usize) -> &T {
        &self.data[pos]
    }
}

impl<T> SequenceMut for Matrix<T> {
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.data[pos]
    }
}

impl<T> Shaped for Matrix<T> {
    fn dims(&self) -> Vec<usize> {
        vec![self.rows, self.cols]
    }
}
