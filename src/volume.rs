//! Rank-3 dense array with layer-major flat storage.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::capability::{Sequence, SequenceMut, Shaped};
use crate::subset::{Subset, SubsetMut};

/// Dense 3D container backed by a single flat `Vec`.
///
/// Flat position of (layer, row, col) is `l*(rows*cols) + r*cols + c`; the
/// flat length always equals `layers * rows * cols`. Dimensions are ordered
/// (layers, rows, cols) throughout the API. As with [`crate::matrix::Matrix`],
/// removing the last line on any axis clears the whole container.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Volume<T> {
    layers: usize,
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Volume<T> {
    pub fn new() -> Self {
        Self {
            layers: 0,
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Shapes the first `layers * rows * cols` elements of `data`. Panics
    /// when the buffer is too short; extra elements are dropped.
    pub fn from_vec(layers: usize, rows: usize, cols: usize, mut data: Vec<T>) -> Self {
        assert!(data.len() >= layers * rows * cols, "buffer too short for shape");
        data.truncate(layers * rows * cols);
        Self {
            layers,
            rows,
            cols,
            data,
        }
    }

    pub fn from_elem(layers: usize, rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            layers,
            rows,
            cols,
            data: vec![value; layers * rows * cols],
        }
    }

    /// Builds from nested layers of rows. The widest extents set the shape
    /// and missing elements are padded with the default value.
    pub fn from_nested(layers: &[Vec<Vec<T>>]) -> Self
    where
        T: Clone + Default,
    {
        let rows = layers.iter().map(|l| l.len()).max().unwrap_or(0);
        let cols = layers
            .iter()
            .flat_map(|l| l.iter().map(|r| r.len()))
            .max()
            .unwrap_or(0);
        let mut data = Vec::with_capacity(layers.len() * rows * cols);
        for layer in layers {
            for r in 0..rows {
                for c in 0..cols {
                    data.push(
                        layer
                            .get(r)
                            .and_then(|row| row.get(c))
                            .cloned()
                            .unwrap_or_default(),
                    );
                }
            }
        }
        Self {
            layers: layers.len(),
            rows,
            cols,
            data,
        }
    }

    pub fn layers(&self) -> usize {
        self.layers
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

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.layers, self.rows, self.cols)
    }

    pub fn is_cubic(&self) -> bool {
        self.layers == self.rows && self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.layers == 0 && self.rows == 0 && self.cols == 0
    }

    /// (layer, row, col) of a flat position. Panics when `idx` is out of
    /// bounds.
    pub fn position(&self, idx: usize) -> (usize, usize, usize) {
        assert!(idx < self.data.len(), "flat index out of bounds");
        let rest = idx % self.layer_size();
        (idx / self.layer_size(), rest / self.cols, rest % self.cols)
    }

    #[inline]
    fn layer_size(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    fn offset(&self, layer: usize, row: usize, col: usize) -> usize {
        layer * self.layer_size() + row * self.cols + col
    }

    pub fn at(&self, layer: usize, row: usize, col: usize) -> &T {
        assert!(layer < self.layers, "layer index out of bounds");
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        &self.data[self.offset(layer, row, col)]
    }

    pub fn at_mut(&mut self, layer: usize, row: usize, col: usize) -> &mut T {
        assert!(layer < self.layers, "layer index out of bounds");
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        let offset = self.offset(layer, row, col);
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

    /// One row within one layer.
    pub fn row_ids(&self, layer: usize, row: usize) -> Vec<usize> {
        assert!(layer < self.layers, "layer index out of bounds");
        assert!(row < self.rows, "row index out of bounds");
        (0..self.cols).map(|c| self.offset(layer, row, c)).collect()
    }

    /// One column within one layer.
    pub fn col_ids(&self, layer: usize, col: usize) -> Vec<usize> {
        assert!(layer < self.layers, "layer index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|r| self.offset(layer, r, col)).collect()
    }

    /// The same (row, col) cell across all layers.
    pub fn tow_ids(&self, row: usize, col: usize) -> Vec<usize> {
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.cols, "column index out of bounds");
        (0..self.layers)
            .map(|l| self.offset(l, row, col))
            .collect()
    }

    /// Upper diagonal of one layer, min(rows, cols) entries.
    pub fn diag_ids(&self, layer: usize) -> Vec<usize> {
        assert!(layer < self.layers, "layer index out of bounds");
        let base = layer * self.layer_size();
        (0..usize::min(self.rows, self.cols))
            .map(|i| base + i * (self.cols + 1))
            .collect()
    }

    /// All positions of one layer.
    pub fn layer_ids(&self, layer: usize) -> Vec<usize> {
        assert!(layer < self.layers, "layer index out of bounds");
        let base = layer * self.layer_size();
        (base..base + self.layer_size()).collect()
    }

    /// Row `row` of every layer, layer-major.
    pub fn row_layer_ids(&self, row: usize) -> Vec<usize> {
        assert!(row < self.rows, "row index out of bounds");
        let mut ids = Vec::with_capacity(self.layers * self.cols);
        for l in 0..self.layers {
            for c in 0..self.cols {
                ids.push(self.offset(l, row, c));
            }
        }
        ids
    }

    /// Column `col` of every layer, layer-major.
    pub fn col_layer_ids(&self, col: usize) -> Vec<usize> {
        assert!(col < self.cols, "column index out of bounds");
        let mut ids = Vec::with_capacity(self.layers * self.rows);
        for l in 0..self.layers {
            for r in 0..self.rows {
                ids.push(self.offset(l, r, col));
            }
        }
        ids
    }

    /// 2D block `[r0, r1) x [c0, c1)` within one layer.
    pub fn layer_block_ids(
        &self,
        layer: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Vec<usize> {
        assert!(layer < self.layers, "layer index out of bounds");
        assert!(r0 < r1 && r1 <= self.rows, "row block out of bounds");
        assert!(c0 < c1 && c1 <= self.cols, "column block out of bounds");
        let mut ids = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for r in r0..r1 {
            for c in c0..c1 {
                ids.push(self.offset(layer, r, c));
            }
        }
        ids
    }

    /// Block `[l0, l1) x [c0, c1)` at a fixed row, across layers.
    pub fn row_block_ids(
        &self,
        row: usize,
        l0: usize,
        l1: usize,
        c0: usize,
        c1: usize,
    ) -> Vec<usize> {
        assert!(row < self.rows, "row index out of bounds");
        assert!(l0 < l1 && l1 <= self.layers, "layer block out of bounds");
        assert!(c0 < c1 && c1 <= self.cols, "column block out of bounds");
        let mut ids = Vec::with_capacity((l1 - l0) * (c1 - c0));
        for l in l0..l1 {
            for c in c0..c1 {
                ids.push(self.offset(l, row, c));
            }
        }
        ids
    }

    /// Block `[l0, l1) x [r0, r1)` at a fixed column, across layers.
    pub fn col_block_ids(
        &self,
        col: usize,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
    ) -> Vec<usize> {
        assert!(col < self.cols, "column index out of bounds");
        assert!(l0 < l1 && l1 <= self.layers, "layer block out of bounds");
        assert!(r0 < r1 && r1 <= self.rows, "row block out of bounds");
        let mut ids = Vec::with_capacity((l1 - l0) * (r1 - r0));
        for l in l0..l1 {
            for r in r0..r1 {
                ids.push(self.offset(l, r, col));
            }
        }
        ids
    }

    /// 3D sub-box `[l0, l1) x [r0, r1) x [c0, c1)`.
    pub fn cube_ids(
        &self,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Vec<usize> {
        assert!(l0 < l1 && l1 <= self.layers, "layer block out of bounds");
        assert!(r0 < r1 && r1 <= self.rows, "row block out of bounds");
        assert!(c0 < c1 && c1 <= self.cols, "column block out of bounds");
        let mut ids = Vec::with_capacity((l1 - l0) * (r1 - r0) * (c1 - c0));
        for l in l0..l1 {
            for r in r0..r1 {
                for c in c0..c1 {
                    ids.push(self.offset(l, r, c));
                }
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

    pub fn row(&self, layer: usize, row: usize) -> Subset<'_, Self> {
        Subset::new(self, self.row_ids(layer, row))
    }

    pub fn row_mut(&mut self, layer: usize, row: usize) -> SubsetMut<'_, Self> {
        let ids = self.row_ids(layer, row);
        SubsetMut::new(self, ids)
    }

    pub fn col(&self, layer: usize, col: usize) -> Subset<'_, Self> {
        Subset::new(self, self.col_ids(layer, col))
    }

    pub fn col_mut(&mut self, layer: usize, col: usize) -> SubsetMut<'_, Self> {
        let ids = self.col_ids(layer, col);
        SubsetMut::new(self, ids)
    }

    pub fn tow(&self, row: usize, col: usize) -> Subset<'_, Self> {
        Subset::new(self, self.tow_ids(row, col))
    }

    pub fn tow_mut(&mut self, row: usize, col: usize) -> SubsetMut<'_, Self> {
        let ids = self.tow_ids(row, col);
        SubsetMut::new(self, ids)
    }

    pub fn diag(&self, layer: usize) -> Subset<'_, Self> {
        Subset::new(self, self.diag_ids(layer))
    }

    pub fn diag_mut(&mut self, layer: usize) -> SubsetMut<'_, Self> {
        let ids = self.diag_ids(layer);
        SubsetMut::new(self, ids)
    }

    pub fn layer(&self, layer: usize) -> Subset<'_, Self> {
        Subset::new(self, self.layer_ids(layer))
    }

    pub fn layer_mut(&mut self, layer: usize) -> SubsetMut<'_, Self> {
        let ids = self.layer_ids(layer);
        SubsetMut::new(self, ids)
    }

    pub fn row_layer(&self, row: usize) -> Subset<'_, Self> {
        Subset::new(self, self.row_layer_ids(row))
    }

    pub fn row_layer_mut(&mut self, row: usize) -> SubsetMut<'_, Self> {
        let ids = self.row_layer_ids(row);
        SubsetMut::new(self, ids)
    }

    pub fn col_layer(&self, col: usize) -> Subset<'_, Self> {
        Subset::new(self, self.col_layer_ids(col))
    }

    pub fn col_layer_mut(&mut self, col: usize) -> SubsetMut<'_, Self> {
        let ids = self.col_layer_ids(col);
        SubsetMut::new(self, ids)
    }

    pub fn layer_block(
        &self,
        layer: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Subset<'_, Self> {
        Subset::new(self, self.layer_block_ids(layer, r0, r1, c0, c1))
    }

    pub fn layer_block_mut(
        &mut self,
        layer: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> SubsetMut<'_, Self> {
        let ids = self.layer_block_ids(layer, r0, r1, c0, c1);
        SubsetMut::new(self, ids)
    }

    pub fn row_block(
        &self,
        row: usize,
        l0: usize,
        l1: usize,
        c0: usize,
        c1: usize,
    ) -> Subset<'_, Self> {
        Subset::new(self, self.row_block_ids(row, l0, l1, c0, c1))
    }

    pub fn row_block_mut(
        &mut self,
        row: usize,
        l0: usize,
        l1: usize,
        c0: usize,
        c1: usize,
    ) -> SubsetMut<'_, Self> {
        let ids = self.row_block_ids(row, l0, l1, c0, c1);
        SubsetMut::new(self, ids)
    }

    pub fn col_block(
        &self,
        col: usize,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
    ) -> Subset<'_, Self> {
        Subset::new(self, self.col_block_ids(col, l0, l1, r0, r1))
    }

    pub fn col_block_mut(
        &mut self,
        col: usize,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
    ) -> SubsetMut<'_, Self> {
        let ids = self.col_block_ids(col, l0, l1, r0, r1);
        SubsetMut::new(self, ids)
    }

    pub fn cube(
        &self,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Subset<'_, Self> {
        Subset::new(self, self.cube_ids(l0, l1, r0, r1, c0, c1))
    }

    pub fn cube_mut(
        &mut self,
        l0: usize,
        l1: usize,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> SubsetMut<'_, Self> {
        let ids = self.cube_ids(l0, l1, r0, r1, c0, c1);
        SubsetMut::new(self, ids)
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

    /// Appends one layer of `rows * cols` values. An empty volume adopts a
    /// 1 x len layer shape.
    pub fn push_layer(&mut self, values: &[T])
    where
        T: Clone,
    {
        if self.layer_size() == 0 && self.layers == 0 {
            assert!(!values.is_empty(), "cannot push an empty layer");
            self.rows = 1;
            self.cols = values.len();
        } else {
            assert!(values.len() >= self.layer_size(), "layer too short");
        }
        self.data.extend_from_slice(&values[..self.layer_size()]);
        self.layers += 1;
    }

    /// Appends one row to every layer: `layers * cols` values, the slice
    /// for layer `l` at `values[l*cols..(l+1)*cols]`. An empty volume
    /// adopts one layer and the input length as its column count.
    pub fn push_row(&mut self, values: &[T])
    where
        T: Clone,
    {
        if self.layers == 0 {
            assert!(!values.is_empty(), "cannot push an empty row");
            self.layers = 1;
            self.cols = values.len();
        } else {
            assert!(values.len() >= self.layers * self.cols, "row block too short");
        }
        let ls = self.layer_size();
        for l in (0..self.layers).rev() {
            let at = (l + 1) * ls;
            self.data
                .splice(at..at, values[l * self.cols..(l + 1) * self.cols].iter().cloned());
        }
        self.rows += 1;
    }

    /// Appends one column to every layer: `layers * rows` values, the value
    /// for (layer l, row r) at `values[r*layers + l]`. An empty volume
    /// adopts one layer and the input length as its row count.
    pub fn push_col(&mut self, values: &[T])
    where
        T: Clone,
    {
        if self.layers == 0 {
            assert!(!values.is_empty(), "cannot push an empty column");
            self.layers = 1;
            self.rows = values.len();
        } else {
            assert!(
                values.len() >= self.layers * self.rows,
                "column block too short"
            );
        }
        let ls = self.layer_size();
        for l in (0..self.layers).rev() {
            for r in (0..self.rows).rev() {
                self.data
                    .insert(l * ls + r * self.cols + self.cols, values[r * self.layers + l].clone());
            }
        }
        self.cols += 1;
    }

    /// Removes the last layer; removing the only layer clears the volume.
    pub fn pop_layer(&mut self) {
        assert!(self.layers > 0, "no layer to pop");
        if self.layers == 1 {
            self.clear();
        } else {
            self.layers -= 1;
            self.data.truncate(self.layers * self.layer_size());
        }
    }

    /// Removes the last row of every layer; removing the only row clears
    /// the volume.
    pub fn pop_row(&mut self) {
        assert!(self.rows > 0, "no row to pop");
        if self.rows == 1 {
            self.clear();
        } else {
            let ls = self.layer_size();
            for l in (0..self.layers).rev() {
                let start = l * ls + (self.rows - 1) * self.cols;
                self.data.drain(start..start + self.cols);
            }
            self.rows -= 1;
        }
    }

    /// Removes the last column of every layer; removing the only column
    /// clears the volume.
    pub fn pop_col(&mut self) {
        assert!(self.cols > 0, "no column to pop");
        if self.cols == 1 {
            self.clear();
        } else {
            let ls = self.layer_size();
            for l in (0..self.layers).rev() {
                for r in (0..self.rows).rev() {
                    self.data.remove(l * ls + r * self.cols + self.cols - 1);
                }
            }
            self.cols -= 1;
        }
    }

    pub fn delete_layer(&mut self, layer: usize) {
        assert!(layer < self.layers, "layer index out of bounds");
        if self.layers == 1 {
            self.clear();
        } else {
            let ls = self.layer_size();
            self.data.drain(layer * ls..(layer + 1) * ls);
            self.layers -= 1;
        }
    }

    pub fn delete_row(&mut self, row: usize) {
        assert!(row < self.rows, "row index out of bounds");
        if self.rows == 1 {
            self.clear();
        } else {
            let ls = self.layer_size();
            for l in (0..self.layers).rev() {
                let start = l * ls + row * self.cols;
                self.data.drain(start..start + self.cols);
            }
            self.rows -= 1;
        }
    }

    pub fn delete_col(&mut self, col: usize) {
        assert!(col < self.cols, "column index out of bounds");
        if self.cols == 1 {
            self.clear();
        } else {
            let ls = self.layer_size();
            for l in (0..self.layers).rev() {
                for r in (0..self.rows).rev() {
                    self.data.remove(l * ls + r * self.cols + col);
                }
            }
            self.cols -= 1;
        }
    }

    /// Reshapes by matching columns, then rows, then layers, growing with
    /// default-filled lines and shrinking from the high end. A zero target
    /// on any axis clears the volume.
    pub fn reshape(&mut self, layers: usize, rows: usize, cols: usize)
    where
        T: Clone + Default,
    {
        if layers == 0 || rows == 0 || cols == 0 {
            self.clear();
            return;
        }
        if self.layers == 0 {
            self.layers = layers;
        }
        while self.cols > cols {
            self.pop_col();
        }
        while self.cols < cols {
            self.push_col(&vec![T::default(); self.layers * self.rows]);
        }
        while self.rows > rows {
            self.pop_row();
        }
        while self.rows < rows {
            self.push_row(&vec![T::default(); self.layers * self.cols]);
        }
        while self.layers > layers {
            self.pop_layer();
        }
        while self.layers < layers {
            self.push_layer(&vec![T::default(); self.layer_size()]);
        }
    }

    /// Resizes preserving the (layer, row, col) of surviving elements; new
    /// cells are default-filled. A zero target on any axis clears the
    /// volume.
    pub fn resize(&mut self, layers: usize, rows: usize, cols: usize)
    where
        T: Clone + Default,
    {
        if layers == 0 || rows == 0 || cols == 0 {
            self.clear();
            return;
        }
        if rows == self.rows && cols == self.cols {
            self.data.resize(layers * rows * cols, T::default());
        } else {
            let old = std::mem::take(&mut self.data);
            self.data = Vec::with_capacity(layers * rows * cols);
            for l in 0..layers {
                for r in 0..rows {
                    for c in 0..cols {
                        if l < self.layers && r < self.rows && c < self.cols {
                            self.data.push(old[self.offset(l, r, c)].clone());
                        } else {
                            self.data.push(T::default());
                        }
                    }
                }
            }
        }
        self.layers = layers;
        self.rows = rows;
        self.cols = cols;
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.layers = 0;
        self.rows = 0;
        self.cols = 0;
    }

    pub fn reserve(&mut self, layers: usize, rows: usize, cols: usize) {
        self.data
            .reserve((layers * rows * cols).saturating_sub(self.data.len()));
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Volume<U>
    where
        F: FnMut(&T) -> U,
    {
        Volume {
            data: self.data.iter().map(|v| f(v)).collect(),
            layers: self.layers,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise conversion to another element type.
    pub fn cast<U>(&self) -> Volume<U>
    where
        T: Clone + Into<U>,
    {
        self.mapv(|v| v.clone().into())
    }
}

impl<T> Default for Volume<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality compares flattened content only, as for Matrix.
impl<T: PartialEq> PartialEq for Volume<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> Index<(usize, usize, usize)> for Volume<T> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &T {
        self.at(index.0, index.1, index.2)
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Volume<T> {
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut T {
        self.at_mut(index.0, index.1, index.2)
    }
}

impl<T> Index<usize> for Volume<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Volume<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> Sequence for Volume<T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, pos: usize) -> &T {
        &self.data[pos]
    }
}

impl<T> SequenceMut for Volume<T> {
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.data[pos]
    }
}

impl<T> Shaped for Volume<T> {
    fn dims(&self) -> Vec<usize> {
        vec![self.layers, self.rows, self.cols]
    }
}
