//! Non-owning index-based views over linear containers.
//!
//! A view is an ordered list of flat positions into a borrowed source. The
//! positions may repeat and may come in any order, so a single view type
//! covers rows, columns, diagonals, blocks, and arbitrary gathers alike.
//! `Subset` borrows its source shared; `SubsetMut` borrows it exclusively
//! and writes through, and the borrow checker keeps either from outliving a
//! structural change to the source.

use std::ops::{Index, IndexMut};

use crate::capability::{Sequence, SequenceMut};

fn check_index<C: Sequence>(source: &C, index: &[usize]) {
    for &i in index {
        assert!(i < source.len(), "view index out of bounds");
    }
}

/// Shared view: a source reference plus the flat positions it exposes.
pub struct Subset<'a, C: Sequence> {
    source: &'a C,
    index: Vec<usize>,
}

impl<'a, C: Sequence> Subset<'a, C> {
    /// Panics when any position lies outside the source.
    pub fn new(source: &'a C, index: Vec<usize>) -> Self {
        check_index(source, &index);
        Self { source, index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn source(&self) -> &'a C {
        self.source
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Element at position `i` of the view. Panics when `i` is out of
    /// bounds.
    pub fn get(&self, i: usize) -> &'a C::Elem {
        self.source.at(self.index[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a C::Elem> + '_ {
        let source = self.source;
        self.index.iter().map(move |&i| source.at(i))
    }

    /// Sub-view over `[start, stop)` of this view's positions. A `stop` of
    /// 0 means to-the-end; otherwise `stop` must not precede `start`.
    pub fn range(&self, start: usize, stop: usize) -> Subset<'a, C> {
        assert!(start <= self.index.len(), "range start out of bounds");
        let last = if stop == 0 { self.index.len() } else { stop };
        assert!(last >= start, "range stop before start");
        assert!(last <= self.index.len(), "range stop out of bounds");
        Subset {
            source: self.source,
            index: self.index[start..last].to_vec(),
        }
    }

    /// Sub-view over `[first, last)`, both bounds required in range.
    pub fn segment(&self, first: usize, last: usize) -> Subset<'a, C> {
        assert!(
            first < last && last < self.index.len(),
            "segment bounds out of range"
        );
        Subset {
            source: self.source,
            index: self.index[first..last].to_vec(),
        }
    }

    /// Materializes the viewed elements in view order.
    pub fn to_vec(&self) -> Vec<C::Elem>
    where
        C::Elem: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Materializes with an elementwise conversion.
    pub fn cast_vec<U>(&self) -> Vec<U>
    where
        C::Elem: Clone + Into<U>,
    {
        self.iter().map(|v| v.clone().into()).collect()
    }
}

impl<'a, C: Sequence> Clone for Subset<'a, C> {
    fn clone(&self) -> Self {
        Subset {
            source: self.source,
            index: self.index.clone(),
        }
    }
}

impl<'a, C: Sequence> Index<usize> for Subset<'a, C> {
    type Output = C::Elem;

    fn index(&self, i: usize) -> &C::Elem {
        self.get(i)
    }
}

/// Exclusive view: writes go through to the source.
pub struct SubsetMut<'a, C: SequenceMut> {
    source: &'a mut C,
    index: Vec<usize>,
}

impl<'a, C: SequenceMut> SubsetMut<'a, C> {
    /// Panics when any position lies outside the source.
    pub fn new(source: &'a mut C, index: Vec<usize>) -> Self {
        check_index(source, &index);
        Self { source, index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn get(&self, i: usize) -> &C::Elem {
        self.source.at(self.index[i])
    }

    pub fn get_mut(&mut self, i: usize) -> &mut C::Elem {
        self.source.at_mut(self.index[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &C::Elem> {
        let source: &C = self.source;
        self.index.iter().map(move |&i| source.at(i))
    }

    /// Broadcasts one value through the view.
    pub fn fill(&mut self, value: C::Elem)
    where
        C::Elem: Clone,
    {
        for &i in &self.index {
            *self.source.at_mut(i) = value.clone();
        }
    }

    /// Writes `values` through the view in order. Panics when fewer values
    /// than view positions are given; extra values are ignored.
    pub fn assign(&mut self, values: &[C::Elem])
    where
        C::Elem: Clone,
    {
        assert!(values.len() >= self.index.len(), "not enough values to assign");
        for (n, &i) in self.index.iter().enumerate() {
            *self.source.at_mut(i) = values[n].clone();
        }
    }

    /// Writes the content of another view through this one. The right-hand
    /// view must be at least as long; extra elements are ignored.
    pub fn assign_view<C2>(&mut self, other: &Subset<'_, C2>)
    where
        C2: Sequence<Elem = C::Elem>,
        C::Elem: Clone,
    {
        assert!(other.len() >= self.index.len(), "not enough values to assign");
        for (n, &i) in self.index.iter().enumerate() {
            *self.source.at_mut(i) = other.get(n).clone();
        }
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut C::Elem),
    {
        for &i in &self.index {
            f(self.source.at_mut(i));
        }
    }

    /// Shared snapshot of this view, for reading and non-mutating
    /// arithmetic.
    pub fn as_subset(&self) -> Subset<'_, C> {
        Subset {
            source: &*self.source,
            index: self.index.clone(),
        }
    }

    /// Exclusive sub-view over `[start, stop)` of this view's positions;
    /// `stop == 0` means to-the-end, otherwise `stop` must not precede
    /// `start`.
    pub fn range_mut(&mut self, start: usize, stop: usize) -> SubsetMut<'_, C> {
        assert!(start <= self.index.len(), "range start out of bounds");
        let last = if stop == 0 { self.index.len() } else { stop };
        assert!(last >= start, "range stop before start");
        assert!(last <= self.index.len(), "range stop out of bounds");
        SubsetMut {
            index: self.index[start..last].to_vec(),
            source: &mut *self.source,
        }
    }

    /// Exclusive sub-view over `[first, last)`.
    pub fn segment_mut(&mut self, first: usize, last: usize) -> SubsetMut<'_, C> {
        assert!(
            first < last && last < self.index.len(),
            "segment bounds out of range"
        );
        SubsetMut {
            index: self.index[first..last].to_vec(),
            source: &mut *self.source,
        }
    }

    pub fn to_vec(&self) -> Vec<C::Elem>
    where
        C::Elem: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn cast_vec<U>(&self) -> Vec<U>
    where
        C::Elem: Clone + Into<U>,
    {
        self.iter().map(|v| v.clone().into()).collect()
    }
}

impl<'a, C: SequenceMut> Index<usize> for SubsetMut<'a, C> {
    type Output = C::Elem;

    fn index(&self, i: usize) -> &C::Elem {
        self.get(i)
    }
}

impl<'a, C: SequenceMut> IndexMut<usize> for SubsetMut<'a, C> {
    fn index_mut(&mut self, i: usize) -> &mut C::Elem {
        self.get_mut(i)
    }
}
