//! Sliding-window cursor over a linear container.

use std::ops::{Add, Sub};

use crate::capability::Sequence;
use crate::cast_iter::CastIter;

/// Cursor that exposes a window of `width` elements and moves in strides of
/// `width - overlap`.
///
/// The window start never leaves `[0, len]` and only moves in whole strides;
/// an advance that would push the start past the end is ignored, as is a
/// retreat past the start. The last window may be shorter than `width` when
/// the container length is not stride-aligned.
pub struct RangeIter<'a, C: Sequence, T> {
    container: &'a C,
    pos: usize,
    width: usize,
    step: usize,
    project: fn(&C::Elem) -> &T,
}

impl<'a, C: Sequence, T: 'a> RangeIter<'a, C, T> {
    /// Windowed cursor with an explicit element projection.
    ///
    /// Panics when `pos` lies past the end, `width` is zero, or `overlap`
    /// is not smaller than `width`.
    pub fn with_projection(
        container: &'a C,
        pos: usize,
        width: usize,
        overlap: usize,
        project: fn(&C::Elem) -> &T,
    ) -> Self {
        assert!(pos <= container.len(), "window position out of bounds");
        assert!(width > 0, "window width must be positive");
        assert!(overlap < width, "overlap must be smaller than the width");
        Self {
            container,
            pos,
            width,
            step: width - overlap,
            project,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn source_len(&self) -> usize {
        self.container.len()
    }

    /// Number of elements actually covered by the current window.
    pub fn len(&self) -> usize {
        usize::min(self.pos + self.width, self.container.len()) - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at the first element of the window.
    pub fn begin(&self) -> CastIter<'a, C, T> {
        CastIter::with_projection(self.container, self.pos, self.project)
    }

    /// Cursor one past the last element of the window.
    pub fn end(&self) -> CastIter<'a, C, T> {
        let stop = usize::min(self.pos + self.width, self.container.len());
        CastIter::with_projection(self.container, stop, self.project)
    }

    /// Iterates over the elements of the current window.
    pub fn iter(&self) -> std::iter::Take<CastIter<'a, C, T>> {
        self.begin().take(self.len())
    }

    /// Element at offset `i` from the window start. Panics past the source
    /// end.
    pub fn get(&self, i: usize) -> &'a T {
        assert!(self.pos + i < self.container.len(), "window offset out of bounds");
        let container: &'a C = self.container;
        (self.project)(container.at(self.pos + i))
    }

    /// Moves one stride forward when the next window start still exists.
    pub fn advance(&mut self) {
        if self.pos + self.step <= self.container.len() {
            self.pos += self.step;
        }
    }

    /// Moves one stride back when a previous window start exists.
    pub fn retreat(&mut self) {
        if self.pos >= self.step {
            self.pos -= self.step;
        }
    }

    /// Moves up to `n` whole strides forward.
    pub fn advance_by(&mut self, n: usize) {
        let available = (self.container.len() - self.pos) / self.step;
        self.pos += usize::min(n, available) * self.step;
    }

    /// Moves up to `n` whole strides back.
    pub fn retreat_by(&mut self, n: usize) {
        let available = self.pos / self.step;
        self.pos -= usize::min(n, available) * self.step;
    }

    fn advanced(&self) -> Self {
        let mut it = *self;
        it.advance();
        it
    }

    fn retreated(&self) -> Self {
        let mut it = *self;
        it.retreat();
        it
    }

    /// True when no retreat can move the window: stepping back does not
    /// change the cursor.
    pub fn first(&self) -> bool {
        *self == self.retreated()
    }

    /// True when no advance can move the window: stepping forward does not
    /// change the cursor.
    pub fn last(&self) -> bool {
        *self == self.advanced()
    }

    fn same_source(&self, other: &Self) -> bool {
        std::ptr::eq(self.container, other.container)
    }
}

impl<'a, C, T: 'a> RangeIter<'a, C, T>
where
    C: Sequence<Elem = T>,
{
    /// Identity windowed cursor over a container whose elements are `T`.
    pub fn new(container: &'a C, pos: usize, width: usize, overlap: usize) -> Self {
        Self::with_projection(container, pos, width, overlap, |e| e)
    }
}

impl<'a, C: Sequence, T> Clone for RangeIter<'a, C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: Sequence, T> Copy for RangeIter<'a, C, T> {}

impl<'a, C: Sequence, T> PartialEq for RangeIter<'a, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_source(other) && self.pos == other.pos && self.width == other.width
    }
}

// Ordering considers the window start only.
impl<'a, C: Sequence, T> PartialOrd for RangeIter<'a, C, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.same_source(other) {
            self.pos.partial_cmp(&other.pos)
        } else {
            None
        }
    }
}

/// Signed distance between two window starts over the same source.
impl<'a, C: Sequence, T> Sub for RangeIter<'a, C, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        assert!(self.same_source(&rhs), "cursors over different sources");
        self.pos as isize - rhs.pos as isize
    }
}

impl<'a, C: Sequence, T: 'a> Add<isize> for RangeIter<'a, C, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        if n >= 0 {
            self.advance_by(n as usize);
        } else {
            self.retreat_by(n.unsigned_abs());
        }
        self
    }
}

impl<'a, C: Sequence, T: 'a> Sub<isize> for RangeIter<'a, C, T> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        self + (-n)
    }
}
