//! Random-access cursor that projects container elements to a target type.

use std::ops::{Add, Sub};

use crate::capability::Sequence;

/// Cursor over a borrowed container yielding `&T` through an explicit
/// projection.
///
/// The projection is what lets one cursor type walk both plain containers
/// (identity projection) and key-augmented ones (project to the payload).
/// The position is always kept inside `[0, len]`; movement past either end
/// clamps instead of wrapping.
pub struct CastIter<'a, C: Sequence, T> {
    container: &'a C,
    pos: usize,
    project: fn(&C::Elem) -> &T,
}

impl<'a, C: Sequence, T> CastIter<'a, C, T> {
    /// Cursor with an explicit element projection. Panics when `pos` lies
    /// past the end.
    pub fn with_projection(container: &'a C, pos: usize, project: fn(&C::Elem) -> &T) -> Self {
        assert!(pos <= container.len(), "cursor position out of bounds");
        Self {
            container,
            pos,
            project,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn source_len(&self) -> usize {
        self.container.len()
    }

    /// True once the cursor sits one past the last element.
    pub fn at_end(&self) -> bool {
        self.pos == self.container.len()
    }

    /// Element under the cursor. Panics at the end position.
    pub fn get(&self) -> &'a T {
        let container: &'a C = self.container;
        (self.project)(container.at(self.pos))
    }

    /// Moves forward `n` positions, stopping at the end.
    pub fn advance_by(&mut self, n: usize) {
        self.pos = usize::min(self.pos + n, self.container.len());
    }

    /// Moves back `n` positions, stopping at the start.
    pub fn retreat_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Retargets the cursor to a different element projection.
    pub fn cast<U>(self, project: fn(&C::Elem) -> &U) -> CastIter<'a, C, U> {
        CastIter {
            container: self.container,
            pos: self.pos,
            project,
        }
    }

    pub(crate) fn same_source(&self, other: &Self) -> bool {
        std::ptr::eq(self.container, other.container)
    }
}

impl<'a, C, T> CastIter<'a, C, T>
where
    C: Sequence<Elem = T>,
{
    /// Identity cursor over a container whose elements are already `T`.
    pub fn new(container: &'a C, pos: usize) -> Self {
        Self::with_projection(container, pos, |e| e)
    }
}

impl<'a, C: Sequence, T> Clone for CastIter<'a, C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: Sequence, T> Copy for CastIter<'a, C, T> {}

impl<'a, C: Sequence, T: 'a> Iterator for CastIter<'a, C, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.pos < self.container.len() {
            let container: &'a C = self.container;
            let item = (self.project)(container.at(self.pos));
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.container.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a, C: Sequence, T: 'a> ExactSizeIterator for CastIter<'a, C, T> {}

impl<'a, C: Sequence, T> PartialEq for CastIter<'a, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_source(other) && self.pos == other.pos
    }
}

impl<'a, C: Sequence, T> PartialOrd for CastIter<'a, C, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.same_source(other) {
            self.pos.partial_cmp(&other.pos)
        } else {
            None
        }
    }
}

/// Signed distance between two cursors over the same source.
impl<'a, C: Sequence, T> Sub for CastIter<'a, C, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        assert!(self.same_source(&rhs), "cursors over different sources");
        self.pos as isize - rhs.pos as isize
    }
}

impl<'a, C: Sequence, T> Add<isize> for CastIter<'a, C, T> {
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

impl<'a, C: Sequence, T> Sub<isize> for CastIter<'a, C, T> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        self + (-n)
    }
}
