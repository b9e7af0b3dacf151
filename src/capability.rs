//! Container capability traits.
//!
//! Adapters in this crate stay generic over the container they wrap by
//! requiring only the capabilities they actually use: positional access,
//! growth at either end, capacity reservation, clearing, and keyed element
//! access. `Vec` and `VecDeque` implement the full set (minus front growth
//! for `Vec`).

use std::collections::VecDeque;

/// Positional read access over a linear container.
pub trait Sequence {
    type Elem;

    fn len(&self) -> usize;

    /// Element at `pos`. Panics when `pos` is out of bounds.
    fn at(&self, pos: usize) -> &Self::Elem;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn front(&self) -> Option<&Self::Elem> {
        if self.is_empty() {
            None
        } else {
            Some(self.at(0))
        }
    }

    fn back(&self) -> Option<&Self::Elem> {
        if self.is_empty() {
            None
        } else {
            Some(self.at(self.len() - 1))
        }
    }
}

/// Positional write access.
pub trait SequenceMut: Sequence {
    fn at_mut(&mut self, pos: usize) -> &mut Self::Elem;
}

/// Growth and removal at the back.
pub trait BackInsert: Sequence {
    fn push_back(&mut self, elem: Self::Elem);
    fn pop_back(&mut self) -> Option<Self::Elem>;
}

/// Growth and removal at the front.
pub trait FrontInsert: Sequence {
    fn push_front(&mut self, elem: Self::Elem);
    fn pop_front(&mut self) -> Option<Self::Elem>;
}

/// Capacity reservation.
pub trait Reservable {
    fn reserve(&mut self, additional: usize);
}

/// Removal of all elements.
pub trait Clearable {
    fn clear(&mut self);
}

/// Elements that carry a lookup key next to their payload value.
pub trait Keyed {
    type Key: PartialEq;
    type Value;

    fn key(&self) -> &Self::Key;
    fn key_mut(&mut self) -> &mut Self::Key;
    fn value(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;
}

/// Containers with a rectangular shape behind their flat storage.
pub trait Shaped {
    /// Dimensions ordered major to minor.
    fn dims(&self) -> Vec<usize>;

    /// Decomposes a flat position into per-axis coordinates.
    fn position_of(&self, flat: usize) -> Vec<usize> {
        let dims = self.dims();
        let mut pos = vec![0; dims.len()];
        let mut rem = flat;
        for a in (0..dims.len()).rev() {
            pos[a] = rem % dims[a];
            rem /= dims[a];
        }
        pos
    }
}

impl<T> Sequence for Vec<T> {
    type Elem = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T> SequenceMut for Vec<T> {
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}

impl<T> BackInsert for Vec<T> {
    fn push_back(&mut self, elem: T) {
        self.push(elem);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T> Reservable for Vec<T> {
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

impl<T> Clearable for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Elem = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T> SequenceMut for VecDeque<T> {
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}

impl<T> BackInsert for VecDeque<T> {
    fn push_back(&mut self, elem: T) {
        VecDeque::push_back(self, elem);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
}

impl<T> FrontInsert for VecDeque<T> {
    fn push_front(&mut self, elem: T) {
        VecDeque::push_front(self, elem);
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> Reservable for VecDeque<T> {
    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }
}

impl<T> Clearable for VecDeque<T> {
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}
