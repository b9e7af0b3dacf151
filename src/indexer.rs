//! Key-augmented adapter over linear containers.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::capability::{BackInsert, Clearable, FrontInsert, Keyed, Reservable, Sequence, SequenceMut};
use crate::cast_iter::CastIter;
use crate::error::LookupError;
use crate::range_iter::RangeIter;
use crate::tagged::Tagged;

/// Adapter that gives a sequence of keyed elements a value-typed face.
///
/// Positional access, key lookup, and iteration all speak the payload type;
/// keys stay reachable through `key`/`key_mut`. Keys need not be unique:
/// lookup is a linear scan returning the first match, and a miss is a
/// recoverable [`LookupError`] rather than a panic.
///
/// With `LOCKED = true` the adapter refuses size changes at compile time
/// (the growth and removal methods only exist on the unlocked form) and
/// refuses empty construction at run time. Content mutation stays available
/// either way.
pub struct Indexer<C, const LOCKED: bool = false> {
    data: C,
}

/// Keyed growable sequence over `Vec<Tagged<T, K>>`.
pub type Series<T, K = String> = Indexer<Vec<Tagged<T, K>>, false>;

/// Size-frozen variant of [`Series`].
pub type LockedSeries<T, K = String> = Indexer<Vec<Tagged<T, K>>, true>;

impl<C, const LOCKED: bool> Indexer<C, LOCKED>
where
    C: Sequence,
    C::Elem: Keyed,
{
    /// Wraps an existing container. Panics when `LOCKED` and the container
    /// is empty.
    pub fn new(data: C) -> Self {
        assert!(
            !LOCKED || !data.is_empty(),
            "locked container cannot be empty"
        );
        Self { data }
    }

    /// Builds from bare values under default keys.
    pub fn from_values<V>(values: Vec<V>) -> Self
    where
        C: Default + BackInsert,
        C::Elem: From<V>,
    {
        let mut data = C::default();
        for value in values {
            data.push_back(C::Elem::from(value));
        }
        Self::new(data)
    }

    /// Builds from values and their keys, pairwise. Panics when the lists
    /// differ in length.
    pub fn with_keys<V>(values: Vec<V>, keys: Vec<<C::Elem as Keyed>::Key>) -> Self
    where
        C: Default + BackInsert,
        C::Elem: From<V>,
    {
        assert!(keys.len() == values.len(), "one key per value required");
        let mut data = C::default();
        for (value, key) in values.into_iter().zip(keys) {
            let mut elem = C::Elem::from(value);
            *elem.key_mut() = key;
            data.push_back(elem);
        }
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `pos`. Panics when out of bounds.
    pub fn at(&self, pos: usize) -> &<C::Elem as Keyed>::Value {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at(pos).value()
    }

    pub fn at_mut(&mut self, pos: usize) -> &mut <C::Elem as Keyed>::Value
    where
        C: SequenceMut,
    {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at_mut(pos).value_mut()
    }

    /// Key at `pos`. Panics when out of bounds.
    pub fn key(&self, pos: usize) -> &<C::Elem as Keyed>::Key {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at(pos).key()
    }

    pub fn key_mut(&mut self, pos: usize) -> &mut <C::Elem as Keyed>::Key
    where
        C: SequenceMut,
    {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at_mut(pos).key_mut()
    }

    /// Position of the first element carrying `key`.
    pub fn find(&self, key: &<C::Elem as Keyed>::Key) -> Result<usize, LookupError>
    where
        <C::Elem as Keyed>::Key: fmt::Display,
    {
        for pos in 0..self.data.len() {
            if self.data.at(pos).key() == key {
                return Ok(pos);
            }
        }
        Err(LookupError::KeyNotFound(key.to_string()))
    }

    /// Value of the first element carrying `key`.
    pub fn at_key(&self, key: &<C::Elem as Keyed>::Key) -> Result<&<C::Elem as Keyed>::Value, LookupError>
    where
        <C::Elem as Keyed>::Key: fmt::Display,
    {
        self.find(key).map(|pos| self.data.at(pos).value())
    }

    pub fn at_key_mut(
        &mut self,
        key: &<C::Elem as Keyed>::Key,
    ) -> Result<&mut <C::Elem as Keyed>::Value, LookupError>
    where
        C: SequenceMut,
        <C::Elem as Keyed>::Key: fmt::Display,
    {
        let pos = self.find(key)?;
        Ok(self.data.at_mut(pos).value_mut())
    }

    pub fn get_keys(&self) -> Vec<<C::Elem as Keyed>::Key>
    where
        <C::Elem as Keyed>::Key: Clone,
    {
        (0..self.data.len())
            .map(|pos| self.data.at(pos).key().clone())
            .collect()
    }

    /// Rewrites the keys in order. Panics when fewer keys than elements are
    /// given; extra keys are ignored.
    pub fn set_keys(&mut self, keys: &[<C::Elem as Keyed>::Key])
    where
        C: SequenceMut,
        <C::Elem as Keyed>::Key: Clone,
    {
        assert!(keys.len() >= self.data.len(), "not enough keys");
        for pos in 0..self.data.len() {
            *self.data.at_mut(pos).key_mut() = keys[pos].clone();
        }
    }

    pub fn front(&self) -> Option<&<C::Elem as Keyed>::Value> {
        self.data.front().map(|e| e.value())
    }

    pub fn back(&self) -> Option<&<C::Elem as Keyed>::Value> {
        self.data.back().map(|e| e.value())
    }

    /// Whole element (key and value) at `pos`.
    pub fn element(&self, pos: usize) -> &C::Elem {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at(pos)
    }

    pub fn element_mut(&mut self, pos: usize) -> &mut C::Elem
    where
        C: SequenceMut,
    {
        assert!(pos < self.data.len(), "position out of bounds");
        self.data.at_mut(pos)
    }

    /// The underlying container.
    pub fn elements(&self) -> &C {
        &self.data
    }

    /// Value cursor at the first element.
    pub fn iter(&self) -> CastIter<'_, C, <C::Elem as Keyed>::Value> {
        CastIter::with_projection(&self.data, 0, <C::Elem as Keyed>::value)
    }

    /// Value cursor at `pos`. Panics when `pos` lies past the end.
    pub fn iter_at(&self, pos: usize) -> CastIter<'_, C, <C::Elem as Keyed>::Value> {
        CastIter::with_projection(&self.data, pos, <C::Elem as Keyed>::value)
    }

    /// Sliding value window of `width` elements moving `width - overlap` at
    /// a time.
    pub fn windows(&self, width: usize, overlap: usize) -> RangeIter<'_, C, <C::Elem as Keyed>::Value> {
        RangeIter::with_projection(&self.data, 0, width, overlap, <C::Elem as Keyed>::value)
    }

    /// Freezes the size. Panics when empty.
    pub fn into_locked(self) -> Indexer<C, true> {
        Indexer::new(self.data)
    }

    /// Lifts the size freeze.
    pub fn into_unlocked(self) -> Indexer<C, false> {
        Indexer { data: self.data }
    }
}

// Size-changing operations exist on the unlocked form only, each gated by
// the container capability it needs.

impl<C> Indexer<C, false>
where
    C: BackInsert,
    C::Elem: Keyed,
{
    /// Appends a keyed value at the back.
    pub fn push_back<V>(&mut self, key: <C::Elem as Keyed>::Key, value: V)
    where
        C::Elem: From<V>,
    {
        let mut elem = C::Elem::from(value);
        *elem.key_mut() = key;
        self.data.push_back(elem);
    }

    /// Appends a value under the default key.
    pub fn push_back_value<V>(&mut self, value: V)
    where
        C::Elem: From<V>,
    {
        self.data.push_back(C::Elem::from(value));
    }

    pub fn pop_back(&mut self) -> Option<C::Elem> {
        self.data.pop_back()
    }
}

impl<C> Indexer<C, false>
where
    C: FrontInsert,
    C::Elem: Keyed,
{
    /// Prepends a keyed value at the front.
    pub fn push_front<V>(&mut self, key: <C::Elem as Keyed>::Key, value: V)
    where
        C::Elem: From<V>,
    {
        let mut elem = C::Elem::from(value);
        *elem.key_mut() = key;
        self.data.push_front(elem);
    }

    pub fn pop_front(&mut self) -> Option<C::Elem> {
        self.data.pop_front()
    }
}

impl<C> Indexer<C, false>
where
    C: Sequence,
    C::Elem: Keyed,
{
    /// Mutable access to the underlying container. Unlocked only, since a
    /// `&mut C` can change the size.
    pub fn elements_mut(&mut self) -> &mut C {
        &mut self.data
    }
}

impl<C> Indexer<C, false>
where
    C: Sequence + Reservable,
    C::Elem: Keyed,
{
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }
}

impl<C> Indexer<C, false>
where
    C: Sequence + Clearable,
    C::Elem: Keyed,
{
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<C> Default for Indexer<C, false>
where
    C: Sequence + Default,
    C::Elem: Keyed,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, const LOCKED: bool> Index<usize> for Indexer<C, LOCKED>
where
    C: Sequence,
    C::Elem: Keyed,
{
    type Output = <C::Elem as Keyed>::Value;

    fn index(&self, pos: usize) -> &Self::Output {
        self.at(pos)
    }
}

impl<C, const LOCKED: bool> IndexMut<usize> for Indexer<C, LOCKED>
where
    C: SequenceMut,
    C::Elem: Keyed,
{
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        self.at_mut(pos)
    }
}

impl<C: Clone, const LOCKED: bool> Clone for Indexer<C, LOCKED> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<C: fmt::Debug, const LOCKED: bool> fmt::Debug for Indexer<C, LOCKED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexer")
            .field("locked", &LOCKED)
            .field("data", &self.data)
            .finish()
    }
}
