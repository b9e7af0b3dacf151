//! Key-augmented value wrapper.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::capability::Keyed;

/// A value paired with a mutable lookup key.
///
/// The key rides along with the value but stays out of the way: `Tagged`
/// dereferences to the wrapped value, so a `Vec<Tagged<f64>>` reads like a
/// `Vec<f64>` at most call sites. Cloning is deep; two clones never share
/// state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tagged<T, K = String> {
    pub key: K,
    value: T,
}

impl<T, K> Tagged<T, K> {
    pub fn new(key: K, value: T) -> Self {
        Self { key, value }
    }

    /// Wraps a value under the default key.
    pub fn from_value(value: T) -> Self
    where
        K: Default,
    {
        Self {
            key: K::default(),
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Replaces the value, leaving the key untouched.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}

impl<T, K> Deref for Tagged<T, K> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, K> DerefMut for Tagged<T, K> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, K: Default> From<T> for Tagged<T, K> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

// Equality looks at the value only; the key is bookkeeping.
impl<T: PartialEq, K> PartialEq for Tagged<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialEq, K> PartialEq<T> for Tagged<T, K> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T, K: PartialEq> Keyed for Tagged<T, K> {
    type Key = K;
    type Value = T;

    fn key(&self) -> &K {
        &self.key
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.key
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
