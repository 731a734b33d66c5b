use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use super::{Link, LinkedHashMap};

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a LinkedHashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head,
            remaining: self.len(),
            marker: PhantomData,
        }
    }
}

/// Walks the insertion-order list from oldest entry to newest; `O(len)`
/// regardless of capacity or collision pattern.
pub struct Iter<'a, K, V> {
    pub(crate) next: Link<K, V>,
    pub(crate) remaining: usize,
    pub(crate) marker: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = *entry.next();
        self.remaining -= 1;
        Some((entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

impl<K: Hash + Eq, V, B: BuildHasher> LinkedHashMap<K, V, B> {
    /// Returns an iterator over all keys in first-insertion order, as
    /// references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in first-insertion order, as
    /// references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for LinkedHashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Steal the order list; the bucket chains hold no ownership, so the
        // map's own drop then has nothing left to free.
        let next = self.head.take();
        self.tail = None;
        let remaining = mem::replace(&mut self.len, 0);

        IntoIter { next, remaining }
    }
}

/// Consumes the map in first-insertion order. Dropping the iterator releases
/// any entries it has not yielded.
pub struct IntoIter<K, V> {
    pub(crate) next: Link<K, V>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?.take_entry();
        self.next = entry.next;
        self.remaining -= 1;
        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
