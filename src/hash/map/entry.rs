use std::ptr::NonNull;

pub(crate) type Link<K, V> = Option<EntryRef<K, V>>;

// NOTE: This implementation uses Box<T> rather than alloc to allocate entries on the heap, because
// Box<T> has the special property that dereferencing it allows a value to be moved out of the heap.

/// One live key-value pair of the map. A single allocation carries both link
/// sets: the doubly linked insertion-order list (`prev`/`next`, threaded
/// through every entry) and the singly linked collision chain of the bucket
/// the entry currently hashes into (`chain`). Rehashing relinks `chain` only.
pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub prev: Link<K, V>,
    pub next: Link<K, V>,
    pub chain: Link<K, V>,
}

#[derive(Debug)]
pub(crate) struct EntryRef<K, V>(pub NonNull<Entry<K, V>>);

impl<K, V> EntryRef<K, V> {
    pub fn key<'a>(&self) -> &'a K {
        // SAFETY: Entries stay allocated until the map (or a consuming
        // iterator) unlinks them, and the map API never hands out a mutable
        // alias of a key.
        unsafe { &(*self.0.as_ptr()).key }
    }

    pub fn value<'a>(&self) -> &'a V {
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut V {
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<K, V> {
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<K, V> {
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<K, V> {
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<K, V> {
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn chain<'a>(&self) -> &'a Link<K, V> {
        unsafe { &(*self.0.as_ptr()).chain }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn chain_mut<'a>(&self) -> &'a mut Link<K, V> {
        unsafe { &mut (*self.0.as_ptr()).chain }
    }

    pub fn from_entry(entry: Entry<K, V>) -> EntryRef<K, V> {
        EntryRef(NonNull::from(Box::leak(Box::new(entry))))
    }

    /// Reclaims the heap allocation, moving the entry out. The caller must
    /// hold the only remaining copy of this reference.
    pub fn take_entry(self) -> Entry<K, V> {
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<K, V> Clone for EntryRef<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntryRef<K, V> {}

impl<K, V> PartialEq for EntryRef<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
