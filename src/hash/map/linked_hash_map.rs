use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::marker::PhantomData;
use std::mem;

use super::{Entry, EntryRef, Iter, KeyNotFound, Link};

/// The capacity a map starts out with unless one is requested.
pub(crate) const DEFAULT_CAP: usize = 5;

/// The collision-chain length at which an insert triggers growth: a new key
/// whose destination bucket already chains this many entries doubles the
/// capacity before being placed.
pub(crate) const MAX_CHAIN: usize = 3;

const GROWTH_FACTOR: usize = 2;

/// A collision chain: the entries currently hashing to one bucket index,
/// singly linked through [`Entry::chain`].
pub(crate) struct Bucket<K, V> {
    pub head: Link<K, V>,
    pub count: usize,
}

impl<K, V> Bucket<K, V> {
    pub const fn empty() -> Bucket<K, V> {
        Bucket {
            head: None,
            count: 0,
        }
    }
}

/// A map of keys to values which resolves hash collisions with per-bucket
/// chains and iterates in the order keys were first inserted.
///
/// Insertion order is tracked by a doubly linked list threaded through every
/// entry, independent of bucket layout: growing the bucket array reshuffles
/// the chains but never the list, and overwriting an existing key's value
/// keeps its original position.
///
/// It is a logic error for keys in a LinkedHashMap to be manipulated in a way
/// that changes their hash. Because of this, LinkedHashMap's API prevents
/// mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the LinkedHashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` on growth |
/// | `get` / `at` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `iter` / `keys` / `values` | `O(n)` |
///
/// \* Plus the length of the destination bucket's chain, which the growth
/// threshold keeps short.
pub struct LinkedHashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vec<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) head: Link<K, V>,
    pub(crate) tail: Link<K, V>,
    pub(crate) hasher: B,
    pub(crate) marker: PhantomData<Box<Entry<K, V>>>,
}

impl<K: Hash + Eq, V> LinkedHashMap<K, V> {
    /// Creates a new LinkedHashMap with the default capacity, hashing with
    /// [`RandomState`]. Pinning the hasher here lets a bare
    /// `LinkedHashMap::new()` infer without annotating `B`.
    pub fn new() -> LinkedHashMap<K, V> {
        LinkedHashMap::with_cap_and_hasher(DEFAULT_CAP, RandomState::new())
    }

    /// Creates a new LinkedHashMap with the provided `cap`acity (raised to 1
    /// if 0 is requested, as the bucket array is never empty), hashing with
    /// [`RandomState`].
    pub fn with_cap(cap: usize) -> LinkedHashMap<K, V> {
        LinkedHashMap::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> LinkedHashMap<K, V, B> {
    /// Creates a new LinkedHashMap with the default capacity and the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> LinkedHashMap<K, V, B> {
        LinkedHashMap::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new LinkedHashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> LinkedHashMap<K, V, B> {
        LinkedHashMap {
            buckets: Self::allocate(cmp::max(cap, 1)),
            len: 0,
            head: None,
            tail: None,
            hasher,
            marker: PhantomData,
        }
    }

    /// Returns the number of entries in the LinkedHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedHashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts the provided `key`-`value` pair. If the key was already
    /// associated with a value, the previous value is returned and the key
    /// keeps both its bucket position and its place in the insertion order.
    ///
    /// A new key whose destination chain is already at the growth threshold
    /// doubles the capacity first, then lands at the back of the insertion
    /// order.
    ///
    /// As with the standard library, the key isn't changed if it already
    /// exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.find_entry(&key) {
            return Some(mem::replace(existing.value_mut(), value));
        }

        self.insert_new(key, value);
        None
    }

    /// Returns a reference to the value associated with the provided `key` or
    /// None if the map contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).map(|entry| entry.value())
    }

    /// Returns a mutable reference to the value associated with the provided
    /// `key` or None if the map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).map(|entry| entry.value_mut())
    }

    /// Returns a reference to the value associated with the provided `key`,
    /// failing with [`KeyNotFound`] for an absent key.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the provided
    /// `key`, failing with [`KeyNotFound`] for an absent key.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, first inserting a
    /// default-constructed value if the key is absent. The absence of the key
    /// is deliberately not an error here, unlike [`at`](LinkedHashMap::at).
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let entry = match self.find_entry(&key) {
            Some(entry) => entry,
            None => self.insert_new(key, V::default()),
        };
        entry.value_mut()
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    /// The entry is unlinked from its bucket's chain and from the insertion
    /// order list, with the list's endpoints fixed up as needed.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);

        let mut previous: Link<K, V> = None;
        let mut current = self.buckets[index].head;
        while let Some(entry) = current {
            if entry.key().borrow() != key {
                previous = current;
                current = *entry.chain();
                continue;
            }

            match previous {
                Some(prev) => *prev.chain_mut() = *entry.chain(),
                None => self.buckets[index].head = *entry.chain(),
            }

            match *entry.prev() {
                Some(prev) => *prev.next_mut() = *entry.next(),
                None => self.head = *entry.next(),
            }
            match *entry.next() {
                Some(next) => *next.prev_mut() = *entry.prev(),
                None => self.tail = *entry.prev(),
            }

            self.buckets[index].count -= 1;
            self.len -= 1;

            let entry = entry.take_entry();
            return Some((entry.key, entry.value));
        }
        None
    }

    /// Removes the entry associated with `key`, returning the value if it
    /// exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes every entry, walking the order list iteratively so teardown
    /// cost is linear and stack use is constant. Capacity is retained.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        while let Some(entry) = current {
            let entry = entry.take_entry();
            current = entry.next;
        }

        for bucket in &mut self.buckets {
            bucket.head = None;
            bucket.count = 0;
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in first-insertion order,
    /// as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> LinkedHashMap<K, V, B> {
    /// The bucket index for `hashable` under the current capacity. Capacity
    /// is always at least 1, so the remainder is well defined.
    pub(crate) fn index_for<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        (self.hasher.hash_one(hashable) % self.cap() as u64) as usize
    }

    /// Scans the destination bucket's chain for an entry with an equal key.
    pub(crate) fn find_entry<Q>(&self, key: &Q) -> Link<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut current = self.buckets[self.index_for(key)].head;
        while let Some(entry) = current {
            if entry.key().borrow() == key {
                return current;
            }
            current = *entry.chain();
        }
        None
    }

    /// Links a brand new entry: growth check, then the order-list tail, then
    /// the front of the destination chain. The caller has already ruled out
    /// an existing equal key.
    pub(crate) fn insert_new(&mut self, key: K, value: V) -> EntryRef<K, V> {
        let mut index = self.index_for(&key);
        if self.buckets[index].count >= MAX_CHAIN {
            self.grow();
            index = self.index_for(&key);
        }

        let entry = EntryRef::from_entry(Entry {
            key,
            value,
            prev: self.tail,
            next: None,
            chain: self.buckets[index].head,
        });

        match self.tail {
            Some(tail) => *tail.next_mut() = Some(entry),
            None => self.head = Some(entry),
        }
        self.tail = Some(entry);

        self.buckets[index].head = Some(entry);
        self.buckets[index].count += 1;
        self.len += 1;

        entry
    }

    /// Doubles the capacity and redistributes every entry by recomputing its
    /// index under the new capacity, prepending to the new chains. The order
    /// list is untouched: insertion order is independent of bucket layout.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap() * GROWTH_FACTOR;
        let old_buckets = mem::replace(&mut self.buckets, Self::allocate(new_cap));

        for bucket in old_buckets {
            let mut current = bucket.head;
            while let Some(entry) = current {
                current = *entry.chain();

                let index = self.index_for(entry.key());
                *entry.chain_mut() = self.buckets[index].head;
                self.buckets[index].head = Some(entry);
                self.buckets[index].count += 1;
            }
        }
    }

    fn allocate(cap: usize) -> Vec<Bucket<K, V>> {
        iter::repeat_with(Bucket::empty).take(cap).collect()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Drop for LinkedHashMap<K, V, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Hash + Eq, V> Default for LinkedHashMap<K, V> {
    fn default() -> Self {
        LinkedHashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for LinkedHashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LinkedHashMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for LinkedHashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for LinkedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
