#![cfg(test)]

use super::*;
use crate::util::hash::{PresetHash, TransparentHasherBuilder};

#[test]
fn test_round_trip() {
    let mut map = LinkedHashMap::new();
    assert!(map.is_empty());

    assert_eq!(map.insert("one", 1), None);
    assert_eq!(map.insert("two", 2), None);
    assert_eq!(map.len(), 2);

    assert_eq!(map.at("one"), Ok(&1));
    assert_eq!(map.get("two"), Some(&2));
    assert!(map.contains("one"));

    assert_eq!(map.remove("one"), Some(1));
    assert!(!map.contains("one"));
    assert_eq!(map.at("one"), Err(KeyNotFound));
    assert_eq!(map.remove("one"), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_update_keeps_order() {
    let mut map = LinkedHashMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    assert_eq!(
        map.insert("b", 20),
        Some(2),
        "Inserting an existing key must return the previous value."
    );
    assert_eq!(map.len(), 3);
    assert_eq!(map.at("b"), Ok(&20));
    assert_eq!(map.keys().size_hint(), (3, Some(3)));
    assert_eq!(map.values().size_hint(), (3, Some(3)));
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        ["a", "b", "c"],
        "Overwriting a value must not disturb the insertion order."
    );
}

#[test]
fn test_order_survives_removals() {
    let mut map: LinkedHashMap<i32, i32> = (0..6).map(|i| (i, i * 10)).collect();

    // Head, middle and tail of the order list.
    map.remove(&0);
    map.remove(&3);
    map.remove(&5);

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 4]);
    assert_eq!(
        map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [(1, 10), (2, 20), (4, 40)]
    );

    // A re-added key joins the back of the order, not its old position.
    map.insert(0, 0);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 4, 0]);
}

#[test]
fn test_rehash_on_collision_threshold() {
    let mut map = LinkedHashMap::with_hasher(TransparentHasherBuilder);
    assert_eq!(map.cap(), 5);

    // All four keys hash to bucket 0 under capacity 5.
    map.insert(PresetHash::new(0, "zero"), 0);
    map.insert(PresetHash::new(5, "five"), 5);
    map.insert(PresetHash::new(10, "ten"), 10);
    assert_eq!(map.cap(), 5, "Three chained entries must not grow the map yet.");

    map.insert(PresetHash::new(15, "fifteen"), 15);
    assert_eq!(
        map.cap(),
        10,
        "The fourth same-bucket insert must trigger exactly one doubling."
    );

    assert_eq!(map.len(), 4);
    assert_eq!(map.at(&PresetHash::new(0, "zero")), Ok(&0));
    assert_eq!(map.at(&PresetHash::new(15, "fifteen")), Ok(&15));
    assert_eq!(
        map.values().copied().collect::<Vec<_>>(),
        [0, 5, 10, 15],
        "Rehashing must leave the insertion order untouched."
    );
}

#[test]
fn test_get_or_insert_default() {
    let mut map: LinkedHashMap<&str, i32> = LinkedHashMap::new();
    map.insert("present", 7);

    assert_eq!(*map.get_or_insert_default("present"), 7);

    let vivified = map.get_or_insert_default("absent");
    assert_eq!(*vivified, 0, "An absent key must be given the default value.");
    *vivified += 1;

    assert!(map.contains("absent"));
    assert_eq!(map.at("absent"), Ok(&1));
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        ["present", "absent"],
        "A vivified key joins the back of the insertion order."
    );
}

#[test]
fn test_growth_under_random_state() {
    let mut map = LinkedHashMap::new();
    for i in 0..100 {
        assert_eq!(map.insert(i, i * i), None);
    }

    assert_eq!(map.len(), 100);
    for i in 0..100 {
        assert_eq!(map.get(&i), Some(&(i * i)));
    }

    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        (0..100).collect::<Vec<_>>(),
        "Growth events must never reorder iteration."
    );
}

#[test]
fn test_into_iter_order() {
    let map: LinkedHashMap<String, i32> = [("x", 1), ("y", 2), ("z", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let pairs: Vec<(String, i32)> = map.into_iter().collect();
    assert_eq!(
        pairs,
        [("x".to_string(), 1), ("y".to_string(), 2), ("z".to_string(), 3)]
    );
}

#[test]
fn test_into_iter_partial_drain() {
    // Dropping a half-consumed iterator must release the rest without
    // leaking or double-freeing.
    let map: LinkedHashMap<i32, String> = (0..10).map(|i| (i, i.to_string())).collect();

    let mut iter = map.into_iter();
    assert_eq!(iter.next(), Some((0, "0".to_string())));
    assert_eq!(iter.next(), Some((1, "1".to_string())));
    drop(iter);
}

#[test]
fn test_clear() {
    let mut map: LinkedHashMap<i32, i32> = (0..50).map(|i| (i, i)).collect();
    let cap = map.cap();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), cap, "Clearing retains capacity.");
    assert_eq!(map.keys().count(), 0);

    map.insert(1, 1);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1]);
}

#[test]
fn test_unannotated_constructors() {
    // `new` and `with_cap` pin the hasher to RandomState, so neither binding
    // needs a type annotation for the hasher parameter.
    let mut map = LinkedHashMap::new();
    map.insert("a", 1);
    assert_eq!(map.get("a"), Some(&1));

    let mut sized = LinkedHashMap::with_cap(8);
    assert_eq!(sized.cap(), 8);
    sized.insert(1, "one");
    assert_eq!(sized.at(&1), Ok(&"one"));
}

#[test]
fn test_zero_capacity_request() {
    let mut map: LinkedHashMap<i32, i32> = LinkedHashMap::with_cap(0);
    assert_eq!(map.cap(), 1, "Capacity is always positive.");

    map.insert(1, 10);
    map.insert(2, 20);
    assert_eq!(map.at(&1), Ok(&10));
    assert_eq!(map.at(&2), Ok(&20));
}

#[test]
fn test_borrowed_lookup() {
    let mut map: LinkedHashMap<String, i32> = LinkedHashMap::new();
    map.insert("owned".to_string(), 1);

    // Lookups work on the borrowed form of the key.
    assert_eq!(map.get("owned"), Some(&1));
    assert_eq!(map.remove("owned"), Some(1));
}
