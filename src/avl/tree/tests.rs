#![cfg(test)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

const N: i32 = 1_000;

#[test]
fn test_new() {
    let tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1, "The empty tree has height -1.");
    assert!(tree.is_balanced());
    assert_eq!(tree.min(), Err(EmptyTree));
    assert_eq!(tree.max(), Err(EmptyTree));
    assert_eq!(tree.in_order(), "");
    tree.check_consistency();
}

#[test]
fn test_insert_sequential() {
    let mut tree = AvlTree::new();
    for value in 1..=7 {
        assert!(tree.insert(value));
        tree.check_consistency();
    }

    // Seven sequential inserts settle into the perfect tree rooted at 4.
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.pre_order(), "4 2 1 3 6 5 7");
    assert_eq!(tree.in_order(), "1 2 3 4 5 6 7");
    assert_eq!(tree.post_order(), "1 3 2 5 7 6 4");
}

#[test]
fn test_insert_duplicate() {
    let mut tree: AvlTree<i32> = (1..=7).collect();
    let rendered = tree.in_order();

    assert!(!tree.insert(4), "A duplicate insert must be rejected.");
    assert!(!tree.insert(1));
    assert_eq!(tree.len(), 7, "A rejected insert must not change the length.");
    assert_eq!(tree.in_order(), rendered, "A rejected insert must not change the tree.");
    tree.check_consistency();
}

#[test]
fn test_insert_shuffled() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).collect();
    values.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for value in values.iter() {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert_eq!(tree.len(), values.len());

    for value in values.iter() {
        assert!(tree.contains(value));
    }
    assert!(!tree.contains(&-1));
}

#[test]
fn test_height_logarithmic() {
    let tree: AvlTree<i32> = (0..N).collect();
    assert!(
        tree.height() <= 14,
        "1000 values must fit within the AVL height bound, got {}",
        tree.height()
    );
    tree.check_consistency();
}

#[test]
fn test_remove_cases() {
    // Perfect tree: 4 over (2: 1, 3) and (6: 5, 7).
    let mut tree: AvlTree<i32> = (1..=7).collect();

    assert!(!tree.remove(&42), "Removing an absent value is a no-op.");
    assert_eq!(tree.len(), 7);

    // Leaf.
    assert!(tree.remove(&1));
    tree.check_consistency();
    assert_eq!(tree.in_order(), "2 3 4 5 6 7");

    // One child: 2 now holds only 3.
    assert!(tree.remove(&2));
    tree.check_consistency();
    assert_eq!(tree.in_order(), "3 4 5 6 7");

    // Two children: the root is overwritten by its in-order predecessor.
    assert!(tree.remove(&4));
    tree.check_consistency();
    assert_eq!(tree.in_order(), "3 5 6 7");
    assert!(!tree.contains(&4));

    assert_eq!(tree.len(), 4);
}

#[test]
fn test_remove_shuffled() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(i32::MIN..i32::MAX)).collect();
    values.sort_unstable();
    values.dedup();

    let mut tree: AvlTree<i32> = values.iter().copied().collect();

    values.shuffle(&mut rng);
    for value in values.iter() {
        assert!(tree.contains(value));
        assert!(tree.remove(value));
        assert!(!tree.contains(value));
        tree.check_consistency();
    }
    assert!(tree.is_empty());
}

#[test]
fn test_min_max() {
    let mut tree = AvlTree::new();
    for value in [5, 3, 9, 1, 7] {
        tree.insert(value);
    }

    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&9));

    tree.remove(&1);
    tree.remove(&9);
    assert_eq!(tree.min(), Ok(&3));
    assert_eq!(tree.max(), Ok(&7));
}

#[test]
fn test_predecessor_successor() {
    let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(tree.successor(&1), Ok(&2));
    assert_eq!(tree.successor(&2), Ok(&3));
    assert_eq!(
        tree.successor(&3),
        Err(NoSuccessor),
        "The maximum has no successor."
    );

    assert_eq!(tree.predecessor(&3), Ok(&2));
    assert_eq!(tree.predecessor(&2), Ok(&1));
    assert_eq!(
        tree.predecessor(&1),
        Err(NoPredecessor),
        "The minimum has no predecessor."
    );

    // The probe value need not be present.
    let tree: AvlTree<i32> = [10, 20, 30].into_iter().collect();
    assert_eq!(tree.successor(&15), Ok(&20));
    assert_eq!(tree.predecessor(&15), Ok(&10));
    assert_eq!(tree.successor(&35), Err(NoSuccessor));
}

#[test]
fn test_clear() {
    let mut tree: AvlTree<i32> = (0..N).collect();
    assert!(!tree.is_empty());

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);

    assert!(tree.insert(42));
    assert_eq!(tree.len(), 1);
    tree.check_consistency();
}

#[test]
fn test_iter_orders() {
    let tree: AvlTree<i32> = (1..=7).collect();

    let pre: Vec<i32> = tree.iter(Traversal::PreOrder).copied().collect();
    assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);

    let in_order: Vec<i32> = tree.iter(Traversal::InOrder).copied().collect();
    assert_eq!(in_order, [1, 2, 3, 4, 5, 6, 7]);

    let post: Vec<i32> = tree.iter(Traversal::PostOrder).copied().collect();
    assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);

    let breadth: Vec<i32> = tree.iter(Traversal::BreadthFirst).copied().collect();
    assert_eq!(breadth, [4, 2, 6, 1, 3, 5, 7]);

    let borrowed: Vec<i32> = (&tree).into_iter().copied().collect();
    assert_eq!(borrowed, in_order, "Borrowed iteration defaults to in-order.");
}

#[test]
fn test_iter_cursor() {
    let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();

    let mut cursor = tree.iter(Traversal::InOrder);
    assert_eq!(cursor.get(), Ok(&1));

    cursor.advance();
    assert_eq!(cursor.get(), Ok(&2));
    assert_ne!(cursor, tree.end());

    cursor.advance();
    cursor.advance();
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.get(), Err(ExhaustedIter));
    assert_eq!(
        cursor,
        tree.end(),
        "A cursor that has walked off the end must equal the canonical end."
    );

    // Advancing a terminal cursor stays terminal.
    cursor.advance();
    assert_eq!(cursor, tree.end());

    let empty = AvlTree::<i32>::new();
    assert_eq!(empty.iter(Traversal::PreOrder), empty.end());
}

#[test]
fn test_into_iter_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut values: Vec<i32> = (0..100).collect();
    values.shuffle(&mut rng);

    let tree: AvlTree<i32> = values.iter().copied().collect();
    let drained: Vec<i32> = tree.into_iter().collect();

    let mut sorted = values;
    sorted.sort_unstable();
    assert_eq!(drained, sorted);
}

#[test]
fn test_error_conversion() {
    let tree = AvlTree::<i32>::new();

    let error = TreeError::from(tree.min().unwrap_err());
    assert!(error.is_empty_tree());

    let error: TreeError = tree.iter(Traversal::InOrder).get().unwrap_err().into();
    assert!(error.is_exhausted_iter());
}
