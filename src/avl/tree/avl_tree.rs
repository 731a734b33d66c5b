use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, EmptyTree, NoPredecessor, NoSuccessor, Traversal};

/// An ordered set of distinct values, kept height-balanced (AVL) after every
/// structural mutation.
///
/// Values only need a total order ([`Ord`]); no hashing is involved. Inserting
/// a value that is already present is a no-op, so the in-order sequence of an
/// AvlTree is always strictly increasing.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the AvlTree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `min` / `max` | `O(log n)` |
/// | `predecessor` / `successor` | `O(log n)` |
/// | `height` / `is_balanced` | `O(1)` |
/// | `iter` | `O(n)` |
///
/// The logarithmic bounds hold unconditionally because the balance factor of
/// every node is restored to [-1, 1] before any mutating call returns.
pub struct AvlTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree. No memory is allocated until the first insert.
    pub const fn new() -> AvlTree<T> {
        AvlTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single leaf,
    /// else one more than the taller subtree of the root.
    pub fn height(&self) -> i32 {
        self.root.height()
    }

    /// Returns true if the root's balance factor lies in [-1, 1]. Note that
    /// this inspects the root only; the per-node invariant is maintained
    /// internally by every mutating method.
    pub fn is_balanced(&self) -> bool {
        match &self.root.0 {
            Some(node) => (-1..=1).contains(&node.factor()),
            None => true,
        }
    }

    /// Removes every value from the tree. Dropping the root releases each
    /// node in turn, with recursion depth bounded by the AVL height.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Inserts `value` into the tree, returning whether it was added. A
    /// duplicate of an existing value is rejected and the tree is unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `value` from the tree, returning whether it was present.
    /// Removing an absent value is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = self.root.remove(value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root.0;
        while let Some(node) = current {
            match value.cmp(&node.data) {
                Ordering::Less => current = &node.left.0,
                Ordering::Greater => current = &node.right.0,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns the smallest value in the tree, or [`EmptyTree`] if there is
    /// none.
    pub fn min(&self) -> Result<&T, EmptyTree> {
        self.root.min().ok_or(EmptyTree)
    }

    /// Returns the largest value in the tree, or [`EmptyTree`] if there is
    /// none.
    pub fn max(&self) -> Result<&T, EmptyTree> {
        self.root.max().ok_or(EmptyTree)
    }

    /// Returns the largest value strictly below `value`, which need not
    /// itself be in the tree. Fails with [`NoPredecessor`] when no value
    /// compares below, e.g. when probing at or below the minimum.
    pub fn predecessor(&self, value: &T) -> Result<&T, NoPredecessor> {
        let mut current = &self.root.0;
        let mut last = None;
        while let Some(node) = current {
            if node.data < *value {
                last = Some(&node.data);
                current = &node.right.0;
            } else {
                current = &node.left.0;
            }
        }
        last.ok_or(NoPredecessor)
    }

    /// Returns the smallest value strictly above `value`, which need not
    /// itself be in the tree. Fails with [`NoSuccessor`] when no value
    /// compares above, e.g. when probing at or above the maximum.
    pub fn successor(&self, value: &T) -> Result<&T, NoSuccessor> {
        let mut current = &self.root.0;
        let mut last = None;
        while let Some(node) = current {
            if node.data > *value {
                last = Some(&node.data);
                current = &node.left.0;
            } else {
                current = &node.right.0;
            }
        }
        last.ok_or(NoSuccessor)
    }

    /// Asserts every structural invariant of the tree. Test-only; mutating
    /// methods keep these invariants without checking them.
    #[cfg(test)]
    pub fn check_consistency(&self) {
        let (height, count) = self.root.assert_consistent();
        assert_eq!(height, self.height());
        assert_eq!(count, self.len, "Node count must match the tracked length!");
    }
}

impl<T: Ord + Display> AvlTree<T> {
    /// Renders the pre-order traversal as a space-delimited string. Intended
    /// for inspection and testing rather than as a performance path.
    pub fn pre_order(&self) -> String {
        self.render(Traversal::PreOrder)
    }

    /// Renders the in-order traversal as a space-delimited string; for a
    /// consistent tree this is the sorted sequence of its values.
    pub fn in_order(&self) -> String {
        self.render(Traversal::InOrder)
    }

    /// Renders the post-order traversal as a space-delimited string.
    pub fn post_order(&self) -> String {
        self.render(Traversal::PostOrder)
    }

    fn render(&self, order: Traversal) -> String {
        let mut rendered = String::new();
        for value in self.iter(order) {
            if !rendered.is_empty() {
                rendered.push(' ');
            }
            rendered.push_str(&value.to_string());
        }
        rendered
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        AvlTree::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter(Traversal::InOrder)).finish()
    }
}
