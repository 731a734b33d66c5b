use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ptr;

use super::{AvlTree, Branch, ExhaustedIter, Node};

/// The order in which [`Iter`] visits the tree: the three depth-first orders
/// plus a breadth-first (level order) walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    PreOrder,
    InOrder,
    PostOrder,
    BreadthFirst,
}

/// A cursor over a tree in a chosen [`Traversal`] order.
///
/// The full traversal is materialized eagerly at construction, so the cursor
/// is a point-in-time snapshot: stepping it never touches the tree structure
/// again. (The borrow it holds additionally keeps the tree immutable for the
/// cursor's lifetime.)
///
/// Alongside the plain [`Iterator`] implementation, the cursor can be stepped
/// manually with [`get`](Iter::get) and [`advance`](Iter::advance), and two
/// cursors compare equal when they rest on the same node. All exhausted
/// cursors are equal, so advancing off the end reliably matches
/// [`AvlTree::end`].
#[derive(Debug)]
pub struct Iter<'a, T: Ord> {
    current: Option<&'a T>,
    pending: VecDeque<&'a T>,
}

// Not derived: the cursor holds references, so cloning it must not demand
// T: Clone.
impl<'a, T: Ord> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            pending: self.pending.clone(),
        }
    }
}

impl<T: Ord> AvlTree<T> {
    /// Returns a cursor over the tree in the given traversal order.
    pub fn iter(&self, order: Traversal) -> Iter<'_, T> {
        let mut pending = VecDeque::new();
        match order {
            Traversal::PreOrder => collect_pre_order(&self.root, &mut pending),
            Traversal::InOrder => collect_in_order(&self.root, &mut pending),
            Traversal::PostOrder => collect_post_order(&self.root, &mut pending),
            Traversal::BreadthFirst => collect_breadth_first(&self.root, &mut pending),
        }

        let current = pending.pop_front();
        Iter { current, pending }
    }

    /// Returns the canonical exhausted cursor, which any cursor over this
    /// tree becomes equal to once it has advanced past the last node.
    pub fn end(&self) -> Iter<'_, T> {
        Iter {
            current: None,
            pending: VecDeque::new(),
        }
    }
}

impl<'a, T: Ord> Iter<'a, T> {
    /// Returns the value under the cursor, or [`ExhaustedIter`] once the
    /// cursor has moved past the end of the traversal.
    pub fn get(&self) -> Result<&'a T, ExhaustedIter> {
        self.current.ok_or(ExhaustedIter)
    }

    /// Steps the cursor to the next value of the traversal, or into the
    /// terminal state when none remain. Advancing a terminal cursor is a
    /// no-op.
    pub fn advance(&mut self) {
        self.current = self.pending.pop_front();
    }

    /// Returns true if the cursor has moved past the end of the traversal.
    pub const fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pending.len() + usize::from(self.current.is_some());
        (remaining, Some(remaining))
    }
}

impl<'a, T: Ord> FusedIterator for Iter<'a, T> {}

impl<'a, T: Ord> PartialEq for Iter<'a, T> {
    /// Cursor identity: both resting on the same node, or both exhausted.
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(this), Some(that)) => ptr::eq(this, that),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T: Ord> Eq for Iter<'a, T> {}

impl<'a, T: Ord> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Traversal::InOrder)
    }
}

impl<T: Ord> IntoIterator for AvlTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Consumes a tree in ascending order by repeatedly taking its minimum. Each
/// step is `O(log n)`, keeping the remaining tree balanced as it drains.
pub struct IntoIter<T: Ord>(AvlTree<T>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let taken = self.0.root.take_min();
        if taken.is_some() {
            self.0.len -= 1;
        }
        taken
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

fn collect_pre_order<'a, T: Ord>(branch: &'a Branch<T>, pending: &mut VecDeque<&'a T>) {
    if let Some(node) = &branch.0 {
        pending.push_back(&node.data);
        collect_pre_order(&node.left, pending);
        collect_pre_order(&node.right, pending);
    }
}

fn collect_in_order<'a, T: Ord>(branch: &'a Branch<T>, pending: &mut VecDeque<&'a T>) {
    if let Some(node) = &branch.0 {
        collect_in_order(&node.left, pending);
        pending.push_back(&node.data);
        collect_in_order(&node.right, pending);
    }
}

fn collect_post_order<'a, T: Ord>(branch: &'a Branch<T>, pending: &mut VecDeque<&'a T>) {
    if let Some(node) = &branch.0 {
        collect_post_order(&node.left, pending);
        collect_post_order(&node.right, pending);
        pending.push_back(&node.data);
    }
}

fn collect_breadth_first<'a, T: Ord>(branch: &'a Branch<T>, pending: &mut VecDeque<&'a T>) {
    let mut queue: VecDeque<&'a Node<T>> = VecDeque::new();
    if let Some(node) = &branch.0 {
        queue.push_back(node);
    }

    while let Some(node) = queue.pop_front() {
        pending.push_back(&node.data);
        if let Some(left) = &node.left.0 {
            queue.push_back(left);
        }
        if let Some(right) = &node.right.0 {
            queue.push_back(right);
        }
    }
}
