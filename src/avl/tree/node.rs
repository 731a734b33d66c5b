use std::cmp::{self, Ordering};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::util::option::OptionExtension;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub data: T,
    pub height: i32,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(data: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            data,
            height: 0,
        }
    }

    /// Recomputes this node's height from the (already correct) heights of
    /// its children. An absent subtree counts as height -1.
    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// The balance factor of this node: left height minus right height. The
    /// AVL invariant requires this to stay within [-1, 1].
    pub fn factor(&self) -> i32 {
        self.left.height() - self.right.height()
    }
}

impl<T: Ord> Branch<T> {
    pub fn height(&self) -> i32 {
        match &self.0 {
            Some(node) => node.height,
            None => -1,
        }
    }

    /// Inserts `data` below this branch, returning false for a duplicate
    /// (which leaves the tree untouched). Heights are refreshed and balance
    /// restored at every node on the return path.
    pub fn insert(&mut self, data: T) -> bool {
        let inserted = match &mut self.0 {
            Some(node) => match data.cmp(&node.data) {
                Ordering::Less => node.left.insert(data),
                Ordering::Greater => node.right.insert(data),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(data)));
                true
            },
        };
        if inserted {
            self.rebalance();
        }
        inserted
    }

    /// Removes `data` from below this branch if present. A node with two
    /// children has its data overwritten by its in-order predecessor (the
    /// rightmost node of the left subtree), which is in turn unlinked; a node
    /// with fewer children is spliced out directly.
    pub fn remove(&mut self, data: &T) -> bool {
        let removed = match &mut self.0 {
            Some(node) => match data.cmp(&node.data) {
                Ordering::Less => node.left.remove(data),
                Ordering::Greater => node.right.remove(data),
                Ordering::Equal => {
                    if node.left.is_some() && node.right.is_some() {
                        // SAFETY: The left subtree was just matched as
                        // non-empty, so it has a maximum to take.
                        node.data = unsafe { node.left.take_max().unreachable() };
                    } else {
                        // SAFETY: We've already matched self.0 as a Some, but
                        // we need the mutable reference here.
                        let node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
                        self.0 = node.left.0.or(node.right.0);
                    }
                    true
                },
            },
            None => false,
        };
        if removed {
            self.rebalance();
        }
        removed
    }

    /// Unlinks and returns the largest value below this branch, rebalancing
    /// the path it walked.
    pub fn take_max(&mut self) -> Option<T> {
        let taken = match &mut self.0 {
            Some(node) => {
                if node.right.is_some() {
                    node.right.take_max()
                } else {
                    // SAFETY: We've already matched self.0 as a Some, but we
                    // need the mutable reference here.
                    let node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
                    self.0 = node.left.0;
                    Some(node.data)
                }
            },
            None => None,
        };
        if taken.is_some() {
            self.rebalance();
        }
        taken
    }

    /// Unlinks and returns the smallest value below this branch, rebalancing
    /// the path it walked.
    pub fn take_min(&mut self) -> Option<T> {
        let taken = match &mut self.0 {
            Some(node) => {
                if node.left.is_some() {
                    node.left.take_min()
                } else {
                    // SAFETY: We've already matched self.0 as a Some, but we
                    // need the mutable reference here.
                    let node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
                    self.0 = node.right.0;
                    Some(node.data)
                }
            },
            None => None,
        };
        if taken.is_some() {
            self.rebalance();
        }
        taken
    }

    pub fn min(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        match node.left.min() {
            Some(min) => Some(min),
            None => Some(&node.data),
        }
    }

    pub fn max(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        match node.right.max() {
            Some(max) => Some(max),
            None => Some(&node.data),
        }
    }

    /// Refreshes this node's height and restores the AVL invariant with at
    /// most two rotations. Only ever acts on the node directly under this
    /// branch; callers apply it bottom-up along the mutated path.
    pub fn rebalance(&mut self) {
        let Some(node) = &mut self.0 else { return };
        node.update_height();

        let factor = node.factor();
        if factor > 1 {
            let left_factor = match &node.left.0 {
                Some(left) => left.factor(),
                None => 0,
            };
            // A right-leaning left child needs straightening first (LR).
            if left_factor < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if factor < -1 {
            let right_factor = match &node.right.0 {
                Some(right) => right.factor(),
                None => 0,
            };
            // A left-leaning right child needs straightening first (RL).
            if right_factor > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Hoists the right child over this node, keeping the in-order sequence
    /// intact. A branch without a right child is left unchanged. Updates the
    /// heights of exactly the two nodes involved.
    pub fn rotate_left(&mut self) {
        let Some(mut node) = self.0.take() else { return };
        match node.right.0.take() {
            Some(mut pivot) => {
                node.right = Branch(pivot.left.0.take());
                node.update_height();
                pivot.left = Branch(Some(node));
                pivot.update_height();
                self.0 = Some(pivot);
            },
            None => self.0 = Some(node),
        }
    }

    /// Hoists the left child over this node, the mirror of
    /// [`rotate_left`](Branch::rotate_left).
    pub fn rotate_right(&mut self) {
        let Some(mut node) = self.0.take() else { return };
        match node.left.0.take() {
            Some(mut pivot) => {
                node.left = Branch(pivot.right.0.take());
                node.update_height();
                pivot.right = Branch(Some(node));
                pivot.update_height();
                self.0 = Some(pivot);
            },
            None => self.0 = Some(node),
        }
    }

    /// Asserts the ordering, height and balance invariants at every node
    /// below this branch, returning (height, node count).
    #[cfg(test)]
    pub fn assert_consistent(&self) -> (i32, usize) {
        match &self.0 {
            Some(node) => {
                if let Some(left) = &node.left.0 {
                    assert!(left.data < node.data, "Left child must compare below its parent!");
                }
                if let Some(right) = &node.right.0 {
                    assert!(right.data > node.data, "Right child must compare above its parent!");
                }

                let (left_height, left_count) = node.left.assert_consistent();
                let (right_height, right_count) = node.right.assert_consistent();

                assert_eq!(
                    node.height,
                    1 + cmp::max(left_height, right_height),
                    "Stored height must match the height of the subtree!"
                );
                assert!(
                    (left_height - right_height).abs() <= 1,
                    "Every node's balance factor must lie in [-1, 1]!"
                );

                (node.height, 1 + left_count + right_count)
            },
            None => (-1, 0),
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}
