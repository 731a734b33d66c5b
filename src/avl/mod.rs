//! Ordered collection types built on a height-balanced (AVL) binary search
//! tree. Revolves around [`AvlTree`] and its snapshotting [`Iter`] cursor.

pub mod tree;

#[doc(inline)]
pub use tree::{AvlTree, Iter, Traversal};
