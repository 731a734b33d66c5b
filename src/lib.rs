//! Two generic in-memory associative containers: a self-balancing ordered set
//! ([`AvlTree`](avl::AvlTree)) and an insertion-order-preserving hash map
//! ([`LinkedHashMap`](hash::LinkedHashMap)).
//!
//! # Purpose
//! Both types are intended as reusable building blocks rather than as an
//! application: there is no I/O, persistence or display layer here, only the
//! containers themselves and their iterators.
//!
//! # Method
//! The tree keeps the AVL height-balance invariant after every structural
//! mutation, so lookups, inserts and removals are all `O(log n)`. The map
//! resolves collisions with per-bucket chains and threads a doubly linked
//! list through its entries so that iteration always yields keys in the order
//! they were first inserted, independent of bucket layout or growth.
//!
//! # Error Handling
//! Neither container panics on a failed lookup. Fallible operations return
//! [`Result`]s with strongly typed errors: one struct per condition, with
//! enums for static dispatch where a method can fail in more than one way.
//! The auto-vivifying map accessor is the deliberate exception, converting a
//! missing key into an insertion instead of an error.
//!
//! # Concurrency
//! Both containers are single-threaded, synchronous values with no internal
//! locking. Exactly one thread of control may mutate an instance at a time;
//! arranging shared access externally is the caller's responsibility.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod avl;
pub mod hash;

pub(crate) mod util;
