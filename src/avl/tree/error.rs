use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, PartialEq, Eq)]
pub struct EmptyTree;

impl Display for EmptyTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot take the extremum of an empty tree!")
    }
}

impl Error for EmptyTree {}

#[derive(Debug, PartialEq, Eq)]
pub struct NoPredecessor;

impl Display for NoPredecessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No value in the tree compares below the given one!")
    }
}

impl Error for NoPredecessor {}

#[derive(Debug, PartialEq, Eq)]
pub struct NoSuccessor;

impl Display for NoSuccessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No value in the tree compares above the given one!")
    }
}

impl Error for NoSuccessor {}

#[derive(Debug, PartialEq, Eq)]
pub struct ExhaustedIter;

impl Display for ExhaustedIter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dereferenced an iterator that has passed the end of its traversal!")
    }
}

impl Error for ExhaustedIter {}

/// Any error an [`AvlTree`](super::AvlTree) operation can produce, for
/// callers that want to propagate them through one type.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum TreeError {
    EmptyTree(EmptyTree),
    NoPredecessor(NoPredecessor),
    NoSuccessor(NoSuccessor),
    ExhaustedIter(ExhaustedIter),
}
