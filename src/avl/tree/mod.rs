mod avl_tree;
mod error;
mod iter;
mod node;
mod tests;

pub use avl_tree::*;
pub use error::*;
pub use iter::*;
pub(crate) use node::*;
