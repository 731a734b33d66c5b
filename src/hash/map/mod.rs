mod entry;
mod error;
mod iter;
mod linked_hash_map;
mod tests;

pub(crate) use entry::*;
pub use error::*;
pub use iter::*;
pub use linked_hash_map::*;
