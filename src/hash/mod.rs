//! Hash-based collection types. Revolves around [`LinkedHashMap`], a
//! separate-chaining map that remembers insertion order.

pub mod map;

#[doc(inline)]
pub use map::LinkedHashMap;
