pub mod hash;
pub mod option;
