//! Pure data structures: the stored [`Product`] and the text-based inputs it is built from.

pub mod product;

pub use product::*;
