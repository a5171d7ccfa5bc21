//! Separate chaining: every slot holds a bucket with all the entries that hash to it.
mod core;
pub use self::core::*;
mod ctors;
mod dictionary;
mod introspect;
mod iter;
pub use iter::*;
