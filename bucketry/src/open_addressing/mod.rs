//! Open addressing: entries live directly in the slot array and collisions are resolved by
//! probing other slots in an order given by a [`crate::Probing`] strategy.
mod core;
pub use self::core::*;
mod ctors;
mod dictionary;
mod introspect;
mod iter;
pub use iter::*;
