//! Mapping keys to slot indices.
pub(crate) mod common;
mod indexer;
pub use indexer::*;
mod probing;
pub use probing::*;
