//! Two hash tables over one dictionary contract: separate chaining ([`ChainingTable`]) and
//! open addressing with a selectable probing strategy ([`OpenAddressingTable`]).
//!
//! Tables do no internal synchronization. Every mutation takes `&mut self`, so sharing one
//! between threads needs an outer lock, and a table can not be mutated while it is being
//! enumerated. A resize rebuilds the whole table inside the insertion that triggers it.
//!
//! ```rust
//! use bucketry::{ChainingTable, Dictionary, OpenAddressingTable, Probing};
//!
//! let mut chained = ChainingTable::new();
//! chained.set("apple", 3).unwrap();
//! chained.add("pear", 5).unwrap();
//! assert_eq!(chained.get(&"apple"), Ok(&3));
//!
//! let mut probed = OpenAddressingTable::new(Probing::DoubleHashing);
//! probed.set("apple", 3).unwrap();
//! assert!(probed.remove(&"apple").unwrap());
//! assert!(!probed.contains_key(&"apple"));
//! ```
pub mod chaining;
pub mod hashing;
pub mod open_addressing;
pub mod resize;

pub use bucketry_core::*;
pub use chaining::ChainingTable;
pub use hashing::{DefaultHashBuilder, HashIndexer, ProbeSequence, Probing};
pub use open_addressing::OpenAddressingTable;
pub use resize::{ResizePolicy, DEFAULT_CAPACITY};
