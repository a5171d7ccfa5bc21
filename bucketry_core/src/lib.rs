//! Core trait and type declarations shared by all the tables of the project.
pub mod dictionary;
pub use dictionary::*;
pub mod error;
pub use error::*;
pub mod introspect;
pub use introspect::*;
pub mod key;
pub use key::*;
