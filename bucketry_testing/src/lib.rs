//! Test-support utilities shared by the crates of the workspace.
pub mod equivalence;
pub use equivalence::*;

pub mod generate;
pub use generate::*;

pub mod hasher;
pub use hasher::*;

pub mod logger;
pub use logger::*;

pub mod map;
pub use map::*;

pub mod probe;
pub use probe::*;
