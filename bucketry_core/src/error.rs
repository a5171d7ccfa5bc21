//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
///
/// Every failure is reported at the call that caused it; tables never retry or recover
/// internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    /// An absent key (see [`crate::Key::is_absent`]) was passed to a keyed operation.
    #[error("Key is absent and can not be hashed.")]
    InvalidKey,
    /// Indexed read of a key that is not in the table.
    #[error("Key not found.")]
    KeyNotFound,
    /// Insert-only operation on a key that is already present.
    #[error("Key is already present.")]
    DuplicateKey,
    /// A full probe cycle visited no reusable slot.
    ///
    /// Unreachable while the load-factor policy is in effect.
    #[error("No free slot found within a full probe cycle.")]
    TableFull,
    /// A table was requested with a capacity that can not hold any slot.
    #[error("Capacity must be positive, got {0}.")]
    InvalidCapacity(usize),
    /// Doubling the capacity would overflow `usize`.
    #[error("Capacity overflow while growing the table.")]
    CapacityOverflow,
}

/// Shorthand for results produced by the dictionary contract.
pub type Result<T> = std::result::Result<T, DictError>;
