//! Error taxonomy for technique execution.
//!
//! Techniques report failures through a small closed set of variants rather
//! than free-form strings, so the timing loop can classify them without
//! inspecting messages.

use thiserror::Error;

/// Errors a technique's `calculate` (or lifecycle hook) may return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TechniqueError {
    /// A negative index was requested. Surfaced synchronously to the caller.
    #[error("n must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The technique hit its recursion depth guard.
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimit {
        /// The depth limit that was exceeded.
        limit: usize,
    },

    /// The technique could not allocate the memory it needed.
    #[error("out of memory")]
    OutOfMemory,

    /// A fixed-width numeric representation overflowed.
    #[error("numeric overflow")]
    Overflow,

    /// Any other failure, with its message preserved.
    #[error("{0}")]
    Other(String),
}
