//! Errors reported by buffer operations.

use crate::prelude::*;



// =============
// === Error ===
// =============

/// Buffer operation failure. Only `write` (and everything routed through it) checks bounds;
/// construction and multi-element writes validate their arguments.
#[derive(Clone,Debug,Display,Fail,PartialEq,Eq)]
pub enum Error {
    /// The index is not strictly less than the current length.
    #[display(fmt="Index {} is too big, array has {} elements.", index, length)]
    IndexOutOfRange {
        /// The rejected index.
        index  : usize,
        /// Length of the buffer at the time of the access.
        length : usize,
    },
    /// The supplied data does not fit the element kind, or the arguments are inconsistent.
    #[display(fmt="Invalid argument: {}", reason)]
    InvalidArgument {
        /// Human readable description of the problem.
        reason : String,
    },
}

impl Error {
    /// Constructor of `Error::InvalidArgument`.
    pub fn invalid_argument(reason:impl Into<String>) -> Self {
        let reason = reason.into();
        Self::InvalidArgument {reason}
    }
}

/// Result of a buffer operation.
pub type Result<T> = std::result::Result<T,Error>;



// ==============
// === assert ===
// ==============

/// Fails with the error produced by `on_fail` when `condition` does not hold. The error is built
/// lazily, `on_fail` is not called on success.
pub fn assert<F:FnOnce() -> Error>(condition:bool, on_fail:F) -> Result<()> {
    if condition { Ok(()) } else { Err(on_fail()) }
}



// =============
// === Tests ===
// =============
