//! Common imports shared by every crate of the workspace. Use it as `use numbuf_prelude::*;`.

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod clone;

pub use clone::*;

pub use core::fmt::Debug;
pub use derivative::Derivative;
pub use derive_more::*;
pub use failure::Fail;
pub use itertools::Itertools;
pub use shrinkwraprs::Shrinkwrap;
pub use std::cell::Ref;
pub use std::cell::RefCell;
pub use std::convert::TryFrom;
pub use std::fmt::Display;
pub use std::rc::Rc;
pub use std::rc::Weak;



// ===========
// === Str ===
// ===========

/// Anything that can be viewed as a string slice. Used for names and paths.
pub trait Str: AsRef<str> + Into<String> {}
impl<T: AsRef<str> + Into<String>> Str for T {}



// ===============
// === default ===
// ===============

/// Shorter alias for `Default::default()`.
pub fn default<T:Default>() -> T {
    Default::default()
}
