//! Cloning of shared handles.

use std::rc::Rc;



// ================
// === CloneRef ===
// ================

/// Clone for internal-mutable structures. This trait can be implemented only if mutating one
/// structure will be reflected in all of its clones. Please note that it does not mean that all the
/// fields needs to provide internal mutability as well. For example, a structure can remember it's
/// creation time and store it as `f32`. As long as it cannot be mutated, the structure can
/// implement `CloneRef`.
pub trait CloneRef: Sized + Clone {
    /// Clones the handle, not the data it points to.
    fn clone_ref(&self) -> Self {
        self.clone()
    }
}

impl<T:?Sized> CloneRef for Rc<T> {}
impl           CloneRef for ()    {}
