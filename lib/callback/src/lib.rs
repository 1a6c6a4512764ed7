//! Callback registries. A registry keeps an ordered list of callbacks and calls all of them when
//! an event is dispatched. Registering a callback returns a `Handle`; the callback stays registered
//! as long as the handle is alive.

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

use numbuf_prelude::*;

use std::fmt;



// ==============
// === Handle ===
// ==============

/// Subscription handle. Dropping it (or passing it to `Registry1::unsubscribe`) removes the
/// associated callback from its registry.
#[derive(Debug,Default)]
pub struct Handle {
    rc: Rc<()>
}

impl Handle {
    /// Create a guard which tells whether this handle is still alive.
    pub fn guard(&self) -> Guard {
        let weak = Rc::downgrade(&self.rc);
        Guard {weak}
    }

    /// Keep the callback registered for the whole lifetime of its registry.
    pub fn forget(self) {
        std::mem::forget(self)
    }
}

/// Weak counterpart of `Handle`.
#[derive(Clone,Debug)]
pub struct Guard {
    weak: Weak<()>
}

impl Guard {
    /// Checks whether the handle was not dropped yet.
    pub fn exists(&self) -> bool {
        self.weak.upgrade().is_some()
    }
}



// =================
// === Registry1 ===
// =================

/// Callback accepting a single argument by reference.
pub type Callback1<T> = Rc<dyn Fn(&T)>;

/// Registry of callbacks accepting one argument. Dispatching is synchronous and calls every
/// subscriber in the subscription order. All methods take `&self`, so callbacks are free to
/// subscribe or unsubscribe other callbacks (including themselves) while being dispatched to.
#[derive(Derivative)]
#[derivative(Default(bound=""))]
pub struct Registry1<T> {
    callbacks: RefCell<Vec<(Guard,Callback1<T>)>>
}

impl<T> Registry1<T> {
    /// Constructor.
    pub fn new() -> Self {
        default()
    }

    /// Registers a new callback. It will be called on every `dispatch` until the returned handle
    /// is dropped. Callbacks of already dropped handles are removed first.
    pub fn add<F:Fn(&T)+'static>(&self, callback:F) -> Handle {
        self.drop_orphaned_callbacks();
        let handle = Handle::default();
        let guard  = handle.guard();
        self.callbacks.borrow_mut().push((guard,Rc::new(callback)));
        handle
    }

    /// Removes the callback associated with the handle.
    pub fn unsubscribe(&self, handle:Handle) {
        drop(handle);
        self.drop_orphaned_callbacks();
    }

    /// Calls every callback subscribed at the time of the call with the provided value. A callback
    /// unsubscribed by an earlier callback of the same dispatch is skipped.
    pub fn dispatch(&self, value:&T) {
        self.drop_orphaned_callbacks();
        let callbacks = self.callbacks.borrow().clone();
        for (guard,callback) in callbacks {
            if guard.exists() {
                callback(value)
            }
        }
    }

    /// Number of alive subscriptions.
    pub fn len(&self) -> usize {
        self.callbacks.borrow().iter().filter(|(guard,_)| guard.exists()).count()
    }

    /// Checks whether there are no alive subscriptions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn drop_orphaned_callbacks(&self) {
        self.callbacks.borrow_mut().retain(|(guard,_)| guard.exists());
    }
}

impl<T> fmt::Debug for Registry1<T> {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"Registry1({} callbacks)",self.len())
    }
}



// =============
// === Tests ===
// =============
